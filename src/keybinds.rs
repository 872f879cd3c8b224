//! Keyboard shortcut handling
//!
//! Escape clears the search, Ctrl+Q quits, and the developer-tools
//! shortcut (Ctrl+Shift+I) is swallowed.

use cosmic::iced::keyboard::{self, Key, Modifiers};
use cosmic::iced::{event, Event, Subscription};
use cosmic::iced_futures::event::listen_raw;

use crate::chrome::ChromeIntent;
use crate::message::{ChromeMessage, Message, SearchMessage};

/// Shortcut actions
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    ClearSearch,
    Quit,
    /// Consumed without effect
    Blocked,
}

impl Action {
    /// Convert action to application message
    pub fn to_message(self) -> Message {
        match self {
            Action::ClearSearch => Message::Search(SearchMessage::Clear),
            Action::Quit => Message::Chrome(ChromeMessage::Intent(ChromeIntent::Close)),
            Action::Blocked => Message::None,
        }
    }
}

/// Match a key press against the shortcut table
pub fn action_for(key: &Key, modifiers: Modifiers) -> Option<Action> {
    match key {
        Key::Character(c) if modifiers.control() && !modifiers.alt() => {
            match (modifiers.shift(), c.to_lowercase().as_str()) {
                (true, "i") => Some(Action::Blocked),
                (false, "q") => Some(Action::Quit),
                _ => None,
            }
        }
        Key::Named(keyboard::key::Named::F12) => Some(Action::Blocked),
        Key::Named(keyboard::key::Named::Escape) => Some(Action::ClearSearch),
        _ => None,
    }
}

/// Keyboard shortcuts subscription
///
/// Listens for raw keyboard events so the developer-tools shortcut is
/// caught even while the search input has focus.
pub fn keyboard_shortcuts_subscription() -> Subscription<Message> {
    listen_raw(|event, status, _| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            let action = action_for(&key, modifiers)?;
            if action != Action::Blocked && status != event::Status::Ignored {
                return None;
            }
            Some(action.to_message())
        }
        _ => None,
    })
}
