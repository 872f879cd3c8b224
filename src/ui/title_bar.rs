//! Custom title bar
//!
//! Replaces the native header bar: the title area starts a window drag,
//! and three buttons send minimize, maximize/restore and close intents.

use crate::chrome::{ChromeIntent, WindowChrome};
use crate::i18n;
use crate::message::{ChromeMessage, Message};
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, container, icon, mouse_area, text, Row};
use cosmic::Element;

/// Build the title bar
pub fn view_title_bar<'a>(chrome: &WindowChrome) -> Element<'a, Message> {
    let drag_area = mouse_area(
        container(text(i18n::window_title()).size(14))
            .width(Length::Fill)
            .padding([6, 12]),
    )
    .on_press(intent(ChromeIntent::Drag));

    Row::new()
        .push(drag_area)
        .push(chrome_button("window-minimize-symbolic", ChromeIntent::Minimize))
        .push(chrome_button(chrome.maximize_icon(), ChromeIntent::ToggleMaximize))
        .push(chrome_button("window-close-symbolic", ChromeIntent::Close))
        .spacing(4)
        .padding([0, 4])
        .align_y(Alignment::Center)
        .into()
}

fn chrome_button<'a>(icon_name: &'static str, chrome_intent: ChromeIntent) -> Element<'a, Message> {
    button::icon(icon::from_name(icon_name))
        .on_press(intent(chrome_intent))
        .padding(4)
        .into()
}

fn intent(chrome_intent: ChromeIntent) -> Message {
    Message::Chrome(ChromeMessage::Intent(chrome_intent))
}
