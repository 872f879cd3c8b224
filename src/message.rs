//! Application message types
//!
//! Defines all messages that can be sent to the application's update function.
//! Messages are organized by category for clear handling and routing.

use crate::chrome::ChromeIntent;

/// Main application message enum
#[derive(Debug, Clone)]
pub enum Message {
    /// Search input
    Search(SearchMessage),

    /// Custom title bar buttons
    Chrome(ChromeMessage),

    /// Clipboard operations
    Clipboard(ClipboardMessage),

    /// System/window events
    System(SystemMessage),

    /// No-op message (for subscriptions that don't need action)
    None,
}

/// Search-related messages
#[derive(Debug, Clone)]
pub enum SearchMessage {
    /// Search input text changed
    QueryChanged(String),

    /// Empty the search input
    Clear,
}

/// Window chrome messages
#[derive(Debug, Clone)]
pub enum ChromeMessage {
    /// A title bar button was pressed
    Intent(ChromeIntent),
}

/// Clipboard-related messages
#[derive(Debug, Clone)]
pub enum ClipboardMessage {
    /// Copy the display line with this number
    CopyLine(usize),
}

/// System-level messages
#[derive(Debug, Clone)]
pub enum SystemMessage {
    /// Quit the application
    Quit,

    /// The fatal startup delay elapsed
    FatalTimeout,
}
