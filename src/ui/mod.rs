//! UI module for Answer Finder
//!
//! Contains all user interface components:
//! - Main window layout
//! - Custom title bar (window chrome)
//! - Content area with clickable answer lines

mod content_view;
mod main_window;
mod title_bar;

use crate::chrome::WindowChrome;
use crate::message::Message;
use crate::state::AppState;
use cosmic::Element;

/// Build the main application view
pub fn view<'a>(state: &'a AppState, chrome: &WindowChrome) -> Element<'a, Message> {
    main_window::view(state, chrome)
}
