//! State management module for Answer Finder
//!
//! This module contains all application state types organized by concern:
//! - `app_state`: Root application state container
//! - `surface_state`: Content area visibility and content

mod app_state;
mod surface_state;

pub use app_state::*;
pub use surface_state::*;
