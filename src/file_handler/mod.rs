//! File handler module for Answer Finder
//!
//! Handles all file system access:
//! - Ensuring the answers directory exists at startup
//! - Listing answer files by extension
//! - Loading and cleaning answer file content

pub mod io;
pub mod scanner;

pub use io::*;
pub use scanner::*;
