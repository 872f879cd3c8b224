//! Window chrome controller
//!
//! The native frame is disabled, so the title bar buttons drive the host
//! window directly. Intents are fire-and-forget: maximize is sent as a
//! toggle and the host applies it against its own maximized state, which
//! also restores the pre-maximize bounds.

/// Button intents from the custom title bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeIntent {
    Close,
    Minimize,
    ToggleMaximize,
    /// Title bar pressed; start an interactive move
    Drag,
}

/// Commands sent to the host window manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    Quit,
    Minimize,
    ToggleMaximize,
    Drag,
}

/// Title bar state
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowChrome {
    /// Expected maximized state; only drives the button icon
    maximized: bool,
}

impl WindowChrome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Command for a button intent
    pub fn command_for(&mut self, intent: ChromeIntent) -> WindowCommand {
        match intent {
            ChromeIntent::Close => WindowCommand::Quit,
            ChromeIntent::Minimize => WindowCommand::Minimize,
            ChromeIntent::ToggleMaximize => {
                self.maximized = !self.maximized;
                WindowCommand::ToggleMaximize
            }
            ChromeIntent::Drag => WindowCommand::Drag,
        }
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Icon name for the maximize button
    pub fn maximize_icon(&self) -> &'static str {
        if self.is_maximized() {
            "window-restore-symbolic"
        } else {
            "window-maximize-symbolic"
        }
    }
}
