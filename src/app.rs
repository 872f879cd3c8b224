//! Main application module implementing the Cosmic Application trait
//!
//! Routes categorized messages to their handlers. Searches run
//! synchronously inside `update`, so results replace the previous ones
//! without any intermediate loading state.

use crate::chrome::{WindowChrome, WindowCommand};
use crate::clipboard;
use crate::config::{Config, APP_ID};
use crate::file_handler::ensure_answers_dir;
use crate::keybinds::keyboard_shortcuts_subscription;
use crate::message::{ChromeMessage, ClipboardMessage, Message, SearchMessage, SystemMessage};
use crate::search::SearchController;
use crate::state::AppState;
use crate::ui;

use cosmic::app::{Core, Task};
use cosmic::iced::window;
use cosmic::{Application, Element};
use std::time::Duration;

/// Answer Finder application
pub struct AnswerFinder {
    /// libCosmic core reference
    core: Core,

    /// Application state
    pub state: AppState,

    /// User configuration
    pub config: Config,

    /// Lister and loader bound to the answers directory
    controller: SearchController,

    /// Custom title bar state
    chrome: WindowChrome,
}

/// Application flags passed during initialization
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Configuration with the answers directory already resolved
    pub config: Config,
}

impl Application for AnswerFinder {
    /// Executor for async tasks
    type Executor = cosmic::executor::Default;

    /// Application flags
    type Flags = Flags;

    /// Application message type
    type Message = Message;

    /// Application ID following reverse-DNS convention
    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Initialize the application
    fn init(mut core: Core, flags: Self::Flags) -> (Self, Task<Self::Message>) {
        // The title bar is drawn by ui::title_bar
        core.window.show_headerbar = false;

        let config = flags.config;
        let controller = SearchController::from_config(&config.answers);

        let mut app = Self {
            core,
            state: AppState::new(),
            config,
            controller,
            chrome: WindowChrome::new(),
        };

        let task = match ensure_answers_dir(&app.config.answers.directory) {
            Ok(()) => {
                log::info!(
                    "Serving answers from {}",
                    app.config.answers.directory.display()
                );
                Task::none()
            }
            Err(e) => {
                log::error!("{}: {}", e, e.detail());
                app.state.set_fatal(e.detail());
                app.schedule_fatal_exit()
            }
        };

        (app, task)
    }

    /// Handle incoming messages
    fn update(&mut self, message: Self::Message) -> Task<Self::Message> {
        match message {
            Message::Search(msg) => self.handle_search_message(msg),
            Message::Chrome(msg) => self.handle_chrome_message(msg),
            Message::Clipboard(msg) => self.handle_clipboard_message(msg),
            Message::System(msg) => self.handle_system_message(msg),
            Message::None => Task::none(),
        }
    }

    /// Render the application view
    fn view(&self) -> Element<'_, Self::Message> {
        ui::view(&self.state, &self.chrome)
    }

    /// Handle subscription events
    fn subscription(&self) -> cosmic::iced::Subscription<Self::Message> {
        keyboard_shortcuts_subscription()
    }
}

impl AnswerFinder {
    /// Helper to wrap message in cosmic Action
    fn app_message(msg: Message) -> cosmic::Action<Message> {
        cosmic::Action::App(msg)
    }

    /// Quit after the configured delay
    fn schedule_fatal_exit(&self) -> Task<Message> {
        let delay = Duration::from_secs(self.config.window.fatal_exit_delay);
        Task::perform(
            async move {
                tokio::time::sleep(delay).await;
            },
            |_| Self::app_message(Message::System(SystemMessage::FatalTimeout)),
        )
    }

    /// Handle search input
    fn handle_search_message(&mut self, msg: SearchMessage) -> Task<Message> {
        if self.state.is_fatal() {
            return Task::none();
        }

        match msg {
            SearchMessage::QueryChanged(query) => {
                let outcome = self.controller.search(&query);
                self.state.apply_search(query, outcome);
            }

            SearchMessage::Clear => {
                self.state.clear_search();
            }
        }
        Task::none()
    }

    /// Handle title bar intents
    fn handle_chrome_message(&mut self, msg: ChromeMessage) -> Task<Message> {
        match msg {
            ChromeMessage::Intent(intent) => {
                let command = self.chrome.command_for(intent);
                self.window_task(command)
            }
        }
    }

    /// Deliver a command to the host window manager
    fn window_task(&self, command: WindowCommand) -> Task<Message> {
        if command == WindowCommand::Quit {
            return Task::done(Self::app_message(Message::System(SystemMessage::Quit)));
        }

        let Some(id) = self.core.main_window_id() else {
            log::warn!("No main window for {:?}", command);
            return Task::none();
        };

        match command {
            WindowCommand::Minimize => window::minimize(id, true),
            WindowCommand::ToggleMaximize => window::toggle_maximize(id),
            WindowCommand::Drag => window::drag(id),
            WindowCommand::Quit => Task::none(),
        }
    }

    /// Handle clipboard-related messages
    fn handle_clipboard_message(&mut self, msg: ClipboardMessage) -> Task<Message> {
        match msg {
            ClipboardMessage::CopyLine(number) => {
                if let Some(text) = self.state.mark_copied(number) {
                    match clipboard::copy_text(&text) {
                        Ok(()) => log::debug!("Copied line {} to clipboard", number),
                        Err(e) => log::error!("Failed to copy to clipboard: {}", e),
                    }
                }
            }
        }
        Task::none()
    }

    /// Handle system-related messages
    fn handle_system_message(&mut self, msg: SystemMessage) -> Task<Message> {
        match msg {
            SystemMessage::FatalTimeout => {
                log::info!("Quitting after fatal startup error");
                Task::done(Self::app_message(Message::System(SystemMessage::Quit)))
            }

            SystemMessage::Quit => {
                log::info!("Exiting Answer Finder");
                std::process::exit(0);
            }
        }
    }
}
