//! Answer Finder - search a folder of answer files and copy their lines
//!
//! Entry point for the application. Handles CLI argument parsing,
//! logging initialization, configuration and application bootstrap.

mod app;
mod chrome;
mod clipboard;
mod config;
mod error;
mod file_handler;
mod i18n;
mod keybinds;
mod message;
mod search;
mod state;
mod ui;
mod utils;

use anyhow::Context;
use app::{AnswerFinder, Flags};
use config::Config;
use std::path::PathBuf;

/// Application name for logging
const APP_NAME: &str = "answer-finder";

/// Command line options
#[derive(Debug, Default)]
struct CliArgs {
    /// Override for the answers directory
    answers_dir: Option<PathBuf>,

    /// Explicit configuration file
    config_file: Option<PathBuf>,
}

fn main() -> cosmic::iced::Result {
    init_logging();
    i18n::init();

    log::info!("Starting Answer Finder");

    let args = parse_args();
    let config = load_config(&args).unwrap_or_else(|e| {
        log::warn!("{:#}; using default configuration", e);
        let mut config = Config::default();
        resolve_answers_dir(&mut config, &args);
        config
    });

    let window = &config.window;
    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(window.width, window.height))
        .size_limits(
            cosmic::iced::Limits::NONE
                .min_width(window.min_width)
                .min_height(window.min_height),
        )
        .client_decorations(true);

    cosmic::app::run::<AnswerFinder>(settings, Flags { config })
}

/// Initialize the logging system
fn init_logging() {
    // Set default log level if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,answer_finder=debug");
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}

/// Load the configuration file and apply command line overrides
fn load_config(args: &CliArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config_file {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("reading configuration {}", path.display()))?,
        None => Config::load().context("reading user configuration")?,
    };
    resolve_answers_dir(&mut config, args);
    Ok(config)
}

/// Apply `--answers-dir` and resolve relative paths against the working directory
fn resolve_answers_dir(config: &mut Config, args: &CliArgs) {
    if let Some(dir) = &args.answers_dir {
        config.answers.directory = dir.clone();
    }
    match std::env::current_dir() {
        Ok(cwd) => config.answers.resolve(&cwd),
        Err(e) => log::warn!("Could not determine working directory: {}", e),
    }
}

/// Parse command line arguments
fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-d" | "--answers-dir" => {
                if i + 1 < args.len() {
                    cli.answers_dir = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                } else {
                    eprintln!("Error: --answers-dir requires a path argument");
                    std::process::exit(1);
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    cli.config_file = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                } else {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
            }
            arg => {
                eprintln!("Unknown option: {}", arg);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Print help message
fn print_help() {
    println!(
        r#"Answer Finder - search answer files by name

USAGE:
    answer-finder [OPTIONS]

OPTIONS:
    -h, --help              Show this help message
    -v, --version           Show version information
    -d, --answers-dir DIR   Folder of .txt answer files (default: ./Answers)
    -c, --config FILE       Read configuration from FILE

KEYBOARD SHORTCUTS:
    Escape                  Clear the search
    Ctrl+Q                  Quit
"#
    );
}

/// Print version information
fn print_version() {
    println!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"));
}
