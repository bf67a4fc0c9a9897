//! cmdkit - build verb-noun command-line interfaces without boilerplate.
//!
//! Programs built with this crate follow the style of git, docker, go,
//! vagrant, and other contemporary tools:
//!
//! ```text
//! program command arg1 arg2 arg3
//! ```
//!
//! The types here are designed to have safe defaults so you can leave
//! them empty, prototype a program quickly, and fill in details as you
//! go. A simple starting point:
//!
//! ```no_run
//! use cmdkit::{exit_with_error, App, Command, Registry};
//!
//! let mut commands = Registry::new();
//! commands.insert("go".to_string(), Command::default());
//!
//! let mut app = App {
//!     commands,
//!     ..App::default()
//! };
//!
//! if let Err(err) = app.run_from_env() {
//!     exit_with_error(err);
//! }
//! ```
//!
//! A program run without arguments displays command help, so this crate
//! is not well suited to building traditional unix tools like ls, top,
//! or grep. For interfaces like those, reach for an option parser
//! instead.

pub mod app;
pub mod args;
pub mod command;
pub mod format;
pub mod help;

pub use app::{exit_with_error, App, RunError};
pub use args::split_args;
pub use command::{sorted_names, Command, CommandAction, Registry};
pub use format::pad_right;
pub use help::{command_help, help, version, HelpError};
