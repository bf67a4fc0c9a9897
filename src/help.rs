//! Rendering of the command list, version line, and help topic pages.
//!
//! Everything here returns a `String` instead of printing, so output is
//! independently testable and the dispatcher decides where it goes.

use thiserror::Error;

use crate::app::App;
use crate::command::{list_width, sorted_names};
use crate::format::{footer_block, header_block, pad_right};

/// Errors from the built-in `help` command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HelpError {
    #[error("unknown help topic '{0}'")]
    UnknownTopic(String),

    #[error("too many arguments")]
    TooManyArguments,
}

/// Render the version line, without a trailing newline.
pub fn version(app: &App) -> String {
    if app.version.is_empty() {
        format!("{} version undefined", app.name)
    } else {
        format!("{} version {}", app.name, app.version)
    }
}

/// Render the command list page shown for `--help` or a bare invocation.
///
/// Hidden and help-only commands are skipped; the built-in `help`
/// command is always appended to the list.
pub fn command_help(app: &App) -> String {
    let names = sorted_names(&app.commands);
    let width = list_width(&app.commands);

    let mut output = header_block(&app.header);

    output.push_str(&format!(
        "usage: {} [--version] [--help] <command> [<args>]\n\nCommands\n\n",
        app.name
    ));

    for name in names {
        let command = &app.commands[name];
        if command.is_listed() {
            output.push_str(&format!(
                "  {} {}   {}\n",
                app.name,
                pad_right(name, width),
                command.summary
            ));
        }
    }
    output.push_str(&format!(
        "  {} {}   List help topics\n",
        app.name,
        pad_right("help", width)
    ));

    output.push_str(&footer_block(&app.footer));

    output
}

/// Render help output: the topic list when `args` is empty, or a single
/// topic page for `help <topic>`.
///
/// A topic attached to an ordinary command is marked `(command)` in the
/// list and titled `<topic> Command Help`; a help-only topic is listed
/// bare and titled `<topic> Help`.
pub fn help(app: &App, args: &[String]) -> Result<String, HelpError> {
    match args {
        [] => {
            let mut output = format!("usage: {} help <topic>\n\nHelp Topics\n\n", app.name);
            for topic in sorted_names(&app.commands) {
                let command = &app.commands[topic];
                if command.is_topic() {
                    if command.help_only {
                        output.push_str(&format!("  {topic}\n"));
                    } else {
                        output.push_str(&format!("  {topic} (command)\n"));
                    }
                }
            }
            Ok(output)
        }
        [topic] => {
            let command = app
                .commands
                .get(topic)
                .ok_or_else(|| HelpError::UnknownTopic(topic.clone()))?;

            let mut output = topic.clone();
            if !command.help_only {
                output.push_str(" Command");
            }
            output.push_str(" Help\n\n");
            output.push_str(&command.help);

            // Exactly one newline at end of output.
            if !command.help.ends_with('\n') {
                output.push('\n');
            }
            Ok(output)
        }
        _ => Err(HelpError::TooManyArguments),
    }
}
