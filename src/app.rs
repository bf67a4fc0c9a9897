//! The application definition and top-level dispatch.

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use thiserror::Error;

use crate::args::split_args;
use crate::command::Registry;
use crate::help::{command_help, help, version, HelpError};

/// Errors returned by [`App::run`].
#[derive(Debug, Error)]
pub enum RunError {
    /// The program name would garble usage lines and shell examples.
    #[error("program name ({0:?}) must not contain spaces, try renaming the binary")]
    InvalidProgramName(String),

    /// The first token did not match any registered command.
    #[error("'{command}' is not a {program} command. See '{program} --help'.")]
    UnknownCommand { command: String, program: String },

    /// The matched command has no action.
    #[error("not implemented")]
    NotImplemented,

    /// The help command rejected its arguments.
    #[error(transparent)]
    Help(#[from] HelpError),

    /// The invoked command action failed; its error passes through
    /// verbatim.
    #[error(transparent)]
    Command(#[from] anyhow::Error),

    /// The output sink could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// An application definition: the program's identity, its help framing,
/// and the list of commands a user may call.
///
/// Only `commands` does anything on its own. Every other field is
/// optional, but if set it is used to populate the output of the
/// built-in `--help`, `--version`, and `help` commands.
#[derive(Debug, Default)]
pub struct App {
    /// Name of the program, for help text and command-line examples.
    /// This must be a valid filename on every target system and MUST NOT
    /// CONTAIN SPACES. When left empty it is derived from the program
    /// path's base name at dispatch time, which also tracks renamed
    /// binaries.
    pub name: String,

    /// Version displayed when the program is invoked with `--version`.
    pub version: String,

    /// Arbitrary text displayed above the command list when the user
    /// invokes `--help` or runs the program without arguments.
    ///
    /// A great place to direct users to an introductory help topic, an
    /// installation or configuration guide, or other setup instructions.
    pub header: String,

    /// Arbitrary text displayed below the command list. A good place for
    /// license and copyright information, bug report or support links,
    /// the project homepage, etc.
    pub footer: String,

    /// Commands are invoked by their map key.
    pub commands: Registry,
}

impl App {
    pub fn new() -> App {
        App::default()
    }

    /// Dispatch one invocation.
    ///
    /// `argv` is the process argument vector excluding the program path;
    /// its first token selects the command. `program_path` is used only
    /// to derive a default `name`. Rendered help or version text is
    /// written to `out`; errors are returned, never printed.
    ///
    /// `--version` and `help` are only recognized in the command
    /// position, so commands are free to accept them as arguments
    /// without collisions.
    ///
    /// All commands must be registered before `run` is called. Modifying
    /// the `App` or its commands afterwards produces undefined behavior.
    ///
    /// # Panics
    ///
    /// Panics if a registered command name contains a space, tab, or
    /// newline. That is a programmer error the end user has no way to
    /// fix, so it halts instead of returning.
    pub fn run<W: Write>(
        &mut self,
        program_path: &str,
        argv: &[String],
        out: &mut W,
    ) -> Result<(), RunError> {
        let (command_name, rest) = split_args(argv);

        // Default the name from the binary in case the caller forgot to
        // set one.
        if self.name.is_empty() {
            self.name = Path::new(program_path)
                .file_name()
                .map(|base| base.to_string_lossy().into_owned())
                .unwrap_or_default();
        }

        // Whitespace in names breaks usage lines and shell examples. To
        // stay permissive with UTF-8 names nothing else is validated.
        if self.name.contains([' ', '\n', '\t']) {
            // The user can fix this by renaming the binary, so return an
            // error instead of panicking.
            return Err(RunError::InvalidProgramName(self.name.clone()));
        }
        for name in self.commands.keys() {
            assert!(
                !name.contains([' ', '\n', '\t']),
                "command names ({name:?}) must not contain spaces"
            );
        }

        match command_name {
            "" | "--help" => {
                write!(out, "{}", command_help(self))?;
                Ok(())
            }
            "--version" => {
                writeln!(out, "{}", version(self))?;
                Ok(())
            }
            "help" => {
                let page = help(self, rest)?;
                write!(out, "{page}")?;
                Ok(())
            }
            _ => {
                // Help-only entries are topics, not commands, so the
                // lookup treats them as absent.
                let command = self
                    .commands
                    .get(command_name)
                    .filter(|command| !command.help_only)
                    .ok_or_else(|| RunError::UnknownCommand {
                        command: command_name.to_string(),
                        program: self.name.clone(),
                    })?;

                let action = command.action.as_ref().ok_or(RunError::NotImplemented)?;
                action(rest)?;
                Ok(())
            }
        }
    }

    /// Dispatch using the ambient process arguments, writing help and
    /// version text to stdout. This is the only place the library reads
    /// process-wide state; everything else goes through [`App::run`].
    pub fn run_from_env(&mut self) -> Result<(), RunError> {
        let argv: Vec<String> = std::env::args().collect();
        let (program_path, rest) = match argv.split_first() {
            Some((first, rest)) => (first.as_str(), rest),
            None => ("", &argv[..]),
        };

        let stdout = io::stdout();
        self.run(program_path, rest, &mut stdout.lock())
    }
}

/// Write the error to stderr and halt the process with exit status 1.
///
/// Intended for `main` to report errors returned from [`App::run`]:
///
/// ```no_run
/// use cmdkit::{exit_with_error, App};
///
/// let mut app = App::new();
/// if let Err(err) = app.run_from_env() {
///     exit_with_error(err);
/// }
/// ```
pub fn exit_with_error(err: impl Display) -> ! {
    eprintln!("error: {err}");
    process::exit(1)
}
