//! This module is where the REPL commands are run against a [`Session`].
//!
//! Slate command line syntax:
//!
//! - slate --help            | Command Line Help
//! - slate                   | Run the REPL on the configured table.
//! - slate --file users.db   | Run the REPL on `users.db`.
//! - slate --in-memory       | Run the REPL without any table file.
//!
//! The commands available inside the REPL are listed in [`super::parsers`].

use std::fmt::Display;

use crate::cli::messages::{highlight_argument, system_message};
use crate::cli::parsers::ReplCommand;
use crate::persistence::{Record, TableError};
use crate::sessions::session::Session;

/// The executor that runs one parsed [`ReplCommand`] against the session.
///
/// `help` and `exit` are handled by the REPL loop itself and never reach the
/// executor.
pub struct CommandExecutor {
    command: ReplCommand,
}

/// Whatever a command produced that should be shown to the user, plus the
/// number of records it touched.
pub struct CommandResult {
    pub output: Option<String>,
    pub n_records_processed: Option<usize>,
}

impl Display for CommandResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.output.as_deref().unwrap_or_default())
    }
}

impl CommandExecutor {
    pub fn new(command: ReplCommand) -> CommandExecutor {
        CommandExecutor { command }
    }

    pub fn execute(self, session: &mut Session) -> Result<CommandResult, String> {
        //! Run the command and return its result, or the error already
        //! formatted as a system message.

        self.run(session)
            .map_err(|e| system_message("slate", highlight_argument(&e.to_string())))
    }

    fn run(self, session: &mut Session) -> Result<CommandResult, TableError> {
        let result = match self.command {
            ReplCommand::Insert {
                id,
                name,
                email,
                age,
            } => {
                let record = Record::new(id, &name, &email, age)?;
                let index = session.table_mut().append(record)?;
                CommandResult {
                    output: Some(format!("stored at index {}", index)),
                    n_records_processed: Some(1),
                }
            }
            ReplCommand::Get(index) => {
                let record = session.table().fetch(index)?;
                CommandResult {
                    output: Some(record.to_string()),
                    n_records_processed: Some(1),
                }
            }
            ReplCommand::Count => {
                let table = session.table();
                CommandResult {
                    output: Some(format!("{} / {}", table.len(), table.capacity())),
                    n_records_processed: None,
                }
            }
            ReplCommand::List => CommandResult {
                output: Some(session.table().to_string()),
                n_records_processed: Some(session.table().len()),
            },
            ReplCommand::Dump => {
                let dump = serde_json::to_string_pretty(session.table().records())
                    .map_err(|e| TableError::InvalidArgument(e.to_string()))?;
                CommandResult {
                    output: Some(dump),
                    n_records_processed: Some(session.table().len()),
                }
            }
            ReplCommand::Archive => {
                let table = session.table_mut();
                if !table.has_backing_file() {
                    return Ok(CommandResult {
                        output: Some("no table file, nothing archived".to_string()),
                        n_records_processed: Some(0),
                    });
                }
                let n_archived = table.archive()?;
                CommandResult {
                    output: None,
                    n_records_processed: Some(n_archived),
                }
            }
            ReplCommand::History(n_prev) => CommandResult {
                output: Some(
                    session
                        .command_history(n_prev)
                        .iter()
                        .enumerate()
                        .map(|(index, command)| format!("{:3} | {}", index, command))
                        .collect::<Vec<String>>()
                        .join("\n"),
                ),
                n_records_processed: None,
            },
            ReplCommand::Help | ReplCommand::Exit => CommandResult {
                output: None,
                n_records_processed: None,
            },
        };

        Ok(result)
    }
}
