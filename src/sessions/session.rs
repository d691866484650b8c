//! The only point of truth for everything related to the current REPL
//! session: the open [`RecordTable`] and the command history of the user.
//!
//! A session owns its table. When the session ends the table is archived
//! (if it is bound to a file and the configuration asks for it) and then
//! closed.

use std::{fmt::Display, time::SystemTime};

use chrono::{DateTime, Local};

use crate::persistence::{RecordTable, TableError};

struct CommandHistory {
    command: String,
    command_time: SystemTime,
}

impl CommandHistory {
    pub fn command_time_string(&self) -> String {
        let datetime: DateTime<Local> = self.command_time.into();
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl Display for CommandHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.command_time_string(), self.command)
    }
}

pub struct Session {
    command_history: Vec<CommandHistory>,
    start_time: SystemTime,
    table: RecordTable,
    archive_on_exit: bool,
}

impl Session {
    pub fn client(table: RecordTable, archive_on_exit: bool) -> Session {
        //! Returns a new client session working on `table`.

        Session {
            command_history: vec![],
            start_time: SystemTime::now(),
            table,
            archive_on_exit,
        }
    }

    pub fn table(&self) -> &RecordTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut RecordTable {
        &mut self.table
    }

    pub fn add_to_command_history(&mut self, command: &str) {
        self.command_history.push(CommandHistory {
            command: command.to_string(),
            command_time: SystemTime::now(),
        });
    }

    pub fn start_time_string(&self) -> String {
        //! Convert the [`SystemTime`] object into a string representation
        //! to be more readable.

        let datetime: DateTime<Local> = self.start_time.into();
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn command_history(&self, n_prev: Option<usize>) -> Vec<String> {
        //! The previously invoked commands, most recent first.
        //! Use `n_prev` to limit the number of commands you get.

        let limit = n_prev.unwrap_or(self.command_history.len());

        self.command_history
            .iter()
            .rev()
            .take(limit)
            .map(|command| command.to_string())
            .collect()
    }

    pub fn get_last_command(&self, nth_back: usize) -> Option<&str> {
        //! Gets the `nth_back`th last command from the history.

        if nth_back == 0 {
            return None;
        }

        self.command_history
            .iter()
            .nth_back(nth_back - 1)
            .map(|cmd| cmd.command.as_str())
    }

    pub fn end(self) -> Result<usize, TableError> {
        //! Finish the session, archiving the table when configured to.
        //!
        //! Returns the number of records archived.

        let Session {
            mut table,
            archive_on_exit,
            ..
        } = self;

        let n_archived = if archive_on_exit { table.archive()? } else { 0 };
        table.close()?;

        Ok(n_archived)
    }
}
