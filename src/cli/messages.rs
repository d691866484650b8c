//! General message formatting functions for prettifying the CLI.
//! Includes basic utility functions such as:
//!
//! - Highlight Text (make the text slate blue but not bold)
//! - System message formatting functions that produce the same
//! format messages.
//! - A one line summary of the open table (file binding and fill level).

use colored::Colorize;

use crate::cli::colors::SLATE_BLUE;
use crate::persistence::RecordTable;

pub fn highlight_argument(argument: &str) -> String {
    //! Highlight a piece of text in the slate blue
    //! color to make it obvious.

    format!("{}", argument.color(SLATE_BLUE))
}

pub fn system_message(source_name: &str, message: String) -> String {
    //! Write a system message on the command line, properly
    //! formatted, according to the command line theme.
    //!
    //! Takes in a source name (like 'system') and the message as a
    //! formatted text; output of [`format!`].

    let source_formatted = format!("{:6}", source_name.color(SLATE_BLUE).bold());

    format!("[{}] {}", source_formatted, message)
}

pub fn table_summary(table: &RecordTable) -> String {
    //! Describe where the records of `table` live and how full it is.

    let fill = format!("{} / {}", table.len(), table.capacity());

    match table.path() {
        Some(path) => format!(
            "Table file '{}' opened, {} record(s) loaded.",
            highlight_argument(&path.display().to_string()),
            highlight_argument(&fill)
        ),
        None => format!(
            "No table file given, {} record(s) kept in memory only.",
            highlight_argument(&fill)
        ),
    }
}
