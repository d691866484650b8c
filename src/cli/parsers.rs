//! The place where the CLI argument parser and the REPL command parser are
//! defined.
//!
//! REPL command syntax:
//!
//! - insert <id> <name> <email> <age>
//! - get <index>
//! - count | list | dump | archive
//! - history [n]
//! - help | exit
//!
//! Values holding spaces can be wrapped in double quotes, e.g.
//! `insert 1 "First User" first@example.com 21`.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "slate")]
#[command(about = "A fixed-capacity record table", long_about = None)]
pub struct CliParser {
    /// Table file to load on start and archive to.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Ignore any configured table file and keep the table in memory.
    #[arg(long, conflicts_with = "file")]
    pub in_memory: bool,

    /// Do not archive the table when the session ends.
    #[arg(long)]
    pub no_archive_on_exit: bool,
}

#[derive(Debug, PartialEq)]
pub enum ReplCommand {
    Insert {
        id: u32,
        name: String,
        email: String,
        age: u32,
    },
    Get(usize),
    Count,
    List,
    Dump,
    Archive,
    History(Option<usize>),
    Help,
    Exit,
}

pub fn parse_command(line: &str) -> Result<ReplCommand, String> {
    //! Parse a single REPL line into a [`ReplCommand`].
    //!
    //! Returns a plain error message when the line is not understood.

    let tokens = tokenize(line)?;
    let Some((keyword, args)) = tokens.split_first() else {
        return Err("empty command".to_string());
    };

    let command = match (keyword.to_ascii_lowercase().as_str(), args) {
        ("insert", [id, name, email, age]) => ReplCommand::Insert {
            id: parse_number(id, "id")?,
            name: name.clone(),
            email: email.clone(),
            age: parse_number(age, "age")?,
        },
        ("insert", _) => {
            return Err("usage: insert <id> <name> <email> <age>".to_string());
        }
        ("get", [index]) => ReplCommand::Get(parse_number(index, "index")?),
        ("get", _) => return Err("usage: get <index>".to_string()),
        ("count", []) => ReplCommand::Count,
        ("list", []) => ReplCommand::List,
        ("dump", []) => ReplCommand::Dump,
        ("archive", []) => ReplCommand::Archive,
        ("history", []) => ReplCommand::History(None),
        ("history", [n]) => ReplCommand::History(Some(parse_number(n, "n")?)),
        ("help", []) => ReplCommand::Help,
        ("exit", []) => ReplCommand::Exit,
        (other, _) => return Err(format!("unknown command '{}'", other)),
    };

    Ok(command)
}

fn parse_number<T: std::str::FromStr>(value: &str, argument: &str) -> Result<T, String> {
    value
        .parse::<T>()
        .map_err(|_| format!("invalid value {}: not a valid {}", value, argument))
}

fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = vec![];
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.trim().chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    if has_token {
        tokens.push(current);
    }

    Ok(tokens)
}
