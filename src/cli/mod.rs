use std::io::{self, BufRead, Write};

use colored::Colorize;
use log::{error, info};

use crate::{
    cli::{
        colors::SLATE_BLUE,
        commands::{CommandExecutor, CommandResult},
        messages::{highlight_argument, system_message, table_summary},
        parsers::{ReplCommand, parse_command},
    },
    config::SlateConfig,
    persistence::{RecordTable, TableError},
    sessions::session::Session,
};

mod colors;
mod commands;
mod messages;
pub mod parsers;
mod splash_screen;

const DEFAULT_LAST_COMMAND_DELIMITER: &str = "!";

const SLATE_ENGINE_COMMANDS_LIST: [(&str, &str); 11] = [
    ("insert", "insert <id> <name> <email> <age>, append a record"),
    ("get", "get <index>, show the record at a position"),
    ("count", "number of records held against the capacity"),
    ("list", "show every record held"),
    ("dump", "every record held as JSON"),
    ("archive", "write every record held to the table file"),
    ("!", "execute the last command, add more to go further back"),
    ("help", "list all available commands"),
    ("history", "list command history for this session"),
    ("exit", "archive (unless disabled) and leave"),
    ("quit", "same as exit"),
];

pub fn run_client(config: SlateConfig) -> Result<(), TableError> {
    //! Open the configured table, run the REPL on stdin until the user
    //! leaves, then end the session.

    splash_screen::splash_screen();

    let table = RecordTable::new(config.db_file.as_deref())?;
    println!("{}", system_message("info", table_summary(&table)));

    let mut session = Session::client(table, config.archive_on_exit);
    start_repl(&mut session, io::stdin().lock());

    let n_archived = session.end()?;
    info!("session ended, {} record(s) archived", n_archived);
    println!("Goodbye!");

    Ok(())
}

pub fn show_help() {
    println!(
        "{}",
        system_message(
            "info",
            format!(
                "Wrap values holding spaces in {}.",
                highlight_argument("double quotes")
            )
        )
    );

    println!();
    println!("{:10} {}", "COMMAND".color(SLATE_BLUE), "DETAILS");
    for (command, details) in SLATE_ENGINE_COMMANDS_LIST {
        println!("{:10} {}", command.color(SLATE_BLUE), details)
    }
}

fn start_repl<R: BufRead>(session: &mut Session, mut input: R) {
    println!(
        "{}",
        system_message(
            "system",
            format!(
                "Use '{}' to quit and '{}' to know all commands available.",
                highlight_argument("exit"),
                highlight_argument("help"),
            ),
        )
    );

    println!(
        "{}",
        system_message(
            "system",
            format!(
                "New session initiated at '{}'.",
                highlight_argument(&session.start_time_string())
            ),
        )
    );

    loop {
        println!();
        print!("{:6} > ", "slate".color(SLATE_BLUE).bold());
        if let Err(e) = io::stdout().flush() {
            error!("could not flush stdout: {}", e);
        }

        let mut buffer = String::new();
        match input.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                error!("could not read from stdin: {}", e);
                break;
            }
        }

        if buffer.trim().is_empty() {
            continue;
        }

        if buffer.starts_with(DEFAULT_LAST_COMMAND_DELIMITER) {
            let last = buffer.matches(DEFAULT_LAST_COMMAND_DELIMITER).count();

            match session.get_last_command(last) {
                Some(last_command) => buffer = last_command.to_string(),
                None => {
                    println!(
                        "{}",
                        system_message(
                            "system",
                            format!(
                                "No command {} steps back.",
                                highlight_argument(&last.to_string())
                            ),
                        )
                    );
                    continue;
                }
            }
        }

        session.add_to_command_history(buffer.trim());

        let command = match buffer.trim() {
            "quit" => ReplCommand::Exit,
            line => match parse_command(line) {
                Ok(command) => command,
                Err(message) => {
                    println!("{}", system_message("parser", message));
                    continue;
                }
            },
        };

        match command {
            ReplCommand::Help => show_help(),
            ReplCommand::Exit => break,
            command => match CommandExecutor::new(command).execute(session) {
                Ok(result) => show_result(result),
                Err(error) => println!("{}", error),
            },
        }
    }
}

fn show_result(result: CommandResult) {
    if let Some(n_records) = result.n_records_processed {
        println!(
            "{}",
            system_message("slate", format!("{} record(s) processed!", n_records))
        );
    }

    if result.output.is_some() {
        println!("{}", result)
    }
}
