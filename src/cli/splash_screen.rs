//! The module contains function for displaying CLI splash screen.
//!
//! - Title
//! - Short Description
//! - Version Information
//! - Table Limits (capacity and on-disk record size)

use colored::*;

use crate::cli::colors::SLATE_BLUE;
use crate::persistence::MAX_TABLE_SIZE;
use crate::persistence::codec::RECORD_SIZE;

pub fn splash_screen() {
    show_splash_screen();
    show_version_info();
    show_table_limits();
}

fn show_splash_screen() {
    print!(
        r#"
    {}
        "#,
        r"
    ███████╗██╗      █████╗ ████████╗███████╗
    ██╔════╝██║     ██╔══██╗╚══██╔══╝██╔════╝
    ███████╗██║     ███████║   ██║   █████╗
    ╚════██║██║     ██╔══██║   ██║   ██╔══╝
    ███████║███████╗██║  ██║   ██║   ███████╗
    ╚══════╝╚══════╝╚═╝  ╚═╝   ╚═╝   ╚══════╝
        "
        .color(SLATE_BLUE)
    )
}

fn show_version_info() {
    println!(
        r"
    {}

    Version {}
    Authored by {}
        ",
        env!("CARGO_PKG_DESCRIPTION").color(SLATE_BLUE),
        env!("CARGO_PKG_VERSION").color(SLATE_BLUE).italic(),
        env!("CARGO_PKG_AUTHORS").color(SLATE_BLUE).italic(),
    )
}

fn show_table_limits() {
    println!(
        "    Holds up to {} records of {} bytes each.\n",
        MAX_TABLE_SIZE.to_string().color(SLATE_BLUE),
        RECORD_SIZE.to_string().color(SLATE_BLUE),
    )
}
