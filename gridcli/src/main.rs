use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use gridlib::io::{fs, NetworkSpec, Scenario};

/// Print the given error message and exit with the given code.
macro_rules! fatal_error {
    ($code:expr, $($arg:tt)*) => {{
        eprintln!($($arg)*);
        std::process::exit($code)
    }};
}

mod commands;
use commands::Command;

/// Command line interface for the toy power grid.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    Args::parse().command.run();
}
