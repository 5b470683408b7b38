use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, extract::extract, init::init},
    exit_status::ExitStatus,
};

/// Dispatch to the appropriate command handler based on the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
