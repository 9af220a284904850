use anyhow::Result;
use std::process::ExitCode;

mod cli;
mod config;
mod views;

fn main() -> Result<ExitCode> {
    cli::run()
}
