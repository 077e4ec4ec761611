use std::{io::Write, process::ExitCode};

use clap::Parser;
use env_logger::{Builder, Env};

use anton_gen::{cli::Cli, config::LOG_PREFIX};

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{LOG_PREFIX}: {}", record.args()))
        .init();

    match Cli::parse().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{LOG_PREFIX}: {e:#}");
            ExitCode::FAILURE
        }
    }
}
