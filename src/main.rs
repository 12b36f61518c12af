use std::process::ExitCode;

use clap::Parser;
use sourcejoin::{cli::Cli, config::symbols_from_env, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config(symbols_from_env());

    if let Err(e) = run(&config) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
