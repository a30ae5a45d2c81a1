//! CLI entry point for threadloom.

mod cli;
mod commands;
mod output;

use clap::Parser;
use threadloom_constant::app::VERSION;
use threadloom_observability::ObservabilityConfig;

use crate::cli::{Cli, Command};

/// Load the nearest `.env`, walking up from the working directory.
/// Variables already set in the environment win.
fn load_dotenv() {
    let Ok(mut dir) = std::env::current_dir() else {
        return;
    };
    for _ in 0..32 {
        let env_file = dir.join(".env");
        if env_file.exists() {
            let _ = dotenvy::from_path(&env_file);
            return;
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => return,
        }
    }
}

fn init_tracing(cli: &Cli) {
    let mut config = ObservabilityConfig::from_env().with_version(VERSION);
    if cli.verbose {
        config = config.with_log_level("debug");
    } else if config.log_level.is_none() && !matches!(cli.command, Command::Serve { .. }) {
        // One-shot commands keep stderr quiet unless something goes wrong.
        config = config.with_log_level("error");
    }
    if let Err(e) = threadloom_observability::init(config) {
        output::warning(&e.to_string());
    }
}

#[tokio::main]
async fn main() {
    load_dotenv();
    let cli = Cli::parse();
    output::init(cli.output);
    init_tracing(&cli);

    let result = commands::handle(cli).await;
    threadloom_observability::shutdown();
    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
