//! Command dispatch.

pub mod generate;
pub mod segment;
pub mod serve;

use std::io::{IsTerminal, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Serve { host, port, model } => serve::handle(host, port, model).await,
        Command::Thread {
            file,
            length,
            voice,
            model,
        } => {
            let content = read_input(file.as_deref())?;
            generate::thread(content, length, voice, model).await
        }
        Command::Tweet {
            topic,
            voice,
            model,
        } => generate::tweet(topic, voice, model).await,
        Command::Bio {
            name,
            expertise,
            interests,
            tone,
            model,
        } => generate::bio(name, expertise, interests, tone, model).await,
        Command::Segment { file, count } => {
            let text = read_input(file.as_deref())?;
            segment::handle(&text, count)
        }
    }
}

/// Read `path`, or stdin when it is `None` or `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                bail!("no input: pass a FILE or pipe text on stdin");
            }
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
