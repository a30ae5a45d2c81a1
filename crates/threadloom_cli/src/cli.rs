//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use threadloom_constant::generation::{DEFAULT_BIO_TONE, DEFAULT_THREAD_LENGTH, DEFAULT_TONE};

/// Turn long-form text into Twitter threads, tweets and bios
#[derive(Parser)]
#[command(name = "threadloom", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for scripts
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to bind (default: HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (default: PORT or 8000)
        #[arg(long)]
        port: Option<u16>,
        /// Completion model (default: OPENAI_MODEL or gpt-4o-mini)
        #[arg(long)]
        model: Option<String>,
    },
    /// Generate a numbered thread from a file or stdin
    Thread {
        /// Source text; reads stdin when omitted or "-"
        file: Option<PathBuf>,
        /// Number of tweets
        #[arg(short = 'n', long, default_value_t = DEFAULT_THREAD_LENGTH, allow_negative_numbers = true)]
        length: i64,
        #[command(flatten)]
        voice: Voice,
        #[arg(long)]
        model: Option<String>,
    },
    /// Generate one standalone tweet
    Tweet {
        topic: String,
        #[command(flatten)]
        voice: Voice,
        #[arg(long)]
        model: Option<String>,
    },
    /// Generate a profile bio
    Bio {
        #[arg(long)]
        name: String,
        #[arg(long)]
        expertise: String,
        /// Repeat for several interests
        #[arg(long = "interest")]
        interests: Vec<String>,
        /// professional, casual, creative or technical
        #[arg(long, default_value = DEFAULT_BIO_TONE)]
        tone: String,
        #[arg(long)]
        model: Option<String>,
    },
    /// Split already numbered text into tweets (offline)
    Segment {
        /// Numbered text; reads stdin when omitted or "-"
        file: Option<PathBuf>,
        /// Highest marker number to accept
        #[arg(short = 'n', long, default_value_t = DEFAULT_THREAD_LENGTH as usize)]
        count: usize,
    },
}

/// Tone and voice shared by `thread` and `tweet`.
#[derive(clap::Args, Clone)]
pub struct Voice {
    /// neutral, formal, casual or enthusiastic
    #[arg(long, default_value = DEFAULT_TONE)]
    pub tone: String,
    /// Free-text description of the voice to imitate
    #[arg(long, default_value = "")]
    pub style: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_thread_defaults() {
        let cli = Cli::parse_from(["threadloom", "thread", "notes.md"]);
        assert_eq!(cli.output, OutputFormat::Text);
        match cli.command {
            Command::Thread {
                file,
                length,
                voice,
                model,
            } => {
                assert_eq!(file, Some(PathBuf::from("notes.md")));
                assert_eq!(length, 5);
                assert_eq!(voice.tone, "neutral");
                assert_eq!(voice.style, "");
                assert!(model.is_none());
            }
            _ => panic!("expected thread"),
        }
    }

    #[test]
    fn test_bio_collects_interests() {
        let cli = Cli::parse_from([
            "threadloom",
            "bio",
            "--name",
            "Ada",
            "--expertise",
            "compilers",
            "--interest",
            "chess",
            "--interest",
            "tea",
            "-o",
            "json",
        ]);
        assert_eq!(cli.output, OutputFormat::Json);
        match cli.command {
            Command::Bio {
                interests, tone, ..
            } => {
                assert_eq!(interests, vec!["chess", "tea"]);
                assert_eq!(tone, "professional");
            }
            _ => panic!("expected bio"),
        }
    }

    #[test]
    fn test_negative_length_reaches_validation() {
        let cli = Cli::parse_from(["threadloom", "thread", "--length", "-2"]);
        assert!(matches!(cli.command, Command::Thread { length: -2, .. }));
    }
}
