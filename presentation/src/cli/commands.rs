//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for bot answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable entries
    Pretty,
    /// `{intent, entries}` JSON
    Json,
}

impl From<OutputFormat> for portal_bot_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Pretty => portal_bot_domain::OutputFormat::Pretty,
            OutputFormat::Json => portal_bot_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for portal-bot
#[derive(Parser, Debug)]
#[command(name = "portal-bot")]
#[command(author, version, about = "Student portal bot - Ask about your classes in plain words")]
#[command(long_about = r#"
Portal Bot answers a student's free-text question about their own portal data.

The question is routed to one of five topics (assignment, grade, schedule,
assistant, information) by trigger words. Days ("monday", "thu"), times
("3pm", "tomorrow morning", "this week") and course names are picked out of
the text and used to narrow the answer.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./portal-bot.toml      Project-level config
3. ~/.config/portal-bot/config.toml   Global config

Example:
  portal-bot --caller 1 --dataset portal.toml "schedule for monday"
  portal-bot --caller 1 "what's my grade in databases" -o json
  portal-bot --caller 1 --history 5
"#)]
pub struct Cli {
    /// The question to ask (not required with --history or --show-config)
    pub text: Option<String>,

    /// Caller (student) id the answer is scoped to
    #[arg(short, long, value_name = "ID")]
    pub caller: Option<i64>,

    /// Portal dataset file (overrides [dataset] path)
    #[arg(short, long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the caller's last N exchanges from the conversation log and exit
    #[arg(long, value_name = "N")]
    pub history: Option<usize>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let cli = Cli::try_parse_from([
            "portal-bot",
            "schedule for monday",
            "--caller",
            "7",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.text.as_deref(), Some("schedule for monday"));
        assert_eq!(cli.caller, Some(7));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(cli.history.is_none());
    }

    #[test]
    fn test_parse_history() {
        let cli = Cli::try_parse_from(["portal-bot", "-c", "1", "--history", "5"]).unwrap();
        assert!(cli.text.is_none());
        assert_eq!(cli.history, Some(5));
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["portal-bot", "hi", "-o", "yaml"]).is_err());
    }

    #[test]
    fn test_format_maps_to_domain() {
        assert_eq!(
            portal_bot_domain::OutputFormat::from(OutputFormat::Json),
            portal_bot_domain::OutputFormat::Json
        );
    }
}
