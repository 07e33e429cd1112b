//! CLI parser and config loading.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "flipbot")]
#[command(about = "Slack bot that turns messages and images upside down", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot over Socket Mode (config from env; flags override the tokens).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long)]
        app_token: Option<String>,
    },
    /// Print TEXT upside down, keeping Slack markup intact.
    Flip { text: String },
    /// Rotate an image file 180°, keeping its format.
    Rotate { input: PathBuf, output: PathBuf },
}

/// Load BotConfig from environment. Provided tokens override SLACK_BOT_TOKEN / SLACK_APP_TOKEN.
pub fn load_config(token: Option<String>, app_token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token, app_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_tokens() {
        let cli = Cli::parse_from(["flipbot", "run", "--token", "xoxb-1", "--app-token", "xapp-1"]);
        match cli.command {
            Commands::Run { token, app_token } => {
                assert_eq!(token.as_deref(), Some("xoxb-1"));
                assert_eq!(app_token.as_deref(), Some("xapp-1"));
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_flip() {
        let cli = Cli::parse_from(["flipbot", "flip", "hello <@U1>"]);
        assert!(matches!(cli.command, Commands::Flip { ref text } if text == "hello <@U1>"));
    }

    #[test]
    fn test_parse_rotate() {
        let cli = Cli::parse_from(["flipbot", "rotate", "a.png", "b.png"]);
        match cli.command {
            Commands::Rotate { input, output } => {
                assert_eq!(input, PathBuf::from("a.png"));
                assert_eq!(output, PathBuf::from("b.png"));
            }
            _ => panic!("expected rotate"),
        }
    }
}
