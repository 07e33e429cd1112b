//! Base config: Slack connection, logging. Loaded from env.

use anyhow::{Context, Result};
use std::env;

/// Default Slack Web API base URL.
pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";

/// Base config: Slack tokens, API URL, logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// SLACK_BOT_TOKEN
    pub bot_token: String,
    /// SLACK_APP_TOKEN, needed to open a Socket Mode connection
    pub app_token: Option<String>,
    /// SLACK_BOT_USER; when unset the id is taken from auth.test
    pub bot_user: Option<String>,
    /// SLACK_API_URL
    pub slack_api_url: String,
    /// Log file path
    pub log_file: String,
    /// VERBOSE: log every raw event at info
    pub verbose: bool,
}

impl BaseConfig {
    /// Load from environment variables. `token` / `app_token` override SLACK_BOT_TOKEN /
    /// SLACK_APP_TOKEN if provided.
    pub fn load(token: Option<String>, app_token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("SLACK_BOT_TOKEN").context("SLACK_BOT_TOKEN not set")?,
        };
        let app_token = app_token.or_else(|| non_empty_var("SLACK_APP_TOKEN"));
        let bot_user = non_empty_var("SLACK_BOT_USER");
        let slack_api_url =
            non_empty_var("SLACK_API_URL").unwrap_or_else(|| DEFAULT_SLACK_API_URL.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/flipbot.log".to_string());
        let verbose = env::var("VERBOSE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            bot_token,
            app_token,
            bot_user,
            slack_api_url,
            log_file,
            verbose,
        })
    }

    /// Validate config: API URL must parse, tokens must carry the right prefixes.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.slack_api_url).is_err() {
            anyhow::bail!("SLACK_API_URL is not a valid URL: {}", self.slack_api_url);
        }
        if !(self.bot_token.starts_with("xoxb-") || self.bot_token.starts_with("xoxp-")) {
            anyhow::bail!("SLACK_BOT_TOKEN must start with xoxb- or xoxp-");
        }
        if let Some(ref app_token) = self.app_token {
            if !app_token.starts_with("xapp-") {
                anyhow::bail!("SLACK_APP_TOKEN must start with xapp-");
            }
        }
        Ok(())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
