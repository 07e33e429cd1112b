//! BotConfig: BaseConfig + Socket Mode timing + reaction policy. Use load() for env-based loading.

use std::env;
use std::time::Duration;

use anyhow::Result;
use flip_markup::ReactionPolicy;

use super::BaseConfig;

/// Socket Mode connection timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketConfig {
    /// SOCKET_RECONNECT_SECS
    pub reconnect_delay: Duration,
    /// SOCKET_PING_SECS
    pub ping_interval: Duration,
}

impl Default for SocketConfig {
    fn default() -> Self {
        Self {
            reconnect_delay: Duration::from_secs(5),
            ping_interval: Duration::from_secs(30),
        }
    }
}

impl SocketConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            reconnect_delay: secs_var("SOCKET_RECONNECT_SECS").unwrap_or(defaults.reconnect_delay),
            ping_interval: secs_var("SOCKET_PING_SECS").unwrap_or(defaults.ping_interval),
        }
    }
}

fn secs_var(key: &str) -> Option<Duration> {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .map(Duration::from_secs)
}

/// Bot config: BaseConfig + socket timing + reaction policy.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub socket: SocketConfig,
    /// REACTION_POLICY as given; parsed by validate() and reaction_policy().
    pub reaction_policy: String,
}

impl BotConfig {
    /// Load full config from environment variables. `token` / `app_token` override the env tokens.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>, app_token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token, app_token)?;
        let socket = SocketConfig::from_env();
        let reaction_policy = env::var("REACTION_POLICY").unwrap_or_else(|_| "random".to_string());
        Ok(Self {
            base,
            socket,
            reaction_policy,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.reaction_policy
            .parse::<ReactionPolicy>()
            .map_err(|e| anyhow::anyhow!("REACTION_POLICY: {}", e))?;
        Ok(())
    }

    /// validate() plus what `run` needs on top: an app token to open Socket Mode.
    pub fn validate_for_run(&self) -> Result<()> {
        self.validate()?;
        if self.base.app_token.is_none() {
            anyhow::bail!("SLACK_APP_TOKEN is required to run the bot");
        }
        Ok(())
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn app_token(&self) -> Option<&str> {
        self.base.app_token.as_deref()
    }
    pub fn bot_user(&self) -> Option<&str> {
        self.base.bot_user.as_deref()
    }
    pub fn slack_api_url(&self) -> &str {
        &self.base.slack_api_url
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn verbose(&self) -> bool {
        self.base.verbose
    }
    pub fn socket(&self) -> &SocketConfig {
        &self.socket
    }

    /// Parsed reaction policy; falls back to random when the value does not parse.
    pub fn reaction_policy(&self) -> ReactionPolicy {
        self.reaction_policy.parse().unwrap_or_default()
    }
}
