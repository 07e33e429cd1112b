//! Bot configuration: BaseConfig (Slack connection + log) + socket and reaction settings.

mod base;
mod bot_config;

#[cfg(test)]
mod tests;

pub use base::BaseConfig;
pub use bot_config::{BotConfig, SocketConfig};
