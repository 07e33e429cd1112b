use anyhow::{Context, Result};
use std::sync::Arc;
use flipbot_core::{init_tracing, ChatApi, Message};
use tracing::{error, info, instrument, warn};

use crate::chain::HandlerChain;
use crate::components::{build_handler_chain, BotComponents};
use crate::config::BotConfig;
use crate::directory::DirectoryHandle;
use crate::slack::{run_socket_mode, SlackApiClient};

/// FlipBot: config, components, and handler chain.
pub struct FlipBot {
    pub config: BotConfig,
    pub components: BotComponents,
    pub handler_chain: HandlerChain,
}

impl FlipBot {
    /// Builds the bot around any [`ChatApi`]; does not touch the network.
    pub fn with_api(config: BotConfig, api: Arc<dyn ChatApi>) -> Self {
        let components = BotComponents {
            api,
            directory: DirectoryHandle::default(),
            bot_user: config.bot_user().map(str::to_string),
            verbose: config.verbose(),
            reaction_policy: config.reaction_policy(),
        };
        let handler_chain = build_handler_chain(&components);
        Self {
            config,
            components,
            handler_chain,
        }
    }

    /// Loads the roster into the directory. A failure leaves the directory empty.
    pub async fn refresh_directory(&self) {
        if let Err(e) = self
            .components
            .directory
            .refresh(self.components.api.as_ref())
            .await
        {
            warn!(error = %e, "Failed to load user directory, mentions stay unnamed");
        }
    }

    /// Drive handler chain with one core Message; errors are logged, never returned.
    pub async fn handle_core_message(&self, message: &Message) {
        if let Err(e) = self.handler_chain.handle(message).await {
            error!(error = %e, event_type = %message.event_type, "Handler chain failed");
        }
    }
}

/// Main entry: validate config, init logging, authenticate, load the roster, then run Socket Mode.
#[instrument(skip(config))]
pub async fn run_bot(mut config: BotConfig) -> Result<()> {
    config.validate_for_run()?;
    init_tracing(config.log_file())?;

    let slack = Arc::new(SlackApiClient::from_config(&config));
    if config.bot_user().is_none() {
        let user_id = slack.auth_test().await.context("auth.test failed")?;
        info!(bot_user = %user_id, "Authenticated");
        config.base.bot_user = Some(user_id);
    }

    let bot = FlipBot::with_api(config, slack.clone());
    bot.refresh_directory().await;

    info!(
        reaction_policy = ?bot.config.reaction_policy(),
        verbose = bot.config.verbose(),
        "Bot started successfully"
    );

    run_socket_mode(slack, bot.handler_chain.clone(), bot.config.socket().clone()).await?;
    Ok(())
}
