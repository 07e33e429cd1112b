//! Bot components and handler chain assembly.

use std::sync::Arc;

use flip_markup::ReactionPolicy;
use flipbot_core::ChatApi;

use crate::chain::HandlerChain;
use crate::directory::DirectoryHandle;
use crate::handlers::{
    EventLogHandler, ImageFlipHandler, ReactionHandler, RosterHandler, SelfFilterHandler,
    TextFlipHandler,
};

/// Everything the handlers share.
#[derive(Clone)]
pub struct BotComponents {
    pub api: Arc<dyn ChatApi>,
    pub directory: DirectoryHandle,
    /// The bot's own user id, when known.
    pub bot_user: Option<String>,
    pub verbose: bool,
    pub reaction_policy: ReactionPolicy,
}

/// Builds the handler chain: self filter → event log → roster → image flip → text flip → reaction.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    let api = components.api.clone();
    let directory = components.directory.clone();
    HandlerChain::new()
        .add_handler(Arc::new(SelfFilterHandler::new(components.bot_user.clone())))
        .add_handler(Arc::new(EventLogHandler::new(components.verbose)))
        .add_handler(Arc::new(RosterHandler::new(api.clone(), directory.clone())))
        .add_handler(Arc::new(ImageFlipHandler::new(api.clone(), directory.clone())))
        .add_handler(Arc::new(TextFlipHandler::new(api.clone(), directory)))
        .add_handler(Arc::new(ReactionHandler::new(api, components.reaction_policy)))
}
