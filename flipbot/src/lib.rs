//! # Flipbot
//!
//! Slack bot that answers messages with their upside-down rendition and re-uploads shared images
//! rotated 180°. Wires the handler chain, handlers, user directory, image rotation and the Slack
//! Web API / Socket Mode transport. Loads config from env.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod directory;
pub mod handlers;
pub mod rotation;
pub mod runner;
pub mod slack;

pub use cli::{load_config, Cli, Commands};

pub use flipbot_core::{
    init_tracing, ChatApi, FileUpload, FlipbotError, Handler, HandlerError, HandlerResponse,
    Member, Message, Result, SharedFile, ToCoreMessage,
};

pub use chain::HandlerChain;
pub use components::{build_handler_chain, BotComponents};
pub use config::{BaseConfig, BotConfig, SocketConfig};
pub use directory::DirectoryHandle;
pub use handlers::{
    EventLogHandler, ImageFlipHandler, ReactionHandler, RosterHandler, SelfFilterHandler,
    TextFlipHandler,
};
pub use runner::{run_bot, FlipBot};
pub use slack::{SlackApiClient, SlackEventWrapper};
