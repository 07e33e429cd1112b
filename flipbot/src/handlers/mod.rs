//! Handler implementations, in chain order: self filter, event log, roster refresh, image flip,
//! text flip, reaction.

mod event_log;
mod image_flip;
mod reaction;
mod roster;
mod self_filter;
mod text_flip;

pub use event_log::EventLogHandler;
pub use image_flip::ImageFlipHandler;
pub use reaction::ReactionHandler;
pub use roster::RosterHandler;
pub use self_filter::SelfFilterHandler;
pub use text_flip::TextFlipHandler;
