//! Core types: incoming events, files, roster members, handler response, and the Handler trait.
//!
//! One file per main type, following the transport-agnostic core layout.

mod file;
mod handler;
mod member;
mod message;
mod response;

pub use file::{FileUpload, SharedFile};
pub use handler::{Handler, ToCoreMessage};
pub use member::Member;
pub use message::{Message, ROSTER_CHANGE_EVENTS};
pub use response::HandlerResponse;
