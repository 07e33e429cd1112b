//! # flip-markup
//!
//! Turns Slack message text upside down without breaking its markup: [`tokenize`] splits text
//! into plain runs, `:emoji:` codes and `<target|label>` references; [`flip_markedup_text`]
//! renders each span through a [`FlipHandlers`] set and joins them in reverse order.
//!
//! Everything here is pure and synchronous. The roster used to name `<@U123>` mentions is an
//! immutable [`UserDirectory`] snapshot owned by the handler set.

pub mod directory;
pub mod emoji;
pub mod flipper;
pub mod tokenizer;
pub mod transform;
pub mod upsidedown;

pub use directory::UserDirectory;
pub use emoji::{wrong_way_up, ReactionPicker, ReactionPolicy, REACTIONS};
pub use flipper::{escape, unescape, FlipHandlers, IdentityFlipper, MarkupFlipper};
pub use tokenizer::{
    find_markup, tokenize, Markup, MarkupMatch, Reference, ReferenceKind, Span, Spans,
};
pub use transform::flip_markedup_text;
