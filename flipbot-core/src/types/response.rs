//! Handler chain result type.

/// Handler result for the chain. `Flipped(text)` carries what was posted so later handlers can
/// use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was posted.
    Stop,
    /// Not for this handler, try next.
    Ignore,
    /// Stop the chain; the flipped rendition was posted.
    Flipped(String),
}
