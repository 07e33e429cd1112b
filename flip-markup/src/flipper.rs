//! Handler sets: how each kind of markup is rendered in the flipped output.
//!
//! [`FlipHandlers`] has one method per span kind. Only `flip` and `emoji` are required; the
//! reference methods default to the shape-preserving `<target|label>` rendering, so an
//! implementation can swap the text primitives without touching dispatch.

use std::sync::Arc;

use crate::directory::UserDirectory;
use crate::{emoji, upsidedown};

/// Per-kind rendering used by [`crate::flip_markedup_text`].
pub trait FlipHandlers {
    /// Renders a part that must stay readable by the platform (reference targets).
    fn echo(&self, text: &str) -> String {
        text.to_string()
    }

    /// Renders a plain-text run.
    fn flip(&self, text: &str) -> String;

    /// Renders a `:code:` emoji token.
    fn emoji(&self, code: &str) -> String;

    /// Display name used for `<@U123>` mentions that carry no label.
    fn display_name(&self, _user_id: &str) -> Option<String> {
        None
    }

    /// Makes a rendered label safe to sit between `|` and `>`.
    fn escape_label(&self, label: &str) -> String {
        escape(label)
    }

    /// `<target>` or `<target|flipped label>`. An empty label counts as no label.
    fn link(&self, target: &str, label: Option<&str>) -> String {
        match label.filter(|l| !l.is_empty()) {
            Some(label) => format!(
                "<{}|{}>",
                self.echo(target),
                self.escape_label(&self.flip(label))
            ),
            None => format!("<{}>", self.echo(target)),
        }
    }

    /// User mention. Without a label the directory name is used, when known.
    fn user(&self, target: &str, label: Option<&str>) -> String {
        match label.filter(|l| !l.is_empty()) {
            Some(label) => self.link(target, Some(label)),
            None => {
                let name = self.display_name(target);
                self.link(target, name.as_deref())
            }
        }
    }

    fn channel(&self, target: &str, label: Option<&str>) -> String {
        self.link(target, label)
    }

    fn command(&self, target: &str, label: Option<&str>) -> String {
        self.link(target, label)
    }
}

/// Reverses the escapes Slack applies to message text.
pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Applies the escapes Slack expects for `&`, `<` and `>`. Inverse of [`unescape`].
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Production handler set: upside-down table, emoji counterparts, directory lookups.
#[derive(Debug, Clone, Default)]
pub struct MarkupFlipper {
    directory: Arc<UserDirectory>,
}

impl MarkupFlipper {
    /// Builds a handler set over one directory snapshot.
    pub fn new(directory: Arc<UserDirectory>) -> Self {
        Self { directory }
    }
}

impl FlipHandlers for MarkupFlipper {
    fn flip(&self, text: &str) -> String {
        upsidedown::transform(&unescape(text))
    }

    fn emoji(&self, code: &str) -> String {
        emoji::flip(code)
    }

    fn display_name(&self, user_id: &str) -> Option<String> {
        self.directory.display_name(user_id).map(str::to_string)
    }
}

/// Handler set that leaves every span unchanged. Only the chunk order is reversed.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFlipper;

impl FlipHandlers for IdentityFlipper {
    fn flip(&self, text: &str) -> String {
        text.to_string()
    }

    fn escape_label(&self, label: &str) -> String {
        label.to_string()
    }

    fn emoji(&self, code: &str) -> String {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flipper_with(users: &[(&str, &str)]) -> MarkupFlipper {
        MarkupFlipper::new(Arc::new(users.iter().copied().collect()))
    }

    #[test]
    fn test_unescape_order() {
        assert_eq!(unescape("&amp; &lt; &gt;"), "& < >");
        assert_eq!(unescape("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_flip_resolves_escapes_first() {
        let flipper = MarkupFlipper::default();
        assert_eq!(flipper.flip("&amp; &lt; &gt;"), upsidedown::transform("& < >"));
        assert_eq!(flipper.flip("&amp; &lt; &gt;"), "< > ⅋");
    }

    #[test]
    fn test_link_keeps_target() {
        let flipper = MarkupFlipper::default();
        assert_eq!(flipper.link("http://a.b", None), "<http://a.b>");
        assert_eq!(flipper.link("http://a.b", Some("")), "<http://a.b>");
        assert_eq!(flipper.link("http://a.b", Some("ab")), "<http://a.b|qɐ>");
    }

    #[test]
    fn test_escape_is_inverse_of_unescape() {
        assert_eq!(escape("a & <b>"), "a &amp; &lt;b&gt;");
        assert_eq!(unescape(&escape("&lt; & >")), "&lt; & >");
    }

    #[test]
    fn test_link_label_with_escaped_brackets_stays_escaped() {
        let flipper = MarkupFlipper::default();
        assert_eq!(flipper.link("http://x.com", Some("a &lt; b")), "<http://x.com|q &gt; ɐ>");
        assert_eq!(flipper.link("http://x.com", Some("⅋ b")), "<http://x.com|q &amp;>");
    }

    #[test]
    fn test_user_uses_directory_name() {
        let flipper = flipper_with(&[("U1", "bob")]);
        assert_eq!(flipper.user("@U1", None), "<@U1|qoq>");
        assert_eq!(flipper.user("@U1", Some("dan")), "<@U1|uɐp>");
        assert_eq!(flipper.user("@U9", None), "<@U9>");
    }

    #[test]
    fn test_identity_is_identity() {
        let id = IdentityFlipper;
        assert_eq!(id.flip("abc &amp;"), "abc &amp;");
        assert_eq!(id.emoji(":+1:"), ":+1:");
        assert_eq!(id.user("@U1", None), "<@U1>");
        assert_eq!(id.channel("#C1", Some("general")), "<#C1|general>");
        assert_eq!(id.link("http://x", Some("a &lt; b")), "<http://x|a &lt; b>");
    }
}
