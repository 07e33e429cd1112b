//! Slack markup tokenizer.
//!
//! Splits message text into plain runs, emoji codes (`:name:`) and bracketed references
//! (`<target>` / `<target|label>`). See <https://api.slack.com/reference/surfaces/formatting>.
//! Tokenizing never fails: anything that is not well-formed markup is plain text.

use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};

/// Bracketed references first so that a `<...>` wins over an emoji-shaped run starting at the
/// same offset. Byte offsets from this regex always fall on char boundaries.
static MARKUP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<([^>]*)>|(:[-a-z0-9_+]+:)").expect("markup pattern is valid")
});

/// What a bracketed reference points at, decided by the first character of its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// `<@U123>`
    User,
    /// `<#C123>`
    Channel,
    /// `<!here>`, `<!subteam^S1>`, ...
    Command,
    /// Anything else: URLs, mailto, ...
    Link,
}

impl ReferenceKind {
    /// Classifies a reference target by its sigil.
    pub fn of_target(target: &str) -> Self {
        match target.chars().next() {
            Some('@') => ReferenceKind::User,
            Some('#') => ReferenceKind::Channel,
            Some('!') => ReferenceKind::Command,
            _ => ReferenceKind::Link,
        }
    }
}

/// A parsed `<target|label>` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference<'a> {
    pub kind: ReferenceKind,
    /// Text before the first `|` (sigil included).
    pub target: &'a str,
    /// Text after the first `|`; `None` when there is no `|`.
    pub label: Option<&'a str>,
}

impl<'a> Reference<'a> {
    /// Parses the inner content of a bracket pair (without `<` and `>`).
    pub fn parse(inner: &'a str) -> Self {
        let (target, label) = match inner.split_once('|') {
            Some((target, label)) => (target, Some(label)),
            None => (inner, None),
        };
        Self {
            kind: ReferenceKind::of_target(target),
            target,
            label,
        }
    }
}

/// A single markup token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup<'a> {
    /// Full `:code:` including colons.
    Emoji(&'a str),
    Reference(Reference<'a>),
}

/// A markup token together with its byte range in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupMatch<'a> {
    pub start: usize,
    pub end: usize,
    pub markup: Markup<'a>,
}

/// Lazy left-to-right sequence of markup matches. Built by [`find_markup`].
pub struct MarkupMatches<'r, 'a> {
    captures: CaptureMatches<'r, 'a>,
}

impl<'r, 'a> Iterator for MarkupMatches<'r, 'a> {
    type Item = MarkupMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.captures.next()?;
        let whole = caps.get(0)?;
        let markup = match (caps.get(1), caps.get(2)) {
            (Some(inner), _) => Markup::Reference(Reference::parse(inner.as_str())),
            (None, Some(code)) => Markup::Emoji(code.as_str()),
            (None, None) => unreachable!("every alternative has a capture group"),
        };
        Some(MarkupMatch {
            start: whole.start(),
            end: whole.end(),
            markup,
        })
    }
}

/// Returns the markup tokens of `text`, in order. Plain runs are the gaps between matches.
pub fn find_markup(text: &str) -> MarkupMatches<'static, '_> {
    MarkupMatches {
        captures: MARKUP_RE.captures_iter(text),
    }
}

/// A classified substring of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Emoji(&'a str),
    Reference {
        reference: Reference<'a>,
        /// The bracketed token as written, `<` and `>` included.
        source: &'a str,
    },
}

impl<'a> Span<'a> {
    /// The exact substring of the input this span covers.
    pub fn source(&self) -> &'a str {
        match self {
            Span::Plain(s) | Span::Emoji(s) => s,
            Span::Reference { source, .. } => source,
        }
    }
}

/// Lazy span sequence covering every byte of the input. Built by [`tokenize`].
pub struct Spans<'a> {
    text: &'a str,
    matches: MarkupMatches<'static, 'a>,
    pos: usize,
    pending: Option<MarkupMatch<'a>>,
}

impl<'a> Spans<'a> {
    fn markup_span(&self, m: MarkupMatch<'a>) -> Span<'a> {
        match m.markup {
            Markup::Emoji(code) => Span::Emoji(code),
            Markup::Reference(reference) => Span::Reference {
                reference,
                source: &self.text[m.start..m.end],
            },
        }
    }
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(m) = self.pending.take() {
            self.pos = m.end;
            return Some(self.markup_span(m));
        }
        match self.matches.next() {
            Some(m) if m.start > self.pos => {
                let plain = &self.text[self.pos..m.start];
                self.pending = Some(m);
                Some(Span::Plain(plain))
            }
            Some(m) => {
                self.pos = m.end;
                Some(self.markup_span(m))
            }
            None if self.pos < self.text.len() => {
                let plain = &self.text[self.pos..];
                self.pos = self.text.len();
                Some(Span::Plain(plain))
            }
            None => None,
        }
    }
}

/// Splits `text` into spans. Empty plain runs are not emitted, so `""` yields nothing.
pub fn tokenize(text: &str) -> Spans<'_> {
    Spans {
        text,
        matches: find_markup(text),
        pos: 0,
        pending: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(text: &str) -> Vec<&str> {
        tokenize(text).map(|s| s.source()).collect()
    }

    #[test]
    fn test_empty_input_has_no_spans() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(find_markup("").count(), 0);
    }

    #[test]
    fn test_plain_text_is_one_span() {
        let spans: Vec<_> = tokenize("just words").collect();
        assert_eq!(spans, vec![Span::Plain("just words")]);
    }

    #[test]
    fn test_emoji_between_text() {
        let spans: Vec<_> = tokenize("I :+1: this!").collect();
        assert_eq!(
            spans,
            vec![
                Span::Plain("I "),
                Span::Emoji(":+1:"),
                Span::Plain(" this!"),
            ]
        );
    }

    #[test]
    fn test_emoji_alphabet_is_lowercase_only() {
        assert_eq!(find_markup(":Smile:").count(), 0);
        assert_eq!(find_markup(":: and : :").count(), 0);
        let codes: Vec<_> = find_markup(":skin-tone-2::thumbsup_all:")
            .map(|m| m.markup)
            .collect();
        assert_eq!(
            codes,
            vec![Markup::Emoji(":skin-tone-2:"), Markup::Emoji(":thumbsup_all:")]
        );
    }

    #[test]
    fn test_reference_with_label() {
        let m = find_markup("go to <http://example.com|example>").next().unwrap();
        assert_eq!(m.start, 6);
        assert_eq!(
            m.markup,
            Markup::Reference(Reference {
                kind: ReferenceKind::Link,
                target: "http://example.com",
                label: Some("example"),
            })
        );
    }

    #[test]
    fn test_reference_splits_on_first_pipe() {
        let r = Reference::parse("@U1|a|b");
        assert_eq!(r.target, "@U1");
        assert_eq!(r.label, Some("a|b"));
        assert_eq!(Reference::parse("#C1|").label, Some(""));
        assert_eq!(Reference::parse("!here").label, None);
    }

    #[test]
    fn test_reference_kinds() {
        assert_eq!(ReferenceKind::of_target("@U1"), ReferenceKind::User);
        assert_eq!(ReferenceKind::of_target("#C1"), ReferenceKind::Channel);
        assert_eq!(ReferenceKind::of_target("!channel"), ReferenceKind::Command);
        assert_eq!(ReferenceKind::of_target("mailto:a@b.c"), ReferenceKind::Link);
        assert_eq!(ReferenceKind::of_target(""), ReferenceKind::Link);
    }

    #[test]
    fn test_unterminated_bracket_is_plain() {
        assert_eq!(sources("a < b"), vec!["a < b"]);
        assert_eq!(sources("x > y <"), vec!["x > y <"]);
    }

    #[test]
    fn test_bracket_wins_over_contained_emoji() {
        let spans: Vec<_> = tokenize("<http://x.com/:foo:>").collect();
        assert_eq!(spans.len(), 1);
        assert!(matches!(
            spans[0],
            Span::Reference {
                reference: Reference {
                    target: "http://x.com/:foo:",
                    ..
                },
                ..
            }
        ));
    }

    #[test]
    fn test_escaped_brackets_are_not_markup() {
        assert_eq!(find_markup("&lt;not a link&gt;").count(), 0);
    }

    #[test]
    fn test_adjacent_references() {
        assert_eq!(
            sources("<!rotate><@USER1><@NOT_A_USER>"),
            vec!["<!rotate>", "<@USER1>", "<@NOT_A_USER>"]
        );
    }

    #[test]
    fn test_spans_reassemble_input() {
        let text = "héllo <@U1|bob> :wave: <#C2> bye < ok >";
        assert_eq!(sources(text).concat(), text);
    }
}
