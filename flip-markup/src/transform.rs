//! Markup-aware flipping of a whole message.

use crate::flipper::FlipHandlers;
use crate::tokenizer::{find_markup, Markup, ReferenceKind};

/// Flips Slack message text while keeping its markup working.
///
/// Plain runs go through `flip`, emoji through `emoji`, and references through the handler
/// for their kind. The rendered chunks are then joined in reverse order, so the message reads
/// upside down while every `<target|label>` keeps an untouched target.
pub fn flip_markedup_text<H>(text: &str, handlers: &H) -> String
where
    H: FlipHandlers + ?Sized,
{
    let mut chunks = Vec::new();
    let mut pos = 0;
    for m in find_markup(text) {
        chunks.push(handlers.flip(&text[pos..m.start]));
        chunks.push(render_markup(&m.markup, handlers));
        pos = m.end;
    }
    chunks.push(handlers.flip(&text[pos..]));

    chunks.into_iter().rev().collect()
}

fn render_markup<H>(markup: &Markup<'_>, handlers: &H) -> String
where
    H: FlipHandlers + ?Sized,
{
    match markup {
        Markup::Emoji(code) => handlers.emoji(code),
        Markup::Reference(r) => match r.kind {
            ReferenceKind::User => handlers.user(r.target, r.label),
            ReferenceKind::Channel => handlers.channel(r.target, r.label),
            ReferenceKind::Command => handlers.command(r.target, r.label),
            ReferenceKind::Link => handlers.link(r.target, r.label),
        },
    }
}
