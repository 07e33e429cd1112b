//! Property tests for the tokenizer and transformer.

use std::cell::RefCell;

use flip_markup::{flip_markedup_text, tokenize, FlipHandlers, MarkupFlipper, Span};
use proptest::prelude::*;

/// Records what each primitive was called with.
#[derive(Default)]
struct Recorder {
    flipped: RefCell<Vec<String>>,
    emojis: RefCell<Vec<String>>,
}

impl FlipHandlers for Recorder {
    fn flip(&self, text: &str) -> String {
        self.flipped.borrow_mut().push(text.to_string());
        text.to_string()
    }

    fn emoji(&self, code: &str) -> String {
        self.emojis.borrow_mut().push(code.to_string());
        code.to_string()
    }
}

proptest! {
    #[test]
    fn spans_reassemble_any_input(text in any::<String>()) {
        let rebuilt: String = tokenize(&text).map(|s| s.source()).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn spans_reassemble_markup_heavy_input(text in "[<>|:@#!a-z+ &;-]{0,40}") {
        let rebuilt: String = tokenize(&text).map(|s| s.source()).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn transform_is_total(text in any::<String>()) {
        let _ = flip_markedup_text(&text, &MarkupFlipper::default());
    }

    #[test]
    fn references_keep_their_target(
        before in "[a-z ]{0,10}",
        target in "[@#!]?[a-zA-Z0-9:/._-]{1,20}",
        label in proptest::option::of("[a-z ]{1,10}"),
        after in "[a-z ]{0,10}",
    ) {
        let reference = match &label {
            Some(l) => format!("<{}|{}>", target, l),
            None => format!("<{}>", target),
        };
        let text = format!("{}{}{}", before, reference, after);
        let out = flip_markedup_text(&text, &MarkupFlipper::default());
        let opened = format!("<{}", target);
        prop_assert!(
            out.contains(&format!("{}>", opened)) || out.contains(&format!("{}|", opened)),
            "target lost in {:?}",
            out
        );
    }

    #[test]
    fn emoji_never_reaches_flip(
        before in "[a-z ]{0,10}",
        name in "[a-z0-9_+-]{1,12}",
        after in "[a-z ]{0,10}",
    ) {
        let code = format!(":{}:", name);
        let text = format!("{}{}{}", before, code, after);
        let recorder = Recorder::default();
        flip_markedup_text(&text, &recorder);
        prop_assert_eq!(recorder.emojis.borrow().clone(), vec![code.clone()]);
        prop_assert!(recorder.flipped.borrow().iter().all(|s| !s.contains(&code)));
    }

    #[test]
    fn escaped_labels_keep_one_reference(
        before in "[a-z ]{0,10}",
        target in "[@#!]?[a-zA-Z0-9/._-]{1,20}",
        label in "([a-z ]|&lt;|&gt;|&amp;|<){1,8}",
        after in "[a-z ]{0,10}",
    ) {
        let text = format!("{}<{}|{}>{}", before, target, label, after);
        let out = flip_markedup_text(&text, &MarkupFlipper::default());

        let references: Vec<_> = tokenize(&out)
            .filter_map(|span| match span {
                Span::Reference { reference, .. } => Some(reference),
                _ => None,
            })
            .collect();
        prop_assert_eq!(references.len(), 1, "output {:?}", out);
        prop_assert_eq!(references[0].target, target.as_str());
        prop_assert!(references[0].label.is_some_and(|l| !l.is_empty()));
    }
}
