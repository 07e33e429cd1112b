//! Emoji flipping and the reaction vocabulary.
//!
//! Emoji codes are never run through the Latin flip table. A code with an upside-down
//! counterpart (`:+1:` ↔ `:-1:`, `:arrow_up:` ↔ `:arrow_down:`, ...) is swapped; any other code
//! is left as it is so it still renders. The table is an involution: flipping a code twice
//! always gives it back.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::Lazy;
use rand::seq::IndexedRandom;

/// Pairs of emoji names that are each other's 180° rotation. Applied in both directions; no name
/// may appear twice.
const EMOJI_PAIRS: &[(&str, &str)] = &[
    ("+1", "-1"),
    ("thumbsup", "thumbsdown"),
    ("point_up", "point_down"),
    ("arrow_up", "arrow_down"),
    ("arrow_up_small", "arrow_down_small"),
    ("arrow_upper_left", "arrow_lower_right"),
    ("arrow_upper_right", "arrow_lower_left"),
    ("arrow_heading_up", "arrow_heading_down"),
    ("arrow_double_up", "arrow_double_down"),
    ("small_red_triangle", "small_red_triangle_down"),
    ("chart_with_upwards_trend", "chart_with_downwards_trend"),
    ("slightly_smiling_face", "upside_down_face"),
    ("arrows_clockwise", "arrows_counterclockwise"),
    ("sunrise", "city_sunset"),
    ("hourglass", "hourglass_flowing_sand"),
];

static EMOJI_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for &(a, b) in EMOJI_PAIRS {
        table.entry(a).or_insert(b);
        table.entry(b).or_insert(a);
    }
    table
});

/// Flips a `:name:` emoji code. Input without surrounding colons is treated as a bare name.
pub fn flip(code: &str) -> String {
    let name = code
        .strip_prefix(':')
        .and_then(|c| c.strip_suffix(':'))
        .unwrap_or(code);
    let flipped = EMOJI_TABLE.get(name).copied().unwrap_or(name);
    format!(":{}:", flipped)
}

/// Reaction names used to mark a message as flipped.
pub const REACTIONS: &[&str] = &[
    "upside_down_face",
    "arrows_counterclockwise",
    "arrows_clockwise",
    "repeat",
    "twisted_rightwards_arrows",
    "arrow_heading_down",
];

/// A reaction picked uniformly at random from [`REACTIONS`].
pub fn wrong_way_up() -> &'static str {
    REACTIONS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or("upside_down_face")
}

/// How [`ReactionPicker`] chooses the next reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReactionPolicy {
    #[default]
    Random,
    RoundRobin,
}

impl FromStr for ReactionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(ReactionPolicy::Random),
            "round_robin" | "round-robin" | "roundrobin" => Ok(ReactionPolicy::RoundRobin),
            other => Err(format!("unknown reaction policy: {}", other)),
        }
    }
}

/// Picks reaction names according to a [`ReactionPolicy`]. Safe to share between tasks.
#[derive(Debug, Default)]
pub struct ReactionPicker {
    policy: ReactionPolicy,
    next: AtomicUsize,
}

impl ReactionPicker {
    pub fn new(policy: ReactionPolicy) -> Self {
        Self {
            policy,
            next: AtomicUsize::new(0),
        }
    }

    pub fn policy(&self) -> ReactionPolicy {
        self.policy
    }

    /// Next reaction name (without colons).
    pub fn pick(&self) -> &'static str {
        match self.policy {
            ReactionPolicy::Random => wrong_way_up(),
            ReactionPolicy::RoundRobin => {
                let i = self.next.fetch_add(1, Ordering::Relaxed);
                REACTIONS[i % REACTIONS.len()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_swaps_counterparts() {
        assert_eq!(flip(":+1:"), ":-1:");
        assert_eq!(flip(":-1:"), ":+1:");
        assert_eq!(flip(":arrow_up:"), ":arrow_down:");
        assert_eq!(flip(":upside_down_face:"), ":slightly_smiling_face:");
    }

    #[test]
    fn test_flip_keeps_unknown_codes() {
        assert_eq!(flip(":tada:"), ":tada:");
        assert_eq!(flip("tada"), ":tada:");
    }

    #[test]
    fn test_flip_twice_restores_every_code() {
        for &(a, b) in EMOJI_PAIRS {
            for name in [a, b] {
                let code = format!(":{}:", name);
                assert_eq!(flip(&flip(&code)), code);
            }
        }
        assert_eq!(flip(":point_down:"), ":point_up:");
    }

    #[test]
    fn test_random_reaction_is_in_vocabulary() {
        for _ in 0..20 {
            assert!(REACTIONS.contains(&wrong_way_up()));
        }
    }

    #[test]
    fn test_round_robin_cycles() {
        let picker = ReactionPicker::new(ReactionPolicy::RoundRobin);
        let picked: Vec<_> = (0..REACTIONS.len() + 1).map(|_| picker.pick()).collect();
        assert_eq!(&picked[..REACTIONS.len()], REACTIONS);
        assert_eq!(picked[REACTIONS.len()], REACTIONS[0]);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("random".parse(), Ok(ReactionPolicy::Random));
        assert_eq!("Round_Robin".parse(), Ok(ReactionPolicy::RoundRobin));
        assert!("sometimes".parse::<ReactionPolicy>().is_err());
    }
}
