//! Best-effort upside-down character table.
//!
//! [`transform`] substitutes each character with a glyph that looks like it rotated 180° and
//! reverses the order. The table is bidirectional so flipping twice restores lowercase Latin
//! text and digits; a few uppercase letters share a glyph with their lowercase form and come
//! back lowercase.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Forward pairs. Earlier entries win when building the reverse direction.
const FLIP_PAIRS: &[(char, char)] = &[
    ('a', 'ɐ'),
    ('b', 'q'),
    ('c', 'ɔ'),
    ('d', 'p'),
    ('e', 'ǝ'),
    ('f', 'ɟ'),
    ('g', 'ƃ'),
    ('h', 'ɥ'),
    ('i', 'ᴉ'),
    ('j', 'ɾ'),
    ('k', 'ʞ'),
    ('l', 'l'),
    ('m', 'ɯ'),
    ('n', 'u'),
    ('o', 'o'),
    ('p', 'd'),
    ('q', 'b'),
    ('r', 'ɹ'),
    ('s', 's'),
    ('t', 'ʇ'),
    ('u', 'n'),
    ('v', 'ʌ'),
    ('w', 'ʍ'),
    ('x', 'x'),
    ('y', 'ʎ'),
    ('z', 'z'),
    ('A', '∀'),
    ('B', 'ᗺ'),
    ('C', 'Ɔ'),
    ('D', 'ᗡ'),
    ('E', 'Ǝ'),
    ('F', 'Ⅎ'),
    ('G', '⅁'),
    ('H', 'H'),
    ('I', 'I'),
    ('J', 'ſ'),
    ('K', 'ʞ'),
    ('L', '˥'),
    ('M', 'W'),
    ('N', 'N'),
    ('O', 'O'),
    ('P', 'Ԁ'),
    ('Q', 'Ό'),
    ('R', 'ᴚ'),
    ('S', 'S'),
    ('T', '⊥'),
    ('U', '∩'),
    ('V', 'Λ'),
    ('W', 'M'),
    ('X', 'X'),
    ('Y', '⅄'),
    ('Z', 'Z'),
    ('0', '0'),
    ('1', 'Ɩ'),
    ('2', 'ᄅ'),
    ('3', 'Ɛ'),
    ('4', 'ㄣ'),
    ('5', 'ϛ'),
    ('6', '9'),
    ('7', 'ㄥ'),
    ('8', '8'),
    ('9', '6'),
    ('.', '˙'),
    (',', '\''),
    ('\'', ','),
    ('"', '„'),
    ('`', ','),
    ('?', '¿'),
    ('!', '¡'),
    (';', '؛'),
    ('_', '‾'),
    ('&', '⅋'),
    ('(', ')'),
    (')', '('),
    ('[', ']'),
    (']', '['),
    ('{', '}'),
    ('}', '{'),
    ('<', '>'),
    ('>', '<'),
    ('∴', '∵'),
];

static FLIP_TABLE: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let mut table: HashMap<char, char> = FLIP_PAIRS.iter().copied().collect();
    for &(from, to) in FLIP_PAIRS {
        table.entry(to).or_insert(from);
    }
    table
});

/// Upside-down counterpart of `c`, or `c` itself when the table has none.
pub fn flip_char(c: char) -> char {
    FLIP_TABLE.get(&c).copied().unwrap_or(c)
}

/// Turns `text` upside down: reverses character order and flips each character.
pub fn transform(text: &str) -> String {
    text.chars().rev().map(flip_char).collect()
}
