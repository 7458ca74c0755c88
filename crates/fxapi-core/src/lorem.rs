//! Pseudo-latin filler text.

use rand::seq::SliceRandom;
use rand::Rng;

/// Fewest words in a `/lorem` sentence.
pub const MIN_WORDS: usize = 5;
/// Most words in a `/lorem` sentence.
pub const MAX_WORDS: usize = 20;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

/// A capitalised sentence of `min..=max` words ending in a period.
///
/// Bounds are normalised so `min >= 1` and `max >= min`.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R, min: usize, max: usize) -> String {
    let min = min.max(1);
    let max = max.max(min);
    let count = rng.gen_range(min..=max);

    let mut out = String::new();
    for i in 0..count {
        let word = WORDS.choose(rng).copied().unwrap_or("lorem");
        if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push(' ');
            out.push_str(word);
        }
    }
    out.push('.');
    out
}

/// A sentence with the default `/lorem` word bounds.
pub fn default_sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    sentence(rng, MIN_WORDS, MAX_WORDS)
}
