//! Splits text like a deck of cards: even-indexed characters first, then
//! odd-indexed ones.

use tracing::debug;

pub fn encode(text: &str) -> String {
    debug!(cipher = "cut_deck", len = text.len(), "encoding");
    let evens = text.chars().step_by(2);
    let odds = text.chars().skip(1).step_by(2);
    evens.chain(odds).collect()
}

/// Interleaves the two halves back together. For odd lengths the first half
/// is one longer and supplies the final character.
pub fn decode(text: &str) -> String {
    debug!(cipher = "cut_deck", len = text.len(), "decoding");
    let chars: Vec<char> = text.chars().collect();
    let (front, back) = chars.split_at(chars.len().div_ceil(2));

    let mut out = String::with_capacity(text.len());
    for (i, c) in front.iter().enumerate() {
        out.push(*c);
        if let Some(b) = back.get(i) {
            out.push(*b);
        }
    }
    out
}
