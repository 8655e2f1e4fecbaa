//! Keyed substitution where the shift grows with the letter's position in
//! its word.

use crate::alphabet::Alphabet;
use tracing::debug;

pub fn encode(text: &str, key: &str) -> String {
    debug!(cipher = "ragbaby", len = text.len(), "encoding");
    transform(&Alphabet::keyed(key), text, 1)
}

pub fn decode(text: &str, key: &str) -> String {
    debug!(cipher = "ragbaby", len = text.len(), "decoding");
    transform(&Alphabet::keyed(key), text, -1)
}

/// The n-th letter of a run of letters moves `n * direction` places in the
/// keyed alphabet. Any non-letter passes through and restarts the count.
fn transform(alphabet: &Alphabet, text: &str, direction: i64) -> String {
    let mut j: i64 = 1;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let out = alphabet.substitute_cased(c, |i| i as i64 + j * direction);
                j += 1;
                out
            } else {
                j = 1;
                c
            }
        })
        .collect()
}
