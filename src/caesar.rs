//! Fixed-shift substitution over the Latin alphabet.

use crate::alphabet::{Alphabet, LATIN};
use tracing::debug;

/// Shifts every letter `key` places forward, wrapping around, keeping case.
/// Anything that is not an ASCII letter is left untouched.
pub fn encode(key: i64, text: &str) -> String {
    debug!(cipher = "caesar", key, len = text.len(), "encoding");
    shift(&LATIN, key, text)
}

pub fn decode(key: i64, text: &str) -> String {
    // Reduced before negating so i64::MIN cannot overflow.
    encode(-key.rem_euclid(26), text)
}

fn shift(alphabet: &Alphabet, key: i64, text: &str) -> String {
    let key = key.rem_euclid(alphabet.len() as i64);
    text.chars()
        .map(|c| alphabet.substitute_cased(c, |i| i as i64 + key))
        .collect()
}
