//! Vowels rotate among vowels and consonants among consonants, each by half
//! its set's length.
//!
//! Rotating a set of even length `n` by `n / 2` twice is a rotation by `n`,
//! which is the identity. The single [`encode`] therefore also decodes.

use crate::alphabet::Alphabet;
use once_cell::sync::Lazy;
use tracing::debug;

static VOWELS: Lazy<Alphabet> = Lazy::new(|| Alphabet::new("AIYEOU"));
static CONSONANTS: Lazy<Alphabet> = Lazy::new(|| Alphabet::new("BKXZNHDCWGPVJQTSRLMF"));

pub fn encode(text: &str) -> String {
    debug!(cipher = "tongues", len = text.len(), "transforming");
    text.chars().map(rotate).collect()
}

/// Same as [`encode`].
pub fn decode(text: &str) -> String {
    encode(text)
}

fn rotate(c: char) -> char {
    let upper = c.to_ascii_uppercase();
    let set: &Alphabet = if VOWELS.contains(upper) {
        &*VOWELS
    } else if CONSONANTS.contains(upper) {
        &*CONSONANTS
    } else {
        return c;
    };
    let half = (set.len() / 2) as i64;
    set.substitute_cased(c, |i| i as i64 + half)
}
