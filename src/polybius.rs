//! Polybius square: each letter becomes its 1-indexed row and column in a
//! 5x5 grid where I and J share a cell.

use crate::alphabet::Alphabet;
use crate::errors::{CipherError, DecodeAmbiguityWarning};
use once_cell::sync::Lazy;
use tracing::{debug, warn};

static SQUARE: Lazy<Alphabet> = Lazy::new(|| Alphabet::new("ABCDEFGHIKLMNOPQRSTUVWXYZ"));

const SIDE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolybiusDecoding {
    pub text: String,
    pub warning: Option<DecodeAmbiguityWarning>,
}

/// Encodes `text` as digit pairs. Characters outside the square pass through.
/// Fails if the text already contains a digit, since digits are the output
/// alphabet. Any Unicode numeral counts as a digit here, including
/// non-decimal ones such as `½` and `Ⅻ`.
pub fn encode(text: &str) -> Result<String, CipherError> {
    if let Some(c) = text.chars().find(|c| c.is_numeric()) {
        return Err(CipherError::UnexpectedDigit(c));
    }
    debug!(cipher = "polybius", len = text.len(), "encoding");

    let mut out = String::with_capacity(text.len() * 2);
    for c in text.to_uppercase().chars() {
        let cell = if c == 'J' { SQUARE.position('I') } else { SQUARE.position(c) };
        match cell {
            Some(i) => {
                out.push(digit(i / SIDE + 1));
                out.push(digit(i % SIDE + 1));
            }
            None => out.push(c),
        }
    }
    Ok(out)
}

/// Decodes digit pairs back to letters. The result is uppercase and any
/// original `J` comes back as `I`; when the output holds an `I` the
/// ambiguity is reported through [`PolybiusDecoding::warning`].
pub fn decode(text: &str) -> Result<PolybiusDecoding, CipherError> {
    debug!(cipher = "polybius", len = text.len(), "decoding");

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(chars.len() / 2 + 1);
    let mut n = 0;
    while n < chars.len() {
        if chars[n].is_numeric() {
            let row = coordinate(chars[n]);
            let col = chars.get(n + 1).and_then(|c| coordinate(*c));
            let letter = match (row, col) {
                (Some(r), Some(c)) => SQUARE.symbol_at(r * SIDE + c),
                _ => None,
            };
            out.push(letter.ok_or(CipherError::MalformedCoordinate { position: n })?);
            n += 2;
        } else {
            out.push(chars[n]);
            n += 1;
        }
    }

    let warning = if out.contains('I') {
        warn!(decoded = %out, "{}", DecodeAmbiguityWarning);
        Some(DecodeAmbiguityWarning)
    } else {
        None
    };
    Ok(PolybiusDecoding { text: out, warning })
}

fn digit(n: usize) -> char {
    char::from(b'0' + n as u8)
}

/// Maps a coordinate digit `1..=5` to a zero-based offset.
fn coordinate(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d @ 1..=5) => Some(d as usize - 1),
        _ => None,
    }
}
