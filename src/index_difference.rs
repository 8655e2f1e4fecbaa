//! Three-stage transform over the region alphabet: swap the case of every
//! odd-positioned letter, replace each character by its index difference
//! with its left neighbour, then mirror the first character.

use crate::alphabet::{Alphabet, REGION};
use crate::errors::CipherError;
use tracing::debug;

pub fn encode(text: &str) -> Result<String, CipherError> {
    debug!(cipher = "index_difference", len = text.len(), "encoding");
    let swapped = swap_odd_case(text.chars());
    let positions = positions(&REGION, &swapped)?;
    Ok(encode_positions(REGION.symbols(), &positions))
}

pub fn decode(text: &str) -> Result<String, CipherError> {
    debug!(cipher = "index_difference", len = text.len(), "decoding");
    let chars: Vec<char> = text.chars().collect();
    let positions = positions(&REGION, &chars)?;
    let plain = decode_positions(REGION.symbols(), &positions);
    Ok(swap_odd_case(plain.into_iter()).into_iter().collect())
}

/// Validates the whole input before anything is transformed. Swapping the
/// case of an ASCII letter never moves it out of the alphabet, so checking
/// after the swap reports the same character as checking before.
fn positions(alphabet: &Alphabet, chars: &[char]) -> Result<Vec<i64>, CipherError> {
    chars
        .iter()
        .map(|&c| {
            alphabet
                .position(c)
                .map(|p| p as i64)
                .ok_or(CipherError::OutsideAlphabet(c))
        })
        .collect()
}

// Every position is below `symbols.len()`, so a non-empty `positions`
// implies a non-empty alphabet and `wrap` always lands in range.

fn encode_positions(symbols: &[char], positions: &[i64]) -> String {
    positions
        .iter()
        .enumerate()
        .map(|(i, &p)| match i {
            0 => mirror(p),
            _ => positions[i - 1] - p,
        })
        .map(|p| symbols[wrap(p, symbols.len())])
        .collect()
}

fn decode_positions(symbols: &[char], positions: &[i64]) -> Vec<char> {
    let mut plain: Vec<i64> = Vec::with_capacity(positions.len());
    for (i, &p) in positions.iter().enumerate() {
        let q = match i {
            0 => mirror(p),
            _ => plain[i - 1] - p,
        };
        plain.push(wrap(q, symbols.len()) as i64);
    }
    plain.into_iter().map(|p| symbols[p as usize]).collect()
}

/// `-p - 1`: the index at the same distance from the end.
fn mirror(p: i64) -> i64 {
    -p - 1
}

fn wrap(i: i64, len: usize) -> usize {
    let len = len as i64;
    (((i % len) + len) % len) as usize
}

fn swap_odd_case(chars: impl Iterator<Item = char>) -> Vec<char> {
    chars
        .enumerate()
        .map(|(i, c)| match c {
            c if i % 2 == 0 => c,
            c if c.is_ascii_uppercase() => c.to_ascii_lowercase(),
            c if c.is_ascii_lowercase() => c.to_ascii_uppercase(),
            c => c,
        })
        .collect()
}
