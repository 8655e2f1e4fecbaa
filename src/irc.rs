//! Iterated rotation cipher. Each of `n` rounds rotates the letters of the
//! whole text right by `n` while the spaces stay put, then rotates every word
//! right by `n` modulo its length. The ciphertext carries `n` as a leading
//! token, so decoding needs no key.
//!
//! Rotations never change word lengths, which keeps the space layout of every
//! round identical to the input's. Decoding relies on that and reads the
//! layout straight off the ciphertext.

use crate::errors::CipherError;
use tracing::debug;

pub fn encode(n: usize, text: &str) -> String {
    debug!(cipher = "irc", rotations = n, len = text.len(), "encoding");
    let mut chars: Vec<char> = text.chars().collect();
    let spaces = space_positions(&chars);

    for _ in 0..n {
        let mut letters = strip_spaces(&chars);
        rotate_whole(&mut letters, n, Direction::Right);
        chars = insert_spaces(letters, &spaces);
        rotate_words(&mut chars, n, Direction::Right);
    }

    format!("{} {}", n, chars.into_iter().collect::<String>())
}

/// Reads the rotation count from the leading token and undoes [`encode`].
pub fn decode(text: &str) -> Result<String, CipherError> {
    let (token, body) = text
        .split_once(' ')
        .ok_or(CipherError::MissingRotationToken)?;
    let n: usize = token
        .parse()
        .map_err(|_| CipherError::InvalidRotationToken(token.to_string()))?;
    debug!(cipher = "irc", rotations = n, len = body.len(), "decoding");

    let mut chars: Vec<char> = body.chars().collect();
    let spaces = space_positions(&chars);

    for _ in 0..n {
        rotate_words(&mut chars, n, Direction::Left);
        let mut letters = strip_spaces(&chars);
        rotate_whole(&mut letters, n, Direction::Left);
        chars = insert_spaces(letters, &spaces);
    }

    Ok(chars.into_iter().collect())
}

#[derive(Clone, Copy)]
enum Direction {
    Left,
    Right,
}

fn rotate(slice: &mut [char], by: usize, direction: Direction) {
    match direction {
        Direction::Left => slice.rotate_left(by),
        Direction::Right => slice.rotate_right(by),
    }
}

/// Rotates by `n` only when `n` is shorter than the text; otherwise the text
/// is left alone.
fn rotate_whole(letters: &mut [char], n: usize, direction: Direction) {
    if n < letters.len() {
        rotate(letters, n, direction);
    }
}

fn rotate_words(chars: &mut [char], n: usize, direction: Direction) {
    for word in chars.split_mut(|c| *c == ' ') {
        if !word.is_empty() {
            let by = n % word.len();
            rotate(word, by, direction);
        }
    }
}

fn space_positions(chars: &[char]) -> Vec<usize> {
    chars
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == ' ')
        .map(|(i, _)| i)
        .collect()
}

fn strip_spaces(chars: &[char]) -> Vec<char> {
    chars.iter().copied().filter(|c| *c != ' ').collect()
}

/// Merges spaces back in so that they land on `positions`, which must be
/// ascending as produced by [`space_positions`].
fn insert_spaces(letters: Vec<char>, positions: &[usize]) -> Vec<char> {
    let mut out: Vec<char> = Vec::with_capacity(letters.len() + positions.len());
    let mut spaces = positions.iter().peekable();
    let mut letters = letters.into_iter();
    loop {
        if spaces.next_if(|&&i| i == out.len()).is_some() {
            out.push(' ');
            continue;
        }
        match letters.next() {
            Some(c) => out.push(c),
            None => break,
        }
    }
    out.extend(spaces.map(|_| ' '));
    out
}
