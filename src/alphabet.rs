//! Ordered symbol sets used for modular index arithmetic.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The 26-letter Latin alphabet, uppercase.
pub static LATIN: Lazy<Alphabet> = Lazy::new(|| Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ"));

/// Letters in both cases, digits and common punctuation, in that order.
pub static REGION: Lazy<Alphabet> = Lazy::new(|| {
    Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789.,:;-?! '()$%&\"")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    /// Builds an alphabet from `symbols`. A repeated symbol keeps the index
    /// of its first occurrence.
    pub fn new(symbols: &str) -> Self {
        let symbols: Vec<char> = symbols.chars().collect();
        let mut index = HashMap::with_capacity(symbols.len());
        for (i, c) in symbols.iter().enumerate() {
            index.entry(*c).or_insert(i);
        }
        Self { symbols, index }
    }

    /// Ragbaby alphabet: the key's letters uppercased, first occurrence only,
    /// followed by the unused Latin letters in natural order. Non-letters in
    /// the key are ignored.
    pub fn keyed(key: &str) -> Self {
        let mut order = String::with_capacity(LATIN.len());
        for c in key.chars().filter(char::is_ascii_alphabetic) {
            let upper = c.to_ascii_uppercase();
            if !order.contains(upper) {
                order.push(upper);
            }
        }
        for c in LATIN.symbols() {
            if !order.contains(*c) {
                order.push(*c);
            }
        }
        Self::new(&order)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn position(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.index.contains_key(&c)
    }

    pub fn symbol_at(&self, i: usize) -> Option<char> {
        self.symbols.get(i).copied()
    }

    /// Resolves a signed index modulo the alphabet length, so `-1` is the
    /// last symbol. `None` only for an empty alphabet.
    pub fn wrapped(&self, i: i64) -> Option<char> {
        let len = self.symbols.len() as i64;
        if len == 0 {
            return None;
        }
        self.symbol_at(i.rem_euclid(len) as usize)
    }

    /// Replaces an ASCII letter with `shift(position)` looked up in this
    /// (uppercase) alphabet, keeping the letter's case. Characters whose
    /// uppercase form is not in the alphabet are returned as is.
    pub fn substitute_cased(&self, c: char, shift: impl FnOnce(usize) -> i64) -> char {
        if !c.is_ascii_alphabetic() {
            return c;
        }
        match self
            .position(c.to_ascii_uppercase())
            .and_then(|i| self.wrapped(shift(i)))
        {
            Some(out) if c.is_ascii_uppercase() => out,
            Some(out) => out.to_ascii_lowercase(),
            None => c,
        }
    }
}
