//! Runs several ciphers back to back, as configured by a list of
//! [`CipherStep`]s.

use crate::errors::CipherError;
use crate::{caesar, column_transpose, cut_deck, index_difference, irc, polybius, ragbaby, tongues};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cipher", rename_all = "snake_case")]
pub enum CipherStep {
    Polybius,
    Caesar { key: i64 },
    Ragbaby { key: String },
    Tongues,
    IndexDifference,
    ColumnTranspose,
    Irc { rotations: usize },
    CutDeck,
}

impl CipherStep {
    pub fn name(&self) -> &'static str {
        match self {
            CipherStep::Polybius => "polybius",
            CipherStep::Caesar { .. } => "caesar",
            CipherStep::Ragbaby { .. } => "ragbaby",
            CipherStep::Tongues => "tongues",
            CipherStep::IndexDifference => "index_difference",
            CipherStep::ColumnTranspose => "column_transpose",
            CipherStep::Irc { .. } => "irc",
            CipherStep::CutDeck => "cut_deck",
        }
    }

    pub fn is_invertible(&self) -> bool {
        !matches!(self, CipherStep::ColumnTranspose)
    }

    pub fn encode(&self, text: &str) -> Result<String, CipherError> {
        let out = match self {
            CipherStep::Polybius => polybius::encode(text)?,
            CipherStep::Caesar { key } => caesar::encode(*key, text),
            CipherStep::Ragbaby { key } => ragbaby::encode(text, key),
            CipherStep::Tongues => tongues::encode(text),
            CipherStep::IndexDifference => index_difference::encode(text)?,
            CipherStep::ColumnTranspose => column_transpose::encode(text),
            CipherStep::Irc { rotations } => irc::encode(*rotations, text),
            CipherStep::CutDeck => cut_deck::encode(text),
        };
        Ok(out)
    }

    /// Polybius decoding drops its ambiguity warning here; it is still
    /// logged by [`polybius::decode`].
    pub fn decode(&self, text: &str) -> Result<String, CipherError> {
        let out = match self {
            CipherStep::Polybius => polybius::decode(text)?.text,
            CipherStep::Caesar { key } => caesar::decode(*key, text),
            CipherStep::Ragbaby { key } => ragbaby::decode(text, key),
            CipherStep::Tongues => tongues::decode(text),
            CipherStep::IndexDifference => index_difference::decode(text)?,
            CipherStep::ColumnTranspose => return Err(CipherError::NotInvertible(self.name())),
            CipherStep::Irc { .. } => irc::decode(text)?,
            CipherStep::CutDeck => cut_deck::decode(text),
        };
        Ok(out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    steps: Vec<CipherStep>,
}

impl Chain {
    pub fn new(steps: Vec<CipherStep>) -> Result<Self, CipherError> {
        for step in &steps {
            if let CipherStep::Ragbaby { key } = step {
                if !key.chars().any(|c| c.is_ascii_alphabetic()) {
                    return Err(CipherError::EmptyKey);
                }
            }
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[CipherStep] {
        &self.steps
    }

    pub fn is_invertible(&self) -> bool {
        self.steps.iter().all(CipherStep::is_invertible)
    }

    pub fn encode(&self, text: &str) -> Result<String, CipherError> {
        let mut current = text.to_string();
        for step in &self.steps {
            let next = step.encode(&current)?;
            debug!(step = step.name(), input_len = current.len(), output_len = next.len(), "applied step");
            current = next;
        }
        Ok(current)
    }

    /// Undoes [`Chain::encode`] by decoding the steps in reverse order. Fails
    /// before touching the text if any step cannot be inverted.
    pub fn decode(&self, text: &str) -> Result<String, CipherError> {
        if let Some(step) = self.steps.iter().find(|s| !s.is_invertible()) {
            return Err(CipherError::NotInvertible(step.name()));
        }
        let mut current = text.to_string();
        for step in self.steps.iter().rev() {
            let next = step.decode(&current)?;
            debug!(step = step.name(), input_len = current.len(), output_len = next.len(), "reverted step");
            current = next;
        }
        Ok(current)
    }
}
