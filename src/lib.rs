//! Classical, puzzle-grade cipher transforms over in-memory text.
//!
//! Every cipher is a pair of pure functions. Where a cipher is invertible,
//! decoding runs the same algorithm with an inverted parameter or with its
//! steps in reverse order. None of these offer any real secrecy.
//!
//! ```
//! use classic_ciphers::{caesar, cut_deck};
//!
//! assert_eq!(caesar::encode(3, "Attack at dawn"), "Dwwdfn dw gdzq");
//! assert_eq!(cut_deck::decode(&cut_deck::encode("ABCDE")), "ABCDE");
//! ```

pub mod alphabet;
pub mod caesar;
pub mod chain;
pub mod column_transpose;
pub mod config;
pub mod cut_deck;
pub mod errors;
pub mod index_difference;
pub mod irc;
pub mod logger;
pub mod polybius;
pub mod ragbaby;
pub mod tongues;
