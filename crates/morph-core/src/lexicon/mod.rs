//! Lexical database access.
//!
//! `LexicalOracle` is the read-only query interface the segmenter depends on.
//! `Lexicon` is the compiled implementation: word → senses plus per-POS
//! exception lists, stored in an `MPLX` binary file.

mod entry;
pub mod morphy;
mod store;

pub use entry::{Pos, Sense};
pub use store::{Lexicon, LexiconStats};

use std::io;

/// Unified error type for lexicon binary I/O.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected MPLX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("checksum mismatch (expected {expected:08x}, got {actual:08x})")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Read-only questions the segmenter asks about candidate roots.
///
/// Callers lower-case before calling; implementations compare as given.
pub trait LexicalOracle: Send + Sync {
    /// True iff the database has at least one sense for `word`.
    fn is_known_word(&self, word: &str) -> bool;

    /// Canonical base form of `word`, or `word` unchanged when no rule applies.
    fn lemmatize(&self, word: &str) -> String;

    /// Gloss of the first sense of `word`, if it is known.
    fn first_definition(&self, word: &str) -> Option<String>;
}
