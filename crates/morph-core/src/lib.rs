//! Single-word morpheme segmentation.
//!
//! Splits an English word into an optional prefix, a root and an optional
//! suffix using static affix tables and a lexical oracle, then renders the
//! result as an annotated report and a small ASCII tree.

pub mod affix;
pub mod analyzer;
pub mod lexicon;
pub mod render;
pub mod settings;
#[cfg(test)]
pub(crate) mod testutil;

pub use analyzer::{analyze, Definition, InputError, Segmentation, Segmenter};
pub use lexicon::{LexicalOracle, Lexicon, LexiconError};
pub use render::{format_report, render_tree};
