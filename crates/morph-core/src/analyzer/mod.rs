//! Prefix/root/suffix segmentation.
//!
//! One prefix pass over the lower-cased word, then one suffix pass over what
//! the prefix pass left, each trying affixes longest-first and accepting the
//! first strip whose remainder the oracle knows. The surviving root is
//! lemmatized once at the end.

pub mod explain;
#[cfg(test)]
mod tests;

use std::fmt;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::affix::{self, AffixEntry, AffixKind, AffixTable, AffixTables};
use crate::lexicon::LexicalOracle;
use crate::settings::settings;

/// Rendered in place of a gloss when the root lemma is not in the lexicon.
pub const NOT_FOUND_GLOSS: &str = "not found in lexical database";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("please enter a word")]
    Empty,
    #[error("please enter only alphabetic characters")]
    NotAlphabetic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Definition {
    Gloss(String),
    NotFound,
}

impl Definition {
    pub fn as_str(&self) -> &str {
        match self {
            Definition::Gloss(g) => g,
            Definition::NotFound => NOT_FOUND_GLOSS,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Definition::Gloss(_))
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of analyzing one word.
///
/// `input_word == prefix.text + root + suffix.text` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segmentation {
    pub input_word: String,
    pub prefix: Option<AffixEntry>,
    pub suffix: Option<AffixEntry>,
    pub root: String,
    pub root_lemma: String,
    pub root_definition: Definition,
}

impl Segmentation {
    pub fn prefix_text(&self) -> Option<&str> {
        self.prefix.as_ref().map(|e| e.text.as_str())
    }

    pub fn suffix_text(&self) -> Option<&str> {
        self.suffix.as_ref().map(|e| e.text.as_str())
    }

    pub fn has_affix(&self) -> bool {
        self.prefix.is_some() || self.suffix.is_some()
    }
}

/// Outcome of trying one affix against the current word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StripOutcome {
    Accepted,
    UnknownRemainder,
    TooShort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StripAttempt {
    pub kind: AffixKind,
    pub affix: String,
    pub remainder: String,
    pub outcome: StripOutcome,
}

/// Trim and check user input, returning the lower-cased word.
pub fn validate_word(word: &str) -> Result<String, InputError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(InputError::Empty);
    }
    if !word.chars().all(char::is_alphabetic) {
        return Err(InputError::NotAlphabetic);
    }
    Ok(word.to_lowercase())
}

/// Validate and segment `word` with the global affix tables.
pub fn analyze<O: LexicalOracle + ?Sized>(
    oracle: &O,
    word: &str,
) -> Result<Segmentation, InputError> {
    Segmenter::new(oracle).analyze(word)
}

pub struct Segmenter<'a, O: LexicalOracle + ?Sized> {
    oracle: &'a O,
    tables: &'a AffixTables,
    min_root_len: usize,
}

impl<'a, O: LexicalOracle + ?Sized> Segmenter<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self::with_tables(oracle, affix::tables())
    }

    pub fn with_tables(oracle: &'a O, tables: &'a AffixTables) -> Self {
        Self {
            oracle,
            tables,
            min_root_len: settings().segmenter.min_root_len,
        }
    }

    pub fn with_min_root_len(mut self, min_root_len: usize) -> Self {
        self.min_root_len = min_root_len.max(1);
        self
    }

    pub fn tables(&self) -> &AffixTables {
        self.tables
    }

    /// Reject empty or non-alphabetic input, then segment.
    pub fn analyze(&self, word: &str) -> Result<Segmentation, InputError> {
        let word = validate_word(word)?;
        Ok(self.segment(&word))
    }

    /// Segment a word already known to be alphabetic.
    pub fn segment(&self, word: &str) -> Segmentation {
        self.segment_observed(word, &mut |_| {})
    }

    pub(crate) fn segment_observed(
        &self,
        word: &str,
        observe: &mut dyn FnMut(StripAttempt),
    ) -> Segmentation {
        let w = word.to_lowercase();
        let _span = debug_span!("segment", word = %w).entered();

        let (prefix, after_prefix) = match self.strip(&self.tables.prefixes, &w, observe) {
            Some((entry, rest)) => (Some(entry.clone()), rest),
            None => (None, w.as_str()),
        };
        let (suffix, root) = match self.strip(&self.tables.suffixes, after_prefix, observe) {
            Some((entry, rest)) => (Some(entry.clone()), rest),
            None => (None, after_prefix),
        };

        let root = root.to_string();
        let root_lemma = self.oracle.lemmatize(&root);
        let root_definition = if self.oracle.is_known_word(&root_lemma) {
            self.oracle
                .first_definition(&root_lemma)
                .map_or(Definition::NotFound, Definition::Gloss)
        } else {
            Definition::NotFound
        };

        debug!(
            prefix = prefix.as_ref().map(|e| e.text.as_str()),
            suffix = suffix.as_ref().map(|e| e.text.as_str()),
            root = %root,
            lemma = %root_lemma,
            found = root_definition.is_found(),
        );

        Segmentation {
            input_word: w,
            prefix,
            suffix,
            root,
            root_lemma,
            root_definition,
        }
    }

    /// Try every affix of `table` against `word`, longest first; return the
    /// first one whose remainder is a known word.
    fn strip<'w>(
        &self,
        table: &'a AffixTable,
        word: &'w str,
        observe: &mut dyn FnMut(StripAttempt),
    ) -> Option<(&'a AffixEntry, &'w str)> {
        for entry in table.longest_first() {
            let remainder = match table.kind() {
                AffixKind::Prefix => word.strip_prefix(entry.text.as_str()),
                AffixKind::Suffix => word.strip_suffix(entry.text.as_str()),
            };
            let Some(remainder) = remainder else {
                continue;
            };

            let outcome = if remainder.chars().count() < self.min_root_len {
                StripOutcome::TooShort
            } else if self.oracle.is_known_word(remainder) {
                StripOutcome::Accepted
            } else {
                StripOutcome::UnknownRemainder
            };
            observe(StripAttempt {
                kind: table.kind(),
                affix: entry.text.clone(),
                remainder: remainder.to_string(),
                outcome,
            });

            if outcome == StripOutcome::Accepted {
                return Some((entry, remainder));
            }
        }
        None
    }
}
