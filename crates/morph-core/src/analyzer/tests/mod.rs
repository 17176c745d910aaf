mod basic;
mod explain;
mod properties;

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::affix::{AffixEntry, AffixTables, Binding};
use crate::lexicon::{LexicalOracle, Lexicon};

/// Oracle wrapper that counts every query.
pub(super) struct CountingOracle {
    pub inner: Lexicon,
    pub calls: AtomicUsize,
}

impl CountingOracle {
    pub fn new(inner: Lexicon) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LexicalOracle for CountingOracle {
    fn is_known_word(&self, word: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.is_known_word(word)
    }

    fn lemmatize(&self, word: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.lemmatize(word)
    }

    fn first_definition(&self, word: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.first_definition(word)
    }
}

pub(super) fn affix(text: &str, meaning: &str) -> AffixEntry {
    AffixEntry {
        text: text.to_string(),
        meaning: meaning.to_string(),
        binding: Binding::Bound,
        class: "derivational".to_string(),
    }
}

pub(super) fn tables(prefixes: &[&str], suffixes: &[&str]) -> AffixTables {
    AffixTables::new(
        prefixes.iter().map(|p| affix(p, "prefix")).collect(),
        suffixes.iter().map(|s| affix(s, "suffix")).collect(),
    )
}
