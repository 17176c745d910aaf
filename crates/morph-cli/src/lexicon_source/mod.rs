mod tsv;
mod wordnet;

use std::io;
use std::path::Path;

use morph_core::lexicon::{Lexicon, Pos, Sense};

pub use tsv::TsvSource;
pub use wordnet::WordNetSource;

/// A pluggable lexicon source that parses raw lexical data into entries.
pub trait LexiconSource {
    /// Parse the file or directory at `input`.
    fn parse(&self, input: &Path) -> Result<LexiconEntries, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{file}:{line}: {reason}")]
    Parse {
        file: String,
        line: usize,
        reason: String,
    },

    #[error("no {0} files found")]
    Missing(String),
}

impl SourceError {
    pub(crate) fn parse(file: &Path, line: usize, reason: impl Into<String>) -> Self {
        SourceError::Parse {
            file: file.display().to_string(),
            line,
            reason: reason.into(),
        }
    }
}

/// Raw senses and exception lists collected from a source.
#[derive(Debug, Default)]
pub struct LexiconEntries {
    pub senses: Vec<(String, Vec<Sense>)>,
    pub exceptions: Vec<(Pos, String, Vec<String>)>,
}

impl LexiconEntries {
    pub fn sense_count(&self) -> usize {
        self.senses.iter().map(|(_, s)| s.len()).sum()
    }

    pub fn into_lexicon(self) -> Lexicon {
        Lexicon::from_entries(self.senses, self.exceptions)
    }
}

/// Create a `LexiconSource` by name. Returns `None` for unknown source names.
pub fn from_name(name: &str) -> Option<Box<dyn LexiconSource>> {
    match name {
        "wordnet" => Some(Box::new(WordNetSource)),
        "tsv" => Some(Box::new(TsvSource)),
        _ => None,
    }
}

/// Strip quoted examples from a WordNet gloss, leaving the definition text.
pub(crate) fn gloss_definition(gloss: &str) -> String {
    let mut out = String::with_capacity(gloss.len());
    let mut in_quote = false;
    for c in gloss.chars() {
        if c == '"' {
            in_quote = !in_quote;
        } else if !in_quote {
            out.push(c);
        }
    }
    out.trim()
        .trim_matches(|c: char| c == ';' || c == ' ')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_drops_examples() {
        assert_eq!(
            gloss_definition(
                "enjoying or showing or marked by joy or pleasure; \"a happy smile\"; \"spent many happy days\"  "
            ),
            "enjoying or showing or marked by joy or pleasure"
        );
    }

    #[test]
    fn definition_keeps_inner_semicolons() {
        assert_eq!(
            gloss_definition("the act of running; traveling on foot at a fast pace "),
            "the act of running; traveling on foot at a fast pace"
        );
    }

    #[test]
    fn unknown_source_name() {
        assert!(from_name("mozc").is_none());
        assert!(from_name("wordnet").is_some());
    }
}
