use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse part of speech. Adjective satellites are folded into `Adjective`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Pos {
    /// Lookup order used when a word has senses in several parts of speech.
    pub const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adjective, Pos::Adverb];

    /// Parse a WordNet synset type code (`n`, `v`, `a`, `s`, `r`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "n" => Some(Pos::Noun),
            "v" => Some(Pos::Verb),
            "a" | "s" => Some(Pos::Adjective),
            "r" => Some(Pos::Adverb),
            _ => None,
        }
    }

    /// Parse either a WordNet code or a full name (`noun`, `adj`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_code(s).or(match s {
            "noun" => Some(Pos::Noun),
            "verb" => Some(Pos::Verb),
            "adjective" | "adj" => Some(Pos::Adjective),
            "adverb" | "adv" => Some(Pos::Adverb),
            _ => None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adjective => "adjective",
            Pos::Adverb => "adverb",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub pos: Pos,
    pub gloss: String,
}

impl Sense {
    pub fn new(pos: Pos, gloss: impl Into<String>) -> Self {
        Self {
            pos,
            gloss: gloss.into(),
        }
    }
}
