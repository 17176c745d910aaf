use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::morphy::morphy;
use super::{LexicalOracle, LexiconError, Pos, Sense};
use crate::settings::{settings, LookupSettings};

const MAGIC: &[u8; 4] = b"MPLX";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 4 + 1 + 4 + 4; // magic + version + payload_len + crc32 = 13

#[derive(Debug, Default, Serialize, Deserialize)]
struct LexiconData {
    senses: BTreeMap<String, Vec<Sense>>,
    exceptions: BTreeMap<Pos, BTreeMap<String, Vec<String>>>,
}

/// Compiled lexical database: word → ordered senses, plus irregular forms.
pub struct Lexicon {
    data: LexiconData,
    lookup: LookupSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconStats {
    pub words: usize,
    pub senses: usize,
    pub exceptions: usize,
}

impl Lexicon {
    /// Build from `(word, senses)` pairs and `(pos, form, bases)` exceptions.
    ///
    /// Repeated words have their senses appended in input order.
    pub fn from_entries(
        senses: impl IntoIterator<Item = (String, Vec<Sense>)>,
        exceptions: impl IntoIterator<Item = (Pos, String, Vec<String>)>,
    ) -> Self {
        let mut data = LexiconData::default();
        for (word, list) in senses {
            data.senses.entry(word).or_default().extend(list);
        }
        for (pos, form, bases) in exceptions {
            data.exceptions
                .entry(pos)
                .or_default()
                .entry(form)
                .or_default()
                .extend(bases);
        }
        Self::with_data(data)
    }

    fn with_data(data: LexiconData) -> Self {
        Self {
            data,
            lookup: settings().lookup,
        }
    }

    /// Override the global lookup settings for this lexicon.
    pub fn with_lookup(mut self, lookup: LookupSettings) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn lookup_settings(&self) -> LookupSettings {
        self.lookup
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, LexiconError> {
        let payload = bincode::serialize(&self.data).map_err(LexiconError::Serialize)?;
        let payload_len: u32 = payload
            .len()
            .try_into()
            .map_err(|_| LexiconError::Parse("payload exceeds u32::MAX".to_string()))?;

        let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&payload_len.to_le_bytes());
        buf.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
        buf.extend_from_slice(&payload);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, LexiconError> {
        if data.len() < 5 {
            return Err(LexiconError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(LexiconError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(LexiconError::UnsupportedVersion(data[4]));
        }
        if data.len() < HEADER_SIZE {
            return Err(LexiconError::InvalidHeader);
        }

        let payload_len = read_u32(&data[5..9]) as usize;
        let expected_crc = read_u32(&data[9..13]);
        let payload = data
            .get(HEADER_SIZE..HEADER_SIZE + payload_len)
            .ok_or(LexiconError::InvalidHeader)?;

        let actual_crc = crc32fast::hash(payload);
        if actual_crc != expected_crc {
            return Err(LexiconError::ChecksumMismatch {
                expected: expected_crc,
                actual: actual_crc,
            });
        }

        let data: LexiconData = bincode::deserialize(payload).map_err(LexiconError::Deserialize)?;
        Ok(Self::with_data(data))
    }

    /// Open a lexicon file, using mmap to avoid doubling peak memory.
    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped after deserialization completes below.
        let mmap = unsafe { Mmap::map(&file)? };
        let lexicon = Self::from_bytes(&mmap)?;
        debug!(path = %path.display(), words = lexicon.data.senses.len(), "lexicon loaded");
        Ok(lexicon)
    }

    pub fn save(&self, path: &Path) -> Result<(), LexiconError> {
        Ok(fs::write(path, self.to_bytes()?)?)
    }

    /// Senses stored directly under `word`, in source order.
    pub fn senses(&self, word: &str) -> &[Sense] {
        self.data.senses.get(word).map_or(&[], |v| v.as_slice())
    }

    /// True if `word` has a sense with part of speech `pos`.
    pub fn has_pos(&self, word: &str, pos: Pos) -> bool {
        self.senses(word).iter().any(|s| s.pos == pos)
    }

    /// Irregular base forms listed for `form` under `pos`.
    pub fn exception_bases(&self, pos: Pos, form: &str) -> Option<&[String]> {
        self.data
            .exceptions
            .get(&pos)
            .and_then(|m| m.get(form))
            .map(|v| v.as_slice())
    }

    /// Senses reachable from `word` the way a synset lookup finds them:
    /// for each POS in order, the senses of every morphy base form.
    pub fn resolve_senses(&self, word: &str) -> Vec<(&str, &Sense)> {
        let mut out = Vec::new();
        for pos in Pos::ALL {
            for base in morphy(self, word, pos) {
                if let Some((key, list)) = self.data.senses.get_key_value(base.as_str()) {
                    out.extend(
                        list.iter()
                            .filter(|s| s.pos == pos)
                            .map(|s| (key.as_str(), s)),
                    );
                }
            }
        }
        out
    }

    /// Iterate over all `(word, senses)` pairs in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Sense])> {
        self.data
            .senses
            .iter()
            .map(|(w, s)| (w.as_str(), s.as_slice()))
    }

    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            words: self.data.senses.len(),
            senses: self.data.senses.values().map(|v| v.len()).sum(),
            exceptions: self.data.exceptions.values().map(|m| m.len()).sum(),
        }
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_le_bytes(buf)
}

impl LexicalOracle for Lexicon {
    fn is_known_word(&self, word: &str) -> bool {
        if !self.senses(word).is_empty() {
            return true;
        }
        self.lookup.match_inflections
            && Pos::ALL
                .iter()
                .any(|&pos| !morphy(self, word, pos).is_empty())
    }

    fn lemmatize(&self, word: &str) -> String {
        // First of the shortest candidates, else the word itself.
        morphy(self, word, self.lookup.lemma_pos)
            .into_iter()
            .reduce(|best, form| {
                if form.chars().count() < best.chars().count() {
                    form
                } else {
                    best
                }
            })
            .unwrap_or_else(|| word.to_string())
    }

    fn first_definition(&self, word: &str) -> Option<String> {
        if self.lookup.match_inflections {
            return self
                .resolve_senses(word)
                .first()
                .map(|(_, s)| s.gloss.clone());
        }
        self.senses(word).first().map(|s| s.gloss.clone())
    }
}
