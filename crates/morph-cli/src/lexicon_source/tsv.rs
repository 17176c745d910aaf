use std::fs;
use std::path::Path;

use morph_core::lexicon::{Pos, Sense};

use super::{LexiconEntries, LexiconSource, SourceError};

/// Tab-separated source: `word<TAB>pos<TAB>gloss` per line.
///
/// A gloss starting with `=` declares an irregular form instead:
/// `geese<TAB>noun<TAB>=goose`. Several bases are comma-separated.
/// Blank lines and lines starting with `#` are ignored.
pub struct TsvSource;

impl LexiconSource for TsvSource {
    fn parse(&self, input: &Path) -> Result<LexiconEntries, SourceError> {
        if !input.is_file() {
            return Err(SourceError::Missing(format!("TSV ({})", input.display())));
        }
        let content = fs::read_to_string(input)?;
        let mut entries = LexiconEntries::default();

        for (i, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut cols = line.splitn(3, '\t');
            let (Some(word), Some(pos), Some(gloss)) = (cols.next(), cols.next(), cols.next())
            else {
                return Err(SourceError::parse(input, i + 1, "expected 3 tab-separated columns"));
            };
            let word = word.trim().to_lowercase();
            if word.is_empty() {
                return Err(SourceError::parse(input, i + 1, "empty word"));
            }
            let pos = Pos::parse(pos.trim())
                .ok_or_else(|| SourceError::parse(input, i + 1, format!("unknown POS {pos:?}")))?;
            let gloss = gloss.trim();

            if let Some(bases) = gloss.strip_prefix('=') {
                let bases: Vec<String> = bases
                    .split(',')
                    .map(|b| b.trim().to_lowercase())
                    .filter(|b| !b.is_empty())
                    .collect();
                if bases.is_empty() {
                    return Err(SourceError::parse(input, i + 1, "exception without base form"));
                }
                entries.exceptions.push((pos, word, bases));
            } else {
                entries.senses.push((word, vec![Sense::new(pos, gloss)]));
            }
        }
        Ok(entries)
    }
}
