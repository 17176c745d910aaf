//! Princeton WordNet 3.x `dict/` directory reader.
//!
//! `index.<pos>` gives each lemma's synset offsets in sense-rank order,
//! `data.<pos>` gives the gloss for each offset and `<pos>.exc` lists
//! irregular inflections.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use morph_core::lexicon::{Pos, Sense};
use tracing::debug;

use super::{gloss_definition, LexiconEntries, LexiconSource, SourceError};

const POS_FILES: [(&str, Pos); 4] = [
    ("noun", Pos::Noun),
    ("verb", Pos::Verb),
    ("adj", Pos::Adjective),
    ("adv", Pos::Adverb),
];

pub struct WordNetSource;

impl LexiconSource for WordNetSource {
    fn parse(&self, dir: &Path) -> Result<LexiconEntries, SourceError> {
        if !dir.is_dir() {
            return Err(SourceError::Missing(format!(
                "WordNet dict directory {}",
                dir.display()
            )));
        }

        let mut entries = LexiconEntries::default();
        for (name, pos) in POS_FILES {
            let data_path = dir.join(format!("data.{name}"));
            let index_path = dir.join(format!("index.{name}"));
            if !data_path.is_file() || !index_path.is_file() {
                return Err(SourceError::Missing(format!("data.{name}/index.{name}")));
            }

            let glosses = parse_data(&data_path)?;
            let before = entries.senses.len();
            parse_index(&index_path, &glosses, &mut entries.senses)?;
            debug!(
                pos = %pos,
                synsets = glosses.len(),
                lemmas = entries.senses.len() - before,
                "parsed WordNet files"
            );

            let exc_path = dir.join(format!("{name}.exc"));
            if exc_path.is_file() {
                parse_exceptions(&exc_path, pos, &mut entries.exceptions)?;
            }
        }
        Ok(entries)
    }
}

fn read_lossy(path: &Path) -> Result<String, SourceError> {
    Ok(String::from_utf8_lossy(&fs::read(path)?).into_owned())
}

/// License header lines in WordNet files start with two spaces.
fn is_header(line: &str) -> bool {
    line.is_empty() || line.starts_with(' ')
}

/// Map synset offset → sense (synset type and definition).
fn parse_data(path: &Path) -> Result<HashMap<u64, Sense>, SourceError> {
    let content = read_lossy(path)?;
    let mut synsets = HashMap::new();
    for (i, line) in content.lines().enumerate() {
        if is_header(line) {
            continue;
        }
        let (columns, gloss) = line
            .split_once('|')
            .ok_or_else(|| SourceError::parse(path, i + 1, "missing gloss separator"))?;
        let mut fields = columns.split_ascii_whitespace();
        let offset: u64 = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(|| SourceError::parse(path, i + 1, "bad synset offset"))?;
        let ss_type = fields.nth(1).unwrap_or_default();
        let pos = Pos::from_code(ss_type).ok_or_else(|| {
            SourceError::parse(path, i + 1, format!("unknown synset type {ss_type:?}"))
        })?;
        synsets.insert(offset, Sense::new(pos, gloss_definition(gloss)));
    }
    Ok(synsets)
}

fn parse_index(
    path: &Path,
    synsets: &HashMap<u64, Sense>,
    out: &mut Vec<(String, Vec<Sense>)>,
) -> Result<(), SourceError> {
    let content = read_lossy(path)?;
    for (i, line) in content.lines().enumerate() {
        if is_header(line) {
            continue;
        }
        let fields: Vec<&str> = line.split_ascii_whitespace().collect();
        let count = |idx: usize| -> Result<usize, SourceError> {
            fields
                .get(idx)
                .and_then(|f| f.parse().ok())
                .ok_or_else(|| SourceError::parse(path, i + 1, format!("bad count at field {idx}")))
        };
        let synset_cnt = count(2)?;
        let p_cnt = count(3)?;
        // lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt offsets...
        let first_offset = 4 + p_cnt + 2;
        let offsets = fields
            .get(first_offset..first_offset + synset_cnt)
            .ok_or_else(|| SourceError::parse(path, i + 1, "truncated offset list"))?;

        let mut senses = Vec::with_capacity(synset_cnt);
        for off in offsets {
            let sense = off
                .parse::<u64>()
                .ok()
                .and_then(|o| synsets.get(&o))
                .ok_or_else(|| {
                    SourceError::parse(path, i + 1, format!("unknown synset offset {off}"))
                })?;
            senses.push(sense.clone());
        }
        out.push((fields[0].to_string(), senses));
    }
    Ok(())
}

fn parse_exceptions(
    path: &Path,
    pos: Pos,
    out: &mut Vec<(Pos, String, Vec<String>)>,
) -> Result<(), SourceError> {
    let content = read_lossy(path)?;
    for (i, line) in content.lines().enumerate() {
        let mut fields = line.split_ascii_whitespace();
        let Some(form) = fields.next() else {
            continue;
        };
        let bases: Vec<String> = fields.map(str::to_string).collect();
        if bases.is_empty() {
            return Err(SourceError::parse(path, i + 1, "exception without base form"));
        }
        out.push((pos, form.to_string(), bases));
    }
    Ok(())
}
