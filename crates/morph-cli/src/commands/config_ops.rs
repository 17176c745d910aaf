use std::fs;

use morph_core::affix::{self, AffixKind};
use morph_core::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: lookup.match_inflections={}, lookup.lemma_pos={}, segmenter.min_root_len={}",
        s.lookup.match_inflections, s.lookup.lemma_pos, s.segmenter.min_root_len
    );
}

pub fn affixes_export() {
    print!("{}", affix::default_toml());
}

pub fn affixes_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let tables = die!(affix::parse_affix_toml(&content), "Error: {}");
    println!(
        "OK: {} prefixes, {} suffixes",
        tables.table(AffixKind::Prefix).len(),
        tables.table(AffixKind::Suffix).len()
    );
}
