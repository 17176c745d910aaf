//! Static prefix and suffix inventories.
//!
//! Tables are loaded once from TOML (embedded default or a custom file set via
//! [`init_custom`]) and never mutated afterwards. Each table keeps its entries
//! in file order and a precomputed longest-first probe order.

mod config;

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub use config::{parse_affix_toml, AffixConfigError};

pub const DEFAULT_AFFIXES_TOML: &str = include_str!("default_affixes.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom affix TOML before first `tables()` call.
pub fn init_custom(toml_content: String) -> Result<(), AffixConfigError> {
    parse_affix_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| AffixConfigError::AlreadyInitialized)
}

/// Get or initialize the global affix tables.
pub fn tables() -> &'static AffixTables {
    static INSTANCE: OnceLock<AffixTables> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_AFFIXES_TOML);
        parse_affix_toml(toml_str).expect("affix TOML must be valid")
    })
}

/// Returns the embedded default affix TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_AFFIXES_TOML
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

impl AffixKind {
    pub fn label(self) -> &'static str {
        match self {
            AffixKind::Prefix => "Prefix",
            AffixKind::Suffix => "Suffix",
        }
    }
}

/// Whether a morpheme can stand alone. Every table affix is bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Binding {
    #[default]
    Bound,
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Bound => f.write_str("bound morpheme"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffixEntry {
    pub text: String,
    pub meaning: String,
    #[serde(default)]
    pub binding: Binding,
    /// Free-text derivation tag, e.g. `derivational (negation)`.
    pub class: String,
}

#[derive(Debug, Clone)]
pub struct AffixTable {
    kind: AffixKind,
    entries: Vec<AffixEntry>,
    /// Indices into `entries`: descending length, ties in table order.
    probe_order: Vec<usize>,
}

impl AffixTable {
    pub(crate) fn new(kind: AffixKind, entries: Vec<AffixEntry>) -> Self {
        let mut probe_order: Vec<usize> = (0..entries.len()).collect();
        // sort_by_key is stable, so equal lengths keep table order.
        probe_order.sort_by_key(|&i| std::cmp::Reverse(entries[i].text.chars().count()));
        Self {
            kind,
            entries,
            probe_order,
        }
    }

    pub fn kind(&self) -> AffixKind {
        self.kind
    }

    pub fn get(&self, text: &str) -> Option<&AffixEntry> {
        self.entries.iter().find(|e| e.text == text)
    }

    /// Entries in table (file) order.
    pub fn iter(&self) -> impl Iterator<Item = &AffixEntry> {
        self.entries.iter()
    }

    /// Entries in matching order: longest first, ties in table order.
    pub fn longest_first(&self) -> impl Iterator<Item = &AffixEntry> {
        self.probe_order.iter().map(move |&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct AffixTables {
    pub prefixes: AffixTable,
    pub suffixes: AffixTable,
}

impl AffixTables {
    pub fn new(prefixes: Vec<AffixEntry>, suffixes: Vec<AffixEntry>) -> Self {
        Self {
            prefixes: AffixTable::new(AffixKind::Prefix, prefixes),
            suffixes: AffixTable::new(AffixKind::Suffix, suffixes),
        }
    }

    pub fn table(&self, kind: AffixKind) -> &AffixTable {
        match kind {
            AffixKind::Prefix => &self.prefixes,
            AffixKind::Suffix => &self.suffixes,
        }
    }
}
