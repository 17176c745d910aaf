use std::collections::HashSet;

use serde::Deserialize;

use super::{AffixEntry, AffixKind, AffixTables};

#[derive(Deserialize)]
struct AffixConfig {
    #[serde(default)]
    prefix: Vec<AffixEntry>,
    #[serde(default)]
    suffix: Vec<AffixEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum AffixConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[{0}]] table is empty")]
    Empty(&'static str),
    #[error("invalid affix text {0:?}: must be lower-case alphabetic")]
    InvalidText(String),
    #[error("duplicate {kind} entry: {text}")]
    Duplicate { kind: &'static str, text: String },
    #[error("empty {field} for affix: {text}")]
    EmptyField { field: &'static str, text: String },
    #[error("affix tables already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into prefix and suffix tables.
pub fn parse_affix_toml(toml_str: &str) -> Result<AffixTables, AffixConfigError> {
    let config: AffixConfig =
        toml::from_str(toml_str).map_err(|e| AffixConfigError::Parse(e.to_string()))?;

    validate(AffixKind::Prefix, &config.prefix)?;
    validate(AffixKind::Suffix, &config.suffix)?;

    Ok(AffixTables::new(config.prefix, config.suffix))
}

fn validate(kind: AffixKind, entries: &[AffixEntry]) -> Result<(), AffixConfigError> {
    let name = match kind {
        AffixKind::Prefix => "prefix",
        AffixKind::Suffix => "suffix",
    };
    if entries.is_empty() {
        return Err(AffixConfigError::Empty(name));
    }

    let mut seen = HashSet::new();
    for entry in entries {
        let text = &entry.text;
        if text.is_empty() || !text.chars().all(|c| c.is_alphabetic() && c.is_lowercase()) {
            return Err(AffixConfigError::InvalidText(text.clone()));
        }
        if entry.meaning.trim().is_empty() {
            return Err(AffixConfigError::EmptyField {
                field: "meaning",
                text: text.clone(),
            });
        }
        if entry.class.trim().is_empty() {
            return Err(AffixConfigError::EmptyField {
                field: "class",
                text: text.clone(),
            });
        }
        if !seen.insert(text.as_str()) {
            return Err(AffixConfigError::Duplicate {
                kind: name,
                text: text.clone(),
            });
        }
    }
    Ok(())
}
