//! WordNet-style lemmatization ("morphy").
//!
//! A form is reduced to base forms known in a given part of speech, first via
//! the irregular-form exception lists, then by repeatedly applying suffix
//! detachment rules until some round produces a known form.

use std::collections::HashSet;

use super::{Lexicon, Pos};

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Detachment rules `(ending, replacement)` for a part of speech.
pub fn rules(pos: Pos) -> &'static [(&'static str, &'static str)] {
    match pos {
        Pos::Noun => NOUN_RULES,
        Pos::Verb => VERB_RULES,
        Pos::Adjective => ADJECTIVE_RULES,
        Pos::Adverb => &[],
    }
}

/// Base forms of `form` that have a sense in `pos`, in discovery order.
///
/// Returns an empty list when nothing is found. `form` itself is included
/// when it is already known in `pos`.
pub fn morphy(lexicon: &Lexicon, form: &str, pos: Pos) -> Vec<String> {
    if let Some(bases) = lexicon.exception_bases(pos, form) {
        let candidates = std::iter::once(form.to_string()).chain(bases.iter().cloned());
        return known_forms(lexicon, candidates, pos);
    }

    let rules = rules(pos);
    let mut frontier = detach(&[form.to_string()], rules);
    let first_round = std::iter::once(form.to_string()).chain(frontier.iter().cloned());
    let found = known_forms(lexicon, first_round, pos);
    if !found.is_empty() {
        return found;
    }

    while !frontier.is_empty() {
        frontier = detach(&frontier, rules);
        let found = known_forms(lexicon, frontier.iter().cloned(), pos);
        if !found.is_empty() {
            return found;
        }
    }
    Vec::new()
}

fn detach(forms: &[String], rules: &[(&str, &str)]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for form in forms {
        for (ending, replacement) in rules {
            if let Some(stem) = form.strip_suffix(ending) {
                let candidate = format!("{stem}{replacement}");
                if seen.insert(candidate.clone()) {
                    out.push(candidate);
                }
            }
        }
    }
    out
}

fn known_forms(
    lexicon: &Lexicon,
    forms: impl IntoIterator<Item = String>,
    pos: Pos,
) -> Vec<String> {
    let mut seen = HashSet::new();
    forms
        .into_iter()
        .filter(|f| lexicon.has_pos(f, pos) && seen.insert(f.clone()))
        .collect()
}
