use crate::analyzer::{analyze, Definition, InputError, Segmenter};
use crate::lexicon::{Lexicon, Pos, Sense};
use crate::testutil::{default_lookup, sample_lexicon};

use super::tables;

#[test]
fn test_prefix_only_unhappiness() {
    let lex = sample_lexicon();
    let seg = analyze(&lex, "unhappiness").unwrap();
    assert_eq!(seg.input_word, "unhappiness");
    assert_eq!(seg.prefix_text(), Some("un"));
    assert_eq!(seg.prefix.as_ref().unwrap().meaning, "not, opposite of");
    // "happi" is not a word, so "ness" is not stripped.
    assert_eq!(seg.suffix, None);
    assert_eq!(seg.root, "happiness");
    assert_eq!(seg.root_lemma, "happiness");
    assert!(seg.root_definition.is_found());
}

#[test]
fn test_prefix_and_suffix() {
    let lex = sample_lexicon();
    let seg = analyze(&lex, "unkindness").unwrap();
    assert_eq!(seg.prefix_text(), Some("un"));
    // The suffix pass sees "kindness", not "unkindness" ("unkind" is unknown).
    assert_eq!(seg.suffix_text(), Some("ness"));
    assert_eq!(seg.suffix.as_ref().unwrap().meaning, "state or quality");
    assert_eq!(seg.root, "kind");
    assert_eq!(seg.root_lemma, "kind");
    assert_eq!(
        seg.root_definition,
        Definition::Gloss(
            "a category of things distinguished by some common characteristic or quality"
                .to_string()
        )
    );
}

#[test]
fn test_running_keeps_whole_word() {
    let lex = sample_lexicon();
    let seg = analyze(&lex, "running").unwrap();
    // "runn" is not a word, so "ing" is not stripped.
    assert_eq!(seg.prefix, None);
    assert_eq!(seg.suffix, None);
    assert_eq!(seg.root, "running");
    assert_eq!(seg.root_lemma, "running");
    assert_eq!(
        seg.root_definition.as_str(),
        "the act of running; traveling on foot at a fast pace"
    );
}

#[test]
fn test_unknown_word() {
    let lex = sample_lexicon();
    let seg = analyze(&lex, "xyzzy").unwrap();
    assert_eq!(seg.prefix, None);
    assert_eq!(seg.suffix, None);
    assert_eq!(seg.root, "xyzzy");
    assert_eq!(seg.root_lemma, "xyzzy");
    assert_eq!(seg.root_definition, Definition::NotFound);
    assert_eq!(seg.root_definition.as_str(), "not found in lexical database");
}

#[test]
fn test_reentry() {
    let lex = sample_lexicon();
    let seg = analyze(&lex, "reentry").unwrap();
    assert_eq!(seg.prefix_text(), Some("re"));
    assert_eq!(seg.root, "entry");
    assert_eq!(seg.suffix, None);
}

#[test]
fn test_mixed_case() {
    let lex = sample_lexicon();
    let upper = analyze(&lex, "UnHappy").unwrap();
    let lower = analyze(&lex, "unhappy").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper.input_word, "unhappy");
    assert_eq!(upper.root, "happy");
}

#[test]
fn test_ink_not_split() {
    let lex = sample_lexicon();
    let seg = analyze(&lex, "ink").unwrap();
    assert_eq!(seg.prefix, None);
    assert_eq!(seg.root, "ink");
}

#[test]
fn test_root_lemma_differs_from_root() {
    let lex = sample_lexicon();
    let seg = analyze(&lex, "cats").unwrap();
    assert_eq!(seg.root, "cats");
    assert_eq!(seg.root_lemma, "cat");
    assert!(seg.root_definition.as_str().starts_with("feline mammal"));
}

#[test]
fn test_inflected_remainder_counts_as_known() {
    let lex = sample_lexicon();
    let seg = analyze(&lex, "undid").unwrap();
    assert_eq!(seg.prefix_text(), Some("un"));
    assert_eq!(seg.root, "did");
}

#[test]
fn test_longest_prefix_wins() {
    let lex = Lexicon::from_entries(
        vec![
            ("lock".to_string(), vec![Sense::new(Pos::Noun, "a fastener")]),
            ("terlock".to_string(), vec![Sense::new(Pos::Noun, "made up")]),
        ],
        Vec::new(),
    )
    .with_lookup(default_lookup());
    let t = tables(&["in", "inter"], &["y"]);
    let seg = Segmenter::with_tables(&lex, &t).analyze("interlock").unwrap();
    assert_eq!(seg.prefix_text(), Some("inter"));
    assert_eq!(seg.root, "lock");
}

#[test]
fn test_shorter_prefix_when_longer_fails() {
    let lex = sample_lexicon();
    let t = tables(&["inter", "in"], &["y"]);
    let seg = Segmenter::with_tables(&lex, &t).analyze("inact").unwrap();
    assert_eq!(seg.prefix_text(), Some("in"));
    assert_eq!(seg.root, "act");
}

#[test]
fn test_prefix_probe_order() {
    let lex = Lexicon::from_entries(
        vec![
            ("xa".to_string(), vec![Sense::new(Pos::Noun, "first")]),
            ("bxa".to_string(), vec![Sense::new(Pos::Noun, "second")]),
        ],
        Vec::new(),
    )
    .with_lookup(default_lookup());
    // "ab" and "a" both yield known remainders; the longer one is tried first.
    let t = tables(&["ab", "a"], &["z"]);
    let seg = Segmenter::with_tables(&lex, &t).analyze("abxa").unwrap();
    assert_eq!(seg.prefix_text(), Some("ab"));
    assert_eq!(seg.root, "xa");

    let t = tables(&["b", "a"], &["z"]);
    let seg = Segmenter::with_tables(&lex, &t).analyze("abxa").unwrap();
    assert_eq!(seg.prefix_text(), Some("a"));
    assert_eq!(seg.root, "bxa");
}

#[test]
fn test_at_most_one_prefix() {
    // "reun" + "do": only "re" is removed even though "undo" would split again.
    let lex = Lexicon::from_entries(
        vec![
            ("undo".to_string(), vec![Sense::new(Pos::Verb, "cancel")]),
            ("do".to_string(), vec![Sense::new(Pos::Verb, "engage in")]),
        ],
        Vec::new(),
    )
    .with_lookup(default_lookup());
    let t = tables(&["re", "un"], &["y"]);
    let seg = Segmenter::with_tables(&lex, &t).analyze("reundo").unwrap();
    assert_eq!(seg.prefix_text(), Some("re"));
    assert_eq!(seg.root, "undo");
}

#[test]
fn test_min_root_len() {
    let lex = sample_lexicon();
    let seg = Segmenter::new(&lex)
        .with_min_root_len(3)
        .analyze("undo")
        .unwrap();
    assert_eq!(seg.prefix, None);
    assert_eq!(seg.root, "undo");

    let seg = Segmenter::new(&lex).analyze("undo").unwrap();
    assert_eq!(seg.prefix_text(), Some("un"));
    assert_eq!(seg.root, "do");
}

#[test]
fn test_whole_word_affix_is_not_stripped() {
    let lex = sample_lexicon();
    let seg = analyze(&lex, "un").unwrap();
    assert_eq!(seg.prefix, None);
    assert_eq!(seg.root, "un");
}

#[test]
fn test_input_errors() {
    let lex = sample_lexicon();
    assert_eq!(analyze(&lex, ""), Err(InputError::Empty));
    assert_eq!(analyze(&lex, "   "), Err(InputError::Empty));
    assert_eq!(analyze(&lex, "un-happy"), Err(InputError::NotAlphabetic));
    assert_eq!(analyze(&lex, "happy1"), Err(InputError::NotAlphabetic));
    assert_eq!(analyze(&lex, "two words"), Err(InputError::NotAlphabetic));
}

#[test]
fn test_surrounding_whitespace_trimmed() {
    let lex = sample_lexicon();
    let seg = analyze(&lex, "  reentry\n").unwrap();
    assert_eq!(seg.input_word, "reentry");
    assert_eq!(seg.root, "entry");
}
