use crate::analyzer::explain::{explain, format_text};
use crate::analyzer::{InputError, Segmenter, StripOutcome};
use crate::testutil::sample_lexicon;

#[test]
fn test_explain_records_rejected_strip() {
    let lex = sample_lexicon();
    let result = explain(&Segmenter::new(&lex), "ink").unwrap();
    assert_eq!(result.attempts.len(), 1);
    let a = &result.attempts[0];
    assert_eq!(a.affix, "in");
    assert_eq!(a.remainder, "k");
    assert_eq!(a.outcome, StripOutcome::UnknownRemainder);
    assert_eq!(result.segmentation.root, "ink");
}

#[test]
fn test_explain_accepted_strips() {
    let lex = sample_lexicon();
    let result = explain(&Segmenter::new(&lex), "unkindness").unwrap();
    let summary: Vec<(&str, &str, StripOutcome)> = result
        .attempts
        .iter()
        .map(|a| (a.affix.as_str(), a.remainder.as_str(), a.outcome))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("un", "kindness", StripOutcome::Accepted),
            ("ness", "kind", StripOutcome::Accepted),
        ]
    );
}

#[test]
fn test_explain_matches_segment() {
    let lex = sample_lexicon();
    let segmenter = Segmenter::new(&lex);
    for word in ["unhappiness", "running", "xyzzy", "reentry"] {
        let result = explain(&segmenter, word).unwrap();
        assert_eq!(result.segmentation, segmenter.analyze(word).unwrap());
    }
}

#[test]
fn test_explain_too_short() {
    let lex = sample_lexicon();
    let segmenter = Segmenter::new(&lex).with_min_root_len(3);
    let result = explain(&segmenter, "undo").unwrap();
    assert_eq!(result.attempts[0].outcome, StripOutcome::TooShort);
}

#[test]
fn test_explain_rejects_bad_input() {
    let lex = sample_lexicon();
    assert_eq!(
        explain(&Segmenter::new(&lex), "4x4").err(),
        Some(InputError::NotAlphabetic)
    );
}

#[test]
fn test_format_text() {
    let lex = sample_lexicon();
    let result = explain(&Segmenter::new(&lex), "ink").unwrap();
    let text = format_text(&result);
    assert!(text.starts_with("word: ink\n"));
    assert!(text.contains("\u{2717} in"));
    assert!(text.contains("suffix pass:\n  (no matching affix)"));
    assert!(text.contains("definition: a liquid used for printing"));
}
