use proptest::prelude::*;

use crate::analyzer::{InputError, Segmenter};
use crate::render::{format_report, render_tree, NO_AFFIX_NOTICE};
use crate::testutil::sample_lexicon;

use super::CountingOracle;

proptest! {
    #[test]
    fn alphabetic_input_always_segments(word in "[a-zA-Z]{1,14}") {
        let lex = sample_lexicon();
        let seg = Segmenter::new(&lex).analyze(&word).unwrap();
        let rebuilt = format!(
            "{}{}{}",
            seg.prefix_text().unwrap_or(""),
            seg.root,
            seg.suffix_text().unwrap_or("")
        );
        prop_assert_eq!(rebuilt, word.to_lowercase());
        prop_assert!(!seg.root.is_empty());
    }

    #[test]
    fn non_alphabetic_input_does_no_lookups(
        word in "[a-z]{0,5}[0-9_.'-]{1,3}[a-z]{0,5}"
    ) {
        let oracle = CountingOracle::new(sample_lexicon());
        let result = Segmenter::new(&oracle).analyze(&word);
        prop_assert_eq!(result, Err(InputError::NotAlphabetic));
        prop_assert_eq!(oracle.calls(), 0);
    }

    #[test]
    fn rendering_is_pure(word in "[a-z]{1,12}") {
        let lex = sample_lexicon();
        let seg = Segmenter::new(&lex).analyze(&word).unwrap();
        prop_assert_eq!(format_report(&seg), format_report(&seg));
        prop_assert_eq!(render_tree(&seg), render_tree(&seg));
    }

    #[test]
    fn no_affix_fallback(word in "[qxz]{1,10}") {
        // No table affix starts or ends with these letters.
        let lex = sample_lexicon();
        let seg = Segmenter::new(&lex).analyze(&word).unwrap();
        prop_assert!(seg.prefix.is_none());
        prop_assert!(seg.suffix.is_none());
        prop_assert_eq!(&seg.root, &word);
        prop_assert!(format_report(&seg).ends_with(NO_AFFIX_NOTICE));
    }
}

#[test]
fn lookups_are_bounded_by_table_size() {
    let oracle = CountingOracle::new(sample_lexicon());
    let segmenter = Segmenter::new(&oracle);
    let bound = segmenter.tables().prefixes.len() + segmenter.tables().suffixes.len() + 3;
    segmenter.analyze("unkindness").unwrap();
    assert!(oracle.calls() <= bound);
}
