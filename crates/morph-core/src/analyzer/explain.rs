use serde::Serialize;

use crate::affix::AffixKind;
use crate::lexicon::LexicalOracle;

use super::{validate_word, InputError, Segmentation, Segmenter, StripAttempt, StripOutcome};

/// Full diagnostic result for a single word.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub segmentation: Segmentation,
    pub attempts: Vec<StripAttempt>,
}

/// Segment `word`, recording every affix whose text matched.
pub fn explain<O: LexicalOracle + ?Sized>(
    segmenter: &Segmenter<'_, O>,
    word: &str,
) -> Result<ExplainResult, InputError> {
    let word = validate_word(word)?;
    let mut attempts = Vec::new();
    let segmentation = segmenter.segment_observed(&word, &mut |a| attempts.push(a));
    Ok(ExplainResult {
        segmentation,
        attempts,
    })
}

pub fn format_text(result: &ExplainResult) -> String {
    let mut out = String::new();
    let seg = &result.segmentation;
    out.push_str(&format!("word: {}\n", seg.input_word));

    for kind in [AffixKind::Prefix, AffixKind::Suffix] {
        out.push_str(&format!("\n{} pass:\n", kind.label().to_lowercase()));
        let mut any = false;
        for a in result.attempts.iter().filter(|a| a.kind == kind) {
            any = true;
            let mark = match a.outcome {
                StripOutcome::Accepted => "\u{2713}",
                StripOutcome::UnknownRemainder => "\u{2717}",
                StripOutcome::TooShort => "-",
            };
            let note = match a.outcome {
                StripOutcome::Accepted => "known word",
                StripOutcome::UnknownRemainder => "unknown",
                StripOutcome::TooShort => "too short",
            };
            out.push_str(&format!(
                "  {mark} {:<8} \u{2192} {:<16} ({note})\n",
                a.affix, a.remainder
            ));
        }
        if !any {
            out.push_str("  (no matching affix)\n");
        }
    }

    out.push_str(&format!(
        "\nroot: {}  lemma: {}\ndefinition: {}\n",
        seg.root, seg.root_lemma, seg.root_definition
    ));
    out
}
