use crate::affix::AffixEntry;
use crate::analyzer::Segmentation;

pub const NO_AFFIX_NOTICE: &str = "No prefix or suffix found. The whole word may be the root.";

/// Annotated, one-morpheme-per-line description of a segmentation.
pub fn format_report(seg: &Segmentation) -> String {
    let mut lines = vec![format!("Results for: {}", seg.input_word)];
    if let Some(p) = &seg.prefix {
        lines.push(affix_line("Prefix", p));
    }
    lines.push(format!(
        "Root: {} | Meaning: {} | Type: free root morpheme",
        seg.root_lemma, seg.root_definition
    ));
    if let Some(s) = &seg.suffix {
        lines.push(affix_line("Suffix", s));
    }
    if !seg.has_affix() {
        lines.push(NO_AFFIX_NOTICE.to_string());
    }
    lines.join("\n")
}

fn affix_line(label: &str, entry: &AffixEntry) -> String {
    format!(
        "{label}: {} | Meaning: {} | Type: {}, {} morpheme",
        entry.text, entry.meaning, entry.binding, entry.class
    )
}
