use crate::analyzer::Segmentation;

use super::pad::{center, ljust, rjust};

pub const TREE_TITLE: &str = "Morpheme Tree:";

/// Fixed-layout ASCII tree, one of four shapes depending on which affixes
/// were found.
pub fn render_tree(seg: &Segmentation) -> String {
    let word = seg.input_word.as_str();
    let lemma = seg.root_lemma.as_str();
    let mut lines = vec![TREE_TITLE.to_string()];

    match (seg.prefix_text(), seg.suffix_text()) {
        (Some(prefix), Some(suffix)) => {
            lines.push(format!("    {word}"));
            lines.push("    /    |    \\".to_string());
            lines.push(format!(
                "{}{}{}",
                center(prefix, 5),
                center(lemma, 10),
                center(suffix, 4)
            ));
        }
        (Some(prefix), None) => {
            lines.push(center(word, 16));
            lines.push("     /   |".to_string());
            lines.push("    /    |".to_string());
            lines.push(format!("{}{}", ljust(prefix, 5), rjust(lemma, 7)));
        }
        (None, Some(suffix)) => {
            lines.push(center(word, 18));
            lines.push("     |    \\".to_string());
            lines.push("     |      \\".to_string());
            lines.push(format!("   {}{}", ljust(lemma, 8), rjust(suffix, 5)));
        }
        (None, None) => {
            lines.push(format!("      {lemma}"));
            lines.push("    /   |   \\".to_string());
            lines.push(format!("  {}{}{}", center("...", 2), center(lemma, 8), center("...", 8)));
        }
    }
    lines.join("\n")
}
