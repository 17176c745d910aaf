use std::fs;
use std::io;
use std::path::Path;

use morph_core::analyzer::explain;
use morph_core::{format_report, render_tree, Segmentation, Segmenter};

use super::open_lexicon;

/// Text written by `--save`: the report, a blank line, then the tree.
pub fn saved_text(seg: &Segmentation) -> String {
    format!("{}\n\n{}", format_report(seg), render_tree(seg))
}

pub fn save_analysis(seg: &Segmentation, path: &Path) -> io::Result<()> {
    fs::write(path, saved_text(seg))
}

pub fn analyze(lexicon_file: &str, word: &str, json: bool, save: Option<&str>) {
    let lexicon = open_lexicon(lexicon_file);
    let seg = die!(Segmenter::new(&lexicon).analyze(word), "Error: {}");

    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&seg), "Error serializing result: {}")
        );
    } else {
        println!("{}", format_report(&seg));
        println!();
        println!("{}", render_tree(&seg));
    }

    // A failed save is reported; the analysis above still stands.
    if let Some(path) = save {
        match save_analysis(&seg, Path::new(path)) {
            Ok(()) => eprintln!("Results saved to {path}"),
            Err(e) => eprintln!("Failed to save results to {path}: {e}"),
        }
    }
}

pub fn explain(lexicon_file: &str, word: &str, json: bool) {
    let lexicon = open_lexicon(lexicon_file);
    let segmenter = Segmenter::new(&lexicon);
    let result = die!(explain::explain(&segmenter, word), "Error: {}");

    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&result), "Error serializing result: {}")
        );
    } else {
        print!("{}", explain::format_text(&result));
    }
}
