use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process;

use morph_core::Lexicon;

/// Exit status when the lexical database cannot be loaded.
pub const EXIT_LEXICON_UNAVAILABLE: i32 = 2;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod analyze_ops;
pub mod config_ops;
pub mod corpus_ops;
pub mod lexicon_ops;

/// Open a compiled lexicon or exit with [`EXIT_LEXICON_UNAVAILABLE`].
pub fn open_lexicon(path: &str) -> Lexicon {
    Lexicon::open(Path::new(path)).unwrap_or_else(|e| {
        eprintln!("Error: lexical database unavailable ({path}): {e}");
        process::exit(EXIT_LEXICON_UNAVAILABLE);
    })
}

/// Install custom affix tables and settings before anything reads them.
pub fn init_config(affixes: Option<&str>, settings: Option<&str>) {
    if let Some(file) = settings {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(
            morph_core::settings::init_custom(content),
            "Error in {file}: {}"
        );
    }
    if let Some(file) = affixes {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(morph_core::affix::init_custom(content), "Error in {file}: {}");
    }
}

/// One word per line; blank lines and `#` comments are skipped.
pub(crate) fn read_words(input_file: &str) -> Vec<String> {
    let file = die!(
        fs::File::open(input_file),
        "Failed to open input file {input_file}: {}"
    );
    BufReader::new(file)
        .lines()
        .map(|l| die!(l, "Failed to read line: {}"))
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}
