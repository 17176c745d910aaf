use std::path::PathBuf;

use clap::{Parser, Subcommand};

use morph_cli::commands::{analyze_ops, corpus_ops, init_config};
use morph_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "morphtool", about = "English morpheme analyzer")]
struct Cli {
    /// Custom affix tables (TOML)
    #[arg(long, global = true)]
    affixes: Option<String>,
    /// Custom settings (TOML)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSON trace logs to this directory (requires --features trace)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a word into prefix, root and suffix
    Analyze {
        /// Path to the compiled lexicon file
        lexicon_file: String,
        /// Word to analyze
        word: String,
        /// Output as JSON instead of report and tree
        #[arg(long)]
        json: bool,
        /// Also write the report and tree to this file
        #[arg(long)]
        save: Option<String>,
    },

    /// Show every affix strip attempted for a word
    Explain {
        /// Path to the compiled lexicon file
        lexicon_file: String,
        /// Word to explain
        word: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Analyze words from a file and record results to JSONL
    Snapshot {
        /// Path to the compiled lexicon file
        lexicon_file: String,
        /// Path to the input file (one word per line)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
    },

    /// Compare current output against a saved snapshot
    DiffSnapshot {
        /// Path to the compiled lexicon file
        lexicon_file: String,
        /// Path to the input file (one word per line)
        input_file: String,
        /// Path to the baseline JSONL snapshot file
        baseline_file: String,
    },

    /// Run segmentation accuracy tests from a TOML corpus
    Accuracy {
        /// Path to the compiled lexicon file
        lexicon_file: String,
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Only run cases in this category
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_deref());
    init_config(cli.affixes.as_deref(), cli.settings.as_deref());

    match cli.command {
        Command::Analyze {
            lexicon_file,
            word,
            json,
            save,
        } => analyze_ops::analyze(&lexicon_file, &word, json, save.as_deref()),
        Command::Explain {
            lexicon_file,
            word,
            json,
        } => analyze_ops::explain(&lexicon_file, &word, json),
        Command::Snapshot {
            lexicon_file,
            input_file,
            output_file,
        } => corpus_ops::snapshot(&lexicon_file, &input_file, &output_file),
        Command::DiffSnapshot {
            lexicon_file,
            input_file,
            baseline_file,
        } => corpus_ops::diff_snapshot(&lexicon_file, &input_file, &baseline_file),
        Command::Accuracy {
            lexicon_file,
            corpus_file,
            category,
            verbose,
            json,
        } => corpus_ops::accuracy(
            &lexicon_file,
            &corpus_file,
            category.as_deref(),
            verbose,
            json,
        ),
    }
}
