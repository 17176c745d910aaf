use std::path::PathBuf;

use clap::{Parser, Subcommand};

use morph_cli::commands::{config_ops, init_config, lexicon_ops};
use morph_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "lexdict", about = "Lexical database build tool")]
struct Cli {
    /// Custom settings (TOML), applied to lookups
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
    /// Compile a lexicon from raw files
    Compile {
        /// Lexicon source
        #[arg(long, default_value = "wordnet")]
        source: String,
        /// Input directory (wordnet) or file (tsv)
        input: String,
        /// Output file
        output_file: String,
    },
    /// Show lexicon statistics
    Info {
        /// Lexicon file
        lexicon_file: String,
    },
    /// List the senses of a word
    Lookup {
        /// Lexicon file
        lexicon_file: String,
        /// Word to look up
        word: String,
    },
    /// Show base-form candidates for every part of speech
    Lemma {
        /// Lexicon file
        lexicon_file: String,
        /// Inflected word
        word: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default affix tables as TOML
    AffixesExport,
    /// Validate a custom affix TOML file
    AffixesValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_deref());
    init_config(None, cli.settings.as_deref());

    match cli.command {
        Command::Compile {
            source,
            input,
            output_file,
        } => lexicon_ops::compile(&source, &input, &output_file),
        Command::Info { lexicon_file } => lexicon_ops::info(&lexicon_file),
        Command::Lookup { lexicon_file, word } => lexicon_ops::lookup(&lexicon_file, &word),
        Command::Lemma { lexicon_file, word } => lexicon_ops::lemma(&lexicon_file, &word),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::AffixesExport => config_ops::affixes_export(),
        Command::AffixesValidate { file } => config_ops::affixes_validate(&file),
    }
}
