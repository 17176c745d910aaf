use std::fs;
use std::path::Path;
use std::process;

use morph_core::lexicon::{morphy, Pos};
use morph_core::LexicalOracle;

use super::open_lexicon;
use crate::lexicon_source;

pub fn compile(source_name: &str, input: &str, output_file: &str) {
    let source = lexicon_source::from_name(source_name).unwrap_or_else(|| {
        eprintln!("Error: unknown source '{source_name}' (available: wordnet, tsv)");
        process::exit(1);
    });

    eprintln!("Source: {source_name}");
    let entries = die!(source.parse(Path::new(input)), "Error parsing lexicon: {}");

    eprintln!(
        "Building lexicon from {} lemmas ({} senses, {} exceptions)...",
        entries.senses.len(),
        entries.sense_count(),
        entries.exceptions.len()
    );

    let lexicon = entries.into_lexicon();
    die!(
        lexicon.save(Path::new(output_file)),
        "Error writing lexicon: {}"
    );

    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Wrote {output_file} ({:.1} MB)",
        file_size as f64 / 1_048_576.0
    );
}

pub fn info(lexicon_file: &str) {
    let lexicon = open_lexicon(lexicon_file);
    let stats = lexicon.stats();
    let lookup = lexicon.lookup_settings();
    println!("Lexicon: {lexicon_file}");
    println!("  Words:      {}", stats.words);
    println!("  Senses:     {}", stats.senses);
    println!("  Exceptions: {}", stats.exceptions);
    println!(
        "  Lookup:     match_inflections={}, lemma_pos={}",
        lookup.match_inflections, lookup.lemma_pos
    );
}

pub fn lookup(lexicon_file: &str, word: &str) {
    let lexicon = open_lexicon(lexicon_file);
    let word = word.trim().to_lowercase();

    let direct = lexicon.senses(&word);
    if !direct.is_empty() {
        println!("{word} ({} senses):", direct.len());
        for (i, sense) in direct.iter().enumerate() {
            println!("  {:>2}. [{}] {}", i + 1, sense.pos, sense.gloss);
        }
        return;
    }

    let resolved = lexicon.resolve_senses(&word);
    if resolved.is_empty() {
        println!("{word}: not found");
        return;
    }
    println!("{word} (via base forms, {} senses):", resolved.len());
    for (i, (base, sense)) in resolved.iter().enumerate() {
        println!("  {:>2}. {base} [{}] {}", i + 1, sense.pos, sense.gloss);
    }
}

pub fn lemma(lexicon_file: &str, word: &str) {
    let lexicon = open_lexicon(lexicon_file);
    let word = word.trim().to_lowercase();

    for pos in Pos::ALL {
        let forms = morphy::morphy(&lexicon, &word, pos);
        if forms.is_empty() {
            println!("  {:<10} -", pos.as_str());
        } else {
            println!("  {:<10} {}", pos.as_str(), forms.join(", "));
        }
    }
    println!("lemma: {}", lexicon.lemmatize(&word));
}
