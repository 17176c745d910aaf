//! Regression tooling over word lists: JSONL snapshots, snapshot diffs and
//! a categorized accuracy corpus.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::process;

use serde::{Deserialize, Serialize};

use morph_core::{LexicalOracle, Segmentation, Segmenter};

use super::{open_lexicon, read_words};

/// A single snapshot entry (one per word).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub word: String,
    pub prefix: Option<String>,
    pub root: String,
    pub suffix: Option<String>,
    pub lemma: String,
}

impl SnapshotEntry {
    pub fn from_segmentation(seg: &Segmentation) -> Self {
        Self {
            word: seg.input_word.clone(),
            prefix: seg.prefix_text().map(str::to_string),
            root: seg.root.clone(),
            suffix: seg.suffix_text().map(str::to_string),
            lemma: seg.root_lemma.clone(),
        }
    }

    /// `prefix+root+suffix` with absent parts omitted.
    pub fn split(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        parts.extend(self.prefix.as_deref());
        parts.push(self.root.as_str());
        parts.extend(self.suffix.as_deref());
        parts.join("+")
    }
}

fn run_snapshot<O: LexicalOracle + ?Sized>(
    segmenter: &Segmenter<'_, O>,
    words: &[String],
) -> Vec<SnapshotEntry> {
    words
        .iter()
        .filter_map(|w| match segmenter.analyze(w) {
            Ok(seg) => Some(SnapshotEntry::from_segmentation(&seg)),
            Err(e) => {
                eprintln!("  skipped {w:?}: {e}");
                None
            }
        })
        .collect()
}

pub fn snapshot(lexicon_file: &str, input_file: &str, output_file: &str) {
    let lexicon = open_lexicon(lexicon_file);
    let segmenter = Segmenter::new(&lexicon);
    let words = read_words(input_file);
    let entries = run_snapshot(&segmenter, &words);

    let file = die!(
        fs::File::create(output_file),
        "Failed to create output file {output_file}: {}"
    );
    let mut writer = BufWriter::new(file);
    for entry in &entries {
        let line = die!(serde_json::to_string(entry), "Failed to serialize: {}");
        die!(writeln!(writer, "{line}"), "Failed to write: {}");
    }
    die!(writer.flush(), "Failed to write: {}");

    eprintln!(
        "Snapshot written: {} words -> {output_file}",
        entries.len()
    );
}

// --- Diff ---

#[derive(Debug, PartialEq, Eq)]
pub enum SnapshotChange {
    Changed { was: String, now: String },
    New { now: String },
    Removed,
}

#[derive(Debug, Default)]
pub struct SnapshotDiff {
    pub same: usize,
    /// `(word, change)` in input order, removed words last (sorted).
    pub changes: Vec<(String, SnapshotChange)>,
}

impl SnapshotDiff {
    pub fn count(&self, pred: fn(&SnapshotChange) -> bool) -> usize {
        self.changes.iter().filter(|(_, c)| pred(c)).count()
    }

    pub fn has_regressions(&self) -> bool {
        self.changes
            .iter()
            .any(|(_, c)| !matches!(c, SnapshotChange::New { .. }))
    }
}

pub fn diff_entries(current: &[SnapshotEntry], baseline: &[SnapshotEntry]) -> SnapshotDiff {
    let base: HashMap<&str, &SnapshotEntry> =
        baseline.iter().map(|e| (e.word.as_str(), e)).collect();
    let mut diff = SnapshotDiff::default();

    for entry in current {
        match base.get(entry.word.as_str()) {
            Some(old) if *old == entry => diff.same += 1,
            Some(old) => diff.changes.push((
                entry.word.clone(),
                SnapshotChange::Changed {
                    was: describe(old),
                    now: describe(entry),
                },
            )),
            None => diff.changes.push((
                entry.word.clone(),
                SnapshotChange::New {
                    now: describe(entry),
                },
            )),
        }
    }

    let seen: HashSet<&str> = current.iter().map(|e| e.word.as_str()).collect();
    let mut removed: Vec<&str> = base.keys().copied().filter(|w| !seen.contains(w)).collect();
    removed.sort_unstable();
    diff.changes.extend(
        removed
            .into_iter()
            .map(|w| (w.to_string(), SnapshotChange::Removed)),
    );
    diff
}

fn describe(entry: &SnapshotEntry) -> String {
    format!("{} (lemma {})", entry.split(), entry.lemma)
}

pub fn diff_snapshot(lexicon_file: &str, input_file: &str, baseline_file: &str) {
    let lexicon = open_lexicon(lexicon_file);
    let segmenter = Segmenter::new(&lexicon);
    let words = read_words(input_file);

    let baseline_content = die!(
        fs::read_to_string(baseline_file),
        "Failed to read baseline file {baseline_file}: {}"
    );
    let baseline: Vec<SnapshotEntry> = baseline_content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| die!(serde_json::from_str(l), "Failed to parse baseline JSONL: {}"))
        .collect();

    let current = run_snapshot(&segmenter, &words);
    let diff = diff_entries(&current, &baseline);

    for (word, change) in &diff.changes {
        match change {
            SnapshotChange::Changed { was, now } => {
                println!("  CHANGED: {word} -> {now} (was: {was})")
            }
            SnapshotChange::New { now } => println!("  NEW:     {word} -> {now}"),
            SnapshotChange::Removed => println!("  REMOVED: {word}"),
        }
    }

    println!();
    println!("=== Summary ===");
    println!("  Total:    {}", current.len());
    println!("  Same:     {}", diff.same);
    println!(
        "  Changed:  {}",
        diff.count(|c| matches!(c, SnapshotChange::Changed { .. }))
    );
    println!(
        "  New:      {}",
        diff.count(|c| matches!(c, SnapshotChange::New { .. }))
    );
    println!(
        "  Removed:  {}",
        diff.count(|c| matches!(c, SnapshotChange::Removed))
    );

    if diff.has_regressions() {
        process::exit(1);
    }
}

// --- Accuracy ---

#[derive(Debug, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

/// Expected segmentation of one word. A missing `prefix`/`suffix` means
/// none is expected.
#[derive(Debug, Deserialize)]
pub struct AccuracyCase {
    pub word: String,
    #[serde(default)]
    pub prefix: Option<String>,
    pub root: String,
    #[serde(default)]
    pub suffix: Option<String>,
    pub category: String,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

impl AccuracyCase {
    fn expected(&self) -> String {
        SnapshotEntry {
            word: self.word.clone(),
            prefix: self.prefix.clone(),
            root: self.root.clone(),
            suffix: self.suffix.clone(),
            lemma: String::new(),
        }
        .split()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct AccuracyResult {
    pub word: String,
    pub expected: String,
    pub actual: String,
    pub status: AccuracyStatus,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

impl AccuracySummary {
    pub fn from_results(results: &[AccuracyResult]) -> Self {
        let count = |s: AccuracyStatus| results.iter().filter(|r| r.status == s).count();
        let (pass, fail, skip) = (
            count(AccuracyStatus::Pass),
            count(AccuracyStatus::Fail),
            count(AccuracyStatus::Skip),
        );
        let tested = pass + fail;
        let rate = if tested > 0 {
            pass as f64 / tested as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total: results.len(),
            pass,
            fail,
            skip,
            pass_rate: format!("{rate:.1}%"),
        }
    }
}

#[derive(Debug, Serialize)]
struct AccuracyReport {
    results: Vec<AccuracyResult>,
    summary: AccuracySummary,
}

pub fn run_cases<O: LexicalOracle + ?Sized>(
    segmenter: &Segmenter<'_, O>,
    cases: &[&AccuracyCase],
) -> Vec<AccuracyResult> {
    cases
        .iter()
        .map(|case| {
            let (actual, status) = if case.skip {
                (String::new(), AccuracyStatus::Skip)
            } else {
                let actual = match segmenter.analyze(&case.word) {
                    Ok(seg) => SnapshotEntry::from_segmentation(&seg).split(),
                    Err(e) => format!("error: {e}"),
                };
                let status = if actual == case.expected() {
                    AccuracyStatus::Pass
                } else {
                    AccuracyStatus::Fail
                };
                (actual, status)
            };
            AccuracyResult {
                word: case.word.clone(),
                expected: case.expected(),
                actual,
                status,
                category: case.category.clone(),
                note: case.note.clone(),
            }
        })
        .collect()
}

impl fmt::Display for AccuracyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            AccuracyStatus::Pass => write!(f, "  \u{2713} {} \u{2192} {}", self.word, self.expected),
            AccuracyStatus::Fail => write!(
                f,
                "  \u{2717} {} \u{2192} {} (got: {})",
                self.word, self.expected, self.actual
            ),
            AccuracyStatus::Skip => write!(
                f,
                "  - {} [skip: {}]",
                self.word,
                self.note.as_deref().unwrap_or("known failure")
            ),
        }
    }
}

pub fn accuracy(
    lexicon_file: &str,
    corpus_file: &str,
    category: Option<&str>,
    verbose: bool,
    json: bool,
) {
    let lexicon = open_lexicon(lexicon_file);
    let segmenter = Segmenter::new(&lexicon);

    let content = die!(
        fs::read_to_string(corpus_file),
        "Failed to read corpus file {corpus_file}: {}"
    );
    let corpus: AccuracyCorpus = die!(toml::from_str(&content), "Failed to parse corpus TOML: {}");

    let cases: Vec<&AccuracyCase> = corpus
        .cases
        .iter()
        .filter(|c| category.map_or(true, |cat| c.category == cat))
        .collect();
    if cases.is_empty() {
        eprintln!("No cases match the given filters");
        process::exit(1);
    }

    let results = run_cases(&segmenter, &cases);
    let summary = AccuracySummary::from_results(&results);
    let failed = summary.fail > 0;

    if json {
        let report = AccuracyReport { results, summary };
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&report), "JSON serialization failed: {}")
        );
    } else {
        let mut grouped: BTreeMap<&str, Vec<&AccuracyResult>> = BTreeMap::new();
        for r in &results {
            grouped.entry(&r.category).or_default().push(r);
        }
        for (cat, group) in &grouped {
            println!("\n=== {} ({} cases) ===", cat, group.len());
            for r in group {
                if verbose || r.status != AccuracyStatus::Pass {
                    println!("{r}");
                }
            }
        }

        println!();
        println!("=== Summary ===");
        println!("  Total:     {}", summary.total);
        println!("  Pass:      {:>3}", summary.pass);
        println!("  Fail:      {:>3}", summary.fail);
        println!("  Skip:      {:>3}", summary.skip);
        println!(
            "  Pass rate: {} ({}/{})",
            summary.pass_rate,
            summary.pass,
            summary.pass + summary.fail
        );
    }

    if failed {
        process::exit(1);
    }
}
