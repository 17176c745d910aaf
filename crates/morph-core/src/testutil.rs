use crate::lexicon::{Lexicon, Pos, Sense};
use crate::settings::LookupSettings;

fn words(list: &[(&str, &[(Pos, &str)])]) -> Vec<(String, Vec<Sense>)> {
    list.iter()
        .map(|(word, senses)| {
            (
                word.to_string(),
                senses.iter().map(|(p, g)| Sense::new(*p, *g)).collect(),
            )
        })
        .collect()
}

/// Small English lexicon with WordNet-style glosses.
pub(crate) fn sample_lexicon() -> Lexicon {
    let senses = words(&[
        ("act", &[(Pos::Noun, "something that people do or cause to happen")]),
        (
            "cat",
            &[(Pos::Noun, "feline mammal usually having thick soft fur and no ability to roar")],
        ),
        ("church", &[(Pos::Noun, "a place for public (especially Christian) worship")]),
        ("class", &[(Pos::Noun, "a collection of things sharing a common attribute")]),
        ("do", &[(Pos::Verb, "engage in")]),
        ("entry", &[(Pos::Noun, "an item inserted in a written record")]),
        ("goose", &[(Pos::Noun, "web-footed long-necked typically gregarious migratory aquatic birds")]),
        (
            "happiness",
            &[(
                Pos::Noun,
                "state of well-being characterized by emotions ranging from contentment to intense joy",
            )],
        ),
        ("happy", &[(Pos::Adjective, "enjoying or showing or marked by joy or pleasure")]),
        ("ink", &[(Pos::Noun, "a liquid used for printing or writing or drawing")]),
        (
            "kind",
            &[
                (
                    Pos::Noun,
                    "a category of things distinguished by some common characteristic or quality",
                ),
                (Pos::Adjective, "having or showing a tender and considerate and helpful nature"),
            ],
        ),
        ("kindness", &[(Pos::Noun, "the quality of being warmhearted and considerate")]),
        ("lock", &[(Pos::Noun, "a fastener fitted to a door or drawer")]),
        ("quickly", &[(Pos::Adverb, "with rapid movements")]),
        (
            "run",
            &[
                (Pos::Noun, "a score in baseball made by a runner touching all four bases"),
                (Pos::Verb, "move fast by using one's feet"),
            ],
        ),
        (
            "running",
            &[
                (Pos::Noun, "the act of running; traveling on foot at a fast pace"),
                (Pos::Adjective, "of advancing the ball by running"),
            ],
        ),
        ("woman", &[(Pos::Noun, "an adult female person")]),
    ]);
    let exceptions = vec![
        (Pos::Noun, "geese".to_string(), vec!["goose".to_string()]),
        (Pos::Verb, "running".to_string(), vec!["run".to_string()]),
        (Pos::Verb, "did".to_string(), vec!["do".to_string()]),
    ];
    Lexicon::from_entries(senses, exceptions).with_lookup(default_lookup())
}

/// Lookup settings matching the embedded defaults, independent of the global singleton.
pub(crate) fn default_lookup() -> LookupSettings {
    LookupSettings {
        match_inflections: true,
        lemma_pos: Pos::Noun,
    }
}
