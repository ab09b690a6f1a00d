// End-to-end singability tests over the embedded dictionary and templates.
//
// Exercises the full stack — tokenizer, dictionary lookup, adapter,
// overrides, matcher — exactly the way the CLI driver uses it, with no
// fakes. Everything here depends on the shipped data files, so these tests
// double as integrity checks on `data/cmudict_subset.dict` and
// `data/templates.json`.

use scansion_dict::default_dictionary;
use scansion_match::{OverrideTable, Verdict, check, check_all, is_singable, stress_description};
use scansion_stress::{StressPattern, default_templates};

fn tmnt() -> StressPattern {
    default_templates().get("tmnt").unwrap().pattern.clone()
}

fn london_bridge() -> StressPattern {
    default_templates()
        .get("london_bridge")
        .unwrap()
        .pattern
        .clone()
}

#[test]
fn the_canonical_phrase_is_singable() {
    let dictionary = default_dictionary();
    let overrides = OverrideTable::standard();
    let report = check(
        "teenage mutant ninja turtles",
        &tmnt(),
        &dictionary,
        &overrides,
    );
    assert_eq!(report.verdict, Verdict::Singable);
    // "teenage" ends in a secondary right after its primary, so its second
    // beat is a wildcard; the rest are plain trochees.
    assert_eq!(
        report.choice_summary(),
        "teenage:/? mutant:/x ninja:/x turtles:/x"
    );
}

#[test]
fn articles_ride_weak_beats_via_overrides() {
    let dictionary = default_dictionary();
    let overrides = OverrideTable::standard();
    assert!(is_singable(
        "I just ate the Wednesday whopper",
        &tmnt(),
        &dictionary,
        &overrides
    ));
}

#[test]
fn phrase_with_unknown_word_is_not_singable() {
    let dictionary = default_dictionary();
    let overrides = OverrideTable::standard();
    let report = check(
        "teenage mutant ninja xylograph",
        &tmnt(),
        &dictionary,
        &overrides,
    );
    assert_eq!(report.verdict, Verdict::NoCandidate {
        word: "xylograph".to_string()
    });
}

#[test]
fn eight_beat_phrase_cannot_cover_eleven_beats() {
    let dictionary = default_dictionary();
    let overrides = OverrideTable::standard();
    let report = check(
        "teenage mutant ninja turtles",
        &london_bridge(),
        &dictionary,
        &overrides,
    );
    assert_eq!(report.verdict, Verdict::TemplateRemainder { leftover: 3 });
}

#[test]
fn london_bridge_lyric_fits_its_own_template() {
    let dictionary = default_dictionary();
    let overrides = OverrideTable::standard();
    assert!(is_singable(
        "london bridge is falling down my fair lady",
        &london_bridge(),
        &dictionary,
        &overrides
    ));
}

#[test]
fn monosyllable_run_is_degenerate_even_at_matching_length() {
    let dictionary = default_dictionary();
    let overrides = OverrideTable::new();
    // Eight monosyllables cover eight beats through wildcards alone — and
    // that is exactly what the degeneracy rule rejects.
    let report = check(
        "poop too long and take my top cat",
        &tmnt(),
        &dictionary,
        &overrides,
    );
    assert_eq!(report.verdict, Verdict::AllWildcards);
}

#[test]
fn batch_matches_single_runs() {
    let dictionary = default_dictionary();
    let overrides = OverrideTable::standard();
    let phrases = [
        "teenage mutant ninja turtles",
        "very good pronunciation",
        "teenage mutant ninja xylograph",
    ];
    let target = tmnt();
    let reports = check_all(&phrases, &target, &dictionary, &overrides);
    assert_eq!(reports.len(), phrases.len());
    for (report, phrase) in reports.iter().zip(phrases) {
        assert_eq!(report.phrase, phrase);
        assert_eq!(
            report.is_singable(),
            is_singable(phrase, &target, &dictionary, &overrides)
        );
    }
}

#[test]
fn stress_description_of_the_canonical_phrase() {
    let dictionary = default_dictionary();
    assert_eq!(
        stress_description("teenage mutant ninja turtles", &dictionary).to_string(),
        "/?/x/x/x"
    );
}
