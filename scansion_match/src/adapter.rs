// Pronunciation-to-pattern adapter.
//
// Converts one dictionary pronunciation into a candidate stress pattern.
// Two rules soften the raw stress levels:
//
// - Monosyllables are rhythmically ambiguous — "cat" lands happily on a
//   stressed or an unstressed beat — so a one-syllable pronunciation always
//   becomes the single wildcard pattern `[any]`, whatever its listed stress.
// - A secondary stress immediately following a stressed element can realize
//   either way. Words like "turtle" (TUR-tle) and "indicator" carry a
//   secondary the dictionary marks but speech may swallow, so it is demoted
//   to `any`. The predecessor check is wildcard-aware: an `any` produced by
//   this same rule also counts as stressed, so a run of secondaries after a
//   primary demotes all the way through.
//
// Otherwise primary and secondary map to `stressed`, unstressed to
// `unstressed`. The mapping is pure; an empty pronunciation (no vowel
// phones in the source data) yields no candidate at all rather than an
// empty pattern, which would consume nothing and vacuously "match".

use scansion_dict::{Pronunciation, Stress};
use scansion_stress::{StressElement, StressPattern};

/// Derive the candidate stress pattern for one pronunciation.
///
/// Returns `None` for a pronunciation with zero syllables.
pub fn stress_pattern(pronunciation: &Pronunciation) -> Option<StressPattern> {
    let syllables = &pronunciation.syllables;
    if syllables.is_empty() {
        return None;
    }
    if syllables.len() == 1 {
        return Some(StressPattern::new(vec![StressElement::Any]));
    }

    let mut elements: Vec<StressElement> = Vec::with_capacity(syllables.len());
    for syllable in syllables {
        let mut element = match syllable.stress {
            Stress::Primary | Stress::Secondary => StressElement::Stressed,
            Stress::Unstressed => StressElement::Unstressed,
        };
        if let Some(&previous) = elements.last() {
            if syllable.stress == Stress::Secondary && previous.matches(StressElement::Stressed) {
                element = StressElement::Any;
            }
        }
        elements.push(element);
    }
    Some(StressPattern::new(elements))
}
