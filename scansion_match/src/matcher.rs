// The greedy front-consumption matcher.
//
// A phrase is singable to a template when its words' stress patterns can be
// consumed off the template's front, word by word, ending with the template
// exactly empty. Per word, the candidate list is the override pattern alone
// if one exists, otherwise the adapter output of each dictionary
// pronunciation in dictionary order. The FIRST candidate that fits the
// remaining front wins and the walk moves on — there is no backtracking.
// Once a word commits, earlier choices are never revisited even if a later
// word then fails. Do not replace this with a search over candidate
// assignments: a full search accepts phrases the greedy walk rejects, and
// callers depend on the greedy accept/reject sets.
//
// Each run owns its working state (a clone of the template plus the choice
// list), so concurrent runs over shared read-only inputs are safe — which
// is what `check_all` does with rayon across a phrase batch.

use rayon::prelude::*;

use scansion_dict::PronunciationSource;
use scansion_stress::StressPattern;

use crate::adapter::stress_pattern;
use crate::overrides::OverrideTable;
use crate::report::{MatchReport, Verdict, WordChoice};
use crate::tokenize::tokenize;

/// Match one phrase against a template, reporting the verdict and the
/// per-word pattern commitments.
pub fn check<S: PronunciationSource>(
    phrase: &str,
    target: &StressPattern,
    source: &S,
    overrides: &OverrideTable,
) -> MatchReport {
    let mut remaining = target.clone();
    let mut choices: Vec<WordChoice> = Vec::new();

    for word in tokenize(phrase) {
        let committed = match overrides.get(&word) {
            // An override is the sole candidate; the dictionary is not
            // consulted for this word at all.
            Some(forced) => remaining
                .consume_front_if_matches(forced)
                .then(|| forced.clone()),
            None => source
                .pronunciations(&word)
                .iter()
                .filter_map(stress_pattern)
                .find(|candidate| remaining.consume_front_if_matches(candidate)),
        };
        match committed {
            Some(pattern) => choices.push(WordChoice { word, pattern }),
            None => {
                return MatchReport {
                    phrase: phrase.to_string(),
                    verdict: Verdict::NoCandidate { word },
                    choices,
                };
            }
        }
    }

    let verdict = if !remaining.is_empty() {
        Verdict::TemplateRemainder {
            leftover: remaining.len(),
        }
    } else if choices.iter().all(|choice| choice.pattern.is_lone_wildcard()) {
        // A phrase of nothing but monosyllables absorbs any template of the
        // right length through wildcards alone; that is a false positive,
        // not evidence of matching rhythm. (An empty phrase lands here too.)
        Verdict::AllWildcards
    } else {
        Verdict::Singable
    };

    MatchReport {
        phrase: phrase.to_string(),
        verdict,
        choices,
    }
}

/// Boolean singability: does the phrase cover the template exactly?
pub fn is_singable<S: PronunciationSource>(
    phrase: &str,
    target: &StressPattern,
    source: &S,
    overrides: &OverrideTable,
) -> bool {
    check(phrase, target, source, overrides).is_singable()
}

/// Match a batch of phrases in parallel. Reports come back in input order.
///
/// Each run owns its working state; the dictionary and override table are
/// shared read-only across threads.
pub fn check_all<S: PronunciationSource + Sync>(
    phrases: &[&str],
    target: &StressPattern,
    source: &S,
    overrides: &OverrideTable,
) -> Vec<MatchReport> {
    phrases
        .par_iter()
        .map(|phrase| check(phrase, target, source, overrides))
        .collect()
}

/// The phrase's stress pattern under each word's FIRST pronunciation,
/// concatenated. A word with no usable pronunciation contributes nothing.
///
/// Diagnostic only — the matcher never consults this (it may commit to
/// later pronunciations than the first).
pub fn stress_description<S: PronunciationSource>(phrase: &str, source: &S) -> StressPattern {
    let mut elements = Vec::new();
    for word in tokenize(phrase) {
        if let Some(pattern) = source
            .pronunciations(&word)
            .iter()
            .filter_map(stress_pattern)
            .next()
        {
            elements.extend(pattern.elements);
        }
    }
    StressPattern::new(elements)
}
