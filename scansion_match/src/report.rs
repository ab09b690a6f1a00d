// Match outcome types.
//
// A matching run never errors — every way a phrase can fail folds into a
// `Verdict` variant, and the report keeps the per-word pattern commitments
// for diagnostics (and for the degeneracy check in the matcher). All types
// derive serde so reports can be dumped as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use scansion_stress::StressPattern;

/// One processed word and the candidate pattern it committed to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordChoice {
    pub word: String,
    pub pattern: StressPattern,
}

/// The outcome of one matching run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The phrase's stresses cover the template exactly.
    Singable,
    /// No candidate pattern for this word fit the remaining template front
    /// (unknown word, pronunciation with no syllables, or nothing aligned).
    NoCandidate { word: String },
    /// Every word found a fit but template beats remain uncovered.
    TemplateRemainder { leftover: usize },
    /// Every committed pattern was the lone wildcard `[any]` — a
    /// monosyllable-only phrase matches any template length-for-length and
    /// carries no rhythmic evidence, so it is rejected.
    AllWildcards,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Singable => write!(f, "singable"),
            Verdict::NoCandidate { word } => write!(f, "no fit for \"{word}\""),
            Verdict::TemplateRemainder { leftover } => {
                write!(f, "{leftover} uncovered template beats")
            }
            Verdict::AllWildcards => write!(f, "monosyllables only"),
        }
    }
}

/// The full result of matching one phrase against one template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// The phrase as given (not tokenized).
    pub phrase: String,
    pub verdict: Verdict,
    /// Pattern commitments for the words processed before the run ended.
    /// On success this covers every word; on failure it stops at the word
    /// named in the verdict.
    pub choices: Vec<WordChoice>,
}

impl MatchReport {
    pub fn is_singable(&self) -> bool {
        self.verdict == Verdict::Singable
    }

    /// Compact per-word pattern summary for diagnostics, e.g.
    /// `teenage:/? mutant:/x ninja:/x turtles:/x`.
    pub fn choice_summary(&self) -> String {
        self.choices
            .iter()
            .map(|choice| format!("{}:{}", choice.word, choice.pattern))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\": {}", self.phrase, self.verdict)
    }
}
