// Pronunciation data types: stress levels, syllables, and pronunciations.
//
// These mirror the shape of a CMU dictionary entry after parsing. CMU data
// does not mark syllable boundaries — a syllable is identified by its vowel
// nucleus (the phone carrying a stress digit), which is all the stress
// matcher needs. Consonant phones are kept on the `Pronunciation` for
// display and debugging but carry no rhythmic information.

use serde::{Deserialize, Serialize};

/// Stress level of a syllable, from the ARPABET stress digit on its vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stress {
    /// Digit 1 — the word's main stress.
    Primary,
    /// Digit 2 (or higher) — lesser stress.
    Secondary,
    /// Digit 0 — no stress.
    Unstressed,
}

/// One syllable of a pronunciation, reduced to its vowel nucleus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    /// The vowel phone with its stress digit stripped (e.g. "IY").
    pub nucleus: String,
    /// The stress level from the digit.
    pub stress: Stress,
}

/// One pronunciation of a word: the full phone sequence plus the syllables
/// extracted from it, both in dictionary order.
///
/// A pronunciation with zero syllables (no vowel phone in the source line)
/// is representable; the matcher treats it as contributing no candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    /// All phones as listed, stress digits included (e.g. `["T", "IY1", ...]`).
    pub phones: Vec<String>,
    /// The vowel nuclei in order, one per syllable.
    pub syllables: Vec<Syllable>,
}

impl Pronunciation {
    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }
}
