// Stress-pattern primitives: the three-valued stress symbol and the ordered
// sequence built from it.
//
// `StressElement` has wildcard semantics: `Any` matches both concrete values
// (and itself), while `Stressed` and `Unstressed` match only themselves.
// Matching is symmetric and reflexive but not transitive across `Any`.
//
// `StressPattern` plays two roles:
// - Target template: built once (usually via `TemplateSet` in lib.rs) and
//   never mutated in place. A matching run clones it and shrinks the clone
//   with `consume_front_if_matches`.
// - Candidate pattern: derived per word per pronunciation, immutable once
//   produced.
//
// This layer does no I/O and has no failure modes beyond boolean outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single position in a stress pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressElement {
    /// Carries stress (primary or secondary in the source pronunciation).
    Stressed,
    /// Carries no stress.
    Unstressed,
    /// Wildcard: can realize as either stressed or unstressed.
    Any,
}

impl StressElement {
    /// Wildcard-aware equality: `Any` matches everything, the concrete
    /// values match only themselves.
    pub fn matches(self, other: StressElement) -> bool {
        self == StressElement::Any || other == StressElement::Any || self == other
    }

    /// One-character scansion mark: `/` stressed, `x` unstressed, `?` any.
    pub fn mark(self) -> char {
        match self {
            StressElement::Stressed => '/',
            StressElement::Unstressed => 'x',
            StressElement::Any => '?',
        }
    }
}

impl fmt::Display for StressElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// An ordered sequence of stress elements.
///
/// The empty pattern is permitted — for a template it means "fully consumed".
/// Serializes as a bare array of element names, so a template in JSON reads
/// `["stressed", "unstressed", ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StressPattern {
    pub elements: Vec<StressElement>,
}

impl StressPattern {
    pub fn new(elements: Vec<StressElement>) -> Self {
        StressPattern { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whole-sequence match: equal length and every position-pair matches.
    pub fn matches(&self, other: &StressPattern) -> bool {
        self.elements.len() == other.elements.len()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| a.matches(*b))
    }

    /// If `candidate` matches the front of this pattern element-wise, remove
    /// that prefix and return true. On any failure (candidate longer than the
    /// remainder, or a position mismatch) return false without mutating.
    ///
    /// All-or-nothing: there is no partial consumption.
    pub fn consume_front_if_matches(&mut self, candidate: &StressPattern) -> bool {
        if candidate.elements.len() > self.elements.len() {
            return false;
        }
        let fits = candidate
            .elements
            .iter()
            .zip(&self.elements)
            .all(|(c, t)| c.matches(*t));
        if fits {
            self.elements.drain(..candidate.elements.len());
        }
        fits
    }

    /// True for the single-element `[any]` pattern — the shape every
    /// monosyllable reduces to. A match built entirely from these carries no
    /// rhythmic evidence and is rejected by the matcher.
    pub fn is_lone_wildcard(&self) -> bool {
        self.elements == [StressElement::Any]
    }
}

impl fmt::Display for StressPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            write!(f, "{}", element.mark())?;
        }
        Ok(())
    }
}
