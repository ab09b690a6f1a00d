// Forced stress patterns for specific words.
//
// Dictionary-derived stress is wrong for a few function words: cmudict lists
// stressed variants of "the" and "a", but articles in running speech sit on
// weak beats. An override pins a word to one fixed pattern, and that pattern
// is the SOLE candidate for the word — dictionary pronunciations are not
// consulted at all when an override is present.
//
// Keys follow the workspace casing rule: stored lowercase, queried
// lowercase, matching the tokenizer's output.

use hashbrown::HashMap;
use scansion_stress::{StressElement, StressPattern};

/// Word-to-pattern overrides consulted before the dictionary.
#[derive(Debug, Clone)]
pub struct OverrideTable {
    entries: HashMap<String, StressPattern>,
}

impl OverrideTable {
    /// An empty table.
    pub fn new() -> Self {
        OverrideTable {
            entries: HashMap::new(),
        }
    }

    /// The standard table: the articles "the" and "a" forced to a single
    /// unstressed beat.
    pub fn standard() -> Self {
        let mut table = OverrideTable::new();
        let article = StressPattern::new(vec![StressElement::Unstressed]);
        table.insert("the", article.clone());
        table.insert("a", article);
        table
    }

    /// Add or replace an override. The key is lowercased.
    pub fn insert(&mut self, word: &str, pattern: StressPattern) {
        self.entries.insert(word.to_lowercase(), pattern);
    }

    /// The forced pattern for a word, if any. Case-insensitive.
    pub fn get(&self, word: &str) -> Option<&StressPattern> {
        self.entries.get(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for OverrideTable {
    fn default() -> Self {
        OverrideTable::new()
    }
}
