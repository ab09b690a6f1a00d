// scansion_dict — CMU-format pronouncing dictionary.
//
// Parses the cmudict/cmusphinx text format and answers "how might this word
// be pronounced?" as an ordered list of pronunciations, each an ordered list
// of syllables with stress levels. This crate is the matcher's single
// external data dependency, consumed through the `PronunciationSource` trait
// so any equivalent pronunciation source can stand in (tests use hand-built
// fakes).
//
// Format notes (see the header of `data/cmudict_subset.dict`):
// - One entry per line: headword, then phones, whitespace-separated.
// - Alternate pronunciations repeat the headword with a `(N)` suffix. File
//   order is the authority on pronunciation order — lookups return
//   pronunciations exactly as listed, never re-sorted.
// - Vowel phones end in a stress digit (0 unstressed, 1 primary, 2+
//   secondary); each vowel phone is one syllable nucleus.
// - `;;;` starts a comment line, `#` starts an inline comment.
//
// The shipped dictionary is embedded at compile time (`include_str!` +
// parse-at-load via `default_dictionary()`). Lookups are case-insensitive:
// headwords are stored lowercase and queries are lowercased.

pub mod types;

pub use types::{Pronunciation, Stress, Syllable};

use std::error::Error;
use std::fmt;

use hashbrown::HashMap;

/// A malformed line in a dictionary source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictError {
    /// 1-based line number of the offending line.
    pub line: usize,
    message: String,
}

impl DictError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        DictError {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for DictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dictionary line {}: {}", self.line, self.message)
    }
}

impl Error for DictError {}

/// A loaded pronouncing dictionary.
///
/// Maps lowercase headwords to their pronunciations in file order.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl Dictionary {
    /// Parse a dictionary from CMU-format text.
    ///
    /// Pronunciations for the same headword (base form plus `(N)` variants)
    /// are collected in the order the lines appear.
    pub fn from_text(text: &str) -> Result<Self, DictError> {
        let mut entries: HashMap<String, Vec<Pronunciation>> = HashMap::new();
        for (index, raw_line) in text.lines().enumerate() {
            let line_no = index + 1;
            if let Some((headword, pronunciation)) = parse_line(raw_line, line_no)? {
                entries.entry(headword).or_default().push(pronunciation);
            }
        }
        Ok(Dictionary { entries })
    }

    /// Number of distinct headwords.
    pub fn word_count(&self) -> usize {
        self.entries.len()
    }

    /// All pronunciations for a word, in dictionary order. Case-insensitive;
    /// unknown words return an empty slice.
    pub fn lookup(&self, word: &str) -> &[Pronunciation] {
        self.entries
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// The lookup interface the matcher consumes.
///
/// Zero matches is an empty slice, never an error. Implementations must be
/// safe for concurrent read access (the batch matcher shares one source
/// across threads); `Dictionary` is, since it is immutable after load.
pub trait PronunciationSource {
    fn pronunciations(&self, word: &str) -> &[Pronunciation];
}

impl PronunciationSource for Dictionary {
    fn pronunciations(&self, word: &str) -> &[Pronunciation] {
        self.lookup(word)
    }
}

/// Parse one line. Returns `Ok(None)` for blank and comment lines.
fn parse_line(raw_line: &str, line_no: usize) -> Result<Option<(String, Pronunciation)>, DictError> {
    // Strip inline comments, then surrounding whitespace.
    let line = match raw_line.find('#') {
        Some(pos) => &raw_line[..pos],
        None => raw_line,
    };
    let line = line.trim();
    if line.is_empty() || line.starts_with(";;;") {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let Some(head_token) = tokens.next() else {
        return Ok(None);
    };
    let headword = parse_headword(head_token, line_no)?;

    let phones: Vec<String> = tokens.map(str::to_string).collect();
    if phones.is_empty() {
        return Err(DictError::new(
            line_no,
            format!("entry '{headword}' has no phones"),
        ));
    }

    // A syllable per vowel phone. A line with no vowel phones yields an
    // empty syllable list, which downstream treats as "no viable candidate".
    let mut syllables = Vec::new();
    for phone in &phones {
        if let Some(last) = phone.chars().last() {
            if let Some(digit) = last.to_digit(10) {
                let stress = match digit {
                    0 => Stress::Unstressed,
                    1 => Stress::Primary,
                    _ => Stress::Secondary,
                };
                syllables.push(Syllable {
                    nucleus: phone[..phone.len() - 1].to_string(),
                    stress,
                });
            }
        }
    }

    Ok(Some((
        headword,
        Pronunciation { phones, syllables },
    )))
}

/// Parse a headword token, validating and discarding any `(N)` variant
/// suffix. Returns the lowercase headword.
fn parse_headword(token: &str, line_no: usize) -> Result<String, DictError> {
    let word = match token.find('(') {
        Some(open) => {
            let inner = token[open..]
                .strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'))
                .ok_or_else(|| {
                    DictError::new(line_no, format!("malformed variant suffix in '{token}'"))
                })?;
            if inner.is_empty() || !inner.chars().all(|c| c.is_ascii_digit()) {
                return Err(DictError::new(
                    line_no,
                    format!("malformed variant suffix in '{token}'"),
                ));
            }
            &token[..open]
        }
        None => token,
    };
    if word.is_empty() {
        return Err(DictError::new(line_no, "empty headword"));
    }
    Ok(word.to_lowercase())
}

/// Load the default dictionary embedded at compile time.
///
/// Uses `include_str!` to embed `data/cmudict_subset.dict`. Panics if the
/// embedded text is malformed (should never happen in a released build).
pub fn default_dictionary() -> Dictionary {
    let text = include_str!("../../data/cmudict_subset.dict");
    Dictionary::from_text(text).expect("embedded cmudict_subset.dict is malformed")
}
