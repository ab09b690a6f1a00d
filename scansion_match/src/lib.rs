// scansion_match — greedy stress-pattern singability matching.
//
// Decides whether a phrase can be sung to a fixed rhythmic template: the
// phrase's words are converted to candidate stress patterns from their
// dictionary pronunciations, and the template is consumed front-to-back,
// one word at a time, until it is exactly covered or matching fails.
//
// Architecture:
// - tokenize.rs: phrase → lowercase words (alphanumeric + apostrophe runs)
// - adapter.rs: pronunciation → candidate pattern (monosyllable wildcard,
//   secondary-after-stressed demotion)
// - overrides.rs: forced patterns for function words, consulted before the
//   dictionary
// - report.rs: verdicts and per-word pattern commitments
// - matcher.rs: the greedy front-consumption walk, the degeneracy check,
//   rayon batch evaluation, and the diagnostic stress description
// - main.rs: the `singability` CLI — demo phrase list against named templates
//
// The matcher is deterministic and infallible: every failure mode folds
// into a `Verdict`, never an error or a panic. The greedy no-backtracking
// policy is load-bearing — see the note in matcher.rs before changing it.

pub mod adapter;
pub mod matcher;
pub mod overrides;
pub mod report;
pub mod tokenize;

pub use adapter::stress_pattern;
pub use matcher::{check, check_all, is_singable, stress_description};
pub use overrides::OverrideTable;
pub use report::{MatchReport, Verdict, WordChoice};
pub use tokenize::tokenize;
