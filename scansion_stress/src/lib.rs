// scansion_stress — stress-pattern primitives and named rhythmic templates.
//
// The leaf crate of the scansion workspace. Provides the three-valued stress
// symbol, the pattern sequence with its front-consumption operation, and the
// named target templates a phrase is matched against. No dependency on the
// dictionary or matcher crates.
//
// Architecture:
// - `pattern.rs`: `StressElement` (stressed / unstressed / any wildcard) and
//   `StressPattern` (whole-sequence matching + prefix consumption)
// - `lib.rs` (this file): `TemplateSet` — loads and queries the named target
//   templates from JSON
//
// Templates are loaded from `data/templates.json` via `TemplateSet::from_json()`
// (JSON string in, typed struct out). The `default_templates()` convenience
// function uses `include_str!` to embed the shipped template file at compile
// time. Template constants are never mutated — a matching run clones the
// pattern it needs and consumes the clone.

pub mod pattern;

pub use pattern::{StressElement, StressPattern};

use serde::{Deserialize, Serialize};

/// The top-level JSON structure for the template file.
#[derive(Debug, serde::Deserialize)]
struct TemplateFile {
    templates: Vec<NamedTemplate>,
}

/// A target template with its lookup name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedTemplate {
    /// Short lookup name (e.g. "tmnt").
    pub name: String,
    /// The target stress sequence a phrase must cover exactly.
    pub pattern: StressPattern,
}

/// A loaded set of named target templates.
///
/// Constructed from JSON via `from_json()`. Preserves entry order from the
/// JSON file so driver output lists templates in a stable order.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: Vec<NamedTemplate>,
}

impl TemplateSet {
    /// Parse a template set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: TemplateFile = serde_json::from_str(json)?;
        Ok(TemplateSet {
            templates: file.templates,
        })
    }

    /// All templates, in file order.
    pub fn all(&self) -> &[NamedTemplate] {
        &self.templates
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> Option<&NamedTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// The names of all templates, in file order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }
}

/// Load the default template set embedded at compile time.
///
/// Uses `include_str!` to embed `data/templates.json`. Panics if the embedded
/// JSON is malformed (should never happen in a released build).
pub fn default_templates() -> TemplateSet {
    let json = include_str!("../../data/templates.json");
    TemplateSet::from_json(json).expect("embedded templates.json is malformed")
}
