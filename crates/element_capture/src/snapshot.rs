//! Snapshot of the inspected element as captured by the host.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything the inspecting host captures about the selected element at one
/// point in time.
///
/// Field names map one-to-one onto the JSON a devtools host produces
/// (`tagName`, `className`, `computedStyles`, ...). A snapshot is immutable
/// once captured and carries no identity beyond the capture event itself:
/// two selections of the same element produce two independent snapshots.
///
/// The two maps default to empty when the host omits them, so downstream
/// consumers can always assume at least an empty mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementSnapshot {
    /// Element tag name as reported by the host (hosts tend to uppercase it).
    pub tag_name: String,
    /// Value of the `id` attribute, empty when the element has none.
    pub id: String,
    /// Raw value of the `class` attribute.
    pub class_name: String,
    /// Text content of the element, when the host captured it.
    pub text_content: Option<String>,
    /// Attribute name to value mapping.
    pub attributes: HashMap<String, String>,
    /// Computed style longhand property name to resolved value mapping,
    /// as returned by the host's `getComputedStyle` equivalent.
    pub computed_styles: HashMap<String, String>,
}

impl ElementSnapshot {
    /// Iterate over the whitespace-separated class names.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_name.split_whitespace()
    }

    /// Selector-style display form of the element identity, e.g.
    /// `div#app.card.wide`. Unknown tag names render as `?`.
    pub fn descriptor(&self) -> String {
        let mut out = if self.tag_name.is_empty() {
            String::from("?")
        } else {
            self.tag_name.to_ascii_lowercase()
        };
        if !self.id.is_empty() {
            out.push('#');
            out.push_str(&self.id);
        }
        for class in self.classes() {
            out.push('.');
            out.push_str(class);
        }
        out
    }

    /// Look up one computed style value by longhand property name.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.computed_styles.get(property).map(String::as_str)
    }
}
