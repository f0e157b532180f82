//! Layout-mode classification over computed-style snapshots.
//! Spec: CSS Display 3 — <https://www.w3.org/TR/css-display-3/#the-display-properties>
//! Spec: CSS Position 3 — <https://www.w3.org/TR/css-position-3/>
//!
//! Given the computed styles captured from an inspected element, [`classify`]
//! decides which layout algorithm lays the element out. The cascade is
//! ordered the way engines prioritize these mechanisms: positioning wins over
//! everything, the flex/grid/table formatting contexts win over floats, and
//! floats win over the plain flow keywords.

use std::collections::HashMap;

mod verdict;
pub use verdict::{LayoutMode, LayoutVerdict};

/// Computed-style snapshot: longhand property name to resolved value,
/// captured for one element at one instant.
pub type StyleSnapshot = HashMap<String, String>;

/// Layout-relevant longhands, in the order panels list them.
pub const LAYOUT_PROPERTIES: [&str; 9] = [
    "display", "position", "float", "clear", "z-index", "top", "right", "bottom", "left",
];

// Pre-authored text attached to each decision branch. Trusted content, never
// sourced from the page.
const POSITIONED_DETAILS: &str = "Taken out of normal flow and positioned against a containing \
     block. The top/right/bottom/left offsets and z-index apply.";
const FLEXBOX_DETAILS: &str = "Establishes a flex formatting context. Direct children become \
     flex items sized along the main axis.";
const GRID_DETAILS: &str = "Establishes a grid formatting context. Direct children become grid \
     items placed into rows and columns.";
const TABLE_DETAILS: &str =
    "Laid out by the CSS table algorithm as part of a table structure.";
const FLOAT_DETAILS: &str = "Shifted to the start or end of its line. Surrounding inline \
     content wraps around it until cleared.";
const FLOW_BLOCK_DETAILS: &str = "Block-level box in normal flow. Stacks vertically and fills \
     the inline size of its container.";
const FLOW_INLINE_DETAILS: &str =
    "Inline-level box in normal flow. Participates in line boxes alongside text.";
const FLOW_INLINE_BLOCK_DETAILS: &str = "Inline-level box that establishes a block container. \
     Flows with text while laying out its own children as blocks.";
const FLOW_FALLBACK_DETAILS: &str =
    "No layout-deciding keyword recognized. The element participates in normal flow.";

/// Classify which layout algorithm drives the element described by a
/// computed-style snapshot.
///
/// Decision order, first match wins:
/// 1. `position` absolute/fixed/sticky
/// 2. `display` flex/inline-flex
/// 3. `display` grid/inline-grid
/// 4. `display` table/inline-table/table-row/table-cell
/// 5. `float` present and not `none`
/// 6. `display` block, inline, or inline-block (normal flow)
/// 7. Fallback: normal flow with the raw display value, or `unknown` when
///    display is missing.
///
/// Total over any snapshot, including an empty one. Absent, empty, and
/// whitespace-only properties fall through to later branches; keyword
/// matching ignores ASCII case and surrounding whitespace.
#[must_use]
pub fn classify(styles: &StyleSnapshot) -> LayoutVerdict {
    if let Some(position) = style_value(styles, "position")
        && let Some(keyword) = match_keyword(position, &["absolute", "fixed", "sticky"])
    {
        return LayoutVerdict::new(LayoutMode::Positioned, keyword.to_owned(), POSITIONED_DETAILS);
    }

    let display = style_value(styles, "display");
    if let Some(value) = display {
        if let Some(keyword) = match_keyword(value, &["flex", "inline-flex"]) {
            return LayoutVerdict::new(LayoutMode::Flexbox, keyword.to_owned(), FLEXBOX_DETAILS);
        }
        if let Some(keyword) = match_keyword(value, &["grid", "inline-grid"]) {
            return LayoutVerdict::new(LayoutMode::Grid, keyword.to_owned(), GRID_DETAILS);
        }
        if let Some(keyword) =
            match_keyword(value, &["table", "inline-table", "table-row", "table-cell"])
        {
            return LayoutVerdict::new(LayoutMode::Table, keyword.to_owned(), TABLE_DETAILS);
        }
    }

    if let Some(float_value) = style_value(styles, "float")
        && !float_value.eq_ignore_ascii_case("none")
    {
        let variant = match match_keyword(float_value, &["left", "right"]) {
            Some(keyword) => keyword.to_owned(),
            None => float_value.to_owned(),
        };
        return LayoutVerdict::new(LayoutMode::Float, variant, FLOAT_DETAILS);
    }

    match display {
        Some(value) if value.eq_ignore_ascii_case("block") => {
            LayoutVerdict::new(LayoutMode::Flow, "block".to_owned(), FLOW_BLOCK_DETAILS)
        }
        Some(value) if value.eq_ignore_ascii_case("inline") => {
            LayoutVerdict::new(LayoutMode::Flow, "inline".to_owned(), FLOW_INLINE_DETAILS)
        }
        Some(value) if value.eq_ignore_ascii_case("inline-block") => LayoutVerdict::new(
            LayoutMode::Flow,
            "inline-block".to_owned(),
            FLOW_INLINE_BLOCK_DETAILS,
        ),
        Some(value) => {
            LayoutVerdict::new(LayoutMode::Flow, value.to_owned(), FLOW_FALLBACK_DETAILS)
        }
        None => LayoutVerdict::new(LayoutMode::Flow, "unknown".to_owned(), FLOW_FALLBACK_DETAILS),
    }
}

/// Look up a property, treating empty and whitespace-only values as absent.
fn style_value<'snapshot>(
    styles: &'snapshot StyleSnapshot,
    property: &str,
) -> Option<&'snapshot str> {
    styles
        .get(property)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

/// Match a raw value against recognized keywords, yielding the canonical
/// lowercase spelling on a hit.
fn match_keyword(value: &str, keywords: &[&'static str]) -> Option<&'static str> {
    keywords
        .iter()
        .find(|keyword| value.eq_ignore_ascii_case(keyword))
        .copied()
}
