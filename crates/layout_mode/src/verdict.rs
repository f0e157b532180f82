//! Verdict model: which layout algorithm won and why.

use core::fmt;
use serde::Serialize;

/// The layout algorithm family driving an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LayoutMode {
    /// Out-of-flow box placed against a containing block (absolute, fixed,
    /// sticky).
    Positioned,
    /// Flex container establishing a flex formatting context.
    Flexbox,
    /// Grid container establishing a grid formatting context.
    Grid,
    /// Box participating in the CSS table layout algorithm.
    Table,
    /// Floated box shifted out of the line and wrapped by inline content.
    Float,
    /// Normal block-and-inline flow, including the fallback when nothing
    /// more specific matched.
    Flow,
}

impl LayoutMode {
    /// Panel-facing label for this mode.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positioned => "Positioned",
            Self::Flexbox => "Flexbox",
            Self::Grid => "Grid",
            Self::Table => "Table",
            Self::Float => "Float",
            Self::Flow => "Flow",
        }
    }

    /// Cross-reference URL for the CSS module that defines this mode.
    #[must_use]
    pub const fn reference(self) -> &'static str {
        match self {
            Self::Positioned => "https://www.w3.org/TR/css-position-3/",
            Self::Flexbox => "https://www.w3.org/TR/css-flexbox-1/",
            Self::Grid => "https://www.w3.org/TR/css-grid-2/",
            Self::Table => "https://www.w3.org/TR/CSS22/tables.html",
            Self::Float => "https://www.w3.org/TR/CSS22/visuren.html#floats",
            Self::Flow => "https://www.w3.org/TR/css-display-3/#flow-layout",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification verdict for one computed-style snapshot.
///
/// Exactly one verdict exists per snapshot and it is a pure function of the
/// snapshot contents. `details` and `reference` come from a fixed table
/// keyed by the winning branch, never from page content, so the UI may
/// render them without sanitization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutVerdict {
    /// Winning layout algorithm family.
    pub mode: LayoutMode,
    /// The deciding keyword, canonical lowercase when recognized
    /// (`"unknown"` when no display value was available at all).
    pub variant: String,
    /// Pre-authored explanation of what the winning branch means.
    pub details: &'static str,
    /// URL of the CSS module defining the winning mode.
    pub reference: &'static str,
}

impl LayoutVerdict {
    /// Build a verdict for a winning mode, echoing the deciding keyword.
    #[must_use]
    pub fn new(mode: LayoutMode, variant: String, details: &'static str) -> Self {
        Self {
            mode,
            variant,
            details,
            reference: mode.reference(),
        }
    }
}

impl fmt::Display for LayoutVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.mode.label(), self.variant)
    }
}
