//! Render-ready report the panel derives from one selection event.

use element_capture::{ElementSnapshot, SelectionSeq};
use layout_mode::{LAYOUT_PROPERTIES, LayoutVerdict, classify};
use serde::Serialize;

/// Longest text preview carried in a report, in characters.
const TEXT_PREVIEW_MAX: usize = 80;

/// Identity summary of the inspected element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElementSummary {
    /// `tag#id.class` display form, precomputed from the snapshot.
    pub descriptor: String,
    pub tag_name: String,
    pub id: String,
    pub classes: Vec<String>,
}

impl ElementSummary {
    fn from_snapshot(snapshot: &ElementSnapshot) -> Self {
        Self {
            descriptor: snapshot.descriptor(),
            tag_name: snapshot.tag_name.clone(),
            id: snapshot.id.clone(),
            classes: snapshot.classes().map(str::to_owned).collect(),
        }
    }
}

/// Everything the UI needs to render the panel for one selection.
///
/// Built once per applied selection event; the panel hands out references
/// and never mutates a report in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelReport {
    /// Selection event this report derives from.
    pub seq: SelectionSeq,
    pub element: ElementSummary,
    pub verdict: LayoutVerdict,
    /// Raw values of the layout longhands, in panel order, present ones only.
    pub layout_styles: Vec<(String, String)>,
    /// Attribute pairs, sorted by name.
    pub attributes: Vec<(String, String)>,
    /// Leading element text, whitespace-collapsed and truncated for display.
    pub text_preview: Option<String>,
}

impl PanelReport {
    /// Classify a captured snapshot and assemble the report around the
    /// verdict.
    #[must_use]
    pub fn from_snapshot(seq: SelectionSeq, snapshot: &ElementSnapshot) -> Self {
        let verdict = classify(&snapshot.computed_styles);
        let layout_styles = LAYOUT_PROPERTIES
            .iter()
            .filter_map(|property| {
                snapshot
                    .style(property)
                    .map(|value| ((*property).to_owned(), value.to_owned()))
            })
            .collect();
        let mut attributes: Vec<(String, String)> = snapshot
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        attributes.sort();
        let text_preview = snapshot
            .text_content
            .as_deref()
            .map(preview)
            .filter(|text| !text.is_empty());

        Self {
            seq,
            element: ElementSummary::from_snapshot(snapshot),
            verdict,
            layout_styles,
            attributes,
            text_preview,
        }
    }

    /// Render the report as plain text lines for terminal-style panels.
    #[must_use]
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("element: {}", self.element.descriptor),
            format!("layout: {}", self.verdict),
            format!("details: {}", self.verdict.details),
            format!("reference: {}", self.verdict.reference),
        ];
        if !self.layout_styles.is_empty() {
            lines.push("layout styles:".to_owned());
            for (name, value) in &self.layout_styles {
                lines.push(format!("  {name}: {value}"));
            }
        }
        if !self.attributes.is_empty() {
            lines.push("attributes:".to_owned());
            for (name, value) in &self.attributes {
                lines.push(format!("  {name}=\"{value}\""));
            }
        }
        if let Some(text) = &self.text_preview {
            lines.push(format!("text: {text}"));
        }
        lines
    }
}

/// Collapse runs of whitespace and truncate to the preview width.
fn preview(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= TEXT_PREVIEW_MAX {
        collapsed
    } else {
        let truncated: String = collapsed.chars().take(TEXT_PREVIEW_MAX).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn snapshot_with(styles: &[(&str, &str)]) -> ElementSnapshot {
        let computed_styles: HashMap<String, String> = styles
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ElementSnapshot {
            tag_name: "div".to_owned(),
            computed_styles,
            ..ElementSnapshot::default()
        }
    }

    #[test]
    fn layout_styles_keep_panel_order_and_skip_missing() {
        let snapshot = snapshot_with(&[
            ("left", "10px"),
            ("display", "block"),
            ("color", "red"),
            ("position", "absolute"),
        ]);
        let report = PanelReport::from_snapshot(SelectionSeq(1), &snapshot);

        let names: Vec<&str> = report
            .layout_styles
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["display", "position", "left"]);
    }

    #[test]
    fn attributes_are_sorted_by_name() {
        let mut snapshot = snapshot_with(&[]);
        snapshot
            .attributes
            .insert("role".to_owned(), "main".to_owned());
        snapshot
            .attributes
            .insert("aria-label".to_owned(), "panel".to_owned());
        let report = PanelReport::from_snapshot(SelectionSeq(1), &snapshot);

        let names: Vec<&str> = report
            .attributes
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["aria-label", "role"]);
    }

    #[test]
    fn text_previews_collapse_whitespace_and_truncate() {
        let mut snapshot = snapshot_with(&[]);
        snapshot.text_content = Some("  hello\n   world  ".to_owned());
        let report = PanelReport::from_snapshot(SelectionSeq(1), &snapshot);
        assert_eq!(report.text_preview.as_deref(), Some("hello world"));

        snapshot.text_content = Some("x".repeat(200));
        let long_report = PanelReport::from_snapshot(SelectionSeq(2), &snapshot);
        let preview_text = long_report.text_preview.as_deref();
        assert!(preview_text.is_some_and(|text| text.ends_with("...")));
        assert!(preview_text.is_some_and(|text| text.chars().count() <= TEXT_PREVIEW_MAX + 3));
    }

    #[test]
    fn whitespace_only_text_yields_no_preview() {
        let mut snapshot = snapshot_with(&[]);
        snapshot.text_content = Some("   \n ".to_owned());
        let report = PanelReport::from_snapshot(SelectionSeq(1), &snapshot);
        assert_eq!(report.text_preview, None);
    }

    #[test]
    fn display_lines_start_with_element_and_verdict() {
        let snapshot = snapshot_with(&[("display", "inline-flex")]);
        let report = PanelReport::from_snapshot(SelectionSeq(1), &snapshot);
        let lines = report.display_lines();

        assert_eq!(lines[0], "element: div");
        assert_eq!(lines[1], "layout: Flexbox (inline-flex)");
        assert!(lines.iter().any(|line| line == "  display: inline-flex"));
    }
}
