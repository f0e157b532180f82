//! Derived-state engine for the layout inspector panel.
//!
//! [`LayoutPanel`] subscribes to selection updates from an inspecting host,
//! re-classifies the captured computed styles on every fresh event, and keeps
//! a render-ready [`PanelReport`] for the UI loop. Out-of-order events are
//! discarded by sequence number so a stale capture never overwrites a newer
//! one.

use anyhow::Result;
use element_capture::{SelectionSeq, SelectionSubscriber, SelectionUpdate};
use log::debug;
use tracing::info_span;

mod report;
pub use report::{ElementSummary, PanelReport};

/// What the panel is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    /// Nothing selected (startup, or the last selection was cleared).
    Empty,
    /// An element is selected and classified.
    Inspecting(PanelReport),
}

/// Selection subscriber that maintains the panel's derived state.
///
/// The panel itself never fails on snapshot content; classification is total.
/// `apply_update` is fallible only to satisfy the subscriber contract shared
/// with richer mirrors.
pub struct LayoutPanel {
    state: PanelState,
    /// Highest sequence number applied so far.
    last_seq: Option<SelectionSeq>,
    /// Sticky flag set whenever a fresh update is applied; drained by
    /// `take_changed()`.
    changed: bool,
    applied_updates: u64,
    stale_discards: u64,
}

impl LayoutPanel {
    /// Create a panel with nothing selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: PanelState::Empty,
            last_seq: None,
            changed: false,
            applied_updates: 0,
            stale_discards: 0,
        }
    }

    /// Current panel state.
    pub const fn state(&self) -> &PanelState {
        &self.state
    }

    /// The report for the currently inspected element, if any.
    pub const fn report(&self) -> Option<&PanelReport> {
        match &self.state {
            PanelState::Inspecting(report) => Some(report),
            PanelState::Empty => None,
        }
    }

    /// Return whether the panel changed since the last check and clear the
    /// flag.
    pub fn take_changed(&mut self) -> bool {
        let changed = self.changed;
        self.changed = false;
        changed
    }

    /// Fresh updates applied since creation.
    pub const fn applied_updates(&self) -> u64 {
        self.applied_updates
    }

    /// Out-of-order updates discarded since creation.
    pub const fn stale_discards(&self) -> u64 {
        self.stale_discards
    }

    /// An update is stale when its sequence number does not advance past the
    /// last applied one.
    fn is_stale(&self, seq: SelectionSeq) -> bool {
        self.last_seq.is_some_and(|last| seq <= last)
    }
}

impl Default for LayoutPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSubscriber for LayoutPanel {
    fn apply_update(&mut self, update: SelectionUpdate) -> Result<()> {
        let seq = update.seq();
        if self.is_stale(seq) {
            self.stale_discards = self.stale_discards.wrapping_add(1);
            debug!(target: "panel_engine", "discarded stale selection update (seq {})", seq.0);
            return Ok(());
        }
        self.last_seq = Some(seq);
        self.applied_updates = self.applied_updates.wrapping_add(1);

        match update {
            SelectionUpdate::Selected { seq, snapshot } => {
                let _span = info_span!("panel.rebuild_report").entered();
                let report = PanelReport::from_snapshot(seq, &snapshot);
                debug!(
                    target: "panel_engine",
                    "selection {} classified as {}",
                    report.element.descriptor,
                    report.verdict
                );
                self.state = PanelState::Inspecting(report);
            }
            SelectionUpdate::Cleared { .. } => {
                debug!(target: "panel_engine", "selection cleared (seq {})", seq.0);
                self.state = PanelState::Empty;
            }
        }
        self.changed = true;
        Ok(())
    }
}
