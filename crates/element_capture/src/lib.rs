//! Host-agnostic element capture types and selection mirroring primitives.
//! This crate centralizes the contract between a DOM-inspecting host and the
//! panel subsystems that consume its snapshots (classifier, report builder).

use anyhow::Result;
use serde::Serialize;
use tokio::sync::broadcast;

pub mod snapshot;
pub use snapshot::ElementSnapshot;

// ============================
// Selection sequence numbers
// ============================

/// Monotonically increasing sequence number minted by the host for each
/// selection-change event.
///
/// Downstream consumers compare sequence numbers to discard stale updates
/// when events reach them out of order; the snapshot itself carries no
/// identity, so the sequence number is the only ordering handle.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize)]
pub struct SelectionSeq(pub u64);

impl SelectionSeq {
    /// Sequence number carried by the first event a host emits.
    pub const FIRST: Self = Self(1);

    /// The sequence number that follows this one.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

// ============================
// Selection update model + mirror pattern
// ============================

/// A batchable selection-change event emitted by the inspecting host and
/// mirrored to subscribers.
#[derive(Debug, Clone)]
pub enum SelectionUpdate {
    /// A new element was selected in the host's element tree.
    Selected {
        seq: SelectionSeq,
        snapshot: ElementSnapshot,
    },
    /// The selection was dropped (element removed, page navigated away).
    Cleared { seq: SelectionSeq },
}

impl SelectionUpdate {
    /// The sequence number carried by this update.
    pub const fn seq(&self) -> SelectionSeq {
        match self {
            Self::Selected { seq, .. } | Self::Cleared { seq } => *seq,
        }
    }
}

/// A subscriber that receives `SelectionUpdate` values and folds them into
/// its own state.
pub trait SelectionSubscriber {
    /// Apply a single `SelectionUpdate` to the subscriber state.
    ///
    /// # Errors
    /// Returns an error if the subscriber cannot ingest the update.
    fn apply_update(&mut self, update: SelectionUpdate) -> Result<()>;
}

/// Generic mirror that drains batched selection updates sent by the host.
///
/// The host publishes `Vec<SelectionUpdate>` batches over a broadcast
/// channel; any number of mirrors (panel, recorders) each hold a receiver
/// and fold the batches into their own subscriber.
pub struct SelectionMirror<T: SelectionSubscriber> {
    in_updates: broadcast::Receiver<Vec<SelectionUpdate>>,
    mirror: T,
}

impl<T: SelectionSubscriber> SelectionMirror<T> {
    /// Create a new mirror wrapping a subscriber implementation.
    pub fn new(in_updates: broadcast::Receiver<Vec<SelectionUpdate>>, mirror: T) -> Self {
        Self { in_updates, mirror }
    }

    /// Wait for the next batch of selection updates, apply it, then drain any
    /// batches that are already pending.
    ///
    /// A lagged receiver (the host outpaced this mirror) is logged and
    /// recovered from; the skipped batches are lost. Stale-sequence handling
    /// stays with the subscriber.
    ///
    /// # Errors
    /// Returns an error if the channel closed, or if the subscriber fails.
    pub async fn update(&mut self) -> Result<()> {
        use tokio::sync::broadcast::error::RecvError;
        let first = loop {
            match self.in_updates.recv().await {
                Ok(batch) => break batch,
                Err(RecvError::Lagged(skipped)) => {
                    log::warn!(
                        target: "element_capture",
                        "selection mirror lagged, {skipped} batches skipped"
                    );
                }
                Err(RecvError::Closed) => {
                    return Err(anyhow::anyhow!(
                        "Selection channel was closed while the mirror was still attached!"
                    ));
                }
            }
        };
        for update in first {
            self.mirror.apply_update(update)?;
        }
        self.try_update_sync()
    }

    /// Synchronous, non-blocking variant draining only the pending batches
    /// (for callers polling from a render loop).
    ///
    /// # Errors
    /// Returns an error if the channel closed, or if the subscriber fails.
    pub fn try_update_sync(&mut self) -> Result<()> {
        use tokio::sync::broadcast::error::TryRecvError;
        loop {
            match self.in_updates.try_recv() {
                Ok(batch) => {
                    for update in batch {
                        self.mirror.apply_update(update)?;
                    }
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    log::warn!(
                        target: "element_capture",
                        "selection mirror lagged, {skipped} batches skipped"
                    );
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Closed) => {
                    return Err(anyhow::anyhow!(
                        "Selection channel was closed while the mirror was still attached!"
                    ));
                }
            }
        }
        Ok(())
    }

    /// Access the inner subscriber mutably (host-level integration).
    pub fn mirror_mut(&mut self) -> &mut T {
        &mut self.mirror
    }

    /// Access the inner subscriber immutably (read-only access).
    pub fn mirror(&self) -> &T {
        &self.mirror
    }
}
