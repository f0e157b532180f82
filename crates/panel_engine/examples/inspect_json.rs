//! Feed one captured element snapshot through the selection mirror and log
//! the panel report, end to end.
//!
//! Run with: `RUST_LOG=info cargo run -p panel_engine --example inspect_json`

use anyhow::Result;
use element_capture::{ElementSnapshot, SelectionMirror, SelectionSeq, SelectionUpdate};
use env_logger::init as env_logger_init;
use log::info;
use panel_engine::LayoutPanel;
use tokio::sync::broadcast;

/// A capture as a devtools host would serialize it.
const CAPTURE: &str = r#"{
    "tagName": "ASIDE",
    "id": "toc",
    "className": "sidebar sticky-rail",
    "textContent": "On this page",
    "attributes": { "role": "navigation", "aria-label": "Table of contents" },
    "computedStyles": {
        "display": "block",
        "position": "sticky",
        "float": "none",
        "top": "16px",
        "z-index": "10",
        "color": "rgb(33, 37, 41)",
        "font-size": "14px"
    }
}"#;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger_init();

    let snapshot: ElementSnapshot = serde_json::from_str(CAPTURE)?;
    info!("captured {}", snapshot.descriptor());

    let (selections, receiver) = broadcast::channel(8);
    let mut mirror = SelectionMirror::new(receiver, LayoutPanel::new());
    selections.send(vec![SelectionUpdate::Selected {
        seq: SelectionSeq::FIRST,
        snapshot,
    }])?;

    mirror.update().await?;
    if let Some(report) = mirror.mirror().report() {
        for line in report.display_lines() {
            info!("{line}");
        }
    }
    Ok(())
}
