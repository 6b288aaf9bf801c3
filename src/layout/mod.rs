//! # Inline Layout
//!
//! The layout-unit model and the algorithms that operate on it:
//!
//! 1. [`flow`] splits text runs into units and places units onto lines.
//! 2. [`pagination`] displaces units that straddle a page boundary.
//! 3. [`LayoutSnapshot`] captures the resulting geometry for debug
//!    overlays and dev tooling.
//!
//! Units carry absolute coordinates throughout. Pagination works directly
//! on those coordinates, so layout and repagination can run as separate
//! passes over the same units.

pub mod flow;
pub mod pagination;
pub mod unit;

use serde::Serialize;

use crate::selection::SelectionTracker;
use unit::{LayoutUnit, UnitContent};

/// Serializable snapshot of one positioned unit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitInfo {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Variant name: "Word", "Image", "Spaces", "LineBreak", "Placeholder".
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub selected: bool,
}

/// Geometry + selection snapshot of a laid-out run, for inspection and
/// host dev tools.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub units: Vec<UnitInfo>,
}

impl LayoutSnapshot {
    pub fn capture(units: &[LayoutUnit], tracker: &SelectionTracker) -> Self {
        let units = units
            .iter()
            .map(|unit| {
                let kind = match unit.content() {
                    UnitContent::Placeholder => "Placeholder",
                    UnitContent::Word { .. } => "Word",
                    UnitContent::Image { .. } => "Image",
                    UnitContent::Spaces { .. } => "Spaces",
                    UnitContent::LineBreak => "LineBreak",
                };
                let text = match unit.text() {
                    "" => None,
                    text => Some(text.to_string()),
                };
                UnitInfo {
                    x: unit.left(),
                    y: unit.top(),
                    width: unit.width(),
                    height: unit.height(),
                    kind: kind.to_string(),
                    text,
                    selected: tracker.is_selected(unit),
                }
            })
            .collect();
        Self { units }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
