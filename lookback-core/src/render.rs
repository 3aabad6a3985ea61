//! Pure display-model computation for the rendering collaborator.
//!
//! The chart library applies the model imperatively (show/hide/append by
//! name); computing it here keeps the testable core side-effect-free.

use crate::selection::DisplaySelection;
use crate::types::{AlignedWindow, RenderModel, RenderSeries};

/// Compute the full render model for a window under a selection.
///
/// Every aligned series appears in the model, visible or not, so the
/// renderer can build a complete legend and toggle without re-aligning.
/// `emphasized` names the user-selected series to draw with emphasis;
/// everything presentational beyond these two flags belongs to the renderer.
#[must_use]
pub fn compute_display_model(
    window: &AlignedWindow,
    selection: &DisplaySelection,
    emphasized: Option<&str>,
) -> RenderModel {
    RenderModel {
        labels: window.labels.clone(),
        series: window
            .series
            .iter()
            .map(|s| RenderSeries {
                name: s.name.clone(),
                values: s.values.clone(),
                visible: selection.contains(&s.name),
                emphasized: emphasized == Some(s.name.as_str()),
            })
            .collect(),
    }
}

/// Project the exit value of a principal at a hovered growth percentage.
///
/// Monetary context: inputs are zero-filled upstream, the result is always
/// a number.
#[must_use]
pub fn exit_value(amount: f64, hovered_pct: f64) -> f64 {
    amount * (hovered_pct / 100.0)
}
