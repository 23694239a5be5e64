//! Decides whether the popover opens below or above the trigger.

use serde::{Deserialize, Serialize};

/// Approximate rendered height of the calendar popover, in CSS pixels.
pub const DEFAULT_POPOVER_HEIGHT: f64 = 380.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Below,
    Above,
}

impl Placement {
    pub fn is_upward(&self) -> bool {
        matches!(self, Placement::Above)
    }
}

/// Layout numbers taken when the popover is about to open, all in viewport
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TriggerMetrics {
    pub trigger_bottom: f64,
    pub viewport_height: f64,
    /// Top edge of the page footer, if the page has one.
    pub footer_top: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementPolicy {
    pub popover_height: f64,
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self {
            popover_height: DEFAULT_POPOVER_HEIGHT,
        }
    }
}

impl PlacementPolicy {
    pub fn new(popover_height: f64) -> Self {
        Self { popover_height }
    }

    /// Room between the trigger and whichever comes first: the viewport
    /// bottom or the footer.
    pub fn available_below(&self, metrics: &TriggerMetrics) -> f64 {
        let to_viewport = metrics.viewport_height - metrics.trigger_bottom;
        match metrics.footer_top {
            Some(footer_top) => to_viewport.min(footer_top - metrics.trigger_bottom),
            None => to_viewport,
        }
    }

    pub fn decide(&self, metrics: &TriggerMetrics) -> Placement {
        if self.available_below(metrics) < self.popover_height {
            Placement::Above
        } else {
            Placement::Below
        }
    }
}
