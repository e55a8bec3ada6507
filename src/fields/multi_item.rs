//! Multi-item field - the toggle gating the sizes list.

use std::cell::Cell;

use tracing::warn;

use crate::model::ListingMode;
use crate::signals::Signal;

use super::next_field_id;

/// Binds the draft's multi-item flag to a toggle row.
///
/// Holds a read-only handle to the sizes signal for the pre-clear warning
/// check; the actual clearing is performed by the sizes field reacting to
/// the flag transition, not here. Both controllers observe the shared draft
/// signal instead of holding references to each other.
pub struct MultiItemField {
    id: String,
    value: Signal<bool>,
    sizes: Signal<Vec<String>>,
    /// Whether the user (or edit mode) has made a choice yet. Distinguishes
    /// "chose single-item" from "no selection made" in the display.
    explicitly_selected: Cell<bool>,
}

impl MultiItemField {
    pub fn new(value: Signal<bool>, sizes: Signal<Vec<String>>, mode: ListingMode) -> Self {
        Self {
            id: next_field_id(),
            value,
            sizes,
            explicitly_selected: Cell::new(mode == ListingMode::Edit),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &'static str {
        "Quantity"
    }

    /// `"Multiple"` when set, `"One"` when explicitly single, empty before
    /// any selection has been made.
    pub fn display(&self) -> String {
        if self.value.get() {
            "Multiple".to_string()
        } else if self.explicitly_selected.get() {
            "One".to_string()
        } else {
            String::new()
        }
    }

    /// Apply a toggle edit.
    ///
    /// Logs an advisory warning when turning the flag off would discard a
    /// non-empty sizes list; the operation proceeds either way.
    pub fn handle_input(&self, value: bool) {
        if self.value.get() && !self.sizes.get().is_empty() {
            warn!("sizes will be reset");
        }

        self.explicitly_selected.set(true);
        self.value.set(value);
    }
}
