//! Immutable listing record.

/// Stock shape of a listing: single item, or multiple items with sizes.
///
/// `sizes` preserves entry order and permits duplicates; it is never
/// deduplicated or sorted here.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    pub is_multi_item: bool,
    pub sizes: Vec<String>,
}

/// External-facing listing record.
///
/// Produced only by [`DraftListing::build`](super::DraftListing::build);
/// the form never mutates a `Listing` in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub title: String,
    pub price: Option<f64>,
    pub inventory: Inventory,
}

/// Whether the form session started from an existing listing or a blank one.
///
/// The only behavioral difference is the multi-item field's
/// explicit-selection seed: editing an existing listing counts as having
/// already made a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    New,
    Edit,
}
