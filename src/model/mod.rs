//! Listing data model.
//!
//! - [`Listing`] / [`Inventory`] - the immutable external-facing record
//! - [`ListingMode`] - whether the form edits an existing listing or a new one
//! - [`DraftListing`] - the mutable draft, one signal per logical field

mod draft;
mod listing;

pub use draft::DraftListing;
pub use listing::{Inventory, Listing, ListingMode};
