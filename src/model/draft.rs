//! Mutable draft state backing an edit session.

use crate::signals::{signal, Signal};

use super::{Inventory, Listing};

/// The in-progress edit state: the listing's four logical fields,
/// flattened, each backed by a [`Signal`].
///
/// The draft is the single source of truth for the session. Field
/// controllers hold clones of these signal handles and mutate them only
/// through [`Signal::set`], which fans out to every other controller bound
/// to the same slot.
pub struct DraftListing {
    pub title: Signal<String>,
    pub multi_item: Signal<bool>,
    pub sizes: Signal<Vec<String>>,
    pub price: Signal<Option<f64>>,
}

impl DraftListing {
    /// Seed a draft from an initial listing (new or edit session alike).
    pub fn new(listing: &Listing) -> Self {
        Self {
            title: signal(listing.title.clone()),
            multi_item: signal(listing.inventory.is_multi_item),
            sizes: signal(listing.inventory.sizes.clone()),
            price: signal(listing.price),
        }
    }

    /// Snapshot the current draft values into an immutable [`Listing`].
    pub fn build(&self) -> Listing {
        Listing {
            title: self.title.get(),
            price: self.price.get(),
            inventory: Inventory {
                is_multi_item: self.multi_item.get(),
                sizes: self.sizes.get(),
            },
        }
    }

    /// Clear every field to its empty default.
    ///
    /// Writes go directly to the signals, so every subscribed controller
    /// recomputes before this returns.
    pub fn reset(&self) {
        self.title.set(String::new());
        self.multi_item.set(false);
        self.sizes.set(Vec::new());
        self.price.set(None);
    }
}
