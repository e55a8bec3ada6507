//! # listing-form
//!
//! Reactive data-binding layer for a single-screen item-listing edit form:
//! a title, a price, a multi-item toggle, and a derived sizes field.
//!
//! A mutable draft ([`DraftListing`]) holds one reactive [`Signal`] per
//! logical field. Four field controllers bind to those signals and expose
//! the `label`/`display`/`handle_input` surface a rendering layer consumes.
//! [`ListingForm`] owns the draft, groups the fields into sections, and
//! exposes `submit()`/`reset()`.
//!
//! ## Data flow
//!
//! ```text
//! UI input → Field::handle_input → Signal::set → fan-out notification
//!          → dependent fields recompute → UI re-renders display strings
//! ```
//!
//! Everything is single-threaded and synchronous: a `set` → notify →
//! recompute chain completes fully before the triggering call returns.
//! The cross-field rule lives entirely on the draft's shared signals:
//! turning multi-item off clears sizes, and the sizes label tracks the
//! multi-item flag.
//!
//! ## Modules
//!
//! - [`signals`] - `Signal<T>` reactive containers and subscriptions
//! - [`currency`] - integer-only currency parsing and formatting
//! - [`model`] - `Listing`, `Inventory`, `ListingMode`, `DraftListing`
//! - [`fields`] - the four per-field controllers and the section surface
//! - [`form`] - the form controller

pub mod currency;
pub mod fields;
pub mod form;
pub mod model;
pub mod signals;

// Re-export commonly used items
pub use currency::CurrencyCodec;
pub use fields::{FieldRow, MultiItemField, PriceField, Section, SizesField, TitleField};
pub use form::{ListingForm, OnFinished};
pub use model::{DraftListing, Inventory, Listing, ListingMode};
pub use signals::{signal, Signal, Subscription};
