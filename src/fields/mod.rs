//! Field controllers - per-field reactive adapters.
//!
//! Each controller wraps one of the draft's signals and exposes the surface
//! a rendering collaborator consumes:
//! - `id()` - opaque, unique per instance, not persisted
//! - `label()` - static per field kind (the sizes label tracks the
//!   multi-item flag)
//! - `display()` - the current display-formatted string
//! - a kind-specific input entry point (`handle_input`)
//!
//! Rendering dispatches over [`FieldRow`], a tagged union over the four
//! field kinds, grouped into [`Section`]s by the form controller.

mod multi_item;
mod price;
mod sizes;
mod title;

use std::cell::RefCell;
use std::rc::Rc;

pub use multi_item::MultiItemField;
pub use price::PriceField;
pub use sizes::SizesField;
pub use title::TitleField;

thread_local! {
    /// Counter for generating unique field ids.
    static FIELD_ID_COUNTER: RefCell<usize> = const { RefCell::new(0) };
}

/// Generate an opaque per-instance field id (`f0`, `f1`, ...).
pub(crate) fn next_field_id() -> String {
    FIELD_ID_COUNTER.with(|counter| {
        let mut counter = counter.borrow_mut();
        let id = format!("f{}", *counter);
        *counter += 1;
        id
    })
}

// =============================================================================
// Row and Section - the rendering surface
// =============================================================================

/// One renderable form row.
///
/// A tagged union over the four field kinds, so a renderer can either use
/// the uniform `id`/`label`/`display` surface or match on the variant to
/// wire the kind-specific input handler.
#[derive(Clone)]
pub enum FieldRow {
    Title(Rc<TitleField>),
    Price(Rc<PriceField>),
    MultiItem(Rc<MultiItemField>),
    Sizes(Rc<SizesField>),
}

impl FieldRow {
    /// Opaque unique id of the underlying field.
    pub fn id(&self) -> &str {
        match self {
            FieldRow::Title(field) => field.id(),
            FieldRow::Price(field) => field.id(),
            FieldRow::MultiItem(field) => field.id(),
            FieldRow::Sizes(field) => field.id(),
        }
    }

    /// Row label.
    pub fn label(&self) -> String {
        match self {
            FieldRow::Title(field) => field.label().to_string(),
            FieldRow::Price(field) => field.label().to_string(),
            FieldRow::MultiItem(field) => field.label().to_string(),
            FieldRow::Sizes(field) => field.label(),
        }
    }

    /// Current display string.
    pub fn display(&self) -> String {
        match self {
            FieldRow::Title(field) => field.display(),
            FieldRow::Price(field) => field.display(),
            FieldRow::MultiItem(field) => field.display(),
            FieldRow::Sizes(field) => field.display(),
        }
    }
}

/// A titled group of rows, in render order.
#[derive(Clone)]
pub struct Section {
    pub title: String,
    pub rows: Vec<FieldRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_are_unique() {
        let a = next_field_id();
        let b = next_field_id();
        let c = next_field_id();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }
}
