//! Form controller - owns the draft and assembles the field controllers.

use std::rc::Rc;

use crate::fields::{FieldRow, MultiItemField, PriceField, Section, SizesField, TitleField};
use crate::model::{DraftListing, Listing, ListingMode};

/// Completion callback invoked with the built listing on submit.
pub type OnFinished = Rc<dyn Fn(Listing)>;

/// Owns one [`DraftListing`] for the lifetime of the edit session and the
/// four field controllers bound to its signals.
///
/// Data flow: UI → `handle_input` on a field → `Signal::set` on the draft →
/// fan-out to dependent fields → UI re-renders from the display strings.
///
/// # Example
///
/// ```
/// use listing_form::{Inventory, Listing, ListingForm, ListingMode};
///
/// let listing = Listing {
///     title: "Jeans".to_string(),
///     price: Some(20.0),
///     inventory: Inventory {
///         is_multi_item: true,
///         sizes: vec!["S".to_string(), "M".to_string()],
///     },
/// };
///
/// let form = ListingForm::new(&listing, ListingMode::Edit, |built| {
///     println!("finished: {built:?}");
/// });
///
/// form.multi_item.handle_input(false);
/// assert_eq!(form.sizes.display(), "");
/// form.submit();
/// ```
pub struct ListingForm {
    draft: DraftListing,

    pub title: Rc<TitleField>,
    pub multi_item: Rc<MultiItemField>,
    pub sizes: Rc<SizesField>,
    pub price: Rc<PriceField>,

    sections: Vec<Section>,
    on_finished: OnFinished,
}

impl ListingForm {
    /// Seed a draft from `initial` and wire the field controllers to it.
    ///
    /// The multi-item field is constructed before the sizes field: the
    /// sizes field subscribes to the multi-item signal at construction and
    /// seeds its label from the initial delivery.
    pub fn new(
        initial: &Listing,
        mode: ListingMode,
        on_finished: impl Fn(Listing) + 'static,
    ) -> Self {
        let draft = DraftListing::new(initial);

        let title = Rc::new(TitleField::new(draft.title.clone()));
        let multi_item = Rc::new(MultiItemField::new(
            draft.multi_item.clone(),
            draft.sizes.clone(),
            mode,
        ));
        let sizes = Rc::new(SizesField::new(draft.sizes.clone(), &draft.multi_item));
        let price = Rc::new(PriceField::new(draft.price.clone()));

        let sections = vec![
            Section {
                title: "Title".to_string(),
                rows: vec![FieldRow::Title(Rc::clone(&title))],
            },
            Section {
                title: "Details".to_string(),
                rows: vec![
                    FieldRow::MultiItem(Rc::clone(&multi_item)),
                    FieldRow::Sizes(Rc::clone(&sizes)),
                ],
            },
            Section {
                title: "Prices".to_string(),
                rows: vec![FieldRow::Price(Rc::clone(&price))],
            },
        ];

        Self {
            draft,
            title,
            multi_item,
            sizes,
            price,
            sections,
            on_finished: Rc::new(on_finished),
        }
    }

    /// The sectioned row list for rendering, in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Build an immutable [`Listing`] from the current draft and hand it to
    /// the completion callback. No validation gate: submission always
    /// succeeds structurally.
    pub fn submit(&self) {
        (self.on_finished)(self.draft.build());
    }

    /// Clear the draft to empty defaults.
    ///
    /// Fans out through every subscribed field, recomputing displays and
    /// the sizes label. The multi-item explicit-selection flag is left
    /// untouched.
    pub fn reset(&self) {
        self.draft.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn jeans() -> Listing {
        Listing {
            title: "Jeans".to_string(),
            price: Some(20.0),
            inventory: crate::model::Inventory {
                is_multi_item: true,
                sizes: vec!["S".to_string(), "M".to_string()],
            },
        }
    }

    #[test]
    fn test_sections_group_rows_in_display_order() {
        let form = ListingForm::new(&jeans(), ListingMode::Edit, |_| {});
        let sections = form.sections();

        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Title", "Details", "Prices"]);
        assert_eq!(sections[0].rows.len(), 1);
        assert_eq!(sections[1].rows.len(), 2);
        assert_eq!(sections[2].rows.len(), 1);
    }

    #[test]
    fn test_row_surface_reflects_initial_listing() {
        let form = ListingForm::new(&jeans(), ListingMode::Edit, |_| {});
        let rows: Vec<(String, String)> = form
            .sections()
            .iter()
            .flat_map(|s| s.rows.iter())
            .map(|row| (row.label(), row.display()))
            .collect();

        assert_eq!(
            rows,
            vec![
                ("Title".to_string(), "Jeans".to_string()),
                ("Quantity".to_string(), "Multiple".to_string()),
                ("Sizes".to_string(), "S, M".to_string()),
                ("Price".to_string(), "$20".to_string()),
            ]
        );
    }

    #[test]
    fn test_row_ids_are_unique() {
        let form = ListingForm::new(&jeans(), ListingMode::New, |_| {});
        let mut ids: Vec<String> = form
            .sections()
            .iter()
            .flat_map(|s| s.rows.iter())
            .map(|row| row.id().to_string())
            .collect();
        let len = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn test_submit_builds_from_current_draft() {
        let finished = Rc::new(RefCell::new(None));
        let finished_clone = finished.clone();
        let form = ListingForm::new(&jeans(), ListingMode::Edit, move |listing| {
            *finished_clone.borrow_mut() = Some(listing);
        });

        form.title.handle_input("Denim Jeans");
        form.submit();

        let built = finished.borrow().clone().unwrap();
        assert_eq!(built.title, "Denim Jeans");
        assert_eq!(built.price, Some(20.0));
    }

    #[test]
    fn test_reset_clears_displays() {
        let form = ListingForm::new(&jeans(), ListingMode::Edit, |_| {});
        form.reset();

        assert_eq!(form.title.display(), "");
        assert_eq!(form.price.display(), "");
        assert_eq!(form.sizes.display(), "");
        assert_eq!(form.sizes.label(), "Size");
        // Edit mode already counts as an explicit selection, and reset does
        // not touch that flag.
        assert_eq!(form.multi_item.display(), "One");
    }

    #[test]
    fn test_reset_in_untouched_new_mode_leaves_display_empty() {
        let mut listing = jeans();
        listing.inventory.is_multi_item = false;
        listing.inventory.sizes = Vec::new();

        let form = ListingForm::new(&listing, ListingMode::New, |_| {});
        form.reset();
        assert_eq!(form.multi_item.display(), "");
    }
}
