//! Sizes field - derived from the multi-item flag.

use std::cell::Cell;
use std::rc::Rc;

use crate::signals::{signal, Signal, Subscription};

use super::next_field_id;

/// Binds the draft's sizes signal to a read-only row whose label and
/// contents track the multi-item flag.
///
/// On every multi-item notification the label recomputes (`"Sizes"` while
/// multi, else `"Size"`). A `true → false` transition clears the sizes
/// signal; the initial delivery carries no previous value and never clears,
/// and `false → true`, `true → true`, `false → false` never clear either.
///
/// There is no input entry point here: adding and removing individual sizes
/// belongs to external UI collaborators writing to the same signal.
pub struct SizesField {
    id: String,
    value: Signal<Vec<String>>,
    label: Signal<String>,
    _multi_item_sub: Subscription,
}

impl SizesField {
    /// Wire the field to the draft's sizes signal and subscribe it to the
    /// multi-item signal. The subscription's immediate delivery seeds the
    /// label from the current flag value.
    pub fn new(value: Signal<Vec<String>>, multi_item: &Signal<bool>) -> Self {
        let label = signal(String::new());

        let previous: Rc<Cell<Option<bool>>> = Rc::new(Cell::new(None));
        let subscription = {
            let value = value.clone();
            let label = label.clone();
            multi_item.subscribe(move |&current| {
                label.set(if current { "Sizes" } else { "Size" }.to_string());

                if previous.get() == Some(true) && !current {
                    value.set(Vec::new());
                }
                previous.set(Some(current));
            })
        };

        Self {
            id: next_field_id(),
            value,
            label,
            _multi_item_sub: subscription,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// `"Sizes"` while multi-item, else `"Size"`.
    pub fn label(&self) -> String {
        self.label.get()
    }

    /// Sizes joined with `", "`, empty when there are none.
    pub fn display(&self) -> String {
        let sizes = self.value.get();
        if sizes.is_empty() {
            String::new()
        } else {
            sizes.join(", ")
        }
    }

    /// Current sizes, in entry order.
    pub fn sizes(&self) -> Vec<String> {
        self.value.get()
    }
}
