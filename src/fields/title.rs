//! Title field - verbatim text binding.

use crate::signals::Signal;

use super::next_field_id;

/// Binds the draft's title signal to a text row.
///
/// Display mirrors the signal verbatim and input is stored unconditionally.
/// "Required" is a UI-affordance hint only, not enforced here.
pub struct TitleField {
    id: String,
    value: Signal<String>,
}

impl TitleField {
    pub fn new(value: Signal<String>) -> Self {
        Self {
            id: next_field_id(),
            value,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &'static str {
        "Title"
    }

    pub fn display(&self) -> String {
        self.value.get()
    }

    /// Store the edited text, unvalidated.
    pub fn handle_input(&self, text: &str) {
        self.value.set(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::signal;

    #[test]
    fn test_display_mirrors_signal() {
        let value = signal("Jeans".to_string());
        let field = TitleField::new(value.clone());
        assert_eq!(field.display(), "Jeans");

        value.set("Jacket".to_string());
        assert_eq!(field.display(), "Jacket");
    }

    #[test]
    fn test_input_is_stored_unconditionally() {
        let value = signal("Jeans".to_string());
        let field = TitleField::new(value.clone());

        field.handle_input("");
        assert_eq!(value.get(), "");
        assert_eq!(field.display(), "");
    }
}
