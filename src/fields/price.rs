//! Price field - currency-formatted numeric binding.

use crate::currency::CurrencyCodec;
use crate::signals::Signal;

use super::next_field_id;

/// Binds the draft's price signal to a currency text row.
///
/// Unparseable input silently clears the price rather than rejecting the
/// keystroke; the field just goes blank.
pub struct PriceField {
    id: String,
    value: Signal<Option<f64>>,
    codec: CurrencyCodec,
}

impl PriceField {
    pub fn new(value: Signal<Option<f64>>) -> Self {
        Self::with_codec(value, CurrencyCodec::default())
    }

    /// Create with explicit locale conventions for the codec.
    pub fn with_codec(value: Signal<Option<f64>>, codec: CurrencyCodec) -> Self {
        Self {
            id: next_field_id(),
            value,
            codec,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &'static str {
        "Price"
    }

    /// Formatted price, or empty when there is no value.
    pub fn display(&self) -> String {
        self.value
            .get()
            .and_then(|price| self.codec.format(price))
            .unwrap_or_default()
    }

    /// Parse the edited text into the price signal.
    pub fn handle_input(&self, text: &str) {
        self.value.set(self.codec.parse(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::signal;

    #[test]
    fn test_display_formats_current_value() {
        let value = signal(Some(1234.0));
        let field = PriceField::new(value);
        assert_eq!(field.display(), "$1,234");
    }

    #[test]
    fn test_display_empty_when_no_value() {
        let value = signal(None);
        let field = PriceField::new(value);
        assert_eq!(field.display(), "");
    }

    #[test]
    fn test_input_parses_currency_text() {
        let value = signal(None);
        let field = PriceField::new(value.clone());

        field.handle_input("$20");
        assert_eq!(value.get(), Some(20.0));
        assert_eq!(field.display(), "$20");
    }

    #[test]
    fn test_unparseable_input_clears_silently() {
        let value = signal(Some(20.0));
        let field = PriceField::new(value.clone());

        field.handle_input("twenty");
        assert_eq!(value.get(), None);
        assert_eq!(field.display(), "");
    }
}
