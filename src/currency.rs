//! Currency codec - free-form text to price and back.
//!
//! Prices render as integer-only currency strings (`$1,234`) and parse
//! leniently: a plain numeric literal is accepted directly, otherwise the
//! grouping separator and currency symbol are stripped before parsing.
//! Malformed input is "no value", never an error.

/// Parses and formats integer-only currency strings.
///
/// The symbol and grouping separator are plain configuration fields so a
/// host can inject its own locale conventions; the default is `$` / `,`.
#[derive(Debug, Clone)]
pub struct CurrencyCodec {
    /// Currency symbol, e.g. `$`.
    pub symbol: String,
    /// Digit grouping separator, e.g. `,` in `1,234`.
    pub grouping_separator: String,
}

impl Default for CurrencyCodec {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            grouping_separator: ",".to_string(),
        }
    }
}

impl CurrencyCodec {
    /// Create a codec with explicit locale conventions.
    pub fn new(symbol: impl Into<String>, grouping_separator: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            grouping_separator: grouping_separator.into(),
        }
    }

    /// Parse free-form text into a price.
    ///
    /// A plain numeric literal (`"20"`, `"19.5"`) parses directly. Anything
    /// else has the grouping separator removed and the currency symbol
    /// stripped, then is parsed again. Returns `None` when the cleaned
    /// string is not a finite number - absence of value is the failure
    /// signal, there is no error path.
    pub fn parse(&self, text: &str) -> Option<f64> {
        if let Ok(value) = text.trim().parse::<f64>() {
            if value.is_finite() {
                return Some(value);
            }
        }

        let cleaned = text
            .replace(&self.grouping_separator, "")
            .replace(&self.symbol, "");
        let value = cleaned.trim().parse::<f64>().ok()?;
        if value.is_finite() { Some(value) } else { None }
    }

    /// Format a price as an integer-only currency string.
    ///
    /// The value is rounded to the nearest integer and grouped every three
    /// digits (`1234567` → `$1,234,567`). Negative values carry the sign
    /// before the symbol. Returns `None` only for non-finite input.
    pub fn format(&self, value: f64) -> Option<String> {
        if !value.is_finite() {
            return None;
        }

        let rounded = value.round();
        let negative = rounded < 0.0;
        let digits = format!("{:.0}", rounded.abs());

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.grouping_separator);
            }
            grouped.push(ch);
        }

        let sign = if negative { "-" } else { "" };
        Some(format!("{}{}{}", sign, self.symbol, grouped))
    }
}
