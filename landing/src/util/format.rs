//! Display formatting for prices and pricing features.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Marker that flags a pricing feature as not included in a tier.
pub const EXCLUDED_MARKER: &str = "(нет)";

const GROUP_SEPARATOR: char = '\u{a0}';

/// Group digits in threes with a non-breaking space, as Russian locales do.
pub fn group_digits(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// One pricing feature line as rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureLine {
    pub text: String,
    pub included: bool,
}

impl FeatureLine {
    /// Split a raw feature string into its display text and inclusion flag.
    pub fn parse(raw: &str) -> Self {
        if raw.contains(EXCLUDED_MARKER) {
            Self { text: raw.replace(EXCLUDED_MARKER, "").trim().to_owned(), included: false }
        } else {
            Self { text: raw.trim().to_owned(), included: true }
        }
    }
}
