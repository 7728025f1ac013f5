use std::borrow::Cow;

pub const MISSING_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RawCell {
    #[default]
    Missing,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl RawCell {
    pub fn infer(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() || MISSING_TOKENS.contains(&trimmed) {
            return RawCell::Missing;
        }

        let unsigned = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);
        if !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()) {
            // Digit runs too wide for i64 stay text so no digits are lost.
            return match trimmed.parse::<i64>() {
                Ok(value) => RawCell::Int(value),
                Err(_) => RawCell::Text(field.to_string()),
            };
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => RawCell::Float(value),
            _ => RawCell::Text(field.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        match self {
            RawCell::Missing => true,
            RawCell::Float(value) => !value.is_finite(),
            _ => false,
        }
    }

    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            RawCell::Missing => None,
            RawCell::Int(value) => Some(Cow::Owned(value.to_string())),
            RawCell::Float(value) if !value.is_finite() => None,
            // Integral values print without a fraction: 9876543210.0 -> "9876543210".
            RawCell::Float(value) => Some(Cow::Owned(value.to_string())),
            RawCell::Bool(value) => Some(Cow::Owned(value.to_string())),
            RawCell::Text(value) => Some(Cow::Borrowed(value.as_str())),
        }
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        RawCell::Text(value.to_string())
    }
}

impl From<String> for RawCell {
    fn from(value: String) -> Self {
        RawCell::Text(value)
    }
}

impl From<i64> for RawCell {
    fn from(value: i64) -> Self {
        RawCell::Int(value)
    }
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        RawCell::Float(value)
    }
}

impl From<bool> for RawCell {
    fn from(value: bool) -> Self {
        RawCell::Bool(value)
    }
}

impl<T: Into<RawCell>> From<Option<T>> for RawCell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawCell::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::RawCell;

    #[test]
    fn infer_treats_blank_and_na_tokens_as_missing() {
        assert_eq!(RawCell::infer(""), RawCell::Missing);
        assert_eq!(RawCell::infer("   "), RawCell::Missing);
        assert_eq!(RawCell::infer("N/A"), RawCell::Missing);
        assert_eq!(RawCell::infer("null"), RawCell::Missing);
    }

    #[test]
    fn infer_types_numbers() {
        assert_eq!(RawCell::infer("09876543210"), RawCell::Int(9_876_543_210));
        assert_eq!(RawCell::infer("+919876543210"), RawCell::Int(919_876_543_210));
        assert_eq!(RawCell::infer("9876543210.0"), RawCell::Float(9_876_543_210.0));
    }

    #[test]
    fn infer_keeps_wide_digit_runs_as_text() {
        let wide = "91987654321099999999999";
        assert_eq!(RawCell::infer(wide), RawCell::Text(wide.to_string()));
    }

    #[test]
    fn infer_keeps_formatted_values_as_text() {
        assert_eq!(
            RawCell::infer("+91 98765-43210"),
            RawCell::Text("+91 98765-43210".to_string())
        );
        assert_eq!(RawCell::infer("inf"), RawCell::Text("inf".to_string()));
    }

    #[test]
    fn integral_float_prints_without_fraction() {
        let cell = RawCell::Float(9_876_543_210.0);
        assert_eq!(cell.to_text().as_deref(), Some("9876543210"));
    }

    #[test]
    fn nan_float_is_missing() {
        let cell = RawCell::Float(f64::NAN);
        assert!(cell.is_missing());
        assert!(cell.to_text().is_none());
    }

    #[test]
    fn option_converts_to_missing() {
        let cell: RawCell = Option::<&str>::None.into();
        assert_eq!(cell, RawCell::Missing);
    }
}
