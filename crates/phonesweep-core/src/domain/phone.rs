use crate::domain::cell::RawCell;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const COUNTRY_PREFIX: &str = "+91";
pub const COUNTRY_CODE_DIGITS: &str = "91";
pub const SUBSCRIBER_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CanonicalPhoneNumber(String);

impl CanonicalPhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let valid = raw
            .strip_prefix(COUNTRY_PREFIX)
            .is_some_and(|rest| rest.len() == SUBSCRIBER_DIGITS && is_ascii_digits(rest));
        if !valid {
            return Err(CoreError::InvalidPhoneNumber(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn subscriber_digits(&self) -> &str {
        &self.0[COUNTRY_PREFIX.len()..]
    }
}

impl fmt::Display for CanonicalPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CanonicalPhoneNumber> for String {
    fn from(value: CanonicalPhoneNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for CanonicalPhoneNumber {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

pub fn normalize_phone(raw: &RawCell) -> Option<CanonicalPhoneNumber> {
    let text = raw.to_text()?;
    normalize_phone_str(&text)
}

pub fn normalize_phone_str(value: &str) -> Option<CanonicalPhoneNumber> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    let mut digits = digits.trim_start_matches('0');

    // The country code only comes off while more than ten digits remain.
    if digits.len() > SUBSCRIBER_DIGITS {
        if let Some(rest) = digits.strip_prefix(COUNTRY_CODE_DIGITS) {
            digits = rest;
        }
    }

    if digits.len() > SUBSCRIBER_DIGITS {
        digits = &digits[digits.len() - SUBSCRIBER_DIGITS..];
    }

    if digits.len() != SUBSCRIBER_DIGITS {
        return None;
    }

    Some(CanonicalPhoneNumber(format!("{COUNTRY_PREFIX}{digits}")))
}

fn is_ascii_digits(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}
