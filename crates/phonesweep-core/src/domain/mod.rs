pub mod cell;
pub mod column;
pub mod phone;

pub use cell::RawCell;
pub use column::{
    is_phone_column, phone_column_candidates, select_phone_column, PHONE_COLUMN_KEYWORDS,
};
pub use phone::{
    normalize_phone, normalize_phone_str, CanonicalPhoneNumber, COUNTRY_CODE_DIGITS,
    COUNTRY_PREFIX, SUBSCRIBER_DIGITS,
};
