pub const PHONE_COLUMN_KEYWORDS: [&str; 4] = ["PHONE", "MOBILE", "NUMBER", "CONTACT"];

pub fn is_phone_column(name: &str) -> bool {
    let upper = name.to_uppercase();
    PHONE_COLUMN_KEYWORDS
        .iter()
        .any(|keyword| upper.contains(keyword))
}

pub fn select_phone_column<S: AsRef<str>>(names: &[S]) -> Option<&str> {
    names
        .iter()
        .map(|name| name.as_ref())
        .find(|name| is_phone_column(name))
}

pub fn phone_column_candidates<S: AsRef<str>>(names: &[S]) -> Vec<&str> {
    names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| is_phone_column(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{is_phone_column, phone_column_candidates, select_phone_column};

    #[test]
    fn select_picks_matching_column() {
        assert_eq!(
            select_phone_column(&["Name", "Mobile No", "Email"]),
            Some("Mobile No")
        );
    }

    #[test]
    fn select_returns_none_without_match() {
        assert_eq!(select_phone_column(&["A", "B"]), None);
        assert_eq!(select_phone_column::<&str>(&[]), None);
    }

    #[test]
    fn select_first_match_wins() {
        let names = vec![
            "Contact Name".to_string(),
            "Phone".to_string(),
            "Mobile".to_string(),
        ];
        assert_eq!(select_phone_column(&names), Some("Contact Name"));
    }

    #[test]
    fn matching_ignores_case() {
        assert!(is_phone_column("phone"));
        assert!(is_phone_column("whatsapp_number"));
        assert!(is_phone_column("CONTACTS"));
        assert!(!is_phone_column("email"));
    }

    #[test]
    fn matching_is_substring_based() {
        assert!(is_phone_column("PhoneticSpelling"));
    }

    #[test]
    fn candidates_preserve_order() {
        let names = ["id", "Mobile", "Alt Phone", "city"];
        assert_eq!(phone_column_candidates(&names), vec!["Mobile", "Alt Phone"]);
    }
}
