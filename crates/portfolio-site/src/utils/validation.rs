use std::collections::BTreeMap;

lazy_static::lazy_static! {
    pub static ref EMAIL_REGEX: regex::Regex = regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
    .unwrap();
}

pub trait FormValidation {
    type Field: Ord;

    /// Errors keyed by field. Empty when the form may be submitted.
    fn validate(&self) -> BTreeMap<Self::Field, String>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn validate_required(value: &str, message: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(message.to_string());
    }
    None
}

pub fn validate_email(email: &str) -> Option<String> {
    if email.trim().is_empty() || !is_valid_email(email) {
        return Some("Valid email is required".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com")]
    #[case("first.last+tag@sub.domain.org")]
    #[case("a@b.c")]
    fn test_email_accepted(#[case] email: &str) {
        assert!(is_valid_email(email));
        assert_eq!(validate_email(email), None);
    }

    #[rstest]
    #[case("plainaddress")]
    #[case("@missinglocal.com")]
    #[case("missingdomain@")]
    #[case("a@b")]
    #[case("has space@example.com")]
    #[case("two@@example.com")]
    #[case("")]
    #[case("   ")]
    fn test_email_rejected(#[case] email: &str) {
        assert!(validate_email(email).is_some());
    }

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("  ", "Name is required").as_deref(), Some("Name is required"));
        assert_eq!(validate_required(" Ana ", "Name is required"), None);
    }
}
