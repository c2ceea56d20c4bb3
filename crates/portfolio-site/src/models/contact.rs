use std::collections::BTreeMap;

use crate::utils::validation::{validate_email, validate_required, FormValidation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];
}

/// Raw values of the contact form as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }
}

impl FormValidation for ContactForm {
    type Field = ContactField;

    fn validate(&self) -> BTreeMap<ContactField, String> {
        let checks = [
            (ContactField::Name, validate_required(&self.name, "Name is required")),
            (ContactField::Email, validate_email(&self.email)),
            (ContactField::Subject, validate_required(&self.subject, "Subject is required")),
            (ContactField::Message, validate_required(&self.message, "Message is required")),
        ];
        checks
            .into_iter()
            .filter_map(|(field, error)| error.map(|e| (field, e)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            subject: "Consulting".to_string(),
            message: "Hello!".to_string(),
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        let form = filled();
        assert!(form.validate().is_empty());
        assert!(form.is_valid());
    }

    #[test]
    fn test_each_missing_field_reports_exactly_itself() {
        for field in ContactField::ALL {
            let mut form = filled();
            form.set(field, "   ".to_string());
            let errors = form.validate();
            assert_eq!(errors.len(), 1, "field {:?}", field);
            assert!(errors.contains_key(&field));
            assert!(!form.is_valid());
        }
    }

    #[test]
    fn test_invalid_email_message() {
        let mut form = filled();
        form.set(ContactField::Email, "a@b".to_string());
        let errors = form.validate();
        assert_eq!(
            errors.get(&ContactField::Email).map(String::as_str),
            Some("Valid email is required")
        );
    }

    #[test]
    fn test_empty_form_reports_all_fields() {
        let errors = ContactForm::default().validate();
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), ContactField::ALL.to_vec());
        assert_eq!(ContactForm::default().value(ContactField::Subject), "");
    }
}
