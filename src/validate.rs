use std::collections::BTreeMap;

/// Field-level validation messages collected before a form submit.
/// A non-empty set blocks the submit entirely; no network call is made.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    /// Presence check for a required text field.
    pub fn require(&mut self, field: &'static str, value: &str, label: &str) {
        if value.trim().is_empty() {
            self.errors.insert(field, format!("{} is required", label));
        }
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.values().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_flags_empty_and_whitespace_values() {
        let mut errors = FieldErrors::default();
        errors.require("name", "", "Name");
        errors.require("email", "   ", "Email");
        errors.require("exam_no", "21IT042", "Exam No");

        assert!(!errors.is_empty());
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("exam_no"), None);
        assert_eq!(errors.messages().count(), 2);
    }

    #[test]
    fn empty_set_reports_clean() {
        let errors = FieldErrors::default();
        assert!(errors.is_empty());
        assert_eq!(errors.messages().count(), 0);
    }
}
