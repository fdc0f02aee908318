//! Draft validation as an injected capability.

use chrono::Utc;
use regex::Regex;

use catalog_core::Violation;

use crate::product::ProductDraft;

/// Product names: a capitalized word, optionally hyphenated with a second
/// capitalized word. Umlauts included.
pub const NAME_PATTERN: &str = "^[A-ZÄÖÜ][a-zäöüß]+(-[A-ZÄÖÜ][a-zäöüß]+)?$";

/// Upper bound on name length.
pub const NAME_MAX_LEN: usize = 40;

/// Validation seam for client drafts.
///
/// The mutation service receives an implementation at construction time so
/// rule sets can be swapped in tests.
pub trait ProductValidator: Send + Sync {
    fn validate(&self, draft: &ProductDraft) -> Result<(), Vec<Violation>>;
}

/// Default rule set for catalog drafts.
pub struct RuleValidator {
    name_pattern: Regex,
}

impl RuleValidator {
    pub fn new() -> Self {
        Self {
            name_pattern: Regex::new(NAME_PATTERN).expect("name pattern is well-formed"),
        }
    }
}

impl Default for RuleValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductValidator for RuleValidator {
    fn validate(&self, draft: &ProductDraft) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();

        if draft.name.is_empty() {
            violations.push(Violation::new("name", "name must not be empty"));
        } else if draft.name.chars().count() > NAME_MAX_LEN {
            violations.push(Violation::new(
                "name",
                format!("name must not exceed {NAME_MAX_LEN} characters"),
            ));
        } else if !self.name_pattern.is_match(&draft.name) {
            violations.push(Violation::new(
                "name",
                "name must be a capitalized word, optionally hyphenated",
            ));
        }

        if let Some(date) = draft.release_date {
            if date >= Utc::now().date_naive() {
                violations.push(Violation::new(
                    "release_date",
                    "release date must lie in the past",
                ));
            }
        }

        if let Some(homepage) = &draft.homepage {
            if !(homepage.starts_with("http://") || homepage.starts_with("https://")) {
                violations.push(Violation::new("homepage", "homepage must be an http(s) URL"));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            name: "Alpha".to_string(),
            release_date: NaiveDate::from_ymd_opt(2022, 1, 1),
            homepage: Some("https://www.acme.com".to_string()),
            turnover: None,
            owner_id: None,
        }
    }

    #[test]
    fn accepts_a_well_formed_draft() {
        assert!(RuleValidator::new().validate(&valid_draft()).is_ok());
    }

    #[test]
    fn accepts_hyphenated_and_umlaut_names() {
        for name in ["Alpha-Beta", "Übung", "Größe"] {
            let mut draft = valid_draft();
            draft.name = name.to_string();
            assert!(
                RuleValidator::new().validate(&draft).is_ok(),
                "name={name:?}"
            );
        }
    }

    #[test]
    fn accepts_a_name_at_the_length_cap() {
        let mut draft = valid_draft();
        draft.name = format!("A{}", "a".repeat(NAME_MAX_LEN - 1));
        assert!(RuleValidator::new().validate(&draft).is_ok());
    }

    #[test]
    fn rejects_names_failing_the_pattern() {
        for name in ["alpha", "?!$", "ALPHA", "Alpha Beta", "A"] {
            let mut draft = valid_draft();
            draft.name = name.to_string();
            let violations = RuleValidator::new().validate(&draft).unwrap_err();
            assert_eq!(violations.len(), 1, "name={name:?}");
            assert_eq!(violations[0].field, "name");
        }
    }

    #[test]
    fn rejects_an_empty_name() {
        let mut draft = valid_draft();
        draft.name = String::new();
        let violations = RuleValidator::new().validate(&draft).unwrap_err();
        assert_eq!(violations[0].field, "name");
        assert!(violations[0].message.contains("empty"));
    }

    #[test]
    fn rejects_names_over_the_length_cap() {
        let mut draft = valid_draft();
        draft.name = format!("A{}", "a".repeat(NAME_MAX_LEN));
        let violations = RuleValidator::new().validate(&draft).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
        assert!(violations[0].message.contains("exceed"));
    }

    #[test]
    fn rejects_future_release_dates() {
        let mut draft = valid_draft();
        draft.release_date = Utc::now().date_naive().succ_opt();
        let violations = RuleValidator::new().validate(&draft).unwrap_err();
        assert_eq!(violations[0].field, "release_date");
    }

    #[test]
    fn rejects_todays_date_as_release_date() {
        let mut draft = valid_draft();
        draft.release_date = Some(Utc::now().date_naive());
        let violations = RuleValidator::new().validate(&draft).unwrap_err();
        assert_eq!(violations[0].field, "release_date");
    }

    #[test]
    fn rejects_non_http_homepages() {
        let mut draft = valid_draft();
        draft.homepage = Some("acme.com".to_string());
        let violations = RuleValidator::new().validate(&draft).unwrap_err();
        assert_eq!(violations[0].field, "homepage");
    }

    #[test]
    fn collects_all_violations_at_once() {
        let draft = ProductDraft {
            name: "x?".to_string(),
            release_date: Utc::now().date_naive().succ_opt(),
            homepage: Some("ftp://acme.com".to_string()),
            turnover: None,
            owner_id: None,
        };
        let violations = RuleValidator::new().validate(&draft).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: names matching the documented shape always validate.
            #[test]
            fn well_shaped_names_validate(name in "[A-Z][a-z]{1,19}(-[A-Z][a-z]{1,17})?") {
                let mut draft = valid_draft();
                draft.name = name;
                prop_assert!(RuleValidator::new().validate(&draft).is_ok());
            }

            /// Property: lowercase-led names never validate.
            #[test]
            fn lowercase_led_names_fail(name in "[a-z][a-z]{1,19}") {
                let mut draft = valid_draft();
                draft.name = name;
                prop_assert!(RuleValidator::new().validate(&draft).is_err());
            }
        }
    }
}
