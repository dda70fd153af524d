use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::attendees::GuestResponse;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r".+@.+\..+").expect("email pattern is valid"));

/// Raw RSVP form fields, exactly as submitted. Also used to refill the form
/// when validation fails.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RsvpForm {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(alias = "Phone")]
    pub phone: String,
    #[serde(rename = "willAttend", alias = "WillAttend")]
    pub will_attend: String,
}

impl RsvpForm {
    /// Checks every field and returns either the accepted response or all
    /// the problems found, in form order.
    pub fn validate(&self) -> Result<GuestResponse, Vec<String>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("Please enter your name".to_string());
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("Please enter your email address".to_string());
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.push("Please enter a valid email address".to_string());
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.push("Please enter your phone number".to_string());
        }

        let will_attend = match self.will_attend.trim().to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => {
                errors.push("Please specify whether you'll attend".to_string());
                None
            }
        };

        match will_attend {
            Some(will_attend) if errors.is_empty() => Ok(GuestResponse::new(
                name.to_string(),
                email.to_string(),
                phone.to_string(),
                will_attend,
            )),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, phone: &str, will_attend: &str) -> RsvpForm {
        RsvpForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            will_attend: will_attend.to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let response = form(" Alice ", "alice@example.com ", "555-0100", "true").validate().unwrap();
        assert_eq!(response.name, "Alice");
        assert_eq!(response.email, "alice@example.com");
        assert!(response.will_attend);

        let response = form("Bob", "bob@example.com", "555-0101", "False").validate().unwrap();
        assert!(!response.will_attend);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = RsvpForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Please enter your name",
                "Please enter your email address",
                "Please enter your phone number",
                "Please specify whether you'll attend",
            ]
        );
    }

    #[test]
    fn test_bad_email() {
        let errors = form("Alice", "alice-at-example", "555", "true").validate().unwrap_err();
        assert_eq!(errors, vec!["Please enter a valid email address"]);
    }
}
