//! Field-scoped form validation for event and auth forms.
//!
//! Mirrors the server's expectations: failures block submission locally and
//! never reach the network. Each rule reports against its own field so the
//! form can render the message next to the input.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::types::{EventDraft, Role};

/// Validation failures keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Raw input from the create/edit event form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    /// `datetime-local` input value or an RFC 3339 timestamp.
    pub date: String,
    pub location: String,
    pub max_attendees: String,
}

impl EventForm {
    /// Check all fields against `now`; a valid form yields the create/update
    /// payload with the date normalized to RFC 3339 UTC.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<EventDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = self.title.trim();
        if title.chars().count() < 3 {
            errors.insert("title", "Title must be at least 3 characters");
        }

        let description = self.description.trim();
        if description.chars().count() < 10 {
            errors.insert("description", "Description must be at least 10 characters");
        }

        let mut date = String::new();
        match parse_event_date(self.date.trim()) {
            Some(parsed) if parsed > now => date = parsed.to_rfc3339(),
            Some(_) => errors.insert("date", "Date must be in the future"),
            None => errors.insert("date", "Enter a valid date and time"),
        }

        let location = self.location.trim();
        if location.chars().count() < 3 {
            errors.insert("location", "Location is required");
        }

        let max_attendees = match self.max_attendees.trim().parse::<u32>() {
            Ok(n) if n >= 1 => n,
            Ok(_) => {
                errors.insert("max_attendees", "At least 1 attendee is required");
                0
            }
            Err(_) => {
                errors.insert("max_attendees", "Enter a number of attendees");
                0
            }
        };

        errors.into_result(EventDraft {
            title: title.to_string(),
            description: description.to_string(),
            date,
            location: location.to_string(),
            max_attendees,
        })
    }
}

/// Accepts RFC 3339 or the browser `datetime-local` format; the latter is
/// taken as UTC.
fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Raw input from the login form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Validated login credentials.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginPayload, FieldErrors> {
        let mut errors = FieldErrors::default();

        let email = self.email.trim();
        if !looks_like_email(email) {
            errors.insert("email", "Enter a valid e-mail address");
        }
        if self.password.chars().count() < 6 {
            errors.insert("password", "Password must be at least 6 characters");
        }

        errors.into_result(LoginPayload {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Raw input from the registration form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterPayload, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.chars().count() < 2 {
            errors.insert("name", "Name must be at least 2 characters");
        }
        let email = self.email.trim();
        if !looks_like_email(email) {
            errors.insert("email", "Enter a valid e-mail address");
        }
        if self.password.chars().count() < 6 {
            errors.insert("password", "Password must be at least 6 characters");
        }

        errors.into_result(RegisterPayload {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            role: Role::default(),
        })
    }
}

fn looks_like_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.len() >= 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap()
    }

    fn valid_form() -> EventForm {
        EventForm {
            title: "Tech Meetup".into(),
            description: "An introductory meetup".into(),
            date: "2031-06-01T18:00".into(),
            location: "Room A".into(),
            max_attendees: "50".into(),
        }
    }

    #[test]
    fn test_valid_event_form() {
        let draft = valid_form().validate(now()).unwrap();
        assert_eq!(draft.title, "Tech Meetup");
        assert_eq!(draft.date, "2031-06-01T18:00:00+00:00");
        assert_eq!(draft.max_attendees, 50);
    }

    #[test]
    fn test_event_field_rules() {
        let mut form = valid_form();
        form.title = "ab".into();
        form.description = "too short".into();
        form.location = "  ".into();
        form.max_attendees = "0".into();

        let errors = form.validate(now()).unwrap_err();
        assert!(errors.get("title").is_some());
        assert!(errors.get("description").is_some());
        assert!(errors.get("location").is_some());
        assert!(errors.get("max_attendees").is_some());
        assert!(errors.get("date").is_none());
    }

    #[test]
    fn test_event_date_must_be_future() {
        let mut form = valid_form();
        form.date = "2029-06-01T18:00".into();
        let errors = form.validate(now()).unwrap_err();
        assert_eq!(errors.get("date"), Some("Date must be in the future"));

        form.date = "not a date".into();
        let errors = form.validate(now()).unwrap_err();
        assert_eq!(errors.get("date"), Some("Enter a valid date and time"));
    }

    #[test]
    fn test_event_date_accepts_rfc3339() {
        let mut form = valid_form();
        form.date = "2031-06-01T18:00:00-03:00".into();
        let draft = form.validate(now()).unwrap();
        assert_eq!(draft.date, "2031-06-01T21:00:00+00:00");
    }

    #[test]
    fn test_capacity_must_be_numeric() {
        let mut form = valid_form();
        form.max_attendees = "many".into();
        let errors = form.validate(now()).unwrap_err();
        assert_eq!(errors.get("max_attendees"), Some("Enter a number of attendees"));
    }

    #[test]
    fn test_login_rules() {
        let ok = LoginForm {
            email: " ana@example.com ".into(),
            password: "secret1".into(),
        };
        assert_eq!(ok.validate().unwrap().email, "ana@example.com");

        let bad = LoginForm {
            email: "not-an-email".into(),
            password: "short".into(),
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.get("email").is_some());
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn test_register_rules() {
        let ok = RegisterForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "secret1".into(),
        };
        let payload = ok.validate().unwrap();
        assert_eq!(payload.role, Role::Participant);

        let bad = RegisterForm {
            name: "A".into(),
            email: "ana@".into(),
            password: "123456".into(),
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.get("name").is_some());
        assert!(errors.get("email").is_some());
        assert!(errors.get("password").is_none());
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a@b.co."));
    }
}
