//! The contact page's message form.

use crate::booking::is_plausible_email;
use crate::id::ContactMessageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors from validating a contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    MissingField { field: &'static str },
    InvalidEmail,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "{field} is required"),
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

impl std::error::Error for ContactError {}

/// Raw contact form fields as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// A validated contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactForm {
    /// Validates the form. Phone is the only optional field.
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let name = required("Name", &self.name)?;
        let email = required("Email", &self.email)?;
        if !is_plausible_email(&email) {
            return Err(ContactError::InvalidEmail);
        }
        let subject = required("Subject", &self.subject)?;
        let message = required("Message", &self.message)?;
        let phone = Some(self.phone.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Ok(ContactMessage {
            id: ContactMessageId::new(),
            name,
            email,
            phone,
            subject,
            message,
            created_at: Utc::now(),
        })
    }
}

impl ContactMessage {
    /// Text shown to the sender once the message is stored.
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!(
            "Thank you for your message, {}! We'll get back to you within 24 hours.",
            self.name
        )
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ContactError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ContactError::MissingField { field })
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: " Juan dela Cruz ".to_string(),
            email: "juan@example.ph".to_string(),
            phone: String::new(),
            subject: "Inquiry about booking".to_string(),
            message: "Is parking available?".to_string(),
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let message = form().validate().expect("valid form");
        assert_eq!(message.name, "Juan dela Cruz");
        assert_eq!(message.phone, None);
        assert_eq!(
            message.confirmation(),
            "Thank you for your message, Juan dela Cruz! We'll get back to you within 24 hours."
        );
    }

    #[test]
    fn phone_is_kept_when_given() {
        let message = ContactForm {
            phone: "+63 912 345 6789".to_string(),
            ..form()
        }
        .validate()
        .expect("valid form");
        assert_eq!(message.phone.as_deref(), Some("+63 912 345 6789"));
    }

    #[test]
    fn required_fields_are_checked_in_form_order() {
        let empty = ContactForm::default();
        assert_eq!(
            empty.validate(),
            Err(ContactError::MissingField { field: "Name" })
        );

        let no_message = ContactForm {
            message: "   ".to_string(),
            ..form()
        };
        assert_eq!(
            no_message.validate(),
            Err(ContactError::MissingField { field: "Message" })
        );
    }

    #[test]
    fn rejects_bad_email() {
        let bad_email = ContactForm {
            email: "juan at example".to_string(),
            ..form()
        };
        assert_eq!(bad_email.validate(), Err(ContactError::InvalidEmail));
    }
}
