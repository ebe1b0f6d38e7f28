// SPDX-License-Identifier: MPL-2.0
//! Contact form values and submission status.

use std::fmt;

/// Outcome of the most recent submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Identifies one of the three contact form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Name under which the field value is submitted to the relay.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Name => "user_name",
            Field::Email => "user_email",
            Field::Message => "message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

/// Reason a form cannot be submitted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Missing(Field),
    InvalidEmail,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Missing(field) => write!(f, "{} is required", field.label()),
            FieldError::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

/// The values currently typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    /// Returns the value of a single field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Checks required fields in display order, then the email shape.
    pub fn validate(&self) -> Result<(), FieldError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.get(field).trim().is_empty() {
                return Err(FieldError::Missing(field));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FieldError::InvalidEmail);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Loose `local@domain` check, the same shape a browser email input accepts.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Snapshot of the form values handed to the email relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub fields: FormFields,
}

impl FormSubmission {
    /// Returns `(wire_name, value)` pairs in submission order.
    #[must_use]
    pub fn params(&self) -> [(&'static str, &str); 3] {
        [Field::Name, Field::Email, Field::Message]
            .map(|field| (field.wire_name(), self.fields.get(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there".into(),
        }
    }

    #[test]
    fn complete_form_validates() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut fields = filled();
        fields.name = "   ".into();
        fields.message.clear();
        assert_eq!(fields.validate(), Err(FieldError::Missing(Field::Name)));

        let mut fields = filled();
        fields.message.clear();
        assert_eq!(fields.validate(), Err(FieldError::Missing(Field::Message)));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["ada", "@example.com", "ada@", "a da@example.com", "a@b@c", "ada@.com"] {
            let fields = FormFields {
                email: email.into(),
                ..filled()
            };
            assert_eq!(fields.validate(), Err(FieldError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn clear_empties_every_field() {
        let mut fields = filled();
        fields.clear();
        assert!(fields.is_empty());
    }

    #[test]
    fn params_use_wire_names() {
        let submission = FormSubmission { fields: filled() };
        assert_eq!(
            submission.params(),
            [
                ("user_name", "Ada"),
                ("user_email", "ada@example.com"),
                ("message", "Hello there"),
            ]
        );
    }
}
