//! Contact form model: draft, validation and the delivery seam.

use futures_util::future::{FutureExt, LocalBoxFuture};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::telemetry::{log_event, LogLevel, BROWSER_LOG_LEVEL};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your full name",
            Self::Email => "your.email@example.com",
            Self::Subject => "What's this about?",
            Self::Message => "Tell me about your project, ideas, or how I can help you...",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    Missing(ContactField),
    #[error("enter an email address like name@example.com")]
    InvalidEmail,
}

impl ContactError {
    pub fn field(&self) -> ContactField {
        match self {
            Self::Missing(field) => *field,
            Self::InvalidEmail => ContactField::Email,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// Raised by a [`ContactDelivery`] whose backend refused the message.
    #[error("message could not be delivered: {0}")]
    Rejected(String),
}

/// Form contents exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Validated, trimmed payload handed to a [`ContactDelivery`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Every problem with the draft, in field order, or the trimmed payload.
    pub fn validate(&self) -> Result<ContactSubmission, Vec<ContactError>> {
        let mut errors = Vec::new();
        for field in ContactField::ALL {
            let value = self.get(field).trim();
            if value.is_empty() {
                errors.push(ContactError::Missing(field));
            } else if field == ContactField::Email && !looks_like_email(value) {
                errors.push(ContactError::InvalidEmail);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

/// `local@domain` with a dot somewhere inside the domain and no spaces.
pub fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// The part after the `@`, for logs that must not carry the full address.
pub fn email_domain(address: &str) -> Option<&str> {
    address.rsplit_once('@').map(|(_, domain)| domain).filter(|domain| !domain.is_empty())
}

/// Where a validated contact message goes. The browser build ships
/// [`ConsoleDelivery`]; a deployment that owns a mail endpoint plugs its
/// own implementation into the contact page.
pub trait ContactDelivery {
    fn deliver(&self, submission: ContactSubmission) -> LocalBoxFuture<'static, Result<(), DeliveryError>>;
}

/// Logs the submission as a structured event and reports success.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsoleDelivery;

impl ContactDelivery for ConsoleDelivery {
    fn deliver(&self, submission: ContactSubmission) -> LocalBoxFuture<'static, Result<(), DeliveryError>> {
        async move {
            log_event(
                BROWSER_LOG_LEVEL,
                LogLevel::Info,
                "contact_submitted",
                json!({ "submission": submission }),
            );
            Ok(())
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        let mut draft = ContactDraft::default();
        draft.set(ContactField::Name, "  Ada Lovelace ");
        draft.set(ContactField::Email, "ada@example.com");
        draft.set(ContactField::Subject, "Analytical engine");
        draft.set(ContactField::Message, "Let's build something.\n");
        draft
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let errors = ContactDraft::default().validate().unwrap_err();
        let fields: Vec<ContactField> = errors.iter().map(ContactError::field).collect();
        assert_eq!(fields, ContactField::ALL);
        assert_eq!(errors[0].to_string(), "Name is required");
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut draft = filled();
        draft.set(ContactField::Subject, " \t ");
        assert_eq!(
            draft.validate(),
            Err(vec![ContactError::Missing(ContactField::Subject)])
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["ada", "ada@", "@example.com", "ada@example", "ada@@example.com", "a da@example.com"] {
            let mut draft = filled();
            draft.set(ContactField::Email, email);
            assert_eq!(draft.validate(), Err(vec![ContactError::InvalidEmail]), "{email}");
        }
    }

    #[test]
    fn valid_draft_is_trimmed() {
        let submission = filled().validate().expect("valid draft");
        assert_eq!(submission.name, "Ada Lovelace");
        assert_eq!(submission.message, "Let's build something.");
    }

    #[test]
    fn email_domain_drops_the_mailbox() {
        assert_eq!(email_domain("ada@example.com"), Some("example.com"));
        assert_eq!(email_domain("ada@"), None);
        assert_eq!(email_domain("ada"), None);
    }

    #[test]
    fn field_names_are_distinct() {
        let names: std::collections::HashSet<&str> =
            ContactField::ALL.into_iter().map(ContactField::as_str).collect();
        assert_eq!(names.len(), ContactField::ALL.len());
    }

    struct RefusingDelivery;

    impl ContactDelivery for RefusingDelivery {
        fn deliver(&self, submission: ContactSubmission) -> LocalBoxFuture<'static, Result<(), DeliveryError>> {
            async move { Err(DeliveryError::Rejected(format!("mailbox for {} is full", submission.email))) }
                .boxed_local()
        }
    }

    #[tokio::test]
    async fn refused_delivery_explains_itself() {
        let submission = filled().validate().expect("valid draft");
        let error = RefusingDelivery.deliver(submission).await.unwrap_err();
        assert_eq!(
            error.to_string(),
            "message could not be delivered: mailbox for ada@example.com is full"
        );
    }

    #[tokio::test]
    async fn console_delivery_succeeds() {
        let submission = filled().validate().expect("valid draft");
        assert_eq!(ConsoleDelivery.deliver(submission).await, Ok(()));
    }
}
