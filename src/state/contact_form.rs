//! Contact-us form validation and case assembly.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ContactUsConfig;
use crate::error::FormError;
use crate::models::{CreateCaseRequest, EMAIL_CASE_TYPE};

/// Email address shape accepted by the form.
static EMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("Invalid email address regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_ADDRESS.is_match(email.trim())
}

/// Notified after every change to a visible field.
pub trait FormValidityListener: Send {
    fn on_form_valid(&mut self);
    fn on_form_invalid(&mut self);
}

/// User details already known to the host app. Supplied fields are hidden
/// from the form and used as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl Identity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into()).filter(|e: &String| !e.trim().is_empty());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into()).filter(|n: &String| !n.trim().is_empty());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Name,
    Subject,
    Feedback,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Name => "name",
            FormField::Subject => "subject",
            FormField::Feedback => "feedback",
        }
    }
}

/// The contact-us form.
///
/// Required: a valid email (unless the identity has one), non-empty feedback,
/// and a subject when subject display is enabled. Name is always optional.
pub struct ContactUsForm {
    config: ContactUsConfig,
    identity: Identity,
    email: String,
    name: String,
    subject: String,
    feedback: String,
    listener: Option<Box<dyn FormValidityListener>>,
}

impl ContactUsForm {
    pub fn new(config: ContactUsConfig) -> Self {
        Self {
            config,
            identity: Identity::default(),
            email: String::new(),
            name: String::new(),
            subject: String::new(),
            feedback: String::new(),
            listener: None,
        }
    }

    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }

    pub fn set_validity_listener(&mut self, listener: Box<dyn FormValidityListener>) {
        self.listener = Some(listener);
    }

    pub fn clear_validity_listener(&mut self) {
        self.listener = None;
    }

    pub fn is_visible(&self, field: FormField) -> bool {
        match field {
            FormField::Email => self.identity.email.is_none(),
            FormField::Name => self.config.name_enabled && self.identity.name.is_none(),
            FormField::Subject => self.config.subject_enabled,
            FormField::Feedback => true,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email,
            FormField::Name => &self.name,
            FormField::Subject => &self.subject,
            FormField::Feedback => &self.feedback,
        }
    }

    /// Update a field. Edits to visible fields notify the validity listener.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Email => self.email = value,
            FormField::Name => self.name = value,
            FormField::Subject => self.subject = value,
            FormField::Feedback => self.feedback = value,
        }
        if self.is_visible(field) {
            self.notify();
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.set(FormField::Email, email);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.set(FormField::Name, name);
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.set(FormField::Subject, subject);
    }

    pub fn set_feedback(&mut self, feedback: impl Into<String>) {
        self.set(FormField::Feedback, feedback);
    }

    fn notify(&mut self) {
        let valid = self.is_form_valid();
        if let Some(listener) = self.listener.as_mut() {
            if valid {
                listener.on_form_valid();
            } else {
                listener.on_form_invalid();
            }
        }
    }

    /// Required fields that are currently missing or invalid.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.is_visible(FormField::Email) && !is_valid_email(&self.email) {
            missing.push(FormField::Email.as_str());
        }
        if self.is_visible(FormField::Subject) && self.subject.trim().is_empty() {
            missing.push(FormField::Subject.as_str());
        }
        if self.feedback.trim().is_empty() {
            missing.push(FormField::Feedback.as_str());
        }
        missing
    }

    pub fn is_form_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Build the case for recipient `to`. Fails without producing a request
    /// while the form is invalid.
    pub fn create_case_request(&self, to: &str) -> Result<CreateCaseRequest, FormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::Incomplete { missing });
        }
        let to = to.trim();
        if to.is_empty() {
            return Err(FormError::NoRecipient);
        }

        let from = match &self.identity.email {
            Some(email) => email.trim().to_string(),
            None => self.email.trim().to_string(),
        };
        let mut request = CreateCaseRequest::new(EMAIL_CASE_TYPE, self.feedback.trim(), to, from)
            .with_custom_fields(self.config.custom_fields.clone());

        let subject = if self.is_visible(FormField::Subject) {
            Some(self.subject.trim().to_string())
        } else {
            self.config.default_subject.clone()
        };
        if let Some(subject) = subject {
            request = request.with_subject(subject);
        }

        let name = match &self.identity.name {
            Some(name) => Some(name.trim()),
            None if self.is_visible(FormField::Name) => Some(self.name.trim()),
            None => None,
        };
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            request = request.with_name(name);
        }

        Ok(request)
    }
}
