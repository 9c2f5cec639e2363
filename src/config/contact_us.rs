//! Contact-us display options and their per-brand overrides.

use std::collections::HashMap;

/// Contact-us options resolved for one brand (or globally).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactUsConfig {
    /// Show the "call us" entry (needs `phone_number`).
    pub call_enabled: bool,
    /// Show the contact-us web form.
    pub web_form_enabled: bool,
    /// Show and require the subject field.
    pub subject_enabled: bool,
    /// Show the optional name field.
    pub name_enabled: bool,
    /// Explicit recipient; when absent an enabled inbound mailbox is used.
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    /// Subject sent when the subject field is hidden.
    pub default_subject: Option<String>,
    /// Extra fields copied into every created case.
    pub custom_fields: HashMap<String, String>,
}

impl Default for ContactUsConfig {
    fn default() -> Self {
        Self {
            call_enabled: false,
            web_form_enabled: true,
            subject_enabled: true,
            name_enabled: true,
            email_address: None,
            phone_number: None,
            default_subject: None,
            custom_fields: HashMap::new(),
        }
    }
}

impl ContactUsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_call_enabled(mut self, enabled: bool) -> Self {
        self.call_enabled = enabled;
        self
    }

    pub fn with_web_form_enabled(mut self, enabled: bool) -> Self {
        self.web_form_enabled = enabled;
        self
    }

    pub fn with_subject_enabled(mut self, enabled: bool) -> Self {
        self.subject_enabled = enabled;
        self
    }

    pub fn with_name_enabled(mut self, enabled: bool) -> Self {
        self.name_enabled = enabled;
        self
    }

    pub fn with_email_address(mut self, email: impl Into<String>) -> Self {
        self.email_address = Some(email.into());
        self
    }

    pub fn with_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = Some(phone.into());
        self
    }

    pub fn with_default_subject(mut self, subject: impl Into<String>) -> Self {
        self.default_subject = Some(subject.into());
        self
    }

    pub fn with_custom_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_fields.insert(name.into(), value.into());
        self
    }

    /// Whether a call-us entry can actually be offered.
    pub fn can_call(&self) -> bool {
        self.call_enabled && self.phone_number.as_deref().is_some_and(|p| !p.trim().is_empty())
    }

    /// Apply a brand's overrides on top of these values.
    pub fn merged(&self, overrides: &BrandOverrides) -> Self {
        let mut merged = self.clone();
        if let Some(v) = overrides.call_enabled {
            merged.call_enabled = v;
        }
        if let Some(v) = overrides.web_form_enabled {
            merged.web_form_enabled = v;
        }
        if let Some(v) = overrides.subject_enabled {
            merged.subject_enabled = v;
        }
        if let Some(v) = overrides.name_enabled {
            merged.name_enabled = v;
        }
        if let Some(v) = &overrides.email_address {
            merged.email_address = Some(v.clone());
        }
        if let Some(v) = &overrides.phone_number {
            merged.phone_number = Some(v.clone());
        }
        if let Some(v) = &overrides.default_subject {
            merged.default_subject = Some(v.clone());
        }
        merged.custom_fields.extend(
            overrides
                .custom_fields
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        merged
    }
}

/// Brand-scoped values. `None` falls back to the global setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandOverrides {
    pub call_enabled: Option<bool>,
    pub web_form_enabled: Option<bool>,
    pub subject_enabled: Option<bool>,
    pub name_enabled: Option<bool>,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    pub default_subject: Option<String>,
    pub custom_fields: HashMap<String, String>,
}

impl BrandOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
