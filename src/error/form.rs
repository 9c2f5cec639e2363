//! Contact form errors.

/// Misuse of [`ContactUsForm`](crate::state::ContactUsForm).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A case request was asked for while the form is not valid.
    /// Callers must check `is_form_valid()` first.
    #[error("contact form is incomplete: {missing:?}")]
    Incomplete { missing: Vec<&'static str> },

    /// No recipient address was configured or discovered.
    #[error("no recipient address available for the case")]
    NoRecipient,
}
