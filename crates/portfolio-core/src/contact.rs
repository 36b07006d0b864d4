//! Contact form: floating labels, validation and submission.
//!
//! Submission is split in two halves so the web view can release its state
//! borrow while the request is in flight:
//!
//! 1. [`ContactForm::begin_submit`] validates and locks the submit button.
//! 2. [`ContactForm::finish_submit`] maps the transport outcome to a toast and
//!    always unlocks the button.
//!
//! [`ContactForm::submit`] runs both around a [`Transport`].

use std::future::Future;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{ContactConfig, FieldKind, FieldSpec};
use crate::error::{PortfolioError, PortfolioResult, TransportError, ValidationError};
use crate::notify::Notification;

pub const INVALID_FORM_MESSAGE: &str = "Please fill all required fields correctly.";
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Something went wrong. Please try again later.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
pub const ALREADY_SENDING_MESSAGE: &str = "Your message is already on its way.";

/// Border colour applied to fields that failed validation
pub const INVALID_BORDER: &str = "#ef4444";

/// `Accept` header sent with every submission
pub const ACCEPT_JSON: &str = "application/json";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Whether `value` looks like an email address
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// One form control with a floating label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    spec: FieldSpec,
    value: String,
    focused: bool,
    invalid: bool,
}

impl FormField {
    fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            focused: false,
            invalid: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Label text, taken from the declared placeholder
    pub fn label(&self) -> &str {
        &self.spec.placeholder
    }

    pub fn kind(&self) -> FieldKind {
        self.spec.kind
    }

    pub fn required(&self) -> bool {
        self.spec.required
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Label floats above the control when focused or filled
    pub fn label_active(&self) -> bool {
        self.focused || !self.value.is_empty()
    }

    pub fn label_class(&self) -> &'static str {
        if self.label_active() {
            "active"
        } else {
            ""
        }
    }

    pub fn group_class(&self) -> &'static str {
        if self.focused {
            "form-group focused"
        } else {
            "form-group"
        }
    }

    /// Inline style for the control's border
    pub fn border_style(&self) -> String {
        if self.invalid {
            format!("border-color: {INVALID_BORDER};")
        } else {
            String::new()
        }
    }

    fn reset(&mut self) {
        self.value.clear();
        self.focused = false;
        self.invalid = false;
    }
}

/// Payload of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub endpoint: String,
    /// `(name, value)` pairs in declaration order
    pub fields: Vec<(String, String)>,
}

/// Delivers a [`Submission`] and reports the HTTP status
pub trait Transport {
    fn post_form(&self, submission: &Submission) -> impl Future<Output = Result<u16, TransportError>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    endpoint: String,
    submit_label: String,
    sending_label: String,
    fields: Vec<FormField>,
    submitting: bool,
}

impl ContactForm {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            submit_label: config.submit_label.clone(),
            sending_label: config.sending_label.clone(),
            fields: config.fields.iter().cloned().map(FormField::new).collect(),
            submitting: false,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    fn field_mut(&mut self, name: &str) -> PortfolioResult<&mut FormField> {
        self.fields
            .iter_mut()
            .find(|f| f.name() == name)
            .ok_or_else(|| PortfolioError::UnknownField(name.to_string()))
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Text on the submit button
    pub fn submit_label(&self) -> &str {
        if self.submitting {
            &self.sending_label
        } else {
            &self.submit_label
        }
    }

    pub fn focus(&mut self, name: &str) -> PortfolioResult<()> {
        self.field_mut(name)?.focused = true;
        Ok(())
    }

    pub fn blur(&mut self, name: &str) -> PortfolioResult<()> {
        self.field_mut(name)?.focused = false;
        Ok(())
    }

    /// Update a value; any validation mark on the field is cleared.
    pub fn input(&mut self, name: &str, value: impl Into<String>) -> PortfolioResult<()> {
        let field = self.field_mut(name)?;
        field.value = value.into();
        field.invalid = false;
        Ok(())
    }

    /// Check required fields and the email format, marking offenders.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        let mut error = ValidationError::default();

        for field in &mut self.fields {
            if field.required() && field.value.trim().is_empty() {
                field.invalid = true;
                error.missing.push(field.name().to_string());
            }
        }

        if let Some(email) = self.fields.iter_mut().find(|f| f.kind() == FieldKind::Email) {
            if !email.value.is_empty() && !is_valid_email(&email.value) {
                email.invalid = true;
                error.malformed_email = true;
            }
        }

        if error.is_empty() {
            Ok(())
        } else {
            Err(error)
        }
    }

    /// Validate and lock the form for sending.
    ///
    /// On failure the error toast is returned and nothing is locked. While a
    /// previous submission is in flight no second one is produced.
    pub fn begin_submit(&mut self) -> Result<Submission, Notification> {
        if self.submitting {
            tracing::debug!("contact form already sending");
            return Err(Notification::info(ALREADY_SENDING_MESSAGE));
        }
        if let Err(error) = self.validate() {
            tracing::debug!(%error, "contact form rejected");
            return Err(Notification::error(INVALID_FORM_MESSAGE));
        }

        self.submitting = true;
        Ok(Submission {
            endpoint: self.endpoint.clone(),
            fields: self
                .fields
                .iter()
                .map(|f| (f.name().to_string(), f.value.clone()))
                .collect(),
        })
    }

    /// Settle a submission and unlock the form.
    pub fn finish_submit(&mut self, outcome: Result<u16, TransportError>) -> Notification {
        self.submitting = false;

        match outcome {
            Ok(status) if (200..300).contains(&status) => {
                tracing::info!(status, "contact form sent");
                self.reset();
                Notification::success(SENT_MESSAGE)
            }
            Ok(status) => {
                tracing::warn!(status, "contact endpoint rejected submission");
                Notification::error(FAILED_MESSAGE)
            }
            Err(error) => {
                tracing::error!(%error, "contact form submission failed");
                Notification::error(NETWORK_ERROR_MESSAGE)
            }
        }
    }

    /// Validate, send through `transport`, and settle.
    pub async fn submit<T: Transport>(&mut self, transport: &T) -> Notification {
        let submission = match self.begin_submit() {
            Ok(submission) => submission,
            Err(notification) => return notification,
        };
        let outcome = transport.post_form(&submission).await;
        self.finish_submit(outcome)
    }

    /// Clear every value and drop all floating labels.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm::new(&ContactConfig::default())
    }

    fn fill(form: &mut ContactForm) {
        form.input("name", "Ada").unwrap();
        form.input("email", "ada@example.com").unwrap();
        form.input("subject", "Hello").unwrap();
        form.input("message", "Nice site").unwrap();
    }

    #[test]
    fn placeholders_become_labels() {
        let form = form();
        let labels: Vec<_> = form.fields().iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Your Name", "Your Email", "Subject", "Your Message"]);
        assert!(form.fields().iter().all(|f| !f.label_active()));
    }

    #[test]
    fn label_floats_on_focus_and_stays_when_filled() {
        let mut form = form();
        form.focus("name").unwrap();
        assert_eq!(form.field("name").unwrap().label_class(), "active");
        assert_eq!(form.field("name").unwrap().group_class(), "form-group focused");

        form.blur("name").unwrap();
        assert!(!form.field("name").unwrap().label_active());

        form.focus("name").unwrap();
        form.input("name", "Ada").unwrap();
        form.blur("name").unwrap();
        assert!(form.field("name").unwrap().label_active());
        assert_eq!(form.field("name").unwrap().group_class(), "form-group");
    }

    #[test]
    fn unknown_field_is_error() {
        let mut form = form();
        assert!(matches!(form.focus("phone"), Err(PortfolioError::UnknownField(_))));
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = form();
        fill(&mut form);
        form.input("subject", "   ").unwrap();
        let err = form.validate().unwrap_err();
        assert_eq!(err.missing, vec!["subject".to_string()]);
        assert!(form.field("subject").unwrap().is_invalid());
        assert_eq!(
            form.field("subject").unwrap().border_style(),
            "border-color: #ef4444;"
        );
    }

    #[test]
    fn input_clears_invalid_mark() {
        let mut form = form();
        let _ = form.validate();
        assert!(form.field("name").unwrap().is_invalid());
        form.input("name", "A").unwrap();
        assert!(!form.field("name").unwrap().is_invalid());
        assert_eq!(form.field("name").unwrap().border_style(), "");
    }

    #[test]
    fn begin_submit_locks_button() {
        let mut form = form();
        fill(&mut form);
        let submission = form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), "Sending...");
        assert_eq!(submission.fields[1], ("email".to_string(), "ada@example.com".to_string()));
    }

    #[test]
    fn second_begin_submit_while_sending_is_refused() {
        let mut form = form();
        fill(&mut form);
        form.begin_submit().unwrap();

        let toast = form.begin_submit().unwrap_err();
        assert_eq!(toast, Notification::info(ALREADY_SENDING_MESSAGE));
        assert!(form.is_submitting());

        form.finish_submit(Ok(500));
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn reset_restores_fresh_form() {
        fn assert_total_eq<T: Eq>(_: &T) {}

        let mut form = form();
        fill(&mut form);
        form.focus("email").unwrap();
        form.reset();

        assert_total_eq(&form);
        assert_eq!(form, ContactForm::new(&ContactConfig::default()));
    }

    #[test]
    fn non_ok_status_keeps_values() {
        let mut form = form();
        fill(&mut form);
        form.begin_submit().unwrap();
        let toast = form.finish_submit(Ok(500));
        assert_eq!(toast, Notification::error(FAILED_MESSAGE));
        assert!(!form.is_submitting());
        assert_eq!(form.submit_label(), "Send Message");
        assert_eq!(form.field("name").unwrap().value(), "Ada");
    }

    #[test]
    fn network_error_keeps_values() {
        let mut form = form();
        fill(&mut form);
        form.begin_submit().unwrap();
        let toast = form.finish_submit(Err(TransportError::Network("offline".into())));
        assert_eq!(toast.message, NETWORK_ERROR_MESSAGE);
        assert!(!form.is_submitting());
        assert_eq!(form.field("message").unwrap().value(), "Nice site");
    }
}
