//! Page configuration.
//!
//! Every timing, threshold and text the controllers use lives here so the
//! web app can bundle a `portfolio.json` and tests can shrink delays. All
//! fields are defaulted; an empty JSON object yields the stock page.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Top-level configuration for all page controllers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PortfolioConfig {
    pub typing: TypingConfig,
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
    pub toast: ToastConfig,
}

impl PortfolioConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the controllers cannot run with.
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.typing.roles.is_empty() {
            return Err(PortfolioError::Config("typing.roles is empty".into()));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(PortfolioError::Config(format!(
                "reveal.threshold {} outside [0, 1]",
                self.reveal.threshold
            )));
        }
        if self.contact.endpoint.trim().is_empty() {
            return Err(PortfolioError::Config("contact.endpoint is empty".into()));
        }
        if self.contact.fields.is_empty() {
            return Err(PortfolioError::Config("contact.fields is empty".into()));
        }
        Ok(())
    }
}

/// Typing effect timings, all in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Role strings cycled through in order
    pub roles: Vec<String>,
    pub start_delay_ms: u64,
    pub type_delay_ms: u64,
    pub delete_delay_ms: u64,
    /// Per-character delays vary uniformly within +/- this amount
    pub jitter_ms: u64,
    pub hold_after_typed_ms: u64,
    pub resume_after_typed_ms: u64,
    pub hold_after_deleted_ms: u64,
    pub resume_after_deleted_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            roles: vec![
                "AI Software Engineer ".into(),
                "Automation Specialist ".into(),
                "Full-Stack Developer ".into(),
            ],
            start_delay_ms: 1000,
            type_delay_ms: 100,
            delete_delay_ms: 50,
            jitter_ms: 10,
            hold_after_typed_ms: 2000,
            resume_after_typed_ms: 100,
            hold_after_deleted_ms: 500,
            resume_after_deleted_ms: 500,
        }
    }
}

impl TypingConfig {
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }
}

/// Header and active-link thresholds, in CSS pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Header gets the `scrolled` class past this offset
    pub scrolled_after: f64,
    /// Header may hide when scrolling down past this offset
    pub hide_after: f64,
    /// Extra distance below the header used to probe the active section
    pub active_probe_offset: f64,
    /// Gap left between header and section top after an anchor scroll
    pub anchor_gap: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrolled_after: 100.0,
            hide_after: 200.0,
            active_probe_offset: 100.0,
            anchor_gap: 20.0,
        }
    }
}

/// Staggered fade-in rule for one section's items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaggerRule {
    pub section_id: String,
    pub step_ms: u64,
}

/// Reveal-on-scroll observer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub stagger: Vec<StaggerRule>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
            stagger: vec![
                StaggerRule {
                    section_id: "projects".into(),
                    step_ms: 150,
                },
                StaggerRule {
                    section_id: "skills".into(),
                    step_ms: 100,
                },
            ],
        }
    }
}

/// Kind of contact form control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Textarea,
}

impl FieldKind {
    /// HTML `type` attribute for `<input>` controls
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Textarea => "text",
        }
    }
}

/// Declaration of one contact form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Form field name, also used as the element id
    pub name: String,
    /// Placeholder text; rendered as a floating label instead
    pub placeholder: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl FieldSpec {
    pub fn new(name: &str, placeholder: &str, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            placeholder: placeholder.into(),
            kind,
            required: true,
        }
    }
}

/// Contact form endpoint and fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Form `action` URL the submission is POSTed to
    pub endpoint: String,
    pub submit_label: String,
    pub sending_label: String,
    pub fields: Vec<FieldSpec>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://formspree.io/f/your-form-id".into(),
            submit_label: "Send Message".into(),
            sending_label: "Sending...".into(),
            fields: vec![
                FieldSpec::new("name", "Your Name", FieldKind::Text),
                FieldSpec::new("email", "Your Email", FieldKind::Email),
                FieldSpec::new("subject", "Subject", FieldKind::Text),
                FieldSpec::new("message", "Your Message", FieldKind::Textarea),
            ],
        }
    }
}

/// Toast notification timings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub visible_ms: u64,
    pub exit_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            visible_ms: 5000,
            exit_ms: 300,
        }
    }
}

impl ToastConfig {
    pub fn visible(&self) -> Duration {
        Duration::from_millis(self.visible_ms)
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        PortfolioConfig::default().validate().unwrap();
    }

    #[test]
    fn empty_object_yields_defaults() {
        let config = PortfolioConfig::from_json("{}").unwrap();
        assert_eq!(config, PortfolioConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            PortfolioConfig::from_json(r#"{ "typing": { "roles": ["Rustacean"], "type_delay_ms": 5 } }"#)
                .unwrap();
        assert_eq!(config.typing.roles, vec!["Rustacean".to_string()]);
        assert_eq!(config.typing.type_delay_ms, 5);
        assert_eq!(config.typing.delete_delay_ms, 50);
        assert_eq!(config.scroll, ScrollConfig::default());
    }

    #[test]
    fn empty_roles_rejected() {
        let err = PortfolioConfig::from_json(r#"{ "typing": { "roles": [] } }"#).unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
    }

    #[test]
    fn threshold_out_of_range_rejected() {
        let err = PortfolioConfig::from_json(r#"{ "reveal": { "threshold": 1.5 } }"#).unwrap_err();
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = PortfolioConfig::from_json("{ typing: ").unwrap_err();
        assert!(matches!(err, PortfolioError::Serialization(_)));
    }

    #[test]
    fn field_kind_parses_lowercase() {
        let spec: FieldSpec =
            serde_json::from_str(r#"{ "name": "email", "placeholder": "Your Email", "kind": "email" }"#)
                .unwrap();
        assert_eq!(spec.kind, FieldKind::Email);
        assert!(spec.required);
    }
}
