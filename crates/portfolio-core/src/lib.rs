//! Portfolio Page Core Library
//!
//! Platform-free controllers behind the portfolio page: the typing effect,
//! mobile navigation, scroll tracking, reveal-on-scroll, the contact form and
//! toast notifications.
//!
//! ## Overview
//!
//! Nothing here touches the DOM. The web app measures the page, feeds plain
//! values in, and renders what comes back. Waiting goes through the
//! [`Timer`] trait and network access through [`Transport`], so every
//! controller can be exercised on the host.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::ops::ControlFlow;
//! use portfolio_core::{PortfolioConfig, SeededJitter, TypingEffect};
//!
//! let config = PortfolioConfig::default();
//! let mut typing = TypingEffect::new(config.typing.clone(), SeededJitter::new(7))?;
//!
//! typing.run(&timer, |frame| {
//!     println!("{}|", frame.text);
//!     ControlFlow::Continue(())
//! }).await;
//! ```

pub mod config;
pub mod contact;
pub mod error;
pub mod nav;
pub mod notify;
pub mod reveal;
pub mod scroll;
pub mod timer;
pub mod typing;

// Re-exports
pub use config::{
    ContactConfig, FieldKind, FieldSpec, PortfolioConfig, RevealConfig, ScrollConfig,
    StaggerRule, ToastConfig, TypingConfig,
};
pub use contact::{ContactForm, FormField, Submission, Transport, ACCEPT_JSON};
pub use error::{PortfolioError, PortfolioResult, TransportError, ValidationError};
pub use nav::{CloseTrigger, MenuIcon, NavEvent, NavMenu};
pub use notify::{Notification, NotificationKind, Toast, ToastId, Toaster};
pub use reveal::{RevealTracker, StaggerPlan};
pub use scroll::{anchor_target, HeaderState, ScrollTracker, SectionBand};
pub use timer::{Jitter, NoJitter, Pausable, SeededJitter, Timer};
pub use typing::{TypingEffect, TypingFrame, TypingPhase, TypingStep, CURSOR};
