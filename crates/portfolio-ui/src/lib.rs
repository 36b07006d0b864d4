//! Portfolio Page UI Components
//!
//! Presentational Dioxus components shared by the page sections. They hold
//! no state of their own; values and callbacks come from the controllers in
//! `portfolio-core` through the app.
//!
//! ## Visual language
//!
//! - **Blue (#2563eb)**: links, focused labels, primary actions
//! - **Slate (#6b7280)**: resting labels and secondary text
//! - **Green / Red / Blue** toasts for success, error and info

pub mod components;

pub use components::*;
