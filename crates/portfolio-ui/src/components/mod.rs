//! Reusable UI components
//!
//! Buttons, floating-label form fields and the toast banner.

mod button;
mod floating_field;
mod toast;

pub use button::*;
pub use floating_field::*;
pub use toast::*;
