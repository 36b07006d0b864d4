//! Page sections and chrome for the portfolio.

mod anchor;
mod contact;
mod footer;
mod hero;
mod nav_header;
mod sections;
mod toast_host;

pub use anchor::AnchorLink;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav_header::NavHeader;
pub use sections::{About, Projects, Skills};
pub use toast_host::ToastHost;
