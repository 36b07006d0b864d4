//! Mobile navigation menu state.
//!
//! The hamburger icon is derived from the open flag rather than stored, so the
//! list and the toggle can never disagree.

/// Icon shown on the menu toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,
    Times,
}

impl MenuIcon {
    /// Font Awesome class for this icon
    pub fn class(&self) -> &'static str {
        match self {
            MenuIcon::Bars => "fa-bars",
            MenuIcon::Times => "fa-times",
        }
    }
}

/// Why the menu is being closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    LinkClick,
    OutsideClick,
    EscapeKey,
}

/// Input events the menu reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// The toggle button was clicked
    Toggle,
    /// A link inside the nav list was clicked
    LinkClick,
    /// A click reached the page without landing on the nav list or toggle
    OutsideClick,
    /// A key was pressed anywhere on the page
    KeyDown(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn icon(&self) -> MenuIcon {
        if self.open {
            MenuIcon::Times
        } else {
            MenuIcon::Bars
        }
    }

    /// Class list for the `nav ul` element
    pub fn list_class(&self) -> &'static str {
        if self.open {
            "nav-list show"
        } else {
            "nav-list"
        }
    }

    /// Class list for the `.menu-toggle` button
    pub fn toggle_class(&self) -> &'static str {
        if self.open {
            "menu-toggle active"
        } else {
            "menu-toggle"
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "nav menu toggled");
    }

    /// Close the menu. Returns whether anything changed.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        tracing::debug!(?trigger, "nav menu closed");
        true
    }

    /// Route an input event to toggle or close.
    pub fn handle(&mut self, event: NavEvent) -> bool {
        match event {
            NavEvent::Toggle => {
                self.toggle();
                true
            }
            NavEvent::LinkClick => self.close(CloseTrigger::LinkClick),
            NavEvent::OutsideClick => self.close(CloseTrigger::OutsideClick),
            NavEvent::KeyDown(key) if key == "Escape" => self.close(CloseTrigger::EscapeKey),
            NavEvent::KeyDown(_) => false,
        }
    }
}
