//! Page context for the portfolio app.
//!
//! Holds every controller from `portfolio-core` in signals so any component
//! can read the state it renders and route events back.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| PageContext::new(config));
//!
//! // In child components
//! let page = use_page();
//! let menu = page.nav.read();
//! ```

use std::collections::HashMap;

use dioxus::prelude::*;
use portfolio_core::{
    HeaderState, NavEvent, NavMenu, Notification, PortfolioConfig, RevealTracker, ScrollTracker,
    Timer, ToastId, Toaster,
};

use crate::browser::{self, BrowserTimer};
use crate::content;

/// Browser events forwarded from native listeners into the Dioxus runtime
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scrolled,
    KeyDown(String),
    /// Click anywhere in the document outside the nav list and toggle
    OutsideClick,
    SectionVisible(String),
    VisibilityChanged,
}

/// Shared page state.
///
/// Every field is a signal or copy value, so the context itself is `Copy` and
/// can be moved into any number of event handlers.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub config: Signal<PortfolioConfig>,
    pub nav: Signal<NavMenu>,
    /// Last scroll offset lives here; only derived state below is reactive
    pub scroll: CopyValue<ScrollTracker>,
    pub header: Signal<HeaderState>,
    pub active_section: Signal<Option<String>>,
    pub reveal: Signal<RevealTracker>,
    /// Number of items already faded in, per staggered section
    pub faded: Signal<HashMap<String, usize>>,
    pub toaster: Signal<Toaster>,
    /// Document hidden; animations hold while true
    pub hidden: Signal<bool>,
}

impl PageEvent {
    /// The menu event this page event maps to, if any
    pub fn nav_event(&self) -> Option<NavEvent> {
        match self {
            PageEvent::KeyDown(key) => Some(NavEvent::KeyDown(key.clone())),
            PageEvent::OutsideClick => Some(NavEvent::OutsideClick),
            _ => None,
        }
    }
}

impl PageContext {
    pub fn new(config: PortfolioConfig) -> Self {
        let scroll = ScrollTracker::new(config.scroll.clone(), browser::scroll_y());
        let reveal = RevealTracker::new(config.reveal.clone());

        Self {
            config: Signal::new(config),
            nav: Signal::new(NavMenu::new()),
            scroll: CopyValue::new(scroll),
            header: Signal::new(HeaderState::default()),
            active_section: Signal::new(None),
            reveal: Signal::new(reveal),
            faded: Signal::new(HashMap::new()),
            toaster: Signal::new(Toaster::new()),
            hidden: Signal::new(browser::document_hidden()),
        }
    }

    /// Apply one browser event.
    pub fn handle(self, event: PageEvent) {
        if let Some(nav_event) = event.nav_event() {
            self.nav_event(nav_event);
            return;
        }
        match event {
            PageEvent::Scrolled => self.on_scroll(),
            PageEvent::KeyDown(_) | PageEvent::OutsideClick => {}
            PageEvent::SectionVisible(id) => self.reveal_section(id),
            PageEvent::VisibilityChanged => {
                let mut hidden = self.hidden;
                hidden.set(browser::document_hidden());
            }
        }
    }

    /// Route a nav event, re-rendering only when the menu changed.
    pub fn nav_event(self, event: NavEvent) {
        let mut nav = self.nav;
        let mut menu = *nav.peek();
        if menu.handle(event) {
            nav.set(menu);
        }
    }

    fn on_scroll(self) {
        let sections = browser::section_bands();
        let mut scroll = self.scroll;
        let header_state = scroll.write().on_scroll(
            browser::scroll_y(),
            browser::header_height(),
            &sections,
        );

        let mut header = self.header;
        if *header.peek() != header_state {
            header.set(header_state);
        }
        self.sync_active();
    }

    /// Mark a section active after an anchor click.
    pub fn set_active(self, section_id: &str) {
        let mut scroll = self.scroll;
        scroll.write().set_active(section_id);
        self.sync_active();
    }

    fn sync_active(self) {
        let active = self.scroll.read().active().map(str::to_string);
        let mut active_section = self.active_section;
        if *active_section.peek() != active {
            active_section.set(active);
        }
    }

    fn reveal_section(self, id: String) {
        let mut reveal = self.reveal;
        let count = content::stagger_item_count(&id);
        let Some(plan) = reveal.write().reveal(&id, count) else {
            return;
        };
        if plan.is_empty() {
            return;
        }

        let mut faded = self.faded;
        spawn(async move {
            let mut previous = std::time::Duration::ZERO;
            for (index, delay) in plan.delays.iter().enumerate() {
                BrowserTimer.sleep(delay.saturating_sub(previous)).await;
                previous = *delay;
                faded.write().insert(plan.section_id.clone(), index + 1);
            }
        });
    }

    /// Whether a section has scrolled into view
    pub fn is_revealed(&self, section_id: &str) -> bool {
        self.reveal.read().is_visible(section_id)
    }

    /// Whether item `index` of a staggered section has faded in
    pub fn is_faded(&self, section_id: &str, index: usize) -> bool {
        self.faded.read().get(section_id).is_some_and(|count| index < *count)
    }

    /// Show a toast and schedule its dismissal.
    pub fn notify(self, notification: Notification) {
        let mut toaster = self.toaster;
        let id = toaster.write().show(notification);
        let timings = self.config.peek().toast.clone();

        spawn(async move {
            BrowserTimer.sleep(timings.visible()).await;
            if toaster.write().dismiss(id) {
                BrowserTimer.sleep(timings.exit()).await;
                toaster.write().remove(id);
            }
        });
    }

    /// Close a toast early from its close button.
    pub fn close_toast(self, id: ToastId) {
        let mut toaster = self.toaster;
        if !toaster.write().dismiss(id) {
            return;
        }
        let exit = self.config.peek().toast.exit();
        spawn(async move {
            BrowserTimer.sleep(exit).await;
            toaster.write().remove(id);
        });
    }
}

/// Hook to access the page context.
pub fn use_page() -> PageContext {
    use_context::<PageContext>()
}
