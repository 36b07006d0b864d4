//! Scroll-driven header state and active nav link tracking.

use crate::config::ScrollConfig;

/// Vertical extent of a page section, in document coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBand {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBand {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Whether `y` falls inside `[top, top + height)`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Visual state of the fixed header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    /// Past the `scrolled` threshold
    pub scrolled: bool,
    /// Slid out of view while scrolling down
    pub hidden: bool,
}

impl HeaderState {
    pub fn class(&self) -> &'static str {
        if self.scrolled {
            "site-header scrolled"
        } else {
            "site-header"
        }
    }

    /// Inline transform for show/hide
    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

/// Tracks the last scroll offset and which nav link is active
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    config: ScrollConfig,
    last_y: f64,
    header: HeaderState,
    active: Option<String>,
}

impl ScrollTracker {
    /// Start tracking from the page's current scroll offset.
    pub fn new(config: ScrollConfig, initial_y: f64) -> Self {
        Self {
            config,
            last_y: initial_y,
            header: HeaderState::default(),
            active: None,
        }
    }

    pub fn header(&self) -> HeaderState {
        self.header
    }

    /// Id of the section whose nav link is active
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether the link pointing at `#section_id` should carry `active`
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active.as_deref() == Some(section_id)
    }

    /// Mark a section active directly, as after an anchor click.
    pub fn set_active(&mut self, section_id: &str) {
        self.active = Some(section_id.to_string());
    }

    /// React to one native scroll event.
    ///
    /// When no band contains the probe position the previous active link is
    /// kept.
    pub fn on_scroll(&mut self, y: f64, header_height: f64, sections: &[SectionBand]) -> HeaderState {
        self.header = HeaderState {
            scrolled: y > self.config.scrolled_after,
            hidden: y > self.last_y && y > self.config.hide_after,
        };
        self.last_y = y;

        let probe = y + header_height + self.config.active_probe_offset;
        if let Some(band) = sections.iter().rev().find(|band| band.contains(probe)) {
            if !self.is_active(&band.id) {
                tracing::trace!(section = %band.id, "active section changed");
                self.active = Some(band.id.clone());
            }
        }

        self.header
    }

    /// Document offset to smooth-scroll to so `section_top` clears the header.
    pub fn scroll_target(&self, section_top: f64, header_height: f64) -> f64 {
        section_top - header_height - self.config.anchor_gap
    }
}

/// Section id an in-page `href` points at; `None` for a bare `#` or a
/// non-anchor link.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands() -> Vec<SectionBand> {
        vec![
            SectionBand::new("home", 0.0, 600.0),
            SectionBand::new("about", 600.0, 800.0),
            SectionBand::new("projects", 1400.0, 1000.0),
        ]
    }

    #[test]
    fn scrolled_class_past_threshold() {
        let mut tracker = ScrollTracker::new(ScrollConfig::default(), 0.0);
        assert!(!tracker.on_scroll(100.0, 80.0, &[]).scrolled);
        assert!(tracker.on_scroll(101.0, 80.0, &[]).scrolled);
        assert_eq!(tracker.header().class(), "site-header scrolled");
    }

    #[test]
    fn header_hides_only_scrolling_down_past_200() {
        let mut tracker = ScrollTracker::new(ScrollConfig::default(), 0.0);
        assert!(!tracker.on_scroll(150.0, 80.0, &[]).hidden);
        assert!(tracker.on_scroll(250.0, 80.0, &[]).hidden);
        assert_eq!(tracker.header().transform(), "translateY(-100%)");
        assert!(!tracker.on_scroll(240.0, 80.0, &[]).hidden);
        assert!(!tracker.on_scroll(240.0, 80.0, &[]).hidden);
    }

    #[test]
    fn active_section_uses_header_offset() {
        let mut tracker = ScrollTracker::new(ScrollConfig::default(), 0.0);
        // probe = 400 + 80 + 100 = 580 -> still home
        tracker.on_scroll(400.0, 80.0, &bands());
        assert_eq!(tracker.active(), Some("home"));
        // probe = 420 + 80 + 100 = 600 -> about
        tracker.on_scroll(420.0, 80.0, &bands());
        assert_eq!(tracker.active(), Some("about"));
        assert!(tracker.is_active("about"));
        assert!(!tracker.is_active("home"));
    }

    #[test]
    fn gap_between_sections_keeps_previous() {
        let sections = vec![
            SectionBand::new("about", 0.0, 500.0),
            SectionBand::new("contact", 1000.0, 500.0),
        ];
        let mut tracker = ScrollTracker::new(ScrollConfig::default(), 0.0);
        tracker.on_scroll(0.0, 80.0, &sections);
        assert_eq!(tracker.active(), Some("about"));
        tracker.on_scroll(500.0, 80.0, &sections);
        assert_eq!(tracker.active(), Some("about"));
    }

    #[test]
    fn scroll_target_clears_header() {
        let tracker = ScrollTracker::new(ScrollConfig::default(), 0.0);
        assert_eq!(tracker.scroll_target(1400.0, 80.0), 1300.0);
    }

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#projects"), Some("projects"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com"), None);
    }
}
