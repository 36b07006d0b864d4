//! Reveal-on-scroll bookkeeping.
//!
//! The browser's intersection observer reports sections entering the
//! viewport; this module decides which ones are new and how their items are
//! staggered.

use std::collections::HashSet;
use std::time::Duration;

use crate::config::RevealConfig;

/// Delays at which a revealed section's items receive `fade-in`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaggerPlan {
    pub section_id: String,
    /// Delay for item `i`, measured from the reveal
    pub delays: Vec<Duration>,
}

impl StaggerPlan {
    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    config: RevealConfig,
    visible: HashSet<String>,
}

impl RevealTracker {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            visible: HashSet::new(),
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn is_visible(&self, section_id: &str) -> bool {
        self.visible.contains(section_id)
    }

    /// Record that `section_id` intersected the viewport.
    ///
    /// Returns the stagger plan the first time, `None` on every later call.
    /// Sections without a stagger rule get an empty plan.
    pub fn reveal(&mut self, section_id: &str, item_count: usize) -> Option<StaggerPlan> {
        if !self.visible.insert(section_id.to_string()) {
            return None;
        }

        let delays = match self.step_for(section_id) {
            Some(step) => (0..item_count as u32).map(|i| step * i).collect(),
            None => Vec::new(),
        };
        tracing::debug!(section = section_id, items = delays.len(), "section revealed");

        Some(StaggerPlan {
            section_id: section_id.to_string(),
            delays,
        })
    }

    fn step_for(&self, section_id: &str) -> Option<Duration> {
        self.config
            .stagger
            .iter()
            .find(|rule| rule.section_id == section_id)
            .map(|rule| Duration::from_millis(rule.step_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_stagger_150ms() {
        let mut tracker = RevealTracker::new(RevealConfig::default());
        let plan = tracker.reveal("projects", 3).unwrap();
        assert_eq!(
            plan.delays,
            vec![
                Duration::ZERO,
                Duration::from_millis(150),
                Duration::from_millis(300)
            ]
        );
    }

    #[test]
    fn skills_stagger_100ms() {
        let mut tracker = RevealTracker::new(RevealConfig::default());
        let plan = tracker.reveal("skills", 4).unwrap();
        assert_eq!(plan.delays[3], Duration::from_millis(300));
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut tracker = RevealTracker::new(RevealConfig::default());
        assert!(tracker.reveal("about", 0).is_some());
        assert!(tracker.is_visible("about"));
        assert!(tracker.reveal("about", 0).is_none());
    }

    #[test]
    fn unstaggered_section_gets_empty_plan() {
        let mut tracker = RevealTracker::new(RevealConfig::default());
        let plan = tracker.reveal("contact", 5).unwrap();
        assert!(plan.is_empty());
    }
}
