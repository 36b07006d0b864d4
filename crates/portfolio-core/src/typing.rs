//! Typing effect state machine.
//!
//! Cycles through the configured roles one character at a time:
//!
//! ```text
//! Typing ──(past end)──▶ PausedAfterTyping ──▶ Deleting
//!    ▲                                            │
//!    └──── PausedAfterDeleting ◀──(reached 0)─────┘
//! ```
//!
//! [`TypingEffect::advance`] performs exactly one transition and reports what
//! to render and how long to wait before the next call. Nothing in here
//! touches a clock; [`TypingEffect::run`] drives it with an injected
//! [`Timer`].

use std::ops::ControlFlow;
use std::time::Duration;

use crate::config::TypingConfig;
use crate::error::{PortfolioError, PortfolioResult};
use crate::timer::{jittered, Jitter, NoJitter, Timer};

/// Blinking cursor marker rendered after the typed prefix
pub const CURSOR: &str = "|";

/// Current phase of the typing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    PausedAfterTyping,
    Deleting,
    PausedAfterDeleting,
}

/// What the typing element should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    /// Index of the role this text belongs to
    pub role_index: usize,
    /// Prefix of the role; the cursor is rendered separately
    pub text: String,
}

/// Outcome of one [`TypingEffect::advance`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    /// New text to render, `None` during pauses
    pub frame: Option<TypingFrame>,
    /// Wait before the next advance
    pub delay: Duration,
}

/// Typing/deleting animation over a fixed list of roles
#[derive(Debug, Clone)]
pub struct TypingEffect<J = NoJitter> {
    roles: Vec<String>,
    config: TypingConfig,
    role_index: usize,
    char_index: usize,
    phase: TypingPhase,
    jitter: J,
}

impl TypingEffect<NoJitter> {
    /// Effect with exact, unjittered delays.
    pub fn steady(config: TypingConfig) -> PortfolioResult<Self> {
        Self::new(config, NoJitter)
    }
}

impl<J: Jitter> TypingEffect<J> {
    pub fn new(config: TypingConfig, jitter: J) -> PortfolioResult<Self> {
        if config.roles.is_empty() {
            return Err(PortfolioError::Config("typing effect needs at least one role".into()));
        }
        Ok(Self {
            roles: config.roles.clone(),
            config,
            role_index: 0,
            char_index: 0,
            phase: TypingPhase::Typing,
            jitter,
        })
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn current_role(&self) -> &str {
        &self.roles[self.role_index]
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Perform one transition of the cycle.
    pub fn advance(&mut self) -> TypingStep {
        match self.phase {
            TypingPhase::Typing => {
                let frame = self.frame();
                self.char_index += 1;

                if self.char_index > self.role_len() {
                    self.phase = TypingPhase::PausedAfterTyping;
                    tracing::trace!(role = self.role_index, "role fully typed");
                    self.step(Some(frame), Duration::from_millis(self.config.hold_after_typed_ms))
                } else {
                    let delay = self.char_delay(self.config.type_delay_ms);
                    self.step(Some(frame), delay)
                }
            }
            TypingPhase::PausedAfterTyping => {
                self.phase = TypingPhase::Deleting;
                self.step(None, Duration::from_millis(self.config.resume_after_typed_ms))
            }
            TypingPhase::Deleting => {
                let frame = self.frame();
                self.char_index = self.char_index.saturating_sub(1);

                if self.char_index == 0 {
                    self.role_index = (self.role_index + 1) % self.roles.len();
                    self.phase = TypingPhase::PausedAfterDeleting;
                    tracing::trace!(next_role = self.role_index, "role deleted");
                    self.step(Some(frame), Duration::from_millis(self.config.hold_after_deleted_ms))
                } else {
                    let delay = self.char_delay(self.config.delete_delay_ms);
                    self.step(Some(frame), delay)
                }
            }
            TypingPhase::PausedAfterDeleting => {
                self.phase = TypingPhase::Typing;
                self.step(None, Duration::from_millis(self.config.resume_after_deleted_ms))
            }
        }
    }

    /// Drive the cycle forever, or until `render` breaks.
    ///
    /// Waits the configured start delay before the first frame.
    pub async fn run<T, F>(&mut self, timer: &T, mut render: F)
    where
        T: Timer,
        F: FnMut(&TypingFrame) -> ControlFlow<()>,
    {
        timer.sleep(self.config.start_delay()).await;
        loop {
            let step = self.advance();
            if let Some(frame) = &step.frame {
                if render(frame).is_break() {
                    return;
                }
            }
            timer.sleep(step.delay).await;
        }
    }

    fn role_len(&self) -> usize {
        self.current_role().chars().count()
    }

    fn frame(&self) -> TypingFrame {
        let role = self.current_role();
        TypingFrame {
            role_index: self.role_index,
            text: role.chars().take(self.char_index).collect(),
        }
    }

    fn char_delay(&mut self, base_ms: u64) -> Duration {
        let offset = self.jitter.offset_ms(self.config.jitter_ms);
        jittered(base_ms, offset)
    }

    fn step(&self, frame: Option<TypingFrame>, delay: Duration) -> TypingStep {
        TypingStep { frame, delay }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(roles: &[&str]) -> TypingConfig {
        TypingConfig {
            roles: roles.iter().map(|r| r.to_string()).collect(),
            ..TypingConfig::default()
        }
    }

    fn texts(effect: &mut TypingEffect, steps: usize) -> Vec<Option<String>> {
        (0..steps)
            .map(|_| effect.advance().frame.map(|f| f.text))
            .collect()
    }

    #[test]
    fn empty_roles_rejected() {
        assert!(TypingEffect::steady(config(&[])).is_err());
    }

    #[test]
    fn full_cycle_of_short_role() {
        let mut effect = TypingEffect::steady(config(&["ab", "x"])).unwrap();

        let seen = texts(&mut effect, 8);
        assert_eq!(
            seen,
            vec![
                Some("".into()),
                Some("a".into()),
                Some("ab".into()),
                None,
                Some("ab".into()),
                Some("ab".into()),
                Some("a".into()),
                None,
            ]
        );
        assert_eq!(effect.role_index(), 1);
        assert_eq!(effect.phase(), TypingPhase::Typing);
    }

    #[test]
    fn pause_delays_match_config() {
        let mut effect = TypingEffect::steady(config(&["a"])).unwrap();

        assert_eq!(effect.advance().delay, Duration::from_millis(100));
        assert_eq!(effect.advance().delay, Duration::from_millis(2000));
        assert_eq!(effect.phase(), TypingPhase::PausedAfterTyping);
        assert_eq!(effect.advance().delay, Duration::from_millis(100));
        assert_eq!(effect.phase(), TypingPhase::Deleting);
        assert_eq!(effect.advance().delay, Duration::from_millis(50));
        assert_eq!(effect.advance().delay, Duration::from_millis(500));
        assert_eq!(effect.phase(), TypingPhase::PausedAfterDeleting);
        assert_eq!(effect.advance().delay, Duration::from_millis(500));
        assert_eq!(effect.phase(), TypingPhase::Typing);
    }

    #[test]
    fn prefixes_count_chars_not_bytes() {
        let mut effect = TypingEffect::steady(config(&["héllo"])).unwrap();
        let seen = texts(&mut effect, 3);
        assert_eq!(seen[2].as_deref(), Some("hé"));
    }

    #[test]
    fn empty_role_still_cycles() {
        let mut effect = TypingEffect::steady(config(&["", "b"])).unwrap();
        // typing "" then pause, resume, one delete frame, pause, resume
        for _ in 0..5 {
            effect.advance();
        }
        assert_eq!(effect.role_index(), 1);
    }
}
