//! Property-based tests for the typing cycle and scroll tracking
//!
//! Uses proptest to verify the invariants the page relies on.

use proptest::prelude::*;
use portfolio_core::{
    NavEvent, NavMenu, ScrollConfig, ScrollTracker, SectionBand, SeededJitter, TypingConfig,
    TypingEffect, TypingPhase,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Short role strings, including non-ASCII characters
fn roles_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[a-zA-Zé ]{0,12}").expect("valid regex"),
        1..5,
    )
}

/// Contiguous, non-overlapping section bands
fn bands_strategy() -> impl Strategy<Value = Vec<SectionBand>> {
    prop::collection::vec(50.0f64..2000.0, 1..8).prop_map(|heights| {
        let mut top = 0.0;
        heights
            .into_iter()
            .enumerate()
            .map(|(i, height)| {
                let band = SectionBand::new(format!("section-{i}"), top, height);
                top += height;
                band
            })
            .collect()
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every rendered text is a prefix of the role it belongs to
    #[test]
    fn frames_are_role_prefixes(roles in roles_strategy(), seed in any::<u64>()) {
        let config = TypingConfig { roles: roles.clone(), ..TypingConfig::default() };
        let mut effect = TypingEffect::new(config, SeededJitter::new(seed)).unwrap();

        for _ in 0..300 {
            if let Some(frame) = effect.advance().frame {
                prop_assert!(roles[frame.role_index].starts_with(&frame.text));
            }
        }
    }

    /// Length never shrinks while typing and never grows while deleting
    #[test]
    fn length_is_monotonic_within_phase(roles in roles_strategy()) {
        let config = TypingConfig { roles, ..TypingConfig::default() };
        let mut effect = TypingEffect::steady(config).unwrap();
        let mut previous: Option<(TypingPhase, usize)> = None;

        for _ in 0..300 {
            let phase = effect.phase();
            if let Some(frame) = effect.advance().frame {
                let len = frame.text.chars().count();
                if let Some((prev_phase, prev_len)) = previous {
                    if prev_phase == phase {
                        match phase {
                            TypingPhase::Typing => prop_assert!(len >= prev_len),
                            TypingPhase::Deleting => prop_assert!(len <= prev_len),
                            _ => {}
                        }
                    }
                }
                previous = Some((phase, len));
            } else {
                previous = None;
            }
        }
    }

    /// Inside any band exactly that band's link is active
    #[test]
    fn active_link_matches_containing_band(
        bands in bands_strategy(),
        header in 40.0f64..120.0,
        fraction in 0.0f64..1.0,
    ) {
        let total: f64 = bands.iter().map(|b| b.height).sum();
        let probe = fraction * total;
        let y = (probe - header - 100.0).max(0.0);
        let probe = y + header + 100.0;

        let mut tracker = ScrollTracker::new(ScrollConfig::default(), 0.0);
        tracker.on_scroll(y, header, &bands);

        let containing: Vec<_> = bands.iter().filter(|b| b.contains(probe)).collect();
        if let Some(band) = containing.last() {
            prop_assert_eq!(tracker.active(), Some(band.id.as_str()));
            let active_count = bands.iter().filter(|b| tracker.is_active(&b.id)).count();
            prop_assert_eq!(active_count, 1);
        }
    }

    /// An even number of toggles always lands back on the closed menu
    #[test]
    fn even_toggles_close_menu(pairs in 0usize..10) {
        let mut menu = NavMenu::new();
        for _ in 0..pairs * 2 {
            menu.handle(NavEvent::Toggle);
        }
        prop_assert!(!menu.is_open());
        prop_assert_eq!(menu.icon().class(), "fa-bars");
    }
}
