//! Property tests for navigation-stack and presentation-option invariants.

use proptest::prelude::*;
use veer_core::{Detent, Identified, NavStack, PresentationOptions};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Screen(u32);

impl Identified for Screen {
    type Id = u32;

    fn identity(&self) -> u32 {
        self.0
    }
}

fn stack_of(n: usize) -> NavStack<Screen> {
    let mut stack = NavStack::new();
    for i in 0..n {
        stack.push(Screen(i as u32));
    }
    stack
}

proptest! {
    // back_saturating(k) with k >= n empties; with k < n leaves n - k.
    #[test]
    fn back_saturating_monotonicity(n in 0usize..64, k in 0usize..128) {
        let mut stack = stack_of(n);
        stack.back_saturating(k);
        if k >= n {
            prop_assert_eq!(stack.len(), 0);
        } else {
            prop_assert_eq!(stack.len(), n - k);
        }
    }

    // back(k) removes k entries when possible, otherwise nothing.
    #[test]
    fn back_is_all_or_nothing(n in 0usize..64, k in 1usize..128) {
        let mut stack = stack_of(n);
        let removed = stack.back(k);
        if k <= n {
            prop_assert_eq!(removed, k);
            prop_assert_eq!(stack.len(), n - k);
        } else {
            prop_assert_eq!(removed, 0);
            prop_assert_eq!(stack.len(), n);
        }
    }

    // Repeated back() on an empty stack never changes anything and never
    // faults.
    #[test]
    fn empty_back_is_idempotent(repeats in 1usize..32) {
        let mut stack: NavStack<Screen> = NavStack::new();
        for _ in 0..repeats {
            stack.back(1);
            stack.back_saturating(1);
        }
        prop_assert!(stack.is_empty());
    }

    // Interleaved pushes and backs keep length consistent with the op
    // sequence replayed against a counter.
    #[test]
    fn length_tracks_operations(ops in prop::collection::vec((0u8..3, 0usize..8), 0..64)) {
        let mut stack = NavStack::new();
        let mut expected = 0usize;
        for (op, arg) in ops {
            match op {
                0 => {
                    stack.push(Screen(arg as u32));
                    expected += 1;
                }
                1 => {
                    if arg <= expected {
                        expected -= stack.back(arg);
                    } else {
                        stack.back(arg);
                    }
                }
                _ => {
                    expected -= stack.back_saturating(arg);
                }
            }
            prop_assert_eq!(stack.len(), expected);
        }
    }

    // Builder overrides never mutate the shared default state.
    #[test]
    fn options_default_never_leaks(height in 0u32..2000, width in 0u32..2000) {
        let customized = PresentationOptions::new()
            .detents([Detent::Medium])
            .drag_indicator(true)
            .dismiss_disabled(true)
            .height(height)
            .width(width);
        prop_assert!(customized.dismiss_disabled);

        let fresh = PresentationOptions::default();
        prop_assert_eq!(fresh.detents, vec![Detent::Large]);
        prop_assert!(!fresh.drag_indicator);
        prop_assert!(!fresh.dismiss_disabled);
        prop_assert_eq!(fresh.width, None);
    }
}
