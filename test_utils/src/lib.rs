//! Utility helpers for tests.
//!
//! Armature fixtures, a fixed-step frame driver and a small Bevy app builder
//! shared by the integration suites.

pub mod app;
pub mod frames;
pub mod rigs;

pub use frames::FrameDriver;
pub use rigs::{bound_opponent, hands_only, head_and_spine, humanoid};

/// Assert that every item of `needles` appears in `haystack`, in order.
///
/// # Panics
/// Panics naming the first missing item.
pub fn assert_in_order<T: PartialEq + std::fmt::Debug>(haystack: &[T], needles: &[T]) {
    let mut rest = haystack.iter();
    for needle in needles {
        assert!(
            rest.any(|item| item == needle),
            "{needle:?} not found in order within {haystack:?}"
        );
    }
}
