//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::animation::Animation;

/// A deterministic RNG so delay draws repeat between runs.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x7e57)
}

/// Owned word list from string literals.
pub fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// Ticks an animation until it settles and returns every published text.
///
/// Panics if the animation is still waking after 10_000 ticks.
pub fn drain<A: Animation>(animation: &mut A) -> Vec<Option<String>> {
    let mut rng = seeded_rng();
    let mut frames = Vec::new();
    for _ in 0..10_000 {
        let tick = animation.tick(&mut rng);
        let settled = tick.is_settled();
        frames.push(tick.text);
        if settled {
            return frames;
        }
    }
    panic!("animation did not settle");
}
