//! Injectable randomness.
//!
//! Generators never reach for a global RNG directly. They draw through
//! [`RandomSource`], which every [`rand::Rng`] implements, so tests can pass a
//! seeded `ChaCha8Rng` or a scripted source.

use rand::Rng;
use tracing::warn;

/// The random draws needed to build names and addresses.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `0..upper`.
    ///
    /// `upper` is never zero when called by this crate.
    fn below(&mut self, upper: usize) -> usize;

    /// Returns `true` or `false` with equal probability.
    fn coin_flip(&mut self) -> bool;
}

impl<R: Rng> RandomSource for R {
    fn below(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }

    fn coin_flip(&mut self) -> bool {
        self.random()
    }
}

/// Draws from `0..upper`, clamping a misbehaving source to `upper - 1`.
///
/// Out-of-range draws are logged at `warn` level so a broken
/// [`RandomSource`] implementation is visible without producing an empty
/// address component.
pub(crate) fn draw_below<S>(source: &mut S, upper: usize) -> usize
where
    S: RandomSource + ?Sized,
{
    let value = source.below(upper);
    if value < upper {
        return value;
    }
    let clamped = upper.saturating_sub(1);
    warn!(value, upper, clamped, "random source drew out of range");
    clamped
}

/// Picks one entry uniformly from a non-empty static list.
///
/// An out-of-range draw selects the last entry, so the result is always a
/// member of `items`. Only an empty list yields an empty string, and the
/// bundled lists are non-empty at compile time.
pub(crate) fn pick<S>(source: &mut S, items: &'static [&'static str]) -> &'static str
where
    S: RandomSource + ?Sized,
{
    let index = draw_below(source, items.len());
    items.get(index).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    const ITEMS: &[&str] = &["alpha", "beta", "gamma"];

    /// Always answers one past the requested range.
    struct OutOfRange;

    impl RandomSource for OutOfRange {
        fn below(&mut self, upper: usize) -> usize {
            upper
        }

        fn coin_flip(&mut self) -> bool {
            true
        }
    }

    #[test]
    fn below_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(rng.below(3) < 3);
        }
    }

    #[test]
    fn pick_reaches_every_item() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let item = pick(&mut rng, ITEMS);
            let position = ITEMS.iter().position(|candidate| *candidate == item);
            if let Some(slot) = position.and_then(|index| seen.get_mut(index)) {
                *slot = true;
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn coin_flip_produces_both_sides() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let flips: Vec<bool> = (0..100).map(|_| rng.coin_flip()).collect();
        assert!(flips.contains(&true));
        assert!(flips.contains(&false));
    }

    #[test]
    fn draw_below_clamps_out_of_range_values() {
        assert_eq!(draw_below(&mut OutOfRange, 10), 9);
        assert_eq!(draw_below(&mut OutOfRange, 0), 0);
    }

    #[test]
    fn pick_falls_back_to_the_last_item() {
        assert_eq!(pick(&mut OutOfRange, ITEMS), "gamma");
    }
}
