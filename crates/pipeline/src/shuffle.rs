//! Uniform random permutation of aggregated results.

use rand::Rng;

/// Fisher–Yates shuffle driven by an index chooser.
///
/// For `i` from the last index down to 1, swaps element `i` with element
/// `pick(i)`. `pick(i)` must return a value in `0..=i`; the permutation is
/// uniform exactly when it does so uniformly.
pub fn shuffle_by<T>(items: &mut [T], mut pick: impl FnMut(usize) -> usize) {
    for i in (1..items.len()).rev() {
        let j = pick(i);
        debug_assert!(j <= i, "pick({}) returned {}", i, j);
        items.swap(i, j);
    }
}

/// Fisher–Yates shuffle using `rng` for uniform index selection.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    shuffle_by(items, |i| rng.random_range(0..=i));
}
