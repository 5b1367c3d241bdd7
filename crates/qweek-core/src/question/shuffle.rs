//! Unbiased shuffle.

use rand::Rng;

/// Returns a uniformly random permutation of `items`.
///
/// Fisher-Yates over a copy of the input; the input slice is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
