//! RandomSource port - Uniform integer draws for the randomized decisions.
//!
//! The instrument makes exactly three kinds of random decisions: which list
//! is paid, which row within that list is paid, and (under uncertain roles)
//! whose decision is binding. Presentation counterbalancing and shuffling use
//! the same port. Injecting the source keeps every computation deterministic
//! under test.

/// Port for uniform integer draws.
pub trait RandomSource {
    /// Draws uniformly from the inclusive range `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize;

    /// Draws a fair coin: `true` with probability 1/2.
    fn coin_flip(&mut self) -> bool {
        self.uniform_inclusive(0, 1) == 1
    }

    /// Returns a uniformly random permutation of `0..len` (Fisher-Yates).
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        for i in (1..len).rev() {
            let j = self.uniform_inclusive(0, i);
            order.swap(i, j);
        }
        order
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize {
        (**self).uniform_inclusive(low, high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize {
        (**self).uniform_inclusive(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always returns the lower bound.
    struct Lowest;

    impl RandomSource for Lowest {
        fn uniform_inclusive(&mut self, low: usize, _high: usize) -> usize {
            low
        }
    }

    #[test]
    fn coin_flip_maps_one_to_true() {
        assert!(!Lowest.coin_flip());
    }

    #[test]
    fn permutation_contains_every_index_once() {
        let mut order = Lowest.permutation(5);
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn permutation_of_empty_is_empty() {
        assert!(Lowest.permutation(0).is_empty());
    }

    #[test]
    fn boxed_source_delegates() {
        let mut boxed: Box<dyn RandomSource> = Box::new(Lowest);
        assert_eq!(boxed.uniform_inclusive(3, 7), 3);
    }
}
