//! Scripted random source for tests and replays of recorded sessions.

use crate::ports::RandomSource;

/// Returns pre-recorded values in order, cycling when exhausted.
///
/// Each value is clamped into the requested range. An empty script always
/// yields the lower bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandomSource {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandomSource {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of draws served so far.
    pub fn draws_made(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandomSource {
    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize {
        let value = if self.values.is_empty() {
            low
        } else {
            self.values[self.cursor % self.values.len()]
        };
        self.cursor += 1;
        value.clamp(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_values_in_order_and_cycles() {
        let mut rng = ScriptedRandomSource::new(vec![1, 2]);
        assert_eq!(rng.uniform_inclusive(0, 5), 1);
        assert_eq!(rng.uniform_inclusive(0, 5), 2);
        assert_eq!(rng.uniform_inclusive(0, 5), 1);
        assert_eq!(rng.draws_made(), 3);
    }

    #[test]
    fn clamps_into_requested_range() {
        let mut rng = ScriptedRandomSource::new(vec![9, 0]);
        assert_eq!(rng.uniform_inclusive(1, 3), 3);
        assert_eq!(rng.uniform_inclusive(1, 3), 1);
    }

    #[test]
    fn empty_script_yields_lower_bound() {
        let mut rng = ScriptedRandomSource::default();
        assert_eq!(rng.uniform_inclusive(2, 8), 2);
    }
}
