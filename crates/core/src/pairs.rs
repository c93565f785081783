//! Pair count bounds.

use crate::types::MIN_PAIR_COUNT;

/// Inclusive range of pair counts a theme can be dealt with.
///
/// For `n` symbols the range is `[MIN_PAIR_COUNT, n / 2]`. When a theme has
/// fewer than `2 * MIN_PAIR_COUNT` symbols the range is empty; the only
/// reachable pair count is then `max` and every adjustment is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairBounds {
    pub min: usize,
    pub max: usize,
}

impl PairBounds {
    pub fn for_symbol_count(symbols: usize) -> Self {
        Self {
            min: MIN_PAIR_COUNT,
            max: symbols / 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }

    pub fn contains(&self, pairs: usize) -> bool {
        pairs >= self.min && pairs <= self.max
    }

    /// Clamp a requested pair count into range.
    pub fn clamp(&self, pairs: usize) -> usize {
        if self.is_empty() {
            self.max
        } else {
            pairs.clamp(self.min, self.max)
        }
    }
}

impl Default for PairBounds {
    fn default() -> Self {
        Self::for_symbol_count(0)
    }
}
