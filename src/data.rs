//! Core data structures: elements, the live sequence and swap operations.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::{self, Rgb};
use crate::error::{Result, VisualizerError};

/// One sortable bar: its sort key and the color it carries around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element {
    /// Sort key, unique within a sequence, in `1..=len`
    pub rank: u32,
    /// Display color fixed at initialization; travels with the element
    pub color: Rgb,
}

/// An instruction to exchange the elements at two positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Swap {
    pub first: usize,
    pub second: usize,
}

impl Swap {
    /// Create a new swap of `first` and `second`.
    #[inline]
    pub const fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Check whether `index` takes part in this swap.
    #[inline]
    pub fn involves(&self, index: usize) -> bool {
        self.first == index || self.second == index
    }
}

impl From<(usize, usize)> for Swap {
    fn from((first, second): (usize, usize)) -> Self {
        Self::new(first, second)
    }
}

/// Fixed-size ordered collection of elements.
///
/// Always holds exactly one element of each rank in `1..=len`. The only
/// mutations are [`Sequence::permute`] and [`Sequence::shuffle`], both of
/// which preserve that invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    elements: Vec<Element>,
}

impl Sequence {
    /// Create `n` elements in sorted order colored blue to red.
    pub fn initialize(n: usize) -> Self {
        Self::with_gradient(n, color::BLUE, color::RED)
    }

    /// Create `n` elements in sorted order, colored by a linear gradient
    /// from `start` to `end` across the index range.
    ///
    /// ```rust
    /// use sortvis::Sequence;
    ///
    /// let seq = Sequence::with_gradient(4, (0, 0, 0), (200, 0, 0));
    /// assert_eq!(seq.ranks(), vec![1, 2, 3, 4]);
    /// assert_eq!(seq.elements()[2].color, (100, 0, 0));
    /// ```
    pub fn with_gradient(n: usize, start: Rgb, end: Rgb) -> Self {
        let elements = (0..n)
            .map(|i| Element {
                rank: i as u32 + 1,
                color: color::gradient(start, end, i, n),
            })
            .collect();
        Self { elements }
    }

    /// Build a sequence in a given rank order.
    ///
    /// Each element gets the color it would have had in sorted position, so
    /// sorting the result restores the initial gradient. Fails unless `ranks`
    /// is a permutation of `1..=ranks.len()`.
    pub fn from_ranks(ranks: &[u32]) -> Result<Self> {
        let len = ranks.len();
        let mut seen = vec![false; len];
        for &rank in ranks {
            let slot = (rank as usize).checked_sub(1).filter(|&s| s < len);
            match slot {
                Some(s) if !seen[s] => seen[s] = true,
                _ => return Err(VisualizerError::InvalidPermutation { len, rank }),
            }
        }

        let sorted = Self::initialize(len);
        let elements = ranks
            .iter()
            .map(|&rank| sorted.elements[rank as usize - 1])
            .collect();
        Ok(Self { elements })
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in their current order.
    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Ranks in their current order.
    pub fn ranks(&self) -> Vec<u32> {
        self.elements.iter().map(|e| e.rank).collect()
    }

    /// Check if ranks are in ascending order.
    pub fn is_sorted(&self) -> bool {
        self.elements.windows(2).all(|w| w[0].rank <= w[1].rank)
    }

    /// Exchange the elements at positions `i` and `j`.
    ///
    /// Both indices must be in range; the state machine never produces
    /// anything else. Release builds ignore an out-of-range request.
    pub fn permute(&mut self, i: usize, j: usize) {
        let len = self.len();
        debug_assert!(i < len && j < len, "swap ({i}, {j}) out of range for {len} elements");
        if i >= len || j >= len {
            tracing::warn!(i, j, len, "ignoring out-of-range swap");
            return;
        }
        self.elements.swap(i, j);
    }

    /// Replay a list of swaps in order.
    pub fn apply(&mut self, swaps: &[Swap]) {
        for swap in swaps {
            self.permute(swap.first, swap.second);
        }
    }

    /// Rearrange into a uniformly random permutation (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.elements.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initialize() {
        let seq = Sequence::initialize(200);
        assert_eq!(seq.len(), 200);
        assert!(seq.is_sorted());
        assert_eq!(seq.elements()[0], Element { rank: 1, color: (0, 0, 255) });
        assert_eq!(seq.elements()[100].color, (127, 0, 128));
    }

    #[test]
    fn test_permute_moves_color_with_rank() {
        let mut seq = Sequence::initialize(3);
        let first = seq.elements()[0];
        let last = seq.elements()[2];

        seq.permute(0, 2);
        assert_eq!(seq.ranks(), vec![3, 2, 1]);
        assert_eq!(seq.elements()[0], last);
        assert_eq!(seq.elements()[2], first);

        seq.permute(1, 1);
        assert_eq!(seq.ranks(), vec![3, 2, 1]);
    }

    #[test]
    fn test_shuffle_keeps_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seq = Sequence::initialize(50);
        seq.shuffle(&mut rng);

        let mut ranks = seq.ranks();
        assert_ne!(ranks, (1..=50).collect::<Vec<_>>());
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let mut a = Sequence::initialize(30);
        let mut b = Sequence::initialize(30);
        a.shuffle(&mut StdRng::seed_from_u64(42));
        b.shuffle(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_ranks() {
        let seq = Sequence::from_ranks(&[3, 1, 4, 2]).unwrap();
        assert_eq!(seq.ranks(), vec![3, 1, 4, 2]);
        assert_eq!(seq.elements()[1], Sequence::initialize(4).elements()[0]);
    }

    #[test]
    fn test_from_ranks_rejects_non_permutations() {
        assert!(matches!(
            Sequence::from_ranks(&[1, 1, 2]),
            Err(VisualizerError::InvalidPermutation { len: 3, rank: 1 })
        ));
        assert!(matches!(
            Sequence::from_ranks(&[0, 1]),
            Err(VisualizerError::InvalidPermutation { rank: 0, .. })
        ));
        assert!(matches!(
            Sequence::from_ranks(&[1, 5]),
            Err(VisualizerError::InvalidPermutation { rank: 5, .. })
        ));
        assert!(Sequence::from_ranks(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_apply() {
        let mut seq = Sequence::from_ranks(&[3, 1, 4, 2]).unwrap();
        seq.apply(&[Swap::new(0, 1), Swap::new(2, 3), Swap::new(1, 2)]);
        assert_eq!(seq.ranks(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_swap_involves() {
        let swap = Swap::from((4, 5));
        assert!(swap.involves(4));
        assert!(swap.involves(5));
        assert!(!swap.involves(3));
    }
}
