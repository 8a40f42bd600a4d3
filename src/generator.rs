//! Swap-sequence generators.
//!
//! Each generator sorts a private copy of the snapshot it is given and
//! records every exchange it performs. Replaying the recorded swaps in order
//! against the original snapshot yields ascending rank order.

use crate::data::{Sequence, Swap};

/// Sorting algorithm to animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Adjacent-swap bubble sort, always running every pass
    Bubble,
    /// Insertion sort by repeated adjacent swaps
    Insertion,
}

impl Algorithm {
    /// All available algorithms.
    pub const ALL: [Algorithm; 2] = [Algorithm::Bubble, Algorithm::Insertion];

    /// Compute the full swap list for `snapshot`.
    pub fn generate(self, snapshot: &Sequence) -> Vec<Swap> {
        match self {
            Algorithm::Bubble => bubble_sort_swaps(snapshot),
            Algorithm::Insertion => insertion_sort_swaps(snapshot),
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble sort",
            Algorithm::Insertion => "insertion sort",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Swaps performed by bubble sort on `snapshot`.
///
/// The outer pass shrinks from the end; there is no early exit when a pass
/// makes no swaps.
///
/// ```rust
/// use sortvis::{generator::bubble_sort_swaps, Sequence, Swap};
///
/// let seq = Sequence::from_ranks(&[3, 1, 4, 2]).unwrap();
/// assert_eq!(
///     bubble_sort_swaps(&seq),
///     vec![Swap::new(0, 1), Swap::new(2, 3), Swap::new(1, 2)],
/// );
/// ```
pub fn bubble_sort_swaps(snapshot: &Sequence) -> Vec<Swap> {
    let mut ranks = snapshot.ranks();
    let mut swaps = Vec::new();

    for i in (0..ranks.len()).rev() {
        for j in 0..i {
            if ranks[j] > ranks[j + 1] {
                ranks.swap(j, j + 1);
                swaps.push(Swap::new(j, j + 1));
            }
        }
    }

    swaps
}

/// Swaps performed by insertion sort on `snapshot`.
///
/// Each element walks left one adjacent swap at a time and stops as soon as
/// its left neighbour is not larger.
///
/// ```rust
/// use sortvis::{generator::insertion_sort_swaps, Sequence, Swap};
///
/// let seq = Sequence::from_ranks(&[3, 1, 4, 2]).unwrap();
/// assert_eq!(
///     insertion_sort_swaps(&seq),
///     vec![Swap::new(1, 0), Swap::new(3, 2), Swap::new(2, 1)],
/// );
/// ```
pub fn insertion_sort_swaps(snapshot: &Sequence) -> Vec<Swap> {
    let mut ranks = snapshot.ranks();
    let mut swaps = Vec::new();

    for i in 0..ranks.len() {
        for j in (1..=i).rev() {
            if ranks[j - 1] <= ranks[j] {
                break;
            }
            ranks.swap(j, j - 1);
            swaps.push(Swap::new(j, j - 1));
        }
    }

    swaps
}
