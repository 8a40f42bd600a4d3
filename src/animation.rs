//! Playback of a generated swap sequence, one swap per frame.

use std::collections::VecDeque;

use rand::Rng;

use crate::data::{Sequence, Swap};
use crate::generator::Algorithm;

/// Current state of playback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing shuffled yet; the sequence is in its initial sorted order
    #[default]
    Idle,
    /// Sequence is randomized and waiting for an algorithm
    Shuffled,
    /// Draining the swap queue, one swap per tick
    Playing,
    /// Queue drained after a run
    Sorted,
}

/// Platform-agnostic playback controller.
///
/// Holds the queue of pending swaps but not the sequence itself; the caller
/// owns the live [`Sequence`] and passes it in. Timing is the caller's job:
/// call [`SortPlayback::tick`] once per rendered frame.
///
/// ## Example
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use sortvis::{Algorithm, PlaybackState, Sequence, SortPlayback};
///
/// let mut seq = Sequence::initialize(20);
/// let mut playback = SortPlayback::new();
///
/// playback.shuffle(&mut seq, &mut StdRng::seed_from_u64(3));
/// assert_eq!(playback.state(), PlaybackState::Shuffled);
///
/// assert!(playback.generate(Algorithm::Insertion, &seq));
/// while playback.tick(&mut seq).is_some() {}
///
/// assert!(seq.is_sorted());
/// assert_eq!(playback.state(), PlaybackState::Sorted);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SortPlayback {
    /// Swaps not yet applied
    queue: VecDeque<Swap>,
    /// Current playback state
    state: PlaybackState,
    /// Algorithm of the most recently accepted run
    algorithm: Option<Algorithm>,
}

impl SortPlayback {
    /// Create an idle controller with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shuffle `sequence`, abandoning any run in progress.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, sequence: &mut Sequence, rng: &mut R) {
        if !self.queue.is_empty() {
            tracing::debug!(abandoned = self.queue.len(), "shuffle interrupted playback");
        }
        self.queue.clear();
        sequence.shuffle(rng);
        self.state = PlaybackState::Shuffled;
        tracing::debug!(len = sequence.len(), "sequence shuffled");
    }

    /// Load the swap list for `algorithm` against `sequence`.
    ///
    /// Only accepted right after a shuffle; otherwise nothing changes and
    /// `false` is returned. An already-sorted sequence goes straight to
    /// [`PlaybackState::Sorted`].
    pub fn generate(&mut self, algorithm: Algorithm, sequence: &Sequence) -> bool {
        if self.state != PlaybackState::Shuffled {
            tracing::debug!(%algorithm, state = ?self.state, "ignoring run request");
            return false;
        }

        self.queue = algorithm.generate(sequence).into();
        self.algorithm = Some(algorithm);
        self.state = if self.queue.is_empty() {
            PlaybackState::Sorted
        } else {
            PlaybackState::Playing
        };
        tracing::info!(%algorithm, swaps = self.queue.len(), "swap sequence loaded");
        true
    }

    /// Apply the next pending swap to `sequence`.
    ///
    /// Returns the swap that was applied so it can be highlighted, or `None`
    /// when nothing is playing.
    pub fn tick(&mut self, sequence: &mut Sequence) -> Option<Swap> {
        if self.state != PlaybackState::Playing {
            return None;
        }

        let swap = self.queue.pop_front()?;
        sequence.permute(swap.first, swap.second);

        if self.queue.is_empty() {
            self.state = PlaybackState::Sorted;
            tracing::debug!(algorithm = ?self.algorithm, "playback finished");
        }
        Some(swap)
    }

    /// Whether the "sorted" indicator should be drawn this frame.
    ///
    /// `current` is the swap returned by this frame's [`SortPlayback::tick`].
    #[inline]
    pub fn show_sorted_label(&self, current: Option<Swap>) -> bool {
        current.is_none() && self.state != PlaybackState::Shuffled
    }

    /// Get the current playback state.
    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if swaps are being played.
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Number of swaps still queued.
    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Algorithm of the most recently accepted run.
    #[inline]
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// Drop any queued swaps and return to idle.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.state = PlaybackState::Idle;
        self.algorithm = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn shuffled(n: usize, seed: u64) -> (Sequence, SortPlayback) {
        let mut seq = Sequence::initialize(n);
        let mut playback = SortPlayback::new();
        playback.shuffle(&mut seq, &mut StdRng::seed_from_u64(seed));
        (seq, playback)
    }

    #[test]
    fn test_initial_state() {
        let playback = SortPlayback::new();
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert_eq!(playback.pending(), 0);
        assert!(playback.show_sorted_label(None));
    }

    #[test]
    fn test_generate_requires_shuffle() {
        let mut seq = Sequence::initialize(10);
        let mut playback = SortPlayback::new();

        assert!(!playback.generate(Algorithm::Bubble, &seq));
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert_eq!(playback.tick(&mut seq), None);
        assert_eq!(playback.algorithm(), None);
    }

    #[test]
    fn test_full_run() {
        let (mut seq, mut playback) = shuffled(40, 11);
        assert!(!playback.show_sorted_label(None));

        assert!(playback.generate(Algorithm::Bubble, &seq));
        assert_eq!(playback.state(), PlaybackState::Playing);
        let total = playback.pending();
        assert!(total > 0);

        let mut ticks = 0;
        while let Some(swap) = playback.tick(&mut seq) {
            ticks += 1;
            assert!(!playback.show_sorted_label(Some(swap)));
        }
        assert_eq!(ticks, total);
        assert!(seq.is_sorted());
        assert_eq!(playback.state(), PlaybackState::Sorted);
        assert!(playback.show_sorted_label(None));
        assert_eq!(playback.algorithm(), Some(Algorithm::Bubble));
    }

    #[test]
    fn test_last_swap_switches_to_sorted() {
        let mut seq = Sequence::from_ranks(&[2, 1]).unwrap();
        let mut playback = SortPlayback::new();
        playback.state = PlaybackState::Shuffled;

        assert!(playback.generate(Algorithm::Insertion, &seq));
        assert_eq!(playback.tick(&mut seq), Some(Swap::new(1, 0)));
        assert_eq!(playback.state(), PlaybackState::Sorted);
        assert_eq!(playback.tick(&mut seq), None);
    }

    #[test]
    fn test_generate_ignored_while_playing() {
        let (mut seq, mut playback) = shuffled(30, 5);
        playback.generate(Algorithm::Insertion, &seq);
        playback.tick(&mut seq);

        let seq_before = seq.clone();
        let pending_before = playback.pending();
        assert!(!playback.generate(Algorithm::Bubble, &seq));
        assert_eq!(seq, seq_before);
        assert_eq!(playback.pending(), pending_before);
        assert_eq!(playback.algorithm(), Some(Algorithm::Insertion));
    }

    #[test]
    fn test_generate_ignored_when_sorted() {
        let (mut seq, mut playback) = shuffled(8, 9);
        playback.generate(Algorithm::Bubble, &seq);
        while playback.tick(&mut seq).is_some() {}

        assert!(!playback.generate(Algorithm::Insertion, &seq));
        assert_eq!(playback.state(), PlaybackState::Sorted);
        assert_eq!(playback.pending(), 0);
    }

    #[test]
    fn test_shuffle_abandons_playback() {
        let (mut seq, mut playback) = shuffled(30, 1);
        playback.generate(Algorithm::Bubble, &seq);
        playback.tick(&mut seq);

        playback.shuffle(&mut seq, &mut StdRng::seed_from_u64(2));
        assert_eq!(playback.state(), PlaybackState::Shuffled);
        assert_eq!(playback.pending(), 0);
        assert_eq!(playback.tick(&mut seq), None);
    }

    #[test]
    fn test_sorted_shuffle_goes_straight_to_sorted() {
        // A single element is sorted whatever the shuffle does.
        let (seq, mut playback) = shuffled(1, 0);
        assert!(playback.generate(Algorithm::Bubble, &seq));
        assert_eq!(playback.state(), PlaybackState::Sorted);
        assert_eq!(playback.pending(), 0);
    }

    #[test]
    fn test_reset() {
        let (seq, mut playback) = shuffled(10, 4);
        playback.generate(Algorithm::Insertion, &seq);
        playback.reset();
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert_eq!(playback.pending(), 0);
        assert_eq!(playback.algorithm(), None);
    }
}
