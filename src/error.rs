//! Error type shared by the visualizer core and its frontends.

use thiserror::Error;

/// Errors surfaced by the visualizer.
///
/// Ordinary playback never fails: an ignored `generate` request is reported
/// through its return value, and out-of-range swaps are a debug assertion.
#[derive(Debug, Error)]
pub enum VisualizerError {
    /// Terminal setup, drawing or input polling failed
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Ranks passed to `Sequence::from_ranks` are not a permutation of `1..=len`
    #[error("ranks are not a permutation of 1..={len}: offending rank {rank}")]
    InvalidPermutation { len: usize, rank: u32 },

    /// A configuration document could not be parsed
    #[cfg(feature = "toml")]
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The browser canvas could not be drawn to
    #[cfg(feature = "web")]
    #[error("canvas error: {0}")]
    Canvas(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VisualizerError>;
