//! # sortvis
//!
//! Swap-sequence generation and frame-by-frame playback for an animated
//! sorting visualizer.
//!
//! This crate provides platform-agnostic data structures and logic for:
//! - Holding a sequence of colored, ranked elements and shuffling it
//! - Computing the exact swap list bubble sort or insertion sort performs
//! - Playing that list back one swap per rendered frame
//! - Describing each frame as draw commands (with optional web support)
//!
//! ## Features
//!
//! - `term` (default) - Terminal frontend and the `sortvis` binary
//! - `serde` - Enable serialization/deserialization for the configuration
//! - `toml` - Parse configuration from TOML
//! - `web` - Enable web/WASM canvas rendering support
//!
//! ## Example
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use sortvis::{Algorithm, Orientation, RenderConfig, Sequence, SortPlayback};
//!
//! let mut sequence = Sequence::initialize(200);
//! let mut playback = SortPlayback::new();
//! let config = RenderConfig::default();
//!
//! playback.shuffle(&mut sequence, &mut StdRng::seed_from_u64(1));
//! playback.generate(Algorithm::Bubble, &sequence);
//!
//! // One swap per frame, highlighted while it happens.
//! while let Some(swap) = playback.tick(&mut sequence) {
//!     let frame = sortvis::render::render_bands(
//!         &sequence,
//!         Some(swap),
//!         Orientation::Vertical,
//!         playback.show_sorted_label(Some(swap)),
//!         &config,
//!     );
//!     assert_eq!(frame.bands.len(), 200);
//! }
//! assert!(sequence.is_sorted());
//! ```

mod animation;
pub mod app;
pub mod color;
mod config;
mod data;
mod error;
pub mod generator;
pub mod render;
mod sizing;
#[cfg(feature = "term")]
pub mod term;

pub use animation::{PlaybackState, SortPlayback};
pub use app::{App, Command, FrameRate};
pub use config::{
    Theme, VisualizerConfig, ARRAY_SIZE, TARGET_FPS, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};
pub use data::{Element, Sequence, Swap};
pub use error::{Result, VisualizerError};
pub use generator::Algorithm;
pub use render::{RenderConfig, RenderResult};
pub use sizing::{BandRect, BandSizing, Orientation};

#[cfg(feature = "web")]
pub use render::web::render_to_canvas;
