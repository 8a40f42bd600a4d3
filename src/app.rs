//! Application state driven by a frontend's frame loop.

use std::time::Duration;

use rand::rngs::StdRng;

use crate::animation::{PlaybackState, SortPlayback};
use crate::config::{VisualizerConfig, ARRAY_SIZE};
use crate::data::{Sequence, Swap};
use crate::generator::Algorithm;
use crate::render::{render_bands, RenderConfig, RenderResult};
use crate::sizing::Orientation;

/// User intent decoded from a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleOrientation,
    Shuffle,
    Run(Algorithm),
    Quit,
}

impl Command {
    /// Map a pressed character to a command.
    ///
    /// ```rust
    /// use sortvis::{Algorithm, Command};
    ///
    /// assert_eq!(Command::from_key(' '), Some(Command::ToggleOrientation));
    /// assert_eq!(Command::from_key('0'), Some(Command::Shuffle));
    /// assert_eq!(Command::from_key('2'), Some(Command::Run(Algorithm::Insertion)));
    /// assert_eq!(Command::from_key('x'), None);
    /// ```
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            ' ' => Some(Command::ToggleOrientation),
            '0' => Some(Command::Shuffle),
            '1' => Some(Command::Run(Algorithm::Bubble)),
            '2' => Some(Command::Run(Algorithm::Insertion)),
            'q' | 'Q' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Frames-per-second meter averaged over roughly one second.
#[derive(Clone, Debug, Default)]
pub struct FrameRate {
    frames: u32,
    window: Duration,
    fps: u32,
}

impl FrameRate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame that took `elapsed`.
    pub fn record(&mut self, elapsed: Duration) {
        self.frames += 1;
        self.window += elapsed;
        if self.window >= Duration::from_secs(1) {
            self.fps = (self.frames as f64 / self.window.as_secs_f64()).round() as u32;
            self.frames = 0;
            self.window = Duration::ZERO;
        }
    }

    /// Most recent completed measurement; zero until a full second has passed.
    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Everything the frame loop mutates, bundled in one place.
#[derive(Debug)]
pub struct App {
    sequence: Sequence,
    playback: SortPlayback,
    orientation: Orientation,
    render: RenderConfig,
    title: String,
    rng: StdRng,
    frame_rate: FrameRate,
}

impl App {
    /// Create the initial, sorted state with `ARRAY_SIZE` elements.
    pub fn new(config: &VisualizerConfig, rng: StdRng) -> Self {
        Self::with_size(config, ARRAY_SIZE, rng)
    }

    /// Create the initial state with `n` elements.
    pub fn with_size(config: &VisualizerConfig, n: usize, rng: StdRng) -> Self {
        let theme = config.theme();
        let (width, height) = config.surface_size();
        Self {
            sequence: Sequence::with_gradient(n, theme.gradient_start, theme.gradient_end),
            playback: SortPlayback::new(),
            orientation: Orientation::default(),
            render: RenderConfig { width, height, theme },
            title: config.title().to_string(),
            rng,
            frame_rate: FrameRate::new(),
        }
    }

    /// Apply a command. Returns `false` once the loop should end.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::ToggleOrientation => self.orientation = self.orientation.toggle(),
            Command::Shuffle => self.playback.shuffle(&mut self.sequence, &mut self.rng),
            Command::Run(algorithm) => {
                self.playback.generate(algorithm, &self.sequence);
            }
            Command::Quit => return false,
        }
        true
    }

    /// Advance one frame: play at most one swap and describe the redraw.
    pub fn frame(&mut self, elapsed: Duration) -> RenderResult {
        self.frame_rate.record(elapsed);
        let current = self.playback.tick(&mut self.sequence);
        self.draw(current)
    }

    /// Describe the current state without advancing playback.
    pub fn draw(&self, current: Option<Swap>) -> RenderResult {
        render_bands(
            &self.sequence,
            current,
            self.orientation,
            self.playback.show_sorted_label(current),
            &self.render,
        )
    }

    /// Window title with the live frame rate.
    pub fn title(&self) -> String {
        format!("{}, fps: {}", self.title, self.frame_rate.fps())
    }

    #[inline]
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    #[inline]
    pub fn playback(&self) -> &SortPlayback {
        &self.playback
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn render_config(&self) -> &RenderConfig {
        &self.render
    }
}
