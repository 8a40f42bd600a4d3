//! Window and theme configuration.

use crate::color::{self, parse_color, Rgb};

/// Number of elements in the visualized sequence.
pub const ARRAY_SIZE: usize = 200;
/// Default drawing surface width in pixels.
pub const WINDOW_WIDTH: u32 = 800;
/// Default drawing surface height in pixels.
pub const WINDOW_HEIGHT: u32 = 800;
/// Frame rate the frontends aim for; one swap is played per frame.
pub const TARGET_FPS: u32 = 1000;
/// Default window title; the live frame rate is appended every frame.
pub const WINDOW_TITLE: &str = "Sorting Algorithm Visualizer";

/// Visualizer settings.
///
/// All fields are optional and fall back to the built-in defaults. Sequence
/// size and playback speed are fixed at compile time and deliberately absent.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisualizerConfig {
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub background_color: Option<String>,
    pub highlight_color: Option<String>,
    pub label_color: Option<String>,
    pub gradient_start: Option<String>,
    pub gradient_end: Option<String>,
}

/// Resolved colors used for drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub highlight: Rgb,
    pub label: Rgb,
    pub gradient_start: Rgb,
    pub gradient_end: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: color::BLACK,
            highlight: color::YELLOW,
            label: color::YELLOW,
            gradient_start: color::BLUE,
            gradient_end: color::RED,
        }
    }
}

impl VisualizerConfig {
    /// Parse a TOML document.
    ///
    /// ```rust
    /// use sortvis::VisualizerConfig;
    ///
    /// let config = VisualizerConfig::from_toml_str("highlight_color = \"lime\"").unwrap();
    /// assert_eq!(config.theme().highlight, (0, 255, 0));
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> crate::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Window title, without the frame-rate suffix.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(WINDOW_TITLE)
    }

    /// Surface size in pixels; zero sizes fall back to the defaults.
    pub fn surface_size(&self) -> (u32, u32) {
        let width = self.width.filter(|&w| w > 0).unwrap_or(WINDOW_WIDTH);
        let height = self.height.filter(|&h| h > 0).unwrap_or(WINDOW_HEIGHT);
        (width, height)
    }

    /// Resolve color strings, keeping the default for missing or invalid ones.
    pub fn theme(&self) -> Theme {
        let defaults = Theme::default();
        let pick = |value: &Option<String>, fallback: Rgb| {
            value.as_deref().and_then(parse_color).unwrap_or(fallback)
        };
        Theme {
            background: pick(&self.background_color, defaults.background),
            highlight: pick(&self.highlight_color, defaults.highlight),
            label: pick(&self.label_color, defaults.label),
            gradient_start: pick(&self.gradient_start, defaults.gradient_start),
            gradient_end: pick(&self.gradient_end, defaults.gradient_end),
        }
    }
}
