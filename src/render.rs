//! Rendering logic for band displays.

use crate::color::Rgb;
use crate::config::{Theme, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::data::{Sequence, Swap};
use crate::sizing::{BandRect, BandSizing, Orientation};

/// Text of the indicator drawn once playback has finished.
pub const SORTED_LABEL: &str = "SORTED!";

/// Configuration for rendering a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Colors for background, highlight and label
    pub theme: Theme,
}

impl RenderConfig {
    /// Create a render config for a surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            theme: Theme::default(),
        }
    }

    /// Band sizing for `count` bands on this surface.
    #[inline]
    pub fn sizing(&self, count: usize) -> BandSizing {
        BandSizing::new(self.width, self.height, count)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}

/// Result of a render operation containing draw commands.
///
/// A platform-agnostic description of one frame: clear to `background`,
/// fill every band, then draw the optional label on top.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderResult {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Clear color
    pub background: Rgb,
    /// Filled rectangles, in sequence order
    pub bands: Vec<BandCommand>,
    /// Text drawn over the bands
    pub label: Option<TextCommand>,
}

/// A filled rectangle for one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandCommand {
    pub rect: BandRect,
    pub color: Rgb,
}

/// Text anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct TextCommand {
    pub text: String,
    pub x: u32,
    pub y: u32,
    /// Font size in pixels
    pub size: u32,
    pub color: Rgb,
}

/// Generate render commands for a sequence.
///
/// Elements taking part in `current` are drawn in the highlight color.
/// The sorted label is added when `show_label` is set.
///
/// ## Example
///
/// ```rust
/// use sortvis::{render::render_bands, Orientation, RenderConfig, Sequence, Swap};
///
/// let seq = Sequence::from_ranks(&[2, 1, 3]).unwrap();
/// let config = RenderConfig::new(300, 300);
/// let result = render_bands(&seq, Some(Swap::new(0, 1)), Orientation::Vertical, false, &config);
///
/// assert_eq!(result.bands.len(), 3);
/// assert_eq!(result.bands[0].color, config.theme.highlight);
/// assert_eq!(result.bands[1].color, config.theme.highlight);
/// assert!(result.label.is_none());
/// ```
pub fn render_bands(
    sequence: &Sequence,
    current: Option<Swap>,
    orientation: Orientation,
    show_label: bool,
    config: &RenderConfig,
) -> RenderResult {
    let sizing = config.sizing(sequence.len());
    let highlighted = |index: usize| current.is_some_and(|swap| swap.involves(index));

    let bands = sequence
        .elements()
        .iter()
        .enumerate()
        .map(|(index, element)| BandCommand {
            rect: sizing.band(orientation, index, element.rank),
            color: if highlighted(index) {
                config.theme.highlight
            } else {
                element.color
            },
        })
        .collect();

    let label = show_label.then(|| TextCommand {
        text: SORTED_LABEL.to_string(),
        x: 20,
        y: 20,
        size: 50,
        color: config.theme.label,
    });

    RenderResult {
        width: config.width,
        height: config.height,
        background: config.theme.background,
        bands,
        label,
    }
}

impl RenderResult {
    /// Rasterize the band commands onto a `cols` x `rows` pixel grid.
    ///
    /// Each rectangle is scaled to the grid and covers at least one pixel in
    /// each direction, so narrow bands survive downscaling. Later bands
    /// overwrite earlier ones where they collide. Labels are not rasterized;
    /// cell-based backends draw them as text.
    ///
    /// Returns `cols * rows` colors in row-major order.
    pub fn rasterize(&self, cols: usize, rows: usize) -> Vec<Rgb> {
        let mut pixels = vec![self.background; cols * rows];
        if self.width == 0 || self.height == 0 {
            return pixels;
        }

        let scale = |value: u32, extent: u32, cells: usize| -> usize {
            (value as u64 * cells as u64 / extent as u64) as usize
        };
        let scale_up = |value: u32, extent: u32, cells: usize| -> usize {
            (value as u64 * cells as u64).div_ceil(extent as u64) as usize
        };

        for band in self.bands.iter().filter(|b| !b.rect.is_empty()) {
            let rect = band.rect;
            let x0 = scale(rect.x, self.width, cols).min(cols);
            let y0 = scale(rect.y, self.height, rows).min(rows);
            let x1 = scale_up(rect.x + rect.width, self.width, cols).max(x0 + 1).min(cols);
            let y1 = scale_up(rect.y + rect.height, self.height, rows).max(y0 + 1).min(rows);

            for y in y0..y1 {
                pixels[y * cols + x0..y * cols + x1].fill(band.color);
            }
        }

        pixels
    }

    /// Label position scaled to a `cols` x `rows` grid.
    pub fn label_cell(&self, cols: usize, rows: usize) -> Option<(usize, usize)> {
        let label = self.label.as_ref()?;
        if self.width == 0 || self.height == 0 {
            return Some((0, 0));
        }
        let col = label.x as usize * cols / self.width as usize;
        let row = label.y as usize * rows / self.height as usize;
        Some((col, row))
    }
}

/// Web-specific rendering implementation.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use crate::app::Command;
    use crate::color::css;
    use crate::error::{Result, VisualizerError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    /// Render a frame directly to an HTML canvas.
    ///
    /// The canvas is resized to the frame's surface before drawing.
    ///
    /// ## Example
    ///
    /// ```rust,ignore
    /// use sortvis::render::web::render_to_canvas;
    ///
    /// let canvas: web_sys::HtmlCanvasElement = // ... get canvas element
    /// let result = app.frame(elapsed);
    /// render_to_canvas(&result, &canvas)?;
    /// ```
    pub fn render_to_canvas(result: &RenderResult, canvas: &HtmlCanvasElement) -> Result<()> {
        canvas.set_width(result.width);
        canvas.set_height(result.height);

        let ctx = canvas
            .get_context("2d")
            .map_err(|_| canvas_error("Failed to get 2d context"))?
            .ok_or_else(|| canvas_error("No 2d context available"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| canvas_error("Failed to cast to CanvasRenderingContext2d"))?;

        ctx.set_fill_style_str(&css(result.background));
        ctx.fill_rect(0.0, 0.0, result.width as f64, result.height as f64);

        for band in result.bands.iter().filter(|b| !b.rect.is_empty()) {
            let rect = band.rect;
            ctx.set_fill_style_str(&css(band.color));
            ctx.fill_rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
        }

        if let Some(label) = &result.label {
            ctx.set_font(&format!("{}px sans-serif", label.size));
            ctx.set_text_baseline("top");
            ctx.set_fill_style_str(&css(label.color));
            ctx.fill_text(&label.text, label.x as f64, label.y as f64)
                .map_err(|_| canvas_error("Failed to fill text"))?;
        }

        Ok(())
    }

    /// Map a `KeyboardEvent.key` value to a command.
    pub fn command_for_key(key: &str) -> Option<Command> {
        match key {
            "Escape" => Some(Command::Quit),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Command::from_key(c),
                    _ => None,
                }
            }
        }
    }

    /// Refresh the page title, the browser counterpart of a window title.
    pub fn set_document_title(title: &str) -> Result<()> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| canvas_error("No document available"))?;
        document.set_title(title);
        Ok(())
    }

    /// RNG for shuffling, seeded from `Math.random`.
    pub fn browser_rng() -> StdRng {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        StdRng::seed_from_u64(seed)
    }

    fn canvas_error(message: &str) -> VisualizerError {
        VisualizerError::Canvas(message.to_string())
    }
}
