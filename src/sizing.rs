//! Band geometry for drawing a sequence on a fixed-size surface.

/// Layout of the bands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Columns growing up from the bottom edge
    #[default]
    Vertical,
    /// Rows centered horizontally
    Horizontal,
}

impl Orientation {
    /// The other orientation.
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BandRect {
    /// Check if the rectangle covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Band sizing for `count` bands on a `width` x `height` surface.
///
/// Band thickness is the integer share of the surface per band, with a
/// one-pixel gap between neighbours. Band length is proportional to rank,
/// so rank `count` spans the whole surface.
///
/// ```rust
/// use sortvis::{BandSizing, Orientation};
///
/// let sizing = BandSizing::new(800, 800, 200);
/// let rect = sizing.band(Orientation::Vertical, 0, 200);
/// assert_eq!((rect.x, rect.y, rect.width, rect.height), (1, 0, 3, 800));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandSizing {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Number of bands
    pub count: usize,
}

impl BandSizing {
    pub fn new(width: u32, height: u32, count: usize) -> Self {
        Self { width, height, count }
    }

    /// Rectangle for the band at `index` holding `rank`.
    pub fn band(&self, orientation: Orientation, index: usize, rank: u32) -> BandRect {
        match orientation {
            Orientation::Vertical => self.vertical_band(index, rank),
            Orientation::Horizontal => self.horizontal_band(index, rank),
        }
    }

    /// Column anchored to the bottom edge.
    pub fn vertical_band(&self, index: usize, rank: u32) -> BandRect {
        let band_width = self.thickness(self.width);
        let band_height = self.length(rank, self.height);
        BandRect {
            x: index as u32 * band_width + 1,
            y: self.height - band_height,
            width: band_width.saturating_sub(1),
            height: band_height,
        }
    }

    /// Row centered on the vertical axis.
    pub fn horizontal_band(&self, index: usize, rank: u32) -> BandRect {
        let band_height = self.thickness(self.height);
        let band_width = self.length(rank, self.width);
        BandRect {
            x: (self.width - band_width) / 2,
            y: index as u32 * band_height + 1,
            width: band_width,
            height: band_height.saturating_sub(1),
        }
    }

    #[inline]
    fn thickness(&self, extent: u32) -> u32 {
        if self.count == 0 {
            return 0;
        }
        extent / self.count as u32
    }

    #[inline]
    fn length(&self, rank: u32, extent: u32) -> u32 {
        if self.count == 0 {
            return 0;
        }
        let ratio = extent as f32 / self.count as f32;
        ((rank as f32 * ratio) as u32).min(extent)
    }
}
