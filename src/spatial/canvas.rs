//! Fixed-size pixel grid that ants paint their trails onto
//!
//! Every cell that no ant has painted equals the canvas background exactly;
//! collision tests rely on this, so writes never blend.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// RGBA color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl PixelColor {
    /// Opaque white
    pub const WHITE: Self = Self::from_array([255, 255, 255, 255]);
    /// Opaque black
    pub const BLACK: Self = Self::from_array([0, 0, 0, 255]);

    /// Build a color from `[r, g, b, a]`
    pub const fn from_array(rgba: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba;
        Self { r, g, b, a }
    }

    /// Channels as `[r, g, b, a]`
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Pixel grid with a designated background color
///
/// Cells are stored row-major (indexed `[y, x]`) so the raw buffer can be
/// handed directly to image and render sinks.
#[derive(Debug, Clone)]
pub struct Canvas {
    cells: Array2<[u8; 4]>,
    background: PixelColor,
}

impl Canvas {
    /// Create a canvas with every cell set to `background`
    pub fn new(width: usize, height: usize, background: PixelColor) -> Self {
        Self {
            cells: Array2::from_elem((height, width), background.to_array()),
            background,
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Color that marks unpainted cells
    pub const fn background(&self) -> PixelColor {
        self.background
    }

    /// Check whether `(x, y)` lies on the canvas
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Color at `(x, y)`, or `None` off the canvas
    pub fn get(&self, x: i32, y: i32) -> Option<PixelColor> {
        self.index(x, y)
            .and_then(|index| self.cells.get(index))
            .copied()
            .map(PixelColor::from_array)
    }

    /// Check whether `(x, y)` is on the canvas and still unpainted
    pub fn is_background(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(self.background)
    }

    /// Overwrite the cell at `(x, y)`
    ///
    /// Returns `false` and leaves the canvas untouched when the position is
    /// off the canvas.
    pub fn write(&mut self, x: i32, y: i32, color: PixelColor) -> bool {
        match self.index(x, y).and_then(|index| self.cells.get_mut(index)) {
            Some(cell) => {
                *cell = color.to_array();
                true
            }
            None => false,
        }
    }

    /// Set every cell to `color`
    pub fn fill(&mut self, color: PixelColor) {
        self.cells.fill(color.to_array());
    }

    /// Adopt a new background color and clear the canvas to it
    pub fn reset(&mut self, background: PixelColor) {
        self.background = background;
        self.fill(background);
    }

    /// Number of cells that differ from the background
    pub fn painted_cells(&self) -> usize {
        let background = self.background.to_array();
        self.cells.iter().filter(|&&cell| cell != background).count()
    }

    /// Row-major RGBA8 bytes of the whole canvas
    pub fn as_bytes(&self) -> &[u8] {
        match self.cells.as_slice() {
            Some(cells) => cells.as_flattened(),
            None => &[],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<[usize; 2]> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        (col < self.width() && row < self.height()).then_some([row, col])
    }
}
