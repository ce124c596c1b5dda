use crate::{Color, EngineError, Result};

/// Initial canvas color and the color the eraser writes
pub const DEFAULT_BACKGROUND: Color = Color::WHITE;

/// Initial drawing color
pub const DEFAULT_COLOR: Color = Color::BLACK;

/// Swatches offered by the color picker. Black first, white second.
pub const DEFAULT_PALETTE: [Color; 16] = [
    Color::new(0x00, 0x00, 0x00), // black
    Color::new(0xFF, 0xFF, 0xFF), // white
    Color::new(0xFF, 0x00, 0x00), // red
    Color::new(0x00, 0xFF, 0x00), // green
    Color::new(0x00, 0x00, 0xFF), // blue
    Color::new(0xFF, 0xFF, 0x00), // yellow
    Color::new(0xFF, 0x00, 0xFF), // magenta
    Color::new(0x00, 0xFF, 0xFF), // cyan
    Color::new(0xFF, 0xA5, 0x00), // orange
    Color::new(0x80, 0x00, 0x80), // purple
    Color::new(0xA5, 0x2A, 0x2A), // brown
    Color::new(0xFF, 0xC0, 0xCB), // pink
    Color::new(0x80, 0x80, 0x80), // gray
    Color::new(0xC0, 0xC0, 0xC0), // silver
    Color::new(0x00, 0x80, 0x00), // dark green
    Color::new(0x00, 0x00, 0x80), // navy
];

/// Ordered set of selectable swatches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_slice(&DEFAULT_PALETTE)
    }
}

impl Palette {
    pub fn from_slice(colors: &[Color]) -> Self {
        Self { colors: colors.to_vec() }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<Color> {
        self.colors.get(index).copied().ok_or(EngineError::PaletteIndexOutOfRange {
            index,
            len: self.colors.len(),
        })
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Index of the first swatch equal to `color`
    pub fn position(&self, color: Color) -> Option<usize> {
        self.colors.iter().position(|c| *c == color)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}
