//! Glyph ramp and color mapping for lit cells.
//!
//! Level 0 is the blank glyph; higher levels are visually heavier.
//! Color indices follow the classic curses order.

use ratatui::style::Color;

/// Ten-level ramp from blank to densest glyph.
pub const DEFAULT_PALETTE: &str = " .:-=+*#%@";

/// Ordered glyph ramp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<char>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE)
    }
}

impl Palette {
    pub fn new(ramp: &str) -> Self {
        Self {
            glyphs: ramp.chars().collect(),
        }
    }

    /// Number of levels, including blank.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Highest level (the value freshly drawn cells get).
    pub fn max_level(&self) -> u8 {
        self.glyphs.len().saturating_sub(1).min(u8::MAX as usize) as u8
    }

    /// Glyph for a level; levels past the end use the densest glyph.
    pub fn glyph(&self, level: u8) -> char {
        self.glyphs
            .get(level as usize)
            .or_else(|| self.glyphs.last())
            .copied()
            .unwrap_or(' ')
    }
}

/// Map a color index in `1..=7` to a terminal color.
///
/// Anything outside that range renders with the default color.
pub fn color_for_index(index: u8) -> Color {
    match index {
        1 => Color::Red,
        2 => Color::Green,
        3 => Color::Yellow,
        4 => Color::Blue,
        5 => Color::Magenta,
        6 => Color::Cyan,
        7 => Color::White,
        _ => Color::Reset,
    }
}
