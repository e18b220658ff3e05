//! Ratatui widgets for one frame: the lit cells and the status overlay.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

use super::palette::{color_for_index, Palette};
use crate::frame::LitCell;

/// Draws lit cells at their grid position inside the render area.
///
/// Cells beyond the area are clipped.
pub struct TrailWidget<'a> {
    cells: &'a [LitCell],
    palette: &'a Palette,
}

impl<'a> TrailWidget<'a> {
    pub fn new(cells: &'a [LitCell], palette: &'a Palette) -> Self {
        Self { cells, palette }
    }
}

impl Widget for TrailWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for cell in self.cells {
            if cell.row >= area.height as usize || cell.col >= area.width as usize {
                continue;
            }
            let x = area.x + cell.col as u16;
            let y = area.y + cell.row as u16;
            if let Some(target) = buf.cell_mut((x, y)) {
                target
                    .set_char(self.palette.glyph(cell.level))
                    .set_style(Style::default().fg(color_for_index(cell.color)));
            }
        }
    }
}

/// Hint drawn in the bottom-right corner.
pub const QUIT_HINT: &str = "Press 'q' or ESC to quit";

/// Frame counter (top-left) and quit hint (bottom-right), drawn over the
/// trail.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusOverlay {
    /// Frame number to show, or `None` to hide the counter
    pub frame: Option<u64>,
    /// Whether to show the quit hint
    pub show_hint: bool,
}

impl Widget for StatusOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if let Some(frame) = self.frame {
            let text = format!("Frame: {}", frame);
            let counter_area = Rect {
                x: area.x,
                y: area.y,
                width: (text.len() as u16).min(area.width),
                height: 1,
            };
            Paragraph::new(text)
                .style(Style::default().fg(Color::White))
                .render(counter_area, buf);
        }

        if self.show_hint {
            let width = (QUIT_HINT.len() as u16).min(area.width);
            let hint_area = Rect {
                x: area.x + area.width - width,
                y: area.y + area.height - 1,
                width,
                height: 1,
            };
            Paragraph::new(QUIT_HINT)
                .style(Style::default().fg(Color::DarkGray))
                .render(hint_area, buf);
        }
    }
}
