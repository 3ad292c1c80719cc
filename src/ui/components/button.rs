//! Button component for TUI

use crate::state::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    buf: &mut Buffer,
    area: Rect,
    content: &str,
    is_selected: bool,
    palette: &Palette,
) {
    let border_style = if is_selected {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    paragraph.block(block).render(area, buf);
}
