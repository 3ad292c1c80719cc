//! Field rendering utilities for forms

use crate::state::{FormField, Palette};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Draw a form field box; errored fields get an error-colored border
pub fn draw_field(
    buf: &mut Buffer,
    area: Rect,
    field: &FormField,
    is_active: bool,
    palette: &Palette,
) {
    let border_style = if field.is_errored() {
        Style::default().fg(palette.error)
    } else if is_active {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };

    let placeholder = field.value.is_empty() && !is_active;
    let display_str = if placeholder {
        format!("Your {}", field.label().to_lowercase())
    } else {
        field.value.clone()
    };
    let style = if placeholder {
        Style::default().fg(palette.muted)
    } else {
        Style::default().fg(palette.text)
    };

    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(palette.accent);

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(cursor, cursor_style));
            }
        }
        // Keep the cursor row in view once the wrapped text outgrows the box
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2) as usize;
        let overflow = paragraph
            .line_count(inner_width)
            .saturating_sub(inner_height);
        paragraph.scroll((overflow as u16, 0))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, cursor_style),
        ]))
        .wrap(Wrap { trim: false })
    };

    let title_style = if is_active {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };
    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.label()), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    content.block(block).render(area, buf);
}

/// Draw the error line under a field; blank when the field is clean
pub fn draw_field_error(buf: &mut Buffer, area: Rect, field: &FormField, palette: &Palette) {
    let message = field.error_message();
    if message.is_empty() {
        return;
    }
    Paragraph::new(Line::from(Span::styled(
        format!(" ✗ {message}"),
        Style::default().fg(palette.error),
    )))
    .render(area, buf);
}
