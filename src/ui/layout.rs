//! Layout components (page viewport, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Focus, Palette, STATUS_BAR_HEIGHT};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Split the screen into the page viewport and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                     // Page
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(buf: &mut Buffer, area: Rect, app: &App) {
    let palette = app.state.palette();
    let bar_style = Style::default().bg(palette.surface).fg(palette.muted);

    let mut spans = vec![Span::raw(" ")];
    spans.push(Span::raw(focus_hints(app.state.focus)));

    if let Some(section) = app.state.current_section() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} {}%", section.label(), scroll_percent(app)),
            Style::default().fg(palette.accent),
        ));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(palette.error)));
    }

    Paragraph::new(Line::from(spans))
        .style(bar_style)
        .render(area, buf);

    // Quit hint on the right
    let quit_hint = quit_hint(app.state.focus);
    let hint_width = quit_hint.len() as u16;
    if area.width > hint_width {
        let quit_area = Rect {
            x: area.right() - hint_width,
            width: hint_width,
            ..area
        };
        Paragraph::new(quit_hint)
            .style(hint_style(&palette))
            .render(quit_area, buf);
    }
}

/// How far down the page the viewport is
fn scroll_percent(app: &App) -> u16 {
    let scroll = &app.state.scroll;
    match scroll.max_offset() {
        0 => 100,
        max => (scroll.offset() as u32 * 100 / max as u32) as u16,
    }
}

fn hint_style(palette: &Palette) -> Style {
    Style::default().bg(palette.surface).fg(palette.text)
}

fn quit_hint(focus: Focus) -> &'static str {
    match focus {
        Focus::Form => " ^C:quit ",
        Focus::Page | Focus::Menu => " q:quit ",
    }
}

/// Keyboard hints for the current focus
fn focus_hints(focus: Focus) -> String {
    match focus {
        Focus::Page => "j/k:scroll  1-5:jump  c:contact  t:theme  m:menu".to_string(),
        Focus::Menu => "j/k:move  Enter:go  Esc:close".to_string(),
        Focus::Form => format!("Tab:next  Enter:next/newline  {SUBMIT_SHORTCUT}:send  Esc:done"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_one_status_row() {
        let (page, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(page.height, 23);
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_form_hints_mention_submit_shortcut() {
        assert!(focus_hints(Focus::Form).contains(SUBMIT_SHORTCUT));
        assert!(focus_hints(Focus::Page).contains("t:theme"));
    }
}
