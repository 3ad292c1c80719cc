//! Skills section: one card per category with animated progress bars

use crate::portfolio::{Portfolio, SkillCategory};
use crate::state::Palette;
use crate::ui::sections::{content_column, draw_title, SECTION_FOOTER_ROWS, SECTION_HEADER_ROWS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Rows between two category cards
const CATEGORY_GAP: u16 = 1;
/// Rows per skill: label, then bar
const ROWS_PER_SKILL: u16 = 2;

const BAR_FILLED: &str = "█";
const BAR_EMPTY: &str = "░";

/// Height of one category card including its border
pub fn category_height(category: &SkillCategory) -> u16 {
    2 + ROWS_PER_SKILL * category.skills.len() as u16
}

/// Top offset of each category card relative to the section top
pub fn category_offsets(portfolio: &Portfolio) -> Vec<(u16, u16)> {
    let mut row = SECTION_HEADER_ROWS;
    portfolio
        .skills
        .iter()
        .map(|category| {
            let height = category_height(category);
            let top = row;
            row += height + CATEGORY_GAP;
            (top, height)
        })
        .collect()
}

pub fn skills_height(portfolio: &Portfolio) -> u16 {
    let cards: u16 = portfolio.skills.iter().map(category_height).sum();
    let gaps = portfolio.skills.len().saturating_sub(1) as u16 * CATEGORY_GAP;
    SECTION_HEADER_ROWS + cards + gaps + SECTION_FOOTER_ROWS
}

/// Cells of a bar `width` wide that are filled for `percent` at `fill` progress
fn filled_cells(width: u16, percent: u16, fill: f32) -> u16 {
    let target = width as f32 * percent as f32 / 100.0;
    (target * fill.clamp(0.0, 1.0)).round() as u16
}

/// Draw the skills section; `fill(index)` gives each category's bar progress
pub fn draw_skills(
    buf: &mut Buffer,
    area: Rect,
    portfolio: &Portfolio,
    palette: &Palette,
    fill: impl Fn(usize) -> f32,
) {
    draw_title(buf, area, "Skills", palette);
    let (x, width) = content_column(area.width);

    for (index, (category, (top, height))) in portfolio
        .skills
        .iter()
        .zip(category_offsets(portfolio))
        .enumerate()
    {
        let card = Rect::new(area.x + x, area.y + top, width, height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(Span::styled(
                format!(" {} ", category.name),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(card);
        block.render(card, buf);

        let progress = fill(index);
        let bar_x = inner.x + 1;
        let bar_width = inner.width.saturating_sub(2);
        for (i, skill) in category.skills.iter().enumerate() {
            let label_y = inner.y + ROWS_PER_SKILL * i as u16;
            let percent = format!("{}%", skill.percent());
            let padding = (bar_width as usize)
                .saturating_sub(skill.name.chars().count() + percent.len());
            Paragraph::new(Line::from(vec![
                Span::styled(skill.name.clone(), Style::default().fg(palette.text)),
                Span::raw(" ".repeat(padding)),
                Span::styled(percent, Style::default().fg(palette.muted)),
            ]))
            .render(Rect::new(bar_x, label_y, bar_width, 1), buf);

            let filled = filled_cells(bar_width, skill.percent(), progress);
            Paragraph::new(Line::from(vec![
                Span::styled(
                    BAR_FILLED.repeat(filled as usize),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(
                    BAR_EMPTY.repeat(bar_width.saturating_sub(filled) as usize),
                    Style::default().fg(palette.bar_track),
                ),
            ]))
            .render(Rect::new(bar_x, label_y + 1, bar_width, 1), buf);
        }
    }
}
