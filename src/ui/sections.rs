//! Hero, about and projects sections

use crate::portfolio::Portfolio;
use crate::state::Palette;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Blank row, title row, blank row
pub const SECTION_HEADER_ROWS: u16 = 3;
/// Blank rows closing every section
pub const SECTION_FOOTER_ROWS: u16 = 2;
/// The hero always fills this many rows
pub const HERO_HEIGHT: u16 = 16;

const MAX_CONTENT_WIDTH: u16 = 96;
const CONTENT_MARGIN: u16 = 2;

/// Horizontal offset and width of the centred content column
pub fn content_column(width: u16) -> (u16, u16) {
    let content = width
        .saturating_sub(CONTENT_MARGIN * 2)
        .min(MAX_CONTENT_WIDTH)
        .max(1);
    ((width.saturating_sub(content)) / 2, content)
}

fn wrapped(text: &str, style: Style) -> Paragraph<'_> {
    Paragraph::new(Span::styled(text, style)).wrap(Wrap { trim: true })
}

/// Rows `text` occupies when wrapped to `width`
fn wrapped_height(text: &str, width: u16) -> u16 {
    wrapped(text, Style::default()).line_count(width.max(1)) as u16
}

/// Draw a section heading on the title row
pub fn draw_title(buf: &mut Buffer, area: Rect, title: &str, palette: &Palette) {
    let (x, width) = content_column(area.width);
    let title_area = Rect::new(area.x + x, area.y + 1, width, 1);
    Paragraph::new(Line::from(vec![
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ──", Style::default().fg(palette.accent)),
    ]))
    .render(title_area, buf);
}

pub fn hero_height() -> u16 {
    HERO_HEIGHT
}

pub fn draw_hero(buf: &mut Buffer, area: Rect, portfolio: &Portfolio, palette: &Palette) {
    let (x, width) = content_column(area.width);
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("Hi, I'm", Style::default().fg(palette.muted))),
        Line::from(Span::styled(
            portfolio.name.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            portfolio.title.clone(),
            Style::default().fg(palette.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            portfolio.tagline.clone(),
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[3] ", Style::default().fg(palette.accent)),
            Span::styled("See my skills    ", Style::default().fg(palette.text)),
            Span::styled("[5] ", Style::default().fg(palette.accent)),
            Span::styled("Get in touch", Style::default().fg(palette.text)),
        ]),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(Rect::new(area.x + x, area.y, width, area.height), buf);
}

pub fn about_height(portfolio: &Portfolio, width: u16) -> u16 {
    let paragraphs: u16 = portfolio
        .about
        .iter()
        .map(|p| wrapped_height(p, width))
        .sum();
    let gaps = portfolio.about.len().saturating_sub(1) as u16;
    SECTION_HEADER_ROWS + paragraphs + gaps + SECTION_FOOTER_ROWS
}

pub fn draw_about(buf: &mut Buffer, area: Rect, portfolio: &Portfolio, palette: &Palette) {
    draw_title(buf, area, "About Me", palette);
    let (x, width) = content_column(area.width);
    let mut y = area.y + SECTION_HEADER_ROWS;
    for text in &portfolio.about {
        let height = wrapped_height(text, width);
        wrapped(text, Style::default().fg(palette.text))
            .render(Rect::new(area.x + x, y, width, height), buf);
        y += height + 1;
    }
}

/// Inner text width of a project card
fn card_text_width(width: u16) -> u16 {
    width.saturating_sub(4)
}

fn project_card_height(description: &str, has_tech: bool, width: u16) -> u16 {
    2 + wrapped_height(description, card_text_width(width)) + u16::from(has_tech)
}

pub fn projects_height(portfolio: &Portfolio, width: u16) -> u16 {
    let cards: u16 = portfolio
        .projects
        .iter()
        .map(|p| project_card_height(&p.description, !p.tech.is_empty(), width))
        .sum();
    let gaps = portfolio.projects.len().saturating_sub(1) as u16;
    SECTION_HEADER_ROWS + cards + gaps + SECTION_FOOTER_ROWS
}

pub fn draw_projects(buf: &mut Buffer, area: Rect, portfolio: &Portfolio, palette: &Palette) {
    draw_title(buf, area, "Projects", palette);
    let (x, width) = content_column(area.width);
    let mut y = area.y + SECTION_HEADER_ROWS;
    for project in &portfolio.projects {
        let height = project_card_height(&project.description, !project.tech.is_empty(), width);
        let card = Rect::new(area.x + x, y, width, height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(Span::styled(
                format!(" {} ", project.name),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(card);
        block.render(card, buf);

        let text_area = Rect::new(
            inner.x + 1,
            inner.y,
            card_text_width(width),
            inner.height,
        );
        let desc_height = wrapped_height(&project.description, text_area.width);
        wrapped(&project.description, Style::default().fg(palette.text))
            .render(Rect { height: desc_height, ..text_area }, buf);
        if !project.tech.is_empty() {
            Paragraph::new(Span::styled(
                project.tech.join(" · "),
                Style::default().fg(palette.muted),
            ))
            .render(
                Rect::new(text_area.x, text_area.y + desc_height, text_area.width, 1),
                buf,
            );
        }
        y += height + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_content_column_is_centred_and_capped() {
        assert_eq!(content_column(80), (2, 76));
        assert_eq!(content_column(200), (52, 96));
        assert_eq!(content_column(3), (1, 1));
    }

    #[test]
    fn test_about_height_grows_when_narrow() {
        let portfolio = Portfolio::sample();
        assert!(about_height(&portfolio, 30) > about_height(&portfolio, 90));
    }

    #[test]
    fn test_empty_sections_keep_header_and_footer() {
        let mut portfolio = Portfolio::sample();
        portfolio.about.clear();
        portfolio.projects.clear();
        let minimum = SECTION_HEADER_ROWS + SECTION_FOOTER_ROWS;
        assert_eq!(about_height(&portfolio, 80), minimum);
        assert_eq!(projects_height(&portfolio, 80), minimum);
    }

    #[test]
    fn test_hero_shows_name_and_title() {
        let portfolio = Portfolio::sample();
        let area = Rect::new(0, 0, 80, hero_height());
        let mut buf = Buffer::empty(area);
        draw_hero(&mut buf, area, &portfolio, &Palette::LIGHT);
        let text = text_of(&buf);
        assert!(text.contains(&portfolio.name));
        assert!(text.contains(&portfolio.title));
    }

    #[test]
    fn test_projects_render_every_card() {
        let portfolio = Portfolio::sample();
        let (_, width) = content_column(80);
        let area = Rect::new(0, 0, 80, projects_height(&portfolio, width));
        let mut buf = Buffer::empty(area);
        draw_projects(&mut buf, area, &portfolio, &Palette::DARK);
        let text = text_of(&buf);
        for project in &portfolio.projects {
            assert!(text.contains(&project.name), "missing {}", project.name);
        }
    }
}
