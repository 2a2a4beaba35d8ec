use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::theme::theme;

/// Hero banner headline.
pub const HERO_TITLE: &str = "Discover Stories That Matter";

/// Hero banner tagline shown under the headline.
pub const HERO_TAGLINE: &str = "Insights, perspectives, and thought-provoking content from \
experts across technology, design, and beyond.";

/// What: Render the hero banner across the top of the screen.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `area`: Target rectangle for the banner
pub fn render_hero(f: &mut Frame, area: Rect) {
    let th = theme();
    let lines = vec![
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            HERO_TAGLINE,
            Style::default().fg(th.subtext1),
        )),
    ];
    let hero = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(hero, area);
}
