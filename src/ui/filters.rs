use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;

/// What: Render the search input with its caret.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (input text and caret)
/// - `area`: Target rectangle for the input
///
/// Details:
/// - Shows a "> " prefix; the terminal cursor is placed at the caret.
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(th.sapphire)),
        Span::styled(app.input.as_str().to_string(), Style::default().fg(th.text)),
    ]);
    let input = Paragraph::new(input_line)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled("Search", Style::default().fg(th.mauve)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.mauve)),
        );
    f.render_widget(input, area);

    // Caret position: border + "> " prefix + caret columns, clamped to the box
    let caret_cols = u16::try_from(app.caret).unwrap_or(u16::MAX);
    let right = area.x + area.width.saturating_sub(1);
    let x = std::cmp::min(area.x + 1 + 2 + caret_cols, right);
    let y = area.y + 1;
    f.set_cursor_position(Position::new(x, y));
}

/// What: Render the category filter row with live counts.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (facet counts, active category, post total)
/// - `area`: Target rectangle for the row
///
/// Details:
/// - One chip per distinct category plus "All"; the active chip is shown
///   inverted. Counts come from the full post set, so they are stable while
///   searching.
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let active_style = Style::default()
        .fg(th.crust)
        .bg(th.lavender)
        .add_modifier(Modifier::BOLD);
    let idle_style = Style::default().fg(th.subtext0);

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(
        format!(" All ({}) ", app.total_posts()),
        if app.active_category.is_none() {
            active_style
        } else {
            idle_style
        },
    ));
    for entry in &app.category_counts {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {} ({}) ", entry.name, entry.count),
            if app.active_category.as_deref() == Some(entry.name.as_str()) {
                active_style
            } else {
                idle_style
            },
        ));
    }

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled("Filter", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface1)),
        );
    f.render_widget(bar, area);
}
