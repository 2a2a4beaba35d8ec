use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::theme;

/// What: Render the keybinding help overlay centered on the screen.
///
/// Inputs:
/// - `f`: Frame to render into
pub fn render_help(f: &mut Frame) {
    let th = theme();
    let area = f.area();
    let w = area.width.saturating_sub(10).min(64);
    let h = 14u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let rect = ratatui::prelude::Rect {
        x,
        y,
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);

    let entry = |key: &str, what: &str| {
        Line::from(vec![
            Span::styled(format!("  {key:<14}"), Style::default().fg(th.sapphire)),
            Span::styled(what.to_string(), Style::default().fg(th.text)),
        ])
    };
    let lines = vec![
        Line::from(Span::styled(
            "Keybindings",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        entry("Type", "search articles, authors, or topics"),
        entry("Tab / S-Tab", "next / previous category filter"),
        entry("\u{2191} / \u{2193}", "move the article selection"),
        entry("Enter", "load more; view all on the empty panel"),
        entry("Backspace", "delete before the caret"),
        entry("Esc", "clear the search, then exit"),
        entry("r", "retry after a fetch error"),
        entry("Ctrl+C", "exit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter or Esc to close",
            Style::default().fg(th.subtext1),
        )),
    ];
    let help = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    " Help ",
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(help, rect);
}
