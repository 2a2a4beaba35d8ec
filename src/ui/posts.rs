use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::state::{AppState, EmptyState};
use crate::theme::theme;
use crate::util::{format_date, truncate_to_width};

/// What: Render the article list, or the matching empty panel.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (list selection is stateful)
/// - `area`: Target rectangle for the list
///
/// Details:
/// - Each article takes two rows: category tag, title, author and date on
///   the first; the excerpt, truncated to the pane width, on the second.
/// - The block title reports displayed versus matching totals.
pub fn render_post_list(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();

    if let Some(kind) = app.empty_state {
        render_empty_panel(f, area, kind);
        return;
    }

    let excerpt_width = usize::from(area.width.saturating_sub(6));
    let items: Vec<ListItem> = app
        .displayed
        .iter()
        .map(|p| {
            let mut head = vec![
                Span::styled(format!("[{}] ", p.category), Style::default().fg(th.sapphire)),
                Span::styled(
                    p.title.clone(),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  by {}", p.author), Style::default().fg(th.overlay1)),
            ];
            let date = format_date(&p.date);
            if !date.is_empty() {
                head.push(Span::styled(
                    format!("  {date}"),
                    Style::default().fg(th.overlay2),
                ));
            }
            let body = Line::from(Span::styled(
                format!("  {}", truncate_to_width(&p.excerpt, excerpt_width)),
                Style::default().fg(th.subtext0),
            ));
            ListItem::new(vec![Line::from(head), body])
        })
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    format!("Articles ({} of {})", app.displayed.len(), app.matching_total),
                    Style::default().fg(th.overlay1),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        )
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// What: Render one of the two informational empty panels.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `area`: The list area the panel replaces
/// - `kind`: Which panel to show
///
/// Details:
/// - The category panel carries the View-All recovery hint; the no-posts
///   panel is informational only.
fn render_empty_panel(f: &mut Frame, area: Rect, kind: EmptyState) {
    let th = theme();
    let mut lines = vec![Line::from("")];
    match kind {
        EmptyState::CategoryEmpty => {
            lines.push(Line::from(Span::styled(
                "No articles found in this category.",
                Style::default().fg(th.text),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Press Enter to view all articles",
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
            )));
        }
        EmptyState::NoPosts => {
            lines.push(Line::from(Span::styled(
                "No articles available at the moment. Please check back later!",
                Style::default().fg(th.text),
            )));
        }
    }
    let panel = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled("Articles", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
    f.render_widget(panel, area);
}

/// What: Render the status and keybinding footer.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (load-more availability)
/// - `area`: Two-row footer rectangle
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let status: Line = if app.has_more {
        Line::from(Span::styled(
            format!(
                "Enter = load more ({} more match)",
                app.matching_total - app.displayed.len()
            ),
            Style::default().fg(th.green).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from("")
    };
    let keys = Line::from(vec![
        Span::styled("KEYS:", Style::default().fg(th.overlay1)),
        Span::styled(
            " Type=search  Tab/S-Tab=category  \u{2191}/\u{2193}=scroll  Enter=load more  \
Esc=clear/exit  F1=help  Ctrl+C=exit",
            Style::default().fg(th.subtext1),
        ),
    ]);
    let footer = Paragraph::new(vec![status, keys])
        .style(Style::default().fg(th.subtext1).bg(th.base))
        .wrap(Wrap { trim: true });
    f.render_widget(footer, area);
}
