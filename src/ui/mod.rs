//! Rendering layer: screen layout per phase plus the modal overlay.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::{AppState, Modal, Phase};
use crate::theme::theme;

mod filters;
mod help;
mod hero;
mod posts;

/// What: Render one frame of the interface.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (list selection is stateful)
///
/// Details:
/// - Loading and error phases take over the whole screen; the ready phase
///   stacks hero, search/filter row, article list, and footer. The help
///   overlay draws on top of whatever phase is active.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    match app.phase.clone() {
        Phase::Loading => render_loading(f, app),
        Phase::Error { message } => render_error(f, &message),
        Phase::Ready => render_ready(f, app),
    }

    if matches!(app.modal, Modal::Help) {
        help::render_help(f);
    }
}

/// What: Render the ready browsing surface.
fn render_ready(f: &mut Frame, app: &mut AppState) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(area);

    hero::render_hero(f, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);
    filters::render_search(f, app, middle[0]);
    filters::render_filter_bar(f, app, middle[1]);

    posts::render_post_list(f, app, chunks[2]);
    posts::render_footer(f, app, chunks[3]);
}

/// What: Render the full-screen loading state.
fn render_loading(f: &mut Frame, app: &AppState) {
    let th = theme();
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(2),
            Constraint::Percentage(45),
        ])
        .split(area);
    let lines = vec![
        Line::from(Span::styled(
            "Loading articles\u{2026}",
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.base_url.clone(),
            Style::default().fg(th.subtext1),
        )),
    ];
    let loading = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().bg(th.base));
    f.render_widget(loading, chunks[1]);
}

/// What: Render the full-screen fetch error panel with its retry hint.
fn render_error(f: &mut Frame, message: &str) {
    let th = theme();
    let area = f.area();
    let w = area.width.saturating_sub(10).min(70);
    let h = 8u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let rect = ratatui::prelude::Rect {
        x,
        y,
        width: w,
        height: h,
    };
    let lines = vec![
        Line::from(Span::styled(
            "Could not load articles",
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(th.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter or r to retry \u{00b7} Esc exits",
            Style::default().fg(th.subtext1),
        )),
    ];
    let panel = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    " Fetch Error ",
                    Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.red))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(panel, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::refresh_projection;
    use crate::state::Phase;
    use crate::test_utils::post;
    use ratatui::{Terminal, backend::TestBackend};

    fn ready_app() -> AppState {
        let mut app = AppState {
            phase: Phase::Ready,
            posts: (1..=10)
                .map(|i| {
                    let cat = if i <= 6 { "Tech" } else { "Design" };
                    post(i, &format!("Post {i}"), "A body worth reading", "Rae", cat)
                })
                .collect(),
            ..Default::default()
        };
        refresh_projection(&mut app);
        app
    }

    /// What: Verify a frame renders for the given state without panicking.
    fn draw(app: &mut AppState) {
        let backend = TestBackend::new(100, 30);
        let mut term = Terminal::new(backend).expect("test terminal");
        term.draw(|f| ui(f, app)).expect("frame renders");
    }

    #[test]
    /// What: The ready surface renders with posts, filters, and footer
    ///
    /// - Input: Ten posts, first page displayed
    /// - Output: Frame renders without panic
    fn ready_surface_renders() {
        let mut app = ready_app();
        draw(&mut app);
    }

    #[test]
    /// What: The loading screen renders
    fn loading_screen_renders() {
        let mut app = AppState::default();
        draw(&mut app);
    }

    #[test]
    /// What: The error panel renders with a long message
    fn error_panel_renders() {
        let mut app = AppState::default();
        app.phase = Phase::Error {
            message: "Network error: connection refused (os error 111) while contacting \
http://localhost:8080/api/public/blogs"
                .to_string(),
        };
        draw(&mut app);
    }

    #[test]
    /// What: Both empty panels render
    ///
    /// - Input: A category with no matches, then an empty store
    /// - Output: Frames render without panic
    fn empty_panels_render() {
        let mut app = ready_app();
        app.active_category = Some("Essays".to_string());
        refresh_projection(&mut app);
        draw(&mut app);

        let mut bare = AppState {
            phase: Phase::Ready,
            ..Default::default()
        };
        refresh_projection(&mut bare);
        draw(&mut bare);
    }

    #[test]
    /// What: The help overlay renders on top of the ready surface
    fn help_overlay_renders() {
        let mut app = ready_app();
        app.modal = Modal::Help;
        draw(&mut app);
    }

    #[test]
    /// What: Rendering survives a tiny terminal
    ///
    /// - Input: 10x4 backend
    /// - Output: No panic from layout underflow
    fn tiny_terminal_renders() {
        let backend = TestBackend::new(10, 4);
        let mut term = Terminal::new(backend).expect("test terminal");
        let mut app = ready_app();
        term.draw(|f| ui(f, &mut app)).expect("frame renders");
    }
}
