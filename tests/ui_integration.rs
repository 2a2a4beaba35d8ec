//! Rendering smoke tests for every screen the interface can show, driven
//! through the public event handler so the frames come from realistic state.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use postdeck::events::handle_event;
use postdeck::logic::refresh_projection;
use postdeck::state::{AppState, Modal, Phase, Post};
use postdeck::ui::ui;
use ratatui::{Terminal, backend::TestBackend};

fn post(id: u64, title: &str, category: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        excerpt: format!("{title} in depth"),
        author: "Rae".to_string(),
        category: category.to_string(),
        date: "2026-03-02".to_string(),
        image: String::new(),
    }
}

fn ready_app() -> AppState {
    let mut app = AppState {
        phase: Phase::Ready,
        posts: (1..=9)
            .map(|i| {
                let cat = if i % 2 == 0 { "Design" } else { "Tech" };
                post(i, &format!("Article {i}"), cat)
            })
            .collect(),
        ..Default::default()
    };
    refresh_projection(&mut app);
    app
}

fn draw(app: &mut AppState) {
    let backend = TestBackend::new(110, 32);
    let mut term = Terminal::new(backend).expect("test terminal");
    term.draw(|f| ui(f, app)).expect("frame renders");
}

fn key(code: KeyCode) -> CEvent {
    CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn renders_after_typing_a_query() {
    let mut app = ready_app();
    let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
    for c in "article 3".chars() {
        handle_event(key(KeyCode::Char(c)), &mut app, &tx);
    }
    assert_eq!(app.displayed.len(), 1);
    draw(&mut app);
}

#[test]
fn renders_each_category_while_cycling() {
    let mut app = ready_app();
    let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
    // All -> Tech -> Design -> All
    for _ in 0..3 {
        handle_event(key(KeyCode::Tab), &mut app, &tx);
        draw(&mut app);
    }
    assert_eq!(app.active_category, None);
}

#[test]
fn renders_after_load_more() {
    let mut app = ready_app();
    let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
    assert!(app.has_more);
    handle_event(key(KeyCode::Enter), &mut app, &tx);
    assert_eq!(app.displayed.len(), 9);
    draw(&mut app);
}

#[test]
fn renders_category_empty_panel_and_recovers() {
    let mut app = ready_app();
    app.active_category = Some("Essays".to_string());
    refresh_projection(&mut app);
    draw(&mut app);
    let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
    handle_event(key(KeyCode::Enter), &mut app, &tx);
    assert!(app.empty_state.is_none());
    draw(&mut app);
}

#[test]
fn renders_store_empty_panel() {
    let mut app = AppState {
        phase: Phase::Ready,
        ..Default::default()
    };
    refresh_projection(&mut app);
    draw(&mut app);
}

#[test]
fn renders_loading_and_error_screens() {
    let mut app = AppState::default();
    draw(&mut app);
    app.phase = Phase::Error {
        message: "Network error: connection refused".to_string(),
    };
    draw(&mut app);
}

#[test]
fn renders_help_overlay_over_every_phase() {
    let mut app = ready_app();
    app.modal = Modal::Help;
    draw(&mut app);
    app.phase = Phase::Loading;
    draw(&mut app);
}

#[test]
fn selection_scrolls_within_the_page() {
    let mut app = ready_app();
    let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
    for _ in 0..10 {
        handle_event(key(KeyCode::Down), &mut app, &tx);
    }
    assert_eq!(app.selected, app.displayed.len() - 1);
    draw(&mut app);
}
