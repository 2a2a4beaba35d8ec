//! Keyboard event handling for the browsing surface.
//!
//! Dispatch order follows the runtime's precedence: modal overlays first,
//! then global shortcuts, then phase-specific keys.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::actions;
use crate::state::{AppState, Modal, PAGE_STEP, Phase};

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    fetch_req_tx: &mpsc::UnboundedSender<()>,
) -> bool {
    if let CEvent::Key(ke) = ev {
        if ke.kind != KeyEventKind::Press {
            return false;
        }

        // Modal handling
        if matches!(app.modal, Modal::Help) {
            match ke.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) => app.modal = Modal::None,
                _ => {}
            }
            return false;
        }

        // Global shortcuts regardless of phase
        if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        if ke.code == KeyCode::F(1)
            || (ke.code == KeyCode::Char('h') && ke.modifiers.contains(KeyModifiers::CONTROL))
        {
            app.modal = Modal::Help;
            return false;
        }

        match app.phase {
            Phase::Loading => {
                if ke.code == KeyCode::Esc {
                    return true;
                }
            }
            Phase::Error { .. } => match ke.code {
                KeyCode::Enter | KeyCode::Char('r') => {
                    actions::request_fetch(app, fetch_req_tx);
                }
                KeyCode::Esc => return true,
                _ => {}
            },
            Phase::Ready => return handle_ready_key(ke, app),
        }
        return false;
    }
    false
}

/// What: Handle a key press on the ready browsing surface.
///
/// Inputs:
/// - `ke`: Key event (already confirmed to be a press)
/// - `app`: Mutable application state
///
/// Output:
/// - `true` when the key requests exit.
///
/// Details:
/// - Esc clears the query first and only exits when it is already empty.
/// - Enter is contextual: View-All on the category-empty panel, otherwise
///   Load-More when more matching posts exist.
fn handle_ready_key(ke: KeyEvent, app: &mut AppState) -> bool {
    #[allow(clippy::cast_possible_wrap)]
    match ke.code {
        KeyCode::Esc => {
            if app.input.is_empty() {
                return true;
            }
            actions::clear_query(app);
        }
        KeyCode::Tab => actions::cycle_category(app, true),
        KeyCode::BackTab => actions::cycle_category(app, false),
        KeyCode::Up => actions::move_selection(app, -1),
        KeyCode::Down => actions::move_selection(app, 1),
        KeyCode::PageUp => actions::move_selection(app, -(PAGE_STEP as isize)),
        KeyCode::PageDown => actions::move_selection(app, PAGE_STEP as isize),
        KeyCode::Left => actions::move_caret_left(app),
        KeyCode::Right => actions::move_caret_right(app),
        KeyCode::Home => actions::move_caret_home(app),
        KeyCode::End => actions::move_caret_end(app),
        KeyCode::Backspace => actions::delete_before_caret(app),
        KeyCode::Enter => actions::primary_action(app),
        KeyCode::Char(c) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
            actions::insert_char(app, c);
        }
        _ => {}
    }
    false
}
