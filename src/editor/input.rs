use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use super::state::{EditorState, Mode};

/// What the main loop should do after an event was applied to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Redraw,
    Quit,
}

pub fn handle_event(state: &mut EditorState, event: Event) -> Action {
    match event {
        Event::Key(key) => handle_key(state, key),
        Event::Resize(..) => Action::Redraw,
        _ => Action::Continue,
    }
}

fn handle_key(state: &mut EditorState, key: KeyEvent) -> Action {
    // Ctrl-s saves from any mode.
    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        match state.save() {
            Ok(()) => {}
            Err(e) => state.status_message = Some(format!("Save failed: {e}")),
        }
        return Action::Redraw;
    }

    match &mut state.mode {
        Mode::Normal => handle_normal_key(state, key),
        Mode::InsertText { buf } => match key.code {
            KeyCode::Esc => {
                state.mode = Mode::Normal;
                state.status_message = None;
                Action::Redraw
            }
            KeyCode::Enter => {
                let content = std::mem::take(buf);
                state.mode = Mode::Normal;
                state.place_text(&content);
                Action::Redraw
            }
            KeyCode::Backspace => {
                buf.pop();
                Action::Redraw
            }
            KeyCode::Char(c) => {
                buf.push(c);
                Action::Redraw
            }
            _ => Action::Continue,
        },
        Mode::CodeView => match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('g') => {
                state.mode = Mode::Normal;
                Action::Redraw
            }
            _ => Action::Continue,
        },
    }
}

fn handle_normal_key(state: &mut EditorState, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Left => {
            state.cursor_col = state.cursor_col.saturating_sub(1);
            Action::Redraw
        }
        KeyCode::Right => {
            state.cursor_col =
                (state.cursor_col.saturating_add(1)).min(state.canvas_cols.saturating_sub(1));
            Action::Redraw
        }
        KeyCode::Up => {
            state.cursor_row = state.cursor_row.saturating_sub(1);
            Action::Redraw
        }
        KeyCode::Down => {
            state.cursor_row =
                (state.cursor_row.saturating_add(1)).min(state.canvas_rows.saturating_sub(1));
            Action::Redraw
        }
        KeyCode::Char('t') | KeyCode::Char('i') => {
            state.mode = Mode::InsertText { buf: String::new() };
            state.status_message = None;
            Action::Redraw
        }
        KeyCode::Char('g') => {
            state.mode = Mode::CodeView;
            Action::Redraw
        }
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Continue,
    }
}
