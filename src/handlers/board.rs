use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

/// Keys while browsing columns.
pub fn handle_board_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => app.enter_add_prompt(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.board.focus_next(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.board.focus_previous(),
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(column) = app.board.focused_column_mut() {
                column.select_next();
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(column) = app.board.focused_column_mut() {
                column.select_previous();
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => app.close_focused(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.refresh_focused(),
        KeyCode::Char('q') | KeyCode::Esc => app.ui.show_quit_confirm(),
        _ => {}
    }
}
