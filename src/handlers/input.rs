use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

/// Keys while the "add subreddit" prompt is open.
pub fn handle_prompt_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.submit_add_prompt(),
        KeyCode::Esc => app.ui.cancel_prompt(),
        KeyCode::Backspace => {
            app.ui.input.pop();
        }
        KeyCode::Char(c) => app.ui.input.push(c),
        _ => {}
    }
}
