//! Main UI module. Re-exports submodules and provides the main entry point.

pub mod columns;
pub mod popups;
pub mod post_card;
pub mod time_format;

use crate::app::App;
use crate::ui::columns::draw_board;
use crate::ui::popups::{draw_input_popup, draw_notification_popup, draw_quit_confirm_popup};
use crate::ui::time_format::humanized_age;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HELP_TEXT: &str = "[a] Add | [x] Close | [r] Retry/Reload | [←→] Columns | [↑↓] Posts | [q] Quit";

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Columns
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    let count = app.board.len();
    let header = Line::from(vec![
        Span::styled(" subdeck ", Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(format!(" {} column{}", count, if count == 1 { "" } else { "s" })),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    draw_board(f, app, chunks[1]);

    let now = chrono::Utc::now().timestamp();
    let status_text = app
        .board
        .focused_column()
        .and_then(|c| c.selected_post())
        .map(|post| format!("{} · {}", post.permalink_url(), humanized_age(now, post.created_utc)))
        .unwrap_or_default();

    let footer_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Help text area
            Constraint::Percentage(55), // Status area
        ])
        .split(chunks[2]);
    f.render_widget(
        Paragraph::new(HELP_TEXT)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP)),
        footer_chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(status_text, Style::default().fg(Color::Yellow)))
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::TOP)),
        footer_chunks[1],
    );

    if app.is_prompt_open() {
        draw_input_popup(f, app);
    }
    if let Some(message) = app.notifications.message() {
        draw_notification_popup(f, message);
    }
    if app.ui.show_quit_confirm {
        draw_quit_confirm_popup(f, app);
    }
}
