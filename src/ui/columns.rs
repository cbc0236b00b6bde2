//! The board: subreddit columns laid out side by side.

use crate::app::App;
use crate::state::{ColumnState, ColumnView};
use crate::ui::post_card::post_card;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, Paragraph, Wrap},
    Frame,
};
use std::ops::Range;

/// Columns that fit in `area_width`, scrolled so `focused` stays on screen.
pub fn visible_range(len: usize, focused: usize, area_width: u16, column_width: u16) -> Range<usize> {
    let fit = (area_width / column_width.max(1)).max(1) as usize;
    if len <= fit {
        return 0..len;
    }
    let start = (focused + 1).saturating_sub(fit).min(len - fit);
    start..start + fit
}

pub fn draw_board(f: &mut Frame, app: &mut App, area: Rect) {
    if app.board.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from("No columns yet."),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("[a]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::raw(" to add a subreddit."),
            ]),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(hint, area);
        return;
    }

    let column_width = app.config.column_width;
    let range = visible_range(app.board.len(), app.board.focused, area.width, column_width);
    let mut constraints: Vec<Constraint> = range.clone().map(|_| Constraint::Length(column_width)).collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let now = chrono::Utc::now().timestamp();
    let spinner = app.ui.spinner();
    let focused = app.board.focused;
    for (slot, idx) in range.enumerate() {
        let column = &mut app.board.columns[idx];
        draw_column(f, column, chunks[slot], idx == focused, now, spinner);
    }
}

fn draw_column(f: &mut Frame, column: &mut ColumnState, area: Rect, focused: bool, now: i64, spinner: char) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if focused { BorderType::Double } else { BorderType::Plain })
        .border_style(border_style)
        .title(Span::styled(
            format!(" r/{} ", column.subreddit),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .title_top(Line::from(Span::styled("[x] ", Style::default().fg(Color::DarkGray))).right_aligned());
    let inner_width = block.inner(area).width.saturating_sub(3) as usize;

    let message = match column.view() {
        ColumnView::Loading => Some(vec![
            Line::from(""),
            Line::from(format!("{} Loading posts...", spinner)),
        ]),
        ColumnView::Error(msg) => Some(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Error loading r/{}", column.subreddit),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(msg.to_string(), Style::default().fg(Color::DarkGray))),
            Line::from(""),
            Line::from(Span::styled("[r] Retry", Style::default().fg(Color::Black).bg(Color::Red))),
        ]),
        ColumnView::Empty => Some(vec![Line::from(""), Line::from("No posts found")]),
        ColumnView::Posts(_) => None,
    };

    match message {
        Some(lines) => {
            let para = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(para, area);
        }
        None => {
            let items: Vec<_> = column
                .posts()
                .iter()
                .map(|post| post_card(post, inner_width, now))
                .collect();
            let highlight = if focused {
                Style::default().bg(Color::Rgb(30, 40, 60))
            } else {
                Style::default()
            };
            let list = List::new(items)
                .block(block)
                .highlight_style(highlight)
                .highlight_symbol(if focused { "▌ " } else { "  " })
                .highlight_spacing(ratatui::widgets::HighlightSpacing::Always);
            f.render_stateful_widget(list, area, &mut column.list_state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_columns_fit() {
        assert_eq!(visible_range(3, 0, 200, 40), 0..3);
        assert_eq!(visible_range(0, 0, 200, 40), 0..0);
    }

    #[test]
    fn window_scrolls_to_focus() {
        assert_eq!(visible_range(6, 0, 80, 40), 0..2);
        assert_eq!(visible_range(6, 1, 80, 40), 0..2);
        assert_eq!(visible_range(6, 4, 80, 40), 3..5);
        assert_eq!(visible_range(6, 5, 80, 40), 4..6);
    }

    #[test]
    fn narrow_terminal_still_shows_one() {
        assert_eq!(visible_range(4, 2, 10, 40), 2..3);
    }
}
