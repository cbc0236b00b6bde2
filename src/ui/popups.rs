//! Popups: add-subreddit prompt, notifications, quit confirmation.

use ratatui::{Frame, layout::{Alignment, Rect}, style::{Color, Modifier, Style}, widgets::{Block, Paragraph, Borders, BorderType, Clear, Wrap}, text::{Line, Span}};
use unicode_width::UnicodeWidthStr;
use crate::app::App;

const PROMPT_PREFIX: &str = "r/";

/// Fixed-height box centered on screen, `percent_x` of the width wide.
fn centered_box(r: Rect, percent_x: u16, height: u16) -> Rect {
    let width = (r.width as u32 * percent_x as u32 / 100) as u16;
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width.saturating_sub(width)) / 2,
        y: r.y + (r.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Column of the prompt cursor, counted in terminal cells.
pub fn prompt_cursor_x(inner: Rect, input: &str) -> Option<u16> {
    let offset = (PROMPT_PREFIX.width() + input.width()) as u16;
    let x = inner.x.saturating_add(offset);
    (x < inner.x + inner.width).then_some(x)
}

pub fn draw_input_popup(f: &mut Frame, app: &App) {
    let area = centered_box(f.area(), 50, 5);
    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" Add subreddit "),
            Span::styled("(without r/) ", Style::default().fg(Color::DarkGray)),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Double);
    let inner_area = block.inner(area);
    let input = Paragraph::new(Line::from(vec![
        Span::styled(PROMPT_PREFIX, Style::default().fg(Color::Yellow)),
        Span::raw(app.ui.input.as_str()),
    ]))
    .block(block);
    f.render_widget(Clear, area);
    f.render_widget(input, area);

    if let Some(cursor_x) = prompt_cursor_x(inner_area, &app.ui.input) {
        f.set_cursor_position((cursor_x, inner_area.y));
    }
}

pub fn draw_notification_popup(f: &mut Frame, message: &str) {
    let area = centered_box(f.area(), 40, 5);
    let block = Block::default()
        .title("Notice")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow));
    let para = Paragraph::new(Span::styled(message.to_string(), Style::default().add_modifier(Modifier::BOLD)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(Clear, area);
    f.render_widget(para, area);
}

pub fn draw_quit_confirm_popup(f: &mut Frame, app: &App) {
    let area = centered_box(f.area(), 40, 7);
    let selected = |idx: usize, color: Color| {
        if app.ui.quit_confirm_selected == idx {
            Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        }
    };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Quit subdeck?", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ Yes ]", selected(0, Color::Green)),
            Span::raw("  "),
            Span::styled("[ No ]", selected(1, Color::Red)),
        ]),
    ];
    let block = Block::default()
        .title("Are you sure?")
        .borders(Borders::ALL)
        .border_type(BorderType::Double);
    let para = Paragraph::new(lines).block(block).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_is_centered_and_clamped() {
        let screen = Rect::new(0, 0, 100, 4);
        let area = centered_box(screen, 40, 7);
        assert_eq!(area, Rect::new(30, 0, 40, 4));
    }

    #[test]
    fn cursor_counts_cells_not_chars() {
        let inner = Rect::new(10, 3, 30, 1);
        assert_eq!(prompt_cursor_x(inner, "rust"), Some(16));
        // two double-width characters take four cells
        assert_eq!(prompt_cursor_x(inner, "日本"), Some(16));
    }

    #[test]
    fn cursor_hidden_when_input_overflows() {
        let inner = Rect::new(0, 0, 6, 1);
        assert_eq!(prompt_cursor_x(inner, "abc"), Some(5));
        assert_eq!(prompt_cursor_x(inner, "abcd"), None);
    }
}
