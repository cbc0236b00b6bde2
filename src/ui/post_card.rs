//! One post rendered as a multi-line list item.

use crate::model::Post;
use crate::ui::time_format::format_age;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};
use textwrap::{wrap, Options as WrapOptions};

/// "999", "1.0k", "2.5k".
pub fn format_score(score: i64) -> String {
    if score >= 1000 {
        format!("{:.1}k", score as f64 / 1000.0)
    } else {
        score.to_string()
    }
}

/// Wraps on display width, so wide (CJK, emoji) titles stay inside the column.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    wrap(text, WrapOptions::new(width.max(1)))
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.into_owned())
        .collect()
}

pub fn post_card_lines(post: &Post, width: usize, now: i64) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = wrap_text(&post.title, width)
        .into_iter()
        .map(|l| {
            Line::from(Span::styled(
                l,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    if post.display_thumbnail().is_some() {
        lines.push(Line::from(Span::styled(
            "[thumbnail]",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
        )));
    }

    lines.push(Line::from(vec![
        Span::styled(format!("u/{}", post.author), Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(
            format!("▲ {}", format_score(post.score)),
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("✉ {}", post.num_comments), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(
            format_age(now, post.created_utc),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    lines.push(Line::from(""));
    lines
}

pub fn post_card(post: &Post, width: usize, now: i64) -> ListItem<'static> {
    ListItem::new(post_card_lines(post, width, now))
}
