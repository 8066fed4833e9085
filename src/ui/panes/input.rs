//! Input line rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const PROMPT: &str = "=> ";

/// Render the prompt and the text being edited, and place the cursor after it
pub fn render_input_line(frame: &mut Frame, area: Rect, input: &str, is_recalled: bool) {
    let block = Block::default()
        .title(" Input ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.primary));

    let text_style = if is_recalled {
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    // Keep the tail visible when the input is wider than the box
    let inner_width = area.width.saturating_sub(2) as usize;
    let room = inner_width.saturating_sub(PROMPT.len() + 1);
    let char_count = input.chars().count();
    let shown: String = input.chars().skip(char_count.saturating_sub(room)).collect();
    let cursor_x = area.x + 1 + (PROMPT.len() + shown.chars().count()) as u16;

    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(shown, text_style),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
    frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
}
