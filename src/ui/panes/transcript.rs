//! Transcript pane rendering

use super::scroll::{clamp_offset, pane_block, visible_height};
use crate::session::TranscriptEntry;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Lines shown for one transcript entry: the input as typed, then either
/// `rendered → value` or the error
pub(crate) fn entry_lines(entry: &TranscriptEntry, show_unparsed: bool) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(vec![
        Span::styled("=> ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(entry.input.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
    ])];

    match &entry.result {
        Ok(value) => {
            let mut spans = vec![Span::raw("   ")];
            if show_unparsed {
                if let Some(rendered) = &entry.rendered {
                    spans.push(Span::styled(
                        rendered.as_str(),
                        Style::default().fg(DEFAULT_THEME.primary),
                    ));
                    spans.push(Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)));
                }
            }
            spans.push(Span::styled(
                value.to_string(),
                Style::default().fg(DEFAULT_THEME.success),
            ));
            lines.push(Line::from(spans));
        }
        Err(message) => {
            lines.push(Line::from(Span::styled(
                format!("   Error: {}", message),
                Style::default().fg(DEFAULT_THEME.error),
            )));
        }
    }

    lines
}

/// Render the transcript pane
pub fn render_transcript_pane<'a>(
    frame: &mut Frame,
    area: Rect,
    entries: impl Iterator<Item = &'a TranscriptEntry>,
    show_unparsed: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Transcript ", is_focused);

    let all_items: Vec<ListItem> = entries
        .flat_map(|entry| entry_lines(entry, show_unparsed))
        .map(ListItem::new)
        .collect();

    if all_items.is_empty() {
        let paragraph = Paragraph::new("(type an expression below)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let total_items = all_items.len();
    let visible_height = visible_height(area);
    clamp_offset(scroll_offset, total_items, visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
