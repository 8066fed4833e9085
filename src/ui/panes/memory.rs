//! Memory pane rendering
//!
//! One row per allocated name in allocation order, which is also address
//! order. A slot that has an address but was never written shows `[unset]`.

use super::scroll::{clamp_offset, pane_block, visible_height};
use crate::memory::{Binding, EvaluationContext};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Placeholder for an allocated slot with no stored value
pub const UNSET_MARKER: &str = "[unset]";

/// Column width used for names; longer names push the row out
const NAME_WIDTH: usize = 10;

pub(crate) fn binding_line(binding: Binding<'_>) -> Line<'_> {
    let value = match binding.value {
        Some(value) => Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.number)),
        None => Span::styled(
            UNSET_MARKER,
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::ITALIC),
        ),
    };

    Line::from(vec![
        Span::styled(
            format!("{:<width$}", binding.name, width = NAME_WIDTH),
            Style::default().fg(DEFAULT_THEME.name),
        ),
        Span::styled(
            format!(" @{} ", binding.address),
            Style::default().fg(DEFAULT_THEME.address),
        ),
        value,
    ])
}

/// Render the memory pane
pub fn render_memory_pane(
    frame: &mut Frame,
    area: Rect,
    context: &EvaluationContext,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Memory ", is_focused);

    if context.is_empty() {
        let paragraph = Paragraph::new(format!("(no variables; next address {})", context.base()))
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let all_items: Vec<ListItem> = context.bindings().map(binding_line).map(ListItem::new).collect();

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

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_binding_line() {
        let line = binding_line(Binding {
            name: "p",
            address: 1001,
            value: Some(1000),
        });
        assert_eq!(text(&line), "p          @1001 1000");

        let line = binding_line(Binding {
            name: "q",
            address: 1002,
            value: None,
        });
        assert_eq!(text(&line), "q          @1002 [unset]");
    }
}
