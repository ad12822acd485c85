//! Event log pane rendering

use crate::ui::app::{EventLog, LogKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn style_for(kind: LogKind) -> Style {
    match kind {
        LogKind::Room => Style::default()
            .fg(DEFAULT_THEME.room_name)
            .add_modifier(Modifier::BOLD),
        LogKind::Clue => Style::default().fg(DEFAULT_THEME.clue),
        LogKind::Suspect => Style::default().fg(DEFAULT_THEME.suspect),
        LogKind::Notice => Style::default().fg(DEFAULT_THEME.comment),
        LogKind::Verdict => Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
    }
}

/// Render the event log pane. `scroll_offset` of `usize::MAX` pins it to the bottom.
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    log: &EventLog,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Investigation Log ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if log.is_empty() {
        let paragraph = Paragraph::new("(nothing yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let total_items = log.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let items: Vec<ListItem> = log
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|entry| ListItem::new(entry.text.as_str()).style(style_for(entry.kind)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
