//! Collected clues pane

use crate::evidence::ClueLedger;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the ledger in alphabetical order
pub fn render_clues_pane(
    frame: &mut Frame,
    area: Rect,
    ledger: &ClueLedger,
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
        .title(format!(" Collected Clues ({}) ", ledger.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if ledger.is_empty() {
        let paragraph = Paragraph::new("(no clues yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let total_items = ledger.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let items: Vec<ListItem> = ledger
        .in_order()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|clue| {
            ListItem::new(Line::from(vec![
                Span::styled("• ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(clue, Style::default().fg(DEFAULT_THEME.clue)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
