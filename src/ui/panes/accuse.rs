//! Accusation and verdict pane
//!
//! Replaces the room pane once exploration is over. While the player types,
//! it shows the prompt and the name entered so far; afterwards it shows the
//! verdict, or a note that nobody was accused.

use crate::evidence::Verdict;
use crate::game::narration;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// What the pane should show
pub enum AccusationView<'a> {
    /// Name being typed
    Typing { input: &'a str, suspects: &'a [&'a str] },
    /// Judgement rendered
    Judged(&'a Verdict),
    /// The player named nobody
    Dismissed,
}

/// Render the accusation pane
pub fn render_accusation_pane(frame: &mut Frame, area: Rect, view: AccusationView) {
    let block = Block::default()
        .title(" Accusation ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(1, 1, 0, 0));

    let lines: Vec<Line> = match view {
        AccusationView::Typing { input, suspects } => vec![
            Line::from(narration::accusation_prompt(suspects)),
            Line::from(""),
            Line::from(vec![
                Span::styled("> ", Style::default().fg(DEFAULT_THEME.primary)),
                Span::styled(input, Style::default().fg(DEFAULT_THEME.suspect)),
                Span::styled("█", Style::default().fg(DEFAULT_THEME.fg)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Enter to accuse, Esc to accuse nobody",
                Style::default().fg(DEFAULT_THEME.comment),
            )),
        ],
        AccusationView::Judged(verdict) => {
            let outcome_style = if verdict.guilty {
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            };
            let report = narration::describe_verdict(verdict);
            let last = report.len().saturating_sub(1);
            report
                .into_iter()
                .enumerate()
                .map(|(i, text)| {
                    if i == last {
                        Line::from(Span::styled(text, outcome_style))
                    } else {
                        Line::from(text)
                    }
                })
                .collect()
        }
        AccusationView::Dismissed => vec![Line::from(Span::styled(
            narration::NO_ACCUSATION,
            Style::default().fg(DEFAULT_THEME.comment),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
