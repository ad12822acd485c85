//! Status bar rendering with keybindings and phase indicators

use crate::ui::app::Phase;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    phase: Phase,
    clues_collected: usize,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let phase_bg = match phase {
        Phase::Exploring => DEFAULT_THEME.primary,
        Phase::Accusing => DEFAULT_THEME.secondary,
        Phase::Verdict => DEFAULT_THEME.success,
    };

    let left_spans = vec![
        Span::styled(
            format!(" Clues {} ", clues_collected),
            Style::default()
                .bg(phase_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let bindings: &[(&str, &str)] = match phase {
        Phase::Exploring => &[
            (" e / ← ", " left "),
            (" d / → ", " right "),
            (" ↑/↓ ", " scroll "),
            (" ⇥ ", " focus "),
            (" s ", " stop "),
        ],
        Phase::Accusing => &[(" ↵ ", " accuse "), (" ⌫ ", " erase "), (" esc ", " nobody ")],
        Phase::Verdict => &[(" any key ", " exit ")],
    };

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    let badge = match phase {
        Phase::Exploring => " EXPLORING ",
        Phase::Accusing => " ⌨ ACCUSE ",
        Phase::Verdict => " CASE CLOSED ",
    };
    right_spans.push(Span::styled("│", sep_style));
    right_spans.push(Span::styled(
        badge,
        Style::default()
            .bg(phase_bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
