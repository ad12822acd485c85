//! Current room pane
//!
//! Shows where the player stands, the route taken from the entry hall, what
//! the room holds and where each exit leads.

use crate::game::constants::{KEY_LEFT, KEY_RIGHT};
use crate::game::Session;
use crate::mansion::{Exit, RoomId};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

fn exit_line<'a>(session: &'a Session, key: char, exit: Exit, target: Option<RoomId>) -> Line<'a> {
    let key_span = Span::styled(
        format!(" {} ", key),
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    );
    let label = format!("{:<6}", exit.to_string());
    match target.and_then(|id| session.mansion().room(id)) {
        Some(room) => Line::from(vec![
            key_span,
            Span::raw(label),
            Span::styled(room.name(), Style::default().fg(DEFAULT_THEME.room_name)),
        ]),
        None => Line::from(vec![
            key_span,
            Span::raw(label),
            Span::styled("(no way through)", Style::default().fg(DEFAULT_THEME.comment)),
        ]),
    }
}

/// Render the current room pane
pub fn render_room_pane(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .title(" Mansion ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let Ok(room) = session.current_room() else {
        let paragraph = Paragraph::new("(lost outside the mansion)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.error));
        frame.render_widget(paragraph, area);
        return;
    };

    let route = session
        .mansion()
        .path_to(session.position())
        .unwrap_or_default()
        .iter()
        .map(|exit| exit.to_string())
        .collect::<Vec<_>>();
    let route_text = if route.is_empty() {
        "entry".to_string()
    } else {
        format!("entry → {}", route.join(" → "))
    };

    let mut lines = vec![
        Line::from(Span::styled(
            room.name(),
            Style::default()
                .fg(DEFAULT_THEME.room_name)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(route_text, Style::default().fg(DEFAULT_THEME.comment))),
        Line::from(""),
    ];

    match room.clue() {
        Some(clue) => lines.push(Line::from(vec![
            Span::raw("Clue: "),
            Span::styled(format!("\"{}\"", clue), Style::default().fg(DEFAULT_THEME.clue)),
        ])),
        None => lines.push(Line::from(Span::styled(
            "Nothing of interest here.",
            Style::default().fg(DEFAULT_THEME.comment),
        ))),
    }

    lines.push(Line::from(""));
    lines.push(exit_line(session, KEY_LEFT, Exit::Left, room.left()));
    lines.push(exit_line(session, KEY_RIGHT, Exit::Right, room.right()));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
