//! Field rendering utilities for forms

use crate::state::document::classes;
use crate::state::{FieldId, Host};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus its error line
pub const FIELD_HEIGHT: u16 = 4;

/// Bullet used for masked password characters
const MASK_CHAR: char = '•';

/// Border colour for a field, derived from its state classes
pub fn border_color(host: &impl Host, field: FieldId, is_active: bool) -> Color {
    let input = field.input_id();
    if host.has_class(input, classes::ERROR_INPUT) {
        Color::Red
    } else if host.has_class(input, classes::SUCCESS_INPUT) {
        Color::Green
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Value as shown on screen
pub fn display_value(value: &str, field: FieldId, mask: bool) -> String {
    if mask && field.is_secret() {
        value.chars().map(|_| MASK_CHAR).collect()
    } else {
        value.to_string()
    }
}

/// Draw one registration field with its error slot underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    host: &impl Host,
    field: FieldId,
    is_active: bool,
    mask: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Error slot
        ])
        .split(area);

    let color = border_color(host, field, is_active);
    let value = display_value(&host.value(field.input_id()), field, mask);
    let cursor = if is_active { "▌" } else { "" };

    let title_style = if is_active {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    let input = Paragraph::new(Line::from(vec![
        Span::raw(value),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .title(Span::styled(format!(" {} ", field.label()), title_style))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(input, chunks[0]);

    let slot = field.error_id();
    if host.has_class(slot, classes::SHOW) {
        let message = host.text_content(slot);
        let error = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(error, chunks[1]);
    }
}
