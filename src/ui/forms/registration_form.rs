//! Student registration form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::document::{classes, ids};
use crate::state::{FieldId, Host};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Widest the form card gets
const FORM_WIDTH: u16 = 60;

/// Rows for the success banner
const BANNER_HEIGHT: u16 = 3;

/// Height of the whole card including its borders and margins
pub fn form_height() -> u16 {
    FIELD_HEIGHT * FieldId::ALL.len() as u16 + BUTTON_HEIGHT + BANNER_HEIGHT + 4
}

/// Center the card horizontally and vertically inside `area`
pub fn centered(area: Rect) -> Rect {
    let width = FORM_WIDTH.min(area.width);
    let height = form_height().min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the registration form card
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let card = centered(area);

    let block = Block::default()
        .title(" Student Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, card);

    let mut constraints: Vec<Constraint> = FieldId::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Register
    constraints.push(Constraint::Length(BANNER_HEIGHT)); // Banner
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(card);

    let host = app.form.host();
    for field in FieldId::ALL {
        let is_active = app.active_field() == Some(field);
        draw_field(
            frame,
            chunks[field.index()],
            host,
            field,
            is_active,
            app.mask_passwords,
        );
    }

    let buttons = FieldId::ALL.len();
    render_button(frame, chunks[buttons], "Register", app.is_submit_active());

    if host.has_class(ids::SUCCESS_MESSAGE, classes::SHOW) {
        draw_banner(frame, chunks[buttons + 1], &host.text_content(ids::SUCCESS_MESSAGE));
    }
}

/// Draw the success banner
fn draw_banner(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(banner, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_large_area() {
        let area = Rect::new(0, 0, 120, 60);
        let card = centered(area);
        assert_eq!(card.width, FORM_WIDTH);
        assert_eq!(card.height, form_height());
        assert_eq!(card.x, (120 - FORM_WIDTH) / 2);
    }

    #[test]
    fn test_centered_clamps_to_small_area() {
        let area = Rect::new(0, 0, 40, 10);
        let card = centered(area);
        assert_eq!(card, area);
    }
}
