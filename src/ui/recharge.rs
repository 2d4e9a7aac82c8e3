//! Recharge form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::forms::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the recharge form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.recharge.view();

    let block = Block::default()
        .title(" Recharge ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Mobile
            Constraint::Length(FIELD_HEIGHT),  // Amount
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    draw_field(frame, chunks[0], view.mobile, view.active_field == 0);
    draw_field(frame, chunks[1], view.amount, view.active_field == 1);

    let button_area = Rect {
        width: chunks[2].width.min(20),
        ..chunks[2]
    };
    render_button(
        frame,
        button_area,
        "Recharge",
        view.active_field == 2,
        view.submit_enabled,
    );

    let help = Paragraph::new(Span::styled(
        "Mobile with country code, amount from 10 to 100.",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(help, chunks[3]);
}
