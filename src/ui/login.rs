//! Admin login and dashboard rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::forms::{draw_field, draw_form_error, FIELD_HEIGHT};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the admin login form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.login.view();

    let block = Block::default()
        .title(" Admin Login ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Username
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(1),             // Error
            Constraint::Length(BUTTON_HEIGHT), // Login
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    draw_field(frame, chunks[0], view.username, view.active_field == 0);
    draw_field(frame, chunks[1], view.password, view.active_field == 1);
    draw_form_error(frame, chunks[2], view.error);

    let button_area = Rect {
        width: chunks[3].width.min(24),
        ..chunks[3]
    };
    render_button(
        frame,
        button_area,
        view.button_label,
        view.active_field == 2,
        view.button_enabled,
    );
}

/// Draw the page a successful login redirected to
pub fn draw_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let url = app
        .state
        .dashboard_url
        .as_deref()
        .unwrap_or("(no redirect)");

    let content = vec![
        Line::from(Span::styled(
            "Signed in",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Dashboard: ", Style::default().fg(Color::Gray)),
            Span::styled(url, Style::default().fg(Color::Cyan)),
        ]),
    ];

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Admin Dashboard ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, area);
}
