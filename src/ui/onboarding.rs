//! Profile onboarding modal

use super::components::{render_button, render_modal, BUTTON_HEIGHT};
use super::forms::{draw_field, draw_form_error, FIELD_HEIGHT};
use crate::app::App;
use crate::controller::RequestOwner;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

const MODAL_WIDTH: u16 = 56;

/// Draw the modal over whatever is on screen. Nothing is drawn once
/// onboarding is done.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.onboarding.view();
    if !view.visible {
        return;
    }

    let field_rows = view.fields.len() as u16 * FIELD_HEIGHT;
    // borders + margin + fields + error + button
    let height = 2 + 2 + field_rows + 1 + BUTTON_HEIGHT;
    let inner = render_modal(frame, view.title, MODAL_WIDTH, height);

    let mut constraints: Vec<Constraint> = view
        .fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(1)); // Error
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    for (idx, field) in view.fields.iter().enumerate() {
        draw_field(frame, chunks[idx], field, view.active_field == idx);
    }

    let buttons_row = view.fields.len();
    draw_form_error(frame, chunks[buttons_row], view.error);

    if let Some(action) = view.action {
        let button_area = Rect {
            width: chunks[buttons_row + 1].width.min(22),
            ..chunks[buttons_row + 1]
        };
        render_button(
            frame,
            button_area,
            action.label(),
            view.active_field == buttons_row,
            !app.is_busy(RequestOwner::Onboarding),
        );
    }
}
