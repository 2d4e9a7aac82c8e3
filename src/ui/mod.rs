//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod login;
mod onboarding;
mod recharge;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Recharge => recharge::draw(frame, main_area, app),
        View::AdminLogin => login::draw(frame, main_area, app),
        View::Dashboard => login::draw_dashboard(frame, main_area, app),
    }

    // The onboarding modal covers the recharge page only
    if app.is_modal_open() {
        onboarding::draw(frame, app);
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
