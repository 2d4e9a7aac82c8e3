//! Layout components (header, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the header with one tab per top-level view
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = View::tabs()
        .iter()
        .enumerate()
        .map(|(idx, view)| Line::from(format!("F{} {}", idx + 1, view.title())))
        .collect();

    // The dashboard sits under the login tab
    let selected = match app.state.current_view {
        View::Recharge => 0,
        View::AdminLogin | View::Dashboard => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .title(" Mobile Recharge ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view, app.is_modal_open());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // In-flight request takes precedence over the last status message
    if let Some(pending) = app.in_flight().last() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            pending.describe(),
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View, modal_open: bool) -> &'static str {
    match view {
        View::Recharge if modal_open => "Tab:next  Enter:continue",
        View::Recharge => "Tab:next  Enter:recharge  F2:admin",
        View::AdminLogin => "Tab:next  Enter:login  Esc:back  F1:recharge",
        View::Dashboard => "Esc:recharge  F1:recharge",
    }
}
