use super::Frame;
use crate::data::charts;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Render the health section: the vitals chart for the selected period,
/// the sleep breakdown, and the resting heart rate trend.
///
pub fn health(frame: &mut Frame, area: Rect, state: &State) {
    let theme = state.get_theme();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[0]);

    let period = state.vitals_period();
    let vitals = charts::vitals_chart(period);
    super::charts::line_chart(
        frame,
        columns[0],
        &vitals,
        theme,
        &format!("Vitals ({}) - p to change period", period.title()),
    );

    let sleep = charts::sleep_chart();
    super::charts::breakdown(frame, columns[1], &sleep, theme, "Last Night's Sleep");

    let trends = charts::trends_chart();
    super::charts::line_chart(
        frame,
        rows[1],
        &trends,
        theme,
        "30-Day Resting Heart Rate - m: medications, v: care plan",
    );
}
