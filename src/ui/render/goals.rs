use super::Frame;
use crate::data::charts;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::utils::text_processing::group_thousands;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Render the goals section: progress toward each active goal and the
/// live step count.
///
pub fn goals(frame: &mut Frame, area: Rect, state: &State) {
    let theme = state.get_theme();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(area);

    let progress = charts::goal_progress_chart();
    super::charts::bar_chart(frame, rows[0], &progress, theme, "Goal Progress");

    let summary = Paragraph::new(format!(
        "Steps today: {} of {} ({}%)  |  a: add goal",
        group_thousands(state.steps()),
        group_thousands(state.step_goal() as u64),
        state.steps_percentage()
    ))
    .style(styling::secondary_text_style(theme))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(summary, rows[1]);
}
