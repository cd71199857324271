use super::Frame;
use crate::state::{Section, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::Line,
    widgets::{Block, Borders, Tabs},
};

/// Render the entire application frame for the current state.
///
pub fn all(frame: &mut Frame, state: &State) {
    let size = frame.size();

    if !state.session().signed_in {
        super::auth::auth(frame, size, state);
        super::toasts::toasts(frame, size, state);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    tabs(frame, rows[0], state);

    match state.current_section() {
        Some(Section::Overview) | None => super::overview::overview(frame, rows[1], state),
        Some(Section::Health) => super::health::health(frame, rows[1], state),
        Some(Section::Goals) => super::goals::goals(frame, rows[1], state),
        Some(Section::Communication) => {
            super::communication::communication(frame, rows[1], state)
        }
        Some(Section::Settings) => super::settings::settings(frame, rows[1], state),
    }

    super::footer::footer(frame, rows[2], state);

    if let Some(modal) = state.active_modal() {
        super::modals::modal(frame, size, state, modal);
    }

    if state.is_debug_mode() {
        super::log::log(frame, size, state);
    }

    super::toasts::toasts(frame, size, state);
}

fn tabs(frame: &mut Frame, area: ratatui::layout::Rect, state: &State) {
    let theme = state.get_theme();
    let titles: Vec<Line> = state
        .sections()
        .iter()
        .enumerate()
        .map(|(index, section)| Line::from(format!("{} {}", index + 1, section.title())))
        .collect();
    let widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Vitals")
                .border_style(styling::normal_block_border_style(theme)),
        )
        .style(styling::secondary_text_style(theme))
        .highlight_style(styling::highlight_style(theme))
        .select(state.nav_index().unwrap_or(0));
    frame.render_widget(widget, area);
}
