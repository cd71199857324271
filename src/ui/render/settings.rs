use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::utils::text_processing::group_thousands;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the settings section: profile details and account actions.
///
pub fn settings(frame: &mut Frame, area: Rect, state: &State) {
    let theme = state.get_theme();
    let session = state.session();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    let profile = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Name:  ", styling::muted_text_style(theme)),
            Span::styled(session.display_name.clone(), styling::normal_text_style(theme)),
        ]),
        Line::from(vec![
            Span::styled("Email: ", styling::muted_text_style(theme)),
            Span::styled(session.email.clone(), styling::normal_text_style(theme)),
        ]),
        Line::from(vec![
            Span::styled("Theme: ", styling::muted_text_style(theme)),
            Span::styled(state.get_theme().name.clone(), styling::normal_text_style(theme)),
        ]),
        Line::from(vec![
            Span::styled("Step goal: ", styling::muted_text_style(theme)),
            Span::styled(
                group_thousands(state.step_goal() as u64),
                styling::normal_text_style(theme),
            ),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Profile")
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(profile, rows[0]);

    let actions = Paragraph::new(vec![
        Line::from(Span::styled(
            "g: data sharing preferences",
            styling::secondary_text_style(theme),
        )),
        Line::from(Span::styled("x: sign out", styling::secondary_text_style(theme))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Account")
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(actions, rows[1]);
}
