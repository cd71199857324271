use super::Frame;
use crate::state::{DeviceStatus, State};
use crate::ui::widgets::{spinner, styling};
use crate::utils::text_processing::group_thousands;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Render the overview section: greeting, vitals cards, step progress,
/// and the device sync status.
///
pub fn overview(frame: &mut Frame, area: Rect, state: &State) {
    let theme = state.get_theme();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    let greeting = Paragraph::new(format!(
        "Welcome back, {}",
        state.session().display_name
    ))
    .style(styling::normal_text_style(theme))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(greeting, rows[0]);

    vitals_cards(frame, rows[1], state);

    let progress = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Daily Steps")
                .border_style(styling::normal_block_border_style(theme)),
        )
        .gauge_style(styling::active_field_style(theme))
        .label(format!(
            "{} / {} steps",
            group_thousands(state.steps()),
            group_thousands(state.step_goal() as u64)
        ))
        .percent(state.steps_percentage() as u16);
    frame.render_widget(progress, rows[2]);

    device_status(frame, rows[3], state);
}

fn vitals_cards(frame: &mut Frame, area: Rect, state: &State) {
    let theme = state.get_theme();
    let vitals = state.vitals();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let cards = [
        ("Heart Rate", format!("{} BPM", vitals.heart_rate)),
        (
            "Blood Pressure",
            format!("{}/{} mmHg", vitals.systolic, vitals.diastolic),
        ),
        ("Temperature", format!("{:.1} \u{b0}F", vitals.temperature)),
        ("Oxygen", format!("{}%", vitals.oxygen)),
    ];
    for (index, (title, value)) in cards.iter().enumerate() {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                value.clone(),
                styling::active_field_style(theme),
            )),
            Line::from(Span::styled(
                format!("Updated {}", state.vitals_updated_text()),
                styling::muted_text_style(theme),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(*title)
                .border_style(styling::normal_block_border_style(theme)),
        );
        frame.render_widget(card, columns[index]);
    }
}

fn device_status(frame: &mut Frame, area: Rect, state: &State) {
    let theme = state.get_theme();
    let line = match state.device_status() {
        DeviceStatus::Disconnected => Line::from(vec![
            Span::styled("\u{25cf} ", styling::muted_text_style(theme)),
            Span::styled("Device disconnected", styling::secondary_text_style(theme)),
            Span::styled("  (c to connect)", styling::muted_text_style(theme)),
        ]),
        DeviceStatus::Connecting => Line::from(vec![
            Span::styled(
                format!("{} ", spinner::frame(state.spinner_index())),
                styling::active_field_style(theme),
            ),
            Span::styled("Connecting...", styling::secondary_text_style(theme)),
        ]),
        DeviceStatus::Connected => Line::from(vec![
            Span::styled(
                "\u{25cf} ",
                styling::severity_style(theme, crate::state::Severity::Success),
            ),
            Span::styled(
                "Device connected, streaming vitals",
                styling::secondary_text_style(theme),
            ),
            Span::styled("  (c to disconnect)", styling::muted_text_style(theme)),
        ]),
    };
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Device Sync")
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(widget, area);
}
