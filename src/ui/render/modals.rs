use super::Frame;
use crate::data::mock;
use crate::state::{
    AppointmentField, GoalField, MedicationField, Modal, State,
};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the open modal form over the current section.
///
pub fn modal(frame: &mut Frame, size: Rect, state: &State, modal: Modal) {
    match modal {
        Modal::Goal => goal(frame, size, state),
        Modal::Medication => medication(frame, size, state),
        Modal::Appointment => appointment(frame, size, state),
        Modal::DataSharing => data_sharing(frame, size, state),
    }
}

fn field_line<'a>(
    theme: &Theme,
    label: &'a str,
    value: String,
    active: bool,
) -> Line<'a> {
    let label_style = if active {
        styling::active_field_style(theme)
    } else {
        styling::muted_text_style(theme)
    };
    let shown = if active {
        format!("{}\u{2588}", value)
    } else {
        value
    };
    Line::from(vec![
        Span::styled(format!("{:>12}: ", label), label_style),
        Span::styled(shown, styling::normal_text_style(theme)),
    ])
}

fn form_window(frame: &mut Frame, size: Rect, theme: &Theme, title: &str) -> Rect {
    let area = styling::centered_rect(50, 60, size);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .title_style(styling::active_block_title_style())
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn goal(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let form = state.goal_form();
    let inner = form_window(frame, size, theme, "Add Health Goal");

    let lines = vec![
        Line::from(""),
        field_line(theme, "Title", form.title.clone(), form.field == GoalField::Title),
        Line::from(""),
        field_line(
            theme,
            "Category",
            form.category.clone(),
            form.field == GoalField::Category,
        ),
        Line::from(""),
        field_line(theme, "Target", form.target.clone(), form.field == GoalField::Target),
        Line::from(""),
        field_line(theme, "Unit", form.unit.clone(), form.field == GoalField::Unit),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn medication(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let form = state.medication_form();
    let inner = form_window(frame, size, theme, "Add Medication");

    let mut lines = vec![
        Line::from(""),
        field_line(theme, "Name", form.name.clone(), form.field == MedicationField::Name),
        Line::from(""),
        field_line(
            theme,
            "Dosage",
            form.dosage.clone(),
            form.field == MedicationField::Dosage,
        ),
        Line::from(""),
        field_line(theme, "Unit", form.unit.clone(), form.field == MedicationField::Unit),
        Line::from(""),
    ];
    for (index, time) in form.times.iter().enumerate() {
        lines.push(field_line(
            theme,
            "Dose Time",
            time.clone(),
            form.field == MedicationField::Time(index),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Ctrl-A: add dose time | Ctrl-D: remove dose time",
        styling::muted_text_style(theme),
    )));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn appointment(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let form = state.appointment_form();
    let inner = form_window(frame, size, theme, "Schedule Appointment");

    let provider = mock::PROVIDERS[form.provider_index % mock::PROVIDERS.len()];
    let provider_active = form.field == AppointmentField::Provider;
    let provider_value = if provider_active {
        format!("\u{2190} {} \u{2192}", provider)
    } else {
        provider.to_string()
    };
    let lines = vec![
        Line::from(""),
        field_line(theme, "Provider", provider_value, provider_active),
        Line::from(""),
        field_line(theme, "Type", form.kind.clone(), form.field == AppointmentField::Kind),
        Line::from(""),
        field_line(
            theme,
            "Date",
            form.date.clone(),
            form.field == AppointmentField::Date,
        ),
        Line::from(Span::styled(
            "              YYYY-MM-DD",
            styling::muted_text_style(theme),
        )),
        Line::from(""),
        field_line(theme, "Time", form.time.clone(), form.field == AppointmentField::Time),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn data_sharing(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let inner = form_window(frame, size, theme, "Data Sharing Preferences");

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Share vitals with your care team and allow anonymized",
            styling::normal_text_style(theme),
        )),
        Line::from(Span::styled(
            "usage in research studies.",
            styling::normal_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: save preferences | Esc: cancel",
            styling::muted_text_style(theme),
        )),
    ])
    .wrap(Wrap { trim: false });
    frame.render_widget(text, inner);
}
