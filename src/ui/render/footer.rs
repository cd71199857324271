use super::Frame;
use crate::state::{Section, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::Paragraph,
};

/// Render the footer with the key hints for the current context.
///
pub fn footer(frame: &mut Frame, area: Rect, state: &State) {
    let theme = state.get_theme();
    let text = if state.active_modal().is_some() {
        " Type to edit | Tab: next field | Enter: submit | Esc: cancel".to_string()
    } else if state.is_message_input_mode() {
        " Type your message | Enter: send | Esc: stop writing".to_string()
    } else {
        let section_hints = match state.current_section() {
            Some(Section::Health) => "p: period | m: medications | v: care plan | ",
            Some(Section::Goals) => "a: add goal | ",
            Some(Section::Communication) => "i: write | a: appointment | Tab: provider | ",
            Some(Section::Settings) => "g: data sharing | x: sign out | ",
            _ => "",
        };
        format!(
            " 1-5/\u{2190}\u{2192}: sections | {}c: device | z: dismiss | d: logs | q: quit",
            section_hints
        )
    };
    let widget = Paragraph::new(text).style(styling::muted_text_style(theme));
    frame.render_widget(widget, area);
}
