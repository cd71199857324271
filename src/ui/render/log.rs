use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem},
};

/// Render the debug log overlay with the most recent entries.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let area = styling::centered_rect(84, 80, size);
    frame.render_widget(Clear, area);

    let visible = area.height.saturating_sub(2) as usize;
    let entries = state.debug_entries();
    let start = entries.len().saturating_sub(visible);
    let items: Vec<ListItem> = entries[start..]
        .iter()
        .map(|entry| ListItem::new(Span::styled(entry.clone(), styling::normal_text_style(theme))))
        .collect();

    let widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Logs (d to close)")
            .border_style(styling::active_block_border_style(theme)),
    );
    frame.render_widget(widget, area);
}
