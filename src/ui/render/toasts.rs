use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

/// Render the visible notifications stacked in the top-right corner.
///
pub fn toasts(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let width = TOAST_WIDTH.min(size.width);
    let x = size.right().saturating_sub(width);

    for (index, notification) in state.notifications().iter().enumerate() {
        let y = size.y + 1 + index as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > size.bottom() {
            break;
        }
        let area = Rect::new(x, y, width, TOAST_HEIGHT);
        let style = styling::severity_style(theme, notification.severity());
        let widget = Paragraph::new(Span::styled(notification.message().to_string(), style))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(notification.severity().label())
                    .border_style(style),
            );
        frame.render_widget(Clear, area);
        frame.render_widget(widget, area);
    }
}
