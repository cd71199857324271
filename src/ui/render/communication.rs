use super::Frame;
use crate::data::mock::{self, Sender as MessageSender};
use crate::state::State;
use crate::ui::widgets::styling;
use crate::utils::text_processing::format_clock_time;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the communication section: the provider roster, the message
/// thread, and the composer.
///
pub fn communication(frame: &mut Frame, area: Rect, state: &State) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(area);

    providers(frame, columns[0], state);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(columns[1]);
    thread(frame, rows[0], state);
    composer(frame, rows[1], state);
}

fn providers(frame: &mut Frame, area: Rect, state: &State) {
    let theme = state.get_theme();
    let items: Vec<ListItem> = mock::PROVIDERS
        .iter()
        .enumerate()
        .map(|(index, provider)| {
            let style = if index == state.selected_provider_index() {
                styling::highlight_style(theme)
            } else {
                styling::normal_text_style(theme)
            };
            ListItem::new(Span::styled(*provider, style))
        })
        .collect();
    let widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Providers (Tab)")
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(widget, area);
}

fn thread(frame: &mut Frame, area: Rect, state: &State) {
    let theme = state.get_theme();
    let mut items: Vec<ListItem> = state
        .messages()
        .iter()
        .map(|message| {
            let (speaker, style) = match message.sender {
                MessageSender::Patient => ("You", styling::active_field_style(theme)),
                MessageSender::Provider => (
                    state.selected_provider(),
                    styling::secondary_text_style(theme),
                ),
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(speaker, style),
                    Span::styled(
                        format!("  {}", format_clock_time(&message.sent_at)),
                        styling::muted_text_style(theme),
                    ),
                ]),
                Line::from(Span::styled(
                    message.text.clone(),
                    styling::normal_text_style(theme),
                )),
                Line::from(""),
            ])
        })
        .collect();

    if state.is_provider_typing() {
        items.push(ListItem::new(Span::styled(
            format!("{} is typing...", state.selected_provider()),
            styling::muted_text_style(theme),
        )));
    }

    let widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Messages")
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(widget, area);
}

fn composer(frame: &mut Frame, area: Rect, state: &State) {
    let theme = state.get_theme();
    let (text, border) = if state.is_message_input_mode() {
        (
            format!("{}\u{2588}", state.message_input()),
            styling::active_block_border_style(theme),
        )
    } else {
        (
            "i to write a message, a to schedule an appointment".to_string(),
            styling::normal_block_border_style(theme),
        )
    };
    let widget = Paragraph::new(text)
        .style(styling::normal_text_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("New Message")
                .border_style(border),
        );
    frame.render_widget(widget, area);
}
