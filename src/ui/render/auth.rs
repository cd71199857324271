use super::Frame;
use crate::state::{AuthField, AuthMode, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

pub const BANNER: &str = r#"
        _  _          _       _
 __   _(_)| |_  __ _ | | ___ | |_  _   _ (_)
 \ \ / /| || __|/ _` || |/ __|| __|| | | || |
  \ V / | || |_| (_| || |\__ \| |_ | |_| || |
   \_/  |_| \__|\__,_||_||___/ \__| \__,_||_|
"#;

/// Render the login / registration screen.
///
pub fn auth(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let form = state.auth_form();

    let title = match form.mode {
        AuthMode::Login => "Sign In",
        AuthMode::Register => "Create Account",
    };
    let area = styling::centered_rect(50, 70, size);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(styling::active_block_title_style())
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    let banner = Paragraph::new(Text::from(BANNER))
        .style(styling::secondary_text_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(banner, rows[0]);

    let mut lines: Vec<Line> = vec![];
    for field in form.fields() {
        let (label, value, masked) = match field {
            AuthField::Name => ("Name", &form.name, false),
            AuthField::Email => ("Email", &form.email, false),
            AuthField::Password => ("Password", &form.password, true),
            AuthField::Confirm => ("Confirm Password", &form.confirm, true),
        };
        let shown = if masked {
            "\u{2022}".repeat(value.chars().count())
        } else {
            value.clone()
        };
        let style = if *field == form.field {
            styling::active_field_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>17}: ", label), style),
            Span::styled(shown, styling::normal_text_style(theme)),
        ]));
        lines.push(Line::from(""));
    }
    let fields = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(fields, rows[1]);

    let hint = match form.mode {
        AuthMode::Login => "Enter: sign in | Tab: next field | Ctrl-R: create account",
        AuthMode::Register => "Enter: register | Tab: next field | Ctrl-R: back to sign in",
    };
    let hints = Paragraph::new(hint)
        .style(styling::muted_text_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(hints, rows[2]);
}
