use crate::events::effects;
use crate::state::{Modal, Section, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
};
use log::*;
use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    tx_clone.send(Event::Input(key)).unwrap();
                }
            }
            tx_clone.send(Event::Tick).unwrap();
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State, effects: &mut effects::Handler) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => match event {
                KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                // The login screen, modals and the message composer each
                // capture input before any global key is considered.
                _ if !state.session().signed_in => Self::handle_auth_key(state, event),
                _ if state.active_modal().is_some() => Self::handle_modal_key(state, event),
                _ if state.is_message_input_mode() => Self::handle_message_key(state, event),
                KeyEvent {
                    code: KeyCode::Char('q'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyEvent {
                    code: KeyCode::Char(c @ '1'..='5'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    let index = c as usize - '1' as usize;
                    if let Some(section) = Section::all().get(index) {
                        debug!("Processing navigate to section event '{:?}'...", event);
                        state.navigate_to(*section);
                    }
                }
                KeyEvent {
                    code: KeyCode::Right,
                    ..
                } => {
                    debug!("Processing next section event '{:?}'...", event);
                    state.cycle_section(true);
                }
                KeyEvent {
                    code: KeyCode::Left,
                    ..
                } => {
                    debug!("Processing previous section event '{:?}'...", event);
                    state.cycle_section(false);
                }
                KeyEvent {
                    code: KeyCode::Char('d'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    debug!("Processing toggle debug mode event '{:?}'...", event);
                    state.toggle_debug_mode();
                }
                KeyEvent {
                    code: KeyCode::Char('z'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    debug!("Processing dismiss notification event '{:?}'...", event);
                    state.dismiss_oldest_notification();
                }
                KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    debug!("Processing toggle device event '{:?}'...", event);
                    state.toggle_device();
                }
                _ => Self::handle_section_key(state, event),
            },
            Event::Tick => {
                for effect in state.on_tick(Instant::now()) {
                    effects.apply(state, effect);
                }
            }
        }
        Ok(true)
    }

    /// Keys on the login / registration screen.
    ///
    fn handle_auth_key(state: &mut State, event: KeyEvent) {
        let form = state.auth_form_mut();
        match event {
            KeyEvent {
                code: KeyCode::Char('r'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => {
                debug!("Processing toggle auth mode event '{:?}'...", event);
                form.toggle_mode();
            }
            KeyEvent {
                code: KeyCode::Tab, ..
            }
            | KeyEvent {
                code: KeyCode::Down,
                ..
            } => form.next_field(),
            KeyEvent {
                code: KeyCode::BackTab,
                ..
            }
            | KeyEvent {
                code: KeyCode::Up, ..
            } => form.prev_field(),
            KeyEvent {
                code: KeyCode::Backspace,
                ..
            } => form.backspace(),
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => {
                debug!("Processing auth submit event '{:?}'...", event);
                state.submit_auth();
            }
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::NONE,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::SHIFT,
                ..
            } => form.push_char(c),
            _ => {
                debug!("Skipping processing of terminal event '{:?}'...", event);
            }
        }
    }

    /// Keys while a modal form is open.
    ///
    fn handle_modal_key(state: &mut State, event: KeyEvent) {
        let modal = match state.active_modal() {
            Some(modal) => modal,
            None => return,
        };
        match event {
            KeyEvent {
                code: KeyCode::Esc, ..
            } => {
                debug!("Processing close modal event '{:?}'...", event);
                state.close_modal();
            }
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => {
                debug!("Processing modal submit event '{:?}'...", event);
                match modal {
                    Modal::Goal => state.submit_goal(),
                    Modal::Medication => state.submit_medication(),
                    Modal::Appointment => state.submit_appointment(),
                    Modal::DataSharing => state.save_data_sharing(),
                }
            }
            KeyEvent {
                code: KeyCode::Tab, ..
            }
            | KeyEvent {
                code: KeyCode::Down,
                ..
            } => match modal {
                Modal::Goal => state.goal_form_mut().next_field(),
                Modal::Medication => state.medication_form_mut().next_field(),
                Modal::Appointment => state.appointment_form_mut().next_field(),
                Modal::DataSharing => {}
            },
            KeyEvent {
                code: KeyCode::BackTab,
                ..
            }
            | KeyEvent {
                code: KeyCode::Up, ..
            } => match modal {
                Modal::Goal => state.goal_form_mut().prev_field(),
                Modal::Medication => state.medication_form_mut().prev_field(),
                Modal::Appointment => state.appointment_form_mut().prev_field(),
                Modal::DataSharing => {}
            },
            KeyEvent {
                code: KeyCode::Backspace,
                ..
            } => match modal {
                Modal::Goal => state.goal_form_mut().backspace(),
                Modal::Medication => state.medication_form_mut().backspace(),
                Modal::Appointment => state.appointment_form_mut().backspace(),
                Modal::DataSharing => {}
            },
            KeyEvent {
                code: KeyCode::Char('a'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } if modal == Modal::Medication => {
                debug!("Processing add dose time event '{:?}'...", event);
                state.medication_form_mut().add_time();
            }
            KeyEvent {
                code: KeyCode::Char('d'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } if modal == Modal::Medication => {
                debug!("Processing remove dose time event '{:?}'...", event);
                state.medication_form_mut().remove_time();
            }
            KeyEvent {
                code: KeyCode::Left,
                ..
            }
            | KeyEvent {
                code: KeyCode::Right,
                ..
            } if modal == Modal::Appointment => {
                state
                    .appointment_form_mut()
                    .cycle_provider(crate::data::mock::PROVIDERS.len());
            }
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::NONE,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::SHIFT,
                ..
            } => match modal {
                Modal::Goal => state.goal_form_mut().push_char(c),
                Modal::Medication => state.medication_form_mut().push_char(c),
                Modal::Appointment => state.appointment_form_mut().push_char(c),
                Modal::DataSharing => {}
            },
            _ => {
                debug!("Skipping processing of terminal event '{:?}'...", event);
            }
        }
    }

    /// Keys while composing a message to the provider.
    ///
    fn handle_message_key(state: &mut State, event: KeyEvent) {
        match event {
            KeyEvent {
                code: KeyCode::Esc, ..
            } => {
                debug!("Processing leave message input event '{:?}'...", event);
                state.set_message_input_mode(false);
            }
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => {
                debug!("Processing send message event '{:?}'...", event);
                state.send_message();
            }
            KeyEvent {
                code: KeyCode::Backspace,
                ..
            } => state.message_backspace(),
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::NONE,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::SHIFT,
                ..
            } => state.add_message_char(c),
            _ => {
                debug!("Skipping processing of terminal event '{:?}'...", event);
            }
        }
    }

    /// Keys whose meaning depends on the active section.
    ///
    fn handle_section_key(state: &mut State, event: KeyEvent) {
        let section = match state.current_section() {
            Some(section) => section,
            None => return,
        };
        match event {
            KeyEvent {
                code: KeyCode::Char('p'),
                modifiers: KeyModifiers::NONE,
                ..
            } if section == Section::Health => {
                debug!("Processing cycle vitals period event '{:?}'...", event);
                state.cycle_vitals_period();
            }
            KeyEvent {
                code: KeyCode::Char('m'),
                modifiers: KeyModifiers::NONE,
                ..
            } if section == Section::Health => {
                debug!("Processing open medication modal event '{:?}'...", event);
                state.open_modal(Modal::Medication);
            }
            KeyEvent {
                code: KeyCode::Char('v'),
                modifiers: KeyModifiers::NONE,
                ..
            } if section == Section::Health => {
                debug!("Processing download care plan event '{:?}'...", event);
                state.download_care_plan();
            }
            KeyEvent {
                code: KeyCode::Char('a'),
                modifiers: KeyModifiers::NONE,
                ..
            } if section == Section::Goals => {
                debug!("Processing open goal modal event '{:?}'...", event);
                state.open_modal(Modal::Goal);
            }
            KeyEvent {
                code: KeyCode::Char('a'),
                modifiers: KeyModifiers::NONE,
                ..
            } if section == Section::Communication => {
                debug!("Processing open appointment modal event '{:?}'...", event);
                state.open_modal(Modal::Appointment);
            }
            KeyEvent {
                code: KeyCode::Char('i'),
                modifiers: KeyModifiers::NONE,
                ..
            } if section == Section::Communication => {
                debug!("Processing enter message input event '{:?}'...", event);
                state.set_message_input_mode(true);
            }
            KeyEvent {
                code: KeyCode::Tab, ..
            } if section == Section::Communication => {
                debug!("Processing select provider event '{:?}'...", event);
                state.select_provider(true);
            }
            KeyEvent {
                code: KeyCode::Char('g'),
                modifiers: KeyModifiers::NONE,
                ..
            } if section == Section::Settings => {
                debug!("Processing open data sharing modal event '{:?}'...", event);
                state.open_modal(Modal::DataSharing);
            }
            KeyEvent {
                code: KeyCode::Char('x'),
                modifiers: KeyModifiers::NONE,
                ..
            } if section == Section::Settings => {
                debug!("Processing sign out event '{:?}'...", event);
                state.sign_out();
            }
            _ => {
                debug!("Skipping processing of terminal event '{:?}'...", event);
            }
        }
    }
}
