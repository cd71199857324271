use crate::config::Config;
use crate::events::effects::Handler as EffectHandler;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::CustomLogger;
use crate::session::{CredentialStore, FileCredentialStore, MemoryCredentialStore, SessionStore};
use crate::state::State;
use crate::ui::Theme;
use anyhow::{anyhow, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};
use std::sync::{Arc, Mutex};

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution. With `demo` set, credentials
    /// live in memory only and nothing is persisted between runs.
    ///
    pub fn start(config: Config, demo: bool) -> Result<()> {
        let log_buffer: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(vec![]));
        log::set_boxed_logger(Box::new(CustomLogger::new(log_buffer.clone())))?;
        log::set_max_level(LevelFilter::Debug);

        info!("Starting application...");
        let store: Box<dyn CredentialStore + Send> = if demo {
            Box::new(MemoryCredentialStore::new())
        } else {
            let directory = config
                .directory()
                .ok_or(anyhow!("Failed to resolve configuration directory"))?;
            Box::new(FileCredentialStore::open(&directory))
        };
        let mut session_store = SessionStore::new(store);
        if demo {
            // Demo runs boot straight into the dashboard with a generated profile
            let profile = crate::data::mock::demo_profile();
            session_store.sign_in(&profile.email, &profile.name);
        }
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!("Unknown theme '{}'; falling back to default", config.theme_name);
            Theme::default()
        });

        let mut app = App {
            state: State::new(session_store, config.step_goal, theme, log_buffer),
            config,
        };
        app.start_ui()?;

        // Save config on exit
        if let Err(e) = app.config.save() {
            error!("Failed to save config on exit: {}", e);
        }

        info!("Exiting application...");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        let mut effect_handler = EffectHandler::new();
        loop {
            if let Ok(size) = terminal.backend().size() {
                self.state.set_terminal_size(size);
            };
            terminal.draw(|frame| crate::ui::render(frame, &self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state, &mut effect_handler)? {
                debug!("Received application exit request.");
                break;
            }
        }

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

        Ok(())
    }
}
