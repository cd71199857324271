use crate::data::charts::VitalsPeriod;
use crate::data::mock::{self, ChatMessage, Sender, VitalsSample};
use crate::session::{Session, SessionStore};
use crate::ui::SPINNER_FRAME_COUNT;
use chrono::Local;
use log::*;
use ratatui::layout::Rect;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::device::{DeviceStatus, DeviceSyncController};
use super::forms::{AppointmentForm, AuthForm, AuthMode, GoalForm, MedicationForm};
use super::navigation::{Modal, Section, SectionRouter};
use super::notifications::{NotificationHandle, NotificationQueue, Severity};
use super::scheduler::{Effect, Scheduler};

/// Delay before the provider starts replying to a patient message.
pub const PROVIDER_REPLY_DELAY: Duration = Duration::from_secs(2);

/// How long the typing indicator shows before a provider message lands.
pub const TYPING_DELAY: Duration = Duration::from_millis(1500);

/// Delay before an appointment confirmation arrives in the thread.
pub const APPOINTMENT_CONFIRM_DELAY: Duration = Duration::from_secs(3);

/// Interval between step-count accruals.
pub const STEPS_INTERVAL: Duration = Duration::from_secs(5);

const INITIAL_STEPS: u64 = 4_523;
const MAX_DEBUG_ENTRIES: usize = 500;

/// Houses data representative of application state.
///
pub struct State {
    session_store: SessionStore,
    session: Session,
    router: SectionRouter,
    notifications: NotificationQueue,
    scheduler: Scheduler,
    device: DeviceSyncController,
    vitals: VitalsSample,
    vitals_updated: Option<Instant>,
    steps: u64,
    step_goal: u32,
    messages: Vec<ChatMessage>,
    provider_typing: bool,
    selected_provider: usize,
    message_input: String,
    message_input_mode: bool,
    auth_form: AuthForm,
    goal_form: GoalForm,
    medication_form: MedicationForm,
    appointment_form: AppointmentForm,
    active_modal: Option<Modal>,
    vitals_period: VitalsPeriod,
    spinner_index: usize,
    debug_mode: bool,
    debug_entries: Vec<String>,
    log_buffer: Arc<Mutex<Vec<String>>>,
    theme: crate::ui::Theme,
    terminal_size: Rect,
}

impl State {
    /// Build the initial application state: read the persisted session
    /// once, register the navigable sections, seed the demo data, and
    /// start the step accrual timer.
    ///
    pub fn new(
        session_store: SessionStore,
        step_goal: u32,
        theme: crate::ui::Theme,
        log_buffer: Arc<Mutex<Vec<String>>>,
    ) -> State {
        let session = session_store.load();

        let mut router = SectionRouter::new();
        for section in Section::all() {
            router.register_with_validator(section, Box::new(|s: &Session| s.signed_in));
        }
        if session.signed_in {
            router.activate(Section::Overview, &session);
        }

        let mut scheduler = Scheduler::new();
        scheduler.schedule_repeating(STEPS_INTERVAL, Effect::StepsAccrual);

        State {
            session_store,
            session,
            router,
            notifications: NotificationQueue::new(),
            scheduler,
            device: DeviceSyncController::new(),
            vitals: VitalsSample::baseline(),
            vitals_updated: None,
            steps: INITIAL_STEPS,
            step_goal,
            messages: mock::seed_thread(Local::now()),
            provider_typing: false,
            selected_provider: 0,
            message_input: String::new(),
            message_input_mode: false,
            auth_form: AuthForm::new(),
            goal_form: GoalForm::new(),
            medication_form: MedicationForm::new(),
            appointment_form: AppointmentForm::new(),
            active_modal: None,
            vitals_period: VitalsPeriod::Day,
            spinner_index: 0,
            debug_mode: false,
            debug_entries: vec![],
            log_buffer,
            theme,
            terminal_size: Rect::default(),
        }
    }

    // --- tick ---

    /// Advance per-tick state and return the deferred effects that came
    /// due. The caller feeds them to the effects handler so each effect
    /// observes state as of its own fire time.
    ///
    pub fn on_tick(&mut self, now: Instant) -> Vec<Effect> {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        self.notifications.sweep(now);
        self.drain_logs();
        self.scheduler.take_due(now)
    }

    fn drain_logs(&mut self) {
        if let Ok(mut buffer) = self.log_buffer.lock() {
            self.debug_entries.append(&mut buffer);
        }
        if self.debug_entries.len() > MAX_DEBUG_ENTRIES {
            let excess = self.debug_entries.len() - MAX_DEBUG_ENTRIES;
            self.debug_entries.drain(..excess);
        }
    }

    pub fn spinner_index(&self) -> usize {
        self.spinner_index
    }

    // --- session ---

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn auth_form(&self) -> &AuthForm {
        &self.auth_form
    }

    pub fn auth_form_mut(&mut self) -> &mut AuthForm {
        &mut self.auth_form
    }

    /// Submit the login or registration form. Validation failures surface
    /// as a danger notification and nothing else changes.
    ///
    pub fn submit_auth(&mut self) {
        if let Err(message) = self.auth_form.validate() {
            self.notify(message, Severity::Danger);
            return;
        }

        let email = self.auth_form.email.clone();
        let name = self.auth_form.name.clone();
        let (session, message) = match self.auth_form.mode {
            AuthMode::Login => (
                self.session_store.sign_in(&email, ""),
                "Logged in successfully!",
            ),
            AuthMode::Register => (
                self.session_store.sign_in(&email, &name),
                "Account created successfully!",
            ),
        };
        self.session = session;
        self.auth_form.reset();
        self.router.activate(Section::Overview, &self.session);
        self.notify(message, Severity::Success);
    }

    /// Sign out: clear persisted credentials, drop streamed data, and
    /// return to the login screen.
    ///
    pub fn sign_out(&mut self) {
        self.session_store.sign_out();
        self.session = Session::signed_out();
        self.device.disconnect(&mut self.scheduler);
        self.message_input_mode = false;
        self.active_modal = None;
        self.notify("You have been logged out successfully", Severity::Info);
    }

    // --- navigation ---

    pub fn navigate_to(&mut self, section: Section) {
        self.router.activate(section, &self.session);
    }

    pub fn current_section(&self) -> Option<Section> {
        self.router.current()
    }

    pub fn sections(&self) -> Vec<Section> {
        self.router.sections()
    }

    pub fn nav_index(&self) -> Option<usize> {
        self.router.nav_index()
    }

    /// Activate the section after (or before) the current one in
    /// navigation order.
    ///
    pub fn cycle_section(&mut self, forward: bool) {
        let sections = self.router.sections();
        if sections.is_empty() {
            return;
        }
        let len = sections.len();
        let index = self.router.nav_index().unwrap_or(0);
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        self.router.activate(sections[next], &self.session);
    }

    // --- notifications ---

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NotificationHandle {
        let message = message.into();
        debug!("Notification ({:?}): {}", severity, message);
        self.notifications.push(message, severity)
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Dismiss the oldest visible notification, if any.
    ///
    pub fn dismiss_oldest_notification(&mut self) {
        let handle = self.notifications.iter().next().map(|n| n.handle());
        if let Some(handle) = handle {
            self.notifications.dismiss(handle);
        }
    }

    // --- modals and forms ---

    pub fn open_modal(&mut self, modal: Modal) {
        self.active_modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub fn active_modal(&self) -> Option<Modal> {
        self.active_modal
    }

    pub fn goal_form(&self) -> &GoalForm {
        &self.goal_form
    }

    pub fn goal_form_mut(&mut self) -> &mut GoalForm {
        &mut self.goal_form
    }

    pub fn medication_form(&self) -> &MedicationForm {
        &self.medication_form
    }

    pub fn medication_form_mut(&mut self) -> &mut MedicationForm {
        &mut self.medication_form
    }

    pub fn appointment_form(&self) -> &AppointmentForm {
        &self.appointment_form
    }

    pub fn appointment_form_mut(&mut self) -> &mut AppointmentForm {
        &mut self.appointment_form
    }

    /// Saving a goal is simulated: a success notification is the only
    /// durable outcome.
    ///
    pub fn submit_goal(&mut self) {
        if let Err(message) = self.goal_form.validate() {
            self.notify(message, Severity::Danger);
            return;
        }
        let message = format!("Goal \"{}\" saved successfully!", self.goal_form.title);
        self.notify(message, Severity::Success);
        self.goal_form.reset();
        self.close_modal();
    }

    pub fn submit_medication(&mut self) {
        if let Err(message) = self.medication_form.validate() {
            self.notify(message, Severity::Danger);
            return;
        }
        let message = format!(
            "Medication \"{}\" saved successfully!",
            self.medication_form.name
        );
        self.notify(message, Severity::Success);
        self.medication_form.reset();
        self.close_modal();
    }

    /// Schedule an appointment: success notification now, confirmation
    /// message into the provider thread a few seconds later.
    ///
    pub fn submit_appointment(&mut self) {
        if let Err(message) = self.appointment_form.validate() {
            self.notify(message, Severity::Danger);
            return;
        }
        let provider = mock::PROVIDERS[self.appointment_form.provider_index % mock::PROVIDERS.len()];
        let date = self.appointment_form.formatted_date();
        let time = self.appointment_form.time.clone();
        let message = format!(
            "Appointment scheduled with {} on {} at {}",
            provider, date, time
        );
        self.notify(message, Severity::Success);

        let confirmation = format!(
            "Your appointment on {} at {} has been confirmed. \
             Please arrive 15 minutes early to complete any paperwork.",
            date, time
        );
        self.scheduler.schedule(
            APPOINTMENT_CONFIRM_DELAY,
            Effect::ProviderCompose { text: confirmation },
        );
        self.appointment_form.reset();
        self.close_modal();
    }

    pub fn save_data_sharing(&mut self) {
        self.notify("Data sharing preferences saved successfully", Severity::Success);
        self.close_modal();
    }

    pub fn download_care_plan(&mut self) {
        self.notify(
            "Care plan would be downloaded as PDF in a real application",
            Severity::Info,
        );
    }

    // --- messaging ---

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_provider_typing(&self) -> bool {
        self.provider_typing
    }

    pub fn selected_provider(&self) -> &'static str {
        mock::PROVIDERS[self.selected_provider % mock::PROVIDERS.len()]
    }

    pub fn selected_provider_index(&self) -> usize {
        self.selected_provider
    }

    pub fn select_provider(&mut self, forward: bool) {
        let count = mock::PROVIDERS.len();
        self.selected_provider = if forward {
            (self.selected_provider + 1) % count
        } else {
            (self.selected_provider + count - 1) % count
        };
    }

    pub fn is_message_input_mode(&self) -> bool {
        self.message_input_mode
    }

    pub fn set_message_input_mode(&mut self, enabled: bool) {
        self.message_input_mode = enabled;
    }

    pub fn message_input(&self) -> &str {
        &self.message_input
    }

    pub fn add_message_char(&mut self, c: char) {
        self.message_input.push(c);
    }

    pub fn message_backspace(&mut self) {
        self.message_input.pop();
    }

    /// Send the composed message. Blank input is silently ignored. A
    /// provider reply is scheduled a couple of seconds out.
    ///
    pub fn send_message(&mut self) {
        let text = self.message_input.trim().to_string();
        if text.is_empty() {
            return;
        }
        self.messages.push(ChatMessage {
            sender: Sender::Patient,
            text,
            sent_at: Local::now(),
        });
        self.message_input.clear();
        self.scheduler
            .schedule(PROVIDER_REPLY_DELAY, Effect::ProviderReply);
    }

    pub fn set_provider_typing(&mut self, typing: bool) {
        self.provider_typing = typing;
    }

    /// Deliver a composed provider message into the thread, clearing the
    /// typing indicator.
    ///
    pub fn deliver_provider_message(&mut self, text: String) {
        self.provider_typing = false;
        self.messages.push(ChatMessage {
            sender: Sender::Provider,
            text,
            sent_at: Local::now(),
        });
    }

    /// Schedule a deferred effect on behalf of an effects handler.
    ///
    pub fn schedule_effect(&mut self, delay: Duration, effect: Effect) {
        self.scheduler.schedule(delay, effect);
    }

    // --- device sync ---

    pub fn device_status(&self) -> DeviceStatus {
        self.device.status()
    }

    /// Connect or disconnect the simulated device.
    ///
    pub fn toggle_device(&mut self) {
        match self.device.status() {
            DeviceStatus::Disconnected => {
                self.device.begin_connect(&mut self.scheduler);
            }
            DeviceStatus::Connecting => {}
            DeviceStatus::Connected => {
                self.device.disconnect(&mut self.scheduler);
                self.notify("Device disconnected", Severity::Info);
            }
        }
    }

    /// The simulated connection finished: mark connected and start the
    /// vitals stream.
    ///
    pub fn device_connected(&mut self) {
        self.device.complete_connect(&mut self.scheduler);
        self.vitals_updated = Some(Instant::now());
        self.notify("Device connected successfully", Severity::Success);
    }

    pub fn refresh_vitals(&mut self, sample: VitalsSample) {
        self.vitals = sample;
        self.vitals_updated = Some(Instant::now());
    }

    pub fn vitals(&self) -> &VitalsSample {
        &self.vitals
    }

    /// Relative description of the last streamed update, or a fixed
    /// placeholder before any data has streamed in.
    ///
    pub fn vitals_updated_text(&self) -> String {
        match self.vitals_updated {
            Some(at) => crate::utils::text_processing::relative_time(at.elapsed()),
            None => "5 mins ago".to_string(),
        }
    }

    pub fn accrue_steps(&mut self, gain: u64) {
        self.steps += gain;
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn step_goal(&self) -> u32 {
        self.step_goal
    }

    pub fn steps_percentage(&self) -> u32 {
        if self.step_goal == 0 {
            return 100;
        }
        ((self.steps * 100) / self.step_goal as u64).min(100) as u32
    }

    // --- charts ---

    pub fn vitals_period(&self) -> VitalsPeriod {
        self.vitals_period
    }

    pub fn cycle_vitals_period(&mut self) {
        self.vitals_period = self.vitals_period.next();
    }

    // --- debug / presentation ---

    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn toggle_debug_mode(&mut self) {
        self.debug_mode = !self.debug_mode;
    }

    pub fn debug_entries(&self) -> &[String] {
        &self.debug_entries
    }

    pub fn get_theme(&self) -> &crate::ui::Theme {
        &self.theme
    }

    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
    }

    pub fn terminal_size(&self) -> Rect {
        self.terminal_size
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[cfg(test)]
    pub fn take_due_effects(&mut self, now: Instant) -> Vec<Effect> {
        self.scheduler.take_due(now)
    }
}
