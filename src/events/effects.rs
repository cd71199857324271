//! Deferred effect application.
//!
//! The scheduler hands back plain `Effect` values when they come due; this
//! handler owns the randomness and turns each effect into state mutations.

use crate::data::mock::{self, VitalsSample};
use crate::state::{Effect, State, TYPING_DELAY};
use log::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Specify struct for applying due effects to state.
///
pub struct Handler {
    rng: StdRng,
}

impl Handler {
    /// Return new instance with its own entropy source.
    ///
    pub fn new() -> Self {
        Handler {
            rng: StdRng::from_entropy(),
        }
    }

    #[cfg(test)]
    fn seeded(seed: u64) -> Self {
        Handler {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Apply a due effect to state.
    ///
    pub fn apply(&mut self, state: &mut State, effect: Effect) {
        debug!("Applying due effect '{:?}'...", effect);
        match effect {
            Effect::DeviceConnected => state.device_connected(),
            Effect::VitalsRefresh => {
                let sample = VitalsSample::random(&mut self.rng);
                state.refresh_vitals(sample);
            }
            Effect::StepsAccrual => {
                let gain = mock::random_step_gain(&mut self.rng);
                state.accrue_steps(gain as u64);
            }
            Effect::ProviderReply => {
                let text = mock::random_reply(&mut self.rng).to_string();
                self.compose(state, text);
            }
            Effect::ProviderCompose { text } => self.compose(state, text),
            Effect::DeliverProviderMessage { text } => state.deliver_provider_message(text),
        }
    }

    /// Show the typing indicator and schedule delivery of the message.
    ///
    fn compose(&mut self, state: &mut State, text: String) {
        state.set_provider_typing(true);
        state.schedule_effect(TYPING_DELAY, Effect::DeliverProviderMessage { text });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryCredentialStore, SessionStore};
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    fn test_state() -> State {
        let store = SessionStore::new(Box::new(MemoryCredentialStore::new()));
        State::new(
            store,
            10_000,
            crate::ui::Theme::default(),
            Arc::new(Mutex::new(vec![])),
        )
    }

    #[test]
    fn test_vitals_refresh_replaces_sample() {
        let mut state = test_state();
        let mut handler = Handler::seeded(1);
        let before = state.vitals().clone();
        // With these ranges a refreshed sample virtually never equals the
        // baseline exactly; apply a few to be safe.
        for _ in 0..5 {
            handler.apply(&mut state, Effect::VitalsRefresh);
        }
        assert_ne!(state.vitals(), &before);
    }

    #[test]
    fn test_steps_accrual_increases_steps() {
        let mut state = test_state();
        let mut handler = Handler::seeded(1);
        let before = state.steps();
        handler.apply(&mut state, Effect::StepsAccrual);
        let gained = state.steps() - before;
        assert!((10..50).contains(&gained));
    }

    #[test]
    fn test_provider_reply_flow() {
        let mut state = test_state();
        let mut handler = Handler::seeded(1);

        handler.apply(&mut state, Effect::ProviderReply);
        assert!(state.is_provider_typing());

        let due = state.take_due_effects(Instant::now() + Duration::from_secs(2));
        assert_eq!(due.len(), 1);
        let seeded_len = state.messages().len();
        handler.apply(&mut state, due.into_iter().next().unwrap());

        assert!(!state.is_provider_typing());
        assert_eq!(state.messages().len(), seeded_len + 1);
        let delivered = state.messages().last().unwrap();
        assert!(mock::CANNED_REPLIES.contains(&delivered.text.as_str()));
    }

    #[test]
    fn test_compose_delivers_exact_text() {
        let mut state = test_state();
        let mut handler = Handler::seeded(1);

        handler.apply(
            &mut state,
            Effect::ProviderCompose {
                text: "Your appointment has been confirmed.".to_string(),
            },
        );
        let due = state.take_due_effects(Instant::now() + Duration::from_secs(2));
        handler.apply(&mut state, due.into_iter().next().unwrap());

        assert_eq!(
            state.messages().last().unwrap().text,
            "Your appointment has been confirmed."
        );
    }
}
