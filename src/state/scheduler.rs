//! Deferred effect scheduling.
//!
//! All delayed behavior in the application (provider replies, the typing
//! indicator, device connection, periodic vitals refresh) is expressed as a
//! scheduled `Effect` with a cancellable handle. The event loop drains due
//! effects on each tick, so every effect observes whatever state exists at
//! its own fire time. There is no ordering guarantee between independent
//! timers.

use std::time::{Duration, Instant};

/// Specifying the deferred effect types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The simulated device finished connecting.
    DeviceConnected,
    /// Refresh the streamed vitals readings.
    VitalsRefresh,
    /// Accrue a random number of steps.
    StepsAccrual,
    /// Pick a canned provider reply and start composing it.
    ProviderReply,
    /// Start composing a specific provider message (typing indicator).
    ProviderCompose { text: String },
    /// Deliver a composed provider message into the thread.
    DeliverProviderMessage { text: String },
}

/// Opaque token identifying a scheduled effect.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct EffectHandle(u64);

struct Entry {
    handle: EffectHandle,
    fire_at: Instant,
    every: Option<Duration>,
    effect: Effect,
}

/// Tick-driven scheduler for deferred and repeating effects.
///
pub struct Scheduler {
    entries: Vec<Entry>,
    next_handle: u64,
}

impl Scheduler {
    /// Return a new empty scheduler.
    ///
    pub fn new() -> Scheduler {
        Scheduler {
            entries: vec![],
            next_handle: 0,
        }
    }

    /// Schedule a one-shot effect after `delay`.
    ///
    pub fn schedule(&mut self, delay: Duration, effect: Effect) -> EffectHandle {
        self.insert(delay, None, effect)
    }

    /// Schedule a repeating effect every `interval`, first firing one
    /// interval from now.
    ///
    pub fn schedule_repeating(&mut self, interval: Duration, effect: Effect) -> EffectHandle {
        self.insert(interval, Some(interval), effect)
    }

    fn insert(&mut self, delay: Duration, every: Option<Duration>, effect: Effect) -> EffectHandle {
        let handle = EffectHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            fire_at: Instant::now() + delay,
            every,
            effect,
        });
        handle
    }

    /// Cancel a scheduled effect. Cancelling an already-fired or unknown
    /// handle is a safe no-op.
    ///
    pub fn cancel(&mut self, handle: EffectHandle) {
        self.entries.retain(|entry| entry.handle != handle);
    }

    /// Whether the handle still refers to a pending effect.
    ///
    pub fn is_scheduled(&self, handle: EffectHandle) -> bool {
        self.entries.iter().any(|entry| entry.handle == handle)
    }

    /// Remove and return every effect due as of `now`, ordered by fire
    /// time. Repeating effects are rescheduled for their next interval.
    ///
    pub fn take_due(&mut self, now: Instant) -> Vec<Effect> {
        let mut due: Vec<(Instant, Effect)> = vec![];
        let mut remaining: Vec<Entry> = vec![];

        for mut entry in self.entries.drain(..) {
            if entry.fire_at <= now {
                due.push((entry.fire_at, entry.effect.clone()));
                if let Some(every) = entry.every {
                    entry.fire_at += every;
                    remaining.push(entry);
                }
            } else {
                remaining.push(entry);
            }
        }

        self.entries = remaining;
        due.sort_by_key(|(fire_at, _)| *fire_at);
        due.into_iter().map(|(_, effect)| effect).collect()
    }

    /// Number of pending entries.
    ///
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn later(seconds: u64) -> Instant {
        Instant::now() + Duration::from_secs(seconds)
    }

    #[test]
    fn test_one_shot_fires_once() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::from_secs(2), Effect::DeviceConnected);

        assert!(scheduler.take_due(Instant::now()).is_empty());
        assert_eq!(
            scheduler.take_due(later(3)),
            vec![Effect::DeviceConnected]
        );
        assert!(scheduler.take_due(later(10)).is_empty());
    }

    #[test]
    fn test_due_effects_ordered_by_fire_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::from_secs(5), Effect::VitalsRefresh);
        scheduler.schedule(Duration::from_secs(1), Effect::ProviderReply);

        assert_eq!(
            scheduler.take_due(later(6)),
            vec![Effect::ProviderReply, Effect::VitalsRefresh]
        );
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(Duration::from_secs(1), Effect::ProviderReply);
        scheduler.cancel(handle);
        assert!(scheduler.take_due(later(2)).is_empty());
    }

    #[test]
    fn test_cancel_after_firing_is_noop() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(Duration::from_secs(1), Effect::ProviderReply);
        assert_eq!(scheduler.take_due(later(2)).len(), 1);
        scheduler.cancel(handle);
        assert_eq!(scheduler.len(), 0);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(Duration::from_secs(1), Effect::ProviderReply);
        scheduler.cancel(handle);
        scheduler.cancel(handle);
        assert_eq!(scheduler.len(), 0);
    }

    #[test]
    fn test_repeating_effect_reschedules() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule_repeating(Duration::from_secs(10), Effect::VitalsRefresh);

        assert_eq!(scheduler.take_due(later(11)), vec![Effect::VitalsRefresh]);
        assert!(scheduler.is_scheduled(handle));
        assert_eq!(scheduler.take_due(later(21)), vec![Effect::VitalsRefresh]);
        assert!(scheduler.is_scheduled(handle));
    }

    #[test]
    fn test_repeating_effect_cancellable_between_fires() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule_repeating(Duration::from_secs(10), Effect::VitalsRefresh);
        assert_eq!(scheduler.take_due(later(11)).len(), 1);
        scheduler.cancel(handle);
        assert!(scheduler.take_due(later(60)).is_empty());
    }
}
