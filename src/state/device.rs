//! Simulated wearable-device sync.
//!
//! Connecting is a two-second delay before the device reports connected and
//! a repeating vitals stream starts. The controller owns the stream handle:
//! starting a new stream always cancels the prior one first, so at most one
//! periodic updater exists at any time.

use super::scheduler::{Effect, EffectHandle, Scheduler};
use log::*;
use std::time::Duration;

/// Delay between requesting a connection and the device reporting ready.
pub const CONNECT_DELAY: Duration = Duration::from_secs(2);

/// Interval between streamed vitals refreshes.
pub const STREAM_INTERVAL: Duration = Duration::from_secs(10);

/// Specifying the device connection states.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DeviceStatus {
    Disconnected,
    Connecting,
    Connected,
}

/// Owns the simulated device connection and its periodic stream handle.
///
pub struct DeviceSyncController {
    status: DeviceStatus,
    connect_handle: Option<EffectHandle>,
    stream_handle: Option<EffectHandle>,
}

impl DeviceSyncController {
    /// Return a new disconnected controller.
    ///
    pub fn new() -> DeviceSyncController {
        DeviceSyncController {
            status: DeviceStatus::Disconnected,
            connect_handle: None,
            stream_handle: None,
        }
    }

    pub fn status(&self) -> DeviceStatus {
        self.status
    }

    /// Begin the simulated connection process. No-op while already
    /// connecting.
    ///
    pub fn begin_connect(&mut self, scheduler: &mut Scheduler) {
        if self.status == DeviceStatus::Connecting {
            return;
        }
        info!("Connecting to device...");
        self.status = DeviceStatus::Connecting;
        self.connect_handle = Some(scheduler.schedule(CONNECT_DELAY, Effect::DeviceConnected));
    }

    /// Mark the device connected and start the periodic vitals stream.
    ///
    pub fn complete_connect(&mut self, scheduler: &mut Scheduler) {
        self.status = DeviceStatus::Connected;
        self.connect_handle = None;
        self.start_stream(scheduler);
        info!("Device connected");
    }

    /// Start the repeating vitals stream, cancelling any prior stream
    /// first. At most one stream handle is live at any time.
    ///
    pub fn start_stream(&mut self, scheduler: &mut Scheduler) {
        if let Some(handle) = self.stream_handle.take() {
            scheduler.cancel(handle);
        }
        self.stream_handle =
            Some(scheduler.schedule_repeating(STREAM_INTERVAL, Effect::VitalsRefresh));
    }

    /// Disconnect, cancelling the pending connection or the active stream.
    ///
    pub fn disconnect(&mut self, scheduler: &mut Scheduler) {
        if let Some(handle) = self.connect_handle.take() {
            scheduler.cancel(handle);
        }
        if let Some(handle) = self.stream_handle.take() {
            scheduler.cancel(handle);
        }
        self.status = DeviceStatus::Disconnected;
        info!("Device disconnected");
    }

    /// Handle for the active stream, if any.
    ///
    pub fn stream_handle(&self) -> Option<EffectHandle> {
        self.stream_handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_flow() {
        let mut scheduler = Scheduler::new();
        let mut device = DeviceSyncController::new();
        assert_eq!(device.status(), DeviceStatus::Disconnected);

        device.begin_connect(&mut scheduler);
        assert_eq!(device.status(), DeviceStatus::Connecting);
        assert_eq!(scheduler.len(), 1);

        device.complete_connect(&mut scheduler);
        assert_eq!(device.status(), DeviceStatus::Connected);
        assert!(device.stream_handle().is_some());
    }

    #[test]
    fn test_starting_stream_twice_keeps_single_updater() {
        let mut scheduler = Scheduler::new();
        let mut device = DeviceSyncController::new();

        device.start_stream(&mut scheduler);
        let first = device.stream_handle().unwrap();
        device.start_stream(&mut scheduler);
        let second = device.stream_handle().unwrap();

        assert_ne!(first, second);
        assert!(!scheduler.is_scheduled(first));
        assert!(scheduler.is_scheduled(second));
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_disconnect_cancels_stream() {
        let mut scheduler = Scheduler::new();
        let mut device = DeviceSyncController::new();

        device.start_stream(&mut scheduler);
        device.disconnect(&mut scheduler);
        assert_eq!(device.status(), DeviceStatus::Disconnected);
        assert!(device.stream_handle().is_none());
        assert_eq!(scheduler.len(), 0);
    }

    #[test]
    fn test_disconnect_while_connecting_cancels_pending_connect() {
        let mut scheduler = Scheduler::new();
        let mut device = DeviceSyncController::new();

        device.begin_connect(&mut scheduler);
        device.disconnect(&mut scheduler);
        assert_eq!(device.status(), DeviceStatus::Disconnected);
        assert_eq!(scheduler.len(), 0);
    }

    #[test]
    fn test_begin_connect_twice_is_noop_while_connecting() {
        let mut scheduler = Scheduler::new();
        let mut device = DeviceSyncController::new();

        device.begin_connect(&mut scheduler);
        device.begin_connect(&mut scheduler);
        assert_eq!(scheduler.len(), 1);
    }
}
