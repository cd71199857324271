//! Application state management module.
//!
//! This module contains the core state management for the application,
//! including:
//! - Main `State` struct that holds all application data
//! - Navigation types (`Section`, `SectionRouter`, `Modal`)
//! - The notification queue and the deferred-effect scheduler
//! - Form editing state and the device-sync controller

mod device;
mod error;
mod forms;
mod navigation;
mod notifications;
mod scheduler;

pub use device::{DeviceStatus, DeviceSyncController};
pub use error::StateError;
pub use forms::{
    AppointmentField, AppointmentForm, AuthField, AuthForm, AuthMode, GoalField, GoalForm,
    MedicationField, MedicationForm,
};
pub use navigation::{Modal, Section, SectionRouter, SectionValidator};
pub use notifications::{
    Notification, NotificationHandle, NotificationQueue, Severity, DISPLAY_DURATION,
};
pub use scheduler::{Effect, EffectHandle, Scheduler};

// State struct, methods and constructor are in state_impl.rs
mod state_impl;

pub use state_impl::{
    State, APPOINTMENT_CONFIRM_DELAY, PROVIDER_REPLY_DELAY, STEPS_INTERVAL, TYPING_DELAY,
};
