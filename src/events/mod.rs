//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Terminal events: user input and the UI tick
//! - Effect events: deferred simulations coming due (provider replies,
//!   device connection, periodic vitals refresh)

pub mod effects;
pub mod terminal;
