//! Sample data module.
//!
//! Everything the dashboard displays is simulated: canned chart datasets,
//! randomly generated vitals readings, and a seeded provider conversation.

pub mod charts;
pub mod mock;
