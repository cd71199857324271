mod all;
mod auth;
mod charts;
mod communication;
mod footer;
mod goals;
mod health;
mod log;
mod modals;
mod overview;
mod settings;
mod toasts;

use super::*;

pub use all::all as render;
