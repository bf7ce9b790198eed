//! Driving conversations through a compiled bot.
//!
//! The engine itself is synchronous and pure. This module owns the
//! asynchronous edges: loading and saving the parked position and handing
//! intents to whatever transport actually talks to WhatsApp.

pub mod config;
pub mod dispatch;
pub mod state;
pub mod trigger;

pub use config::SessionConfig;
pub use dispatch::*;
pub use state::*;
pub use trigger::*;
