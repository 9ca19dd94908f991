//! Shared state record
//!
//! The single point of contact between the main loop and the output
//! stage. Every field is written by exactly one producer, which is
//! enforced by handing out a single [`StateWriter`].

pub mod record;
pub mod types;

pub use record::{SharedState, StateReader, StateSnapshot, StateWriter};
pub use types::{BlinkSelector, DriveMode, Leds, JOY_STOP, SPEED_STOP};
