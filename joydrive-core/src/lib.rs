//! Board-agnostic core logic for the joydrive controller
//!
//! This crate holds everything that sits on the interrupt/main-loop
//! boundary and does not depend on a particular chip:
//!
//! - Interrupt-fed receive ring buffer for the diagnostic link
//! - Shared state record with single-writer access handles
//! - Digit emission for the diagnostic number output
//! - Diagnostic line assembly
//! - Controller configuration types

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod format;
pub mod line;
pub mod ring;
pub mod state;

pub use config::{ConfigError, ControllerConfig, PotChannels};
pub use format::Radix;
pub use line::{Line, LineBuffer};
pub use ring::{RxConsumer, RxProducer, RxRing, EMPTY_SENTINEL};
pub use state::{
    BlinkSelector, DriveMode, Leds, SharedState, StateReader, StateSnapshot, StateWriter,
};
