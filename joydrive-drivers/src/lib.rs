//! Hardware driver implementations
//!
//! Concrete drivers over the traits in joydrive-hal:
//!
//! - Pin helpers and the status indicator bank
//! - Digital potentiometer bus (two-byte chip-select framed writes)
//! - Diagnostic serial transmit and number formatting
//! - Receive interrupt callback feeding the ring buffer
//! - Adapter from `embedded-hal` digital pins

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod digipot;
pub mod eh;
pub mod pin;
pub mod serial;

#[cfg(test)]
mod mock;

pub use digipot::{BusTransaction, PotBank, PotBus};
pub use eh::EhPin;
pub use pin::{configure_output, Button, Indicators};
pub use serial::{RxInterrupt, SerialTx};
