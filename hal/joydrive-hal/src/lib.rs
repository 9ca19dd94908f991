//! Joydrive Hardware Abstraction Layer
//!
//! This crate defines the register-level hardware traits the controller
//! core is written against. A chip crate (or the firmware itself)
//! implements them for the actual silicon, and host tests implement them
//! with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  joydrive-firmware (main loop + ISR)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  joydrive-drivers (bus, serial, pins)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  joydrive-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     ▲
//!                     │ implements
//! ┌─────────────────────────────────────────┐
//! │  joydrive-hal-rp2040 (embassy-rp)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::ConfigurablePin`] - Digital I/O
//! - [`spi::SpiPeripheral`] - Synchronous serial master, one byte at a time
//! - [`uart::UartTx`], [`uart::UartRx`] - Diagnostic serial link registers
//! - [`wait::ReadyWait`] - How a driver blocks on a hardware ready flag

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;
pub mod uart;
pub mod wait;

// Re-export key traits at crate root for convenience
pub use gpio::{ConfigurablePin, InputPin, Level, OutputPin, PinDirection};
pub use spi::{SpiConfig, SpiPeripheral};
pub use uart::{UartConfig, UartRx, UartTx};
pub use wait::{BoundedSpin, ReadyWait, Spin, Timeout};
