//! RP2040 implementations of the joydrive HAL traits
//!
//! Wraps embassy-rp drivers (and, for the diagnostic UART, the raw
//! register block) so the board-agnostic drivers can run on the RP2040:
//!
//! - GPIO: runtime-configurable output and plain input pins
//! - SPI: blocking master for the potentiometer bus
//! - UART: register-level transmit/receive for the interrupt-fed link
//! - ADC: 8-bit sampling of the analog inputs

#![no_std]

pub mod adc;
pub mod gpio;
pub mod spi;
pub mod uart;

pub use adc::sample_u8;
pub use gpio::{FlexPin, InPin};
pub use spi::BlockingSpi;
pub use uart::{embassy_uart_config, RawUart};
