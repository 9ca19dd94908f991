//! Adapter for `embedded-hal` 1.0 digital pins
//!
//! Chip HALs hand out pins implementing `embedded_hal::digital`. Wrapping
//! one in [`EhPin`] makes it usable wherever the drivers expect a
//! [`joydrive_hal::OutputPin`]. Only infallible pins are accepted, which
//! covers on-chip GPIO.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin as EhOutputPin;
use joydrive_hal::{Level, OutputPin};

/// `embedded-hal` output pin with a cached level
pub struct EhPin<P> {
    pin: P,
    high: bool,
}

impl<P: EhOutputPin<Error = Infallible>> EhPin<P> {
    /// Wrap `pin`, driving it to `initial`
    pub fn new(pin: P, initial: Level) -> Self {
        let mut wrapped = Self { pin, high: false };
        wrapped.set_level(initial);
        wrapped
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: EhOutputPin<Error = Infallible>> OutputPin for EhPin<P> {
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(never) => match never {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
