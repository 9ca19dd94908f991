//! GPIO pins

use embassy_rp::gpio::{Flex, Input};
use joydrive_hal::{ConfigurablePin, InputPin, OutputPin, PinDirection};

/// Pin whose direction is switched at runtime
///
/// The RP2040 keeps the output latch while the pin is an input, so
/// [`ConfigurablePin::configure_output`] loads the level before the
/// output enable and the pin never drives a stale value.
pub struct FlexPin<'d> {
    pin: Flex<'d>,
    direction: PinDirection,
}

impl<'d> FlexPin<'d> {
    /// Wrap `pin`, starting as an input
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_as_input();
        Self {
            pin,
            direction: PinDirection::Input,
        }
    }
}

impl OutputPin for FlexPin<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

impl ConfigurablePin for FlexPin<'_> {
    fn set_direction(&mut self, direction: PinDirection) {
        match direction {
            PinDirection::Input => self.pin.set_as_input(),
            PinDirection::Output => self.pin.set_as_output(),
        }
        self.direction = direction;
    }

    fn direction(&self) -> PinDirection {
        self.direction
    }
}

/// Input pin
pub struct InPin<'d> {
    pin: Input<'d>,
}

impl<'d> InPin<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl InputPin for InPin<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
