//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific code.

/// Logic level of a digital signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    #[default]
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if this is the high level
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    /// High impedance input (reset state on most parts)
    #[default]
    Input,
    /// Push-pull output
    Output,
}

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific level
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Pin whose direction is configured at runtime
///
/// This is the pin driver primitive: [`configure_output`] sets direction
/// and initial level as one logical operation.
///
/// [`configure_output`]: ConfigurablePin::configure_output
pub trait ConfigurablePin: OutputPin {
    /// Change the pin direction
    fn set_direction(&mut self, direction: PinDirection);

    /// Get the current pin direction
    fn direction(&self) -> PinDirection;

    /// Make the pin an output driving `initial`
    ///
    /// The output latch is loaded before the output driver is enabled, so
    /// the pin moves straight from its previous state to `initial` and
    /// never drives a stale latch value. Implementations that can set both
    /// in one register write should override this.
    fn configure_output(&mut self, initial: Level) {
        self.set_level(initial);
        self.set_direction(PinDirection::Output);
    }
}
