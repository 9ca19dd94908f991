//! Value types stored in the shared state record

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Joystick axis value with the stick centred
pub const JOY_STOP: u8 = 127;

/// Speed knob value for a standstill
pub const SPEED_STOP: u8 = 0;

/// Vehicle drive mode, cycled by the mode button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum DriveMode {
    /// Drive disabled
    #[default]
    Off = 0,
    /// First drive mode
    One = 1,
    /// Second drive mode
    Two = 2,
}

impl DriveMode {
    /// Get the mode as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a mode from a byte value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(DriveMode::Off),
            1 => Some(DriveMode::One),
            2 => Some(DriveMode::Two),
            _ => None,
        }
    }

    /// The mode after this one: Off → One → Two → Off
    pub fn next(self) -> Self {
        match self {
            DriveMode::Off => DriveMode::One,
            DriveMode::One => DriveMode::Two,
            DriveMode::Two => DriveMode::Off,
        }
    }

    /// Check if the drive is enabled in this mode
    pub fn is_active(self) -> bool {
        self != DriveMode::Off
    }
}

/// Status LED bitmap (`---43210`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Leds(u8);

impl Leds {
    pub const LED0: Leds = Leds(0x01);
    pub const LED1: Leds = Leds(0x02);
    pub const LED2: Leds = Leds(0x04);
    pub const LED3: Leds = Leds(0x08);
    pub const LED4: Leds = Leds(0x10);
    /// Every LED off
    pub const ALL_OFF: Leds = Leds(0);
    /// Every LED on
    pub const ALL_ON: Leds = Leds(0x1F);

    /// Number of LEDs in the bitmap
    pub const COUNT: usize = 5;

    /// Build a bitmap, ignoring bits above LED4
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Leds(bits & Self::ALL_ON.0)
    }

    /// Raw bit value
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Bitmap with only LED `index` lit
    ///
    /// Returns `None` for an index past LED4.
    pub fn single(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Leds(1 << index))
        } else {
            None
        }
    }

    /// Check if all LEDs in `other` are lit
    pub fn contains(self, other: Leds) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check if LED `index` is lit
    pub fn is_lit(self, index: usize) -> bool {
        index < Self::COUNT && self.0 & (1 << index) != 0
    }

    /// This bitmap with the LEDs in `other` lit
    pub fn with(self, other: Leds) -> Self {
        Leds(self.0 | other.0)
    }

    /// This bitmap with the LEDs in `other` dark
    pub fn without(self, other: Leds) -> Self {
        Leds(self.0 & !other.0)
    }
}

impl core::ops::BitOr for Leds {
    type Output = Leds;

    fn bitor(self, rhs: Leds) -> Leds {
        self.with(rhs)
    }
}

/// Blink pattern selector
///
/// Opaque to the core; the pattern table lives with the output stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlinkSelector(pub u8);

impl BlinkSelector {
    /// No blinking
    pub const STEADY: BlinkSelector = BlinkSelector(0);
}
