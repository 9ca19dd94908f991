//! SPI peripheral abstractions
//!
//! The controller only ever talks to write-only devices, one byte at a
//! time, with chip-select driven by a separate GPIO. The trait therefore
//! mirrors the data/status register pair of a simple SPI block rather
//! than a buffered bus API.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// SPI master peripheral
///
/// A transfer is started by loading the data register; completion is
/// reported by a status flag that the driver polls.
pub trait SpiPeripheral {
    /// Program the control registers for master operation
    fn configure_master(&mut self, config: &SpiConfig);

    /// Load `byte` into the data register, starting a transfer
    fn load(&mut self, byte: u8);

    /// Poll the transfer-complete flag
    ///
    /// Takes `&mut self` because on some parts reading the status and data
    /// registers is what clears the flag.
    fn transfer_complete(&mut self) -> bool;
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity and phase
    pub mode: Mode,
    /// Bit order on the wire
    pub bit_order: BitOrder,
    /// Double the clock rate (AVR SPI2X). Off for the pot bank.
    pub double_speed: bool,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 1_000_000, // 1 MHz
            mode: Mode::Mode0,
            bit_order: BitOrder::MsbFirst,
            double_speed: false,
        }
    }
}

impl SpiConfig {
    /// Clock polarity for the configured mode
    pub fn polarity(&self) -> Polarity {
        let (polarity, _) = self.mode.into();
        polarity
    }

    /// Clock phase for the configured mode
    pub fn phase(&self) -> Phase {
        let (_, phase) = self.mode.into();
        phase
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}

/// Bit order on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BitOrder {
    /// Most significant bit first
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}
