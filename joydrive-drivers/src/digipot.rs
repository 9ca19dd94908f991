//! Digital potentiometer bus driver
//!
//! The potentiometer bank is write-only. Every write is one transaction
//! of two bytes, channel address then wiper value, framed by chip-select:
//!
//! ```text
//! CS   ‾‾‾‾\______________________/‾‾‾‾
//! MOSI      [ channel ][  value  ]
//! ```
//!
//! The device latches both bytes on the rising chip-select edge, so a
//! transaction is applied atomically.
//!
//! # Usage
//!
//! ```ignore
//! let mut bus = PotBus::init(spi, cs, &SpiConfig::default());
//! bus.send_transaction(2, 200)?;
//! ```
//!
//! Waiting for each byte goes through a [`ReadyWait`]. With the default
//! [`Spin`] a stuck peripheral hangs the caller; with [`BoundedSpin`] the
//! transaction gives up and returns the timeout. Either way, never call
//! this from interrupt context.
//!
//! [`BoundedSpin`]: joydrive_hal::BoundedSpin

use joydrive_core::{PotChannels, StateSnapshot};
use joydrive_hal::{ConfigurablePin, Level, OutputPin, ReadyWait, Spin, SpiConfig, SpiPeripheral};

use crate::pin::configure_output;

/// One potentiometer write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusTransaction {
    /// Channel address
    pub channel: u8,
    /// Wiper position
    pub value: u8,
}

/// Chip-select framed SPI writer
pub struct PotBus<S, CS, W = Spin> {
    spi: S,
    cs: CS,
    wait: W,
}

impl<S: SpiPeripheral, CS: ConfigurablePin> PotBus<S, CS, Spin> {
    /// Set up the bus with unbounded waits
    pub fn init(spi: S, cs: CS, config: &SpiConfig) -> Self {
        Self::with_wait(spi, cs, config, Spin)
    }
}

impl<S: SpiPeripheral, CS: ConfigurablePin, W: ReadyWait> PotBus<S, CS, W> {
    /// Set up the bus with a chosen wait policy
    ///
    /// Chip-select becomes an output idling HIGH before the peripheral is
    /// switched to master mode, so the device never sees a stray select.
    /// The data and clock lines belong to the peripheral and are set up
    /// by [`SpiPeripheral::configure_master`].
    pub fn with_wait(mut spi: S, mut cs: CS, config: &SpiConfig, wait: W) -> Self {
        configure_output(&mut cs, Level::High);
        spi.configure_master(config);
        Self { spi, cs, wait }
    }

    /// Write `value` to potentiometer channel `channel`
    ///
    /// Chip-select is HIGH again when this returns, whether or not the
    /// transfer completed.
    pub fn send_transaction(&mut self, channel: u8, value: u8) -> Result<(), W::Error> {
        self.cs.set_low();
        let result = match self.transfer(channel) {
            Ok(()) => self.transfer(value),
            Err(e) => Err(e),
        };
        self.cs.set_high();

        #[cfg(feature = "defmt")]
        if result.is_err() {
            defmt::warn!("pot bus: write to channel {} timed out", channel);
        }

        result
    }

    /// Send a prepared transaction
    pub fn send(&mut self, tx: BusTransaction) -> Result<(), W::Error> {
        self.send_transaction(tx.channel, tx.value)
    }

    /// Check that chip-select is released
    pub fn is_idle(&self) -> bool {
        self.cs.is_set_high()
    }

    /// Give the peripheral, chip-select pin and wait policy back
    pub fn release(self) -> (S, CS, W) {
        (self.spi, self.cs, self.wait)
    }

    fn transfer(&mut self, byte: u8) -> Result<(), W::Error> {
        self.spi.load(byte);
        let spi = &mut self.spi;
        self.wait.wait_until(|| spi.transfer_complete())
    }
}

/// The three controller potentiometers on one bus
pub struct PotBank<S, CS, W = Spin> {
    bus: PotBus<S, CS, W>,
    channels: PotChannels,
}

impl<S: SpiPeripheral, CS: ConfigurablePin, W: ReadyWait> PotBank<S, CS, W> {
    pub fn new(bus: PotBus<S, CS, W>, channels: PotChannels) -> Self {
        Self { bus, channels }
    }

    /// Transactions that bring the bank in line with `state`
    ///
    /// Joystick X, joystick Y, then speed.
    pub fn transactions(&self, state: &StateSnapshot) -> [BusTransaction; 3] {
        [
            BusTransaction {
                channel: self.channels.joy_x,
                value: state.joy_x,
            },
            BusTransaction {
                channel: self.channels.joy_y,
                value: state.joy_y,
            },
            BusTransaction {
                channel: self.channels.speed,
                value: state.speed_knob,
            },
        ]
    }

    /// Write joystick and speed values from `state`
    ///
    /// Stops at the first failed transaction.
    pub fn sync(&mut self, state: &StateSnapshot) -> Result<(), W::Error> {
        for tx in self.transactions(state) {
            self.bus.send(tx)?;
        }
        Ok(())
    }

    /// Channel map in use
    pub fn channels(&self) -> &PotChannels {
        &self.channels
    }

    pub fn bus(&mut self) -> &mut PotBus<S, CS, W> {
        &mut self.bus
    }
}
