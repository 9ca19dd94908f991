//! Register-level SPI master
//!
//! embassy-rp sets up pin muxing and the clock; the potentiometer bus
//! then drives the PL022 data and status registers directly, one byte per
//! load, so the driver's wait policy sees the real busy flag.

use embassy_rp::pac;
use embassy_rp::peripherals::{SPI0, SPI1};
use embassy_rp::spi::{self, Blocking, Instance, Spi};
use joydrive_hal::spi::{Phase, Polarity};
use joydrive_hal::{SpiConfig, SpiPeripheral};

/// PL022 driven one byte at a time
///
/// The PL022 always shifts in while shifting out, so a transfer is done
/// once its echo byte is in the receive FIFO and the block is idle.
pub struct BlockingSpi<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
    regs: pac::spi::Spi,
}

impl<'d> BlockingSpi<'d, SPI0> {
    pub fn spi0(spi: Spi<'d, SPI0, Blocking>) -> Self {
        Self {
            spi,
            regs: pac::SPI0,
        }
    }
}

impl<'d> BlockingSpi<'d, SPI1> {
    pub fn spi1(spi: Spi<'d, SPI1, Blocking>) -> Self {
        Self {
            spi,
            regs: pac::SPI1,
        }
    }
}

impl<T: Instance> BlockingSpi<'_, T> {
    fn drain_rx(&mut self) {
        while self.regs.sspsr().read().rne() {
            let _ = self.regs.sspdr().read();
        }
    }
}

impl<T: Instance> SpiPeripheral for BlockingSpi<'_, T> {
    fn configure_master(&mut self, config: &SpiConfig) {
        let mut cfg = spi::Config::default();
        cfg.frequency = config.frequency;
        cfg.polarity = match config.polarity() {
            Polarity::IdleLow => spi::Polarity::IdleLow,
            Polarity::IdleHigh => spi::Polarity::IdleHigh,
        };
        cfg.phase = match config.phase() {
            Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
            Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
        };
        self.spi.set_config(&cfg);
        self.drain_rx();

        // The PL022 block only shifts MSB first and has no double-speed mode
        #[cfg(feature = "defmt")]
        if config.bit_order == joydrive_hal::spi::BitOrder::LsbFirst {
            defmt::warn!("spi: LSB-first not supported, sending MSB first");
        }
    }

    /// Write `byte` to the transmit FIFO
    ///
    /// The driver waits for [`transfer_complete`](Self::transfer_complete)
    /// after every load, so the FIFO is empty here.
    fn load(&mut self, byte: u8) {
        self.regs.sspdr().write(|w| w.set_data(byte as u16));
    }

    fn transfer_complete(&mut self) -> bool {
        let status = self.regs.sspsr().read();
        if !status.rne() || status.bsy() {
            return false;
        }
        self.drain_rx();
        true
    }
}
