//! UART serial communication abstractions
//!
//! Register-level view of the diagnostic serial link. The transmit side
//! is polled by the main loop; the receive side is drained from the
//! receive interrupt.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// UART transmitter
pub trait UartTx {
    /// Check whether the transmit data register can accept a byte
    fn tx_ready(&mut self) -> bool;

    /// Write one byte to the transmit data register
    ///
    /// Only valid after [`tx_ready`](UartTx::tx_ready) returned `true`.
    fn load(&mut self, byte: u8);
}

/// UART receiver
///
/// Called from interrupt context, so implementations must not block.
pub trait UartRx {
    /// Check whether a received byte is waiting in the data register
    fn rx_pending(&mut self) -> bool;

    /// Read the received byte, clearing the pending condition
    fn read_data(&mut self) -> u8;
}

/// Combined UART interface
///
/// For UARTs that provide both TX and RX on a single peripheral.
pub trait Uart: UartTx + UartRx {}

// Blanket implementation
impl<T: UartTx + UartRx> Uart for T {}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl UartConfig {
    /// 8N1 at the given baud rate
    pub fn with_baudrate(baudrate: u32) -> Self {
        Self {
            baudrate,
            ..Self::default()
        }
    }

    /// Baud rate divisor for a 16x oversampling UART (AVR UBRR)
    ///
    /// `(clock_hz / 16) / baudrate - 1`, saturating at both ends.
    pub fn divisor(&self, clock_hz: u32) -> u16 {
        if self.baudrate == 0 {
            return u16::MAX;
        }
        let ticks = (clock_hz >> 4) / self.baudrate;
        ticks.saturating_sub(1).min(u16::MAX as u32) as u16
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_8n1() {
        let config = UartConfig::default();
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }

    #[test]
    fn test_divisor() {
        // 16 MHz AVR at 9600 baud: 1_000_000 / 9600 - 1 = 103
        assert_eq!(UartConfig::with_baudrate(9600).divisor(16_000_000), 103);
        // 16 MHz at 115200: 1_000_000 / 115200 - 1 = 7
        assert_eq!(UartConfig::with_baudrate(115200).divisor(16_000_000), 7);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_types_serde() {
        fn assert_serde<T: Serialize + for<'de> Deserialize<'de>>() {}
        assert_serde::<UartConfig>();
        assert_serde::<crate::SpiConfig>();
        assert_serde::<crate::spi::Mode>();
    }

    #[test]
    fn test_divisor_saturates() {
        // Baud faster than clock / 16
        assert_eq!(UartConfig::with_baudrate(2_000_000).divisor(16_000_000), 0);
        assert_eq!(UartConfig::with_baudrate(0).divisor(16_000_000), u16::MAX);
        assert_eq!(UartConfig::with_baudrate(1).divisor(u32::MAX), u16::MAX);
    }
}
