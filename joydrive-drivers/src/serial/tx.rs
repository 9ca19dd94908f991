//! Blocking diagnostic output
//!
//! Every byte waits for the transmitter through the [`ReadyWait`] policy
//! and is written straight to the data register; nothing is buffered.
//!
//! ```ignore
//! let mut tx = SerialTx::new(uart);
//! tx.send_string("speed ")?;
//! tx.send_unsigned(speed as u32, Radix::DEC)?;
//! tx.send_crlf()?;
//! ```

use core::fmt;

use joydrive_core::format::{emit_signed, emit_unsigned};
use joydrive_core::Radix;
use joydrive_hal::{ReadyWait, Spin, UartTx};

/// Polled UART transmitter
pub struct SerialTx<U, W = Spin> {
    uart: U,
    wait: W,
}

impl<U: UartTx> SerialTx<U, Spin> {
    /// Transmitter with unbounded waits
    pub fn new(uart: U) -> Self {
        Self::with_wait(uart, Spin)
    }
}

impl<U: UartTx, W: ReadyWait> SerialTx<U, W> {
    pub fn with_wait(uart: U, wait: W) -> Self {
        Self { uart, wait }
    }

    /// Wait for the transmitter, then write one byte
    pub fn send_byte(&mut self, byte: u8) -> Result<(), W::Error> {
        let uart = &mut self.uart;
        self.wait.wait_until(|| uart.tx_ready())?;
        self.uart.load(byte);
        Ok(())
    }

    /// Send `s` up to its end or the first NUL, whichever comes first
    pub fn send_string(&mut self, s: &str) -> Result<(), W::Error> {
        self.send_bytes(s.as_bytes())
    }

    /// Send raw bytes up to the end or the first NUL
    pub fn send_bytes(&mut self, bytes: &[u8]) -> Result<(), W::Error> {
        for &b in bytes.iter().take_while(|&&b| b != 0) {
            self.send_byte(b)?;
        }
        Ok(())
    }

    /// Send a CR LF line ending
    pub fn send_crlf(&mut self) -> Result<(), W::Error> {
        self.send_byte(b'\r')?;
        self.send_byte(b'\n')
    }

    /// Send `value` in `radix`, most significant digit first
    pub fn send_unsigned(&mut self, value: u32, radix: Radix) -> Result<(), W::Error> {
        emit_unsigned(value, radix, &mut |b| self.send_byte(b))
    }

    /// Send `value` in `radix`, with a leading `-` when negative
    pub fn send_signed(&mut self, value: i32, radix: Radix) -> Result<(), W::Error> {
        emit_signed(value, radix, &mut |b| self.send_byte(b))
    }

    pub fn uart(&mut self) -> &mut U {
        &mut self.uart
    }

    pub fn release(self) -> (U, W) {
        (self.uart, self.wait)
    }
}

/// `write!` support
///
/// Text is sent as is (a NUL inside the string ends it). A wait failure
/// becomes [`fmt::Error`].
impl<U: UartTx, W: ReadyWait> fmt::Write for SerialTx<U, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.send_string(s).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::Uart;
    use core::fmt::Write;
    use joydrive_hal::{BoundedSpin, Timeout};

    #[test]
    fn test_send_byte_waits_for_ready() {
        let mut tx = SerialTx::new(Uart::new(Some(4)));
        tx.send_byte(b'x').unwrap();
        tx.send_byte(b'y').unwrap();
        assert_eq!(tx.uart().sent_str(), "xy");
    }

    #[test]
    fn test_send_string_stops_at_nul() {
        let mut tx = SerialTx::new(Uart::new(Some(0)));
        tx.send_string("ok\0ignored").unwrap();
        tx.send_bytes(b"!\0?").unwrap();
        assert_eq!(tx.uart().sent_str(), "ok!");
    }

    #[test]
    fn test_send_crlf() {
        let mut tx = SerialTx::new(Uart::new(Some(0)));
        tx.send_string("status").unwrap();
        tx.send_crlf().unwrap();
        assert_eq!(tx.uart().sent_str(), "status\r\n");
    }

    #[test]
    fn test_send_numbers() {
        let mut tx = SerialTx::new(Uart::new(Some(1)));
        tx.send_unsigned(255, Radix::HEX).unwrap();
        tx.send_byte(b' ').unwrap();
        tx.send_signed(-42, Radix::DEC).unwrap();
        tx.send_byte(b' ').unwrap();
        tx.send_unsigned(0, Radix::DEC).unwrap();
        tx.send_byte(b' ').unwrap();
        tx.send_signed(i32::MIN, Radix::DEC).unwrap();
        tx.send_byte(b' ').unwrap();
        tx.send_unsigned(5, Radix::BIN).unwrap();

        assert_eq!(tx.uart().sent_str(), "ff -42 0 -2147483648 101");
    }

    #[test]
    fn test_fmt_write() {
        let mut tx = SerialTx::new(Uart::new(Some(0)));
        write!(tx, "joy {} {}", 127, -3).unwrap();
        assert_eq!(tx.uart().sent_str(), "joy 127 -3");
    }

    #[test]
    fn test_stuck_transmitter_times_out() {
        let mut tx = SerialTx::with_wait(Uart::new(None), BoundedSpin::new(20));
        assert_eq!(tx.send_byte(b'a'), Err(Timeout));
        assert_eq!(tx.send_unsigned(123, Radix::DEC), Err(Timeout));
        assert!(write!(tx, "x").is_err());

        let (uart, _) = tx.release();
        assert!(uart.sent.is_empty());
    }
}
