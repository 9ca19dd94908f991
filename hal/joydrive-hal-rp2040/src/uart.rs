//! Register-level UART access
//!
//! The diagnostic link receives from its own interrupt handler, so it
//! bypasses the embassy UART driver after setup and talks to the PL011
//! FIFO directly. embassy-rp still does pin muxing and baud setup.

use embassy_rp::pac;
use embassy_rp::uart::{Config, DataBits as EDataBits, Parity as EParity, StopBits as EStopBits};
use joydrive_hal::uart::{DataBits, Parity, StopBits};
use joydrive_hal::{UartConfig, UartRx, UartTx};

/// embassy-rp UART settings for `config`
///
/// The PL011 has no 9-bit frames; those fall back to 8 data bits.
pub fn embassy_uart_config(config: &UartConfig) -> Config {
    let mut cfg = Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => EDataBits::DataBits7,
        DataBits::Eight | DataBits::Nine => EDataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => EParity::ParityNone,
        Parity::Even => EParity::ParityEven,
        Parity::Odd => EParity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => EStopBits::STOP1,
        StopBits::Two => EStopBits::STOP2,
    };
    cfg
}

/// Handle on a PL011 register block
///
/// Several handles may exist for one UART as long as only one of them
/// receives and only one transmits.
pub struct RawUart {
    regs: pac::uart::Uart,
}

impl RawUart {
    pub fn uart0() -> Self {
        Self { regs: pac::UART0 }
    }

    pub fn uart1() -> Self {
        Self { regs: pac::UART1 }
    }

    /// Raise the UART interrupt on received data and receive timeout
    pub fn enable_rx_interrupt(&mut self) {
        self.regs.uartimsc().modify(|w| {
            w.set_rxim(true);
            w.set_rtim(true);
        });
    }
}

impl UartTx for RawUart {
    fn tx_ready(&mut self) -> bool {
        !self.regs.uartfr().read().txff()
    }

    fn load(&mut self, byte: u8) {
        self.regs.uartdr().write(|w| w.set_data(byte));
    }
}

impl UartRx for RawUart {
    fn rx_pending(&mut self) -> bool {
        !self.regs.uartfr().read().rxfe()
    }

    fn read_data(&mut self) -> u8 {
        self.regs.uartdr().read().data()
    }
}
