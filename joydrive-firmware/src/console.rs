//! Diagnostic console commands

use core::convert::Infallible;

use joydrive_core::{Line, Radix, StateSnapshot};
use joydrive_drivers::SerialTx;
use joydrive_hal::UartTx;

/// Answer one input line
pub fn handle<U: UartTx, const M: usize>(
    tx: &mut SerialTx<U>,
    line: &Line<M>,
    state: &StateSnapshot,
) -> Result<(), Infallible> {
    if line.is_truncated() {
        tx.send_string("line too long")?;
        return tx.send_crlf();
    }

    match line.trimmed() {
        "" => Ok(()),
        "help" => help(tx),
        "status" => status(tx, state),
        other => {
            tx.send_string("unknown command: ")?;
            tx.send_string(other)?;
            tx.send_crlf()
        }
    }
}

/// Print the banner
pub fn banner<U: UartTx>(tx: &mut SerialTx<U>) -> Result<(), Infallible> {
    tx.send_string("joydrive ready, type help")?;
    tx.send_crlf()
}

fn help<U: UartTx>(tx: &mut SerialTx<U>) -> Result<(), Infallible> {
    tx.send_string("status  show inputs and outputs")?;
    tx.send_crlf()?;
    tx.send_string("help    this text")?;
    tx.send_crlf()
}

fn status<U: UartTx>(tx: &mut SerialTx<U>, state: &StateSnapshot) -> Result<(), Infallible> {
    tx.send_string("mode ")?;
    tx.send_unsigned(state.drive_mode.as_u8() as u32, Radix::DEC)?;
    tx.send_string(" button ")?;
    tx.send_unsigned(state.button1 as u32, Radix::DEC)?;
    tx.send_string(" switches ")?;
    tx.send_unsigned(state.switch1 as u32, Radix::DEC)?;
    tx.send_unsigned(state.switch2 as u32, Radix::DEC)?;
    tx.send_crlf()?;

    tx.send_string("joy ")?;
    tx.send_signed(state.joy_x_delta() as i32, Radix::DEC)?;
    tx.send_byte(b' ')?;
    tx.send_signed(state.joy_y_delta() as i32, Radix::DEC)?;
    tx.send_string(" speed ")?;
    tx.send_unsigned(state.speed_knob as u32, Radix::DEC)?;
    tx.send_crlf()?;

    tx.send_string("leds 0x")?;
    tx.send_unsigned(state.leds.bits() as u32, Radix::HEX)?;
    tx.send_string(" flash ")?;
    tx.send_unsigned(state.flash.0 as u32, Radix::DEC)?;
    tx.send_crlf()
}
