//! Joydrive - Vehicle Controller Firmware
//!
//! Main firmware binary for RP2040-based joystick drive controllers.
//! One fixed-rate main loop reads the joystick, speed knob, button and
//! mode switches, mirrors them into the digital potentiometer bank and
//! the status LEDs, and answers the diagnostic console. The only
//! interrupt is the console receive handler in [`irq`].

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use joydrive_core::{ControllerConfig, LineBuffer, SharedState};

mod board;
mod console;
mod control;
mod irq;

use board::Board;

bind_interrupts!(struct Irqs {
    UART0_IRQ => irq::UartRxHandler;
});

/// Main loop period
const LOOP_PERIOD_MS: u64 = 10;

/// Console line buffer capacity
const LINE_CAPACITY: usize = 64;

/// The shared state record
static STATE: SharedState = SharedState::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Joydrive firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = ControllerConfig::default();
    if let Err(e) = config.validate() {
        defmt::panic!("Invalid controller config: {}", e);
    }

    let mut board = Board::new(p, &config);

    let Some(mut writer) = STATE.writer() else {
        defmt::panic!("State writer already taken");
    };
    let Some(mut rx) = irq::start() else {
        defmt::panic!("Receive ring already started");
    };
    info!("Console receive interrupt enabled");

    let mut lines: LineBuffer<LINE_CAPACITY> = LineBuffer::with_limit(config.max_line_len);
    infallible(console::banner(&mut board.console));

    let mut ticker = Ticker::every(Duration::from_millis(LOOP_PERIOD_MS));
    let mut tick: u32 = 0;

    info!("Main loop running");

    loop {
        ticker.next().await;
        tick = tick.wrapping_add(1);

        control::poll_inputs(&mut board, &mut writer);
        let state = STATE.snapshot();

        infallible(board.pots.sync(&control::pot_targets(&state)));
        board.leds.apply(control::shown_leds(&state, tick));

        while let Some(line) = lines.poll(&mut rx) {
            debug!("Console: {}", line.as_str());
            infallible(console::handle(&mut board.console, &line, &state));
        }

        if tick % 100 == 0 {
            trace!("Main loop heartbeat, state {}", state);
        }
    }
}

/// Unwrap the result of an operation that waits without a bound
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
