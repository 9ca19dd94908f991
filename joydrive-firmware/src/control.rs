//! Control loop policy
//!
//! Everything here runs in the main loop. Inputs are sampled into the
//! shared state record through the single writer; outputs are derived
//! from a snapshot of it.

use defmt::*;
use joydrive_core::{
    BlinkSelector, DriveMode, Leds, StateSnapshot, StateWriter, JOY_STOP, SPEED_STOP,
};
use joydrive_hal_rp2040::sample_u8;

use crate::board::Board;

/// Blink pattern while the drive is enabled
const BLINK_DRIVING: BlinkSelector = BlinkSelector(1);

/// Loop ticks per blink half period
const BLINK_HALF_PERIOD: u32 = 25;

/// Sample buttons, switches and analog inputs into the state record
pub fn poll_inputs(board: &mut Board, writer: &mut StateWriter<'_>) {
    if let Some(pressed) = board.button1.poll() {
        writer.set_button1(pressed);
        if pressed {
            let mode = writer.cycle_drive_mode();
            info!("Drive mode {}", mode);
        }
    }

    board.switch1.poll();
    board.switch2.poll();
    writer.set_switches(board.switch1.is_pressed(), board.switch2.is_pressed());

    match (
        sample_u8(&mut board.adc, &mut board.joy_x),
        sample_u8(&mut board.adc, &mut board.joy_y),
    ) {
        (Some(x), Some(y)) => writer.set_joystick(x, y),
        _ => warn!("Joystick conversion failed"),
    }
    match sample_u8(&mut board.adc, &mut board.speed) {
        Some(speed) => writer.set_speed_knob(speed),
        None => warn!("Speed knob conversion failed"),
    }

    let state = writer.reader().snapshot();
    writer.set_leds(status_leds(&state));
    writer.set_flash(if state.drive_mode.is_active() {
        BLINK_DRIVING
    } else {
        BlinkSelector::STEADY
    });
}

/// LED0 power, LED1/LED2 drive mode, LED3/LED4 mode switches
pub fn status_leds(state: &StateSnapshot) -> Leds {
    let mut leds = Leds::LED0;
    match state.drive_mode {
        DriveMode::Off => {}
        DriveMode::One => leds = leds | Leds::LED1,
        DriveMode::Two => leds = leds | Leds::LED2,
    }
    if state.switch1 {
        leds = leds | Leds::LED3;
    }
    if state.switch2 {
        leds = leds | Leds::LED4;
    }
    leds
}

/// Bitmap to show on this tick, with the blink pattern applied
pub fn shown_leds(state: &StateSnapshot, tick: u32) -> Leds {
    if state.flash != BlinkSelector::STEADY && (tick / BLINK_HALF_PERIOD) % 2 == 1 {
        state.leds.without(Leds::LED0)
    } else {
        state.leds
    }
}

/// Values to program into the pots: live inputs while driving,
/// centred stick and zero speed otherwise
pub fn pot_targets(state: &StateSnapshot) -> StateSnapshot {
    if state.drive_mode.is_active() {
        *state
    } else {
        StateSnapshot {
            joy_x: JOY_STOP,
            joy_y: JOY_STOP,
            speed_knob: SPEED_STOP,
            ..*state
        }
    }
}
