//! The shared state record and its access handles
//!
//! Every field is a byte-wide atomic, so a read can never observe a torn
//! value and the compiler never keeps a field cached in a register across
//! the interrupt boundary.
//!
//! | field        | written by        | read by                 |
//! |--------------|-------------------|-------------------------|
//! | `button1`    | main loop (poll)  | main loop               |
//! | `switch1/2`  | main loop (poll)  | main loop               |
//! | `drive_mode` | main loop         | main loop, output stage |
//! | `joy_x/y`    | main loop (ADC)   | pot bus driver          |
//! | `speed_knob` | main loop (ADC)   | pot bus driver          |
//! | `leds`       | main loop         | output stage            |
//! | `flash`      | main loop         | timer / output stage    |
//!
//! The interrupt handler never touches this record.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

use super::types::{BlinkSelector, DriveMode, Leds, JOY_STOP, SPEED_STOP};

/// Process-wide controller state
///
/// Create one as a `static` at boot. Writes go through the single
/// [`StateWriter`] returned by [`SharedState::writer`]; reads through any
/// number of [`StateReader`]s.
pub struct SharedState {
    button1: AtomicBool,
    switch1: AtomicBool,
    switch2: AtomicBool,
    drive_mode: AtomicU8,
    joy_x: AtomicU8,
    joy_y: AtomicU8,
    speed_knob: AtomicU8,
    leds: AtomicU8,
    flash: AtomicU8,
    writer_taken: AtomicBool,
}

impl SharedState {
    /// Boot state: buttons released, drive off, stick centred, speed zero,
    /// LEDs dark
    pub const fn new() -> Self {
        Self {
            button1: AtomicBool::new(false),
            switch1: AtomicBool::new(false),
            switch2: AtomicBool::new(false),
            drive_mode: AtomicU8::new(DriveMode::Off as u8),
            joy_x: AtomicU8::new(JOY_STOP),
            joy_y: AtomicU8::new(JOY_STOP),
            speed_knob: AtomicU8::new(SPEED_STOP),
            leds: AtomicU8::new(Leds::ALL_OFF.bits()),
            flash: AtomicU8::new(BlinkSelector::STEADY.0),
            writer_taken: AtomicBool::new(false),
        }
    }

    /// Take the write handle
    ///
    /// Returns `None` once the handle has been handed out.
    pub fn writer(&self) -> Option<StateWriter<'_>> {
        if self.writer_taken.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(StateWriter { state: self })
    }

    /// Get a read handle
    pub fn reader(&self) -> StateReader<'_> {
        StateReader { state: self }
    }

    /// Copy every field
    pub fn snapshot(&self) -> StateSnapshot {
        self.reader().snapshot()
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

/// The one handle allowed to modify a [`SharedState`]
///
/// Owned by the main loop.
pub struct StateWriter<'a> {
    state: &'a SharedState,
}

impl StateWriter<'_> {
    /// Store the debounced level of button 1
    pub fn set_button1(&mut self, pressed: bool) {
        self.state.button1.store(pressed, Ordering::Release);
    }

    /// Store the debounced levels of the two mode switches
    pub fn set_switches(&mut self, switch1: bool, switch2: bool) {
        self.state.switch1.store(switch1, Ordering::Release);
        self.state.switch2.store(switch2, Ordering::Release);
    }

    pub fn set_drive_mode(&mut self, mode: DriveMode) {
        self.state.drive_mode.store(mode.as_u8(), Ordering::Release);
    }

    /// Advance to the next drive mode and return it
    pub fn cycle_drive_mode(&mut self) -> DriveMode {
        let next = self.reader().drive_mode().next();
        self.set_drive_mode(next);
        next
    }

    /// Store both joystick axes
    pub fn set_joystick(&mut self, x: u8, y: u8) {
        self.state.joy_x.store(x, Ordering::Release);
        self.state.joy_y.store(y, Ordering::Release);
    }

    pub fn set_speed_knob(&mut self, speed: u8) {
        self.state.speed_knob.store(speed, Ordering::Release);
    }

    pub fn set_leds(&mut self, leds: Leds) {
        self.state.leds.store(leds.bits(), Ordering::Release);
    }

    /// Read-modify-write the LED bitmap
    ///
    /// Not atomic as a whole, which is fine with a single writer.
    pub fn update_leds<F: FnOnce(Leds) -> Leds>(&mut self, f: F) {
        let leds = f(self.reader().leds());
        self.set_leds(leds);
    }

    pub fn set_flash(&mut self, flash: BlinkSelector) {
        self.state.flash.store(flash.0, Ordering::Release);
    }

    /// Read back through this handle
    pub fn reader(&self) -> StateReader<'_> {
        self.state.reader()
    }
}

/// Read-only view of a [`SharedState`]
#[derive(Clone, Copy)]
pub struct StateReader<'a> {
    state: &'a SharedState,
}

impl StateReader<'_> {
    pub fn button1(&self) -> bool {
        self.state.button1.load(Ordering::Acquire)
    }

    pub fn switch1(&self) -> bool {
        self.state.switch1.load(Ordering::Acquire)
    }

    pub fn switch2(&self) -> bool {
        self.state.switch2.load(Ordering::Acquire)
    }

    /// Current drive mode
    ///
    /// Only the writer stores this field and it only stores valid modes,
    /// so the fallback to `Off` is never taken in practice.
    pub fn drive_mode(&self) -> DriveMode {
        DriveMode::from_u8(self.state.drive_mode.load(Ordering::Acquire)).unwrap_or_default()
    }

    pub fn joy_x(&self) -> u8 {
        self.state.joy_x.load(Ordering::Acquire)
    }

    pub fn joy_y(&self) -> u8 {
        self.state.joy_y.load(Ordering::Acquire)
    }

    pub fn speed_knob(&self) -> u8 {
        self.state.speed_knob.load(Ordering::Acquire)
    }

    pub fn leds(&self) -> Leds {
        Leds::from_bits_truncate(self.state.leds.load(Ordering::Acquire))
    }

    pub fn flash(&self) -> BlinkSelector {
        BlinkSelector(self.state.flash.load(Ordering::Acquire))
    }

    /// Copy every field
    ///
    /// Each field is read atomically, but the copy as a whole is not a
    /// transaction: a write landing mid-copy shows up in some fields only.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            button1: self.button1(),
            switch1: self.switch1(),
            switch2: self.switch2(),
            drive_mode: self.drive_mode(),
            joy_x: self.joy_x(),
            joy_y: self.joy_y(),
            speed_knob: self.speed_knob(),
            leds: self.leds(),
            flash: self.flash(),
        }
    }
}

/// Plain copy of the shared state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateSnapshot {
    pub button1: bool,
    pub switch1: bool,
    pub switch2: bool,
    pub drive_mode: DriveMode,
    pub joy_x: u8,
    pub joy_y: u8,
    pub speed_knob: u8,
    pub leds: Leds,
    pub flash: BlinkSelector,
}

impl StateSnapshot {
    /// Joystick X as a signed offset from centre
    pub fn joy_x_delta(&self) -> i16 {
        self.joy_x as i16 - JOY_STOP as i16
    }

    /// Joystick Y as a signed offset from centre
    pub fn joy_y_delta(&self) -> i16 {
        self.joy_y as i16 - JOY_STOP as i16
    }

    /// Speed knob scaled to `0..=steps`
    pub fn speed_scaled(&self, steps: u8) -> u8 {
        ((self.speed_knob as u16 * steps as u16 + 127) / 255) as u8
    }
}

impl Default for StateSnapshot {
    fn default() -> Self {
        SharedState::new().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_state() {
        let state = SharedState::new();
        let snap = state.snapshot();

        assert!(!snap.button1);
        assert!(!snap.switch1);
        assert!(!snap.switch2);
        assert_eq!(snap.drive_mode, DriveMode::Off);
        assert_eq!(snap.joy_x, JOY_STOP);
        assert_eq!(snap.joy_y, JOY_STOP);
        assert_eq!(snap.speed_knob, SPEED_STOP);
        assert_eq!(snap.leds, Leds::ALL_OFF);
        assert_eq!(snap.flash, BlinkSelector::STEADY);
    }

    #[test]
    fn test_single_writer() {
        let state = SharedState::new();
        let writer = state.writer();
        assert!(writer.is_some());
        assert!(state.writer().is_none());
        assert!(state.writer().is_none());
    }

    #[test]
    fn test_writes_visible_to_readers() {
        let state = SharedState::new();
        let mut writer = state.writer().unwrap();
        let reader = state.reader();

        writer.set_button1(true);
        writer.set_switches(true, false);
        writer.set_joystick(10, 250);
        writer.set_speed_knob(200);
        writer.set_leds(Leds::LED1 | Leds::LED2);
        writer.set_flash(BlinkSelector(3));

        assert!(reader.button1());
        assert!(reader.switch1());
        assert!(!reader.switch2());
        assert_eq!(reader.joy_x(), 10);
        assert_eq!(reader.joy_y(), 250);
        assert_eq!(reader.speed_knob(), 200);
        assert_eq!(reader.leds(), Leds::LED1 | Leds::LED2);
        assert_eq!(reader.flash(), BlinkSelector(3));
    }

    #[test]
    fn test_cycle_drive_mode() {
        let state = SharedState::new();
        let mut writer = state.writer().unwrap();

        assert_eq!(writer.cycle_drive_mode(), DriveMode::One);
        assert_eq!(writer.cycle_drive_mode(), DriveMode::Two);
        assert_eq!(writer.cycle_drive_mode(), DriveMode::Off);
        assert_eq!(state.reader().drive_mode(), DriveMode::Off);
    }

    #[test]
    fn test_update_leds() {
        let state = SharedState::new();
        let mut writer = state.writer().unwrap();

        writer.update_leds(|l| l.with(Leds::LED4));
        writer.update_leds(|l| l.with(Leds::LED0));
        writer.update_leds(|l| l.without(Leds::LED4));
        assert_eq!(state.reader().leds(), Leds::LED0);
    }

    #[test]
    fn test_snapshot_helpers() {
        let state = SharedState::new();
        let mut writer = state.writer().unwrap();

        writer.set_joystick(0, 255);
        writer.set_speed_knob(255);
        let snap = state.snapshot();

        assert_eq!(snap.joy_x_delta(), -127);
        assert_eq!(snap.joy_y_delta(), 128);
        assert_eq!(snap.speed_scaled(10), 10);

        writer.set_speed_knob(0);
        assert_eq!(state.snapshot().speed_scaled(10), 0);
        writer.set_speed_knob(128);
        assert_eq!(state.snapshot().speed_scaled(10), 5);
    }

    #[test]
    fn test_shared_across_threads() {
        static STATE: SharedState = SharedState::new();

        let mut writer = STATE.writer().unwrap();
        std::thread::spawn(move || {
            writer.set_joystick(1, 2);
        })
        .join()
        .unwrap();

        assert_eq!(STATE.reader().joy_x(), 1);
        assert_eq!(STATE.reader().joy_y(), 2);
    }
}
