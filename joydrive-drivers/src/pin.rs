//! Pin helpers: output setup, status indicators, debounced inputs

use joydrive_core::Leds;
use joydrive_hal::{ConfigurablePin, InputPin, Level, OutputPin};

/// Make `pin` an output driving `initial`
///
/// Direction and level change as one step from the caller's view: the
/// latch is loaded first, so the pin never floats or glitches to the
/// wrong level on its way to becoming an output.
pub fn configure_output<P: ConfigurablePin>(pin: &mut P, initial: Level) {
    pin.configure_output(initial);
}

/// Status LEDs driven from the shared [`Leds`] bitmap
///
/// Pin `i` shows bit `i`. Pins past LED4 are left dark.
pub struct Indicators<P, const K: usize> {
    pins: [P; K],
    /// If true, LED ON = pin LOW
    active_low: bool,
    shown: Leds,
}

impl<P: OutputPin, const K: usize> Indicators<P, K> {
    /// Take the pins and switch every LED off
    pub fn new(pins: [P; K], active_low: bool) -> Self {
        let mut bank = Self {
            pins,
            active_low,
            shown: Leds::ALL_OFF,
        };
        bank.apply(Leds::ALL_OFF);
        bank
    }

    /// Drive every pin from `leds`
    pub fn apply(&mut self, leds: Leds) {
        for i in 0..K {
            let level = self.level_for(leds.is_lit(i));
            self.pins[i].set_level(level);
        }
        self.shown = leds;
    }

    /// Last bitmap applied
    pub fn shown(&self) -> Leds {
        self.shown
    }

    fn level_for(&self, lit: bool) -> Level {
        Level::from(lit != self.active_low)
    }
}

/// Debounced push button or switch
///
/// The reported level only changes after `threshold` consecutive samples
/// agree. Call [`poll`](Self::poll) at a fixed rate from the main loop.
pub struct Button<P> {
    pin: P,
    /// If true, pressed = pin LOW (pull-up wiring)
    active_low: bool,
    threshold: u8,
    stable: bool,
    run: u8,
}

impl<P: InputPin> Button<P> {
    /// Wrap `pin`, starting in the released state
    pub fn new(pin: P, active_low: bool, threshold: u8) -> Self {
        Self {
            pin,
            active_low,
            threshold: threshold.max(1),
            stable: false,
            run: 0,
        }
    }

    /// Take one sample
    ///
    /// Returns the new debounced state when it changes.
    pub fn poll(&mut self) -> Option<bool> {
        let raw = self.pin.is_high() != self.active_low;
        if raw == self.stable {
            self.run = 0;
            return None;
        }

        self.run += 1;
        if self.run < self.threshold {
            return None;
        }
        self.run = 0;
        self.stable = raw;
        Some(raw)
    }

    /// Debounced state
    pub fn is_pressed(&self) -> bool {
        self.stable
    }
}
