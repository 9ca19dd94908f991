//! Blocking on hardware ready flags
//!
//! Every busy-wait in the drivers goes through [`ReadyWait`], so the
//! policy for "the flag never asserts" is chosen by the caller:
//!
//! - [`Spin`] blocks until the hardware is ready. A peripheral that never
//!   signals ready hangs the caller (fail-stop). Its error type is
//!   [`Infallible`], so callers cannot mistake it for a recoverable path.
//! - [`BoundedSpin`] polls a fixed number of times and then reports
//!   [`Timeout`].
//!
//! Waits must only happen in the main loop, never in interrupt context.

use core::convert::Infallible;

/// Strategy for blocking until a hardware flag is set
pub trait ReadyWait {
    /// Error returned when the wait gives up
    type Error;

    /// Block until `ready` returns `true`
    fn wait_until<F: FnMut() -> bool>(&mut self, ready: F) -> Result<(), Self::Error>;
}

/// Unbounded busy-wait
///
/// Blocks until the hardware is ready, however long that takes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Spin;

impl ReadyWait for Spin {
    type Error = Infallible;

    fn wait_until<F: FnMut() -> bool>(&mut self, mut ready: F) -> Result<(), Infallible> {
        while !ready() {
            core::hint::spin_loop();
        }
        Ok(())
    }
}

/// The ready flag did not assert within the poll budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timeout;

/// Busy-wait with a poll budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoundedSpin {
    max_polls: u32,
}

impl BoundedSpin {
    /// Create a wait that polls the flag at most `max_polls` times
    pub const fn new(max_polls: u32) -> Self {
        Self { max_polls }
    }

    /// Get the poll budget
    pub fn max_polls(&self) -> u32 {
        self.max_polls
    }
}

impl ReadyWait for BoundedSpin {
    type Error = Timeout;

    fn wait_until<F: FnMut() -> bool>(&mut self, mut ready: F) -> Result<(), Timeout> {
        for _ in 0..self.max_polls {
            if ready() {
                return Ok(());
            }
            core::hint::spin_loop();
        }
        Err(Timeout)
    }
}
