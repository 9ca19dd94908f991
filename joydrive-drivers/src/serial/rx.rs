//! Receive interrupt callback

use joydrive_core::RxProducer;
use joydrive_hal::UartRx;

/// The UART receive interrupt body
///
/// Owns the producer half of the receive ring, so it is the only code
/// that can push. It never blocks, never logs, and touches nothing but
/// the UART data register and the ring.
pub struct RxInterrupt<'a, const N: usize> {
    producer: RxProducer<'a, N>,
}

impl<'a, const N: usize> RxInterrupt<'a, N> {
    pub fn new(producer: RxProducer<'a, N>) -> Self {
        Self { producer }
    }

    /// Move every pending byte from the UART into the ring
    ///
    /// Bytes are read even when the ring is full so the interrupt is
    /// acknowledged; the ring's overflow policy decides what is kept.
    /// Returns the number of bytes read from the UART.
    pub fn on_interrupt<U: UartRx>(&mut self, uart: &mut U) -> usize {
        let mut count = 0;
        while uart.rx_pending() {
            self.producer.on_byte_received(uart.read_data());
            count += 1;
        }
        count
    }

    /// Check if the ring has no free slot
    pub fn is_full(&self) -> bool {
        self.producer.is_full()
    }
}
