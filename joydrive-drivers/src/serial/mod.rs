//! Diagnostic serial link
//!
//! Receive is interrupt driven: [`RxInterrupt`] runs in the UART
//! interrupt and only pushes into the ring buffer. Transmit is polled and
//! blocking: [`SerialTx`] runs in the main loop.

pub mod rx;
pub mod tx;

pub use rx::RxInterrupt;
pub use tx::SerialTx;
