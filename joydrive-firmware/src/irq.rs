//! Diagnostic link receive interrupt
//!
//! UART0 raises its interrupt when the receive FIFO fills past its
//! trigger level or goes idle with data in it. The handler moves every
//! pending byte into the receive ring and returns; it never blocks or
//! logs, and it never touches the shared state record.

use core::cell::RefCell;

use embassy_rp::interrupt::typelevel::{Handler, Interrupt, UART0_IRQ};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use joydrive_core::{RxConsumer, RxRing};
use joydrive_drivers::RxInterrupt;
use joydrive_hal_rp2040::RawUart;

/// Receive ring size (15 bytes usable)
pub const RX_RING_SIZE: usize = 16;

static RX_RING: RxRing<RX_RING_SIZE> = RxRing::new();

/// Producer half, parked here for the handler
static RX_IRQ: Mutex<CriticalSectionRawMutex, RefCell<Option<RxInterrupt<'static, RX_RING_SIZE>>>> =
    Mutex::new(RefCell::new(None));

/// UART0 interrupt body, bound in `main`
pub struct UartRxHandler;

impl Handler<UART0_IRQ> for UartRxHandler {
    unsafe fn on_interrupt() {
        RX_IRQ.lock(|cell| {
            if let Some(irq) = cell.borrow_mut().as_mut() {
                irq.on_interrupt(&mut RawUart::uart0());
            }
        });
    }
}

/// Hand the producer to the interrupt and unmask it
///
/// Returns the consumer half for the main loop, or `None` if the ring
/// was already started.
pub fn start() -> Option<RxConsumer<'static, RX_RING_SIZE>> {
    let (producer, consumer) = RX_RING.split()?;
    RX_IRQ.lock(|cell| cell.replace(Some(RxInterrupt::new(producer))));

    RawUart::uart0().enable_rx_interrupt();
    UART0_IRQ::unpend();
    // SAFETY: the handler only touches RX_IRQ and the UART0 receive FIFO,
    // both of which are set up above.
    unsafe { UART0_IRQ::enable() };

    Some(consumer)
}
