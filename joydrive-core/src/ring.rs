//! Interrupt-fed receive ring buffer
//!
//! Decouples byte arrival on the diagnostic link from the main loop's
//! polling rate. The receive interrupt is the only producer and the main
//! loop the only consumer, so the two indices are each written by exactly
//! one side and no lock is needed.
//!
//! ```text
//!        head (consumer)           tail (producer)
//!          │                         │
//!   ┌───┬──▼┬───┬───┬───┬───┬───┬───▼┬───┐
//!   │   │ a │ b │ c │ d │ e │ f │ .. │   │   occupied = (tail - head) mod N
//!   └───┴───┴───┴───┴───┴───┴───┴────┴───┘
//! ```
//!
//! # Invariants
//!
//! - `head` and `tail` are always in `[0, N)`
//! - the buffer is empty exactly when `head == tail`
//! - at most `N - 1` bytes are ever buffered
//!
//! # Overflow
//!
//! The producer writes the incoming byte into the `tail` slot before it
//! checks for space, and only commits `tail` when the buffer is not full.
//! While the buffer is full every new byte lands in that same uncommitted
//! slot, so the slot always holds the most recently lost byte and the
//! buffered bytes are never disturbed. Nothing is reported to either side.
//!
//! # Access
//!
//! [`RxRing::split`] hands out the producer and consumer handles exactly
//! once. Pushing is only possible through [`RxProducer`], popping only
//! through [`RxConsumer`].

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

/// Byte returned by [`RxConsumer::get_byte`] when nothing is buffered
pub const EMPTY_SENTINEL: u8 = 0;

/// Fixed-capacity receive buffer shared between an interrupt and the main loop
///
/// `N` must be a power of two between 2 and 256 so that both indices fit
/// in a byte, which every supported target loads and stores atomically.
pub struct RxRing<const N: usize> {
    slots: [AtomicU8; N],
    /// Next slot to read. Written only by the consumer.
    head: AtomicU8,
    /// Next slot to write. Written only by the producer.
    tail: AtomicU8,
    split: AtomicBool,
}

impl<const N: usize> RxRing<N> {
    const VALID_CAPACITY: () = assert!(
        N.is_power_of_two() && N >= 2 && N <= 256,
        "ring capacity must be a power of two between 2 and 256"
    );

    const MASK: usize = N - 1;

    /// Create an empty ring (`head = tail = 0`)
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_CAPACITY;

        #[allow(clippy::declare_interior_mutable_const)]
        const EMPTY_SLOT: AtomicU8 = AtomicU8::new(0);

        Self {
            slots: [EMPTY_SLOT; N],
            head: AtomicU8::new(0),
            tail: AtomicU8::new(0),
            split: AtomicBool::new(false),
        }
    }

    /// Number of bytes the ring can hold at once (`N - 1`)
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Take the producer and consumer handles
    ///
    /// Returns `None` if the ring has already been split.
    pub fn split(&self) -> Option<(RxProducer<'_, N>, RxConsumer<'_, N>)> {
        if self.split.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some((RxProducer { ring: self }, RxConsumer { ring: self }))
    }

    fn occupied(&self) -> usize {
        let head = self.head.load(Ordering::Acquire) as usize;
        let tail = self.tail.load(Ordering::Acquire) as usize;
        tail.wrapping_sub(head) & Self::MASK
    }
}

impl<const N: usize> Default for RxRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Interrupt-side handle of an [`RxRing`]
///
/// Every method completes in bounded time and never blocks.
pub struct RxProducer<'a, const N: usize> {
    ring: &'a RxRing<N>,
}

impl<const N: usize> RxProducer<'_, N> {
    /// Store a byte that just arrived on the link
    ///
    /// Only call this from the receive interrupt. When the buffer is full
    /// the byte is parked in the uncommitted tail slot and dropped.
    pub fn on_byte_received(&mut self, byte: u8) {
        let ring = self.ring;
        let tail = ring.tail.load(Ordering::Relaxed) as usize;

        ring.slots[tail].store(byte, Ordering::Relaxed);

        let next = (tail + 1) & RxRing::<N>::MASK;
        if next != ring.head.load(Ordering::Acquire) as usize {
            ring.tail.store(next as u8, Ordering::Release);
        }
    }

    /// Check if the next byte would be dropped
    pub fn is_full(&self) -> bool {
        let ring = self.ring;
        let tail = ring.tail.load(Ordering::Relaxed) as usize;
        (tail + 1) & RxRing::<N>::MASK == ring.head.load(Ordering::Acquire) as usize
    }
}

/// Main-loop handle of an [`RxRing`]
pub struct RxConsumer<'a, const N: usize> {
    ring: &'a RxRing<N>,
}

impl<const N: usize> RxConsumer<'_, N> {
    /// Number of buffered bytes, `(tail - head) mod N`
    ///
    /// Safe to call while the interrupt is pushing: the result may be
    /// stale by the time it is used, but only ever too small.
    pub fn available(&self) -> usize {
        self.ring.occupied()
    }

    /// Check if no bytes are buffered
    pub fn is_empty(&self) -> bool {
        self.available() == 0
    }

    /// Pop the oldest byte, or [`EMPTY_SENTINEL`] if the buffer is empty
    ///
    /// An empty buffer leaves `head` untouched. Callers are expected to
    /// check [`available`](Self::available) first; use
    /// [`try_get_byte`](Self::try_get_byte) to tell a real zero byte from
    /// an empty buffer.
    pub fn get_byte(&mut self) -> u8 {
        self.try_get_byte().unwrap_or(EMPTY_SENTINEL)
    }

    /// Pop the oldest byte if there is one
    pub fn try_get_byte(&mut self) -> Option<u8> {
        let ring = self.ring;
        let head = ring.head.load(Ordering::Relaxed) as usize;
        if head == ring.tail.load(Ordering::Acquire) as usize {
            return None;
        }

        let byte = ring.slots[head].load(Ordering::Relaxed);
        ring.head
            .store(((head + 1) & RxRing::<N>::MASK) as u8, Ordering::Release);
        Some(byte)
    }

    /// Pop up to `buf.len()` bytes, returning how many were copied
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut count = 0;
        for slot in buf.iter_mut() {
            match self.try_get_byte() {
                Some(byte) => {
                    *slot = byte;
                    count += 1;
                }
                None => break,
            }
        }
        count
    }

    /// Discard everything currently buffered
    pub fn clear(&mut self) {
        let tail = self.ring.tail.load(Ordering::Acquire);
        self.ring.head.store(tail, Ordering::Release);
    }
}
