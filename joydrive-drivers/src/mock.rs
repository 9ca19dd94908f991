//! Recording hardware stand-ins shared by the driver tests

use core::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use joydrive_hal::{
    ConfigurablePin, InputPin, OutputPin, PinDirection, SpiConfig, SpiPeripheral, UartRx, UartTx,
};

/// Something that happened on the wire, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Configure,
    CsHigh,
    CsLow,
    CsOutput,
    Byte(u8),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Chip-select pin writing its edges into a shared log
pub struct CsPin {
    pub log: Log,
    pub high: bool,
    pub direction: PinDirection,
}

impl CsPin {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            high: false,
            direction: PinDirection::Input,
        }
    }
}

impl OutputPin for CsPin {
    fn set_high(&mut self) {
        self.high = true;
        self.log.borrow_mut().push(Event::CsHigh);
    }

    fn set_low(&mut self) {
        self.high = false;
        self.log.borrow_mut().push(Event::CsLow);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

impl ConfigurablePin for CsPin {
    fn set_direction(&mut self, direction: PinDirection) {
        self.direction = direction;
        if direction == PinDirection::Output {
            self.log.borrow_mut().push(Event::CsOutput);
        }
    }

    fn direction(&self) -> PinDirection {
        self.direction
    }
}

/// SPI block that completes every transfer after `latency` status polls
///
/// `latency: None` models a peripheral that never completes.
pub struct Spi {
    pub log: Log,
    pub config: Option<SpiConfig>,
    pub latency: Option<u32>,
    pub pending: Option<u32>,
    /// Status flag reads so far
    pub polls: u32,
}

impl Spi {
    pub fn new(log: &Log, latency: Option<u32>) -> Self {
        Self {
            log: log.clone(),
            config: None,
            latency,
            pending: None,
            polls: 0,
        }
    }
}

impl SpiPeripheral for Spi {
    fn configure_master(&mut self, config: &SpiConfig) {
        self.config = Some(*config);
        self.log.borrow_mut().push(Event::Configure);
    }

    fn load(&mut self, byte: u8) {
        self.log.borrow_mut().push(Event::Byte(byte));
        self.pending = self.latency;
    }

    fn transfer_complete(&mut self) -> bool {
        self.polls += 1;
        match self.pending {
            Some(0) => true,
            Some(n) => {
                self.pending = Some(n - 1);
                false
            }
            None => false,
        }
    }
}

/// Plain output pin with no log
#[derive(Default)]
pub struct Led {
    pub high: bool,
}

impl OutputPin for Led {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input pin reading whatever the test last set
#[derive(Default)]
pub struct Switch {
    pub high: core::cell::Cell<bool>,
}

impl InputPin for Switch {
    fn is_high(&self) -> bool {
        self.high.get()
    }
}

/// UART recording transmitted bytes and replaying queued received ones
///
/// The transmitter reports busy for `tx_latency` polls before each byte.
/// `tx_latency: None` models a transmitter that never becomes ready.
pub struct Uart {
    pub sent: Vec<u8>,
    pub incoming: Vec<u8>,
    pub tx_latency: Option<u32>,
    pub busy: u32,
}

impl Uart {
    pub fn new(tx_latency: Option<u32>) -> Self {
        Self {
            sent: Vec::new(),
            incoming: Vec::new(),
            tx_latency,
            busy: tx_latency.unwrap_or(0),
        }
    }

    pub fn sent_str(&self) -> &str {
        core::str::from_utf8(&self.sent).unwrap()
    }
}

impl UartTx for Uart {
    fn tx_ready(&mut self) -> bool {
        match self.tx_latency {
            None => false,
            Some(_) if self.busy > 0 => {
                self.busy -= 1;
                false
            }
            Some(_) => true,
        }
    }

    fn load(&mut self, byte: u8) {
        self.sent.push(byte);
        self.busy = self.tx_latency.unwrap_or(0);
    }
}

impl UartRx for Uart {
    fn rx_pending(&mut self) -> bool {
        !self.incoming.is_empty()
    }

    fn read_data(&mut self) -> u8 {
        self.incoming.remove(0)
    }
}
