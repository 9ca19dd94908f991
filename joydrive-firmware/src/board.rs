//! Board wiring
//!
//! | signal       | GPIO | function            |
//! |--------------|------|---------------------|
//! | console TX   | 0    | UART0               |
//! | console RX   | 1    | UART0               |
//! | BUTTON1      | 2    | input, pull-up      |
//! | SWITCH1      | 3    | input, pull-up      |
//! | SWITCH2      | 4    | input, pull-up      |
//! | LED0..LED4   | 5-9  | output              |
//! | pot SCK      | 10   | SPI1                |
//! | pot MOSI     | 11   | SPI1                |
//! | pot CS       | 13   | output, idles HIGH  |
//! | joystick X   | 26   | ADC0                |
//! | joystick Y   | 27   | ADC1                |
//! | speed knob   | 28   | ADC2                |

use defmt::*;
use embassy_rp::adc::{self, Adc, Blocking as AdcBlocking, Channel};
use embassy_rp::gpio::{self, AnyPin, Flex, Input, Output, Pull};
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{self, Spi};
use embassy_rp::uart::{Blocking as UartBlocking, Uart};
use embassy_rp::{Peri, Peripherals};

use joydrive_core::ControllerConfig;
use joydrive_drivers::{Button, EhPin, Indicators, PotBank, PotBus, SerialTx};
use joydrive_hal::{Level, SpiConfig, UartConfig};
use joydrive_hal_rp2040::{embassy_uart_config, BlockingSpi, FlexPin, InPin, RawUart};

/// Consecutive equal samples before a button or switch changes state
pub const DEBOUNCE_SAMPLES: u8 = 3;

pub type StatusLeds = Indicators<EhPin<Output<'static>>, 5>;
pub type Pots = PotBank<BlockingSpi<'static, SPI1>, FlexPin<'static>>;

/// Every peripheral the controller uses, set up and ready
pub struct Board {
    /// Owns the console pins and baud setup; data goes through `console`
    pub console_uart: Uart<'static, UartBlocking>,
    pub console: SerialTx<RawUart>,
    pub button1: Button<InPin<'static>>,
    pub switch1: Button<InPin<'static>>,
    pub switch2: Button<InPin<'static>>,
    pub leds: StatusLeds,
    pub pots: Pots,
    pub adc: Adc<'static, AdcBlocking>,
    pub joy_x: Channel<'static>,
    pub joy_y: Channel<'static>,
    pub speed: Channel<'static>,
}

impl Board {
    pub fn new(p: Peripherals, config: &ControllerConfig) -> Self {
        // Console: embassy does pin muxing and baud setup, the FIFO is
        // then driven through the raw registers
        let uart_config = UartConfig::with_baudrate(config.baudrate);
        let console_uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, embassy_uart_config(&uart_config));
        let console = SerialTx::new(RawUart::uart0());
        info!("Console UART at {} baud", config.baudrate);

        let input = |pin: Peri<'static, AnyPin>| {
            Button::new(
                InPin::new(Input::new(pin, Pull::Up)),
                true,
                DEBOUNCE_SAMPLES,
            )
        };
        let button1 = input(p.PIN_2.into());
        let switch1 = input(p.PIN_3.into());
        let switch2 = input(p.PIN_4.into());

        let led = |pin: Peri<'static, AnyPin>| EhPin::new(Output::new(pin, gpio::Level::Low), Level::Low);
        let leds = Indicators::new(
            [
                led(p.PIN_5.into()),
                led(p.PIN_6.into()),
                led(p.PIN_7.into()),
                led(p.PIN_8.into()),
                led(p.PIN_9.into()),
            ],
            false,
        );

        // Potentiometer bus: SPI1 transmit only, chip-select by hand
        let spi_config = SpiConfig::default();
        let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi::Config::default());
        let cs = FlexPin::new(Flex::new(p.PIN_13));
        let bus = PotBus::init(BlockingSpi::spi1(spi), cs, &spi_config);
        let pots = PotBank::new(bus, config.pots);
        info!("Pot bus at {} Hz, channels {}", spi_config.frequency, config.pots);

        let adc = Adc::new_blocking(p.ADC, adc::Config::default());
        let joy_x = Channel::new_pin(p.PIN_26, Pull::None);
        let joy_y = Channel::new_pin(p.PIN_27, Pull::None);
        let speed = Channel::new_pin(p.PIN_28, Pull::None);

        Self {
            console_uart,
            console,
            button1,
            switch1,
            switch2,
            leds,
            pots,
            adc,
            joy_x,
            joy_y,
            speed,
        }
    }
}
