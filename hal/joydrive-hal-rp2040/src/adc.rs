//! ADC sampling
//!
//! RP2040 ADC inputs:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//!
//! Conversions are 12 bit; the controller works in 8 bit.

use embassy_rp::adc::{Adc, Blocking, Channel};

/// Bits dropped to go from a 12 bit conversion to a byte
const ADC_SHIFT: u32 = 4;

/// Take one conversion scaled to `0..=255`
///
/// Returns `None` if the conversion failed.
pub fn sample_u8(adc: &mut Adc<'_, Blocking>, channel: &mut Channel<'_>) -> Option<u8> {
    adc.blocking_read(channel)
        .ok()
        .map(|raw| (raw >> ADC_SHIFT).min(u8::MAX as u16) as u8)
}
