//! Integer to text conversion in an arbitrary radix
//!
//! Digits are produced most significant first and handed to a sink one
//! byte at a time, so the caller decides whether they go to a UART, a
//! buffer, or a test recorder. Nothing is allocated.

/// Number base between 2 and 36
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Radix(u8);

impl Radix {
    pub const BIN: Radix = Radix(2);
    pub const OCT: Radix = Radix(8);
    pub const DEC: Radix = Radix(10);
    pub const HEX: Radix = Radix(16);

    /// Create a radix, rejecting bases outside `2..=36`
    pub const fn new(base: u8) -> Option<Self> {
        if base >= 2 && base <= 36 {
            Some(Radix(base))
        } else {
            None
        }
    }

    /// Get the base as a number
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for Radix {
    fn default() -> Self {
        Radix::DEC
    }
}

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Emit `value` in `radix`, most significant digit first
///
/// Zero is emitted as a single `0`. Stops at the first sink error.
pub fn emit_unsigned<E, F>(value: u32, radix: Radix, emit: &mut F) -> Result<(), E>
where
    F: FnMut(u8) -> Result<(), E>,
{
    let base = radix.value() as u32;
    if value >= base {
        emit_unsigned(value / base, radix, emit)?;
    }
    emit(DIGITS[(value % base) as usize])
}

/// Emit `value` in `radix`, with a leading `-` when negative
///
/// The magnitude is taken as unsigned, so `i32::MIN` prints correctly.
pub fn emit_signed<E, F>(value: i32, radix: Radix, emit: &mut F) -> Result<(), E>
where
    F: FnMut(u8) -> Result<(), E>,
{
    if value < 0 {
        emit(b'-')?;
    }
    emit_unsigned(value.unsigned_abs(), radix, emit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use proptest::prelude::*;
    use std::string::String;
    use std::vec::Vec;

    fn unsigned(value: u32, radix: Radix) -> String {
        let mut out = Vec::new();
        let _ = emit_unsigned(value, radix, &mut |b| {
            out.push(b);
            Ok::<(), Infallible>(())
        });
        String::from_utf8(out).unwrap()
    }

    fn signed(value: i32, radix: Radix) -> String {
        let mut out = Vec::new();
        let _ = emit_signed(value, radix, &mut |b| {
            out.push(b);
            Ok::<(), Infallible>(())
        });
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_radix_range() {
        assert_eq!(Radix::new(0), None);
        assert_eq!(Radix::new(1), None);
        assert_eq!(Radix::new(2), Some(Radix::BIN));
        assert_eq!(Radix::new(36).map(Radix::value), Some(36));
        assert_eq!(Radix::new(37), None);
        assert_eq!(Radix::default(), Radix::DEC);
    }

    #[test]
    fn test_unsigned_known_values() {
        assert_eq!(unsigned(0, Radix::DEC), "0");
        assert_eq!(unsigned(255, Radix::HEX), "ff");
        assert_eq!(unsigned(5, Radix::BIN), "101");
        assert_eq!(unsigned(8, Radix::OCT), "10");
        assert_eq!(unsigned(35, Radix::new(36).unwrap()), "z");
        assert_eq!(unsigned(u32::MAX, Radix::DEC), "4294967295");
        assert_eq!(unsigned(u32::MAX, Radix::HEX), "ffffffff");
    }

    #[test]
    fn test_signed_known_values() {
        assert_eq!(signed(-42, Radix::DEC), "-42");
        assert_eq!(signed(42, Radix::DEC), "42");
        assert_eq!(signed(0, Radix::DEC), "0");
        assert_eq!(signed(-1, Radix::HEX), "-1");
        assert_eq!(signed(i32::MIN, Radix::DEC), "-2147483648");
        assert_eq!(signed(i32::MAX, Radix::DEC), "2147483647");
    }

    #[test]
    fn test_sink_error_stops_output() {
        let mut count = 0;
        let result = emit_unsigned(12345, Radix::DEC, &mut |_| {
            count += 1;
            if count == 2 {
                Err(())
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err(()));
        assert_eq!(count, 2);
    }

    proptest! {
        #[test]
        fn prop_unsigned_matches_std(value: u32) {
            prop_assert_eq!(unsigned(value, Radix::DEC), std::format!("{}", value));
            prop_assert_eq!(unsigned(value, Radix::HEX), std::format!("{:x}", value));
            prop_assert_eq!(unsigned(value, Radix::BIN), std::format!("{:b}", value));
        }

        #[test]
        fn prop_signed_matches_std(value: i32) {
            prop_assert_eq!(signed(value, Radix::DEC), std::format!("{}", value));
        }

        #[test]
        fn prop_parses_back(value: u32, base in 2u8..=36) {
            let radix = Radix::new(base).unwrap();
            let text = unsigned(value, radix);
            prop_assert_eq!(u32::from_str_radix(&text, base as u32).unwrap(), value);
        }
    }
}
