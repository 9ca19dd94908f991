//! Controller configuration
//!
//! Board-level settings the core logic needs. The firmware builds one at
//! boot and checks it with [`ControllerConfig::validate`] before any
//! peripheral is touched.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest channel address on the digital potentiometer (AD520x: six
/// channels, addresses 0-5)
pub const MAX_POT_CHANNEL: u8 = 5;

/// Default diagnostic line length
pub const DEFAULT_LINE_LEN: usize = 32;

/// Configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Diagnostic baudrate is zero
    ZeroBaudrate,
    /// Channel address past the potentiometer's last channel
    ChannelOutOfRange(u8),
    /// Two signals share one channel address
    DuplicateChannel(u8),
    /// Line length limit is zero
    ZeroLineLength,
}

/// Digital potentiometer channel address per analog signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PotChannels {
    /// Joystick X axis
    pub joy_x: u8,
    /// Joystick Y axis
    pub joy_y: u8,
    /// Speed knob
    pub speed: u8,
}

impl PotChannels {
    /// Channel addresses in bus write order
    pub fn as_array(&self) -> [u8; 3] {
        [self.joy_x, self.joy_y, self.speed]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let channels = self.as_array();
        for (i, &channel) in channels.iter().enumerate() {
            if channel > MAX_POT_CHANNEL {
                return Err(ConfigError::ChannelOutOfRange(channel));
            }
            if channels[..i].contains(&channel) {
                return Err(ConfigError::DuplicateChannel(channel));
            }
        }
        Ok(())
    }
}

impl Default for PotChannels {
    fn default() -> Self {
        Self {
            joy_x: 0,
            joy_y: 1,
            speed: 2,
        }
    }
}

/// Board-level controller settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerConfig {
    /// Diagnostic link baudrate
    pub baudrate: u32,
    /// Potentiometer channel map
    pub pots: PotChannels,
    /// Longest diagnostic line kept before truncation
    pub max_line_len: usize,
}

impl ControllerConfig {
    /// Check every field, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.baudrate == 0 {
            return Err(ConfigError::ZeroBaudrate);
        }
        if self.max_line_len == 0 {
            return Err(ConfigError::ZeroLineLength);
        }
        self.pots.validate()
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            baudrate: 115_200,
            pots: PotChannels::default(),
            max_line_len: DEFAULT_LINE_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ControllerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.pots.as_array(), [0, 1, 2]);
    }

    #[test]
    fn test_zero_baudrate() {
        let config = ControllerConfig {
            baudrate: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroBaudrate));
    }

    #[test]
    fn test_zero_line_length() {
        let config = ControllerConfig {
            max_line_len: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroLineLength));
    }

    #[test]
    fn test_channel_out_of_range() {
        let pots = PotChannels {
            joy_x: 0,
            joy_y: 6,
            speed: 2,
        };
        assert_eq!(pots.validate(), Err(ConfigError::ChannelOutOfRange(6)));

        let pots = PotChannels {
            joy_x: 5,
            joy_y: 4,
            speed: 3,
        };
        assert_eq!(pots.validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_channel() {
        let pots = PotChannels {
            joy_x: 3,
            joy_y: 1,
            speed: 3,
        };
        assert_eq!(pots.validate(), Err(ConfigError::DuplicateChannel(3)));
    }
}
