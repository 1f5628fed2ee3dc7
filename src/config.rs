/// Overlay configuration
///
/// Settings the renderer consults when drawing the tracked state: which
/// optional readouts to include and where the overlay sits on screen. The
/// tracking core itself is never gated on these; it records everything it
/// observes regardless.
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest coordinate accepted for the overlay position, in GUI-scaled
/// pixels. Guards against configs written for screens that no longer exist.
const MAX_POSITION: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Draw the diamond/emerald spawn countdowns
    pub show_generation_times: bool,

    /// Draw the team upgrade readout (forge, Heal Pool, Dragon Buff,
    /// DeadShot)
    pub show_team_upgrades: bool,

    /// Draw the trap queue
    pub show_trap_queue: bool,

    /// Keep the overlay visible outside of games
    pub always_show: bool,

    /// Overlay position, distance from the screen's top-left corner
    pub hud_x: u32,
    pub hud_y: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            show_generation_times: true,
            show_team_upgrades: true,
            show_trap_queue: true,
            always_show: false,
            hud_x: 2,
            hud_y: 2,
        }
    }
}

impl OverlayConfig {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check_position(self.hud_x, self.hud_y)
    }

    /// Move the overlay. Rejected positions leave the stored position
    /// untouched.
    pub fn set_position(&mut self, x: u32, y: u32) -> Result<(), ConfigError> {
        Self::check_position(x, y)?;
        self.hud_x = x;
        self.hud_y = y;
        Ok(())
    }

    fn check_position(x: u32, y: u32) -> Result<(), ConfigError> {
        if x > MAX_POSITION || y > MAX_POSITION {
            return Err(ConfigError::InvalidPosition {
                x,
                y,
                max_x: MAX_POSITION,
                max_y: MAX_POSITION,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(OverlayConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejected_position_leaves_config_unchanged() {
        let mut config = OverlayConfig::default();
        let before = config.clone();

        let result = config.set_position(0, MAX_POSITION + 1);

        assert!(result.is_err());
        assert_eq!(config, before);
    }

    #[test]
    fn test_accepted_position_is_applied() {
        let mut config = OverlayConfig::default();
        config.set_position(120, 40).unwrap();
        assert_eq!((config.hud_x, config.hud_y), (120, 40));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = OverlayConfig {
            show_trap_queue: false,
            hud_x: 64,
            ..OverlayConfig::default()
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: OverlayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
