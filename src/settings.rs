//! Game rules
//!
//! Defaults reproduce the canonical 10x10 board with a 25 point budget.
//! Rule sets can be round-tripped through JSON so a host can ship variants.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Point budget and board geometry for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board side including the border ring (interior is `side - 2`)
    pub side: usize,
    /// Points the player starts with
    pub starting_points: u32,
    /// Points lost on a wrong guess; also the minimum balance to guess at all
    pub guess_cost: u32,
    /// Points charged for each border cell the first time a ray enters or exits there
    pub ray_cell_cost: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            side: BOARD_SIDE,
            starting_points: STARTING_POINTS,
            guess_cost: GUESS_COST,
            ray_cell_cost: RAY_CELL_COST,
        }
    }
}

impl Settings {
    /// Check the rule values make a playable game
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.side < MIN_BOARD_SIDE {
            return Err(SettingsError::Invalid {
                field: "side",
                reason: format!("{} is below the minimum of {}", self.side, MIN_BOARD_SIDE),
            });
        }
        if self.side > MAX_BOARD_SIDE {
            return Err(SettingsError::Invalid {
                field: "side",
                reason: format!("{} is above the maximum of {}", self.side, MAX_BOARD_SIDE),
            });
        }
        if self.guess_cost == 0 {
            return Err(SettingsError::Invalid {
                field: "guess_cost",
                reason: "a free guess would let the player enumerate the board".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate a rule set; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!(
            "Loaded settings: side={}, points={}, guess_cost={}, ray_cell_cost={}",
            settings.side,
            settings.starting_points,
            settings.guess_cost,
            settings.ray_cell_cost
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_canonical() {
        let settings = Settings::default();
        assert_eq!(settings.side, 10);
        assert_eq!(settings.starting_points, 25);
        assert_eq!(settings.guess_cost, 5);
        assert_eq!(settings.ray_cell_cost, 1);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let settings = Settings::from_json(r#"{ "side": 12, "starting_points": 40 }"#).unwrap();
        assert_eq!(settings.side, 12);
        assert_eq!(settings.starting_points, 40);
        assert_eq!(settings.guess_cost, GUESS_COST);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            side: 8,
            ray_cell_cost: 2,
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_tiny_board() {
        let err = Settings::from_json(r#"{ "side": 2 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "side", .. }));
    }

    #[test]
    fn test_rejects_huge_board() {
        let err = Settings::from_json(r#"{ "side": 100000 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "side", .. }));
        assert!(Settings::from_json(r#"{ "side": 256 }"#).is_ok());
    }

    #[test]
    fn test_rejects_free_guess() {
        let err = Settings::from_json(r#"{ "guess_cost": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "guess_cost", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ side: ").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }
}
