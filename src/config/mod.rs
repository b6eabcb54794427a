//! Configuration loading and validation.

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// League rules that shape placements and superlatives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueConfig {
    /// Display name of the league
    #[serde(default = "default_league_name")]
    pub name: String,

    /// Teams with a final standing at or below this made the playoffs
    #[serde(default = "default_playoff_teams")]
    pub playoff_teams: u32,

    /// Minimum games for a season to count toward "fewest" superlatives
    #[serde(default = "default_full_season_min_games")]
    pub full_season_min_games: u32,
}

fn default_league_name() -> String {
    "Fantasy League".to_string()
}

fn default_playoff_teams() -> u32 {
    6
}

fn default_full_season_min_games() -> u32 {
    10
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            name: default_league_name(),
            playoff_teams: default_playoff_teams(),
            full_season_min_games: default_full_season_min_games(),
        }
    }
}

/// Draft value ranking settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftConfig {
    /// Picks cheaper than this are left out of value rankings
    #[serde(default = "default_min_bid")]
    pub min_bid: u32,

    /// Length of the best/worst pick lists
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_min_bid() -> u32 {
    20
}

fn default_top_n() -> usize {
    10
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            min_bid: default_min_bid(),
            top_n: default_top_n(),
        }
    }
}

/// A starting lineup slot and the positions it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRule {
    pub slot: String,
    #[serde(default = "default_slot_count")]
    pub count: u32,
    pub eligible: Vec<String>,
}

fn default_slot_count() -> u32 {
    1
}

impl SlotRule {
    pub fn new(slot: &str, count: u32, eligible: &[&str]) -> Self {
        Self {
            slot: slot.to_string(),
            count,
            eligible: eligible.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn accepts(&self, position: &str) -> bool {
        self.eligible.iter().any(|p| p == position)
    }
}

/// Starting lineup shape used for optimal lineup calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineupConfig {
    #[serde(default = "default_slots")]
    pub slots: Vec<SlotRule>,
}

fn default_slots() -> Vec<SlotRule> {
    vec![
        SlotRule::new("QB", 1, &["QB"]),
        SlotRule::new("RB", 2, &["RB"]),
        SlotRule::new("WR", 2, &["WR"]),
        SlotRule::new("TE", 1, &["TE"]),
        SlotRule::new("FLEX", 1, &["RB", "WR", "TE"]),
        SlotRule::new("K", 1, &["K"]),
        SlotRule::new("D/ST", 1, &["D/ST"]),
    ]
}

impl Default for LineupConfig {
    fn default() -> Self {
        Self {
            slots: default_slots(),
        }
    }
}

/// Owner identity settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OwnersConfig {
    /// Raw display name -> canonical owner name
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub league: LeagueConfig,

    #[serde(default)]
    pub draft: DraftConfig,

    #[serde(default)]
    pub lineup: LineupConfig,

    #[serde(default)]
    pub owners: OwnersConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            league: LeagueConfig::default(),
            draft: DraftConfig::default(),
            lineup: LineupConfig::default(),
            owners: OwnersConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.league.playoff_teams == 0 {
            return Err(ConfigError::ValidationError(
                "Playoff field must have at least one team".to_string(),
            ));
        }

        if self.draft.top_n == 0 {
            return Err(ConfigError::ValidationError(
                "Draft top_n must be greater than 0".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for rule in &self.lineup.slots {
            if rule.count == 0 || rule.eligible.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "Lineup slot {} needs a count and at least one eligible position",
                    rule.slot
                )));
            }
            if !seen.insert(rule.slot.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "Lineup slot {} is defined twice",
                    rule.slot
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.league.playoff_teams, 6);
        assert_eq!(config.draft.min_bid, 20);
        assert_eq!(config.lineup.slots.len(), 7);
    }

    #[test]
    fn test_flex_accepts_skill_positions() {
        let config = LineupConfig::default();
        let flex = config.slots.iter().find(|s| s.slot == "FLEX").unwrap();

        assert!(flex.accepts("RB"));
        assert!(flex.accepts("TE"));
        assert!(!flex.accepts("QB"));
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_playoff_field() {
        let mut config = AppConfig::default();
        config.league.playoff_teams = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_slot() {
        let mut config = AppConfig::default();
        config.lineup.slots.push(SlotRule::new("SUPERFLEX", 1, &[]));

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_duplicate_slot() {
        let mut config = AppConfig::default();
        config.lineup.slots.push(SlotRule::new("QB", 1, &["QB"]));

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
            [league]
            name = "Dynasty League"
            playoff_teams = 4

            [owners.aliases]
            touchcoffis86 = "Jamie Coffis"

            [[lineup.slots]]
            slot = "QB"
            eligible = ["QB"]

            [[lineup.slots]]
            slot = "OP"
            count = 2
            eligible = ["QB", "RB", "WR", "TE"]
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.league.name, "Dynasty League");
        assert_eq!(config.league.playoff_teams, 4);
        assert_eq!(config.league.full_season_min_games, 10);
        assert_eq!(config.owners.aliases["touchcoffis86"], "Jamie Coffis");
        assert_eq!(config.lineup.slots[0].count, 1);
        assert_eq!(config.lineup.slots[1].count, 2);
        assert_eq!(config.draft.top_n, 10);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        // Should be parseable
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.data_dir, parsed.data_dir);
        assert_eq!(config.lineup.slots, parsed.lineup.slots);
    }
}
