//! Roster models: season totals per player and weekly lineup entries.

use serde::{Deserialize, Serialize};

/// Lineup slot marker for benched players.
pub const BENCH_SLOT: &str = "BE";

/// Lineup slot marker for injured reserve.
pub const INJURED_RESERVE_SLOT: &str = "IR";

/// A player on an owner's roster with season-long production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub year: u16,
    pub owner: String,
    pub team_name: String,
    pub player_name: String,

    /// Roster position (`BE` for bench, `FLEX` is its own slot)
    pub position: String,

    #[serde(default)]
    pub pro_team: Option<String>,

    #[serde(default)]
    pub total_points: f64,
}

/// One player's line in an owner's weekly roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupEntry {
    pub year: u16,
    pub week: u32,
    pub owner: String,
    pub team_name: String,
    pub player_name: String,

    /// Player's eligible position (QB, RB, WR, TE, K, D/ST, ...)
    pub position: String,

    /// Slot the player was actually started in, or `BE` / `IR`
    pub lineup_slot: String,

    pub points: f64,
}

impl LineupEntry {
    /// Whether the player was in the started lineup.
    pub fn is_starter(&self) -> bool {
        self.lineup_slot != BENCH_SLOT && self.lineup_slot != INJURED_RESERVE_SLOT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slot: &str) -> LineupEntry {
        LineupEntry {
            year: 2023,
            week: 5,
            owner: "Rory McKee".to_string(),
            team_name: "Rordogg".to_string(),
            player_name: "Travis Kelce".to_string(),
            position: "TE".to_string(),
            lineup_slot: slot.to_string(),
            points: 14.6,
        }
    }

    #[test]
    fn test_is_starter() {
        assert!(entry("TE").is_starter());
        assert!(entry("FLEX").is_starter());
        assert!(!entry(BENCH_SLOT).is_starter());
        assert!(!entry(INJURED_RESERVE_SLOT).is_starter());
    }

    #[test]
    fn test_roster_entry_optional_pro_team() {
        let json = r#"{"year":2019,"owner":"A","team_name":"T","player_name":"P",
            "position":"BE","total_points":42.5}"#;
        let entry: RosterEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.pro_team, None);
        assert_eq!(entry.position, BENCH_SLOT);
    }
}
