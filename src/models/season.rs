//! Season snapshot: one team's regular season and playoff outcome.

use serde::{Deserialize, Serialize};

use super::WinLossRecord;

/// One team's season as exported by the league host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    /// Season year
    pub year: u16,

    /// Team identifier, unique within a year
    pub team_id: u32,

    /// Owner name (canonicalised at load time)
    pub owner: String,

    /// Team name for this year
    pub team_name: String,

    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,

    pub points_for: f64,
    pub points_against: f64,

    /// Regular season rank (1 = best)
    pub regular_season_rank: u32,

    /// Final placement including playoffs. 1 = champion, 2 = runner-up,
    /// 3 = third place. `None` when the era has no playoff data.
    #[serde(default)]
    pub final_standing: Option<u32>,
}

impl Season {
    /// Regular season record.
    pub fn record(&self) -> WinLossRecord {
        WinLossRecord::new(self.wins, self.losses, self.ties)
    }

    /// Games played, ties included.
    pub fn games_played(&self) -> u32 {
        self.record().total_games()
    }
}
