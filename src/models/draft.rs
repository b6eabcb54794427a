//! Auction draft pick model.

use serde::{Deserialize, Serialize};

/// A single auction draft pick with the player's season production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPick {
    pub year: u16,
    pub player_name: String,
    pub position: String,
    pub owner: String,
    pub team_name: String,

    /// Auction price in dollars (0 = free pick / undrafted)
    #[serde(default)]
    pub bid_amount: u32,

    /// Fantasy points the player scored for the season
    #[serde(default)]
    pub total_points_scored: f64,
}

impl DraftPick {
    /// Points per auction dollar, `None` for free picks.
    pub fn raw_value(&self) -> Option<f64> {
        if self.bid_amount == 0 {
            None
        } else {
            Some(self.total_points_scored / self.bid_amount as f64)
        }
    }
}
