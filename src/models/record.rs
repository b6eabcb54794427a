//! Win/loss/tie tallies shared by standings and head-to-head views.

use serde::{Deserialize, Serialize};

/// Outcome of a single game from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Loss,
    Tie,
}

impl GameResult {
    /// Result for a side scoring `score` against `opponent_score`.
    pub fn from_scores(score: f64, opponent_score: f64) -> Self {
        if score > opponent_score {
            GameResult::Win
        } else if score < opponent_score {
            GameResult::Loss
        } else {
            GameResult::Tie
        }
    }

    /// The same game seen from the other side.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Tie => GameResult::Tie,
        }
    }
}

/// Win/loss/tie record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLossRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl WinLossRecord {
    /// Create a new record.
    pub fn new(wins: u32, losses: u32, ties: u32) -> Self {
        Self { wins, losses, ties }
    }

    /// Count one game.
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Tie => self.ties += 1,
        }
    }

    /// Total games played. Ties count as games played.
    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Win percentage (0-100, one decimal), `None` with no games.
    pub fn win_percentage(&self) -> Option<f64> {
        crate::calculate::percentage(self.wins, self.total_games())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_from_scores() {
        assert_eq!(GameResult::from_scores(101.2, 99.0), GameResult::Win);
        assert_eq!(GameResult::from_scores(80.0, 99.0), GameResult::Loss);
        assert_eq!(GameResult::from_scores(99.0, 99.0), GameResult::Tie);
    }

    #[test]
    fn test_game_result_flipped() {
        assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
        assert_eq!(GameResult::Loss.flipped(), GameResult::Win);
        assert_eq!(GameResult::Tie.flipped(), GameResult::Tie);
    }

    #[test]
    fn test_ties_count_as_games_not_wins() {
        let record = WinLossRecord::new(6, 3, 1);
        assert_eq!(record.total_games(), 10);
        assert_eq!(record.win_percentage(), Some(60.0));
    }

    #[test]
    fn test_win_percentage_rounds_to_one_decimal() {
        let record = WinLossRecord::new(2, 1, 0);
        assert_eq!(record.win_percentage(), Some(66.7));
    }

    #[test]
    fn test_empty_record_has_no_percentage() {
        assert_eq!(WinLossRecord::default().win_percentage(), None);
    }

    #[test]
    fn test_record_counts_each_result() {
        let mut record = WinLossRecord::default();
        record.record(GameResult::Win);
        record.record(GameResult::Win);
        record.record(GameResult::Tie);
        record.record(GameResult::Loss);
        assert_eq!(record, WinLossRecord::new(2, 1, 1));
    }
}
