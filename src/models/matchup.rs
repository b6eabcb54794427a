//! Matchup model: one head-to-head game in a given week.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::GameResult;

/// A single game between two teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub year: u16,
    pub week: u32,

    #[serde(default)]
    pub is_playoff: bool,

    /// `team_id` of the home side (see [`super::Season::team_id`])
    pub home_team: u32,

    /// `team_id` of the away side
    pub away_team: u32,

    pub home_score: f64,
    pub away_score: f64,
}

impl Matchup {
    /// Result for the home side.
    pub fn home_result(&self) -> GameResult {
        GameResult::from_scores(self.home_score, self.away_score)
    }

    pub fn is_tie(&self) -> bool {
        self.home_result() == GameResult::Tie
    }

    /// Absolute point differential.
    pub fn differential(&self) -> f64 {
        (self.home_score - self.away_score).abs()
    }

    pub fn combined_points(&self) -> f64 {
        self.home_score + self.away_score
    }

    /// Unordered team pair, smaller id first.
    pub fn pair_key(&self) -> (u32, u32) {
        if self.home_team <= self.away_team {
            (self.home_team, self.away_team)
        } else {
            (self.away_team, self.home_team)
        }
    }

    /// Chronological order: year, then regular season before playoffs,
    /// then week.
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        (self.year, self.is_playoff, self.week).cmp(&(other.year, other.is_playoff, other.week))
    }

    /// Both sides as (team, score, opponent, opponent score, result).
    pub fn sides(&self) -> [MatchupSide; 2] {
        let home = self.home_result();
        [
            MatchupSide {
                team: self.home_team,
                score: self.home_score,
                opponent: self.away_team,
                opponent_score: self.away_score,
                result: home,
            },
            MatchupSide {
                team: self.away_team,
                score: self.away_score,
                opponent: self.home_team,
                opponent_score: self.home_score,
                result: home.flipped(),
            },
        ]
    }
}

/// One team's view of a matchup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchupSide {
    pub team: u32,
    pub score: f64,
    pub opponent: u32,
    pub opponent_score: f64,
    pub result: GameResult,
}

/// Sort matchups chronologically, keeping input order within a week.
pub fn chronological<'a, I>(matchups: I) -> Vec<&'a Matchup>
where
    I: IntoIterator<Item = &'a Matchup>,
{
    let mut sorted: Vec<&Matchup> = matchups.into_iter().collect();
    sorted.sort_by(|a, b| a.chronological_cmp(b));
    sorted
}
