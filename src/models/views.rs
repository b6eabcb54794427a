//! Derived view documents consumed read-only by the presentation layer.
//!
//! Every document is rebuilt from scratch on each run. Optional fields
//! that are `None` mean "no data for that period" and are left out of
//! the serialized output rather than written as zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{TeamOwner, WinLossRecord};

/// League-level summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub league_name: String,
    pub total_seasons: usize,
    pub total_teams: usize,
    pub total_owners: usize,
    pub total_matchups: usize,
    pub first_season: Option<u16>,
    pub latest_season: Option<u16>,
    pub years: Vec<u16>,
    /// Digest of the input snapshot these views were derived from
    pub input_digest: String,
}

/// One team's row in a season's standings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub year: u16,
    pub team_id: u32,
    pub owner: String,
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub games_played: u32,
    pub win_percentage: Option<f64>,
    pub points_for: f64,
    pub points_against: f64,
    pub regular_season_rank: u32,
    pub final_standing: Option<u32>,
    /// Rank by points_for within the season (1 = most points)
    pub points_rank: u32,
    pub total_teams: u32,
}

impl StandingRow {
    pub fn is_champion(&self) -> bool {
        self.final_standing == Some(1)
    }

    /// Whether the team finished inside the playoff field.
    pub fn made_playoffs(&self, playoff_teams: u32) -> bool {
        matches!(self.final_standing, Some(f) if f <= playoff_teams)
    }
}

/// A streak of consecutive wins or losses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub streak_length: u32,
    pub start_year: u16,
    pub start_week: u32,
    pub end_year: u16,
    pub end_week: u32,
}

/// Longest streaks for one owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerStreaks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_win_streak: Option<Streak>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_loss_streak: Option<Streak>,
}

/// Career totals for one owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllTimeStats {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub win_percentage: Option<f64>,
    pub points_for: f64,
    pub points_against: f64,

    pub championships: u32,
    pub championship_years: Vec<u16>,
    pub second_place: u32,
    pub second_place_years: Vec<u16>,
    pub third_place: u32,
    pub third_place_years: Vec<u16>,
    pub toilet_bowl: u32,
    pub toilet_bowl_years: Vec<u16>,

    pub playoff_appearances: u32,
    pub playoff_years: Vec<u16>,

    /// 7 per title, 3 per runner-up, 1 per third, -1 per toilet bowl
    pub ranking_points: i32,

    pub top_3_pct: Option<f64>,
    pub toilet_bowl_pct: Option<f64>,
    pub playoff_appearance_pct: Option<f64>,
}

/// One season inside an owner block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerSeason {
    pub year: u16,
    pub team_id: u32,
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub win_percentage: Option<f64>,
    pub points_for: f64,
    pub points_against: f64,
    pub regular_season_rank: u32,
    pub final_standing: Option<u32>,
    pub points_rank: u32,
}

/// Per-owner all-time block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub owner: String,
    pub seasons_played: u32,
    pub years_active: Vec<u16>,
    pub first_season: Option<u16>,
    pub last_season: Option<u16>,
    pub team_names: Vec<String>,
    pub all_time: AllTimeStats,
    #[serde(flatten)]
    pub streaks: OwnerStreaks,
    pub seasons: Vec<OwnerSeason>,
}

/// A matchup with names, owners, and the derived result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupRow {
    pub year: u16,
    pub week: u32,
    pub is_playoff: bool,
    pub home_team_id: u32,
    pub home_team: String,
    pub home_owner: String,
    pub home_score: f64,
    pub away_team_id: u32,
    pub away_team: String,
    pub away_owner: String,
    pub away_score: f64,
    /// Winning team name, `None` for a tie
    pub winner: Option<String>,
    pub is_tie: bool,
    pub point_differential: f64,
}

/// One owner's record and scoring against a single opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadToHeadRecord {
    #[serde(flatten)]
    pub record: WinLossRecord,
    pub points_for: f64,
    pub points_against: f64,
}

/// owner -> opponent -> record. Owners who never met are absent.
pub type HeadToHeadMatrix = BTreeMap<String, BTreeMap<String, HeadToHeadRecord>>;

/// Final placements for one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayoffResult {
    pub year: u16,
    pub champion: Option<TeamOwner>,
    pub runner_up: Option<TeamOwner>,
    pub third_place: Option<TeamOwner>,
    pub toilet_bowl: Option<TeamOwner>,
    pub playoff_teams: Vec<TeamOwner>,
}

/// A single team's score in a single game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub year: u16,
    pub week: u32,
    pub is_playoff: bool,
    pub team: String,
    pub owner: String,
    pub score: f64,
    pub opponent: String,
    pub opponent_owner: String,
    pub opponent_score: f64,
}

/// A whole game, winner side first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub year: u16,
    pub week: u32,
    pub is_playoff: bool,
    pub winner: String,
    pub winner_owner: String,
    pub winner_score: f64,
    pub loser: String,
    pub loser_owner: String,
    pub loser_score: f64,
    pub is_tie: bool,
    pub point_differential: f64,
    pub combined_points: f64,
}

/// A team-season superlative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub year: u16,
    pub team_name: String,
    pub owner: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
}

/// A record joining standings with final placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeRecord {
    pub year: u16,
    pub team_name: String,
    pub owner: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_rank: u32,
    pub total_teams: u32,
    pub final_standing: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standing_gap: Option<i64>,
}

/// A league-wide streak record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRecord {
    pub owner: String,
    #[serde(flatten)]
    pub streak: Streak,
}

/// Named superlatives. Absent keys mean no qualifying data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_score: Option<ScoreRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_score: Option<ScoreRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biggest_blowout: Option<GameRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closest_game: Option<GameRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_scoring_loss: Option<ScoreRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_scoring_win: Option<ScoreRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_combined_points: Option<GameRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_points_season: Option<SeasonRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fewest_points_season: Option<SeasonRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_wins_season: Option<SeasonRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fewest_wins_season: Option<SeasonRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_points_against_season: Option<SeasonRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_champion: Option<NarrativeRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_team_best_result: Option<NarrativeRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unluckiest_reg_season_winner: Option<NarrativeRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_team_worst_result: Option<NarrativeRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_win_streak: Option<StreakRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_loss_streak: Option<StreakRecord>,
}

/// A draft pick with its price-to-production ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftValueRow {
    pub year: u16,
    pub player_name: String,
    pub position: String,
    pub owner: String,
    pub team_name: String,
    pub bid_amount: u32,
    pub total_points_scored: f64,
    /// Points per auction dollar, `None` for free picks
    pub value: Option<f64>,
}

/// A starter chosen by the optimal lineup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupSlotPick {
    pub slot: String,
    pub player_name: String,
    pub position: String,
    pub points: f64,
}

/// One owner's week: started vs best possible lineup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalLineupRow {
    pub year: u16,
    pub week: u32,
    pub owner: String,
    pub team_name: String,
    pub actual_points: f64,
    pub optimal_points: f64,
    pub bench_points: f64,
    pub efficiency: Option<f64>,
    pub optimal_starters: Vec<LineupSlotPick>,
}

/// One owner's season of lineup decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupEfficiency {
    pub year: u16,
    pub owner: String,
    pub weeks: u32,
    pub actual_points: f64,
    pub optimal_points: f64,
    pub bench_points: f64,
    pub efficiency: Option<f64>,
}

/// Every derived document from one computation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueViews {
    pub metadata: Metadata,
    pub owners: Vec<OwnerSummary>,
    pub standings: Vec<StandingRow>,
    pub matchups: Vec<MatchupRow>,
    pub head_to_head: HeadToHeadMatrix,
    pub playoffs: Vec<PlayoffResult>,
    pub records: RecordBook,
    pub draft: Vec<DraftValueRow>,
    pub best_draft_picks: Vec<DraftValueRow>,
    pub worst_draft_picks: Vec<DraftValueRow>,
    pub rosters: Vec<super::RosterEntry>,
    pub optimal_lineups: Vec<OptimalLineupRow>,
    pub lineup_efficiency: Vec<LineupEfficiency>,
}
