//! Per-owner career aggregation.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::standings::SeasonStandings;
use super::streaks::StreakTable;
use super::{percentage, round2};
use crate::config::LeagueConfig;
use crate::models::{AllTimeStats, OwnerSeason, OwnerSummary, StandingRow, WinLossRecord};

/// Weighted placement score used to order owners all-time.
pub fn ranking_points(championships: u32, second_place: u32, third_place: u32, toilet_bowl: u32) -> i32 {
    7 * championships as i32 + 3 * second_place as i32 + third_place as i32 - toilet_bowl as i32
}

#[derive(Default)]
struct OwnerTotals {
    record: WinLossRecord,
    points_for: f64,
    points_against: f64,
    years: BTreeSet<u16>,
    team_names: Vec<String>,
    seasons: Vec<OwnerSeason>,
    championship_years: Vec<u16>,
    second_place_years: Vec<u16>,
    third_place_years: Vec<u16>,
    toilet_bowl_years: Vec<u16>,
    playoff_years: Vec<u16>,
}

impl OwnerTotals {
    fn add(&mut self, row: &StandingRow, toilet_bowl: bool, playoff_teams: u32) {
        self.record.wins += row.wins;
        self.record.losses += row.losses;
        self.record.ties += row.ties;
        self.points_for += row.points_for;
        self.points_against += row.points_against;
        self.years.insert(row.year);
        if !self.team_names.contains(&row.team_name) {
            self.team_names.push(row.team_name.clone());
        }

        match row.final_standing {
            Some(1) => self.championship_years.push(row.year),
            Some(2) => self.second_place_years.push(row.year),
            Some(3) => self.third_place_years.push(row.year),
            _ => {}
        }
        if row.made_playoffs(playoff_teams) {
            self.playoff_years.push(row.year);
        }
        if toilet_bowl {
            self.toilet_bowl_years.push(row.year);
        }

        self.seasons.push(OwnerSeason {
            year: row.year,
            team_id: row.team_id,
            team_name: row.team_name.clone(),
            wins: row.wins,
            losses: row.losses,
            ties: row.ties,
            win_percentage: row.win_percentage,
            points_for: row.points_for,
            points_against: row.points_against,
            regular_season_rank: row.regular_season_rank,
            final_standing: row.final_standing,
            points_rank: row.points_rank,
        });
    }

    fn into_summary(self, owner: String, streaks: &StreakTable) -> OwnerSummary {
        let seasons_played = self.years.len() as u32;
        // Placements count team-seasons, so an owner with two teams in a
        // year contributes two to the denominator.
        let team_seasons = self.seasons.len() as u32;
        let championships = self.championship_years.len() as u32;
        let second_place = self.second_place_years.len() as u32;
        let third_place = self.third_place_years.len() as u32;
        let toilet_bowl = self.toilet_bowl_years.len() as u32;
        let playoff_appearances = self.playoff_years.len() as u32;

        let all_time = AllTimeStats {
            wins: self.record.wins,
            losses: self.record.losses,
            ties: self.record.ties,
            win_percentage: self.record.win_percentage(),
            points_for: round2(self.points_for),
            points_against: round2(self.points_against),
            championships,
            championship_years: self.championship_years,
            second_place,
            second_place_years: self.second_place_years,
            third_place,
            third_place_years: self.third_place_years,
            toilet_bowl,
            toilet_bowl_years: self.toilet_bowl_years,
            playoff_appearances,
            playoff_years: self.playoff_years,
            ranking_points: ranking_points(championships, second_place, third_place, toilet_bowl),
            top_3_pct: percentage(championships + second_place + third_place, team_seasons),
            toilet_bowl_pct: percentage(toilet_bowl, team_seasons),
            playoff_appearance_pct: percentage(playoff_appearances, team_seasons),
        };

        let streaks = streaks.get(&owner).copied().unwrap_or_default();

        OwnerSummary {
            seasons_played,
            first_season: self.years.first().copied(),
            last_season: self.years.last().copied(),
            years_active: self.years.into_iter().collect(),
            team_names: self.team_names,
            all_time,
            streaks,
            seasons: self.seasons,
            owner,
        }
    }
}

/// All-time block for every owner, best first.
///
/// Ordered by ranking points, then championships, then owner name.
/// Owners from eras without matchup data still get season-level totals;
/// their streak fields are simply absent.
pub fn aggregate_owners(
    seasons: &[SeasonStandings],
    streaks: &StreakTable,
    league: &LeagueConfig,
) -> Vec<OwnerSummary> {
    let mut totals: BTreeMap<String, OwnerTotals> = BTreeMap::new();

    for season in seasons {
        let toilet_bowl_team = season.toilet_bowl(league.playoff_teams).map(|r| r.team_id);
        for row in &season.rows {
            totals.entry(row.owner.clone()).or_default().add(
                row,
                toilet_bowl_team == Some(row.team_id),
                league.playoff_teams,
            );
        }
    }

    let mut owners: Vec<OwnerSummary> = totals
        .into_iter()
        .map(|(owner, t)| t.into_summary(owner, streaks))
        .collect();

    for owner in &mut owners {
        owner.seasons.sort_by_key(|s| s.year);
    }
    owners.sort_by(|a, b| {
        b.all_time
            .ranking_points
            .cmp(&a.all_time.ranking_points)
            .then(b.all_time.championships.cmp(&a.all_time.championships))
            .then_with(|| a.owner.cmp(&b.owner))
    });

    debug!("Aggregated all-time stats for {} owners", owners.len());
    owners
}
