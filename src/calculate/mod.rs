//! Statistics aggregation engine.
//!
//! Computes every derived view from one immutable [`RecordStore`]:
//! - Season standings and points ranks
//! - Per-owner all-time totals, placements and ranking points
//! - Head-to-head matrix and win/loss streaks
//! - Single-game, season and narrative record book
//! - Draft value rankings and lineup efficiency
//!
//! Each calculator is a pure function of the store; only the all-time
//! aggregator and the record book consume the finalized standings.

pub mod all_time;
pub mod draft_value;
pub mod head_to_head;
pub mod lineup;
pub mod playoffs;
pub mod records;
pub mod standings;
pub mod streaks;

use tracing::info;

use crate::config::AppConfig;
use crate::models::{chronological, GameResult, LeagueViews, MatchupRow, Metadata, RecordStore};

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / whole * 100`, one decimal, `None` when `whole` is zero.
pub fn percentage(part: u32, whole: u32) -> Option<f64> {
    if whole == 0 {
        None
    } else {
        Some(round1(part as f64 / whole as f64 * 100.0))
    }
}

/// Run every calculator over the store.
pub fn compute(store: &RecordStore, config: &AppConfig) -> LeagueViews {
    let seasons = standings::all_standings(store);
    let owner_streaks = streaks::detect_all(store);

    let owners = all_time::aggregate_owners(&seasons, &owner_streaks, &config.league);
    let head_to_head = head_to_head::build_matrix(store);
    let playoffs = playoffs::playoff_results(&seasons, &config.league);
    let records = records::record_book(store, &seasons, &owner_streaks, &config.league);

    let draft = draft_value::draft_rows(store);
    let best_draft_picks = draft_value::best_picks(store, &config.draft);
    let worst_draft_picks = draft_value::worst_picks(store, &config.draft);

    let optimal_lineups = lineup::optimal_lineups(store, &config.lineup);
    let lineup_efficiency = lineup::season_efficiency(&optimal_lineups);

    let mut rosters = store.rosters().to_vec();
    rosters.sort_by(|a, b| (a.year, &a.owner).cmp(&(b.year, &b.owner)));

    let views = LeagueViews {
        metadata: metadata(store, &config.league.name),
        owners,
        standings: seasons.into_iter().flat_map(|s| s.rows).collect(),
        matchups: matchup_rows(store),
        head_to_head,
        playoffs,
        records,
        draft,
        best_draft_picks,
        worst_draft_picks,
        rosters,
        optimal_lineups,
        lineup_efficiency,
    };

    info!(
        "Computed views: {} owners, {} standings rows, {} matchups, {} lineup weeks",
        views.owners.len(),
        views.standings.len(),
        views.matchups.len(),
        views.optimal_lineups.len()
    );

    views
}

/// League-level summary.
pub fn metadata(store: &RecordStore, league_name: &str) -> Metadata {
    let years = store.years();
    Metadata {
        league_name: league_name.to_string(),
        total_seasons: years.len(),
        total_teams: store.owners().team_id_count(),
        total_owners: store.owners().owner_count(),
        total_matchups: store.matchups().len(),
        first_season: years.first().copied(),
        latest_season: years.last().copied(),
        years,
        input_digest: store.digest().as_str().to_string(),
    }
}

/// Flat matchup rows with names, owners, and derived winner, in
/// chronological order.
pub fn matchup_rows(store: &RecordStore) -> Vec<MatchupRow> {
    let directory = store.owners();
    chronological(store.matchups())
        .into_iter()
        .filter_map(|m| {
            let home = directory.team(m.year, m.home_team)?;
            let away = directory.team(m.year, m.away_team)?;
            let winner = match m.home_result() {
                GameResult::Win => Some(home.team_name.clone()),
                GameResult::Loss => Some(away.team_name.clone()),
                GameResult::Tie => None,
            };
            Some(MatchupRow {
                year: m.year,
                week: m.week,
                is_playoff: m.is_playoff,
                home_team_id: m.home_team,
                home_team: home.team_name.clone(),
                home_owner: home.owner.clone(),
                home_score: round2(m.home_score),
                away_team_id: m.away_team,
                away_team: away.team_name.clone(),
                away_owner: away.owner.clone(),
                away_score: round2(m.away_score),
                winner,
                is_tie: m.is_tie(),
                point_differential: round2(m.differential()),
            })
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Small synthetic league shared by calculator tests.

    use std::collections::BTreeMap;

    use crate::models::{Matchup, RecordSet, RecordStore, Season};

    #[allow(clippy::too_many_arguments)]
    pub fn season(
        year: u16,
        team_id: u32,
        owner: &str,
        wins: u32,
        losses: u32,
        points_for: f64,
        rank: u32,
        final_standing: Option<u32>,
    ) -> Season {
        Season {
            year,
            team_id,
            owner: owner.to_string(),
            team_name: format!("{} {}", owner, year),
            wins,
            losses,
            ties: 0,
            points_for,
            points_against: 1000.0,
            regular_season_rank: rank,
            final_standing,
        }
    }

    pub fn game(year: u16, week: u32, home: u32, away: u32, home_score: f64, away_score: f64) -> Matchup {
        Matchup {
            year,
            week,
            is_playoff: false,
            home_team: home,
            away_team: away,
            home_score,
            away_score,
        }
    }

    pub fn store(records: RecordSet) -> RecordStore {
        RecordStore::new(records, &BTreeMap::new()).unwrap()
    }

    /// Two seasons, four owners. Ann wins 2020, Cat wins 2021.
    pub fn league() -> RecordStore {
        store(RecordSet {
            seasons: vec![
                season(2020, 1, "Ann", 2, 1, 1500.0, 1, Some(1)),
                season(2020, 2, "Ben", 2, 1, 1400.0, 2, Some(2)),
                season(2020, 3, "Cat", 1, 2, 1300.0, 3, Some(3)),
                season(2020, 4, "Dan", 1, 2, 1200.0, 4, Some(4)),
                season(2021, 1, "Ann", 1, 2, 1600.0, 3, Some(4)),
                season(2021, 2, "Ben", 3, 0, 1450.0, 1, Some(2)),
                season(2021, 3, "Cat", 1, 2, 1350.0, 4, Some(1)),
                season(2021, 4, "Dan", 1, 2, 1250.0, 2, Some(3)),
            ],
            matchups: vec![
                game(2020, 1, 1, 2, 120.0, 100.0),
                game(2020, 1, 3, 4, 90.0, 95.5),
                game(2020, 2, 1, 3, 110.0, 111.0),
                game(2020, 2, 2, 4, 130.0, 70.0),
                game(2021, 1, 1, 2, 100.0, 100.0),
                game(2021, 1, 3, 4, 150.25, 60.0),
            ],
            ..Default::default()
        })
    }
}
