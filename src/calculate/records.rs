//! Record book: single-game, single-season and narrative superlatives.
//!
//! Every scan keeps the first qualifying candidate when several share
//! the extreme value. Games are scanned chronologically and seasons in
//! (year, regular season rank) order, so "first" is well defined.

use tracing::debug;

use super::round2;
use super::standings::SeasonStandings;
use super::streaks::{league_longest, StreakTable};
use crate::config::LeagueConfig;
use crate::models::{
    chronological, GameRecord, GameResult, Matchup, MatchupSide, NarrativeRecord, OwnerDirectory,
    RecordBook, RecordStore, ScoreRecord, SeasonRecord, StandingRow,
};

/// First item with the strictly greatest key.
fn first_max<T, K: PartialOrd>(items: impl IntoIterator<Item = T>, key: impl Fn(&T) -> K) -> Option<T> {
    let mut best: Option<(K, T)> = None;
    for item in items {
        let k = key(&item);
        if best.as_ref().map_or(true, |(b, _)| k > *b) {
            best = Some((k, item));
        }
    }
    best.map(|(_, item)| item)
}

/// First item with the strictly smallest key.
fn first_min<T, K: PartialOrd>(items: impl IntoIterator<Item = T>, key: impl Fn(&T) -> K) -> Option<T> {
    let mut best: Option<(K, T)> = None;
    for item in items {
        let k = key(&item);
        if best.as_ref().map_or(true, |(b, _)| k < *b) {
            best = Some((k, item));
        }
    }
    best.map(|(_, item)| item)
}

fn score_record(directory: &OwnerDirectory, matchup: &Matchup, side: &MatchupSide) -> Option<ScoreRecord> {
    let team = directory.team(matchup.year, side.team)?;
    let opponent = directory.team(matchup.year, side.opponent)?;
    Some(ScoreRecord {
        year: matchup.year,
        week: matchup.week,
        is_playoff: matchup.is_playoff,
        team: team.team_name.clone(),
        owner: team.owner.clone(),
        score: round2(side.score),
        opponent: opponent.team_name.clone(),
        opponent_owner: opponent.owner.clone(),
        opponent_score: round2(side.opponent_score),
    })
}

fn game_record(directory: &OwnerDirectory, matchup: &Matchup) -> Option<GameRecord> {
    let [home, away] = matchup.sides();
    let (winner, loser) = match home.result {
        GameResult::Loss => (away, home),
        GameResult::Win | GameResult::Tie => (home, away),
    };
    let winner_team = directory.team(matchup.year, winner.team)?;
    let loser_team = directory.team(matchup.year, loser.team)?;
    Some(GameRecord {
        year: matchup.year,
        week: matchup.week,
        is_playoff: matchup.is_playoff,
        winner: winner_team.team_name.clone(),
        winner_owner: winner_team.owner.clone(),
        winner_score: round2(winner.score),
        loser: loser_team.team_name.clone(),
        loser_owner: loser_team.owner.clone(),
        loser_score: round2(loser.score),
        is_tie: matchup.is_tie(),
        point_differential: round2(matchup.differential()),
        combined_points: round2(matchup.combined_points()),
    })
}

fn season_record(row: &StandingRow) -> SeasonRecord {
    SeasonRecord {
        year: row.year,
        team_name: row.team_name.clone(),
        owner: row.owner.clone(),
        wins: row.wins,
        losses: row.losses,
        ties: row.ties,
        points_for: row.points_for,
        points_against: row.points_against,
    }
}

fn narrative_record(row: &StandingRow) -> NarrativeRecord {
    NarrativeRecord {
        year: row.year,
        team_name: row.team_name.clone(),
        owner: row.owner.clone(),
        wins: row.wins,
        losses: row.losses,
        ties: row.ties,
        points_for: row.points_for,
        points_rank: row.points_rank,
        total_teams: row.total_teams,
        final_standing: row.final_standing,
        points_gap: None,
        standing_gap: None,
    }
}

/// Build the full record book.
pub fn record_book(
    store: &RecordStore,
    seasons: &[SeasonStandings],
    streaks: &StreakTable,
    league: &LeagueConfig,
) -> RecordBook {
    let mut book = RecordBook::default();
    game_records(store, &mut book);
    season_records(seasons, league, &mut book);
    narrative_records(seasons, &mut book);

    book.longest_win_streak = league_longest(streaks, GameResult::Win);
    book.longest_loss_streak = league_longest(streaks, GameResult::Loss);

    debug!("Record book built from {} seasons", seasons.len());
    book
}

fn game_records(store: &RecordStore, book: &mut RecordBook) {
    let directory = store.owners();
    let games = chronological(store.matchups());
    let sides: Vec<(&Matchup, MatchupSide)> = games
        .iter()
        .flat_map(|&m| m.sides().into_iter().map(move |side| (m, side)))
        .collect();

    let to_score = |(m, side): (&Matchup, MatchupSide)| score_record(directory, m, &side);

    book.highest_score = first_max(sides.iter().copied(), |(_, s)| s.score).and_then(to_score);
    book.lowest_score = first_min(sides.iter().copied(), |(_, s)| s.score).and_then(to_score);
    book.highest_scoring_loss = first_max(
        sides.iter().copied().filter(|(_, s)| s.result == GameResult::Loss),
        |(_, s)| s.score,
    )
    .and_then(to_score);
    book.lowest_scoring_win = first_min(
        sides.iter().copied().filter(|(_, s)| s.result == GameResult::Win),
        |(_, s)| s.score,
    )
    .and_then(to_score);

    book.biggest_blowout = first_max(games.iter().copied(), |m| m.differential())
        .and_then(|m| game_record(directory, m));
    book.closest_game = first_min(games.iter().copied().filter(|m| !m.is_tie()), |m| m.differential())
        .and_then(|m| game_record(directory, m));
    book.most_combined_points = first_max(games.iter().copied(), |m| m.combined_points())
        .and_then(|m| game_record(directory, m));
}

fn season_records(seasons: &[SeasonStandings], league: &LeagueConfig, book: &mut RecordBook) {
    let rows = || seasons.iter().flat_map(|s| s.rows.iter());
    let full_seasons = || rows().filter(|r| r.games_played >= league.full_season_min_games);

    book.most_points_season = first_max(rows(), |r| r.points_for).map(season_record);
    book.fewest_points_season = first_min(full_seasons(), |r| r.points_for).map(season_record);
    book.most_wins_season = first_max(rows(), |r| r.wins).map(season_record);
    book.fewest_wins_season = first_min(full_seasons(), |r| r.wins).map(season_record);
    book.most_points_against_season = first_max(rows(), |r| r.points_against).map(season_record);
}

fn narrative_records(seasons: &[SeasonStandings], book: &mut RecordBook) {
    // Champions paired with their margin over the best other scorer.
    let champions = || {
        seasons
            .iter()
            .filter_map(|s| s.champion().map(|row| (row, s.points_gap(row))))
    };

    book.best_champion = first_max(
        champions().filter_map(|(row, gap)| gap.map(|g| (row, g))),
        |(_, gap)| *gap,
    )
    .map(|(row, gap)| NarrativeRecord {
        points_gap: Some(round2(gap)),
        ..narrative_record(row)
    });

    book.worst_team_best_result =
        first_max(champions(), |(row, _)| row.points_rank).map(|(row, _)| narrative_record(row));

    let unlucky = seasons.iter().filter_map(|s| {
        let leader = s.by_points_rank(1)?;
        match leader.final_standing {
            Some(standing) if standing != 1 => s.points_gap(leader).map(|gap| (leader, gap)),
            _ => None,
        }
    });
    book.unluckiest_reg_season_winner =
        first_max(unlucky, |(_, gap)| *gap).map(|(row, gap)| NarrativeRecord {
            points_gap: Some(round2(gap)),
            ..narrative_record(row)
        });

    let underachievers = seasons.iter().flat_map(|s| s.rows.iter()).filter_map(|row| {
        let standing = row.final_standing?;
        let gap = standing as i64 - row.points_rank as i64;
        (gap > 0).then_some((row, gap))
    });
    book.best_team_worst_result =
        first_max(underachievers, |(_, gap)| *gap).map(|(row, gap)| NarrativeRecord {
            standing_gap: Some(gap),
            ..narrative_record(row)
        });
}
