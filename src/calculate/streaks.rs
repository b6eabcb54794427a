//! Win/loss streak detection across an owner's chronological games.

use std::collections::BTreeMap;

use crate::models::{chronological, GameResult, OwnerStreaks, RecordStore, Streak, StreakRecord};

/// One game result in an owner's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultEntry {
    pub year: u16,
    pub week: u32,
    pub result: GameResult,
}

/// owner -> longest streaks. Owners without matchup data are absent.
pub type StreakTable = BTreeMap<String, OwnerStreaks>;

/// Every owner's results in chronological order (playoff weeks after
/// the same year's regular season). Games between two teams of the same
/// owner are skipped, matching the head-to-head matrix.
pub fn owner_results(store: &RecordStore) -> BTreeMap<String, Vec<ResultEntry>> {
    let directory = store.owners();
    let mut results: BTreeMap<String, Vec<ResultEntry>> = BTreeMap::new();

    for matchup in chronological(store.matchups()) {
        let home = directory.owner_of(matchup.year, matchup.home_team);
        if home.is_some() && home == directory.owner_of(matchup.year, matchup.away_team) {
            continue;
        }
        for side in matchup.sides() {
            let Some(owner) = directory.owner_of(matchup.year, side.team) else {
                continue;
            };
            results.entry(owner.to_string()).or_default().push(ResultEntry {
                year: matchup.year,
                week: matchup.week,
                result: side.result,
            });
        }
    }

    results
}

/// Streak currently being extended by the scan.
struct Run {
    kind: GameResult,
    streak: Streak,
}

/// Longest win and loss streaks in a chronological result sequence.
///
/// A tie ends a streak of either kind without starting a new one. A
/// streak only replaces the best of its kind when strictly longer, so
/// the earliest of equal-length streaks is kept.
pub fn longest_streaks(results: &[ResultEntry]) -> OwnerStreaks {
    let mut best = OwnerStreaks::default();
    let mut current: Option<Run> = None;

    for entry in results {
        if let Some(run) = current.as_mut().filter(|run| run.kind == entry.result) {
            run.streak.streak_length += 1;
            run.streak.end_year = entry.year;
            run.streak.end_week = entry.week;
            continue;
        }

        close_run(current.take(), &mut best);
        if entry.result != GameResult::Tie {
            current = Some(Run {
                kind: entry.result,
                streak: Streak {
                    streak_length: 1,
                    start_year: entry.year,
                    start_week: entry.week,
                    end_year: entry.year,
                    end_week: entry.week,
                },
            });
        }
    }
    close_run(current, &mut best);

    best
}

fn close_run(run: Option<Run>, best: &mut OwnerStreaks) {
    let Some(run) = run else {
        return;
    };
    let slot = match run.kind {
        GameResult::Win => &mut best.longest_win_streak,
        GameResult::Loss => &mut best.longest_loss_streak,
        GameResult::Tie => return,
    };
    if slot.map_or(true, |b| run.streak.streak_length > b.streak_length) {
        *slot = Some(run.streak);
    }
}

/// Longest streaks for every owner with at least one matchup.
pub fn detect_all(store: &RecordStore) -> StreakTable {
    owner_results(store)
        .into_iter()
        .map(|(owner, results)| {
            let streaks = longest_streaks(&results);
            (owner, streaks)
        })
        .collect()
}

/// League-wide longest streak of the given kind. Equal lengths go to
/// the earlier start, then the owner name.
pub fn league_longest(table: &StreakTable, kind: GameResult) -> Option<StreakRecord> {
    let mut best: Option<StreakRecord> = None;
    for (owner, streaks) in table {
        let candidate = match kind {
            GameResult::Win => streaks.longest_win_streak,
            GameResult::Loss => streaks.longest_loss_streak,
            GameResult::Tie => None,
        };
        let Some(streak) = candidate else {
            continue;
        };
        let better = match &best {
            None => true,
            Some(b) => {
                streak.streak_length > b.streak.streak_length
                    || (streak.streak_length == b.streak.streak_length
                        && (streak.start_year, streak.start_week)
                            < (b.streak.start_year, b.streak.start_week))
            }
        };
        if better {
            best = Some(StreakRecord {
                owner: owner.clone(),
                streak,
            });
        }
    }
    best
}
