//! Owner-vs-owner records.

use super::round2;
use crate::models::{GameResult, HeadToHeadMatrix, HeadToHeadRecord, RecordStore};

fn tally(
    matrix: &mut HeadToHeadMatrix,
    owner: &str,
    opponent: &str,
    result: GameResult,
    scored: f64,
    allowed: f64,
) {
    let entry: &mut HeadToHeadRecord = matrix
        .entry(owner.to_string())
        .or_default()
        .entry(opponent.to_string())
        .or_default();
    entry.record.record(result);
    entry.points_for += scored;
    entry.points_against += allowed;
}

/// Owner -> opponent -> record over every matchup, playoffs included.
///
/// Only pairs that actually met get an entry, and games between two teams
/// of the same owner are skipped. The matrix is symmetric:
/// `m[a][b].wins == m[b][a].losses` and
/// `m[a][b].points_for == m[b][a].points_against`.
pub fn build_matrix(store: &RecordStore) -> HeadToHeadMatrix {
    let directory = store.owners();
    let mut matrix = HeadToHeadMatrix::new();

    for matchup in store.matchups() {
        let (Some(home), Some(away)) = (
            directory.owner_of(matchup.year, matchup.home_team),
            directory.owner_of(matchup.year, matchup.away_team),
        ) else {
            continue;
        };
        if home == away {
            continue;
        }

        let result = matchup.home_result();
        tally(&mut matrix, home, away, result, matchup.home_score, matchup.away_score);
        tally(&mut matrix, away, home, result.flipped(), matchup.away_score, matchup.home_score);
    }

    for entry in matrix.values_mut().flat_map(|opponents| opponents.values_mut()) {
        entry.points_for = round2(entry.points_for);
        entry.points_against = round2(entry.points_against);
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::fixtures::{self, game, season};
    use crate::models::{RecordSet, WinLossRecord};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_matrix_records() {
        let matrix = build_matrix(&fixtures::league());

        // 2020 w1 Ann beat Ben, 2021 w1 tie
        assert_eq!(matrix["Ann"]["Ben"].record, WinLossRecord::new(1, 0, 1));
        assert_eq!(matrix["Ben"]["Ann"].record, WinLossRecord::new(0, 1, 1));
        assert_eq!(matrix["Cat"]["Ann"].record, WinLossRecord::new(1, 0, 0));
    }

    #[test]
    fn test_pairs_that_never_met_are_absent() {
        let matrix = build_matrix(&fixtures::league());
        assert!(matrix["Ann"].get("Dan").is_none());
        assert!(matrix["Ann"].get("Ann").is_none());
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let matrix = build_matrix(&fixtures::league());
        for (owner, opponents) in &matrix {
            for (opponent, record) in opponents {
                let mirror = &matrix[opponent][owner];
                assert_eq!(record.record.wins, mirror.record.losses);
                assert_eq!(record.record.losses, mirror.record.wins);
                assert_eq!(record.record.ties, mirror.record.ties);
                assert_eq!(record.points_for, mirror.points_against);
            }
        }
    }

    #[test]
    fn test_pair_points_accumulate_across_meetings() {
        let store = fixtures::store(RecordSet {
            seasons: vec![
                season(2019, 1, "Ann", 1, 1, 200.0, 1, None),
                season(2019, 2, "Ben", 1, 1, 200.0, 2, None),
            ],
            matchups: vec![
                game(2019, 1, 1, 2, 101.25, 88.5),
                game(2019, 9, 2, 1, 120.0, 99.1),
            ],
            ..Default::default()
        });
        let matrix = build_matrix(&store);

        let ann = matrix["Ann"]["Ben"];
        assert_eq!(ann.record, WinLossRecord::new(1, 1, 0));
        assert_eq!(ann.points_for, 200.35);
        assert_eq!(ann.points_against, 208.5);
        assert_eq!(matrix["Ben"]["Ann"].points_for, 208.5);

        let json = serde_json::to_value(ann).unwrap();
        assert_eq!(json["wins"], 1);
        assert_eq!(json["points_for"], 200.35);
    }

    #[test]
    fn test_same_owner_game_is_skipped() {
        // Two franchises run by one owner in the same season.
        let store = fixtures::store(RecordSet {
            seasons: vec![
                season(2015, 1, "Ann", 1, 0, 100.0, 1, None),
                season(2015, 2, "Ann", 0, 1, 90.0, 2, None),
            ],
            matchups: vec![game(2015, 1, 1, 2, 100.0, 90.0)],
            ..Default::default()
        });
        assert!(build_matrix(&store).is_empty());
    }
}
