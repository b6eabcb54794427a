//! Season standings tables.

use std::collections::BTreeMap;

use crate::models::{RecordStore, Season, StandingRow};

/// Finalized standings for one season, ordered by regular season rank.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonStandings {
    pub year: u16,
    pub rows: Vec<StandingRow>,
}

impl SeasonStandings {
    /// Team with the given final standing.
    pub fn placed(&self, final_standing: u32) -> Option<&StandingRow> {
        self.rows
            .iter()
            .find(|r| r.final_standing == Some(final_standing))
    }

    pub fn champion(&self) -> Option<&StandingRow> {
        self.rows.iter().find(|r| r.is_champion())
    }

    /// Team with the given points rank.
    pub fn by_points_rank(&self, points_rank: u32) -> Option<&StandingRow> {
        self.rows.iter().find(|r| r.points_rank == points_rank)
    }

    /// Worst non-playoff finisher: the largest known final standing,
    /// provided it falls outside the playoff field.
    pub fn toilet_bowl(&self, playoff_teams: u32) -> Option<&StandingRow> {
        let mut worst: Option<&StandingRow> = None;
        for row in &self.rows {
            let Some(standing) = row.final_standing else {
                continue;
            };
            if row.made_playoffs(playoff_teams) {
                continue;
            }
            if worst.map_or(true, |w| standing > w.final_standing.unwrap_or(0)) {
                worst = Some(row);
            }
        }
        worst
    }

    /// Points-for margin of `row` over the best other team that season.
    /// `None` when the season has a single team.
    pub fn points_gap(&self, row: &StandingRow) -> Option<f64> {
        self.rows
            .iter()
            .filter(|other| other.team_id != row.team_id)
            .map(|other| other.points_for)
            .max_by(|a, b| a.total_cmp(b))
            .map(|best_other| row.points_for - best_other)
    }
}

/// Standings table for one year's season records.
///
/// Rows are ordered by regular season rank (1 first). `points_rank`
/// orders teams by points for, descending, with ties keeping input order.
pub fn standings_for_year(seasons: &[&Season]) -> Vec<StandingRow> {
    let total_teams = seasons.len() as u32;

    let mut by_points: Vec<usize> = (0..seasons.len()).collect();
    by_points.sort_by(|&a, &b| seasons[b].points_for.total_cmp(&seasons[a].points_for));
    let mut points_rank = vec![0u32; seasons.len()];
    for (rank, &idx) in by_points.iter().enumerate() {
        points_rank[idx] = rank as u32 + 1;
    }

    let mut rows: Vec<StandingRow> = seasons
        .iter()
        .zip(points_rank)
        .map(|(season, points_rank)| StandingRow {
            year: season.year,
            team_id: season.team_id,
            owner: season.owner.clone(),
            team_name: season.team_name.clone(),
            wins: season.wins,
            losses: season.losses,
            ties: season.ties,
            games_played: season.games_played(),
            win_percentage: season.record().win_percentage(),
            points_for: super::round2(season.points_for),
            points_against: super::round2(season.points_against),
            regular_season_rank: season.regular_season_rank,
            final_standing: season.final_standing,
            points_rank,
            total_teams,
        })
        .collect();

    rows.sort_by_key(|r| r.regular_season_rank);
    rows
}

/// Standings for every season, ascending by year.
pub fn all_standings(store: &RecordStore) -> Vec<SeasonStandings> {
    let mut by_year: BTreeMap<u16, Vec<&Season>> = BTreeMap::new();
    for season in store.seasons() {
        by_year.entry(season.year).or_default().push(season);
    }

    by_year
        .into_iter()
        .map(|(year, seasons)| SeasonStandings {
            year,
            rows: standings_for_year(&seasons),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::fixtures::{self, season};

    #[test]
    fn test_empty_season_yields_empty_table() {
        assert!(standings_for_year(&[]).is_empty());
    }

    #[test]
    fn test_rows_ordered_by_regular_season_rank() {
        let a = season(2020, 1, "Ann", 5, 8, 1300.0, 3, None);
        let b = season(2020, 2, "Ben", 10, 3, 1250.0, 1, None);
        let c = season(2020, 3, "Cat", 8, 5, 1400.0, 2, None);

        let rows = standings_for_year(&[&a, &b, &c]);
        let owners: Vec<&str> = rows.iter().map(|r| r.owner.as_str()).collect();
        assert_eq!(owners, vec!["Ben", "Cat", "Ann"]);
        assert_eq!(rows[0].points_rank, 3);
        assert_eq!(rows[1].points_rank, 1);
        assert_eq!(rows[2].total_teams, 3);
    }

    #[test]
    fn test_points_rank_ties_keep_input_order() {
        let a = season(2020, 1, "Ann", 5, 5, 1300.0, 2, None);
        let b = season(2020, 2, "Ben", 5, 5, 1300.0, 1, None);

        let rows = standings_for_year(&[&a, &b]);
        let ann = rows.iter().find(|r| r.owner == "Ann").unwrap();
        let ben = rows.iter().find(|r| r.owner == "Ben").unwrap();
        assert_eq!(ann.points_rank, 1);
        assert_eq!(ben.points_rank, 2);
    }

    #[test]
    fn test_win_percentage_counts_ties_as_games() {
        let mut a = season(2020, 1, "Ann", 6, 3, 1300.0, 1, None);
        a.ties = 1;

        let rows = standings_for_year(&[&a]);
        assert_eq!(rows[0].games_played, 10);
        assert_eq!(rows[0].win_percentage, Some(60.0));
    }

    #[test]
    fn test_zero_games_has_no_percentage() {
        let a = season(2020, 1, "Ann", 0, 0, 0.0, 1, None);
        let rows = standings_for_year(&[&a]);
        assert_eq!(rows[0].win_percentage, None);
    }

    #[test]
    fn test_all_standings_groups_by_year() {
        let store = fixtures::league();
        let seasons = all_standings(&store);

        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[0].year, 2020);
        assert_eq!(seasons[1].rows[0].owner, "Ben");
        assert_eq!(seasons[1].champion().unwrap().owner, "Cat");
    }

    #[test]
    fn test_row_playoff_predicates() {
        let seasons = [
            season(2022, 1, "Ann", 9, 5, 1500.0, 1, Some(1)),
            season(2022, 2, "Ben", 7, 7, 1400.0, 2, Some(6)),
            season(2022, 3, "Cat", 2, 12, 1100.0, 3, Some(7)),
            season(2022, 4, "Dan", 3, 11, 1200.0, 4, None),
        ];
        let refs: Vec<&Season> = seasons.iter().collect();
        let rows = standings_for_year(&refs);

        assert!(rows[0].is_champion());
        assert!(!rows[1].is_champion());
        assert!(rows[1].made_playoffs(6));
        assert!(!rows[2].made_playoffs(6));
        assert!(!rows[3].made_playoffs(6));
    }

    #[test]
    fn test_toilet_bowl_is_last_non_playoff_finisher() {
        let seasons = [
            season(2022, 1, "Ann", 9, 5, 1500.0, 1, Some(1)),
            season(2022, 2, "Ben", 7, 7, 1400.0, 2, Some(7)),
            season(2022, 3, "Cat", 2, 12, 1100.0, 4, Some(8)),
            season(2022, 4, "Dan", 3, 11, 1200.0, 3, None),
        ];
        let refs: Vec<&Season> = seasons.iter().collect();
        let table = SeasonStandings {
            year: 2022,
            rows: standings_for_year(&refs),
        };

        assert_eq!(table.toilet_bowl(6).unwrap().owner, "Cat");
        assert!(table.toilet_bowl(8).is_none());
    }

    #[test]
    fn test_points_gap_over_best_other_team() {
        let seasons = [
            season(2022, 1, "Ann", 9, 5, 1500.5, 1, Some(1)),
            season(2022, 2, "Ben", 7, 7, 1470.0, 2, Some(2)),
            season(2022, 3, "Cat", 2, 12, 1100.0, 3, Some(3)),
        ];
        let refs: Vec<&Season> = seasons.iter().collect();
        let table = SeasonStandings {
            year: 2022,
            rows: standings_for_year(&refs),
        };

        let ann = table.champion().unwrap();
        assert_eq!(table.points_gap(ann), Some(30.5));
        let cat = table.placed(3).unwrap();
        assert_eq!(table.points_gap(cat), Some(-400.5));
    }
}
