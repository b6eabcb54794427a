//! Per-season final placements.

use super::standings::SeasonStandings;
use crate::config::LeagueConfig;
use crate::models::{PlayoffResult, StandingRow, TeamOwner};

fn team_owner(row: &StandingRow) -> TeamOwner {
    TeamOwner {
        team_name: row.team_name.clone(),
        owner: row.owner.clone(),
    }
}

/// Champion, runner-up, third place, toilet bowl and the playoff field
/// for each season, ascending by year. Seasons without final standings
/// yield a row with every placement empty.
pub fn playoff_results(seasons: &[SeasonStandings], league: &LeagueConfig) -> Vec<PlayoffResult> {
    seasons
        .iter()
        .map(|season| {
            let mut field: Vec<&StandingRow> = season
                .rows
                .iter()
                .filter(|r| r.made_playoffs(league.playoff_teams))
                .collect();
            field.sort_by_key(|r| r.final_standing);

            PlayoffResult {
                year: season.year,
                champion: season.placed(1).map(team_owner),
                runner_up: season.placed(2).map(team_owner),
                third_place: season.placed(3).map(team_owner),
                toilet_bowl: season.toilet_bowl(league.playoff_teams).map(team_owner),
                playoff_teams: field.into_iter().map(team_owner).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::fixtures::{self, season};
    use crate::calculate::standings;
    use crate::models::RecordSet;

    #[test]
    fn test_placements_per_season() {
        let seasons = standings::all_standings(&fixtures::league());
        let results = playoff_results(&seasons, &LeagueConfig::default());

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].champion.as_ref().unwrap().owner, "Ann");
        assert_eq!(results[1].champion.as_ref().unwrap().owner, "Cat");
        assert_eq!(results[1].runner_up.as_ref().unwrap().owner, "Ben");
        assert_eq!(results[1].third_place.as_ref().unwrap().owner, "Dan");
        assert!(results[1].toilet_bowl.is_none());

        let field: Vec<&str> = results[1].playoff_teams.iter().map(|t| t.owner.as_str()).collect();
        assert_eq!(field, vec!["Cat", "Ben", "Dan", "Ann"]);
    }

    #[test]
    fn test_small_playoff_field_and_toilet_bowl() {
        let store = fixtures::store(RecordSet {
            seasons: vec![
                season(2019, 1, "Ann", 9, 4, 1500.0, 1, Some(2)),
                season(2019, 2, "Ben", 8, 5, 1400.0, 2, Some(1)),
                season(2019, 3, "Cat", 4, 9, 1100.0, 3, Some(3)),
                season(2019, 4, "Dan", 3, 10, 1000.0, 4, Some(4)),
            ],
            ..Default::default()
        });
        let league = LeagueConfig {
            playoff_teams: 2,
            ..Default::default()
        };
        let seasons = standings::all_standings(&store);
        let results = playoff_results(&seasons, &league);

        assert_eq!(results[0].playoff_teams.len(), 2);
        assert_eq!(results[0].toilet_bowl.as_ref().unwrap().owner, "Dan");
    }

    #[test]
    fn test_season_without_final_standings() {
        let store = fixtures::store(RecordSet {
            seasons: vec![season(2023, 1, "Ann", 9, 4, 1500.0, 1, None)],
            ..Default::default()
        });
        let seasons = standings::all_standings(&store);
        let results = playoff_results(&seasons, &LeagueConfig::default());

        assert_eq!(results[0].champion, None);
        assert!(results[0].playoff_teams.is_empty());
    }
}
