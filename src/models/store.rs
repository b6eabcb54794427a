//! Immutable record store consumed by every calculator.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::{
    canonical_owner, DraftPick, LineupEntry, Matchup, OwnerDirectory, RosterEntry, Season,
    SnapshotDigest,
};

/// Malformed input detected at load time. Computation never starts on
/// an input that fails validation.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{entity} ({year}): {field} must be a non-negative number, got {value}")]
    InvalidNumber {
        entity: &'static str,
        year: u16,
        field: &'static str,
        value: f64,
    },

    #[error("season {year}: team {team_id} has no owner")]
    MissingOwner { year: u16, team_id: u32 },

    #[error("season {year}: team {team_id} appears more than once")]
    DuplicateSeason { year: u16, team_id: u32 },

    #[error("matchup {year} week {week}: unknown team {team_id}")]
    UnknownTeam { year: u16, week: u32, team_id: u32 },

    #[error("matchup {year} week {week}: team {team_id} plays itself")]
    SelfMatchup { year: u16, week: u32, team_id: u32 },

    #[error("matchup {year} week {week}: teams {first} and {second} meet more than once")]
    DuplicateMatchup {
        year: u16,
        week: u32,
        first: u32,
        second: u32,
    },
}

/// Raw, normalised input collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub matchups: Vec<Matchup>,
    #[serde(default)]
    pub draft: Vec<DraftPick>,
    #[serde(default)]
    pub rosters: Vec<RosterEntry>,
    #[serde(default)]
    pub lineups: Vec<LineupEntry>,
}

/// Validated snapshot with canonical owner names and the owner join key.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: RecordSet,
    owners: OwnerDirectory,
    digest: SnapshotDigest,
}

impl RecordStore {
    /// Canonicalise owner names, validate, and freeze the records.
    pub fn new(
        mut records: RecordSet,
        aliases: &BTreeMap<String, String>,
    ) -> Result<Self, ValidationError> {
        for season in &mut records.seasons {
            season.owner = canonical_owner(&season.owner, aliases);
        }
        for pick in &mut records.draft {
            pick.owner = canonical_owner(&pick.owner, aliases);
        }
        for entry in &mut records.rosters {
            entry.owner = canonical_owner(&entry.owner, aliases);
        }
        for entry in &mut records.lineups {
            entry.owner = canonical_owner(&entry.owner, aliases);
        }

        validate_seasons(&records.seasons)?;
        let owners = OwnerDirectory::build(&records.seasons);
        validate_matchups(&records.matchups, &owners)?;
        validate_player_rows(&records)?;
        warn_unknown_owners(&records, &owners);

        let digest = digest_records(&records);
        debug!("Validated input snapshot {}", digest);

        Ok(Self {
            records,
            owners,
            digest,
        })
    }

    pub fn seasons(&self) -> &[Season] {
        &self.records.seasons
    }

    pub fn matchups(&self) -> &[Matchup] {
        &self.records.matchups
    }

    pub fn draft(&self) -> &[DraftPick] {
        &self.records.draft
    }

    pub fn rosters(&self) -> &[RosterEntry] {
        &self.records.rosters
    }

    pub fn lineups(&self) -> &[LineupEntry] {
        &self.records.lineups
    }

    pub fn owners(&self) -> &OwnerDirectory {
        &self.owners
    }

    /// Digest of the canonicalised input, stable across runs.
    pub fn digest(&self) -> &SnapshotDigest {
        &self.digest
    }

    /// Distinct season years, ascending.
    pub fn years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.records.seasons.iter().map(|s| s.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}

fn check_number(entity: &'static str, year: u16, field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidNumber {
            entity,
            year,
            field,
            value,
        })
    }
}

fn validate_seasons(seasons: &[Season]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for season in seasons {
        if season.owner.is_empty() {
            return Err(ValidationError::MissingOwner {
                year: season.year,
                team_id: season.team_id,
            });
        }
        if !seen.insert((season.year, season.team_id)) {
            return Err(ValidationError::DuplicateSeason {
                year: season.year,
                team_id: season.team_id,
            });
        }
        check_number("season", season.year, "points_for", season.points_for)?;
        check_number("season", season.year, "points_against", season.points_against)?;
    }
    Ok(())
}

fn validate_matchups(matchups: &[Matchup], owners: &OwnerDirectory) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for matchup in matchups {
        check_number("matchup", matchup.year, "home_score", matchup.home_score)?;
        check_number("matchup", matchup.year, "away_score", matchup.away_score)?;

        for team_id in [matchup.home_team, matchup.away_team] {
            if owners.team(matchup.year, team_id).is_none() {
                return Err(ValidationError::UnknownTeam {
                    year: matchup.year,
                    week: matchup.week,
                    team_id,
                });
            }
        }
        if matchup.home_team == matchup.away_team {
            return Err(ValidationError::SelfMatchup {
                year: matchup.year,
                week: matchup.week,
                team_id: matchup.home_team,
            });
        }

        let (first, second) = matchup.pair_key();
        if !seen.insert((matchup.year, matchup.week, first, second)) {
            return Err(ValidationError::DuplicateMatchup {
                year: matchup.year,
                week: matchup.week,
                first,
                second,
            });
        }
    }
    Ok(())
}

fn validate_player_rows(records: &RecordSet) -> Result<(), ValidationError> {
    for pick in &records.draft {
        check_number("draft pick", pick.year, "total_points_scored", pick.total_points_scored)?;
    }
    for entry in &records.rosters {
        if !entry.total_points.is_finite() {
            check_number("roster entry", entry.year, "total_points", entry.total_points)?;
        }
    }
    for entry in &records.lineups {
        // Weekly player scores can legitimately go negative (D/ST, fumbles).
        if !entry.points.is_finite() {
            check_number("lineup entry", entry.year, "points", entry.points)?;
        }
    }
    Ok(())
}

fn warn_unknown_owners(records: &RecordSet, owners: &OwnerDirectory) {
    let draft = records.draft.iter().map(|p| (p.year, p.owner.as_str()));
    let rosters = records.rosters.iter().map(|r| (r.year, r.owner.as_str()));
    let lineups = records.lineups.iter().map(|l| (l.year, l.owner.as_str()));

    let mut reported = HashSet::new();
    for (year, owner) in draft.chain(rosters).chain(lineups) {
        if !owners.owner_active_in(owner, year) && reported.insert((year, owner)) {
            warn!("{} has player rows in {} but no season that year", owner, year);
        }
    }
}

fn digest_records(records: &RecordSet) -> SnapshotDigest {
    let chunks = [
        serde_json::to_vec(&records.seasons),
        serde_json::to_vec(&records.matchups),
        serde_json::to_vec(&records.draft),
        serde_json::to_vec(&records.rosters),
        serde_json::to_vec(&records.lineups),
    ];
    SnapshotDigest::generate(chunks.into_iter().map(|c| c.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season(year: u16, team_id: u32, owner: &str) -> Season {
        Season {
            year,
            team_id,
            owner: owner.to_string(),
            team_name: format!("Team {}", team_id),
            wins: 5,
            losses: 5,
            ties: 0,
            points_for: 1000.0,
            points_against: 1000.0,
            regular_season_rank: team_id,
            final_standing: None,
        }
    }

    fn matchup(week: u32, home: u32, away: u32, home_score: f64) -> Matchup {
        Matchup {
            year: 2020,
            week,
            is_playoff: false,
            home_team: home,
            away_team: away,
            home_score,
            away_score: 100.0,
        }
    }

    fn records() -> RecordSet {
        RecordSet {
            seasons: vec![season(2020, 1, "bvitale1313"), season(2020, 2, "Kyle Morris")],
            matchups: vec![matchup(1, 1, 2, 110.0)],
            ..Default::default()
        }
    }

    fn aliases() -> BTreeMap<String, String> {
        let mut aliases = BTreeMap::new();
        aliases.insert("bvitale1313".to_string(), "Brian Vitale".to_string());
        aliases
    }

    #[test]
    fn test_store_canonicalises_owners() {
        let store = RecordStore::new(records(), &aliases()).unwrap();
        assert_eq!(store.seasons()[0].owner, "Brian Vitale");
        assert_eq!(store.owners().owner_of(2020, 1), Some("Brian Vitale"));
        assert_eq!(store.years(), vec![2020]);
    }

    #[test]
    fn test_unknown_team_is_fatal() {
        let mut input = records();
        input.matchups.push(matchup(2, 1, 7, 90.0));

        let err = RecordStore::new(input, &aliases()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownTeam {
                year: 2020,
                week: 2,
                team_id: 7
            }
        );
    }

    #[test]
    fn test_negative_score_is_fatal() {
        let mut input = records();
        input.matchups[0].home_score = -3.0;

        let err = RecordStore::new(input, &aliases()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidNumber { field: "home_score", .. }));
    }

    #[test]
    fn test_duplicate_pair_in_week_is_fatal() {
        let mut input = records();
        input.matchups.push(matchup(1, 2, 1, 80.0));

        let err = RecordStore::new(input, &aliases()).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateMatchup { .. }));
    }

    #[test]
    fn test_duplicate_season_is_fatal() {
        let mut input = records();
        input.seasons.push(season(2020, 2, "Someone Else"));

        let err = RecordStore::new(input, &aliases()).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateSeason { year: 2020, team_id: 2 });
    }

    #[test]
    fn test_self_matchup_is_fatal() {
        let mut input = records();
        input.matchups.push(matchup(3, 2, 2, 80.0));

        let err = RecordStore::new(input, &aliases()).unwrap_err();
        assert!(matches!(err, ValidationError::SelfMatchup { team_id: 2, .. }));
    }

    #[test]
    fn test_draft_row_for_owner_without_season_still_loads() {
        let mut input = records();
        input.draft.push(DraftPick {
            year: 2019,
            player_name: "Derrick Henry".to_string(),
            position: "RB".to_string(),
            owner: "bvitale1313".to_string(),
            team_name: "Team 1".to_string(),
            bid_amount: 45,
            total_points_scored: 250.3,
        });

        let store = RecordStore::new(input, &aliases()).unwrap();
        assert_eq!(store.draft().len(), 1);
        assert_eq!(store.draft()[0].owner, "Brian Vitale");
        assert!(!store.owners().owner_active_in("Brian Vitale", 2019));
    }

    #[test]
    fn test_digest_stable_and_alias_sensitive() {
        let a = RecordStore::new(records(), &aliases()).unwrap();
        let b = RecordStore::new(records(), &aliases()).unwrap();
        let c = RecordStore::new(records(), &BTreeMap::new()).unwrap();

        assert_eq!(a.digest(), b.digest());
        assert_ne!(a.digest(), c.digest());
    }
}
