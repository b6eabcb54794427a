//! Owner identity across renamed teams and seasons.
//!
//! Owners are the primary dimension of every all-time view. A team id is
//! only unique within a year and team names change freely, so the
//! directory is built once from the season snapshots and every component
//! resolves "who owns this team" through it.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::Season;

/// A team-season paired with its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamOwner {
    pub team_name: String,
    pub owner: String,
}

/// Map a raw owner/display name to its canonical owner name.
pub fn canonical_owner(raw: &str, aliases: &BTreeMap<String, String>) -> String {
    let trimmed = raw.trim();
    aliases
        .get(trimmed)
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Join key from (year, team_id) to the owning person.
#[derive(Debug, Clone, Default)]
pub struct OwnerDirectory {
    teams: HashMap<(u16, u32), TeamOwner>,
    owners: BTreeSet<String>,
}

impl OwnerDirectory {
    /// Build the directory from canonicalised season rows.
    pub fn build(seasons: &[Season]) -> Self {
        let mut directory = Self::default();
        for season in seasons {
            directory.teams.insert(
                (season.year, season.team_id),
                TeamOwner {
                    team_name: season.team_name.clone(),
                    owner: season.owner.clone(),
                },
            );
            directory.owners.insert(season.owner.clone());
        }
        directory
    }

    /// Team name and owner for a team in a given year.
    pub fn team(&self, year: u16, team_id: u32) -> Option<&TeamOwner> {
        self.teams.get(&(year, team_id))
    }

    /// Owner of a team in a given year.
    pub fn owner_of(&self, year: u16, team_id: u32) -> Option<&str> {
        self.team(year, team_id).map(|t| t.owner.as_str())
    }

    /// Whether the owner fielded a team that year.
    pub fn owner_active_in(&self, owner: &str, year: u16) -> bool {
        self.teams
            .iter()
            .any(|((y, _), team)| *y == year && team.owner == owner)
    }

    /// All owners, sorted by name.
    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.owners.iter().map(String::as_str)
    }

    pub fn owner_count(&self) -> usize {
        self.owners.len()
    }

    /// Distinct team ids across all years.
    pub fn team_id_count(&self) -> usize {
        self.teams
            .keys()
            .map(|(_, id)| *id)
            .collect::<BTreeSet<_>>()
            .len()
    }
}
