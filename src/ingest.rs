//! Load pipeline: JSONL input files into a validated record store.

use thiserror::Error;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::models::{RecordSet, RecordStore, ValidationError};
use crate::storage::jsonl::{EntityType, JsonlReader};
use crate::storage::{StorageConfig, StorageError};

/// Errors that stop a load before any computation runs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read input: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
}

/// Read every input collection. Missing files are empty collections.
pub fn load_records(storage: &StorageConfig) -> Result<RecordSet, StorageError> {
    let records = RecordSet {
        seasons: JsonlReader::for_entity(storage, EntityType::Season).read_all()?,
        matchups: JsonlReader::for_entity(storage, EntityType::Matchup).read_all()?,
        draft: JsonlReader::for_entity(storage, EntityType::DraftPick).read_all()?,
        rosters: JsonlReader::for_entity(storage, EntityType::RosterEntry).read_all()?,
        lineups: JsonlReader::for_entity(storage, EntityType::LineupEntry).read_all()?,
    };

    info!(
        "Loaded {} seasons, {} matchups, {} draft picks, {} roster entries, {} lineup entries",
        records.seasons.len(),
        records.matchups.len(),
        records.draft.len(),
        records.rosters.len(),
        records.lineups.len()
    );
    if records.seasons.is_empty() {
        warn!("No season records found in {:?}", storage.input_dir());
    }

    Ok(records)
}

/// Load and validate the input snapshot.
pub fn load_store(storage: &StorageConfig, config: &AppConfig) -> Result<RecordStore, LoadError> {
    let records = load_records(storage)?;
    let store = RecordStore::new(records, &config.owners.aliases)?;

    let without_playoffs = store
        .years()
        .into_iter()
        .filter(|&year| {
            store
                .seasons()
                .iter()
                .all(|s| s.year != year || s.final_standing.is_none())
        })
        .count();
    if without_playoffs > 0 {
        info!("{} seasons have no final standings", without_playoffs);
    }

    Ok(store)
}
