//! JSONL (JSON Lines) storage.
//!
//! Input snapshots are JSONL: each line is one record. A missing file is
//! an era without that kind of data and reads as empty. A line that does
//! not parse is fatal, reported with its file and line number.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use super::{StorageConfig, StorageError};

/// Record types stored as JSONL input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Season,
    Matchup,
    DraftPick,
    RosterEntry,
    LineupEntry,
}

impl EntityType {
    /// Get the filename for this entity type.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Season => "seasons.jsonl",
            EntityType::Matchup => "matchups.jsonl",
            EntityType::DraftPick => "draft.jsonl",
            EntityType::RosterEntry => "rosters.jsonl",
            EntityType::LineupEntry => "lineups.jsonl",
        }
    }
}

/// Get the path for an entity's input file.
pub fn entity_path(config: &StorageConfig, entity: EntityType) -> PathBuf {
    config.input_dir().join(entity.filename())
}

/// JSONL file writer.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    /// Create a new JSONL writer for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a writer for an entity's input file.
    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(entity_path(config, entity))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write entities, replacing the entire file.
    pub fn write_all(&self, entities: &[T]) -> Result<usize, StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let mut count = 0;

        for entity in entities {
            let json = serde_json::to_string(entity)?;
            writeln!(writer, "{}", json)?;
            count += 1;
        }

        writer.flush()?;
        info!("Wrote {} records to {:?}", count, self.path);

        Ok(count)
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a reader for an entity's input file.
    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(entity_path(config, entity))
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read every record. Blank lines are skipped; a missing file reads
    /// as empty.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.exists() {
            debug!("{:?} not present, treating as empty", self.path);
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut entities = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let entity = serde_json::from_str(&line).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                line: idx + 1,
                source,
            })?;
            entities.push(entity);
        }

        debug!("Read {} records from {:?}", entities.len(), self.path);
        Ok(entities)
    }
}
