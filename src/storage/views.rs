//! Derived view documents on disk.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info};

use super::{StorageConfig, StorageError};
use crate::models::LeagueViews;

/// File holding every view in one document.
pub const COMPLETE_DATA_FILE: &str = "complete_data.json";

/// One named view document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Metadata,
    Owners,
    Standings,
    Matchups,
    HeadToHead,
    Playoffs,
    Records,
    Draft,
    BestDraftPicks,
    WorstDraftPicks,
    Rosters,
    OptimalLineups,
    LineupEfficiency,
}

impl View {
    pub const ALL: [View; 13] = [
        View::Metadata,
        View::Owners,
        View::Standings,
        View::Matchups,
        View::HeadToHead,
        View::Playoffs,
        View::Records,
        View::Draft,
        View::BestDraftPicks,
        View::WorstDraftPicks,
        View::Rosters,
        View::OptimalLineups,
        View::LineupEfficiency,
    ];

    /// Name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            View::Metadata => "metadata",
            View::Owners => "owners",
            View::Standings => "standings",
            View::Matchups => "matchups",
            View::HeadToHead => "head-to-head",
            View::Playoffs => "playoffs",
            View::Records => "records",
            View::Draft => "draft",
            View::BestDraftPicks => "best-draft-picks",
            View::WorstDraftPicks => "worst-draft-picks",
            View::Rosters => "rosters",
            View::OptimalLineups => "optimal-lineups",
            View::LineupEfficiency => "lineup-efficiency",
        }
    }

    pub fn filename(&self) -> String {
        format!("{}.json", self.name().replace('-', "_"))
    }

    /// Pretty-printed JSON for this view.
    pub fn render(&self, views: &LeagueViews) -> Result<String, serde_json::Error> {
        match self {
            View::Metadata => serde_json::to_string_pretty(&views.metadata),
            View::Owners => serde_json::to_string_pretty(&views.owners),
            View::Standings => serde_json::to_string_pretty(&views.standings),
            View::Matchups => serde_json::to_string_pretty(&views.matchups),
            View::HeadToHead => serde_json::to_string_pretty(&views.head_to_head),
            View::Playoffs => serde_json::to_string_pretty(&views.playoffs),
            View::Records => serde_json::to_string_pretty(&views.records),
            View::Draft => serde_json::to_string_pretty(&views.draft),
            View::BestDraftPicks => serde_json::to_string_pretty(&views.best_draft_picks),
            View::WorstDraftPicks => serde_json::to_string_pretty(&views.worst_draft_picks),
            View::Rosters => serde_json::to_string_pretty(&views.rosters),
            View::OptimalLineups => serde_json::to_string_pretty(&views.optimal_lineups),
            View::LineupEfficiency => serde_json::to_string_pretty(&views.lineup_efficiency),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .iter()
            .copied()
            .find(|v| v.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = View::ALL.iter().map(|v| v.name()).collect();
                format!("unknown view '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

/// Writes every view as its own document plus the combined file.
pub struct ViewWriter {
    dir: PathBuf,
}

impl ViewWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Writer targeting the configured output directory.
    pub fn for_config(config: &StorageConfig) -> Self {
        Self::new(config.output_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_document(&self, filename: &str, json: String) -> Result<PathBuf, StorageError> {
        let path = self.dir.join(filename);
        fs::write(&path, json + "\n")?;
        debug!("Wrote {:?}", path);
        Ok(path)
    }

    /// Write all view documents, replacing previous output. Returns the
    /// paths written, combined file last.
    pub fn write_all(&self, views: &LeagueViews) -> Result<Vec<PathBuf>, StorageError> {
        fs::create_dir_all(&self.dir)?;

        let mut written = Vec::with_capacity(View::ALL.len() + 1);
        for view in View::ALL {
            written.push(self.write_document(&view.filename(), view.render(views)?)?);
        }
        written.push(self.write_document(COMPLETE_DATA_FILE, serde_json::to_string_pretty(views)?)?);

        info!("Wrote {} view documents to {:?}", written.len(), self.dir);
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::{self, fixtures};
    use crate::config::AppConfig;
    use tempfile::TempDir;

    #[test]
    fn test_view_names_round_trip() {
        for view in View::ALL {
            assert_eq!(view.name().parse::<View>().unwrap(), view);
        }
        assert!("leaderboard".parse::<View>().is_err());
    }

    #[test]
    fn test_filenames() {
        assert_eq!(View::HeadToHead.filename(), "head_to_head.json");
        assert_eq!(View::Metadata.filename(), "metadata.json");
    }

    #[test]
    fn test_write_all_documents() {
        let temp_dir = TempDir::new().unwrap();
        let views = calculate::compute(&fixtures::league(), &AppConfig::default());

        let writer = ViewWriter::new(temp_dir.path().join("derived"));
        let written = writer.write_all(&views).unwrap();
        assert_eq!(written.len(), 14);
        assert!(written.last().unwrap().ends_with(COMPLETE_DATA_FILE));

        let owners: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(writer.dir().join("owners.json")).unwrap())
                .unwrap();
        assert_eq!(owners.as_array().unwrap().len(), 4);

        let complete: LeagueViews = serde_json::from_str(
            &fs::read_to_string(writer.dir().join(COMPLETE_DATA_FILE)).unwrap(),
        )
        .unwrap();
        assert_eq!(complete.metadata, views.metadata);
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ViewWriter::new(temp_dir.path().to_path_buf());
        let views = calculate::compute(&fixtures::league(), &AppConfig::default());

        writer.write_all(&views).unwrap();
        let first = fs::read(writer.dir().join(COMPLETE_DATA_FILE)).unwrap();
        writer.write_all(&views).unwrap();
        let second = fs::read(writer.dir().join(COMPLETE_DATA_FILE)).unwrap();

        assert_eq!(first, second);
    }
}
