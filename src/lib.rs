//! # League Ledger
//!
//! Historical statistics engine for a long-running fantasy football league.
//!
//! ## Architecture
//!
//! - **models**: Input records, the validated record store, and view documents
//! - **ingest**: Load and validate JSONL input snapshots
//! - **calculate**: Standings, all-time, head-to-head, streak, record book,
//!   draft value and lineup computations
//! - **storage**: Filesystem layout, JSONL input, view document output
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod ingest;
pub mod models;
pub mod storage;

pub use models::*;
