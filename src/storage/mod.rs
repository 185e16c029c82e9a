//! Storage layer for fintrack
//!
//! The whole state persists as a single JSON document. Loading is
//! fail-soft: a missing, corrupt, or unreadable document falls back to the
//! seeded default state and a fresh save of that default is attempted.
//! Saving is atomic (temp file + rename).

pub mod file_io;
pub mod migrate;
pub mod seed;

pub use file_io::{read_json, write_json_atomic};
pub use migrate::StateDocument;

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::paths::FinancePaths;
use crate::error::FinanceResult;
use crate::models::FinanceState;

/// Loads and saves the persisted state document
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store for an explicit document path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store rooted at the configured data directory
    pub fn open(paths: &FinancePaths) -> Self {
        Self::new(paths.state_file())
    }

    /// The path of the persisted document
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the state, falling back to the seeded default on any failure
    ///
    /// A version mismatch triggers the wholesale-collection migration in
    /// [`migrate`]. Whenever the loaded state differs from what is on disk
    /// (first run, corrupt document, migration), a save is attempted; a
    /// failed save is logged and swallowed.
    pub fn load(&self) -> FinanceState {
        let doc: StateDocument = match read_json(&self.path) {
            Ok(doc) => doc,
            Err(err) => {
                debug!(error = %err, "no usable state document, seeding defaults");
                let state = seed::default_state();
                self.save_or_warn(&state);
                return state;
            }
        };

        if doc.is_current() {
            doc.into_state()
        } else {
            let migrated = migrate::migrate(doc);
            self.save_or_warn(&migrated);
            migrated
        }
    }

    /// Persist the state atomically
    pub fn save(&self, state: &FinanceState) -> FinanceResult<()> {
        write_json_atomic(&self.path, state)
    }

    /// Persist the state, logging and swallowing any failure
    ///
    /// The in-memory state stays correct either way; the caller surfaces
    /// the data-loss risk to the user.
    pub fn save_or_warn(&self, state: &FinanceState) {
        if let Err(err) = self.save(state) {
            warn!(error = %err, path = %self.path.display(), "failed to persist state");
        }
    }
}
