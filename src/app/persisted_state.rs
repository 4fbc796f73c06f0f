// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! Holds state worth keeping between sessions that is not a user preference
//! (those live in `settings.toml`). Currently only the directory of the last
//! saved script.

use super::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Initial directory of the script save dialog.
    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads state from the default location.
    ///
    /// On failure returns the default state together with the error, so the
    /// caller can warn the user.
    pub fn load() -> (Self, Option<Error>) {
        Self::load_from(None)
    }

    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<Error>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match Self::read(&path) {
            Ok(state) => (state, None),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "Could not load state file");
                (Self::default(), Some(error))
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)
            .map_err(|err| Error::State(format!("{}: {err}", path.display())))?;
        ciborium::from_reader(BufReader::new(file))
            .map_err(|err| Error::State(format!("{}: {err}", path.display())))
    }

    /// Saves state to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(None)
    }

    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Result<()> {
        let path = Self::state_file_path_with_override(base_dir)
            .ok_or_else(|| Error::State("no data directory available".to_string()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = fs::File::create(&path)?;
        ciborium::into_writer(self, BufWriter::new(file))
            .map_err(|err| Error::State(format!("{}: {err}", path.display())))
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = AppState {
            last_save_directory: Some(PathBuf::from("/test/save/directory")),
        };

        original.save_to(Some(base_dir.clone())).expect("save state");
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(base_dir));
        let error = warning.expect("corrupted file is reported");
        assert!(matches!(error, Error::State(_)));
        assert_eq!(error.i18n_key(), "error-state");
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let state = AppState {
            last_save_directory: Some(PathBuf::from("/test")),
        };
        state.save_to(Some(nested_dir.clone())).expect("save state");
        assert!(nested_dir.join(STATE_FILE).exists());
    }
}
