// SPDX-License-Identifier: MPL-2.0
//! Saving the edited script to disk.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Asks the user for a destination, starting in `directory` with `file_name`
/// pre-filled. Returns `None` when the dialog is cancelled.
pub async fn pick_script_destination(
    directory: Option<PathBuf>,
    file_name: String,
) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_file_name(&file_name)
        .add_filter("Python", &["py"]);
    if let Some(dir) = directory.filter(|dir| dir.is_dir()) {
        dialog = dialog.set_directory(dir);
    }
    dialog.save_file().await.map(|handle| handle.path().to_path_buf())
}

/// Writes `contents` to `path` and returns the path on success.
pub async fn write_script(path: PathBuf, contents: String) -> Result<PathBuf> {
    tokio::fs::write(&path, contents.as_bytes())
        .await
        .map_err(|err| Error::Export(format!("{}: {err}", path.display())))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "Script saved");
    Ok(path)
}

/// Shows the save dialog then writes the script.
///
/// `Ok(None)` means the user cancelled.
pub async fn save_script(
    directory: Option<PathBuf>,
    file_name: String,
    contents: String,
) -> Result<Option<PathBuf>> {
    match pick_script_destination(directory, file_name).await {
        Some(path) => write_script(path, contents).await.map(Some),
        None => Ok(None),
    }
}

/// Directory component of a saved file, remembered for the next dialog.
#[must_use]
pub fn parent_directory(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
