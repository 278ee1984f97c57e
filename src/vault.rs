use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Workout;

/// Writes rendered workout notes into the vault directory, one markdown
/// file per workout id. Existing notes are never overwritten.
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn note_path(&self, workout: &Workout) -> PathBuf {
        self.root.join(format!("{}.md", workout.id))
    }

    /// Persist one workout note. Returns false when a note with the same id
    /// already exists, leaving the file untouched.
    pub fn write_workout(&self, workout: &Workout, content: &str) -> Result<bool> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }

        let path = self.note_path(workout);
        if path.exists() {
            tracing::debug!(path = %path.display(), "note already exists, skipping");
            return Ok(false);
        }

        fs::write(&path, content)?;
        tracing::info!(path = %path.display(), "wrote workout note");
        Ok(true)
    }
}
