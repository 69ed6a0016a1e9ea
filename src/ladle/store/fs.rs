use super::StoreBackend;
use crate::error::{LadleError, Result};
use crate::model::Recipe;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed catalog storage: one JSON array in a single file.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(LadleError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "recipes.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }
}

impl StoreBackend for FileBackend {
    fn load_recipes(&self) -> Result<Vec<Recipe>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(LadleError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let recipes: Vec<Recipe> =
            serde_json::from_str(&content).map_err(|source| LadleError::CorruptData {
                path: self.path.clone(),
                source,
            })?;
        Ok(recipes)
    }

    fn save_recipes(&mut self, recipes: &[Recipe]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(recipes).map_err(LadleError::Serialization)?;

        // Write to a temp file in the same directory, then rename over the
        // target, so a crash mid-write never leaves a truncated catalog.
        let tmp = self.tmp_path();
        fs::write(&tmp, content).map_err(LadleError::Io)?;
        fs::rename(&tmp, &self.path).map_err(LadleError::Io)?;
        Ok(())
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
