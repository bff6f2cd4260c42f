//! Menu files in a support directory, one `<name>.json` per menu

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::loader::{load_value, to_records};
use super::types::{MenuNode, MenuResult};

/// File-backed menu storage
#[derive(Debug, Clone)]
pub struct MenuStore {
    directory: PathBuf,
}

impl MenuStore {
    /// Create a store rooted at `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the file backing menu `name`
    pub fn path(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{}.json", name))
    }

    /// Load menu `name`.
    ///
    /// A missing file is an empty menu; the support directory is created if
    /// it does not exist yet.
    pub fn load(&self, name: &str) -> MenuResult<Vec<MenuNode>> {
        fs::create_dir_all(&self.directory)?;

        let path = self.path(name);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No menu file, using empty menu");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let document: serde_json::Value = serde_json::from_str(&contents)?;
        let nodes = load_value(&document);

        tracing::info!(
            path = %path.display(),
            top_level = nodes.len(),
            "Menu loaded"
        );

        Ok(nodes)
    }

    /// Write menu `name`, replacing any previous contents
    pub fn save(&self, name: &str, nodes: &[MenuNode]) -> MenuResult<()> {
        fs::create_dir_all(&self.directory)?;

        let path = self.path(name);
        let document = serde_json::Value::Array(to_records(nodes));
        fs::write(&path, serde_json::to_string_pretty(&document)?)?;

        tracing::info!(path = %path.display(), top_level = nodes.len(), "Menu saved");
        Ok(())
    }
}
