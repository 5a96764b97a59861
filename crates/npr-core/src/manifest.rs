use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use npr_util::errors::NprError;

use crate::MANIFEST_FILE;

/// The parts of a `package.json` npr cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub scripts: BTreeMap<String, String>,

    /// Glob patterns locating workspace packages, relative to the manifest.
    #[serde(default)]
    pub workspaces: Vec<String>,
}

impl Manifest {
    /// Load `package.json` from `dir`.
    pub fn from_dir(dir: &Path) -> miette::Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NprError::ManifestNotFound { path: path.clone() }
            } else {
                NprError::ManifestRead {
                    path: path.clone(),
                    message: e.to_string(),
                }
            }
        })?;

        tracing::debug!(path = %path.display(), "loaded manifest");
        Self::from_str(&content, &path)
    }

    /// Parse manifest JSON. `path` is only used in error messages.
    pub fn from_str(content: &str, path: &Path) -> miette::Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            NprError::ManifestParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Script names in lexicographic order.
    pub fn script_names(&self) -> Vec<String> {
        self.scripts.keys().cloned().collect()
    }

    pub fn has_workspaces(&self) -> bool {
        !self.workspaces.is_empty()
    }
}
