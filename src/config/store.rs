//! Sources of the four settings layers.
//!
//! [`FileSettings`] reads the layers from disk on every call; nothing is
//! cached between operations. [`StaticSettings`] serves fixed layers for
//! embedding hosts that keep settings elsewhere.

use anyhow::{Result, anyhow};
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::{SettingsLayer, SettingsLayers, load_optional_settings};
use crate::constants::SETTINGS_FILE_NAME;
use crate::utils::platform::get_home_dir;

/// Supplies the settings layers that apply to one document.
pub trait SettingsSource: Send + Sync {
    /// Load the default, global, workspace and workspace-folder layers for
    /// the document at `document_path`.
    fn load_layers(&self, document_path: &Path)
    -> impl Future<Output = Result<SettingsLayers>> + Send;
}

/// Settings layers stored as TOML files.
///
/// # File Locations
///
/// - global: `~/.fileheader/config.toml` (`%LOCALAPPDATA%\fileheader\config.toml`
///   on Windows), unless another path is given
/// - workspace: `<workspace root>/.fileheader.toml`
/// - workspace folder: the nearest `.fileheader.toml` between the document's
///   directory and the workspace root, the root itself excluded
#[derive(Debug, Clone, Default)]
pub struct FileSettings {
    global_path: Option<PathBuf>,
    workspace_root: Option<PathBuf>,
}

impl FileSettings {
    /// Create a settings source.
    ///
    /// `global_path` of `None` disables the global layer; `workspace_root` of
    /// `None` disables both workspace layers.
    #[must_use]
    pub const fn new(global_path: Option<PathBuf>, workspace_root: Option<PathBuf>) -> Self {
        Self {
            global_path,
            workspace_root,
        }
    }

    /// Default location of the global settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home (or local data) directory cannot be
    /// determined.
    pub fn default_global_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow!("Unable to determine local data directory"))?
                .join("fileheader")
        } else {
            get_home_dir()?.join(".fileheader")
        };

        Ok(config_dir.join("config.toml"))
    }

    async fn find_folder_settings(&self, document_path: &Path) -> Option<PathBuf> {
        let root = self.workspace_root.as_deref()?;
        let mut dir = document_path.parent();

        while let Some(current) = dir {
            if current == root || !current.starts_with(root) {
                break;
            }
            let candidate = current.join(SETTINGS_FILE_NAME);
            if fs::try_exists(&candidate).await.unwrap_or(false) {
                return Some(candidate);
            }
            dir = current.parent();
        }

        None
    }
}

impl SettingsSource for FileSettings {
    async fn load_layers(&self, document_path: &Path) -> Result<SettingsLayers> {
        let global = match &self.global_path {
            Some(path) => load_optional_settings(path).await?,
            None => SettingsLayer::default(),
        };

        let workspace = match &self.workspace_root {
            Some(root) => load_optional_settings(&root.join(SETTINGS_FILE_NAME)).await?,
            None => SettingsLayer::default(),
        };

        let workspace_folder = match self.find_folder_settings(document_path).await {
            Some(path) => {
                debug!("Using folder settings {}", path.display());
                load_optional_settings(&path).await?
            }
            None => SettingsLayer::default(),
        };

        Ok(SettingsLayers {
            default: SettingsLayer::builtin(),
            global,
            workspace,
            workspace_folder,
        })
    }
}

/// Fixed, in-memory settings layers.
#[derive(Debug, Clone, Default)]
pub struct StaticSettings(pub SettingsLayers);

impl StaticSettings {
    /// Serve only a workspace layer on top of the built-in defaults.
    #[must_use]
    pub fn workspace(layer: SettingsLayer) -> Self {
        Self(SettingsLayers {
            workspace: layer,
            ..SettingsLayers::default()
        })
    }
}

impl SettingsSource for StaticSettings {
    async fn load_layers(&self, _document_path: &Path) -> Result<SettingsLayers> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn test_layers_are_read_from_each_location() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("project");
        let global = temp.path().join("global.toml");

        write(&global, "[config]\nauthor = \"Global\"\ncompany = \"Acme\"\n");
        write(&root.join(SETTINGS_FILE_NAME), "[config]\nauthor = \"Workspace\"\n");
        write(&root.join("src/nested/.fileheader.toml"), "variables = [[\"team\", \"core\"]]\n");

        let settings = FileSettings::new(Some(global), Some(root.clone()));
        let layers = settings.load_layers(&root.join("src/nested/deep/lib.rs")).await.unwrap();

        assert_eq!(layers.global.config.company.as_deref(), Some("Acme"));
        assert_eq!(layers.workspace.config.author.as_deref(), Some("Workspace"));
        assert_eq!(layers.workspace_folder.variables[0].name(), "team");

        let effective = layers.effective();
        assert_eq!(effective.config.author.as_deref(), Some("Workspace"));
        assert_eq!(effective.config.company.as_deref(), Some("Acme"));
    }

    #[tokio::test]
    async fn test_root_settings_are_not_read_twice() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();
        write(&root.join(SETTINGS_FILE_NAME), "[config]\ncompany = \"Root\"\n");

        let settings = FileSettings::new(None, Some(root.clone()));
        let layers = settings.load_layers(&root.join("main.rs")).await.unwrap();

        assert_eq!(layers.workspace.config.company.as_deref(), Some("Root"));
        assert_eq!(layers.workspace_folder, SettingsLayer::default());
    }

    #[tokio::test]
    async fn test_settings_are_reloaded_every_call() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();
        let file = root.join(SETTINGS_FILE_NAME);
        let settings = FileSettings::new(None, Some(root.clone()));

        write(&file, "[config]\ncompany = \"First\"\n");
        let first = settings.load_layers(&root.join("a.rs")).await.unwrap();
        write(&file, "[config]\ncompany = \"Second\"\n");
        let second = settings.load_layers(&root.join("a.rs")).await.unwrap();

        assert_eq!(first.workspace.config.company.as_deref(), Some("First"));
        assert_eq!(second.workspace.config.company.as_deref(), Some("Second"));
    }

    #[tokio::test]
    async fn test_no_workspace_means_defaults_only() {
        let layers = FileSettings::default().load_layers(Path::new("/tmp/x.rs")).await.unwrap();
        assert_eq!(layers, SettingsLayers::default());
    }
}
