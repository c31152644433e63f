// Rust guideline compliant 2026-10-12

//! Repository discovery and path management utilities.

use crate::error::{AppError, Result};
use crate::manager::ShipManager;
use shipyard_core::{Config, Storage};
use std::path::{Path, PathBuf};

/// Name of the directory holding ship data and configuration.
pub const SHIPYARD_DIR: &str = ".shipyard";
/// File name of the ship data file.
pub const SHIPS_FILE: &str = "ships.jsonl";

/// Repository path metadata for a Shipyard workspace.
#[derive(Debug, Clone)]
pub struct RepoContext {
    root: PathBuf,
    shipyard_dir: PathBuf,
    ships_path: PathBuf,
    config_path: PathBuf,
}

impl RepoContext {
    /// Resolves repository paths under `root` without checking they exist.
    pub fn at(root: &Path) -> Self {
        let shipyard_dir = root.join(SHIPYARD_DIR);
        Self {
            root: root.to_path_buf(),
            ships_path: shipyard_dir.join(SHIPS_FILE),
            config_path: shipyard_dir.join("config.toml"),
            shipyard_dir,
        }
    }

    /// Discovers a Shipyard repository starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Optional repository root, defaults to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.shipyard` directory is missing
    pub fn discover(repo_root: Option<&Path>) -> Result<Self> {
        let root = match repo_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(&root);
        if !context.shipyard_dir.exists() {
            return Err(AppError::RepoNotInitialized {
                path: context.shipyard_dir,
            });
        }
        Ok(context)
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.shipyard` directory path.
    #[must_use]
    pub fn shipyard_dir(&self) -> &Path {
        self.shipyard_dir.as_path()
    }

    /// Returns the ships JSONL path.
    #[must_use]
    pub fn ships_path(&self) -> &Path {
        self.ships_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Loads repository configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.shipyard_dir())?)
    }

    /// Opens storage for the ships file, locking writes if configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn open_storage(&self, config: &Config) -> Result<Storage> {
        Ok(Storage::new(self.ships_path.clone())?.with_locking(config.use_lock))
    }

    /// Opens a ship manager over the repository storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn open_manager(&self, config: &Config) -> Result<ShipManager<Storage>> {
        Ok(ShipManager::new(self.open_storage(config)?))
    }
}
