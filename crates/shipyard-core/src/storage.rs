// Rust guideline compliant 2026-10-12

//! Storage module for JSONL file operations.
//!
//! Ships are stored one JSON object per line. Writes replace the whole file
//! through a temp file and rename, optionally under an exclusive file lock.

use crate::{Error, Result, Ship, Store};
use std::path::{Path, PathBuf};

/// JSONL-backed ship store.
#[derive(Debug, Clone)]
pub struct Storage {
    /// Path to the JSONL file.
    path: PathBuf,
    /// Whether mutating operations take the file lock.
    locking: bool,
}

impl Storage {
    /// Creates a new Storage instance.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSONL file
    ///
    /// # Returns
    ///
    /// A new Storage instance with locking disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is invalid.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::validate_path(&path)?;
        Ok(Self {
            path,
            locking: false,
        })
    }

    /// Enables or disables the exclusive lock around create/save/delete.
    #[must_use]
    pub fn with_locking(mut self, locking: bool) -> Self {
        self.locking = locking;
        self
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage {
    /// Loads all ships from the JSONL file, one record per line.
    ///
    /// Blank lines are ignored. Malformed lines are logged and skipped, and
    /// reading continues with the next line.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or read
    /// - A ship fails validation
    pub fn load_all(&self) -> Result<Vec<Ship>> {
        use std::io::BufRead;

        let Some(reader) = self.open_reader()? else {
            return Ok(Vec::new());
        };

        let mut ships = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            if let Some(ship) = self.parse_line(index + 1, &line?)? {
                ships.push(ship);
            }
        }

        tracing::debug!(count = ships.len(), "loaded ships");
        Ok(ships)
    }

    /// Loads a single ship by id, stopping at the first matching line.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or read
    /// - A ship read before the match fails validation
    /// - The ship is not found
    pub fn load_by_id(&self, id: u64) -> Result<Ship> {
        use std::io::BufRead;

        let Some(reader) = self.open_reader()? else {
            return Err(Error::NotFound(id));
        };

        for (index, line) in reader.lines().enumerate() {
            if let Some(ship) = self.parse_line(index + 1, &line?)? {
                if ship.id() == id {
                    return Ok(ship);
                }
            }
        }

        Err(Error::NotFound(id))
    }

    fn open_reader(&self) -> Result<Option<std::io::BufReader<std::fs::File>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let file = std::fs::File::open(&self.path)?;
        Ok(Some(std::io::BufReader::new(file)))
    }

    /// Parses one stored line. Blank and malformed lines yield `None`.
    fn parse_line(&self, line_number: usize, line: &str) -> Result<Option<Ship>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<Ship>(line) {
            Ok(ship) => {
                ship.validate()?;
                Ok(Some(ship))
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    line = line_number,
                    error = %e,
                    "skipping malformed JSON line"
                );
                Ok(None)
            }
        }
    }

    /// Saves multiple ships to the JSONL file.
    ///
    /// Replaces the entire file with the provided ships through a temp file
    /// and rename.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any ship fails validation
    /// - The file cannot be written
    /// - The atomic rename fails
    pub fn save_all(&self, ships: &[Ship]) -> Result<()> {
        use std::fs::File;
        use std::io::{BufWriter, Write};

        for ship in ships {
            ship.validate()?;
        }

        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);

            for ship in ships {
                serde_json::to_writer(&mut writer, ship)?;
                writer.write_all(b"\n")?;
            }

            let file = writer.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    /// Executes a closure with an exclusive lock on the storage file.
    ///
    /// The lock lives on a sibling `.lock` file and is released when the
    /// closure returns, whether or not it failed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock is held by another process
    /// - The closure returns an error
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();

        if let Err(e) = lock_file.unlock() {
            tracing::warn!(path = %lock_path.display(), error = %e, "failed to release lock");
        }

        result
    }

    fn write_guarded<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        if self.locking {
            self.with_lock(f)
        } else {
            f()
        }
    }
}

impl Store for Storage {
    fn find_all(&self) -> Result<Vec<Ship>> {
        self.load_all()
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Ship>> {
        match self.load_by_id(id) {
            Ok(ship) => Ok(Some(ship)),
            Err(Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn create(&self, ship: Ship) -> Result<Ship> {
        ship.validate()?;
        self.write_guarded(|| {
            let mut ships = self.load_all()?;
            let next_id = ships.iter().map(Ship::id).max().unwrap_or(0) + 1;
            let ship = ship.with_id(next_id);
            ships.push(ship.clone());
            self.save_all(&ships)?;
            Ok(ship)
        })
    }

    fn save(&self, ship: &Ship) -> Result<Ship> {
        ship.validate()?;
        self.write_guarded(|| {
            let mut ships = self.load_all()?;
            let slot = ships
                .iter_mut()
                .find(|stored| stored.id() == ship.id())
                .ok_or(Error::NotFound(ship.id()))?;
            *slot = ship.clone();
            self.save_all(&ships)?;
            Ok(ship.clone())
        })
    }

    fn delete(&self, ship: &Ship) -> Result<()> {
        self.write_guarded(|| {
            let mut ships = self.load_all()?;
            let initial_len = ships.len();
            ships.retain(|stored| stored.id() != ship.id());

            if ships.len() == initial_len {
                return Err(Error::NotFound(ship.id()));
            }

            self.save_all(&ships)
        })
    }
}
