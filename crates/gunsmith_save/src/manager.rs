//! Slot-based save files

use crate::snapshot::ProfileSnapshot;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Current save format version
pub const SAVE_VERSION: u32 = 1;

/// Save system errors
#[derive(Debug, Error)]
pub enum SaveError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    /// Save was written by a newer build
    #[error("Version mismatch: save version {0}, current version {1}")]
    VersionMismatch(u32, u32),
    /// Slot not found
    #[error("Save slot not found: {0}")]
    SlotNotFound(String),
}

/// Save file encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveFormat {
    /// JSON (human readable)
    Json,
    /// Binary (compact)
    Binary,
}

impl Default for SaveFormat {
    fn default() -> Self {
        Self::Binary
    }
}

impl SaveFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Binary => "sav",
        }
    }
}

/// Save file header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveHeader {
    /// Save format version
    pub version: u32,
    /// Save name/title
    pub name: String,
    /// Save timestamp (Unix seconds)
    pub timestamp: u64,
}

impl SaveHeader {
    /// Create a header stamped with the current time
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: SAVE_VERSION,
            name: name.into(),
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }
}

/// One complete save: header plus the player profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSave {
    /// Save header
    pub header: SaveHeader,
    /// Player profile payload
    pub profile: ProfileSnapshot,
}

impl ProfileSave {
    /// Create a save around a profile
    pub fn new(name: impl Into<String>, profile: ProfileSnapshot) -> Self {
        Self {
            header: SaveHeader::new(name),
            profile,
        }
    }
}

/// Writes and reads profile saves in named slots under one directory.
pub struct SaveManager {
    /// Base save directory
    save_dir: PathBuf,
    /// Save file format
    format: SaveFormat,
    /// Highest loadable save version
    version: u32,
}

impl SaveManager {
    /// Create a save manager rooted at a directory
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
            format: SaveFormat::default(),
            version: SAVE_VERSION,
        }
    }

    /// Set the save format
    pub fn with_format(mut self, format: SaveFormat) -> Self {
        self.format = format;
        self
    }

    /// Ensure the save directory exists
    pub fn ensure_dir(&self) -> Result<(), SaveError> {
        fs::create_dir_all(&self.save_dir)?;
        Ok(())
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.save_dir
            .join(format!("{}.{}", slot, self.format.extension()))
    }

    /// Write a save into a slot
    pub fn save(&self, slot: &str, data: &ProfileSave) -> Result<(), SaveError> {
        self.ensure_dir()?;

        let bytes = match self.format {
            SaveFormat::Json => serde_json::to_vec_pretty(data)
                .map_err(|e| SaveError::Serialization(e.to_string()))?,
            SaveFormat::Binary => {
                bincode::serialize(data).map_err(|e| SaveError::Serialization(e.to_string()))?
            }
        };

        fs::write(self.slot_path(slot), bytes)?;
        Ok(())
    }

    /// Read a save from a slot, rejecting saves from newer builds
    pub fn load(&self, slot: &str) -> Result<ProfileSave, SaveError> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Err(SaveError::SlotNotFound(slot.to_string()));
        }

        let bytes = fs::read(&path)?;
        let data: ProfileSave = match self.format {
            SaveFormat::Json => serde_json::from_slice(&bytes)
                .map_err(|e| SaveError::Deserialization(e.to_string()))?,
            SaveFormat::Binary => bincode::deserialize(&bytes)
                .map_err(|e| SaveError::Deserialization(e.to_string()))?,
        };

        if data.header.version > self.version {
            return Err(SaveError::VersionMismatch(data.header.version, self.version));
        }

        Ok(data)
    }

    /// Delete a save slot
    pub fn delete(&self, slot: &str) -> Result<(), SaveError> {
        let path = self.slot_path(slot);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Check if a slot exists
    pub fn exists(&self, slot: &str) -> bool {
        self.slot_path(slot).exists()
    }

    /// List occupied slot names, newest first
    pub fn list_slots(&self) -> Result<Vec<String>, SaveError> {
        self.ensure_dir()?;

        let mut slots = Vec::new();
        for entry in fs::read_dir(&self.save_dir)? {
            let path = entry?.path();
            if path
                .extension()
                .map(|e| e == self.format.extension())
                .unwrap_or(false)
            {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    let timestamp = self
                        .load(stem)
                        .map(|save| save.header.timestamp)
                        .unwrap_or(0);
                    slots.push((stem.to_string(), timestamp));
                }
            }
        }

        slots.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(slots.into_iter().map(|(name, _)| name).collect())
    }
}
