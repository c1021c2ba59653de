//! Gunsmith Save - Persistence Snapshots and Save/Load
//!
//! This crate projects live weapon state into serializable snapshots and
//! writes player profiles to disk.
//!
//! # Features
//!
//! - Part and weapon snapshots that capture rolled randomness
//! - Exact stat reconstruction on load (no re-rolling)
//! - Player profile with wallet, locker weapons, and stash parts
//! - Slot-based save manager with JSON and binary formats and versioning
//!
//! # Example
//!
//! ```ignore
//! use gunsmith_save::prelude::*;
//!
//! let snapshot = WeaponSnapshot::capture(&weapon);
//! let profile = ProfileSnapshot::new().with_balance(wallet.balance());
//!
//! let mut manager = SaveManager::new("saves").with_format(SaveFormat::Json);
//! manager.save("slot1", &ProfileSave::new("Range Day", profile))?;
//! ```

pub mod manager;
pub mod snapshot;

pub mod prelude {
    pub use crate::manager::{ProfileSave, SaveError, SaveFormat, SaveHeader, SaveManager};
    pub use crate::snapshot::{PartSnapshot, ProfileSnapshot, WeaponSnapshot};
}

pub use prelude::*;
