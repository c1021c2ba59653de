//! Gunsmith Assembly - Weapon Assembly and Welding
//!
//! This crate aggregates installed parts into one resolved weapon.
//!
//! # Features
//!
//! - One nullable slot per part kind
//! - Full stat recomputation on every slot change, in fixed order
//! - Barrel welding gate with a one-way completion latch
//! - Assembly events drained by the consumer
//!
//! # Example
//!
//! ```ignore
//! use gunsmith_assembly::prelude::*;
//! use gunsmith_parts::prelude::*;
//! use gunsmith_stats::prelude::*;
//!
//! let mut weapon = WeaponAssembly::new();
//! weapon.install(PartModifier::new(PartKind::Barrel, "Long Barrel")
//!     .with_delta(StatAxis::Power, 20));
//! weapon.add_weld_progress(100.0);
//!
//! let settings = weapon.settings(&WeaponTuning::default());
//! ```

pub mod assembly;
pub mod weld;

pub mod prelude {
    pub use crate::assembly::{AssemblyEvent, WeaponAssembly};
    pub use crate::weld::{WeldState, WELD_COMPLETE};
}

pub use prelude::*;
