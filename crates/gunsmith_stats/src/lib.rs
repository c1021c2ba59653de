//! Gunsmith Stats - Weapon Stat Model
//!
//! This crate provides the numeric stat model for customizable weapons.
//!
//! # Features
//!
//! - Stat axes with a clamped 1-100 rating scale
//! - Aggregate stat vector with ammo, damage, and part cost
//! - Configurable tuning bounds with built-in defaults
//! - Pure derivation of gameplay settings from a stat vector
//!
//! # Example
//!
//! ```ignore
//! use gunsmith_stats::prelude::*;
//!
//! // Start from the factory-base vector and raise power
//! let mut stats = StatVector::base();
//! stats.add_rating(StatAxis::Power, 40);
//!
//! // Resolve gameplay parameters
//! let settings = WeaponSettings::derive(&stats, &WeaponTuning::default());
//! println!("bullet speed: {}", settings.bullet_speed);
//! ```

pub mod axis;
pub mod settings;
pub mod tuning;
pub mod vector;

pub mod prelude {
    pub use crate::axis::{StatAxis, RATING_MAX, RATING_MIN};
    pub use crate::settings::{normalized, WeaponSettings};
    pub use crate::tuning::{Bounds, TuningError, WeaponTuning};
    pub use crate::vector::{StatVector, DEFAULT_DAMAGE};
}

pub use prelude::*;
