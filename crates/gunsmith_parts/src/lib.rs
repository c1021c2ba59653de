//! Gunsmith Parts - Weapon Parts and Shop Catalog
//!
//! This crate provides the attachable weapon parts and their randomized
//! generation.
//!
//! # Features
//!
//! - Part kinds with a fixed application order and per-kind stat influence
//! - Part modifiers with clamped stat deltas and magazine capacity
//! - Rarity tiers (1-5 stars) bounding price, stats, and ammo
//! - Catalog validation at load time with defensive tier fallback
//! - Randomized shop offering generation
//!
//! # Example
//!
//! ```ignore
//! use gunsmith_parts::prelude::*;
//! use rand::SeedableRng;
//!
//! let catalog = PartCatalog::reference();
//! let mut rng = rand::rngs::StdRng::from_entropy();
//!
//! // Roll a three-star barrel for the shop shelf
//! let offering = catalog.generate(PartKind::Barrel, 3, &mut rng)?;
//! println!("{} for {} credits", offering.part.name, offering.part.price);
//! ```

pub mod catalog;
pub mod offering;
pub mod part;

pub mod prelude {
    pub use crate::catalog::{
        CatalogError, ModelRef, PartCatalog, RarityTier, RARITY_MAX, RARITY_MIN,
    };
    pub use crate::offering::ShopOffering;
    pub use crate::part::{PartKind, PartModifier, DELTA_MAX, DELTA_MIN};
}

pub use prelude::*;
