//! Gunsmith Economy - Wallet and Shop Front
//!
//! This crate provides the money balance and the purchase flow between shop
//! offerings and weapon assemblies.
//!
//! # Features
//!
//! - Wallet passed explicitly to its consumers (no global money state)
//! - Shop shelves refreshed with randomized offerings per part kind
//! - Atomic purchases: insufficient funds reject with no side effects
//!
//! # Example
//!
//! ```ignore
//! use gunsmith_assembly::prelude::*;
//! use gunsmith_economy::prelude::*;
//! use gunsmith_parts::prelude::*;
//!
//! let mut shop = ShopFront::new(PartCatalog::reference());
//! let mut wallet = Wallet::new(500);
//! let mut weapon = WeaponAssembly::new();
//!
//! shop.refresh(PartKind::Barrel, 3)?;
//! shop.purchase(PartKind::Barrel, 0, &mut wallet, &mut weapon)?;
//! ```

pub mod shop;
pub mod wallet;

pub mod prelude {
    pub use crate::shop::{ShopError, ShopFront};
    pub use crate::wallet::Wallet;
}

pub use prelude::*;
