//! Shop front: offering shelves and the purchase flow

use crate::wallet::Wallet;
use gunsmith_assembly::WeaponAssembly;
use gunsmith_parts::{
    CatalogError, PartCatalog, PartKind, PartModifier, ShopOffering, RARITY_MAX, RARITY_MIN,
};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use thiserror::Error;

/// Purchase and refresh errors
#[derive(Debug, Error)]
pub enum ShopError {
    /// Catalog configuration problem surfaced during generation
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The selected offering does not exist on the shelf
    #[error("no offering {index} on the {kind:?} shelf")]
    UnknownOffering { kind: PartKind, index: usize },
    /// The wallet cannot cover the offering price
    #[error("insufficient funds: price {price}, balance {balance}")]
    InsufficientFunds { price: u32, balance: u64 },
}

/// Offering shelves per part kind, backed by a catalog and an owned RNG.
///
/// Offerings are ephemeral: a refresh discards the shelf and rolls new ones.
#[derive(Debug)]
pub struct ShopFront {
    catalog: PartCatalog,
    offerings: HashMap<PartKind, Vec<ShopOffering>>,
    rng: StdRng,
}

impl ShopFront {
    /// Create a shop over a catalog with an entropy-seeded RNG
    pub fn new(catalog: PartCatalog) -> Self {
        Self {
            catalog,
            offerings: HashMap::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a fixed RNG seed (deterministic shelves for tests)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The backing catalog
    pub fn catalog(&self) -> &PartCatalog {
        &self.catalog
    }

    /// Current shelf for a part kind
    pub fn offerings(&self, kind: PartKind) -> &[ShopOffering] {
        self.offerings.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the shelf for one part kind with `count` fresh offerings,
    /// each rolled at a uniformly drawn rarity.
    pub fn refresh(&mut self, kind: PartKind, count: usize) -> Result<(), ShopError> {
        let mut shelf = Vec::with_capacity(count);
        for _ in 0..count {
            let rarity = self.rng.gen_range(RARITY_MIN..=RARITY_MAX);
            shelf.push(self.catalog.generate(kind, rarity, &mut self.rng)?);
        }

        debug!("restocked {:?} shelf with {} offerings", kind, shelf.len());
        self.offerings.insert(kind, shelf);
        Ok(())
    }

    /// Refresh every shelf
    pub fn refresh_all(&mut self, count: usize) -> Result<(), ShopError> {
        for kind in PartKind::ALL {
            self.refresh(kind, count)?;
        }
        Ok(())
    }

    /// Buy the offering at `index` on a shelf: debit the wallet by exactly
    /// the offering price and install the part into the assembly.
    ///
    /// An unknown index or an unaffordable price rejects the purchase with
    /// no side effects. On success the offering leaves the shelf and any
    /// part displaced from the assembly slot is returned to the caller.
    pub fn purchase(
        &mut self,
        kind: PartKind,
        index: usize,
        wallet: &mut Wallet,
        weapon: &mut WeaponAssembly,
    ) -> Result<Option<PartModifier>, ShopError> {
        let shelf = self
            .offerings
            .get_mut(&kind)
            .ok_or(ShopError::UnknownOffering { kind, index })?;
        if index >= shelf.len() {
            return Err(ShopError::UnknownOffering { kind, index });
        }

        let price = shelf[index].price();
        if !wallet.try_debit(price as u64) {
            return Err(ShopError::InsufficientFunds {
                price,
                balance: wallet.balance(),
            });
        }

        let offering = shelf.remove(index);
        debug!("sold {} for {}", offering.part.name, price);

        Ok(weapon.install(offering.part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stocked_shop() -> ShopFront {
        let mut shop = ShopFront::new(PartCatalog::reference()).with_seed(0xC0FFEE);
        shop.refresh_all(4).unwrap();
        shop
    }

    #[test]
    fn test_refresh_fills_shelves() {
        let shop = stocked_shop();

        for kind in PartKind::ALL {
            let shelf = shop.offerings(kind);
            assert_eq!(shelf.len(), 4);
            for offering in shelf {
                assert_eq!(offering.part.kind, kind);
                assert!(offering.rarity >= RARITY_MIN);
                assert!(offering.rarity <= RARITY_MAX);
            }
        }
    }

    #[test]
    fn test_refresh_discards_previous_shelf() {
        let mut shop = stocked_shop();

        shop.refresh(PartKind::Scope, 2).unwrap();
        assert_eq!(shop.offerings(PartKind::Scope).len(), 2);
    }

    #[test]
    fn test_same_seed_rolls_same_shelves() {
        let mut a = ShopFront::new(PartCatalog::reference()).with_seed(7);
        let mut b = ShopFront::new(PartCatalog::reference()).with_seed(7);
        a.refresh_all(3).unwrap();
        b.refresh_all(3).unwrap();

        for kind in PartKind::ALL {
            assert_eq!(a.offerings(kind), b.offerings(kind));
        }
    }

    #[test]
    fn test_purchase_installs_and_debits() {
        let mut shop = stocked_shop();
        let mut wallet = Wallet::new(1_000_000);
        let mut weapon = WeaponAssembly::new();

        let price = shop.offerings(PartKind::Barrel)[0].price();
        let displaced = shop
            .purchase(PartKind::Barrel, 0, &mut wallet, &mut weapon)
            .unwrap();

        assert!(displaced.is_none());
        assert_eq!(wallet.balance(), 1_000_000 - price as u64);
        assert!(weapon.is_slot_occupied(PartKind::Barrel));
        assert_eq!(shop.offerings(PartKind::Barrel).len(), 3);
        assert_eq!(weapon.stats().total_part_cost, price);
    }

    #[test]
    fn test_insufficient_funds_has_no_side_effects() {
        let mut shop = stocked_shop();
        let mut wallet = Wallet::new(0);
        let mut weapon = WeaponAssembly::new();

        let result = shop.purchase(PartKind::Stock, 0, &mut wallet, &mut weapon);

        assert!(matches!(result, Err(ShopError::InsufficientFunds { .. })));
        assert_eq!(wallet.balance(), 0);
        assert!(!weapon.is_slot_occupied(PartKind::Stock));
        assert_eq!(shop.offerings(PartKind::Stock).len(), 4);
    }

    #[test]
    fn test_unknown_offering_rejected() {
        let mut shop = stocked_shop();
        let mut wallet = Wallet::new(1_000);
        let mut weapon = WeaponAssembly::new();

        let result = shop.purchase(PartKind::Scope, 99, &mut wallet, &mut weapon);

        assert!(matches!(result, Err(ShopError::UnknownOffering { .. })));
        assert_eq!(wallet.balance(), 1_000);
    }

    #[test]
    fn test_purchase_returns_displaced_part() {
        let mut shop = stocked_shop();
        let mut wallet = Wallet::new(1_000_000);
        let mut weapon = WeaponAssembly::new();

        shop.purchase(PartKind::Magazine, 0, &mut wallet, &mut weapon)
            .unwrap();
        let displaced = shop
            .purchase(PartKind::Magazine, 0, &mut wallet, &mut weapon)
            .unwrap();

        assert!(displaced.is_some());
        assert_eq!(displaced.unwrap().kind, PartKind::Magazine);
    }
}
