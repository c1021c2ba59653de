//! Randomized shop offerings

use crate::catalog::{CatalogError, PartCatalog, RarityTier};
use crate::part::{PartKind, PartModifier};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An ephemeral, randomly generated part shown for purchase.
///
/// Offerings live until the next category refresh; only purchased parts
/// outlive the shelf they were rolled onto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopOffering {
    /// The rolled part
    pub part: PartModifier,
    /// Star rating of the tier that produced it
    pub rarity: u8,
    /// Manufacturer logo, when the tier carries a pool
    pub manufacturer: Option<String>,
}

impl ShopOffering {
    /// Purchase price of the underlying part
    pub fn price(&self) -> u32 {
        self.part.price
    }
}

fn roll_u32(rng: &mut impl Rng, min: u32, max: u32) -> u32 {
    if min >= max {
        min
    } else {
        rng.gen_range(min..=max)
    }
}

fn roll_i32(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    if min >= max {
        min
    } else {
        rng.gen_range(min..=max)
    }
}

fn display_name(kind: PartKind, tier: &RarityTier, rng: &mut impl Rng) -> String {
    match tier.name_fragments.choose(rng) {
        Some(fragment) => format!("{} {}", fragment, kind.display_name()),
        None => kind.display_name().to_string(),
    }
}

impl PartCatalog {
    /// Roll one offering for `(kind, rarity)`.
    ///
    /// Every call draws independently; refreshing a shelf simply re-invokes
    /// this and discards the previous offerings. Duplicate rolls are
    /// accepted, not deduplicated.
    pub fn generate(
        &self,
        kind: PartKind,
        rarity: u8,
        rng: &mut impl Rng,
    ) -> Result<ShopOffering, CatalogError> {
        let tier = self.tier(kind, rarity)?;

        let mut part = PartModifier::new(kind, display_name(kind, tier, rng))
            .with_price(roll_u32(rng, tier.min_price, tier.max_price));

        for &axis in kind.influences() {
            part = part.with_delta(axis, roll_i32(rng, tier.min_stat, tier.max_stat));
        }

        if kind == PartKind::Magazine {
            part = part.with_magazine_capacity(roll_u32(rng, tier.min_ammo, tier.max_ammo));
        }

        if let Some(model) = tier.models.choose(rng) {
            part = part.with_model(model.mesh.clone(), model.icon.clone());
        }

        Ok(ShopOffering {
            part,
            rarity: tier.rarity,
            manufacturer: tier.manufacturers.choose(rng).cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gunsmith_stats::StatAxis;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_rng() -> StdRng {
        StdRng::seed_from_u64(0x5EED)
    }

    #[test]
    fn test_prices_stay_in_tier_range() {
        let mut catalog = PartCatalog::new();
        for kind in PartKind::ALL {
            catalog.add_tier(
                kind,
                RarityTier::new(3).with_prices(20, 100).with_stats(1, 10).with_ammo(8, 24),
            );
        }

        let mut rng = fixed_rng();
        for _ in 0..10_000 {
            let offering = catalog.generate(PartKind::Barrel, 3, &mut rng).unwrap();
            assert!(offering.price() >= 20);
            assert!(offering.price() <= 100);
        }
    }

    #[test]
    fn test_deltas_follow_influence_set() {
        let catalog = PartCatalog::reference();
        let mut rng = fixed_rng();

        let offering = catalog.generate(PartKind::Scope, 2, &mut rng).unwrap();

        assert_ne!(offering.part.delta(StatAxis::Scope), 0);
        for axis in StatAxis::RATED {
            if !PartKind::Scope.influences().contains(&axis) {
                assert_eq!(offering.part.delta(axis), 0);
            }
        }
    }

    #[test]
    fn test_magazine_rolls_capacity() {
        let catalog = PartCatalog::reference();
        let mut rng = fixed_rng();

        for _ in 0..100 {
            let offering = catalog.generate(PartKind::Magazine, 4, &mut rng).unwrap();
            let tier = catalog.tier(PartKind::Magazine, 4).unwrap();
            let capacity = offering.part.magazine_capacity.unwrap();

            assert!(capacity >= tier.min_ammo);
            assert!(capacity <= tier.max_ammo);
        }

        let barrel = catalog.generate(PartKind::Barrel, 4, &mut rng).unwrap();
        assert!(barrel.part.magazine_capacity.is_none());
    }

    #[test]
    fn test_empty_fragment_pool_keeps_base_name() {
        let mut catalog = PartCatalog::new();
        for kind in PartKind::ALL {
            catalog.add_tier(kind, RarityTier::new(1).with_prices(5, 10).with_stats(1, 3));
        }

        let mut rng = fixed_rng();
        let offering = catalog.generate(PartKind::Stock, 1, &mut rng).unwrap();

        assert_eq!(offering.part.name, "Stock");
        assert!(offering.manufacturer.is_none());
        assert!(offering.part.mesh.is_empty());
    }

    #[test]
    fn test_fragment_prefixes_base_name() {
        let mut catalog = PartCatalog::new();
        catalog.add_tier(
            PartKind::Barrel,
            RarityTier::new(2).with_prices(5, 10).with_stats(1, 3).with_fragment("Rifled"),
        );

        let mut rng = fixed_rng();
        let offering = catalog.generate(PartKind::Barrel, 2, &mut rng).unwrap();

        assert_eq!(offering.part.name, "Rifled Barrel");
        assert_eq!(offering.rarity, 2);
    }

    #[test]
    fn test_missing_kind_is_an_error() {
        let catalog = PartCatalog::new();
        let mut rng = fixed_rng();

        assert!(matches!(
            catalog.generate(PartKind::Scope, 1, &mut rng),
            Err(CatalogError::EmptyCategory(PartKind::Scope))
        ));
    }
}
