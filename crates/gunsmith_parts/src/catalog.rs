//! Rarity tiers and the part catalog

use crate::part::PartKind;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Lowest star rating a tier can be keyed by
pub const RARITY_MIN: u8 = 1;
/// Highest star rating a tier can be keyed by
pub const RARITY_MAX: u8 = 5;

/// Catalog configuration errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A part kind has no tiers configured at all
    #[error("no rarity tiers configured for {0:?}")]
    EmptyCategory(PartKind),
    /// A tier range has min above max
    #[error("reversed {field} range on {kind:?} rarity {rarity}")]
    ReversedRange {
        kind: PartKind,
        rarity: u8,
        field: &'static str,
    },
    /// Config file could not be parsed
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A mesh/icon asset pair for one part appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRef {
    /// Mesh asset reference
    pub mesh: String,
    /// Icon asset reference
    pub icon: String,
}

impl ModelRef {
    /// Create a model reference
    pub fn new(mesh: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            mesh: mesh.into(),
            icon: icon.into(),
        }
    }
}

/// Generation bounds for one rarity bucket (1-5 stars)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityTier {
    /// Star rating this tier is keyed by
    pub rarity: u8,
    /// Lowest rolled price
    pub min_price: u32,
    /// Highest rolled price
    pub max_price: u32,
    /// Lowest rolled stat delta
    pub min_stat: i32,
    /// Highest rolled stat delta
    pub max_stat: i32,
    /// Lowest rolled magazine capacity (Magazine tiers)
    pub min_ammo: u32,
    /// Highest rolled magazine capacity (Magazine tiers)
    pub max_ammo: u32,
    /// Name fragment pool (empty = parts keep their base name)
    pub name_fragments: Vec<String>,
    /// Appearance pool
    pub models: Vec<ModelRef>,
    /// Manufacturer logo pool
    pub manufacturers: Vec<String>,
}

impl RarityTier {
    /// Create a tier with empty pools and zero ranges
    pub fn new(rarity: u8) -> Self {
        Self {
            rarity,
            min_price: 0,
            max_price: 0,
            min_stat: 0,
            max_stat: 0,
            min_ammo: 0,
            max_ammo: 0,
            name_fragments: Vec::new(),
            models: Vec::new(),
            manufacturers: Vec::new(),
        }
    }

    /// Set the price range
    pub fn with_prices(mut self, min: u32, max: u32) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set the stat delta range
    pub fn with_stats(mut self, min: i32, max: i32) -> Self {
        self.min_stat = min;
        self.max_stat = max;
        self
    }

    /// Set the magazine capacity range
    pub fn with_ammo(mut self, min: u32, max: u32) -> Self {
        self.min_ammo = min;
        self.max_ammo = max;
        self
    }

    /// Add a name fragment to the pool
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.name_fragments.push(fragment.into());
        self
    }

    /// Add an appearance to the pool
    pub fn with_model(mut self, model: ModelRef) -> Self {
        self.models.push(model);
        self
    }

    /// Add a manufacturer logo to the pool
    pub fn with_manufacturer(mut self, name: impl Into<String>) -> Self {
        self.manufacturers.push(name.into());
        self
    }

    fn validate(&self, kind: PartKind) -> Result<(), CatalogError> {
        if self.min_price > self.max_price {
            return Err(CatalogError::ReversedRange {
                kind,
                rarity: self.rarity,
                field: "price",
            });
        }
        if self.min_stat > self.max_stat {
            return Err(CatalogError::ReversedRange {
                kind,
                rarity: self.rarity,
                field: "stat",
            });
        }
        if self.min_ammo > self.max_ammo {
            return Err(CatalogError::ReversedRange {
                kind,
                rarity: self.rarity,
                field: "ammo",
            });
        }
        Ok(())
    }
}

/// Read-only generation configuration: rarity tiers per part kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartCatalog {
    /// Tier lists keyed by part kind
    pub tiers: HashMap<PartKind, Vec<RarityTier>>,
}

impl PartCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tier for a part kind
    pub fn add_tier(&mut self, kind: PartKind, tier: RarityTier) {
        self.tiers.entry(kind).or_default().push(tier);
    }

    /// Parse and validate a JSON catalog document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Fail fast on malformed configuration: every kind must carry at least
    /// one tier and no tier range may be reversed.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for kind in PartKind::ALL {
            let tiers = self
                .tiers
                .get(&kind)
                .filter(|t| !t.is_empty())
                .ok_or(CatalogError::EmptyCategory(kind))?;

            for tier in tiers {
                tier.validate(kind)?;
            }
        }
        Ok(())
    }

    /// Look up the tier for `(kind, rarity)`. A missing rarity falls back to
    /// the kind's first tier with a logged warning; a missing kind is a
    /// configuration error.
    pub fn tier(&self, kind: PartKind, rarity: u8) -> Result<&RarityTier, CatalogError> {
        let tiers = self
            .tiers
            .get(&kind)
            .filter(|t| !t.is_empty())
            .ok_or(CatalogError::EmptyCategory(kind))?;

        match tiers.iter().find(|t| t.rarity == rarity) {
            Some(tier) => Ok(tier),
            None => {
                warn!(
                    "no rarity {} tier for {:?}, falling back to rarity {}",
                    rarity, kind, tiers[0].rarity
                );
                Ok(&tiers[0])
            }
        }
    }

    /// Built-in reference catalog: five tiers per kind with escalating
    /// price and stat ranges.
    pub fn reference() -> Self {
        let mut catalog = Self::new();

        for kind in PartKind::ALL {
            for rarity in 1..=5u8 {
                let step = rarity as u32;
                let mut tier = RarityTier::new(rarity)
                    .with_prices(20 * step, 100 * step)
                    .with_stats(4 * rarity as i32, 18 * rarity as i32)
                    .with_fragment(format!("Mk {}", rarity))
                    .with_fragment("Custom")
                    .with_model(ModelRef::new(
                        format!("meshes/{}_{}.mesh", kind.display_name().to_lowercase(), rarity),
                        format!("icons/{}_{}.png", kind.display_name().to_lowercase(), rarity),
                    ))
                    .with_manufacturer("Hargreave & Sons")
                    .with_manufacturer("Vektor Arms");

                if kind == PartKind::Magazine {
                    tier = tier.with_ammo(8 + 4 * step, 12 + 10 * step);
                }
                // Stocks damp recoil, so their rolls go downward
                if kind == PartKind::Stock {
                    tier = tier.with_stats(-18 * rarity as i32, -4 * rarity as i32);
                }

                catalog.add_tier(kind, tier);
            }
        }

        catalog
    }
}
