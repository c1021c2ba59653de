//! Part kinds and stat modifiers

use gunsmith_stats::{StatAxis, StatVector};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lowest legal stat delta a part can carry
pub const DELTA_MIN: i32 = -100;
/// Highest legal stat delta a part can carry
pub const DELTA_MAX: i32 = 100;

/// Attachable part slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartKind {
    /// Barrel (must be welded before the weapon fires)
    Barrel,
    /// Magazine (sets ammo capacity outright)
    Magazine,
    /// Stock
    Stock,
    /// Scope
    Scope,
}

impl PartKind {
    /// Every kind, in canonical application order. Stat recomputation walks
    /// this order so that clamping resolves identically on every pass.
    pub const ALL: [PartKind; 4] = [Self::Barrel, Self::Magazine, Self::Stock, Self::Scope];

    /// Check if installing this kind is gated behind welding
    pub fn requires_welding(&self) -> bool {
        matches!(self, Self::Barrel)
    }

    /// Rated axes that generated parts of this kind modify
    pub fn influences(&self) -> &'static [StatAxis] {
        match self {
            Self::Barrel => &[StatAxis::Power, StatAxis::Accuracy],
            Self::Magazine => &[StatAxis::ReloadSpeed],
            Self::Stock => &[StatAxis::Recoil, StatAxis::Rapidity],
            Self::Scope => &[StatAxis::Scope],
        }
    }

    /// Base display name for parts of this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Barrel => "Barrel",
            Self::Magazine => "Magazine",
            Self::Stock => "Stock",
            Self::Scope => "Scope",
        }
    }
}

/// A named part that additively modifies a subset of stat axes.
///
/// A part is exclusively owned by the weapon slot holding it; its
/// contribution is realized by recomputing the owning weapon's vector, never
/// by incremental patching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartModifier {
    /// Slot this part fits
    pub kind: PartKind,
    /// Display name
    pub name: String,
    /// Purchase price
    pub price: u32,
    /// Signed rating deltas per influenced axis
    pub deltas: HashMap<StatAxis, i32>,
    /// Absolute magazine capacity (Magazine parts only; replaces ammo)
    pub magazine_capacity: Option<u32>,
    /// Mesh asset reference
    pub mesh: String,
    /// Icon asset reference
    pub icon: String,
}

impl PartModifier {
    /// Create a part with no modifiers
    pub fn new(kind: PartKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            price: 0,
            deltas: HashMap::new(),
            magazine_capacity: None,
            mesh: String::new(),
            icon: String::new(),
        }
    }

    /// Set the purchase price
    pub fn with_price(mut self, price: u32) -> Self {
        self.price = price;
        self
    }

    /// Set a rating delta, clamped to the legal delta interval. Ammo is not
    /// a rated axis and is ignored here; use `with_magazine_capacity`.
    pub fn with_delta(mut self, axis: StatAxis, delta: i32) -> Self {
        if axis.is_rated() {
            self.deltas.insert(axis, delta.clamp(DELTA_MIN, DELTA_MAX));
        }
        self
    }

    /// Set the absolute magazine capacity
    pub fn with_magazine_capacity(mut self, capacity: u32) -> Self {
        self.magazine_capacity = Some(capacity);
        self
    }

    /// Set mesh and icon asset references
    pub fn with_model(mut self, mesh: impl Into<String>, icon: impl Into<String>) -> Self {
        self.mesh = mesh.into();
        self.icon = icon.into();
        self
    }

    /// Read the delta for an axis (0 when uninfluenced)
    pub fn delta(&self, axis: StatAxis) -> i32 {
        self.deltas.get(&axis).copied().unwrap_or(0)
    }

    /// Fold this part into a stat vector: clamped additive deltas on rated
    /// axes, absolute ammo replacement for magazines.
    pub fn apply(&self, stats: &mut StatVector) {
        for axis in StatAxis::RATED {
            let delta = self.delta(axis);
            if delta != 0 {
                stats.add_rating(axis, delta);
            }
        }

        if self.kind == PartKind::Magazine {
            if let Some(capacity) = self.magazine_capacity {
                stats.set_ammo(capacity);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gunsmith_stats::{RATING_MAX, RATING_MIN};

    #[test]
    fn test_application_order_is_fixed() {
        assert_eq!(
            PartKind::ALL,
            [
                PartKind::Barrel,
                PartKind::Magazine,
                PartKind::Stock,
                PartKind::Scope
            ]
        );
    }

    #[test]
    fn test_only_barrels_need_welding() {
        assert!(PartKind::Barrel.requires_welding());
        assert!(!PartKind::Magazine.requires_welding());
        assert!(!PartKind::Stock.requires_welding());
        assert!(!PartKind::Scope.requires_welding());
    }

    #[test]
    fn test_delta_clamped_on_build() {
        let part = PartModifier::new(PartKind::Barrel, "Test Barrel")
            .with_delta(StatAxis::Power, 1000)
            .with_delta(StatAxis::Accuracy, -1000);

        assert_eq!(part.delta(StatAxis::Power), DELTA_MAX);
        assert_eq!(part.delta(StatAxis::Accuracy), DELTA_MIN);
        // Uninfluenced axes read as zero
        assert_eq!(part.delta(StatAxis::Scope), 0);
    }

    #[test]
    fn test_ammo_delta_ignored() {
        let part = PartModifier::new(PartKind::Magazine, "Drum").with_delta(StatAxis::Ammo, 50);

        assert!(part.deltas.is_empty());
    }

    #[test]
    fn test_apply_adds_and_clamps() {
        let mut stats = StatVector::base();

        let barrel = PartModifier::new(PartKind::Barrel, "Long Barrel")
            .with_delta(StatAxis::Power, 20);
        barrel.apply(&mut stats);
        assert_eq!(stats.power, 21);

        // Stacking past the ceiling clamps instead of overflowing
        let hot_barrel = PartModifier::new(PartKind::Barrel, "Overcharged Barrel")
            .with_delta(StatAxis::Power, 100);
        hot_barrel.apply(&mut stats);
        assert_eq!(stats.power, RATING_MAX);

        let damped_stock = PartModifier::new(PartKind::Stock, "Padded Stock")
            .with_delta(StatAxis::Recoil, -100);
        damped_stock.apply(&mut stats);
        damped_stock.apply(&mut stats);
        assert_eq!(stats.recoil, RATING_MIN);
    }

    #[test]
    fn test_magazine_replaces_ammo() {
        let mut stats = StatVector::base();
        stats.set_ammo(12);

        let magazine =
            PartModifier::new(PartKind::Magazine, "Extended Magazine").with_magazine_capacity(30);
        magazine.apply(&mut stats);

        assert_eq!(stats.ammo, 30);

        // A magazine without a capacity leaves ammo untouched
        let blank = PartModifier::new(PartKind::Magazine, "Blank");
        blank.apply(&mut stats);
        assert_eq!(stats.ammo, 30);
    }

    #[test]
    fn test_capacity_on_non_magazine_is_inert() {
        let mut stats = StatVector::base();

        let scope = PartModifier::new(PartKind::Scope, "Odd Scope").with_magazine_capacity(99);
        scope.apply(&mut stats);

        assert_eq!(stats.ammo, 0);
    }
}
