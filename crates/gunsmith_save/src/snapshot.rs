//! Serializable projections of live weapon state

use gunsmith_assembly::WeaponAssembly;
use gunsmith_parts::{PartKind, PartModifier};
use gunsmith_stats::{StatAxis, StatVector};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything needed to rebuild one installed part without re-rolling its
/// generation: identity, cost, raw deltas, capacity, and appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartSnapshot {
    /// Slot the part fits
    pub kind: PartKind,
    /// Display name
    pub name: String,
    /// Purchase price
    pub cost: u32,
    /// Raw rating deltas
    pub deltas: HashMap<StatAxis, i32>,
    /// Absolute magazine capacity (Magazine parts)
    pub magazine_capacity: Option<u32>,
    /// Mesh asset reference
    pub mesh: String,
    /// Icon asset reference
    pub icon: String,
}

impl PartSnapshot {
    /// Project a live part
    pub fn capture(part: &PartModifier) -> Self {
        Self {
            kind: part.kind,
            name: part.name.clone(),
            cost: part.price,
            deltas: part.deltas.clone(),
            magazine_capacity: part.magazine_capacity,
            mesh: part.mesh.clone(),
            icon: part.icon.clone(),
        }
    }

    /// Rebuild the live part
    pub fn restore(&self) -> PartModifier {
        let mut part = PartModifier::new(self.kind, self.name.clone())
            .with_price(self.cost)
            .with_model(self.mesh.clone(), self.icon.clone());

        for (&axis, &delta) in &self.deltas {
            part = part.with_delta(axis, delta);
        }
        if let Some(capacity) = self.magazine_capacity {
            part = part.with_magazine_capacity(capacity);
        }

        part
    }
}

/// Flat mirror of one weapon assembly.
///
/// Load rebuilds the assembly and recomputes its vector from the captured
/// parts in the canonical slot order, so the restored vector matches the
/// captured one exactly; the stored vector is carried for display without
/// recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponSnapshot {
    /// Installed parts in canonical slot order
    pub parts: Vec<PartSnapshot>,
    /// Barrel weld progress at capture time
    pub weld_progress: f32,
    /// Base damage of the weapon
    pub base_damage: f32,
    /// Resolved stat vector at capture time
    pub stats: StatVector,
}

impl WeaponSnapshot {
    /// Project a live assembly
    pub fn capture(weapon: &WeaponAssembly) -> Self {
        Self {
            parts: weapon.installed_parts().map(PartSnapshot::capture).collect(),
            weld_progress: weapon.weld_progress(),
            base_damage: weapon.base_damage(),
            stats: weapon.stats().clone(),
        }
    }

    /// Rebuild the live assembly and recompute its vector
    pub fn restore(&self) -> WeaponAssembly {
        let mut weapon = WeaponAssembly::new().with_base_damage(self.base_damage);

        for part in &self.parts {
            weapon.install(part.restore());
        }
        // Installing a barrel resets welding, so progress comes back last
        weapon.restore_weld(self.weld_progress);

        weapon.drain_events();
        weapon
    }
}

/// Serializable mirror of everything a player owns: wallet balance, the
/// locker of assembled weapons, and loose stash parts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Wallet balance
    pub balance: u64,
    /// Assembled weapons in the locker
    pub locker: Vec<WeaponSnapshot>,
    /// Loose parts in the stash
    pub stash: Vec<PartSnapshot>,
}

impl ProfileSnapshot {
    /// Create an empty profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wallet balance
    pub fn with_balance(mut self, balance: u64) -> Self {
        self.balance = balance;
        self
    }

    /// Add a weapon to the locker
    pub fn with_weapon(mut self, weapon: WeaponSnapshot) -> Self {
        self.locker.push(weapon);
        self
    }

    /// Add a loose part to the stash
    pub fn with_stash_part(mut self, part: PartSnapshot) -> Self {
        self.stash.push(part);
        self
    }
}
