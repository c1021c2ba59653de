//! Weapon assembly

use crate::weld::WeldState;
use gunsmith_parts::{PartKind, PartModifier};
use gunsmith_stats::{StatVector, WeaponSettings, WeaponTuning, DEFAULT_DAMAGE};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Events emitted by an assembly, drained by the consumer
#[derive(Debug, Clone)]
pub enum AssemblyEvent {
    /// A part was installed into its slot
    PartInstalled {
        kind: PartKind,
        name: String,
        price: u32,
    },
    /// A part left its slot (removed or displaced by a replacement)
    PartRemoved { kind: PartKind, name: String },
    /// The stat vector was recomputed
    StatsResolved { stats: StatVector },
    /// The barrel weld reached completion
    WeldCompleted,
    /// Welding progress was reset
    WeldReset,
}

/// One customizable weapon: a nullable slot per part kind plus the resolved
/// stat vector.
///
/// The vector is never patched incrementally. Every slot change recomputes
/// it from the base vector, applying occupied slots in `PartKind::ALL`
/// order, so removal and replacement stay trivial and repeated
/// recomputation is bit-identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponAssembly {
    /// Installed parts keyed by slot
    slots: HashMap<PartKind, PartModifier>,
    /// Base damage fed into the resolved vector
    base_damage: f32,
    /// Resolved stat vector
    stats: StatVector,
    /// Barrel weld progress
    weld: WeldState,
    /// Events awaiting the consumer
    #[serde(skip)]
    pending: Vec<AssemblyEvent>,
}

impl WeaponAssembly {
    /// Create an empty assembly with the default base damage
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            base_damage: DEFAULT_DAMAGE,
            stats: StatVector::base(),
            weld: WeldState::new(),
            pending: Vec::new(),
        }
    }

    /// Set the base damage and recompute
    pub fn with_base_damage(mut self, damage: f32) -> Self {
        self.base_damage = damage.max(f32::MIN_POSITIVE);
        self.recompute();
        self
    }

    /// Base damage fed into the resolved vector
    pub fn base_damage(&self) -> f32 {
        self.base_damage
    }

    /// Installed part in a slot
    pub fn part(&self, kind: PartKind) -> Option<&PartModifier> {
        self.slots.get(&kind)
    }

    /// Check if a slot holds a part
    pub fn is_slot_occupied(&self, kind: PartKind) -> bool {
        self.slots.contains_key(&kind)
    }

    /// Installed parts in canonical slot order
    pub fn installed_parts(&self) -> impl Iterator<Item = &PartModifier> {
        PartKind::ALL.iter().filter_map(|kind| self.slots.get(kind))
    }

    /// Number of occupied slots
    pub fn part_count(&self) -> usize {
        self.slots.len()
    }

    /// Install a part into its slot, returning the displaced part if the
    /// slot was occupied. Installing a barrel resets any weld progress.
    pub fn install(&mut self, part: PartModifier) -> Option<PartModifier> {
        let kind = part.kind;
        let name = part.name.clone();
        let price = part.price;

        let displaced = self.slots.insert(kind, part);

        if let Some(previous) = &displaced {
            self.pending.push(AssemblyEvent::PartRemoved {
                kind,
                name: previous.name.clone(),
            });
        }
        self.pending
            .push(AssemblyEvent::PartInstalled { kind, name, price });
        if kind.requires_welding() {
            self.reset_weld();
        }

        self.recompute();
        displaced
    }

    /// Remove the part from a slot. Removing the barrel resets welding.
    pub fn remove(&mut self, kind: PartKind) -> Option<PartModifier> {
        let removed = self.slots.remove(&kind)?;

        self.pending.push(AssemblyEvent::PartRemoved {
            kind,
            name: removed.name.clone(),
        });
        if kind.requires_welding() {
            self.reset_weld();
        }

        self.recompute();
        Some(removed)
    }

    /// Resolved stat vector
    pub fn stats(&self) -> &StatVector {
        &self.stats
    }

    /// Resolve gameplay settings from the current vector
    pub fn settings(&self, tuning: &WeaponTuning) -> WeaponSettings {
        WeaponSettings::derive(&self.stats, tuning)
    }

    /// Advance the barrel weld. Without a barrel installed this is a no-op.
    pub fn add_weld_progress(&mut self, delta: f32) {
        if !self.is_slot_occupied(PartKind::Barrel) {
            warn!("weld progress on an assembly with no barrel installed");
            return;
        }

        if self.weld.add_progress(delta) {
            debug!("barrel weld complete");
            self.pending.push(AssemblyEvent::WeldCompleted);
        }
    }

    /// Current weld progress in [0, 100]
    pub fn weld_progress(&self) -> f32 {
        self.weld.progress()
    }

    /// Check if the barrel weld has latched complete
    pub fn is_welded(&self) -> bool {
        self.weld.is_complete()
    }

    /// Check if the weapon can fire: either no barrel is fitted, or the
    /// fitted barrel is fully welded.
    pub fn is_operational(&self) -> bool {
        !self.is_slot_occupied(PartKind::Barrel) || self.is_welded()
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<AssemblyEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Restore internal weld progress from a snapshot
    pub fn restore_weld(&mut self, progress: f32) {
        self.weld = WeldState::from_progress(progress);
    }

    fn reset_weld(&mut self) {
        if self.weld.progress() > 0.0 {
            self.pending.push(AssemblyEvent::WeldReset);
        }
        self.weld.reset();
    }

    fn recompute(&mut self) {
        let mut stats = StatVector::base().with_damage(self.base_damage);

        for kind in PartKind::ALL {
            if let Some(part) = self.slots.get(&kind) {
                part.apply(&mut stats);
                stats.add_part_cost(part.price);
            }
        }

        self.stats = stats;
        self.pending.push(AssemblyEvent::StatsResolved {
            stats: self.stats.clone(),
        });
    }
}

impl Default for WeaponAssembly {
    fn default() -> Self {
        Self::new()
    }
}
