//! Barrel welding progress

use serde::{Deserialize, Serialize};

/// Progress value at which a weld is complete
pub const WELD_COMPLETE: f32 = 100.0;

/// Progress-gated welding state for the barrel slot.
///
/// Progress only moves forward; reaching completion latches until an
/// explicit reset, which happens when the barrel leaves the slot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeldState {
    progress: f32,
}

impl WeldState {
    /// Fresh, unwelded state
    pub fn new() -> Self {
        Self::default()
    }

    /// State restored from a saved progress value
    pub fn from_progress(progress: f32) -> Self {
        Self {
            progress: progress.clamp(0.0, WELD_COMPLETE),
        }
    }

    /// Current progress in [0, 100]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Advance the weld. Negative deltas are ignored; progress caps at
    /// completion. Returns true when this call finished the weld.
    pub fn add_progress(&mut self, delta: f32) -> bool {
        if delta <= 0.0 || self.is_complete() {
            return false;
        }

        self.progress = (self.progress + delta).min(WELD_COMPLETE);
        self.is_complete()
    }

    /// Check if the weld has latched complete
    pub fn is_complete(&self) -> bool {
        self.progress >= WELD_COMPLETE
    }

    /// Drop back to zero progress
    pub fn reset(&mut self) {
        self.progress = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_accumulates() {
        let mut weld = WeldState::new();

        assert!(!weld.add_progress(30.0));
        assert!(!weld.add_progress(30.0));
        assert_eq!(weld.progress(), 60.0);
        assert!(!weld.is_complete());
    }

    #[test]
    fn test_progress_never_decreases() {
        let mut weld = WeldState::new();
        weld.add_progress(40.0);

        weld.add_progress(-100.0);
        assert_eq!(weld.progress(), 40.0);

        weld.add_progress(0.0);
        assert_eq!(weld.progress(), 40.0);
    }

    #[test]
    fn test_completion_latches() {
        let mut weld = WeldState::new();

        assert!(weld.add_progress(150.0));
        assert_eq!(weld.progress(), WELD_COMPLETE);
        assert!(weld.is_complete());

        // Further progress neither overflows nor re-reports completion
        assert!(!weld.add_progress(50.0));
        assert_eq!(weld.progress(), WELD_COMPLETE);
        assert!(weld.is_complete());
    }

    #[test]
    fn test_reset() {
        let mut weld = WeldState::new();
        weld.add_progress(150.0);

        weld.reset();
        assert_eq!(weld.progress(), 0.0);
        assert!(!weld.is_complete());
    }

    #[test]
    fn test_exact_completion_boundary() {
        let mut weld = WeldState::new();
        weld.add_progress(99.9);
        assert!(!weld.is_complete());

        assert!(weld.add_progress(0.1));
        assert!(weld.is_complete());
    }

    #[test]
    fn test_restore_clamps() {
        assert_eq!(WeldState::from_progress(250.0).progress(), WELD_COMPLETE);
        assert_eq!(WeldState::from_progress(-10.0).progress(), 0.0);
    }
}
