//! Power-up timer registry
//!
//! Tracks the currently active timed effects. At most one entry per kind:
//! re-collecting a power-up mid-effect resets its timer to the full duration
//! rather than extending it.
//!
//! SlowMotion only gets timer bookkeeping here; it has no effect on tick
//! rate or entity speed (matching the shipped behavior).

use serde::{Deserialize, Serialize};

use super::state::PowerUpKind;

/// A collected power-up whose timed effect is currently in force
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub kind: PowerUpKind,
    /// Remaining time in milliseconds
    pub time_left_ms: f32,
    /// Full duration the effect started with
    pub duration_ms: f32,
}

/// Registry of active effects, in activation order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectRegistry {
    entries: Vec<ActiveEffect>,
}

impl EffectRegistry {
    /// Install a fresh effect of the given kind, replacing any existing
    /// entry of the same kind.
    pub fn activate(&mut self, kind: PowerUpKind) {
        self.entries.retain(|e| e.kind != kind);
        let duration_ms = kind.duration_ms();
        self.entries.push(ActiveEffect {
            kind,
            time_left_ms: duration_ms,
            duration_ms,
        });
    }

    /// Decrement every entry's remaining time; entries at or below zero
    /// are dropped.
    pub fn tick(&mut self, dt_ms: f32) {
        for effect in &mut self.entries {
            effect.time_left_ms -= dt_ms;
        }
        self.entries.retain(|e| e.time_left_ms > 0.0);
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.entries.iter().any(|e| e.kind == kind)
    }

    pub fn active(&self) -> &[ActiveEffect] {
        &self.entries
    }

    pub fn time_left_ms(&self, kind: PowerUpKind) -> Option<f32> {
        self.entries
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.time_left_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_activate_and_expire() {
        let mut effects = EffectRegistry::default();
        effects.activate(PowerUpKind::Shield);
        assert!(effects.is_active(PowerUpKind::Shield));
        assert!(!effects.is_active(PowerUpKind::DoublePoints));

        effects.tick(SHIELD_DURATION_MS - 1.0);
        assert!(effects.is_active(PowerUpKind::Shield));

        effects.tick(1.0);
        assert!(!effects.is_active(PowerUpKind::Shield));
        assert!(effects.active().is_empty());
    }

    #[test]
    fn test_recollect_resets_timer_instead_of_stacking() {
        let mut effects = EffectRegistry::default();
        effects.activate(PowerUpKind::Shield);
        effects.tick(3000.0); // 2000 ms remaining

        effects.activate(PowerUpKind::Shield);
        assert_eq!(
            effects.time_left_ms(PowerUpKind::Shield),
            Some(SHIELD_DURATION_MS)
        );
        // Still a single entry
        assert_eq!(effects.active().len(), 1);
    }

    #[test]
    fn test_one_entry_per_kind_independent_timers() {
        let mut effects = EffectRegistry::default();
        effects.activate(PowerUpKind::SlowMotion);
        effects.activate(PowerUpKind::DoublePoints);
        assert_eq!(effects.active().len(), 2);

        // SlowMotion (3000 ms) expires first, DoublePoints (10000 ms) survives
        effects.tick(SLOWMOTION_DURATION_MS);
        assert!(!effects.is_active(PowerUpKind::SlowMotion));
        assert!(effects.is_active(PowerUpKind::DoublePoints));
        assert_eq!(
            effects.time_left_ms(PowerUpKind::DoublePoints),
            Some(DOUBLEPOINTS_DURATION_MS - SLOWMOTION_DURATION_MS)
        );
    }
}
