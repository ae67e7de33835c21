//! Reveal transition bookkeeping.
//!
//! A reveal transition scales a disc layer between a collapsed and an
//! expanded transform. This module holds the pieces the control uses to
//! decide and describe a transition: the committed-state gate that suppresses
//! redundant triggers, and the two directions with their keys, endpoints, and
//! easing curves.

use paper_switch_scene::{Easing, Transform3D};

/// Scale at which the disc counts as hidden.
///
/// A true zero scale degenerates the transform, so the collapsed endpoint
/// uses a near-zero value.
pub const COLLAPSED_SCALE: f32 = 0.0001;

/// The collapsed (hidden) disc transform.
pub fn collapsed_transform() -> Transform3D {
    Transform3D::from_scale(COLLAPSED_SCALE)
}

/// The expanded (fully visible) disc transform.
pub fn expanded_transform() -> Transform3D {
    Transform3D::IDENTITY
}

/// Direction of a reveal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealDirection {
    /// Disc grows from the control's center to cover the container.
    Expand,
    /// Disc shrinks back into the control's center.
    Collapse,
}

impl RevealDirection {
    /// The direction that represents the given on-state.
    pub fn for_state(on: bool) -> Self {
        if on { Self::Expand } else { Self::Collapse }
    }

    /// The opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Expand => Self::Collapse,
            Self::Collapse => Self::Expand,
        }
    }

    /// The animation key identifying this direction on the disc layer.
    ///
    /// Starting one direction cancels the opposite key, so the two can never
    /// run at once.
    pub fn key(self) -> &'static str {
        match self {
            Self::Expand => "scale-up",
            Self::Collapse => "scale-down",
        }
    }

    /// The fixed from/to transforms for this direction.
    ///
    /// Transitions always run between the canonical endpoints, regardless of
    /// any in-flight value they interrupt.
    pub fn endpoints(self) -> (Transform3D, Transform3D) {
        match self {
            Self::Expand => (collapsed_transform(), expanded_transform()),
            Self::Collapse => (expanded_transform(), collapsed_transform()),
        }
    }

    /// The easing curve for this direction: accelerate out of the control,
    /// decelerate back into it.
    pub fn easing(self) -> Easing {
        match self {
            Self::Expand => Easing::EaseIn,
            Self::Collapse => Easing::EaseOut,
        }
    }
}

/// The resting transform for a settled on/off state.
pub fn resting_transform(on: bool) -> Transform3D {
    if on {
        expanded_transform()
    } else {
        collapsed_transform()
    }
}

/// Committed-state gate for reveal transitions.
///
/// Tracks the last state a transition (or snap) was committed for, so that
/// repeated sets of the same value and spurious re-entry into the animator
/// are no-ops. The committed value is updated before any animation decision
/// is made.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealGate {
    committed: bool,
}

impl RevealGate {
    /// Create a gate committed to the given initial state.
    pub fn new(initial: bool) -> Self {
        Self { committed: initial }
    }

    /// The last committed state.
    pub fn committed(&self) -> bool {
        self.committed
    }

    /// Attempt to commit a new state.
    ///
    /// Returns `true` and commits when `state` differs from the committed
    /// value; returns `false` when the set is redundant.
    pub fn try_commit(&mut self, state: bool) -> bool {
        if state == self.committed {
            return false;
        }
        self.committed = state;
        true
    }

    /// Commit a state unconditionally (used by non-animated snaps).
    pub fn force(&mut self, state: bool) {
        self.committed = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_suppresses_redundant_commits() {
        let mut gate = RevealGate::new(false);
        assert!(!gate.try_commit(false));
        assert!(gate.try_commit(true));
        assert!(!gate.try_commit(true));
        assert!(gate.try_commit(false));
    }

    #[test]
    fn test_gate_force() {
        let mut gate = RevealGate::new(false);
        gate.force(true);
        assert!(gate.committed());
        assert!(!gate.try_commit(true));
    }

    #[test]
    fn test_direction_for_state() {
        assert_eq!(RevealDirection::for_state(true), RevealDirection::Expand);
        assert_eq!(RevealDirection::for_state(false), RevealDirection::Collapse);
        assert_eq!(
            RevealDirection::Expand.opposite(),
            RevealDirection::Collapse
        );
    }

    #[test]
    fn test_direction_keys_differ() {
        assert_ne!(
            RevealDirection::Expand.key(),
            RevealDirection::Collapse.key()
        );
    }

    #[test]
    fn test_endpoints_are_canonical() {
        let (from, to) = RevealDirection::Expand.endpoints();
        assert_eq!(from, collapsed_transform());
        assert_eq!(to, expanded_transform());

        let (from, to) = RevealDirection::Collapse.endpoints();
        assert_eq!(from, expanded_transform());
        assert_eq!(to, collapsed_transform());
    }

    #[test]
    fn test_resting_transform_matches_state() {
        assert!(resting_transform(true).is_identity());
        assert!(resting_transform(false).scale().x < 0.001);
    }
}
