//! Preset switch state machine
//!
//! States are the six presets. A switch names a target preset:
//! - from `AUDIT_EVIDENCE` every switch is rejected and the state stays put
//! - otherwise the switch succeeds; moving to a more authoritative preset
//!   (lower hierarchy index) raises the read-only flag, anything else clears it
//!
//! The comparison is always made against the current preset, never
//! accumulated across switches. Capabilities are not touched.

use compass_ontology::Preset;
use serde::Serialize;

/// Switch attempted while the session is in a terminal preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("preset {current} is locked; cannot switch to {requested}")]
pub struct LockedPresetError {
    /// Locked preset (unchanged)
    pub current: Preset,
    /// Rejected target
    pub requested: Preset,
}

/// Outcome of an accepted switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetSwitch {
    /// Preset before the switch
    pub previous: Preset,
    /// Preset after the switch
    pub next: Preset,
    /// Whether mutation actions are suppressed from now on
    pub read_only: bool,
}

/// Evaluate a switch from `current` to `requested`
///
/// # Errors
/// `LockedPresetError` if `current` is terminal
pub fn switch_preset(
    current: Preset,
    requested: Preset,
) -> Result<PresetSwitch, LockedPresetError> {
    if current.is_terminal() {
        return Err(LockedPresetError { current, requested });
    }
    Ok(PresetSwitch {
        previous: current,
        next: requested,
        read_only: requested.hierarchy_index() < current.hierarchy_index(),
    })
}

/// Presets a switch from `current` may name
#[must_use]
pub fn allowed_targets(current: Preset) -> Vec<Preset> {
    if current.is_terminal() {
        Vec::new()
    } else {
        Preset::ALL.to_vec()
    }
}

/// Per-session preset state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetSession {
    current: Preset,
    read_only: bool,
}

impl PresetSession {
    /// Start in `initial`, writable
    #[inline]
    #[must_use]
    pub fn new(initial: Preset) -> Self {
        Self {
            current: initial,
            read_only: false,
        }
    }

    /// Active preset
    #[inline]
    #[must_use]
    pub fn current(&self) -> Preset {
        self.current
    }

    /// Whether mutation actions are suppressed
    #[inline]
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// True once the session can no longer switch
    #[inline]
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.current.is_terminal()
    }

    /// Switch to `requested`
    ///
    /// # Errors
    /// `LockedPresetError` if the session is in a terminal preset; the state
    /// is left unchanged
    pub fn switch_to(&mut self, requested: Preset) -> Result<PresetSwitch, LockedPresetError> {
        match switch_preset(self.current, requested) {
            Ok(switch) => {
                self.current = switch.next;
                self.read_only = switch.read_only;
                tracing::info!(
                    from = %switch.previous,
                    to = %switch.next,
                    read_only = switch.read_only,
                    "preset switched"
                );
                Ok(switch)
            }
            Err(err) => {
                tracing::warn!(
                    current = %err.current,
                    requested = %err.requested,
                    "preset switch rejected"
                );
                Err(err)
            }
        }
    }
}
