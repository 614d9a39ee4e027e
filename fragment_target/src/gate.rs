// Copyright 2026 the Fragment Target Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hash-change gate: swallow exactly one native hash-change cycle.
//!
//! When an in-page fragment link is clicked and its default navigation is
//! allowed to proceed, the host platform independently raises a native
//! hash-change event for the same logical navigation. Handling both would
//! retarget twice. The gate is armed when the click path retargets; the next
//! observed hash-change cycle is then swallowed and the gate disarms itself.
//!
//! The gate is an explicit two-state machine rather than a pair of listener
//! attach/detach operations, so the host can keep a single hash-change
//! listener installed and simply ask the gate whether a given cycle should be
//! acted on.
//!
//! ## Minimal example
//!
//! ```
//! use fragment_target::gate::HashChangeGate;
//!
//! let mut gate = HashChangeGate::new();
//! gate.ignore_next();
//! assert!(!gate.observe()); // the armed cycle is swallowed
//! assert!(gate.observe()); // subsequent cycles are handled again
//! ```

/// Gate state: whether the next hash-change cycle will be acted on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    /// Hash-change cycles are handled normally.
    #[default]
    Handling,
    /// Exactly one upcoming hash-change cycle will be swallowed.
    Ignoring,
}

/// Two-state gate deciding whether a hash-change cycle is handled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HashChangeGate {
    state: GateState,
}

impl HashChangeGate {
    /// Create a gate in the [`Handling`](GateState::Handling) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the gate: the next observed hash-change cycle is swallowed.
    pub fn ignore_next(&mut self) {
        self.state = GateState::Ignoring;
    }

    /// Disarm a pending ignore, so the next cycle is handled after all.
    ///
    /// Used when a click's default navigation is cancelled: no native
    /// hash-change will follow, so nothing needs to be swallowed. Idempotent;
    /// calling it while already handling changes nothing.
    pub fn handle_next(&mut self) {
        self.state = GateState::Handling;
    }

    /// Record one hash-change cycle and report whether to handle it.
    ///
    /// In [`Handling`](GateState::Handling) this returns `true` and the state
    /// is unchanged. In [`Ignoring`](GateState::Ignoring) it returns `false`
    /// and transitions back to handling, so exactly one cycle is swallowed
    /// per arming.
    pub fn observe(&mut self) -> bool {
        match self.state {
            GateState::Handling => true,
            GateState::Ignoring => {
                self.state = GateState::Handling;
                false
            }
        }
    }

    /// The current gate state.
    pub fn state(&self) -> GateState {
        self.state
    }
}
