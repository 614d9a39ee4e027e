// Copyright 2026 the Fragment Target Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target state helper: compute target/unhash transitions as the addressed
//! element changes.
//!
//! [`TargetState`] remembers the most recently targeted element and, when
//! retargeted, reports the transition events the host should dispatch: a
//! `Target` on the new subject and an `Unhash` on the one it supersedes.
//!
//! ## Ordering semantics
//!
//! - `Target(new)` is emitted before `Unhash(old)`.
//! - The remembered subject is replaced on every retarget, including
//!   retargets to an empty subject (a fragment matching no element).
//!
//! ## Minimal example
//!
//! ```
//! use fragment_target::target::{TargetEvent, TargetState};
//!
//! let mut t: TargetState<u32> = TargetState::new();
//! assert_eq!(t.retarget(Some(1)).as_slice(), &[TargetEvent::Target(1)]);
//! assert_eq!(
//!     t.retarget(Some(2)).as_slice(),
//!     &[TargetEvent::Target(2), TargetEvent::Unhash(1)],
//! );
//! assert_eq!(t.current(), Some(&2));
//! ```

use smallvec::SmallVec;

/// A fragment-targeting transition event.
///
/// Dispatch `Target(..)` on the element that became the fragment destination
/// and `Unhash(..)` on the element it supersedes. The host pairs each event
/// with the originating host event (click, native hash change, or a synthetic
/// ready event) when delivering it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TargetEvent<K> {
    /// The element became the current fragment destination.
    Target(K),
    /// The element is no longer the fragment destination.
    Unhash(K),
}

/// Transition events produced by one retarget.
///
/// A retarget emits at most one `Target` and one `Unhash`, so the sequence is
/// kept inline.
pub type TargetEvents<K> = SmallVec<[TargetEvent<K>; 2]>;

/// Remembers the last targeted element and computes retarget transitions.
///
/// This is the single piece of long-lived state in fragment targeting: one
/// instance per document context, mutated only by [`retarget`](Self::retarget).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetState<K> {
    current: Option<K>,
}

impl<K: Clone> TargetState<K> {
    /// Create a state with no remembered subject.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Make `subject` the targeted element and return the transition events.
    ///
    /// An empty subject (`None`) models a fragment that matches no element:
    /// nothing is targeted, but the remembered subject is still replaced and
    /// the previous element still receives its `Unhash`. Retargeting the
    /// element that is already current emits both events on that element.
    pub fn retarget(&mut self, subject: Option<K>) -> TargetEvents<K> {
        let mut out = TargetEvents::new();
        if let Some(subject) = &subject {
            out.push(TargetEvent::Target(subject.clone()));
        }
        if let Some(previous) = self.current.take() {
            out.push(TargetEvent::Unhash(previous));
        }
        self.current = subject;
        out
    }

    /// The currently remembered subject, if a non-empty one was targeted last.
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_retarget_emits_target_only() {
        let mut t: TargetState<u32> = TargetState::new();
        let ev = t.retarget(Some(7));
        assert_eq!(ev.as_slice(), &[TargetEvent::Target(7)]);
        assert_eq!(t.current(), Some(&7));
    }

    #[test]
    fn retarget_unhashes_previous_subject() {
        let mut t: TargetState<u32> = TargetState::new();
        let _ = t.retarget(Some(1));
        let ev = t.retarget(Some(2));
        assert_eq!(
            ev.as_slice(),
            &[TargetEvent::Target(2), TargetEvent::Unhash(1)]
        );
        assert_eq!(t.current(), Some(&2));
    }

    // A fragment matching no element: no target fires, the old subject is
    // unhashed, and the remembered subject becomes empty.
    #[test]
    fn empty_subject_still_replaces_state() {
        let mut t: TargetState<u32> = TargetState::new();
        let _ = t.retarget(Some(1));
        let ev = t.retarget(None);
        assert_eq!(ev.as_slice(), &[TargetEvent::Unhash(1)]);
        assert_eq!(t.current(), None);
    }

    #[test]
    fn empty_to_empty_is_silent() {
        let mut t: TargetState<u32> = TargetState::new();
        assert!(t.retarget(None).is_empty());
        assert!(t.retarget(None).is_empty());
        assert_eq!(t.current(), None);
    }

    // Same element retargeted: it is both the new and the superseded subject,
    // so it receives target and unhash in that order.
    #[test]
    fn same_subject_receives_both_events() {
        let mut t: TargetState<u32> = TargetState::new();
        let _ = t.retarget(Some(5));
        let ev = t.retarget(Some(5));
        assert_eq!(
            ev.as_slice(),
            &[TargetEvent::Target(5), TargetEvent::Unhash(5)]
        );
        assert_eq!(t.current(), Some(&5));
    }
}
