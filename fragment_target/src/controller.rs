// Copyright 2026 the Fragment Target Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fragment-targeting controller: one stateful object per document context.
//!
//! [`TargetController`] reconciles the three host code paths that can make an
//! element the fragment destination — initial document readiness, a native
//! hash-change, and an in-page anchor click — into one consistent stream of
//! [`TargetEvent`]s. It composes the [`TargetState`] emitter with the
//! [`HashChangeGate`] so one logical navigation never retargets twice.
//!
//! The controller never touches the platform. The host drives it from its own
//! listeners and dispatches the returned events itself, pairing each with the
//! originating host event. Post-dispatch decisions that depend on whether a
//! consumer prevented the event's default are reported back explicitly:
//! [`TargetController::after_click`] for clicks, and
//! [`ReadyOutcome::rewrite`] for the ready path.
//!
//! ## Wiring
//!
//! 1. On document readiness, call [`TargetController::on_ready`]; dispatch
//!    the events with a synthetic ready event; if a consumer prevented its
//!    default, apply [`ReadyOutcome::rewrite`] via the host's
//!    history-replace facility.
//! 2. On every click of an anchor whose `href` contains `#` (delegated so
//!    dynamically added links match), call [`TargetController::on_click`];
//!    dispatch on [`ClickOutcome::Retarget`]; afterwards report the click's
//!    prevented-default flag via [`TargetController::after_click`].
//! 3. On every native hash-change, call [`TargetController::on_hash_change`]
//!    and dispatch on [`HashChangeOutcome::Retarget`].
//!
//! ## Minimal example
//!
//! ```
//! use fragment_target::controller::{ClickOutcome, FragmentLookup, TargetController};
//! use fragment_target::target::TargetEvent;
//!
//! struct OnePage;
//! impl FragmentLookup<u32> for OnePage {
//!     fn element_for(&self, fragment: &str) -> Option<u32> {
//!         (fragment == "section1").then_some(42)
//!     }
//! }
//!
//! let mut ctl: TargetController<u32> = TargetController::new();
//! let outcome = ctl.on_click("#section1", "https://example.com/page", &OnePage);
//! let ClickOutcome::Retarget(events) = outcome else { panic!("in-page link") };
//! assert_eq!(events.as_slice(), &[TargetEvent::Target(42)]);
//!
//! // The default navigation proceeds, so the native hash-change that follows
//! // is swallowed instead of retargeting a second time.
//! ctl.after_click(false);
//! assert!(
//!     ctl.on_hash_change("https://example.com/page#section1", &OnePage).is_swallowed()
//! );
//! ```

use alloc::string::String;

use crate::gate::HashChangeGate;
use crate::target::{TargetEvents, TargetState};
use crate::uri;

/// Resolve a fragment identifier to a host element key.
///
/// Implemented by the host over its document: typically a lookup of the
/// element whose identifier attribute equals `fragment`. Return `None` when
/// no element matches; the controller treats that as a silent no-op subject.
pub trait FragmentLookup<K> {
    /// The element addressed by `fragment`, if any.
    fn element_for(&self, fragment: &str) -> Option<K>;
}

/// Decision for a click on an anchor whose `href` contains a fragment marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome<K> {
    /// The link does not address an element of this document (no fragment,
    /// an empty fragment, or one matching nothing). The click proceeds
    /// natively; nothing is dispatched and no suppression is armed.
    NotATarget,
    /// The link points at a different document. Navigation proceeds; any
    /// target effect happens after the new document loads, outside this
    /// controller's scope. No suppression is armed.
    CrossDocument,
    /// An in-page jump: dispatch these events with the click as originating
    /// event, then report the click's prevented-default flag via
    /// [`TargetController::after_click`].
    Retarget(TargetEvents<K>),
}

/// Decision for one native hash-change cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HashChangeOutcome<K> {
    /// This cycle belongs to a click that already retargeted; it is consumed
    /// without effect.
    Swallowed,
    /// Dispatch these events with the hash-change as originating event. The
    /// sequence may hold only an `Unhash` when the new fragment matches no
    /// element.
    Retarget(TargetEvents<K>),
}

impl<K> HashChangeOutcome<K> {
    /// Whether this cycle was consumed by the gate.
    pub fn is_swallowed(&self) -> bool {
        matches!(self, Self::Swallowed)
    }
}

/// Decision for initial document readiness.
///
/// The events are dispatched with a synthetic ready event. When a consumer of
/// that event prevents its default, the host asks [`rewrite`](Self::rewrite)
/// for the URI to install via its history-replace facility (no new history
/// entry), dropping the fragment from the visible location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadyOutcome<K> {
    /// Events to dispatch; empty when the location has no matching element,
    /// though the remembered subject is updated regardless.
    pub events: TargetEvents<K>,
    /// The fragment-stripped location, present only when the host supports
    /// fragment-only rewriting and the location carried a fragment.
    pub rewrite_on_prevent: Option<String>,
}

impl<K> ReadyOutcome<K> {
    /// The URI to install after dispatch, if the default was prevented and
    /// rewriting is available. `None` means leave the location alone.
    pub fn rewrite(&self, default_prevented: bool) -> Option<&str> {
        if default_prevented {
            self.rewrite_on_prevent.as_deref()
        } else {
            None
        }
    }
}

/// Reconciles ready, click, and hash-change paths into target/unhash events.
///
/// One instance per document context; all methods are synchronous and must be
/// driven from the host's single event-dispatch thread.
#[derive(Clone, Debug, Default)]
pub struct TargetController<K> {
    targets: TargetState<K>,
    gate: HashChangeGate,
}

impl<K: Clone> TargetController<K> {
    /// Create a controller with no remembered subject and an open gate.
    pub fn new() -> Self {
        Self {
            targets: TargetState::new(),
            gate: HashChangeGate::new(),
        }
    }

    /// Run the ready-state check for a freshly parsed document.
    ///
    /// Resolves `location`'s fragment (possibly to nothing) and retargets
    /// unconditionally: a fragment matching no element is a no-op dispatch
    /// that still updates the remembered subject. `can_rewrite` reports
    /// whether the host's history mechanism supports fragment-only URI
    /// rewriting; without it, [`ReadyOutcome::rewrite_on_prevent`] stays
    /// `None` and the host's native behavior applies.
    pub fn on_ready<L>(&mut self, location: &str, lookup: &L, can_rewrite: bool) -> ReadyOutcome<K>
    where
        L: FragmentLookup<K>,
    {
        let fragment = uri::fragment(location).filter(|f| !f.is_empty());
        let subject = fragment.and_then(|f| lookup.element_for(f));
        let events = self.targets.retarget(subject);
        let rewrite_on_prevent = if can_rewrite && fragment.is_some() {
            Some(String::from(uri::strip_fragment(location)))
        } else {
            None
        };
        ReadyOutcome {
            events,
            rewrite_on_prevent,
        }
    }

    /// Decide a click on an anchor with `href`, in the document at `location`.
    ///
    /// `href` is the anchor's URI as the host sees it; a fragment-only href
    /// (`#...`) always addresses the current document, anything else is
    /// compared against `location` with fragments ignored.
    ///
    /// For an in-page link whose fragment resolves to an element, this arms
    /// the hash-change gate (the default navigation will raise a native
    /// hash-change for the same logical navigation) and returns the retarget
    /// events. The host must follow up with [`after_click`](Self::after_click)
    /// once it knows whether the click's default was prevented.
    pub fn on_click<L>(&mut self, href: &str, location: &str, lookup: &L) -> ClickOutcome<K>
    where
        L: FragmentLookup<K>,
    {
        let Some(fragment) = uri::fragment(href) else {
            return ClickOutcome::NotATarget;
        };
        if fragment.is_empty() {
            return ClickOutcome::NotATarget;
        }
        // A fragment-only href ("#frag") is always an in-page jump.
        if !fragment_only(href) && !uri::is_same_document(href, location) {
            return ClickOutcome::CrossDocument;
        }
        let Some(subject) = lookup.element_for(fragment) else {
            return ClickOutcome::NotATarget;
        };
        self.gate.ignore_next();
        ClickOutcome::Retarget(self.targets.retarget(Some(subject)))
    }

    /// Report whether a click's default navigation was prevented.
    ///
    /// A prevented default means no native hash-change will follow, so a
    /// suppression armed by [`on_click`](Self::on_click) is undone. Safe to
    /// call after every click regardless of its outcome.
    pub fn after_click(&mut self, default_prevented: bool) {
        if default_prevented {
            self.gate.handle_next();
        }
    }

    /// Decide one native hash-change cycle for the document at `location`.
    ///
    /// `location` is the post-change location. When the gate is armed the
    /// cycle is swallowed; otherwise the new fragment is resolved (possibly
    /// to nothing) and a retarget is produced.
    pub fn on_hash_change<L>(&mut self, location: &str, lookup: &L) -> HashChangeOutcome<K>
    where
        L: FragmentLookup<K>,
    {
        if !self.gate.observe() {
            return HashChangeOutcome::Swallowed;
        }
        let subject = uri::fragment(location)
            .filter(|f| !f.is_empty())
            .and_then(|f| lookup.element_for(f));
        HashChangeOutcome::Retarget(self.targets.retarget(subject))
    }

    /// The currently targeted element, if a non-empty subject was last
    /// targeted.
    pub fn current(&self) -> Option<&K> {
        self.targets.current()
    }
}

/// Whether `href` consists of a fragment alone (`#...`), which always
/// addresses the current document.
fn fragment_only(href: &str) -> bool {
    href.starts_with('#')
}
