// Copyright 2026 the Fragment Target Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end navigation flows through a simulated host document.

use fragment_target::controller::{
    ClickOutcome, FragmentLookup, HashChangeOutcome, TargetController,
};
use fragment_target::target::TargetEvent;
use hashbrown::HashMap;

/// The host-side fragment resolver: an id → element map.
struct Elements(HashMap<&'static str, u32>);

impl FragmentLookup<u32> for Elements {
    fn element_for(&self, fragment: &str) -> Option<u32> {
        self.0.get(fragment).copied()
    }
}

/// A miniature host: a location, an id → element map, and a dispatch log.
struct Host {
    location: String,
    elements: Elements,
    dispatched: Vec<TargetEvent<u32>>,
}

impl Host {
    fn new(location: &str, elements: &[(&'static str, u32)]) -> Self {
        Self {
            location: location.to_owned(),
            elements: Elements(elements.iter().copied().collect()),
            dispatched: Vec::new(),
        }
    }

    fn dispatch(&mut self, events: &[TargetEvent<u32>]) {
        self.dispatched.extend_from_slice(events);
    }

    /// Simulate an unprevented in-page click: the controller decision, the
    /// dispatch, the prevented-default report, then the native hash-change
    /// the default navigation produces.
    fn click(&mut self, ctl: &mut TargetController<u32>, href: &str) {
        let outcome = ctl.on_click(href, &self.location, &self.elements);
        if let ClickOutcome::Retarget(events) = &outcome {
            self.dispatch(events);
        }
        ctl.after_click(false);
        if matches!(outcome, ClickOutcome::Retarget(_) | ClickOutcome::NotATarget) {
            // Default navigation lands on the href's fragment.
            if let Some(frag) = fragment_target::uri::fragment(href) {
                self.location = format!(
                    "{}#{frag}",
                    fragment_target::uri::strip_fragment(&self.location)
                );
                self.hash_change(ctl);
            }
        }
    }

    /// Simulate a native hash-change at the current location (for example
    /// from back/forward or a programmatic location change).
    fn hash_change(&mut self, ctl: &mut TargetController<u32>) {
        if let HashChangeOutcome::Retarget(events) = ctl.on_hash_change(&self.location, &self.elements) {
            self.dispatch(&events);
        }
    }

    fn targets_dispatched_to(&self, element: u32) -> usize {
        self.dispatched
            .iter()
            .filter(|ev| **ev == TargetEvent::Target(element))
            .count()
    }
}

#[test]
fn one_click_one_target() {
    let mut ctl = TargetController::new();
    let mut host = Host::new("https://example.com/page", &[("section1", 1)]);

    host.click(&mut ctl, "#section1");

    // The click retargeted synchronously and its native hash-change was
    // swallowed: exactly one target for one user action.
    assert_eq!(host.dispatched, vec![TargetEvent::Target(1)]);
    assert_eq!(ctl.current(), Some(&1));
}

#[test]
fn click_then_back_navigation() {
    let mut ctl = TargetController::new();
    let mut host = Host::new("https://example.com/page", &[("a", 10), ("b", 20)]);

    host.click(&mut ctl, "#a");
    host.click(&mut ctl, "#b");

    // Back/forward raises a bare hash-change with no click involved.
    host.location = String::from("https://example.com/page#a");
    host.hash_change(&mut ctl);

    assert_eq!(
        host.dispatched,
        vec![
            TargetEvent::Target(10),
            TargetEvent::Target(20),
            TargetEvent::Unhash(10),
            TargetEvent::Target(10),
            TargetEvent::Unhash(20),
        ]
    );
    assert_eq!(host.targets_dispatched_to(10), 2);
    assert_eq!(ctl.current(), Some(&10));
}

#[test]
fn prevented_click_leaves_the_gate_open() {
    let mut ctl = TargetController::new();
    let host = Host::new("https://example.com/page", &[("a", 10), ("b", 20)]);

    // The page's handler prevents the default navigation.
    let outcome = ctl.on_click("#a", &host.location, &host.elements);
    assert!(matches!(outcome, ClickOutcome::Retarget(_)));
    ctl.after_click(true);

    // No hash-change followed the click; the next real one must be handled.
    let hc = ctl.on_hash_change("https://example.com/page#b", &host.elements);
    assert_eq!(
        hc,
        HashChangeOutcome::Retarget(
            [TargetEvent::Target(20), TargetEvent::Unhash(10)]
                .into_iter()
                .collect()
        )
    );
}

#[test]
fn cross_document_click_dispatches_nothing_and_suppresses_nothing() {
    let mut ctl = TargetController::new();
    let mut host = Host::new("https://example.com/page", &[("section1", 1)]);

    let outcome = ctl.on_click("https://other.com/page#section1", &host.location, &host.elements);
    assert_eq!(outcome, ClickOutcome::CrossDocument);
    ctl.after_click(false);
    assert!(host.dispatched.is_empty());

    // An unrelated in-document hash-change is still handled.
    host.location = String::from("https://example.com/page#section1");
    host.hash_change(&mut ctl);
    assert_eq!(host.dispatched, vec![TargetEvent::Target(1)]);
}

#[test]
fn ready_then_interaction() {
    let mut ctl = TargetController::new();
    let mut host = Host::new("https://example.com/page#intro", &[("intro", 1), ("body", 2)]);

    let ready = ctl.on_ready(&host.location, &host.elements, true);
    host.dispatch(&ready.events);
    assert_eq!(host.dispatched, vec![TargetEvent::Target(1)]);

    // No consumer prevented the ready default; the location keeps its hash.
    assert_eq!(ready.rewrite(false), None);

    host.click(&mut ctl, "#body");
    assert_eq!(
        host.dispatched,
        vec![
            TargetEvent::Target(1),
            TargetEvent::Target(2),
            TargetEvent::Unhash(1),
        ]
    );
    assert_eq!(ctl.current(), Some(&2));
}

#[test]
fn ready_prevention_rewrites_the_visible_uri() {
    let mut ctl = TargetController::new();
    let mut host = Host::new("https://example.com/page#section1", &[("section1", 1)]);

    let ready = ctl.on_ready(&host.location, &host.elements, true);
    host.dispatch(&ready.events);

    // The consumer's handler called prevention: replace the visible URI.
    if let Some(uri) = ready.rewrite(true) {
        host.location = uri.to_owned();
    }
    assert_eq!(host.location, "https://example.com/page");
    assert_eq!(ctl.current(), Some(&1));
}

#[test]
fn ready_with_unmatched_fragment_completes_quietly() {
    let mut ctl = TargetController::new();
    let mut host = Host::new("https://example.com/page#nowhere", &[("section1", 1)]);

    let ready = ctl.on_ready(&host.location, &host.elements, true);
    host.dispatch(&ready.events);

    assert!(host.dispatched.is_empty());
    assert_eq!(ctl.current(), None);

    // A later navigation to a real section behaves normally, with no stale
    // unhash from the unmatched load.
    host.click(&mut ctl, "#section1");
    assert_eq!(host.dispatched, vec![TargetEvent::Target(1)]);
}

#[test]
fn click_on_missing_anchor_falls_through_to_hash_change() {
    let mut ctl = TargetController::new();
    let mut host = Host::new("https://example.com/page", &[("real", 1)]);

    host.click(&mut ctl, "#real");
    // The second link's fragment matches nothing: the click path stays out
    // of the way and the native hash-change performs the (empty) retarget.
    host.click(&mut ctl, "#gone");

    assert_eq!(
        host.dispatched,
        vec![TargetEvent::Target(1), TargetEvent::Unhash(1)]
    );
    assert_eq!(ctl.current(), None);
}
