// Copyright 2026 the Fragment Target Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared demo scaffolding: a miniature in-memory host document.
//!
//! The demos drive `fragment_target` the way a real host shell would: from
//! its own click / hash-change / ready entry points, dispatching the returned
//! events itself. `MiniDocument` plays the host: a location, a map of element
//! identifiers, and a dispatch log standing in for event delivery.

use fragment_target::controller::{
    ClickOutcome, FragmentLookup, HashChangeOutcome, TargetController,
};
use fragment_target::target::TargetEvent;
use fragment_target::uri;
use hashbrown::HashMap;

/// A miniature host document for the demos.
#[derive(Debug)]
pub struct MiniDocument {
    /// The visible location, fragment included.
    pub location: String,
    elements: HashMap<String, u32>,
    controller: TargetController<u32>,
}

impl MiniDocument {
    /// Create a document at `location` with the given `id → element` pairs.
    pub fn new(location: &str, elements: &[(&str, u32)]) -> Self {
        Self {
            location: location.to_owned(),
            elements: elements
                .iter()
                .map(|(id, key)| ((*id).to_owned(), *key))
                .collect(),
            controller: TargetController::new(),
        }
    }

    /// Run the ready-state check, as the host would on document readiness.
    ///
    /// `prevent_default` plays the consumer's handler calling prevention;
    /// when it does and rewriting is supported, the visible location drops
    /// its fragment.
    pub fn ready(&mut self, prevent_default: bool) {
        let lookup = Lookup(&self.elements);
        let ready = self.controller.on_ready(&self.location, &lookup, true);
        log_events("ready", &ready.events);
        if let Some(rewritten) = ready.rewrite(prevent_default) {
            println!("  history.replace -> {rewritten}");
            self.location = rewritten.to_owned();
        }
    }

    /// Simulate a click on an anchor with `href`.
    ///
    /// An unprevented in-page click is followed by the native hash-change the
    /// default navigation produces, which the gate swallows.
    pub fn click(&mut self, href: &str, prevent_default: bool) {
        let lookup = Lookup(&self.elements);
        let outcome = self.controller.on_click(href, &self.location, &lookup);
        match &outcome {
            ClickOutcome::Retarget(events) => log_events("click", events),
            ClickOutcome::NotATarget => println!("click {href}: not a target, native click"),
            ClickOutcome::CrossDocument => println!("click {href}: leaves this document"),
        }
        self.controller.after_click(prevent_default);

        let navigates = !prevent_default
            && matches!(outcome, ClickOutcome::Retarget(_) | ClickOutcome::NotATarget);
        if navigates {
            if let Some(frag) = uri::fragment(href) {
                self.location = format!("{}#{frag}", uri::strip_fragment(&self.location));
                self.hash_change();
            }
        }
    }

    /// Deliver a native hash-change for the current location.
    pub fn hash_change(&mut self) {
        let lookup = Lookup(&self.elements);
        match self.controller.on_hash_change(&self.location, &lookup) {
            HashChangeOutcome::Swallowed => println!("hashchange: swallowed"),
            HashChangeOutcome::Retarget(events) => log_events("hashchange", &events),
        }
    }

    /// The currently targeted element key, if any.
    pub fn current(&self) -> Option<u32> {
        self.controller.current().copied()
    }
}

struct Lookup<'a>(&'a HashMap<String, u32>);

impl FragmentLookup<u32> for Lookup<'_> {
    fn element_for(&self, fragment: &str) -> Option<u32> {
        self.0.get(fragment).copied()
    }
}

fn log_events(origin: &str, events: &[TargetEvent<u32>]) {
    if events.is_empty() {
        println!("{origin}: no events");
    }
    for ev in events {
        match ev {
            TargetEvent::Target(k) => println!("{origin}: target on element {k}"),
            TargetEvent::Unhash(k) => println!("{origin}: unhash on element {k}"),
        }
    }
}
