// Copyright 2026 the Fragment Target Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fragment Target: deterministic state machines for URI fragment targeting.
//!
//! ## Overview
//!
//! This crate synthesizes `target` / `unhash` transition events for the
//! element addressed by a document's URI fragment, reconciling the three host
//! code paths that can change it — initial document readiness, a native
//! hash-change, and an in-page anchor click — into one consistent stream. It
//! gives page-level consumers a behavioral hook for fragment-targeted
//! elements (highlighting a jumped-to section, for example) on hosts without
//! CSS-level target styling.
//!
//! It does not perform DOM work. Instead, the host drives a
//! [`TargetController`](controller::TargetController) from its own listeners
//! and dispatches the returned [`TargetEvent`](target::TargetEvent)s itself,
//! pairing each with the originating host event. Decisions that depend on a
//! consumer preventing an event's default are reported back to the controller
//! explicitly after dispatch.
//!
//! ## Modules
//!
//! - [`uri`]: fragment extraction and the same-document comparison.
//! - [`target`]: the `target`/`unhash` emitter and the remembered subject.
//! - [`gate`]: the gate that swallows the duplicate hash-change a click's
//!   default navigation produces.
//! - [`controller`]: the per-document controller composing the above.
//!
//! ## Minimal example
//!
//! ```
//! use fragment_target::controller::{FragmentLookup, TargetController};
//! use fragment_target::target::TargetEvent;
//!
//! struct OnePage;
//! impl FragmentLookup<u32> for OnePage {
//!     fn element_for(&self, fragment: &str) -> Option<u32> {
//!         (fragment == "intro").then_some(7)
//!     }
//! }
//!
//! let mut ctl: TargetController<u32> = TargetController::new();
//!
//! // Document loaded at a fragment-carrying location.
//! let ready = ctl.on_ready("https://example.com/doc#intro", &OnePage, true);
//! assert_eq!(ready.events.as_slice(), &[TargetEvent::Target(7)]);
//!
//! // A consumer prevented the ready event's default: drop the visible
//! // fragment via the host's history-replace facility.
//! assert_eq!(ready.rewrite(true), Some("https://example.com/doc"));
//! ```
//!
//! The core types are generic over the element key `K`, so hosts can use any
//! small, cloneable handle (a DOM node id, an arena index, or an
//! application-specific id).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod gate;
pub mod target;
pub mod uri;
