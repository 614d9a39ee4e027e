// Copyright 2026 the Fragment Target Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fragment targeting end to end on a miniature host document.
//!
//! This example walks the three paths a host reconciles through the
//! controller:
//! - initial load with a fragment already present (and the opt-in rewrite),
//! - in-page clicks, including the swallowed follow-up hash-change,
//! - a back/forward style bare hash-change.
//!
//! Run:
//! - `cargo run -p fragment_target_demos --example target_basics`

use fragment_target_demos::MiniDocument;

fn main() {
    let mut doc = MiniDocument::new(
        "https://example.com/guide#intro",
        &[("intro", 1), ("setup", 2), ("faq", 3)],
    );

    println!("-- load at {}", doc.location);
    doc.ready(false);

    println!("-- click an in-page link");
    doc.click("#setup", false);

    println!("-- click a link whose default gets prevented");
    doc.click("#faq", true);

    println!("-- click a link to another document");
    doc.click("https://other.example/page#intro", false);

    println!("-- back button: bare hash-change");
    doc.location = String::from("https://example.com/guide#intro");
    doc.hash_change();

    println!("-- currently targeted: {:?}", doc.current());
}
