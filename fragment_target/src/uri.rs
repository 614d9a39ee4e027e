// Copyright 2026 the Fragment Target Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fragment comparator: split URIs at the fragment marker.
//!
//! These helpers implement the "in-page link" test: two URIs address the same
//! document when they are equal after their fragments are removed. Per the
//! generic URI syntax the fragment begins at the first `#` in the string; a
//! `#` cannot occur earlier inside a path or query without being the fragment
//! marker, so a plain split is sufficient and no full parser is required.
//!
//! ## Minimal example
//!
//! ```
//! use fragment_target::uri;
//!
//! assert_eq!(uri::strip_fragment("https://example.com/page#frag"), "https://example.com/page");
//! assert_eq!(uri::fragment("https://example.com/page#frag"), Some("frag"));
//! assert!(uri::is_same_document(
//!     "https://example.com/page#a",
//!     "https://example.com/page#b",
//! ));
//! ```

/// Return everything before the fragment marker.
///
/// Returns the input unchanged when it carries no `#`. The marker itself is
/// not included in the result.
pub fn strip_fragment(uri: &str) -> &str {
    match uri.split_once('#') {
        Some((prefix, _)) => prefix,
        None => uri,
    }
}

/// Return the fragment component, without its leading `#`.
///
/// `None` when the URI has no fragment marker at all. A trailing bare `#`
/// yields `Some("")`, mirroring a host location whose hash is present but
/// empty.
pub fn fragment(uri: &str) -> Option<&str> {
    uri.split_once('#').map(|(_, frag)| frag)
}

/// Test whether two URIs address the same document, ignoring fragments.
pub fn is_same_document(a: &str, b: &str) -> bool {
    strip_fragment(a) == strip_fragment(b)
}
