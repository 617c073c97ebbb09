//! Session-scoped object URL registry
//!
//! Attachment URLs in the original browser setting are object references
//! whose lifetime is implicitly tied to the page and reclaimed by GC. Here
//! that becomes an explicit resource handle: URLs are acquired from a
//! registry owned by the session context and released by whichever path
//! discards the attachment. Dropping the registry invalidates everything.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// A session-scoped URL handle backing an attachment.
///
/// Valid only while the minting [`ObjectUrlRegistry`] holds it live.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    fn mint() -> Self {
        Self(format!("session://{}", Ulid::new()))
    }

    /// The URL as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Allocator and ownership ledger for live object URLs
#[derive(Debug, Default)]
pub struct ObjectUrlRegistry {
    live: BTreeSet<ObjectUrl>,
}

impl ObjectUrlRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh live URL
    pub fn acquire(&mut self) -> ObjectUrl {
        let url = ObjectUrl::mint();
        self.live.insert(url.clone());
        url
    }

    /// Release a URL. Returns false if it was not live (double release is a
    /// no-op).
    pub fn release(&mut self, url: &ObjectUrl) -> bool {
        self.live.remove(url)
    }

    /// Whether a URL is still live
    pub fn is_live(&self, url: &ObjectUrl) -> bool {
        self.live.contains(url)
    }

    /// Number of live URLs
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
