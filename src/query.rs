//! Request caching in front of the release-notes fetcher.
//!
//! Each logical query is tracked under a [`QueryKey`] as a [`QueryState`];
//! [`transition`] is the only way a state changes.

mod client;
pub use client::{QueryClient, QueryOptions};

mod state;
pub use state::{QueryEvent, QueryState, QueryStatus, transition};

use std::fmt;

/// Name of a logical query in a [`QueryClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey(&'static str);

impl QueryKey {
    /// The release-notes query.
    pub const RELEASE_NOTES: Self = Self("releaseNotes");

    /// Creates a key with the given name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the key name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}
