//! Release-notes FAQ
//!
//! A fixed list of questions and answers, one of which is filled from the
//! release-notes API, filtered by free-text search and category.

pub mod domain;
pub use domain::{
    Answer, Category, Config, FaqItem, Filter, ReleaseNotes, UnknownCategory, faq_items,
};

/// Fetching the release-notes payload over HTTP.
pub mod api;
pub use api::{FetchError, HttpReleaseNotes, ReleaseNotesSource};

/// Keyed request cache with pending/success/error tracking.
pub mod query;
pub use query::{QueryClient, QueryKey, QueryOptions, QueryState, QueryStatus};

/// View state and the render model built from it.
pub mod view;
pub use view::{Body, FaqView, RenderedItem, Screen, UiState};
