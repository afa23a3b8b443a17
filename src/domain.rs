//! Domain models for the FAQ.
//!
//! This module contains the fixed FAQ catalogue, the release-notes payload it
//! is merged with, and the filtering rules applied to it.

/// The four fixed FAQ categories.
pub mod category;
pub use category::{Category, UnknownCategory};

mod config;
pub use config::{Config, ConfigError};

/// The FAQ catalogue.
pub mod faq;
pub use faq::{Answer, FaqItem, LOADING_HARDWARE_REQUIREMENTS, faq_items};

/// Search and category filtering.
pub mod filter;
pub use filter::{Filter, no_results_message};

/// Release-notes payload returned by the API.
pub mod release_notes;
pub use release_notes::{ReleaseNotes, format_lines};

/// Optional-key selection that toggles off on a repeated click.
pub mod selection;
pub use selection::toggle;
