//! The FAQ view.
//!
//! [`UiState`] holds what the user has done so far; [`render`] turns it and
//! the release-notes query state into a [`Screen`]. Rendering is pure and is
//! recomputed from scratch every time.

use std::{sync::Arc, time::Duration};

use serde::Serialize;
use tracing::debug;

use crate::{
    api::ReleaseNotesSource,
    domain::{
        Answer, Category, FaqItem, Filter, ReleaseNotes, faq_items, no_results_message, toggle,
    },
    query::{QueryClient, QueryKey, QueryState, QueryStatus},
};

/// Transient state owned by the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Position of the expanded item in the displayed list. At most one item
    /// is expanded.
    pub active_index: Option<usize>,
    /// Raw search term as typed.
    pub search_term: String,
    /// Category filter, if any.
    pub selected_category: Option<Category>,
}

impl UiState {
    /// Expands the item at `index`, or collapses it if it is already
    /// expanded. Any other expanded item is collapsed.
    pub fn toggle_item(&mut self, index: usize) {
        toggle(&mut self.active_index, index);
    }

    /// Selects `category`, or clears the category filter if it is already
    /// selected.
    pub fn select_category(&mut self, category: Category) {
        toggle(&mut self.selected_category, category);
    }

    /// Replaces the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The filter described by this state.
    #[must_use]
    pub fn filter(&self) -> Filter {
        Filter {
            search_term: self.search_term.clone(),
            category: self.selected_category,
        }
    }
}

/// A category filter button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryButton {
    /// The category the button selects.
    pub category: Category,
    /// Whether this is the selected category.
    pub selected: bool,
}

/// One displayed FAQ entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedItem {
    /// The question header.
    pub question: String,
    /// The answer body.
    pub answer: Answer,
    /// The entry's category.
    pub category: Category,
    /// Whether the answer is shown.
    pub expanded: bool,
}

/// The content area below the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// The release notes are still being fetched.
    Loading,
    /// The fetch failed; carries the error message.
    Error(String),
    /// Nothing matched; carries the message to show.
    Empty(String),
    /// The matching entries, in catalogue order.
    Items(Vec<RenderedItem>),
}

/// Everything needed to draw the view once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// The raw search term.
    pub search_term: String,
    /// The category buttons, in fixed order.
    pub categories: Vec<CategoryButton>,
    /// The content area.
    pub body: Body,
}

/// Renders the view for a given query state and UI state.
#[must_use]
pub fn render(query: &QueryState<ReleaseNotes>, ui: &UiState) -> Screen {
    let categories = Category::ALL
        .into_iter()
        .map(|category| CategoryButton {
            category,
            selected: ui.selected_category == Some(category),
        })
        .collect();

    let body = match query.status() {
        QueryStatus::Pending => Body::Loading,
        QueryStatus::Error => Body::Error(
            query
                .error()
                .map(ToString::to_string)
                .unwrap_or_default(),
        ),
        QueryStatus::Success => {
            let items = faq_items(query.data());
            let filtered = ui.filter().apply(&items);
            if filtered.is_empty() {
                Body::Empty(no_results_message(&ui.search_term, ui.selected_category))
            } else {
                Body::Items(
                    filtered
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| RenderedItem {
                            question: item.question.clone(),
                            answer: item.answer.clone(),
                            category: item.category,
                            expanded: ui.active_index == Some(index),
                        })
                        .collect(),
                )
            }
        }
    };

    Screen {
        search_term: ui.search_term.clone(),
        categories,
        body,
    }
}

/// The mounted FAQ view.
///
/// Mounting issues the release-notes query against the given cache; the view
/// then only reads from it.
#[derive(Debug)]
pub struct FaqView {
    client: Arc<QueryClient<ReleaseNotes>>,
    ui: UiState,
}

impl FaqView {
    /// Mounts the view, requesting the release notes through `client`.
    pub fn mount(
        client: Arc<QueryClient<ReleaseNotes>>,
        source: Arc<dyn ReleaseNotesSource>,
    ) -> Self {
        let state = client.query(QueryKey::RELEASE_NOTES, move || source.fetch());
        debug!(status = ?state.status(), "faq view mounted");
        Self {
            client,
            ui: UiState::default(),
        }
    }

    /// The current release-notes query state.
    #[must_use]
    pub fn query_state(&self) -> QueryState<ReleaseNotes> {
        self.client.state(QueryKey::RELEASE_NOTES)
    }

    /// Blocks until the release-notes query has settled or `timeout` elapses.
    ///
    /// Only needed by callers without a redraw loop.
    #[must_use]
    pub fn wait(&self, timeout: Option<Duration>) -> QueryState<ReleaseNotes> {
        self.client.wait(QueryKey::RELEASE_NOTES, timeout)
    }

    /// The FAQ entries built from whatever data is currently available.
    ///
    /// The hardware entry keeps its loading placeholder until data arrives,
    /// which after a failed fetch is forever.
    #[must_use]
    pub fn items(&self) -> Vec<FaqItem> {
        faq_items(self.query_state().data())
    }

    /// The UI state.
    #[must_use]
    pub const fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Mutable access to the UI state, for handling user input.
    pub const fn ui_mut(&mut self) -> &mut UiState {
        &mut self.ui
    }

    /// Renders the view as it currently stands.
    #[must_use]
    pub fn screen(&self) -> Screen {
        render(&self.query_state(), &self.ui)
    }
}
