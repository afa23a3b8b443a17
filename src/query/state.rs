use crate::api::FetchError;

/// Lifecycle of one cached query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    /// Nothing has been requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Loaded(T),
    /// The last request failed.
    Failed(FetchError),
}

/// Something that happened to a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent<T> {
    /// A request was issued.
    Started,
    /// The request returned data.
    Succeeded(T),
    /// The request failed.
    Failed(FetchError),
}

/// Coarse status as seen by a reader of the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// No data and no error yet.
    Pending,
    /// Data is available.
    Success,
    /// The request failed.
    Error,
}

/// Computes the state that follows `state` when `event` occurs.
///
/// Results only land on a `Loading` state. A result arriving in any other
/// state leaves it unchanged.
#[must_use]
pub fn transition<T>(state: QueryState<T>, event: QueryEvent<T>) -> QueryState<T> {
    match (state, event) {
        (_, QueryEvent::Started) => QueryState::Loading,
        (QueryState::Loading, QueryEvent::Succeeded(data)) => QueryState::Loaded(data),
        (QueryState::Loading, QueryEvent::Failed(error)) => QueryState::Failed(error),
        (state, _) => state,
    }
}

impl<T> QueryState<T> {
    /// Returns the coarse status of this state.
    #[must_use]
    pub const fn status(&self) -> QueryStatus {
        match self {
            Self::Idle | Self::Loading => QueryStatus::Pending,
            Self::Loaded(_) => QueryStatus::Success,
            Self::Failed(_) => QueryStatus::Error,
        }
    }

    /// Whether no result has arrived yet.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.status(), QueryStatus::Pending)
    }

    /// The loaded data, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// The failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}
