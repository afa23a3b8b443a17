use std::{
    collections::HashMap,
    sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError},
    thread,
    time::Duration,
};

use tracing::{debug, instrument, warn};

use super::{QueryEvent, QueryKey, QueryState, transition};
use crate::api::FetchError;

/// Behaviour shared by every query in a [`QueryClient`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Extra attempts after a failed fetch. Zero means a single request.
    pub retry: u32,
}

/// A keyed cache of query states.
///
/// The first [`query`](Self::query) for a key issues the fetch on a worker
/// thread; every later call, including ones made while the fetch is still in
/// flight, reads the cached state instead of fetching again. Nothing is ever
/// invalidated, so each key is fetched at most once per client.
#[derive(Debug)]
pub struct QueryClient<T> {
    options: QueryOptions,
    entries: Mutex<HashMap<QueryKey, QueryState<T>>>,
    settled: Condvar,
}

impl<T> QueryClient<T>
where
    T: Clone + Send + 'static,
{
    /// Creates an empty cache.
    #[must_use]
    pub fn new(options: QueryOptions) -> Self {
        Self {
            options,
            entries: Mutex::new(HashMap::new()),
            settled: Condvar::new(),
        }
    }

    /// Returns the cached state for `key`, starting `fetch` if the key has
    /// never been requested.
    ///
    /// Never blocks on the fetch itself.
    #[instrument(level = "debug", skip(self, fetch))]
    pub fn query<F>(self: &Arc<Self>, key: QueryKey, fetch: F) -> QueryState<T>
    where
        F: Fn() -> Result<T, FetchError> + Send + 'static,
    {
        let mut entries = self.lock();
        let state = entries.remove(&key).unwrap_or(QueryState::Idle);
        if !matches!(state, QueryState::Idle) {
            debug!(status = ?state.status(), "serving cached query");
            entries.insert(key, state.clone());
            return state;
        }

        let loading = transition(state, QueryEvent::Started);
        entries.insert(key, loading.clone());
        drop(entries);

        let client = Arc::clone(self);
        thread::spawn(move || {
            let event = client.run(key, &fetch);
            client.settle(key, event);
        });

        loading
    }

    /// Returns a snapshot of the state for `key`.
    #[must_use]
    pub fn state(&self, key: QueryKey) -> QueryState<T> {
        self.lock()
            .get(&key)
            .cloned()
            .unwrap_or(QueryState::Idle)
    }

    /// Blocks until `key` is no longer loading, or until `timeout` elapses.
    ///
    /// Returns the state at that point, which is still `Loading` on timeout.
    #[must_use]
    pub fn wait(&self, key: QueryKey, timeout: Option<Duration>) -> QueryState<T> {
        let still_loading = |entries: &mut HashMap<QueryKey, QueryState<T>>| {
            matches!(entries.get(&key), Some(QueryState::Loading))
        };

        let entries = self.lock();
        let entries = match timeout {
            Some(timeout) => {
                self.settled
                    .wait_timeout_while(entries, timeout, still_loading)
                    .unwrap_or_else(PoisonError::into_inner)
                    .0
            }
            None => self
                .settled
                .wait_while(entries, still_loading)
                .unwrap_or_else(PoisonError::into_inner),
        };

        entries.get(&key).cloned().unwrap_or(QueryState::Idle)
    }

    fn run<F>(&self, key: QueryKey, fetch: &F) -> QueryEvent<T>
    where
        F: Fn() -> Result<T, FetchError>,
    {
        let attempts = self.options.retry.saturating_add(1);
        let mut attempt = 1;
        loop {
            match fetch() {
                Ok(data) => {
                    debug!(%key, attempt, "query succeeded");
                    return QueryEvent::Succeeded(data);
                }
                Err(error) if attempt < attempts => {
                    warn!(%key, attempt, %error, "query failed, retrying");
                    attempt += 1;
                }
                Err(error) => {
                    warn!(%key, attempt, %error, "query failed");
                    return QueryEvent::Failed(error);
                }
            }
        }
    }

    fn settle(&self, key: QueryKey, event: QueryEvent<T>) {
        let mut entries = self.lock();
        let state = entries.remove(&key).unwrap_or(QueryState::Idle);
        entries.insert(key, transition(state, event));
        drop(entries);
        self.settled.notify_all();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<QueryKey, QueryState<T>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc,
    };

    use super::*;

    const KEY: QueryKey = QueryKey::new("test");

    fn client(retry: u32) -> Arc<QueryClient<usize>> {
        Arc::new(QueryClient::new(QueryOptions { retry }))
    }

    #[test]
    fn unknown_key_is_idle() {
        assert_eq!(client(0).state(KEY), QueryState::Idle);
    }

    #[test]
    fn first_query_is_loading_then_loaded() {
        let client = client(0);
        let (release, gate) = mpsc::channel::<()>();
        let gate = Mutex::new(gate);

        let state = client.query(KEY, move || {
            gate.lock().unwrap().recv().unwrap();
            Ok(42)
        });
        assert_eq!(state, QueryState::Loading);
        assert_eq!(client.state(KEY), QueryState::Loading);

        release.send(()).unwrap();
        assert_eq!(client.wait(KEY, None), QueryState::Loaded(42));
    }

    #[test]
    fn concurrent_callers_share_one_request() {
        let client = client(0);
        let calls = Arc::new(AtomicUsize::new(0));
        let (release, gate) = mpsc::channel::<()>();
        let gate = Arc::new(Mutex::new(gate));

        for _ in 0..3 {
            let calls = Arc::clone(&calls);
            let gate = Arc::clone(&gate);
            let state = client.query(KEY, move || {
                calls.fetch_add(1, Ordering::SeqCst);
                gate.lock().unwrap().recv().unwrap();
                Ok(1)
            });
            assert_eq!(state, QueryState::Loading);
        }

        release.send(()).unwrap();
        assert_eq!(client.wait(KEY, None), QueryState::Loaded(1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn settled_query_is_served_from_cache() {
        let client = client(0);
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        client.query(KEY, move || Ok(counter.fetch_add(1, Ordering::SeqCst)));
        assert_eq!(client.wait(KEY, None), QueryState::Loaded(0));

        let counter = Arc::clone(&calls);
        let state = client.query(KEY, move || Ok(counter.fetch_add(1, Ordering::SeqCst)));

        assert_eq!(state, QueryState::Loaded(0));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failure_is_not_retried_by_default() {
        let client = client(0);
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        client.query(KEY, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(FetchError::NotOk { status: 500 })
        });

        assert_eq!(
            client.wait(KEY, None),
            QueryState::Failed(FetchError::NotOk { status: 500 })
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn retry_option_allows_extra_attempts() {
        let client = client(2);
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        client.query(KEY, move || {
            if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(FetchError::Transport("connection reset".to_string()))
            } else {
                Ok(9)
            }
        });

        assert_eq!(client.wait(KEY, None), QueryState::Loaded(9));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn wait_times_out_while_loading() {
        let client = client(0);
        let (_release, gate) = mpsc::channel::<()>();
        let gate = Mutex::new(gate);

        client.query(KEY, move || {
            let _ = gate.lock().unwrap().recv();
            Ok(0)
        });

        assert_eq!(
            client.wait(KEY, Some(Duration::from_millis(20))),
            QueryState::Loading
        );
    }

    #[test]
    fn keys_are_independent() {
        let client = client(0);
        let other = QueryKey::new("other");

        client.query(KEY, || Ok(1));
        client.query(other, || Err(FetchError::Transport("offline".to_string())));

        assert_eq!(client.wait(KEY, None), QueryState::Loaded(1));
        assert!(client.wait(other, None).error().is_some());
    }
}
