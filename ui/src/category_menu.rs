//! Category submenu state and its mount-time fetch
//!
//! The navbar fetches categories once per mount. The fetch runs as an
//! abortable task: when the navbar is torn down its cleanup aborts the task,
//! and an aborted task performs no further state writes even if the HTTP
//! response arrives later.

use crate::api::{fetch_categories, ApiError};
use crate::config::ApiConfig;
use crate::types::Category;
use futures::future::{AbortHandle, AbortRegistration, Abortable, Aborted};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Receives the results of a category fetch
pub trait CategorySink {
    fn set_loading(&self, loading: bool);

    /// Replace the whole category list
    fn replace_categories(&self, categories: Vec<Category>);
}

/// UI-local state of one mounted navbar's category menu
#[derive(Debug, Clone, Copy)]
pub struct CategoryMenuState {
    /// Categories listed in the submenu; replaced wholesale
    pub sub_links: RwSignal<Vec<Category>>,
    /// True while the fetch is in flight. Not rendered by the navbar.
    pub loading: RwSignal<bool>,
}

impl CategoryMenuState {
    pub fn new() -> Self {
        Self {
            sub_links: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
        }
    }
}

impl Default for CategoryMenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl CategorySink for CategoryMenuState {
    fn set_loading(&self, loading: bool) {
        // try_set: a disposed signal is ignored rather than a panic
        let _ = self.loading.try_set(loading);
    }

    fn replace_categories(&self, categories: Vec<Category>) {
        let _ = self.sub_links.try_set(categories);
    }
}

/// How a category fetch settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(usize),
    /// Logged and treated as zero categories
    Failed(ApiError),
    /// Aborted before it could apply its result
    Cancelled,
}

/// Run one category fetch against `sink`.
///
/// Every write happens inside the abortable future, so once `registration`'s
/// handle is aborted nothing further reaches the sink. A failed fetch leaves
/// the current category list untouched.
pub async fn run_category_fetch<F, S>(
    fetch: F,
    registration: AbortRegistration,
    sink: &S,
) -> FetchOutcome
where
    F: Future<Output = Result<Vec<Category>, ApiError>>,
    S: CategorySink,
{
    let task = async {
        sink.set_loading(true);
        let outcome = match fetch.await {
            Ok(categories) => {
                let count = categories.len();
                sink.replace_categories(categories);
                FetchOutcome::Loaded(count)
            }
            Err(e) => {
                tracing::error!("Could not fetch categories: {}", e);
                FetchOutcome::Failed(e)
            }
        };
        sink.set_loading(false);
        outcome
    };

    match Abortable::new(task, registration).await {
        Ok(outcome) => outcome,
        Err(Aborted) => {
            tracing::debug!("Category fetch aborted; result dropped");
            FetchOutcome::Cancelled
        }
    }
}

/// Start the category fetch for the current reactive owner.
///
/// The task is aborted when the owner is cleaned up.
pub fn load_categories_on_mount(state: CategoryMenuState, api: ApiConfig) {
    let (handle, registration) = AbortHandle::new_pair();
    on_cleanup(move || handle.abort());

    spawn_local(async move {
        let outcome = run_category_fetch(fetch_categories(&api), registration, &state).await;
        tracing::debug!(?outcome, "Category fetch settled");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navbar_model::{submenu, Submenu};
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum SinkWrite {
        Loading(bool),
        Replace(Vec<String>),
    }

    #[derive(Default)]
    struct RecordingSink {
        writes: RefCell<Vec<SinkWrite>>,
        categories: RefCell<Vec<Category>>,
    }

    impl RecordingSink {
        fn writes(&self) -> Vec<SinkWrite> {
            self.writes.borrow().clone()
        }
    }

    impl CategorySink for RecordingSink {
        fn set_loading(&self, loading: bool) {
            self.writes.borrow_mut().push(SinkWrite::Loading(loading));
        }

        fn replace_categories(&self, categories: Vec<Category>) {
            self.writes.borrow_mut().push(SinkWrite::Replace(
                categories.iter().map(|c| c.name.clone()).collect(),
            ));
            *self.categories.borrow_mut() = categories;
        }
    }

    fn category(name: &str) -> Category {
        Category {
            name: name.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_success_replaces_list_and_clears_loading() {
        let sink = RecordingSink::default();
        let (_handle, registration) = AbortHandle::new_pair();
        let fetch = async { Ok(vec![category("Web Development"), category("Python")]) };

        let outcome = block_on(run_category_fetch(fetch, registration, &sink));

        assert_eq!(outcome, FetchOutcome::Loaded(2));
        assert_eq!(
            sink.writes(),
            vec![
                SinkWrite::Loading(true),
                SinkWrite::Replace(vec!["Web Development".into(), "Python".into()]),
                SinkWrite::Loading(false),
            ]
        );
    }

    #[test]
    fn test_failure_keeps_prior_list() {
        let sink = RecordingSink::default();
        *sink.categories.borrow_mut() = vec![category("Kept")];
        let (_handle, registration) = AbortHandle::new_pair();
        let fetch = async { Err(ApiError::Network("offline".into())) };

        let outcome = block_on(run_category_fetch(fetch, registration, &sink));

        assert_eq!(outcome, FetchOutcome::Failed(ApiError::Network("offline".into())));
        assert_eq!(sink.writes(), vec![SinkWrite::Loading(true), SinkWrite::Loading(false)]);
        assert_eq!(sink.categories.borrow()[0].name, "Kept");
    }

    #[test]
    fn test_every_outcome_renders_links_or_placeholder() {
        let outcomes: Vec<Result<Vec<Category>, ApiError>> = vec![
            Ok(vec![]),
            Ok(vec![category("Python")]),
            Ok(vec![category("Web Development"), category("Python"), category("Data Science")]),
            Err(ApiError::Network("offline".into())),
            Err(ApiError::Status {
                status: 500,
                message: None,
            }),
            Err(ApiError::Decode("expected `data`".into())),
        ];

        for result in outcomes {
            let expected = result.as_ref().map(|c| c.len()).unwrap_or(0);
            let sink = RecordingSink::default();
            let (_handle, registration) = AbortHandle::new_pair();

            block_on(run_category_fetch(async move { result }, registration, &sink));

            match submenu(&sink.categories.borrow()) {
                Submenu::NoResults => assert_eq!(expected, 0),
                Submenu::Links(links) => assert_eq!(links.len(), expected),
            }
            assert_eq!(sink.writes().last(), Some(&SinkWrite::Loading(false)));
        }
    }

    #[test]
    fn test_abort_before_response_drops_result() {
        let sink = Rc::new(RecordingSink::default());
        let outcome = Rc::new(RefCell::new(None));
        let (tx, rx) = oneshot::channel::<Result<Vec<Category>, ApiError>>();
        let (handle, registration) = AbortHandle::new_pair();

        let mut pool = LocalPool::new();
        {
            let sink = sink.clone();
            let outcome = outcome.clone();
            pool.spawner()
                .spawn_local(async move {
                    let fetch = async move {
                        rx.await
                            .unwrap_or_else(|_| Err(ApiError::Network("dropped".into())))
                    };
                    let result = run_category_fetch(fetch, registration, &*sink).await;
                    *outcome.borrow_mut() = Some(result);
                })
                .unwrap();
        }

        pool.run_until_stalled();
        assert_eq!(sink.writes(), vec![SinkWrite::Loading(true)]);

        // Unmount, then the response arrives
        handle.abort();
        let _ = tx.send(Ok(vec![category("Python")]));
        pool.run_until_stalled();

        assert_eq!(*outcome.borrow(), Some(FetchOutcome::Cancelled));
        assert_eq!(sink.writes(), vec![SinkWrite::Loading(true)]);
        assert!(sink.categories.borrow().is_empty());
    }

    #[test]
    fn test_abort_before_first_poll_writes_nothing() {
        let sink = RecordingSink::default();
        let (handle, registration) = AbortHandle::new_pair();
        handle.abort();

        let outcome = block_on(run_category_fetch(
            async { Ok(vec![category("Python")]) },
            registration,
            &sink,
        ));

        assert_eq!(outcome, FetchOutcome::Cancelled);
        assert!(sink.writes().is_empty());
    }
}
