//! Download lifecycle store.
//!
//! Holds the set of known downloads and owns the polling loop whose lifetime
//! is derived from the presence of non-terminal downloads. The store never
//! computes status transitions itself — the server is the authority, and
//! every transition is observed by re-fetching the full collection.
//!
//! Every operation catches the normalized [`ApiError`](crate::api::ApiError)
//! at this level: user-initiated actions surface a one-line notification,
//! background poll ticks log and continue. Errors do not propagate out of
//! the store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::model::{BatchCreateDownloadResponse, CreateDownloadRequest, Download};

use super::notifications::Notifier;

/// Period between poll ticks (3 seconds in the reference behavior).
pub const DOWNLOAD_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Poll loop lifetime, as an explicit tagged state rather than a nullable
/// handle: the no-active-loop case is a distinct variant, not a null check.
#[derive(Debug)]
enum PollState {
    Idle,
    Polling(JoinHandle<()>),
}

#[derive(Debug, Default)]
struct StoreState {
    downloads: Vec<Download>,
    loading: bool,
    last_error: Option<String>,
}

#[derive(Debug)]
struct StoreInner {
    api: ApiClient,
    notifier: Notifier,
    poll_interval: Duration,
    state: Mutex<StoreState>,
    poll: Mutex<PollState>,
}

impl StoreInner {
    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn poll(&self) -> MutexGuard<'_, PollState> {
        self.poll.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        // Teardown must not leave a detached poll task ticking.
        let poll = self.poll.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let PollState::Polling(handle) = poll {
            handle.abort();
        }
    }
}

/// Explicitly constructed, dependency-injected state container for download
/// records. Cheap to clone; clones share state and the poll loop.
///
/// Exactly one record exists per id at any time; the collection is ordered,
/// newest creations first. Readers take cloned snapshots — there is no
/// window where the collection is half-updated.
#[derive(Debug, Clone)]
pub struct DownloadStore {
    inner: Arc<StoreInner>,
}

impl DownloadStore {
    /// Creates a store with the default 3-second poll interval.
    #[must_use]
    pub fn new(api: ApiClient, notifier: Notifier) -> Self {
        Self::with_poll_interval(api, notifier, DOWNLOAD_POLL_INTERVAL)
    }

    /// Creates a store with an explicit poll interval (tests poll at
    /// millisecond scale).
    #[must_use]
    pub fn with_poll_interval(api: ApiClient, notifier: Notifier, poll_interval: Duration) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                api,
                notifier,
                poll_interval,
                state: Mutex::new(StoreState::default()),
                poll: Mutex::new(PollState::Idle),
            }),
        }
    }

    /// Replaces the entire local collection with the server's current list.
    ///
    /// On failure the previous collection is preserved, the error message is
    /// recorded, and an error notification is emitted.
    pub async fn fetch_downloads(&self) {
        {
            let mut state = self.inner.state();
            state.loading = true;
            state.last_error = None;
        }
        match self.inner.api.list_downloads().await {
            Ok(downloads) => {
                let mut state = self.inner.state();
                state.downloads = downloads;
                state.loading = false;
            }
            Err(e) => {
                let message = e.to_string();
                warn!(error = %e, "failed to fetch downloads");
                {
                    let mut state = self.inner.state();
                    state.last_error = Some(message.clone());
                    state.loading = false;
                }
                self.inner.notifier.error(message);
            }
        }
    }

    /// Submits one creation request.
    ///
    /// On success the returned record is prepended to the collection, a
    /// success notification is emitted, and the poll loop is started if
    /// idle. On failure an error notification is emitted and `None` is
    /// returned.
    pub async fn create_download(&self, request: CreateDownloadRequest) -> Option<Download> {
        match self.inner.api.create_download(&request).await {
            Ok(download) => {
                self.inner.state().downloads.insert(0, download.clone());
                self.inner.notifier.success("Download started successfully");
                self.start_polling();
                Some(download)
            }
            Err(e) => {
                warn!(error = %e, title = %request.title, "failed to create download");
                self.inner.notifier.error(e.to_string());
                None
            }
        }
    }

    /// Submits a single batch request.
    ///
    /// Partial failure is reported as data, never as an error for the
    /// succeeded subset. All successes are prepended (batch order preserved,
    /// ahead of existing records). Exactly one notification is emitted:
    /// all-success, all-failure, or a mixed-count warning. Polling starts
    /// when at least one item succeeded and the loop is idle.
    pub async fn create_batch(
        &self,
        requests: Vec<CreateDownloadRequest>,
    ) -> Option<BatchCreateDownloadResponse> {
        let total = requests.len();
        match self.inner.api.create_batch_downloads(requests).await {
            Ok(response) => {
                let succeeded = response.successful.len();
                let failed = response.failed.len();
                if succeeded > 0 {
                    let mut state = self.inner.state();
                    state
                        .downloads
                        .splice(0..0, response.successful.iter().cloned());
                }
                match (succeeded, failed) {
                    (_, 0) => self.inner.notifier.success(format!(
                        "Started {succeeded} download{}",
                        plural(succeeded)
                    )),
                    (0, _) => self
                        .inner
                        .notifier
                        .error(format!("Failed to start {failed} download{}", plural(failed))),
                    _ => self.inner.notifier.warning(format!(
                        "Started {succeeded} of {total} downloads; {failed} failed"
                    )),
                }
                if succeeded > 0 {
                    self.start_polling();
                }
                Some(response)
            }
            Err(e) => {
                warn!(error = %e, total, "batch create failed");
                self.inner.notifier.error(e.to_string());
                None
            }
        }
    }

    /// Requests remote cancellation.
    ///
    /// On success the record is removed from the collection entirely (not
    /// marked); on failure the collection is left untouched.
    pub async fn cancel_download(&self, id: &str) {
        match self.inner.api.cancel_download(id).await {
            Ok(()) => {
                self.inner.state().downloads.retain(|d| d.id != id);
                self.inner.notifier.success("Download cancelled");
            }
            Err(e) => {
                warn!(error = %e, id, "failed to cancel download");
                self.inner.notifier.error(e.to_string());
            }
        }
    }

    /// Requests remote organization, then immediately re-fetches to pick up
    /// the new status. No optimistic local status write.
    pub async fn organize_download(&self, id: &str) {
        match self.inner.api.organize_download(id).await {
            Ok(()) => {
                self.inner.notifier.success("Organizing download...");
                self.fetch_downloads().await;
            }
            Err(e) => {
                warn!(error = %e, id, "failed to organize download");
                self.inner.notifier.error(e.to_string());
            }
        }
    }

    /// Starts the polling loop. Idempotent: a no-op while a loop handle
    /// already exists.
    ///
    /// The loop fires one full period after start and on each tick fully
    /// re-fetches the collection (last-write-wins). Once a tick observes no
    /// record in an active status, the loop clears its own handle and exits;
    /// this condition is re-evaluated every tick. Tick errors are logged and
    /// swallowed — never surfaced as notifications — so a flaky connection
    /// cannot spam the user.
    pub fn start_polling(&self) {
        let mut poll = self.inner.poll();
        if matches!(*poll, PollState::Polling(_)) {
            return;
        }

        // The task holds only a weak reference; a task keeping its own
        // store alive could never be dropped.
        let weak = Arc::downgrade(&self.inner);
        let interval = self.inner.poll_interval;
        let handle = tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                match inner.api.list_downloads().await {
                    Ok(downloads) => {
                        let has_active = downloads.iter().any(|d| d.status.is_active());
                        inner.state().downloads = downloads;
                        if !has_active {
                            debug!("no active downloads remain, poll loop stopping");
                            *inner.poll() = PollState::Idle;
                            return;
                        }
                    }
                    Err(e) => {
                        // Explicit failure-suppression boundary for
                        // background ticks: log only, keep ticking.
                        warn!(error = %e, "poll tick failed");
                    }
                }
            }
        });
        *poll = PollState::Polling(handle);
        debug!("polling started");
    }

    /// Stops the polling loop. Idempotent: safe no-op when idle.
    pub fn stop_polling(&self) {
        let mut poll = self.inner.poll();
        if let PollState::Polling(handle) = std::mem::replace(&mut *poll, PollState::Idle) {
            handle.abort();
            debug!("polling stopped");
        }
    }

    /// True while a poll loop handle exists.
    #[must_use]
    pub fn is_polling(&self) -> bool {
        matches!(*self.inner.poll(), PollState::Polling(_))
    }

    /// Snapshot of the full collection, insertion order, newest first.
    #[must_use]
    pub fn downloads(&self) -> Vec<Download> {
        self.inner.state().downloads.clone()
    }

    /// Records in `queued | downloading | organizing`.
    #[must_use]
    pub fn active_downloads(&self) -> Vec<Download> {
        self.filtered(|d| d.status.is_active())
    }

    /// Records in `completed`.
    #[must_use]
    pub fn completed_downloads(&self) -> Vec<Download> {
        self.filtered(|d| d.status == crate::model::DownloadStatus::Completed)
    }

    /// Records in `failed`.
    #[must_use]
    pub fn failed_downloads(&self) -> Vec<Download> {
        self.filtered(|d| d.status == crate::model::DownloadStatus::Failed)
    }

    /// Message of the most recent fetch failure, if the last fetch failed.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.inner.state().last_error.clone()
    }

    /// True while a user-initiated fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.state().loading
    }

    fn filtered(&self, predicate: impl Fn(&Download) -> bool) -> Vec<Download> {
        self.inner
            .state()
            .downloads
            .iter()
            .filter(|d| predicate(d))
            .cloned()
            .collect()
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
