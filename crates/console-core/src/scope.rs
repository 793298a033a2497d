//! Request Scopes
//!
//! A view owns a scope and routes every request it issues through it. When
//! the view is torn down the scope is cancelled: pending requests resolve to
//! `ApiError::Aborted` and their results never reach view state.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{AbortHandle, Abortable};

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Default)]
struct ScopeState {
    closed: bool,
    next_id: u64,
    pending: Vec<(u64, AbortHandle)>,
}

#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    state: Arc<Mutex<ScopeState>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut ScopeState) -> T) -> T {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Drive `request` unless the scope is cancelled first
    pub async fn run<T, F>(&self, request: F) -> ApiResult<T>
    where
        F: Future<Output = ApiResult<T>>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let id = self.with_state(|s| {
            if s.closed {
                return None;
            }
            let id = s.next_id;
            s.next_id += 1;
            s.pending.push((id, handle));
            Some(id)
        });
        let Some(id) = id else {
            return Err(ApiError::Aborted);
        };

        let outcome = Abortable::new(request, registration).await;

        let closed = self.with_state(|s| {
            s.pending.retain(|(pending, _)| *pending != id);
            s.closed
        });
        match outcome {
            // A response that lands in the same tick as the teardown is dropped too
            Ok(_) if closed => Err(ApiError::Aborted),
            Ok(result) => result,
            Err(_) => Err(ApiError::Aborted),
        }
    }

    /// Abort every pending request and refuse new ones
    pub fn cancel_all(&self) {
        self.abort_pending(true);
    }

    /// Abort what is in flight but keep accepting requests, e.g. when a
    /// dialog closes while its view stays mounted
    pub fn cancel_pending(&self) {
        self.abort_pending(false);
    }

    fn abort_pending(&self, close: bool) {
        let pending = self.with_state(|s| {
            s.closed |= close;
            std::mem::take(&mut s.pending)
        });
        if !pending.is_empty() {
            log::debug!("[SCOPE] aborting {} pending request(s)", pending.len());
        }
        for (_, handle) in pending {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.with_state(|s| s.closed)
    }

    pub fn pending(&self) -> usize {
        self.with_state(|s| s.pending.len())
    }
}
