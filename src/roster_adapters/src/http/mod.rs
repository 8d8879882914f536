pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::http::HeaderMap;
use roster_application::AccountService;
use roster_core::RequestContext;
use tokio::time::Instant;

use crate::config::REQUEST_TIMEOUT_HEADER;

/// Shared handler state: the account service and the per-request deadline.
pub struct AppState<S, H> {
    pub service: Arc<AccountService<S, H>>,
    request_timeout: Option<Duration>,
}

impl<S, H> Clone for AppState<S, H> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            request_timeout: self.request_timeout,
        }
    }
}

impl<S, H> AppState<S, H> {
    /// A zero `request_timeout` disables the deadline.
    pub fn new(service: AccountService<S, H>, request_timeout: Duration) -> Self {
        Self {
            service: Arc::new(service),
            request_timeout: (!request_timeout.is_zero()).then_some(request_timeout),
        }
    }

    /// Build the context for one request.
    ///
    /// Client disconnects drop the handler future, which cancels any store
    /// call in flight; the context only has to carry the deadline.
    pub fn request_context(&self, headers: &HeaderMap) -> RequestContext {
        let requested = headers
            .get(REQUEST_TIMEOUT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_millis);

        let now = Instant::now();
        [self.request_timeout, requested]
            .into_iter()
            .flatten()
            .fold(RequestContext::new(), |ctx, timeout| {
                ctx.with_deadline(now + timeout)
            })
    }
}
