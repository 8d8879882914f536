use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use roster_adapters::http::{
    AppState,
    routes::{create_account, find_accounts_by_email, get_account, verify_password},
};
use roster_application::AccountService;
use roster_core::{AccountStore, CredentialHasher};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP front end for the account service.
pub struct AccountsServer {
    router: Router,
}

impl AccountsServer {
    /// Mount the account routes over `service`.
    ///
    /// `request_timeout` bounds every request; zero disables the deadline.
    pub fn new<S, H>(service: AccountService<S, H>, request_timeout: Duration) -> Self
    where
        S: AccountStore + 'static,
        H: CredentialHasher + 'static,
    {
        let state = AppState::new(service, request_timeout);

        let router = Router::new()
            .route("/accounts", post(create_account::<S, H>).get(get_account::<S, H>))
            .route("/accounts/by-email", get(find_accounts_by_email::<S, H>))
            .route("/accounts/verify-password", post(verify_password::<S, H>))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert into a router that can be nested into another application.
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Serve until ctrl-c. In-flight requests finish before returning.
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Accounts service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
