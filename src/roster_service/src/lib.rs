mod accounts_server;
mod helpers;
mod tracing;

pub use accounts_server::AccountsServer;
pub use helpers::{configure_postgresql, configure_redis};
pub use crate::tracing::{init_tracing, make_span_with_request_id, on_request, on_response};
