use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::HeaderMap,
};
use roster_core::{Account, AccountStore, CredentialHasher};
use serde::{Deserialize, Serialize};

use super::error::AccountApiError;
use crate::http::AppState;

#[derive(Debug, Deserialize)]
pub struct FindAccountsByEmailParams {
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountsResponse {
    pub accounts: Vec<Account>,
}

#[tracing::instrument(name = "Find accounts by email", skip_all)]
pub async fn find_accounts_by_email<S, H>(
    State(state): State<AppState<S, H>>,
    headers: HeaderMap,
    params: Result<Query<FindAccountsByEmailParams>, QueryRejection>,
) -> Result<Json<AccountsResponse>, AccountApiError>
where
    S: AccountStore + 'static,
    H: CredentialHasher + 'static,
{
    let Query(params) = params?;
    let ctx = state.request_context(&headers);

    let accounts = state
        .service
        .find_accounts_by_email(&ctx, params.email.unwrap_or_default())
        .await?;

    Ok(Json(AccountsResponse { accounts }))
}
