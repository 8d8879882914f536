use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::HeaderMap,
};
use roster_application::GetAccountRequest;
use roster_core::{Account, AccountStore, CredentialHasher};
use serde::{Deserialize, Serialize};

use super::error::AccountApiError;
use crate::http::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GetAccountParams {
    pub id: Option<String>,
    pub login: Option<String>,
}

/// `account` is `null` when nothing matched.
#[derive(Debug, Serialize, Deserialize)]
pub struct MaybeAccountResponse {
    pub account: Option<Account>,
}

#[tracing::instrument(name = "Get account", skip_all)]
pub async fn get_account<S, H>(
    State(state): State<AppState<S, H>>,
    headers: HeaderMap,
    params: Result<Query<GetAccountParams>, QueryRejection>,
) -> Result<Json<MaybeAccountResponse>, AccountApiError>
where
    S: AccountStore + 'static,
    H: CredentialHasher + 'static,
{
    let Query(params) = params?;
    let ctx = state.request_context(&headers);

    let request = GetAccountRequest {
        id: params.id,
        login: params.login,
    };
    let account = state.service.get_account(&ctx, request).await?;

    Ok(Json(MaybeAccountResponse { account }))
}
