use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use roster_application::CreateAccountRequest;
use roster_core::{Account, AccountStore, CredentialHasher};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use super::error::AccountApiError;
use crate::http::AppState;

/// Missing fields deserialize as `None` and are reported by the service's
/// structural validation, not by the JSON extractor.
#[derive(Deserialize)]
pub struct CreateAccountBody {
    pub login: Option<String>,
    pub email: Option<String>,
    pub password: Option<Secret<String>>,
}

impl From<CreateAccountBody> for CreateAccountRequest {
    fn from(body: CreateAccountBody) -> Self {
        CreateAccountRequest {
            login: body.login.unwrap_or_default(),
            email: body.email.unwrap_or_default(),
            password: body
                .password
                .unwrap_or_else(|| Secret::new(String::new())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    pub account: Account,
}

#[tracing::instrument(name = "Create account", skip_all)]
pub async fn create_account<S, H>(
    State(state): State<AppState<S, H>>,
    headers: HeaderMap,
    body: Result<Json<CreateAccountBody>, JsonRejection>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: AccountStore + 'static,
    H: CredentialHasher + 'static,
{
    let Json(body) = body?;
    let ctx = state.request_context(&headers);

    let account = state.service.create_account(&ctx, body.into()).await?;

    Ok((StatusCode::CREATED, Json(AccountResponse { account })))
}
