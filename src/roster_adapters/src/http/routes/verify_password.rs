use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use roster_application::VerifyPasswordRequest;
use roster_core::{AccountStore, CredentialHasher};
use secrecy::Secret;
use serde::Deserialize;

use super::error::AccountApiError;
use crate::http::AppState;

#[derive(Deserialize)]
pub struct VerifyPasswordBody {
    pub id: Option<String>,
    pub login: Option<String>,
    pub password: Option<Secret<String>>,
}

impl From<VerifyPasswordBody> for VerifyPasswordRequest {
    fn from(body: VerifyPasswordBody) -> Self {
        VerifyPasswordRequest {
            id: body.id,
            login: body.login,
            password: body
                .password
                .unwrap_or_else(|| Secret::new(String::new())),
        }
    }
}

#[tracing::instrument(name = "Verify password", skip_all)]
pub async fn verify_password<S, H>(
    State(state): State<AppState<S, H>>,
    headers: HeaderMap,
    body: Result<Json<VerifyPasswordBody>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AccountApiError>
where
    S: AccountStore + 'static,
    H: CredentialHasher + 'static,
{
    let Json(body) = body?;
    let ctx = state.request_context(&headers);

    state.service.verify_password(&ctx, body.into()).await?;

    Ok(Json(serde_json::json!({})))
}
