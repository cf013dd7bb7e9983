//! Shared-secret authentication extractor for the write path.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use lotwatch_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the pre-shared key on write requests.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Authenticated write-path marker extracted from the `x-api-key` header.
///
/// When a shared secret is configured (`API_KEY`), the header must match it
/// exactly; missing or mismatched keys are rejected with 401. When no secret
/// is configured the check is disabled and every request passes — fail-open
/// by design, documented on [`lotwatch_core::config::EngineConfig`].
///
/// Use as an extractor parameter in any handler that requires it:
///
/// ```ignore
/// async fn my_handler(_auth: ApiKeyAuth) -> AppResult<Json<()>> { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ApiKeyAuth;

impl FromRequestParts<AppState> for ApiKeyAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(secret) = state.config.engine.api_key.as_deref() else {
            return Ok(ApiKeyAuth);
        };

        let provided = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Auth(format!(
                    "Missing {API_KEY_HEADER} header"
                )))
            })?;

        if provided != secret {
            return Err(AppError::Core(CoreError::Auth("Invalid API key".into())));
        }

        Ok(ApiKeyAuth)
    }
}
