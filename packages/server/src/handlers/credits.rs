use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::models::icon::CreditsResponse;
use crate::services::ledger::CreditLedger;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/credits",
    tag = "Credits",
    operation_id = "getCredits",
    summary = "Current credit balance",
    responses(
        (status = 200, description = "Balance", body = CreditsResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Account no longer exists (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id))]
pub async fn get_credits(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<CreditsResponse>, AppError> {
    let credits = CreditLedger::new(&state.db)
        .balance(auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(Json(CreditsResponse { credits }))
}
