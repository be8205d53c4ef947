use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::generate::{
    GenerateIconRequest, GenerateIconResponse, validate_generate_request,
};
use crate::services::generate::IconGenerationService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/icon",
    tag = "Generate",
    operation_id = "generateIcon",
    summary = "Spend one credit to generate an icon",
    description = "Spends one credit, generates a 512x512 image for the prompt, records the icon \
        and uploads the image under the icon's ID. Failures after the credit is spent do not \
        refund it, and a failed upload leaves the icon record in place.",
    request_body = GenerateIconRequest,
    responses(
        (status = 200, description = "Icon generated", body = GenerateIconResponse),
        (status = 400, description = "No credits left (BAD_REQUEST) or bad prompt (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 502, description = "Upstream failure (GENERATION_FAILED, STORAGE_FAILED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = auth_user.user_id))]
pub async fn generate_icon(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<GenerateIconRequest>,
) -> Result<Json<GenerateIconResponse>, AppError> {
    let prompt = validate_generate_request(&payload)?;

    let generated =
        IconGenerationService::new(&state.db, state.images.as_ref(), state.storage.as_ref())
            .generate_icon(auth_user.user_id, prompt)
            .await?;

    Ok(Json(GenerateIconResponse {
        image_url: generated.image_url,
        icon_id: generated.icon.id,
    }))
}
