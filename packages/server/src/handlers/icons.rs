use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::models::icon::{IconListQuery, IconListResponse, IconResponse};
use crate::models::shared::Pagination;
use crate::services::icon_store::IconStore;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/icons",
    tag = "Icons",
    operation_id = "listIcons",
    summary = "List the caller's icons",
    description = "Returns a page of the icons the caller generated, newest first. Icons whose \
        upload failed are listed too; their URL does not resolve.",
    params(IconListQuery),
    responses(
        (status = 200, description = "Icons", body = IconListResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, query), fields(user_id = auth_user.user_id))]
pub async fn list_icons(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<IconListQuery>,
) -> Result<Json<IconListResponse>, AppError> {
    let page = Ord::max(query.page.unwrap_or(1), 1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);

    let (icons, total) = IconStore::new(&state.db)
        .page_for_user(auth_user.user_id, page, per_page)
        .await?;

    let data = icons
        .into_iter()
        .map(|icon| IconResponse {
            image_url: state.storage.public_url(&icon.id.to_string()),
            id: icon.id,
            prompt: icon.prompt,
            created_at: icon.created_at,
        })
        .collect();

    Ok(Json(IconListResponse {
        data,
        pagination: Pagination::new(page, per_page, total),
    }))
}
