use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::shared::Pagination;

/// One generated icon owned by the caller.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IconResponse {
    pub id: Uuid,
    #[schema(example = "a red fox")]
    pub prompt: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// One page of the caller's icons, newest first.
#[derive(Serialize, utoipa::ToSchema)]
pub struct IconListResponse {
    pub data: Vec<IconResponse>,
    pub pagination: Pagination,
}

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IconListQuery {
    /// Page number (1-based). Default: 1.
    pub page: Option<u64>,
    /// Icons per page (1-100). Default: 20.
    pub per_page: Option<u64>,
}

/// The caller's credit balance.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CreditsResponse {
    #[schema(example = 3)]
    pub credits: i32,
}
