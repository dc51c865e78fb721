use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::response::ApiResult;

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = ApiResult<HealthData>),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<ApiResult<HealthData>> {
    let data = HealthData {
        status: "ok".to_string(),
    };

    Json(ApiResult::success(data, "Health check"))
}
