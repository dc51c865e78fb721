use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

use crate::{
    dto::admin::{AdminStatistics, UserList, UserStatusResponse},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Review,
    response::ApiResult,
    services::{admin_service, review_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}/toggle-status", put(toggle_user_status))
        .route("/statistics", get(admin_statistics))
        .route("/reviews/{id}/approve", put(approve_review))
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "All users", body = ApiResult<UserList>),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_users(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResult<UserList>>> {
    Ok(Json(admin_service::list_users(&state, &user).await?))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/toggle-status",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User status toggled", body = ApiResult<UserStatusResponse>),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn toggle_user_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResult<UserStatusResponse>>> {
    Ok(Json(admin_service::toggle_user_status(&state, &user, id).await?))
}

#[utoipa::path(
    get,
    path = "/api/admin/statistics",
    responses(
        (status = 200, description = "Aggregate statistics", body = ApiResult<AdminStatistics>),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn admin_statistics(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResult<AdminStatistics>>> {
    Ok(Json(admin_service::statistics(&state, &user).await?))
}

#[utoipa::path(
    put,
    path = "/api/admin/reviews/{id}/approve",
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review approved", body = ApiResult<Review>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn approve_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResult<Review>>> {
    Ok(Json(review_service::approve_review(&state, &user, id).await?))
}
