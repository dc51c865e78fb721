use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};

use crate::{
    dto::reviews::{CreateReviewRequest, RatingSummary, ReviewList},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Review,
    response::ApiResult,
    services::review_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_review))
        .route("/pending", get(list_pending))
        .route("/my-reviews", get(list_my_reviews))
        .route("/artwork/{artwork_id}", get(list_by_artwork))
        .route("/artwork/{artwork_id}/rating", get(rating_summary))
        .route("/{id}/approve", put(approve_review))
        .route("/{id}/reject", put(reject_review))
        .route("/{id}", delete(delete_review))
}

#[utoipa::path(
    get,
    path = "/api/reviews/artwork/{artwork_id}",
    params(("artwork_id" = i32, Path, description = "Artwork ID")),
    responses(
        (status = 200, description = "Approved reviews for artwork", body = ApiResult<ReviewList>),
        (status = 404, description = "Artwork not found")
    ),
    tag = "Reviews"
)]
pub async fn list_by_artwork(
    State(state): State<AppState>,
    Path(artwork_id): Path<i32>,
) -> AppResult<Json<ApiResult<ReviewList>>> {
    Ok(Json(review_service::list_by_artwork(&state, artwork_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/reviews/artwork/{artwork_id}/rating",
    params(("artwork_id" = i32, Path, description = "Artwork ID")),
    responses(
        (status = 200, description = "Rating summary", body = ApiResult<RatingSummary>),
        (status = 404, description = "Artwork not found")
    ),
    tag = "Reviews"
)]
pub async fn rating_summary(
    State(state): State<AppState>,
    Path(artwork_id): Path<i32>,
) -> AppResult<Json<ApiResult<RatingSummary>>> {
    Ok(Json(review_service::rating_summary(&state, artwork_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 200, description = "Create review", body = ApiResult<Review>),
        (status = 409, description = "Already reviewed this artwork")
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn create_review(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<Json<ApiResult<Review>>> {
    Ok(Json(review_service::create_review(&state, &user, payload).await?))
}

#[utoipa::path(
    get,
    path = "/api/reviews/pending",
    responses(
        (status = 200, description = "Reviews awaiting approval", body = ApiResult<ReviewList>),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn list_pending(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResult<ReviewList>>> {
    Ok(Json(review_service::list_pending(&state, &user).await?))
}

#[utoipa::path(
    get,
    path = "/api/reviews/my-reviews",
    responses(
        (status = 200, description = "Current user's reviews", body = ApiResult<ReviewList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn list_my_reviews(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResult<ReviewList>>> {
    Ok(Json(review_service::list_my_reviews(&state, &user).await?))
}

#[utoipa::path(
    put,
    path = "/api/reviews/{id}/approve",
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review approved", body = ApiResult<Review>),
        (status = 409, description = "Already approved")
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn approve_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResult<Review>>> {
    Ok(Json(review_service::approve_review(&state, &user, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/reviews/{id}/reject",
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review rejected and deleted"),
        (status = 404, description = "Review not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn reject_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResult<serde_json::Value>>> {
    Ok(Json(review_service::reject_review(&state, &user, id).await?))
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review deleted"),
        (status = 403, description = "Not the owner")
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn delete_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResult<serde_json::Value>>> {
    Ok(Json(review_service::delete_review(&state, &user, id).await?))
}
