use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};

use crate::{
    dto::genres::{CreateGenreRequest, GenreList, GenreStatistics},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Genre,
    response::ApiResult,
    services::genre_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_genres))
        .route("/", post(create_genre))
        .route("/active", get(list_active_genres))
        .route("/{id}", get(get_genre))
        .route("/{id}", put(update_genre))
        .route("/{id}", delete(delete_genre))
        .route("/{id}/statistics", get(genre_statistics))
}

#[utoipa::path(
    get,
    path = "/api/genres",
    responses(
        (status = 200, description = "List genres", body = ApiResult<GenreList>)
    ),
    tag = "Genres"
)]
pub async fn list_genres(State(state): State<AppState>) -> AppResult<Json<ApiResult<GenreList>>> {
    Ok(Json(genre_service::list_genres(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/genres/active",
    responses(
        (status = 200, description = "List active genres", body = ApiResult<GenreList>)
    ),
    tag = "Genres"
)]
pub async fn list_active_genres(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResult<GenreList>>> {
    Ok(Json(genre_service::list_active_genres(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/genres/{id}",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Get genre", body = ApiResult<Genre>),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResult<Genre>>> {
    Ok(Json(genre_service::get_genre(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/genres",
    request_body = CreateGenreRequest,
    responses(
        (status = 200, description = "Create genre", body = ApiResult<Genre>),
        (status = 409, description = "Duplicate genre name")
    ),
    security(("bearer_auth" = [])),
    tag = "Genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateGenreRequest>,
) -> AppResult<Json<ApiResult<Genre>>> {
    Ok(Json(genre_service::create_genre(&state, &user, payload).await?))
}

#[utoipa::path(
    put,
    path = "/api/genres/{id}",
    params(("id" = i32, Path, description = "Genre ID")),
    request_body = CreateGenreRequest,
    responses(
        (status = 200, description = "Update genre", body = ApiResult<Genre>)
    ),
    security(("bearer_auth" = [])),
    tag = "Genres"
)]
pub async fn update_genre(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<CreateGenreRequest>,
) -> AppResult<Json<ApiResult<Genre>>> {
    Ok(Json(
        genre_service::update_genre(&state, &user, id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/genres/{id}",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Delete genre"),
        (status = 409, description = "Genre still has artworks")
    ),
    security(("bearer_auth" = [])),
    tag = "Genres"
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResult<serde_json::Value>>> {
    Ok(Json(genre_service::delete_genre(&state, &user, id).await?))
}

#[utoipa::path(
    get,
    path = "/api/genres/{id}/statistics",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre statistics", body = ApiResult<GenreStatistics>)
    ),
    security(("bearer_auth" = [])),
    tag = "Genres"
)]
pub async fn genre_statistics(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResult<GenreStatistics>>> {
    Ok(Json(genre_service::genre_statistics(&state, &user, id).await?))
}
