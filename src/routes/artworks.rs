use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};

use crate::{
    dto::artworks::{ArtworkList, CreateArtworkRequest, UpdateArtworkRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Artwork,
    response::ApiResult,
    services::artwork_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_artworks))
        .route("/", post(create_artwork))
        .route("/featured", get(list_featured))
        .route("/genre/{genre_id}", get(list_by_genre))
        .route("/{id}", get(get_artwork))
        .route("/{id}", put(update_artwork))
        .route("/{id}", delete(delete_artwork))
}

#[utoipa::path(
    get,
    path = "/api/artworks",
    responses(
        (status = 200, description = "List artworks", body = ApiResult<ArtworkList>)
    ),
    tag = "Artworks"
)]
pub async fn list_artworks(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResult<ArtworkList>>> {
    Ok(Json(artwork_service::list_artworks(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/artworks/featured",
    responses(
        (status = 200, description = "Featured artworks", body = ApiResult<ArtworkList>)
    ),
    tag = "Artworks"
)]
pub async fn list_featured(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResult<ArtworkList>>> {
    Ok(Json(artwork_service::list_featured(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/artworks/genre/{genre_id}",
    params(("genre_id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Artworks in genre", body = ApiResult<ArtworkList>),
        (status = 404, description = "Genre not found")
    ),
    tag = "Artworks"
)]
pub async fn list_by_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<i32>,
) -> AppResult<Json<ApiResult<ArtworkList>>> {
    Ok(Json(artwork_service::list_by_genre(&state, genre_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/artworks/{id}",
    params(("id" = i32, Path, description = "Artwork ID")),
    responses(
        (status = 200, description = "Get artwork", body = ApiResult<Artwork>),
        (status = 404, description = "Artwork not found")
    ),
    tag = "Artworks"
)]
pub async fn get_artwork(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResult<Artwork>>> {
    Ok(Json(artwork_service::get_artwork(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/artworks",
    request_body = CreateArtworkRequest,
    responses(
        (status = 200, description = "Create artwork", body = ApiResult<Artwork>)
    ),
    security(("bearer_auth" = [])),
    tag = "Artworks"
)]
pub async fn create_artwork(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateArtworkRequest>,
) -> AppResult<Json<ApiResult<Artwork>>> {
    Ok(Json(
        artwork_service::create_artwork(&state, &user, payload).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/artworks/{id}",
    params(("id" = i32, Path, description = "Artwork ID")),
    request_body = UpdateArtworkRequest,
    responses(
        (status = 200, description = "Update artwork", body = ApiResult<Artwork>)
    ),
    security(("bearer_auth" = [])),
    tag = "Artworks"
)]
pub async fn update_artwork(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateArtworkRequest>,
) -> AppResult<Json<ApiResult<Artwork>>> {
    Ok(Json(
        artwork_service::update_artwork(&state, &user, id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/artworks/{id}",
    params(("id" = i32, Path, description = "Artwork ID")),
    responses(
        (status = 200, description = "Delete artwork"),
        (status = 404, description = "Artwork not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Artworks"
)]
pub async fn delete_artwork(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResult<serde_json::Value>>> {
    Ok(Json(artwork_service::delete_artwork(&state, &user, id).await?))
}
