use sea_orm::ActiveValue::NotSet;
use sea_orm::{ColumnTrait, Condition, IntoActiveModel, Set};

use crate::{
    dto::artworks::{ArtworkList, CreateArtworkRequest, UpdateArtworkRequest},
    entity::{
        Genres,
        artworks::{ActiveModel as ArtworkActive, Column as ArtworkCol, Entity as Artworks},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Artwork,
    response::ApiResult,
    state::AppState,
};

pub async fn list_artworks(state: &AppState) -> AppResult<ApiResult<ArtworkList>> {
    let items = state
        .repo::<Artworks>()
        .get_all()
        .await?
        .into_iter()
        .map(Artwork::from)
        .collect();
    Ok(ApiResult::success(
        ArtworkList { items },
        "Artworks retrieved successfully",
    ))
}

pub async fn get_artwork(state: &AppState, id: i32) -> AppResult<ApiResult<Artwork>> {
    let artwork = state
        .repo::<Artworks>()
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Artwork not found".into()))?;
    Ok(ApiResult::success(
        Artwork::from(artwork),
        "Artwork retrieved successfully",
    ))
}

pub async fn list_by_genre(state: &AppState, genre_id: i32) -> AppResult<ApiResult<ArtworkList>> {
    if !state.repo::<Genres>().exists(genre_id).await? {
        return Err(AppError::NotFound("Genre not found".into()));
    }

    let items = state
        .repo::<Artworks>()
        .find(Condition::all().add(ArtworkCol::GenreId.eq(genre_id)))
        .await?
        .into_iter()
        .map(Artwork::from)
        .collect();
    Ok(ApiResult::success(
        ArtworkList { items },
        "Artworks retrieved successfully",
    ))
}

pub async fn list_featured(state: &AppState) -> AppResult<ApiResult<ArtworkList>> {
    let items = state
        .repo::<Artworks>()
        .find(Condition::all().add(ArtworkCol::IsFeatured.eq(true)))
        .await?
        .into_iter()
        .map(Artwork::from)
        .collect();
    Ok(ApiResult::success(
        ArtworkList { items },
        "Featured artworks retrieved successfully",
    ))
}

pub async fn create_artwork(
    state: &AppState,
    user: &AuthUser,
    payload: CreateArtworkRequest,
) -> AppResult<ApiResult<Artwork>> {
    ensure_admin(user)?;

    let mut errors = Vec::new();
    if payload.title.trim().is_empty() {
        errors.push("Title is required".to_string());
    }
    if payload.price < 0 {
        errors.push("Price must not be negative".to_string());
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    if !state.repo::<Genres>().exists(payload.genre_id).await? {
        return Err(AppError::NotFound("Genre not found".into()));
    }

    let artwork = state
        .repo::<Artworks>()
        .add(ArtworkActive {
            id: NotSet,
            genre_id: Set(payload.genre_id),
            title: Set(payload.title),
            description: Set(payload.description),
            price: Set(payload.price),
            is_available: Set(payload.is_available.unwrap_or(true)),
            is_featured: Set(payload.is_featured.unwrap_or(false)),
            created_at: NotSet,
        })
        .await?;

    tracing::info!(artwork_id = artwork.id, "artwork created");
    Ok(ApiResult::success(
        Artwork::from(artwork),
        "Artwork created successfully",
    ))
}

pub async fn update_artwork(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateArtworkRequest,
) -> AppResult<ApiResult<Artwork>> {
    ensure_admin(user)?;

    let artworks = state.repo::<Artworks>();
    let existing = artworks
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Artwork not found".into()))?;

    if let Some(genre_id) = payload.genre_id {
        if !state.repo::<Genres>().exists(genre_id).await? {
            return Err(AppError::NotFound("Genre not found".into()));
        }
    }
    if let Some(price) = payload.price {
        if price < 0 {
            return Err(AppError::validation("Price must not be negative"));
        }
    }

    let mut active = existing.into_active_model();
    if let Some(genre_id) = payload.genre_id {
        active.genre_id = Set(genre_id);
    }
    if let Some(title) = payload.title {
        active.title = Set(title);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(is_available) = payload.is_available {
        active.is_available = Set(is_available);
    }
    if let Some(is_featured) = payload.is_featured {
        active.is_featured = Set(is_featured);
    }

    let artwork = artworks.update(active).await?;

    tracing::info!(artwork_id = id, "artwork updated");
    Ok(ApiResult::success(
        Artwork::from(artwork),
        "Artwork updated successfully",
    ))
}

pub async fn delete_artwork(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResult<serde_json::Value>> {
    ensure_admin(user)?;

    let deleted = state.repo::<Artworks>().delete(id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Artwork not found".into()));
    }

    tracing::info!(artwork_id = id, "artwork deleted");
    Ok(ApiResult::success(
        serde_json::json!({ "artwork_id": id }),
        "Artwork deleted successfully",
    ))
}
