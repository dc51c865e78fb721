use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, Condition, IntoActiveModel, Set};

use crate::{
    dto::genres::{CreateGenreRequest, GenreList, GenreStatistics},
    entity::{
        artworks::Column as ArtworkCol,
        genres::{ActiveModel as GenreActive, Column as GenreCol, Entity as Genres},
        Artworks,
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Genre,
    response::ApiResult,
    state::AppState,
};

pub async fn list_genres(state: &AppState) -> AppResult<ApiResult<GenreList>> {
    let items = state
        .repo::<Genres>()
        .get_all()
        .await?
        .into_iter()
        .map(Genre::from)
        .collect();
    Ok(ApiResult::success(
        GenreList { items },
        "Genres retrieved successfully",
    ))
}

pub async fn list_active_genres(state: &AppState) -> AppResult<ApiResult<GenreList>> {
    let items = state
        .repo::<Genres>()
        .find(Condition::all().add(GenreCol::IsActive.eq(true)))
        .await?
        .into_iter()
        .map(Genre::from)
        .collect();
    Ok(ApiResult::success(
        GenreList { items },
        "Active genres retrieved successfully",
    ))
}

pub async fn get_genre(state: &AppState, id: i32) -> AppResult<ApiResult<Genre>> {
    let genre = state
        .repo::<Genres>()
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Genre not found".into()))?;
    Ok(ApiResult::success(
        Genre::from(genre),
        "Genre retrieved successfully",
    ))
}

pub async fn create_genre(
    state: &AppState,
    user: &AuthUser,
    payload: CreateGenreRequest,
) -> AppResult<ApiResult<Genre>> {
    ensure_admin(user)?;
    validate_name(&payload.name)?;

    let genres = state.repo::<Genres>();
    ensure_unique_name(state, &payload.name, None).await?;

    let genre = genres
        .add(GenreActive {
            id: NotSet,
            name: Set(payload.name),
            description: Set(payload.description),
            is_active: Set(payload.is_active.unwrap_or(true)),
            created_at: NotSet,
        })
        .await?;

    tracing::info!(genre_id = genre.id, "genre created");
    Ok(ApiResult::success(
        Genre::from(genre),
        "Genre created successfully",
    ))
}

pub async fn update_genre(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: CreateGenreRequest,
) -> AppResult<ApiResult<Genre>> {
    ensure_admin(user)?;
    validate_name(&payload.name)?;

    let genres = state.repo::<Genres>();
    let existing = genres
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Genre not found".into()))?;

    ensure_unique_name(state, &payload.name, Some(id)).await?;

    let mut active = existing.into_active_model();
    active.name = Set(payload.name);
    active.description = Set(payload.description);
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    let genre = genres.update(active).await?;

    tracing::info!(genre_id = id, "genre updated");
    Ok(ApiResult::success(
        Genre::from(genre),
        "Genre updated successfully",
    ))
}

/// Deletion is refused while any artwork still references the genre.
pub async fn delete_genre(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResult<serde_json::Value>> {
    ensure_admin(user)?;

    let genres = state.repo::<Genres>();
    if !genres.exists(id).await? {
        return Err(AppError::NotFound("Genre not found".into()));
    }

    let artworks = state
        .repo::<Artworks>()
        .find(Condition::all().add(ArtworkCol::GenreId.eq(id)))
        .await?;
    if !artworks.is_empty() {
        return Err(AppError::Conflict(format!(
            "Cannot delete genre. It has {} associated artworks.",
            artworks.len()
        )));
    }

    genres.delete(id).await?;
    tracing::info!(genre_id = id, "genre deleted");
    Ok(ApiResult::success(
        serde_json::json!({ "genre_id": id }),
        "Genre deleted successfully",
    ))
}

pub async fn genre_statistics(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResult<GenreStatistics>> {
    ensure_admin(user)?;

    let genre = state
        .repo::<Genres>()
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Genre not found".into()))?;

    let artworks = state
        .repo::<Artworks>()
        .find(Condition::all().add(ArtworkCol::GenreId.eq(id)))
        .await?;

    let total = artworks.len() as i64;
    let stats = GenreStatistics {
        genre_id: id,
        genre_name: genre.name,
        total_artworks: total,
        available_artworks: artworks.iter().filter(|a| a.is_available).count() as i64,
        featured_artworks: artworks.iter().filter(|a| a.is_featured).count() as i64,
        average_price: if total > 0 {
            artworks.iter().map(|a| a.price).sum::<i64>() / total
        } else {
            0
        },
        min_price: artworks.iter().map(|a| a.price).min().unwrap_or(0),
        max_price: artworks.iter().map(|a| a.price).max().unwrap_or(0),
    };

    Ok(ApiResult::success(
        stats,
        "Genre statistics retrieved successfully",
    ))
}

fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Genre name is required"));
    }
    if name.len() > 100 {
        return Err(AppError::validation(
            "Genre name must be at most 100 characters",
        ));
    }
    Ok(())
}

/// Case-insensitive uniqueness; `exclude_id` skips the genre being updated.
/// Compares with `lower() =` rather than a LIKE pattern so `%` and `_` in
/// names match literally.
async fn ensure_unique_name(
    state: &AppState,
    name: &str,
    exclude_id: Option<i32>,
) -> AppResult<()> {
    let mut condition = Condition::all()
        .add(Expr::expr(Func::lower(Expr::col(GenreCol::Name))).eq(name.to_lowercase()));
    if let Some(id) = exclude_id {
        condition = condition.add(GenreCol::Id.ne(id));
    }

    let clashing = state.repo::<Genres>().find(condition).await?;
    if !clashing.is_empty() {
        return Err(AppError::Conflict(
            "Genre with this name already exists".into(),
        ));
    }
    Ok(())
}
