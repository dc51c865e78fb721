use sea_orm::ActiveValue::NotSet;
use sea_orm::{ColumnTrait, Condition, IntoActiveModel, Set};

use crate::{
    dto::reviews::{CreateReviewRequest, RatingDistribution, RatingSummary, ReviewList},
    entity::{
        Artworks, Users,
        reviews::{ActiveModel as ReviewActive, Column as ReviewCol, Entity as Reviews},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Review,
    response::ApiResult,
    state::AppState,
};

/// Approved reviews for an artwork, newest first. Unapproved reviews are
/// only reachable through `list_my_reviews` and the admin pending queue.
pub async fn list_by_artwork(
    state: &AppState,
    artwork_id: i32,
) -> AppResult<ApiResult<ReviewList>> {
    if !state.repo::<Artworks>().exists(artwork_id).await? {
        return Err(AppError::NotFound("Artwork not found".into()));
    }

    let mut reviews = state
        .repo::<Reviews>()
        .find(
            Condition::all()
                .add(ReviewCol::ArtworkId.eq(artwork_id))
                .add(ReviewCol::IsApproved.eq(true)),
        )
        .await?;
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let items = reviews.into_iter().map(Review::from).collect();
    Ok(ApiResult::success(
        ReviewList { items },
        "Reviews retrieved successfully",
    ))
}

pub async fn rating_summary(
    state: &AppState,
    artwork_id: i32,
) -> AppResult<ApiResult<RatingSummary>> {
    if !state.repo::<Artworks>().exists(artwork_id).await? {
        return Err(AppError::NotFound("Artwork not found".into()));
    }

    let approved = state
        .repo::<Reviews>()
        .find(
            Condition::all()
                .add(ReviewCol::ArtworkId.eq(artwork_id))
                .add(ReviewCol::IsApproved.eq(true)),
        )
        .await?;

    let count_stars = |stars: i32| approved.iter().filter(|r| r.rating == stars).count() as i64;
    let review_count = approved.len() as i64;
    let average = if review_count > 0 {
        let sum: i64 = approved.iter().map(|r| i64::from(r.rating)).sum();
        round2(sum as f64 / review_count as f64)
    } else {
        0.0
    };

    let summary = RatingSummary {
        artwork_id,
        average_rating: average,
        review_count,
        distribution: RatingDistribution {
            five_star: count_stars(5),
            four_star: count_stars(4),
            three_star: count_stars(3),
            two_star: count_stars(2),
            one_star: count_stars(1),
        },
    };

    Ok(ApiResult::success(
        summary,
        "Rating information retrieved successfully",
    ))
}

/// New reviews always start unapproved; one review per (user, artwork).
pub async fn create_review(
    state: &AppState,
    user: &AuthUser,
    payload: CreateReviewRequest,
) -> AppResult<ApiResult<Review>> {
    if !(1..=5).contains(&payload.rating) {
        return Err(AppError::validation("Rating must be between 1 and 5"));
    }

    let requester = state.repo::<Users>().get_by_id(user.user_id).await?;
    if !requester.is_some_and(|u| u.is_active) {
        return Err(AppError::Forbidden("User account is not active".into()));
    }

    if !state.repo::<Artworks>().exists(payload.artwork_id).await? {
        return Err(AppError::NotFound("Artwork not found".into()));
    }

    let reviews = state.repo::<Reviews>();
    let existing = reviews
        .find(
            Condition::all()
                .add(ReviewCol::UserId.eq(user.user_id))
                .add(ReviewCol::ArtworkId.eq(payload.artwork_id)),
        )
        .await?;
    if !existing.is_empty() {
        return Err(AppError::Conflict(
            "You have already reviewed this artwork".into(),
        ));
    }

    let review = reviews
        .add(ReviewActive {
            id: NotSet,
            user_id: Set(user.user_id),
            artwork_id: Set(payload.artwork_id),
            rating: Set(payload.rating),
            comment: Set(payload.comment.map(|c| c.trim().to_string())),
            is_approved: Set(false),
            created_at: NotSet,
        })
        .await?;

    tracing::info!(
        review_id = review.id,
        user_id = user.user_id,
        artwork_id = review.artwork_id,
        "review created"
    );
    Ok(ApiResult::success(
        Review::from(review),
        "Review created successfully and is pending approval",
    ))
}

pub async fn list_pending(state: &AppState, user: &AuthUser) -> AppResult<ApiResult<ReviewList>> {
    ensure_admin(user)?;

    let mut reviews = state
        .repo::<Reviews>()
        .find(Condition::all().add(ReviewCol::IsApproved.eq(false)))
        .await?;
    reviews.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    let items = reviews.into_iter().map(Review::from).collect();
    Ok(ApiResult::success(
        ReviewList { items },
        "Pending reviews retrieved successfully",
    ))
}

pub async fn list_my_reviews(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResult<ReviewList>> {
    let mut reviews = state
        .repo::<Reviews>()
        .find(Condition::all().add(ReviewCol::UserId.eq(user.user_id)))
        .await?;
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let items = reviews.into_iter().map(Review::from).collect();
    Ok(ApiResult::success(
        ReviewList { items },
        "Your reviews retrieved successfully",
    ))
}

/// One-way flip; approving twice fails.
pub async fn approve_review(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResult<Review>> {
    ensure_admin(user)?;

    let reviews = state.repo::<Reviews>();
    let review = reviews
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Review not found".into()))?;

    if review.is_approved {
        return Err(AppError::Conflict("Review is already approved".into()));
    }

    let mut active = review.into_active_model();
    active.is_approved = Set(true);
    let review = reviews.update(active).await?;

    tracing::info!(review_id = id, "review approved");
    Ok(ApiResult::success(
        Review::from(review),
        "Review approved successfully",
    ))
}

/// Rejection deletes outright; there is no rejected-but-retained state.
pub async fn reject_review(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResult<serde_json::Value>> {
    ensure_admin(user)?;

    let reviews = state.repo::<Reviews>();
    if !reviews.exists(id).await? {
        return Err(AppError::NotFound("Review not found".into()));
    }
    reviews.delete(id).await?;

    tracing::info!(review_id = id, "review rejected and deleted");
    Ok(ApiResult::success(
        serde_json::json!({ "review_id": id }),
        "Review rejected and deleted successfully",
    ))
}

/// Owners may delete their own review in any state; admins may delete any.
pub async fn delete_review(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResult<serde_json::Value>> {
    let reviews = state.repo::<Reviews>();
    let review = reviews
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Review not found".into()))?;

    if review.user_id != user.user_id && !user.is_admin() {
        return Err(AppError::Forbidden(
            "You can only delete your own reviews".into(),
        ));
    }
    reviews.delete(id).await?;

    tracing::info!(review_id = id, user_id = user.user_id, "review deleted");
    Ok(ApiResult::success(
        serde_json::json!({ "review_id": id }),
        "Review deleted successfully",
    ))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
