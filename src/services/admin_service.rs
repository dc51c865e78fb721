use sea_orm::{ColumnTrait, Condition, IntoActiveModel, Set};

use crate::{
    dto::admin::{AdminStatistics, UserList, UserStatusResponse},
    entity::{
        Orders,
        reviews::{Column as ReviewCol, Entity as Reviews},
        users::Entity as Users,
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::User,
    response::ApiResult,
    state::AppState,
};

pub async fn list_users(state: &AppState, user: &AuthUser) -> AppResult<ApiResult<UserList>> {
    ensure_admin(user)?;

    let items = state
        .repo::<Users>()
        .get_all()
        .await?
        .into_iter()
        .map(User::from)
        .collect();
    Ok(ApiResult::success(
        UserList { items },
        "Users retrieved successfully",
    ))
}

/// Flip the active flag. Deactivated users keep their data but can no
/// longer log in or place orders.
pub async fn toggle_user_status(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResult<UserStatusResponse>> {
    ensure_admin(user)?;

    let users = state.repo::<Users>();
    let target = users
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    let new_state = !target.is_active;
    let mut active = target.into_active_model();
    active.is_active = Set(new_state);
    users.update(active).await?;

    tracing::info!(user_id = id, is_active = new_state, "user status toggled");
    Ok(ApiResult::success(
        UserStatusResponse {
            user_id: id,
            is_active: new_state,
        },
        "User status updated",
    ))
}

pub async fn statistics(state: &AppState, user: &AuthUser) -> AppResult<ApiResult<AdminStatistics>> {
    ensure_admin(user)?;

    let total_users = state.repo::<Users>().get_all().await?.len() as i64;
    let total_orders = state.repo::<Orders>().get_all().await?.len() as i64;
    let pending_reviews = state
        .repo::<Reviews>()
        .find(Condition::all().add(ReviewCol::IsApproved.eq(false)))
        .await?
        .len() as i64;

    Ok(ApiResult::success(
        AdminStatistics {
            total_users,
            total_orders,
            pending_reviews,
        },
        "Statistics retrieved successfully",
    ))
}
