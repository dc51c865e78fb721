use serde::Serialize;
use utoipa::ToSchema;

use crate::models::User;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserList {
    pub items: Vec<User>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserStatusResponse {
    pub user_id: i32,
    pub is_active: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminStatistics {
    pub total_users: i64,
    pub total_orders: i64,
    pub pending_reviews: i64,
}
