use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Review;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    pub artwork_id: i32,
    /// 1 to 5.
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewList {
    pub items: Vec<Review>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatingDistribution {
    pub five_star: i64,
    pub four_star: i64,
    pub three_star: i64,
    pub two_star: i64,
    pub one_star: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatingSummary {
    pub artwork_id: i32,
    /// Average over approved reviews, rounded to two decimal places.
    pub average_rating: f64,
    pub review_count: i64,
    pub distribution: RatingDistribution,
}
