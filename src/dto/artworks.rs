use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Artwork;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArtworkRequest {
    pub genre_id: i32,
    pub title: String,
    pub description: Option<String>,
    /// Fixed-point cents.
    pub price: i64,
    pub is_available: Option<bool>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArtworkRequest {
    pub genre_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub is_available: Option<bool>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtworkList {
    pub items: Vec<Artwork>,
}
