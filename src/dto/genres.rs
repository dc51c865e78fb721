use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Genre;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGenreRequest {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreList {
    pub items: Vec<Genre>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreStatistics {
    pub genre_id: i32,
    pub genre_name: String,
    pub total_artworks: i64,
    pub available_artworks: i64,
    pub featured_artworks: i64,
    pub average_price: i64,
    pub min_price: i64,
    pub max_price: i64,
}
