use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod artworks;
pub mod auth;
pub mod doc;
pub mod genres;
pub mod health;
pub mod orders;
pub mod reviews;

// Build the API router without binding state; it is provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/genres", genres::router())
        .nest("/artworks", artworks::router())
        .nest("/orders", orders::router())
        .nest("/reviews", reviews::router())
        .nest("/admin", admin::router())
}
