pub mod admin;
pub mod artworks;
pub mod auth;
pub mod genres;
pub mod orders;
pub mod reviews;
