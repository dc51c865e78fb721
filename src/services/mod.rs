pub mod admin_service;
pub mod artwork_service;
pub mod auth_service;
pub mod genre_service;
pub mod order_service;
pub mod review_service;
