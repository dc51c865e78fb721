use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        admin::{AdminStatistics, UserList, UserStatusResponse},
        artworks::{ArtworkList, CreateArtworkRequest, UpdateArtworkRequest},
        auth::{LoginRequest, LoginResponse, RegisterRequest},
        genres::{CreateGenreRequest, GenreList, GenreStatistics},
        orders::{
            CancelOrderResponse, CreateOrderRequest, OrderItemRequest, OrderList, OrderStatistics,
            OrderWithItems, StatusChangeResponse, UpdateOrderStatusRequest,
        },
        reviews::{CreateReviewRequest, RatingDistribution, RatingSummary, ReviewList},
    },
    models::{Artwork, Genre, Order, OrderItem, Review, User},
    response::ApiResult,
    routes::{admin, artworks, auth, genres, health, orders, reviews},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        auth::me,
        genres::list_genres,
        genres::list_active_genres,
        genres::get_genre,
        genres::create_genre,
        genres::update_genre,
        genres::delete_genre,
        genres::genre_statistics,
        artworks::list_artworks,
        artworks::list_featured,
        artworks::list_by_genre,
        artworks::get_artwork,
        artworks::create_artwork,
        artworks::update_artwork,
        artworks::delete_artwork,
        orders::create_order,
        orders::list_my_orders,
        orders::list_all_orders,
        orders::list_orders_by_status,
        orders::get_order,
        orders::update_order_status,
        orders::cancel_order,
        orders::order_statistics,
        reviews::list_by_artwork,
        reviews::rating_summary,
        reviews::create_review,
        reviews::list_pending,
        reviews::list_my_reviews,
        reviews::approve_review,
        reviews::reject_review,
        reviews::delete_review,
        admin::list_users,
        admin::toggle_user_status,
        admin::admin_statistics,
        admin::approve_review
    ),
    components(
        schemas(
            User,
            Genre,
            Artwork,
            Order,
            OrderItem,
            Review,
            LoginRequest,
            LoginResponse,
            RegisterRequest,
            CreateGenreRequest,
            GenreList,
            GenreStatistics,
            CreateArtworkRequest,
            UpdateArtworkRequest,
            ArtworkList,
            CreateOrderRequest,
            OrderItemRequest,
            UpdateOrderStatusRequest,
            OrderList,
            OrderWithItems,
            OrderStatistics,
            CancelOrderResponse,
            StatusChangeResponse,
            CreateReviewRequest,
            ReviewList,
            RatingSummary,
            RatingDistribution,
            UserList,
            UserStatusResponse,
            AdminStatistics,
            ApiResult<User>,
            ApiResult<Genre>,
            ApiResult<Artwork>,
            ApiResult<OrderWithItems>,
            ApiResult<OrderList>,
            ApiResult<ReviewList>,
            ApiResult<RatingSummary>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Genres", description = "Genre endpoints"),
        (name = "Artworks", description = "Artwork catalog endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Reviews", description = "Review endpoints"),
        (name = "Admin", description = "Admin endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
