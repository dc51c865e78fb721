use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};

use crate::{
    dto::orders::{
        CancelOrderResponse, CreateOrderRequest, OrderList, OrderStatistics, OrderWithItems,
        StatusChangeResponse, UpdateOrderStatusRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResult,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/", get(list_all_orders))
        .route("/my-orders", get(list_my_orders))
        .route("/statistics", get(order_statistics))
        .route("/status/{status}", get(list_orders_by_status))
        .route("/{id}", get(get_order))
        .route("/{id}/status", put(update_order_status))
        .route("/{id}/cancel", put(cancel_order))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Create order", body = ApiResult<OrderWithItems>),
        (status = 400, description = "Validation failed or artwork unavailable"),
        (status = 404, description = "Artwork not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<ApiResult<OrderWithItems>>> {
    Ok(Json(order_service::create_order(&state, &user, payload).await?))
}

#[utoipa::path(
    get,
    path = "/api/orders/my-orders",
    responses(
        (status = 200, description = "Current user's orders", body = ApiResult<OrderList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn list_my_orders(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResult<OrderList>>> {
    Ok(Json(order_service::list_my_orders(&state, &user).await?))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders", body = ApiResult<OrderList>),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn list_all_orders(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResult<OrderList>>> {
    Ok(Json(order_service::list_all_orders(&state, &user).await?))
}

#[utoipa::path(
    get,
    path = "/api/orders/status/{status}",
    params(("status" = String, Path, description = "Order status")),
    responses(
        (status = 200, description = "Orders by status", body = ApiResult<OrderList>),
        (status = 400, description = "Invalid status")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn list_orders_by_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(status): Path<String>,
) -> AppResult<Json<ApiResult<OrderList>>> {
    Ok(Json(
        order_service::list_orders_by_status(&state, &user, &status).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Get order", body = ApiResult<OrderWithItems>),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResult<OrderWithItems>>> {
    Ok(Json(order_service::get_order(&state, &user, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResult<StatusChangeResponse>),
        (status = 409, description = "Invalid transition")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResult<StatusChangeResponse>>> {
    Ok(Json(
        order_service::update_order_status(&state, &user, id, payload).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/cancel",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order cancelled", body = ApiResult<CancelOrderResponse>),
        (status = 409, description = "Not cancellable in its current state")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResult<CancelOrderResponse>>> {
    Ok(Json(order_service::cancel_order(&state, &user, id).await?))
}

#[utoipa::path(
    get,
    path = "/api/orders/statistics",
    responses(
        (status = 200, description = "Order statistics", body = ApiResult<OrderStatistics>),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn order_statistics(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResult<OrderStatistics>>> {
    Ok(Json(order_service::order_statistics(&state, &user).await?))
}
