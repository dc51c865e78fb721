use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Order, OrderItem};

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderItemRequest {
    pub artwork_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub shipping_address: String,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderStatistics {
    pub total_orders: i64,
    pub pending_orders: i64,
    pub processing_orders: i64,
    pub shipped_orders: i64,
    pub delivered_orders: i64,
    pub cancelled_orders: i64,
    /// Sum of delivered order totals, in cents.
    pub total_revenue: i64,
    pub average_order_value: i64,
    pub orders_last_30_days: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CancelOrderResponse {
    pub order_id: i32,
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusChangeResponse {
    pub order_id: i32,
    pub previous_status: String,
    pub new_status: String,
}
