use chrono::{Duration, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, IntoActiveModel, Set, TransactionTrait,
};

use crate::{
    dto::orders::{
        CancelOrderResponse, CreateOrderRequest, OrderItemRequest, OrderList, OrderStatistics,
        OrderWithItems, StatusChangeResponse, UpdateOrderStatusRequest,
    },
    entity::{
        Artworks, Users,
        order_items::{ActiveModel as OrderItemActive, Column as ItemCol, Entity as OrderItems},
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{ORDER_STATUSES, Order, OrderItem, OrderStatus},
    response::ApiResult,
    state::AppState,
};

/// Order placement. Validates the requester and every line against live
/// catalog state, snapshots unit prices, and commits the order with all
/// its items as one transaction. The confirmation email runs after the
/// commit and can only produce a warning.
pub async fn create_order(
    state: &AppState,
    user: &AuthUser,
    payload: CreateOrderRequest,
) -> AppResult<ApiResult<OrderWithItems>> {
    validate_request(&payload)?;

    let requester = state.repo::<Users>().get_by_id(user.user_id).await?;
    let requester = match requester {
        Some(u) if u.is_active => u,
        _ => return Err(AppError::Forbidden("User account is not active".into())),
    };

    // Snapshot each line's unit price at this instant. Duplicate artwork
    // ids stay independent lines.
    let artworks = state.repo::<Artworks>();
    let mut lines: Vec<(OrderItemRequest, i64)> = Vec::with_capacity(payload.items.len());
    let mut order_total: i64 = 0;
    for item in payload.items {
        let artwork = artworks
            .get_by_id(item.artwork_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Artwork with ID {} not found", item.artwork_id))
            })?;
        if !artwork.is_available {
            return Err(AppError::Unavailable(format!(
                "Artwork '{}' is not available",
                artwork.title
            )));
        }
        order_total += line_total(item.quantity, artwork.price);
        lines.push((item, artwork.price));
    }

    // The order and its items commit as one unit or not at all.
    let txn = state.orm.begin().await?;

    let order = OrderActive {
        id: NotSet,
        user_id: Set(user.user_id),
        status: Set(OrderStatus::Pending.as_str().into()),
        shipping_address: Set(payload.shipping_address),
        total_amount: Set(order_total),
        order_date: NotSet,
    }
    .insert(&txn)
    .await?;

    let mut items: Vec<OrderItem> = Vec::with_capacity(lines.len());
    for (line, unit_price) in lines {
        let item = OrderItemActive {
            id: NotSet,
            order_id: Set(order.id),
            artwork_id: Set(line.artwork_id),
            quantity: Set(line.quantity),
            unit_price: Set(unit_price),
        }
        .insert(&txn)
        .await?;
        items.push(OrderItem::from(item));
    }

    txn.commit().await?;

    let order = Order::from(order);

    // Post-commit side effect; failure must never fail the order.
    if let Some(mailer) = &state.mailer {
        if let Err(err) = mailer
            .send_order_confirmation(&requester.email, &order)
            .await
        {
            tracing::warn!(
                error = %err,
                order_id = order.id,
                email = %requester.email,
                "order confirmation email failed"
            );
        }
    }

    tracing::info!(order_id = order.id, user_id = user.user_id, "order created");
    Ok(ApiResult::success(
        OrderWithItems { order, items },
        "Order created successfully",
    ))
}

pub async fn list_my_orders(state: &AppState, user: &AuthUser) -> AppResult<ApiResult<OrderList>> {
    let mut orders = state
        .repo::<Orders>()
        .find(Condition::all().add(OrderCol::UserId.eq(user.user_id)))
        .await?;
    orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));

    let items = orders.into_iter().map(Order::from).collect();
    Ok(ApiResult::success(
        OrderList { items },
        "Orders retrieved successfully",
    ))
}

pub async fn list_all_orders(state: &AppState, user: &AuthUser) -> AppResult<ApiResult<OrderList>> {
    ensure_admin(user)?;

    let mut orders = state.repo::<Orders>().get_all().await?;
    orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));

    let items = orders.into_iter().map(Order::from).collect();
    Ok(ApiResult::success(
        OrderList { items },
        "Orders retrieved successfully",
    ))
}

pub async fn list_orders_by_status(
    state: &AppState,
    user: &AuthUser,
    status: &str,
) -> AppResult<ApiResult<OrderList>> {
    ensure_admin(user)?;
    let status = parse_status(status)?;

    let mut orders = state
        .repo::<Orders>()
        .find(Condition::all().add(OrderCol::Status.eq(status.as_str())))
        .await?;
    orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));

    let items = orders.into_iter().map(Order::from).collect();
    Ok(ApiResult::success(
        OrderList { items },
        format!("Orders with status '{status}' retrieved successfully"),
    ))
}

/// Owner or admin only.
pub async fn get_order(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResult<OrderWithItems>> {
    let order = state
        .repo::<Orders>()
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".into()))?;

    if order.user_id != user.user_id && !user.is_admin() {
        return Err(AppError::Forbidden(
            "You can only view your own orders".into(),
        ));
    }

    let items = state
        .repo::<OrderItems>()
        .find(Condition::all().add(ItemCol::OrderId.eq(order.id)))
        .await?
        .into_iter()
        .map(OrderItem::from)
        .collect();

    Ok(ApiResult::success(
        OrderWithItems {
            order: Order::from(order),
            items,
        },
        "Order retrieved successfully",
    ))
}

/// Admin-only forward moves; each change must follow the status machine.
pub async fn update_order_status(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResult<StatusChangeResponse>> {
    ensure_admin(user)?;
    let next = parse_status(&payload.status)?;

    let orders = state.repo::<Orders>();
    let order = orders
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".into()))?;

    let current = current_status(&order)?;
    if !current.can_transition_to(next) {
        return Err(AppError::InvalidTransition(format!(
            "Cannot change order status from '{current}' to '{next}'"
        )));
    }

    let mut active = order.into_active_model();
    active.status = Set(next.as_str().into());
    orders.update(active).await?;

    tracing::info!(order_id = id, from = %current, to = %next, "order status updated");
    Ok(ApiResult::success(
        StatusChangeResponse {
            order_id: id,
            previous_status: current.to_string(),
            new_status: next.to_string(),
        },
        "Order status updated successfully",
    ))
}

/// Owners may cancel their own order while it is still Pending; admins may
/// cancel any order that has not reached a terminal state.
pub async fn cancel_order(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResult<CancelOrderResponse>> {
    let orders = state.repo::<Orders>();
    let order = orders
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".into()))?;

    if order.user_id != user.user_id && !user.is_admin() {
        return Err(AppError::Forbidden(
            "You can only cancel your own orders".into(),
        ));
    }

    let current = current_status(&order)?;
    if user.is_admin() {
        if current.is_terminal() {
            return Err(AppError::InvalidTransition(format!(
                "Cannot cancel order with status '{current}'"
            )));
        }
    } else if current != OrderStatus::Pending {
        return Err(AppError::InvalidTransition(format!(
            "Cannot cancel order with status '{current}'. Only pending orders can be cancelled."
        )));
    }

    let mut active = order.into_active_model();
    active.status = Set(OrderStatus::Cancelled.as_str().into());
    orders.update(active).await?;

    tracing::info!(order_id = id, user_id = user.user_id, "order cancelled");
    Ok(ApiResult::success(
        CancelOrderResponse {
            order_id: id,
            status: OrderStatus::Cancelled.to_string(),
        },
        "Order cancelled successfully",
    ))
}

pub async fn order_statistics(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResult<OrderStatistics>> {
    ensure_admin(user)?;

    let orders = state.repo::<Orders>().get_all().await?;
    let count_by = |status: OrderStatus| {
        orders
            .iter()
            .filter(|o| o.status == status.as_str())
            .count() as i64
    };

    let total_orders = orders.len() as i64;
    let total_revenue = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered.as_str())
        .map(|o| o.total_amount)
        .sum();
    let cutoff = Utc::now() - Duration::days(30);

    let stats = OrderStatistics {
        total_orders,
        pending_orders: count_by(OrderStatus::Pending),
        processing_orders: count_by(OrderStatus::Processing),
        shipped_orders: count_by(OrderStatus::Shipped),
        delivered_orders: count_by(OrderStatus::Delivered),
        cancelled_orders: count_by(OrderStatus::Cancelled),
        total_revenue,
        average_order_value: if total_orders > 0 {
            orders.iter().map(|o| o.total_amount).sum::<i64>() / total_orders
        } else {
            0
        },
        orders_last_30_days: orders
            .iter()
            .filter(|o| o.order_date.with_timezone(&Utc) >= cutoff)
            .count() as i64,
    };

    Ok(ApiResult::success(
        stats,
        "Order statistics retrieved successfully",
    ))
}

fn validate_request(payload: &CreateOrderRequest) -> AppResult<()> {
    let mut errors = Vec::new();
    if payload.shipping_address.trim().is_empty() {
        errors.push("Shipping address is required".to_string());
    }
    if payload.items.is_empty() {
        errors.push("Order must contain at least one item".to_string());
    }
    for item in &payload.items {
        if item.quantity <= 0 {
            errors.push(format!(
                "Quantity for artwork {} must be positive",
                item.artwork_id
            ));
        }
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    Ok(())
}

fn parse_status(status: &str) -> AppResult<OrderStatus> {
    status.parse::<OrderStatus>().map_err(|_| {
        let valid = ORDER_STATUSES.map(|s| s.as_str()).join(", ");
        AppError::validation(format!("Invalid status. Valid statuses: {valid}"))
    })
}

fn current_status(order: &crate::entity::orders::Model) -> AppResult<OrderStatus> {
    order
        .status
        .parse::<OrderStatus>()
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))
}

fn line_total(quantity: i32, unit_price: i64) -> i64 {
    unit_price * i64::from(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_totals_multiply_quantity_by_unit_price() {
        assert_eq!(line_total(2, 1000), 2000);
        assert_eq!(line_total(1, 500), 500);
        assert_eq!(line_total(3, 0), 0);
    }

    #[test]
    fn order_total_is_sum_of_lines() {
        // [{qty: 2, 10.00}, {qty: 1, 5.00}] => 25.00
        let total = line_total(2, 1000) + line_total(1, 500);
        assert_eq!(total, 2500);
    }

    #[test]
    fn empty_order_is_rejected() {
        let request = CreateOrderRequest {
            shipping_address: "10 Gallery Lane".into(),
            items: vec![],
        };
        assert!(matches!(
            validate_request(&request),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        let request = CreateOrderRequest {
            shipping_address: "10 Gallery Lane".into(),
            items: vec![OrderItemRequest {
                artwork_id: 1,
                quantity: 0,
            }],
        };
        assert!(matches!(
            validate_request(&request),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn unknown_status_lists_valid_ones() {
        let err = parse_status("Paid").unwrap_err();
        match err {
            AppError::Validation(errors) => assert!(errors[0].contains("Pending")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
