use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User" => Ok(Role::User),
            "Admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role '{other}'")),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order lifecycle. `Delivered` and `Cancelled` are terminal; every other
/// transition must follow [`OrderStatus::can_transition_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

pub const ORDER_STATUSES: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
];

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Processing)
                | (Pending, Cancelled)
                | (Processing, Shipped)
                | (Processing, Cancelled)
                | (Shipped, Delivered)
        )
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Processing" => Ok(OrderStatus::Processing),
            "Shipped" => Ok(OrderStatus::Shipped),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("Unknown order status '{other}'")),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// API-facing models. Hand-written conversions from the persistence
// entities keep the mapping compiler-checked; the password hash never
// leaves the entity layer.

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::users::Model> for User {
    fn from(model: entity::users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            role: model.role,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Genre {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::genres::Model> for Genre {
    fn from(model: entity::genres::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

/// Prices are fixed-point cents.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Artwork {
    pub id: i32,
    pub genre_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub is_available: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::artworks::Model> for Artwork {
    fn from(model: entity::artworks::Model) -> Self {
        Self {
            id: model.id,
            genre_id: model.genre_id,
            title: model.title,
            description: model.description,
            price: model.price,
            is_available: model.is_available,
            is_featured: model.is_featured,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub status: String,
    pub shipping_address: String,
    pub total_amount: i64,
    pub order_date: DateTime<Utc>,
}

impl From<entity::orders::Model> for Order {
    fn from(model: entity::orders::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            status: model.status,
            shipping_address: model.shipping_address,
            total_amount: model.total_amount,
            order_date: model.order_date.with_timezone(&Utc),
        }
    }
}

/// Immutable purchase line; `unit_price` is the artwork price captured at
/// order time, never re-read afterwards.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub artwork_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub total_price: i64,
}

impl From<entity::order_items::Model> for OrderItem {
    fn from(model: entity::order_items::Model) -> Self {
        let total_price = model.unit_price * i64::from(model.quantity);
        Self {
            id: model.id,
            order_id: model.order_id,
            artwork_id: model.artwork_id,
            quantity: model.quantity,
            unit_price: model.unit_price,
            total_price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub artwork_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::reviews::Model> for Review {
    fn from(model: entity::reviews::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            artwork_id: model.artwork_id,
            rating: model.rating,
            comment: model.comment,
            is_approved: model.is_approved,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
