use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::double_option;
use crate::error::{AppError, AppResult};
use crate::models::OrderStatus;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub user_id: Option<Uuid>,
    pub product_id: Option<Uuid>,
    pub quantity: Option<i32>,
    /// Defaults to PAID when omitted.
    pub status: Option<OrderStatus>,
}

impl CreateOrderRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.quantity.is_some_and(|q| q < 1) {
            return Err(AppError::Validation("quantity must be at least 1".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub user_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub product_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub quantity: Option<Option<i32>>,
    pub status: Option<OrderStatus>,
}

impl UpdateOrderRequest {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(Some(quantity)) = self.quantity {
            if quantity < 1 {
                return Err(AppError::Validation("quantity must be at least 1".into()));
            }
        }
        Ok(())
    }
}
