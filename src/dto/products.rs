use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::dto::double_option;
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    /// Decimal string, e.g. "1299.99".
    #[schema(value_type = String)]
    pub price: Decimal,
    pub stock: Option<i32>,
}

impl CreateProductRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name must not be empty".into()));
        }
        if self.price < Decimal::ZERO {
            return Err(AppError::Validation("price cannot be negative".into()));
        }
        if self.stock.is_some_and(|s| s < 0) {
            return Err(AppError::Validation("stock cannot be negative".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[schema(value_type = Option<String>)]
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
}

impl UpdateProductRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.as_ref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::Validation("name must not be empty".into()));
        }
        if self.price.is_some_and(|p| p < Decimal::ZERO) {
            return Err(AppError::Validation("price cannot be negative".into()));
        }
        if self.stock.is_some_and(|s| s < 0) {
            return Err(AppError::Validation("stock cannot be negative".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdjustStockRequest {
    /// Signed change applied to stock, negative for consumption.
    pub delta: i32,
}

impl AdjustStockRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.delta == 0 {
            return Err(AppError::Validation("delta must not be 0".into()));
        }
        Ok(())
    }
}
