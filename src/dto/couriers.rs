use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourierRequest {
    pub name: String,
    /// Defaults to true when omitted.
    pub is_available: Option<bool>,
}

impl CreateCourierRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCourierRequest {
    pub name: Option<String>,
    pub is_available: Option<bool>,
}

impl UpdateCourierRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.as_ref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::Validation("name must not be empty".into()));
        }
        Ok(())
    }
}
