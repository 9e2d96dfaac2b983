use serde::Deserialize;
use utoipa::ToSchema;

use crate::dto::{double_option, is_valid_email};
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub address: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> AppResult<()> {
        if !is_valid_email(&self.email) {
            return Err(AppError::Validation(
                "email must be a valid email address".into(),
            ));
        }
        if self.password.len() < 6 {
            return Err(AppError::Validation(
                "password must be at least 6 characters".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(email) = &self.email {
            if !is_valid_email(email) {
                return Err(AppError::Validation(
                    "email must be a valid email address".into(),
                ));
            }
        }
        if let Some(password) = &self.password {
            if password.len() < 6 {
                return Err(AppError::Validation(
                    "password must be at least 6 characters".into(),
                ));
            }
        }
        Ok(())
    }
}
