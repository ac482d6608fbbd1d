use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::User;

#[derive(Deserialize, Debug, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email."))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,
}

#[derive(Deserialize, Debug, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Please enter a valid email."))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub exp: usize,
}
