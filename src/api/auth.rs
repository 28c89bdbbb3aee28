//! Auth Endpoints
//!
//! Session check, login, registration and logout.

use serde::{Deserialize, Serialize};

use super::{encode, fetch_json, fetch_unit, ApiError};
use crate::models::{AuthStatus, CurrentUser};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RegisterArgs<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    user: CurrentUser,
}

// ========================
// Commands
// ========================

pub async fn check_auth() -> Result<AuthStatus, ApiError> {
    fetch_json("GET", "/api/check_auth", None).await
}

pub async fn login(args: &LoginArgs<'_>) -> Result<CurrentUser, ApiError> {
    let body = encode(args)?;
    let response: LoginResponse = fetch_json("POST", "/api/login", Some(body)).await?;
    Ok(response.user)
}

pub async fn register(args: &RegisterArgs<'_>) -> Result<(), ApiError> {
    let body = encode(args)?;
    fetch_unit("POST", "/api/user", Some(body)).await
}

pub async fn logout() -> Result<(), ApiError> {
    fetch_unit("POST", "/api/logout", None).await
}
