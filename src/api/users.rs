use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use super::{overwrite_if_present, AppState};
use crate::domain::{NewUser, User};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBody {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserBody {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.repo.list_users().await?;
    Ok(Json(users))
}

/// No content validation here: empty strings persist as given.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserBody>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = state
        .repo
        .create_user(NewUser {
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateUserBody>,
) -> Result<Json<User>, AppError> {
    let mut user = state
        .repo
        .find_user(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    overwrite_if_present(&mut user.first_name, body.first_name);
    overwrite_if_present(&mut user.last_name, body.last_name);
    overwrite_if_present(&mut user.email, body.email);

    state.repo.save_user(&user).await?;

    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let user = state
        .repo
        .find_user(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    // Owned posts go with the user via the storage-level cascade.
    state.repo.delete_user(user.id).await?;

    Ok(Json(json!({
        "message": format!("User {} deleted", user.id),
    })))
}
