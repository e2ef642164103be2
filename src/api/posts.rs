use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use super::{overwrite_if_present, AppState};
use crate::domain::{NewPost, Post};
use crate::error::AppError;

/// All fields optional at the wire level so that presence checks surface as
/// 400 rather than a body-deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostBody {
    pub title: Option<String>,
    pub description: Option<String>,
}

pub async fn create_post(
    State(state): State<AppState>,
    Json(body): Json<CreatePostBody>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let title = require_string("title", body.title)?;
    let description = require_string("description", body.description)?;
    let user_id = body
        .user_id
        .filter(|id| *id != 0)
        .ok_or_else(|| AppError::BadRequest("userId is required".to_string()))?;

    // Owner lookup and insert are two round-trips by design; no transaction
    // spans them.
    let user = state
        .repo
        .find_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    let post = state
        .repo
        .create_post(NewPost {
            title,
            description,
            user_id: user.id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// Absent users are not distinguished from users without posts: both yield
/// an empty array with 200.
pub async fn list_posts_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Post>>, AppError> {
    let posts = state.repo.list_posts_by_user(user_id).await?;
    Ok(Json(posts))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdatePostBody>,
) -> Result<Json<Post>, AppError> {
    let mut post = state
        .repo
        .find_post(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;

    overwrite_if_present(&mut post.title, body.title);
    overwrite_if_present(&mut post.description, body.description);

    state.repo.save_post(&post).await?;

    Ok(Json(post))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let post = state
        .repo
        .find_post(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;

    state.repo.delete_post(post.id).await?;

    Ok(Json(json!({
        "message": format!("Post {} deleted", post.id),
    })))
}

fn require_string(name: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("{} is required", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_string_accepts_value() {
        assert_eq!(
            require_string("title", Some("T".to_string())).unwrap(),
            "T"
        );
    }

    #[test]
    fn test_require_string_rejects_empty_and_missing() {
        assert!(require_string("title", Some(String::new())).is_err());
        assert!(require_string("title", None).is_err());
    }
}
