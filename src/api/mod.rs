pub mod health;
pub mod posts;
pub mod users;

use crate::db::Repository;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            put(users::update_user).delete(users::delete_user),
        )
        .route("/users/:id/posts", get(posts::list_posts_by_user))
        .route("/posts", post(posts::create_post))
        .route(
            "/posts/:id",
            put(posts::update_post).delete(posts::delete_post),
        )
        .layer(cors)
        .with_state(state)
}

/// Overwrite `field` only when the body supplied a non-empty value.
///
/// Empty strings are treated the same as absent fields, so a PUT with
/// `{"firstName": ""}` leaves the stored name untouched.
pub(crate) fn overwrite_if_present(field: &mut String, value: Option<String>) {
    if let Some(v) = value {
        if !v.is_empty() {
            *field = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_with_value() {
        let mut field = "old".to_string();
        overwrite_if_present(&mut field, Some("new".to_string()));
        assert_eq!(field, "new");
    }

    #[test]
    fn test_empty_string_is_skipped() {
        let mut field = "old".to_string();
        overwrite_if_present(&mut field, Some(String::new()));
        assert_eq!(field, "old");
    }

    #[test]
    fn test_absent_is_skipped() {
        let mut field = "old".to_string();
        overwrite_if_present(&mut field, None);
        assert_eq!(field, "old");
    }
}
