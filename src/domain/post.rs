use serde::{Deserialize, Serialize};

/// A persisted post. `user_id` is a non-null foreign key; a post always has
/// exactly one owning user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub user_id: i64,
}

/// Fields of a post before an identity is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub user_id: i64,
}
