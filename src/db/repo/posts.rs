//! Post operations on the repository.

use super::Repository;
use crate::domain::{NewPost, Post};

impl Repository {
    /// Fetch all posts owned by a user, oldest first. An unknown user id
    /// simply yields an empty list.
    pub async fn list_posts_by_user(&self, user_id: i64) -> Result<Vec<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "SELECT id, title, description, user_id FROM posts WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await
    }

    /// Fetch a single post by id. Returns `None` if absent.
    pub async fn find_post(&self, id: i64) -> Result<Option<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "SELECT id, title, description, user_id FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
    }

    /// Insert a post and return it with the assigned identity.
    pub async fn create_post(&self, new: NewPost) -> Result<Post, sqlx::Error> {
        let result = sqlx::query("INSERT INTO posts (title, description, user_id) VALUES (?, ?, ?)")
            .bind(&new.title)
            .bind(&new.description)
            .bind(new.user_id)
            .execute(self.pool())
            .await?;

        Ok(Post {
            id: result.last_insert_rowid(),
            title: new.title,
            description: new.description,
            user_id: new.user_id,
        })
    }

    /// Persist title and description of an existing post. Ownership is
    /// immutable and never written here.
    pub async fn save_post(&self, post: &Post) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE posts SET title = ?, description = ? WHERE id = ?")
            .bind(&post.title)
            .bind(&post.description)
            .bind(post.id)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// Delete a post by id.
    pub async fn delete_post(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }
}
