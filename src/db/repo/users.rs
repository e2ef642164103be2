//! User operations on the repository.

use super::Repository;
use crate::domain::{NewUser, User};

impl Repository {
    /// Fetch all users, oldest first.
    pub async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, first_name, last_name, email FROM users ORDER BY id")
            .fetch_all(self.pool())
            .await
    }

    /// Fetch a single user by id. Returns `None` if absent.
    pub async fn find_user(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
    }

    /// Insert a user and return it with the assigned identity.
    pub async fn create_user(&self, new: NewUser) -> Result<User, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (first_name, last_name, email) VALUES (?, ?, ?)")
            .bind(&new.first_name)
            .bind(&new.last_name)
            .bind(&new.email)
            .execute(self.pool())
            .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
        })
    }

    /// Persist the full state of an existing user (last write wins).
    pub async fn save_user(&self, user: &User) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET first_name = ?, last_name = ?, email = ? WHERE id = ?")
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(user.id)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// Delete a user by id. Owned posts are removed by the storage-level
    /// cascade in the same statement, never by a second call.
    pub async fn delete_user(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }
}
