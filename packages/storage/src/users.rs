// ABOUTME: User storage layer using SQLite
// ABOUTME: Handles CRUD operations for the users table

use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::types::{UserCreateInput, UserRecord};

pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every user row.
    pub async fn list_users(&self) -> StorageResult<Vec<UserRecord>> {
        debug!("Listing all users");

        let rows = sqlx::query("SELECT pk, name, age FROM users ORDER BY pk")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_user).collect()
    }

    /// Insert a user and return the freshly assigned primary key.
    pub async fn create_user(&self, input: UserCreateInput) -> StorageResult<i64> {
        debug!("Creating user: {}", input.name);

        let result = sqlx::query("INSERT INTO users (name, age) VALUES (?, ?)")
            .bind(&input.name)
            .bind(input.age)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.last_insert_rowid())
    }

    /// Update only the age of an existing user. Missing pk is an error, not
    /// a silent no-op.
    pub async fn update_age(&self, pk: i64, age: i64) -> StorageResult<()> {
        debug!("Updating age for user: {}", pk);

        let result = sqlx::query("UPDATE users SET age = ? WHERE pk = ?")
            .bind(age)
            .bind(pk)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    pub async fn delete_user(&self, pk: i64) -> StorageResult<()> {
        debug!("Deleting user: {}", pk);

        let result = sqlx::query("DELETE FROM users WHERE pk = ?")
            .bind(pk)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}

fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> StorageResult<UserRecord> {
    Ok(UserRecord {
        pk: row.try_get("pk")?,
        name: row.try_get("name")?,
        age: row.try_get("age")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePool::connect(":memory:").await.unwrap();

        sqlx::query(
            r#"
            CREATE TABLE users (
                pk INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                age INTEGER NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    #[tokio::test]
    async fn test_create_returns_fresh_primary_key() {
        let pool = setup_test_db().await;
        let storage = UserStorage::new(pool);

        let first = storage
            .create_user(UserCreateInput {
                name: "Vasya".to_string(),
                age: 30,
            })
            .await
            .unwrap();
        let second = storage
            .create_user(UserCreateInput {
                name: "Petya".to_string(),
                age: 25,
            })
            .await
            .unwrap();

        assert_ne!(first, second);

        let users = storage.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Vasya");
        assert_eq!(users[0].age, 30);
        assert_eq!(users[0].pk, first);
    }

    #[tokio::test]
    async fn test_update_changes_only_age() {
        let pool = setup_test_db().await;
        let storage = UserStorage::new(pool);

        let pk = storage
            .create_user(UserCreateInput {
                name: "Vasya".to_string(),
                age: 30,
            })
            .await
            .unwrap();

        storage.update_age(pk, 31).await.unwrap();

        let users = storage.list_users().await.unwrap();
        assert_eq!(users[0].name, "Vasya");
        assert_eq!(users[0].age, 31);
    }

    #[tokio::test]
    async fn test_update_missing_pk_is_not_found() {
        let pool = setup_test_db().await;
        let storage = UserStorage::new(pool);

        let err = storage.update_age(9999, 40).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_roundtrip() {
        let pool = setup_test_db().await;
        let storage = UserStorage::new(pool);

        let pk = storage
            .create_user(UserCreateInput {
                name: "Vasya".to_string(),
                age: 30,
            })
            .await
            .unwrap();

        // Present before delete, absent after
        assert_eq!(storage.list_users().await.unwrap().len(), 1);
        storage.delete_user(pk).await.unwrap();
        assert!(storage.list_users().await.unwrap().is_empty());

        // Second delete hits nothing
        let err = storage.delete_user(pk).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }
}
