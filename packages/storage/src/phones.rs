// ABOUTME: Phone storage layer using SQLite
// ABOUTME: Handles CRUD operations for the phones table

use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::types::{PhoneCreateInput, PhoneRecord};

pub struct PhoneStorage {
    pool: SqlitePool,
}

impl PhoneStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_phones(&self) -> StorageResult<Vec<PhoneRecord>> {
        debug!("Listing all phones");

        let rows = sqlx::query("SELECT phoneID, contactName, phoneValue FROM phones ORDER BY phoneID")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_phone).collect()
    }

    /// Insert a phone and return the freshly assigned id.
    pub async fn create_phone(&self, input: PhoneCreateInput) -> StorageResult<i64> {
        debug!("Creating phone for contact: {}", input.contact_name);

        let result = sqlx::query("INSERT INTO phones (contactName, phoneValue) VALUES (?, ?)")
            .bind(&input.contact_name)
            .bind(&input.phone_value)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.last_insert_rowid())
    }

    /// Replace both contact name and value. Missing id is an error.
    pub async fn update_phone(
        &self,
        phone_id: i64,
        input: PhoneCreateInput,
    ) -> StorageResult<()> {
        debug!("Updating phone: {}", phone_id);

        let result =
            sqlx::query("UPDATE phones SET contactName = ?, phoneValue = ? WHERE phoneID = ?")
                .bind(&input.contact_name)
                .bind(&input.phone_value)
                .bind(phone_id)
                .execute(&self.pool)
                .await
                .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    pub async fn delete_phone(&self, phone_id: i64) -> StorageResult<()> {
        debug!("Deleting phone: {}", phone_id);

        let result = sqlx::query("DELETE FROM phones WHERE phoneID = ?")
            .bind(phone_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}

fn row_to_phone(row: &sqlx::sqlite::SqliteRow) -> StorageResult<PhoneRecord> {
    Ok(PhoneRecord {
        phone_id: row.try_get("phoneID")?,
        contact_name: row.try_get("contactName")?,
        phone_value: row.try_get("phoneValue")?,
    })
}
