// ABOUTME: SQLite persistence layer for Kiosk
// ABOUTME: Pool setup plus CRUD storage for the users and phones tables

pub mod db;
pub mod error;
pub mod phones;
pub mod types;
pub mod users;

pub use db::init_pool;
pub use error::{StorageError, StorageResult};
pub use phones::PhoneStorage;
pub use types::{PhoneCreateInput, PhoneRecord, UserCreateInput, UserRecord};
pub use users::UserStorage;
