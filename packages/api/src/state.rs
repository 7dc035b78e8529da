// ABOUTME: Shared application state for API handlers
// ABOUTME: Storages, generators and the upstream client behind one context

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

use kiosk_datagen::UserGenerator;
use kiosk_storage::{PhoneStorage, UserStorage};
use kiosk_upstream::UpstreamClient;

/// Application context constructed once at startup and cloned into every
/// handler. Replaces module-level singletons with explicit state.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub user_storage: Arc<UserStorage>,
    pub phone_storage: Arc<PhoneStorage>,
    pub generator: Arc<UserGenerator>,
    pub upstream: Arc<UpstreamClient>,
    pub csv_path: PathBuf,
}

impl AppState {
    pub fn new(pool: SqlitePool, upstream: UpstreamClient, csv_path: PathBuf) -> Self {
        let user_storage = Arc::new(UserStorage::new(pool.clone()));
        let phone_storage = Arc::new(PhoneStorage::new(pool.clone()));
        let generator = Arc::new(UserGenerator::new());

        Self {
            pool,
            user_storage,
            phone_storage,
            generator,
            upstream: Arc::new(upstream),
            csv_path,
        }
    }
}
