// ABOUTME: Synthetic data generation for Kiosk
// ABOUTME: Password strings and locale-aware fake user batches

pub mod password;
pub mod users;

pub use password::generate_password;
pub use users::{GeneratedUser, UserGenerator};
