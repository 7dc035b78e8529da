// ABOUTME: Constant values and environment variable names
// ABOUTME: Centralized definitions of charsets, conversion factors and defaults

// Port Configuration
pub const PORT: &str = "PORT";

// CORS Configuration
pub const CORS_ORIGIN: &str = "CORS_ORIGIN";

// Storage Configuration
pub const KIOSK_DB_PATH: &str = "KIOSK_DB_PATH";

// CSV report Configuration
pub const KIOSK_CSV_PATH: &str = "KIOSK_CSV_PATH";

// Upstream API Configuration
pub const KIOSK_ASTROS_URL: &str = "KIOSK_ASTROS_URL";
pub const KIOSK_UPSTREAM_TIMEOUT_SECS: &str = "KIOSK_UPSTREAM_TIMEOUT_SECS";

/// Characters a generated password may contain
pub const PASSWORD_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+";

/// Inches to centimeters
pub const INCH_TO_CM: f64 = 2.54;

/// Pounds to kilograms
pub const POUND_TO_KG: f64 = 0.453592;

/// Default number of fake users when the count is omitted from the path
pub const DEFAULT_GENERATED_USERS: usize = 100;

/// Default location of the SQLite database file
pub const DEFAULT_DB_PATH: &str = "kiosk.db";

/// Default location of the people measurements CSV
pub const DEFAULT_CSV_PATH: &str = "people_data.csv";

/// Default astronaut roster endpoint
pub const DEFAULT_ASTROS_URL: &str = "http://api.open-notify.org/astros.json";

/// Fixed URL used by the status echo endpoint
pub const STATUS_ECHO_URL: &str = "https://example.com";

/// Default timeout for outbound requests, in seconds
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;
