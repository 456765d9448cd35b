// Centralized configuration constants

// HTTP (Actix) contact/health surface
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 5000;

// Session
pub const DEFAULT_TOKEN_EXPIRY_HOURS: i64 = 24;

// Store
pub const DEFAULT_STORE_PATH: &str = "data/admin-store.json";

// Directory seed
pub const DEFAULT_SEED_URL: &str = "https://dummyjson.com";
/// First id handed out when the directory is empty. The demo seed set carries
/// ids 1..=30, so locally created records start above it.
pub const DIRECTORY_FALLBACK_START_ID: i64 = 30;
pub const DEFAULT_SEED_TIMEOUT_SECS: u64 = 30;

// Bootstrap admin account, written once when the account collection is empty
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "1234";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@icpna.edu.pe";

// Contact intake
pub const DEFAULT_CONTACT_RECIPIENT: &str = "admin@icpna.edu.pe";
pub const DEFAULT_CONTACT_RECENT_LIMIT: usize = 50;

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Field bounds shared by validation
pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;
pub const AGE_MIN: u8 = 1;
pub const AGE_MAX: u8 = 120;
pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const USERNAME_MIN_CHARS: usize = 3;
pub const PASSWORD_MIN_CHARS: usize = 4;
