// Store key layout, kept byte-for-byte compatible with the data the
// original panel left behind in browser storage.

/// Account collection (JSON array of accounts)
pub const USERS: &str = "users";
/// Active session token (opaque string)
pub const TOKEN: &str = "token";
/// Cached sanitized account of the active session
pub const USER: &str = "user";
/// User-directory collection (JSON array of directory records)
pub const DIRECTORY: &str = "usuarios";
/// Theme preference ("claro" | "oscuro")
pub const THEME: &str = "tema";
/// Contact-form messages (JSON array)
pub const CONTACTS: &str = "contactos";
