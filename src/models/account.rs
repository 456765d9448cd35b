use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
        }
    }
}

/// Login account as stored in the `users` collection. Field names match the
/// JSON the original panel persisted, so an existing store keeps working.
///
/// Passwords are stored and compared in plaintext; that is the behavior of
/// the system this replaces, not a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Base64 data URL, `None` when no avatar is set
    #[serde(default)]
    pub profile_image: Option<String>,
    /// RFC 3339 creation time
    pub created_at: String,
}

/// Sanitized account handed across the presentation contract: the password
/// never leaves the service layer, and absent profile fields come back as
/// empty strings for the forms to bind against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub profile_image: Option<String>,
    pub created_at: String,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
            role: account.role,
            first_name: account.first_name.clone().unwrap_or_default(),
            last_name: account.last_name.clone().unwrap_or_default(),
            phone: account.phone.clone().unwrap_or_default(),
            department: account.department.clone().unwrap_or_default(),
            position: account.position.clone().unwrap_or_default(),
            profile_image: account.profile_image.clone(),
            created_at: account.created_at.clone(),
        }
    }
}

/// Payload for account registration
#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    /// Image file to convert into a base64 data URL. A failed conversion is
    /// tolerated: the account is created without an avatar.
    #[serde(skip)]
    pub avatar_file: Option<PathBuf>,
}

/// Avatar change requested by a profile update
#[derive(Debug, Clone)]
pub enum AvatarPatch {
    /// Convert this file and replace the stored image
    Replace(PathBuf),
    /// Clear the stored image to null
    Remove,
}

/// Partial profile update. `None` fields keep their prior value; present
/// fields overwrite (shallow merge).
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub avatar: Option<AvatarPatch>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.department.is_none()
            && self.position.is_none()
            && self.avatar.is_none()
    }
}
