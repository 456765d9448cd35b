use serde::{Deserialize, Serialize};

/// Contact record of the user directory. A separate population from login
/// accounts: these rows come from the demo seed or the registration form
/// and are what the list screen edits and deletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: u8,
}

impl DirectoryRecord {
    /// Display name used by the search filter
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for creating a directory record; the id is assigned by the
/// service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDirectoryRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: u8,
}

/// Shape of the remote demo API response consumed once to seed the
/// directory. Unknown fields in each user object are ignored.
#[derive(Debug, Deserialize)]
pub struct SeedResponse {
    pub users: Vec<DirectoryRecord>,
}
