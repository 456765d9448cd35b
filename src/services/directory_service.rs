use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::settings::DirectoryConfig;
use crate::error::{AdminError, Result};
use crate::models::directory::{DirectoryRecord, NewDirectoryRecord, SeedResponse};
use crate::store::{self, keys, KeyValueStore};
use crate::validation;

/// User-directory service: seed-on-first-use plus the CRUD surface of the
/// list screen.
pub struct DirectoryService {
    store: Arc<dyn KeyValueStore>,
    config: DirectoryConfig,
}

impl DirectoryService {
    /// Create a new directory service with the given store backend
    pub fn new(store: Arc<dyn KeyValueStore>, config: DirectoryConfig) -> Self {
        Self { store, config }
    }

    /// One-time import: when the local collection is empty, pull the demo
    /// set from the remote API and persist it as the initial state. Never
    /// re-pulled afterwards; a failed fetch is the caller's to log, and
    /// leaves the directory empty. Returns how many records were seeded
    /// (zero when the collection already had data).
    pub async fn seed_if_empty(&self) -> Result<usize> {
        let existing: Vec<DirectoryRecord> =
            store::read_collection(self.store.as_ref(), keys::DIRECTORY).await?;
        if !existing.is_empty() {
            debug!(count = existing.len(), "directory already populated, skipping seed");
            return Ok(0);
        }

        let url = format!("{}/users", self.config.seed_url.trim_end_matches('/'));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.config.seed_timeout_secs))
            .build()?;

        let response = client.get(&url).send().await?.error_for_status()?;
        let seed: SeedResponse = response.json().await?;

        store::write_collection(self.store.as_ref(), keys::DIRECTORY, &seed.users).await?;
        info!(count = seed.users.len(), %url, "directory seeded from remote demo set");

        Ok(seed.users.len())
    }

    /// All records, in stored order
    pub async fn list(&self) -> Result<Vec<DirectoryRecord>> {
        store::read_collection(self.store.as_ref(), keys::DIRECTORY).await
    }

    /// Case-insensitive substring filter over "first last" or email.
    /// Non-destructive: recomputed from the stored collection on each call.
    pub async fn search(&self, term: &str) -> Result<Vec<DirectoryRecord>> {
        let records = self.list().await?;
        if term.trim().is_empty() {
            return Ok(records);
        }

        let needle = term.to_lowercase();
        Ok(records
            .into_iter()
            .filter(|r| {
                r.full_name().to_lowercase().contains(&needle)
                    || r.email.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// Create a validated record. Ids are max-based: one past the highest
    /// existing id, or the configured start value for an empty collection
    /// (the demo seed occupies 1..=30, so local records begin above it).
    pub async fn create(&self, new_record: NewDirectoryRecord) -> Result<DirectoryRecord> {
        validation::validate_directory_record(&new_record)?;

        let mut records: Vec<DirectoryRecord> =
            store::read_collection(self.store.as_ref(), keys::DIRECTORY).await?;

        if records.iter().any(|r| r.email == new_record.email) {
            return Err(AdminError::validation(
                "email",
                "el correo electrónico ya está registrado",
            ));
        }

        let id = records
            .iter()
            .map(|r| r.id)
            .max()
            .map(|max| max + 1)
            .unwrap_or(self.config.fallback_start_id);

        let record = DirectoryRecord {
            id,
            first_name: new_record.first_name,
            last_name: new_record.last_name,
            email: new_record.email,
            phone: new_record.phone,
            age: new_record.age,
        };

        records.push(record.clone());
        store::write_collection(self.store.as_ref(), keys::DIRECTORY, &records).await?;

        debug!(id, "directory record created");

        Ok(record)
    }

    /// Full-record replace by id after validation. A validation failure
    /// leaves the stored collection untouched.
    pub async fn update(&self, record: DirectoryRecord) -> Result<DirectoryRecord> {
        let fields = NewDirectoryRecord {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            age: record.age,
        };
        validation::validate_directory_record(&fields)?;

        let mut records: Vec<DirectoryRecord> =
            store::read_collection(self.store.as_ref(), keys::DIRECTORY).await?;

        let slot = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or_else(|| AdminError::UserNotFound(record.id.to_string()))?;
        *slot = record.clone();

        store::write_collection(self.store.as_ref(), keys::DIRECTORY, &records).await?;

        Ok(record)
    }

    /// Delete by id. The caller passes the outcome of the confirmation
    /// step; an unconfirmed delete is a no-op returning `false`, matching
    /// the cancel path of the confirm dialog.
    pub async fn delete(&self, id: i64, confirmed: bool) -> Result<bool> {
        if !confirmed {
            return Ok(false);
        }

        let mut records: Vec<DirectoryRecord> =
            store::read_collection(self.store.as_ref(), keys::DIRECTORY).await?;

        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(AdminError::UserNotFound(id.to_string()));
        }

        store::write_collection(self.store.as_ref(), keys::DIRECTORY, &records).await?;

        debug!(id, "directory record deleted");

        Ok(true)
    }
}
