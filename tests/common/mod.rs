// Common test helpers for integration tests

use std::sync::Arc;

use institute_admin_server::config::Config;
use institute_admin_server::handlers::api::AdminApi;
use institute_admin_server::models::account::NewAccount;
use institute_admin_server::store::MemoryStore;

pub fn memory_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

pub fn api_on(store: Arc<MemoryStore>) -> AdminApi {
    AdminApi::new(store, &Config::default())
}

#[allow(dead_code)]
pub fn new_account(username: &str, email: &str) -> NewAccount {
    NewAccount {
        username: username.to_string(),
        password: "secret1234".to_string(),
        email: email.to_string(),
        first_name: "Teresa".to_string(),
        last_name: "Chavez".to_string(),
        phone: Some("999 888 777".to_string()),
        department: None,
        position: None,
        avatar_file: None,
    }
}
