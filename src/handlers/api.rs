use std::sync::Arc;

use tracing::warn;

use crate::config::Config;
use crate::error::Result;
use crate::models::account::{AccountView, NewAccount, ProfileUpdate};
use crate::models::contact::{ContactMessage, ContactOutcome, ContactRequest};
use crate::models::directory::{DirectoryRecord, NewDirectoryRecord};
use crate::models::session::{LoginOutcome, VerifiedSession};
use crate::models::theme::Theme;
use crate::services::{
    AuthService, ContactNotifier, ContactService, DirectoryService, LogNotifier,
    PreferencesService,
};
use crate::store::KeyValueStore;
use crate::utils::response::ApiResponse;
use crate::validation;

/// The function-call contract the UI layer consumes. Every operation comes
/// back as an [`ApiResponse`]; nothing throws across this boundary.
pub struct AdminApi {
    auth: AuthService,
    directory: DirectoryService,
    contact: ContactService,
    preferences: PreferencesService,
}

impl AdminApi {
    /// Wire all services onto one store with the default log notifier
    pub fn new(store: Arc<dyn KeyValueStore>, config: &Config) -> Self {
        Self::with_notifier(store, config, Arc::new(LogNotifier))
    }

    /// Wire all services onto one store with a custom contact notifier
    pub fn with_notifier(
        store: Arc<dyn KeyValueStore>,
        config: &Config,
        notifier: Arc<dyn ContactNotifier>,
    ) -> Self {
        Self {
            auth: AuthService::new(store.clone())
                .with_token_expiry(config.server.token_expiry_hours),
            directory: DirectoryService::new(store.clone(), config.directory.clone()),
            contact: ContactService::new(store.clone(), config.contact.clone(), notifier),
            preferences: PreferencesService::new(store),
        }
    }

    /// Startup tasks: write the bootstrap admin when the account collection
    /// is empty, then seed the directory on first use. A failed seed fetch
    /// only logs; the directory stays empty and no retry is scheduled.
    pub async fn bootstrap(&self) -> Result<()> {
        self.auth.ensure_default_accounts().await?;

        if let Err(e) = self.directory.seed_if_empty().await {
            warn!(error = %e, "directory seed fetch failed, starting with an empty directory");
        }

        Ok(())
    }

    // Session operations

    pub async fn login(&self, username: &str, password: &str) -> ApiResponse<LoginOutcome> {
        self.auth.login(username, password).await.into()
    }

    pub async fn logout(&self) -> ApiResponse<()> {
        match self.auth.logout().await {
            Ok(()) => ApiResponse::ok_empty(),
            Err(e) => ApiResponse::from_error(e),
        }
    }

    pub fn verify_token(&self, token: &str) -> ApiResponse<VerifiedSession> {
        self.auth.verify_token(token).into()
    }

    pub async fn current_user(&self) -> ApiResponse<Option<AccountView>> {
        self.auth.current_user().await.into()
    }

    pub async fn is_authenticated(&self) -> ApiResponse<bool> {
        self.auth.is_authenticated().await.into()
    }

    /// Register a new account. Form-level validation runs here, before the
    /// operation, the way the original forms did.
    pub async fn register(&self, mut new_account: NewAccount) -> ApiResponse<AccountView> {
        if let Err(e) = validation::validate_username(&new_account.username)
            .and_then(|_| validation::validate_password(&new_account.password))
            .and_then(|_| validation::validate_email(&new_account.email))
        {
            return ApiResponse::from_error(e);
        }

        new_account.first_name = validation::sanitize_name_input(&new_account.first_name);
        new_account.last_name = validation::sanitize_name_input(&new_account.last_name);
        if let Some(phone) = new_account.phone.take() {
            new_account.phone = Some(validation::sanitize_phone_input(&phone));
        }

        match self.auth.register(new_account).await {
            Ok(account) => ApiResponse::ok(AccountView::from(&account)),
            Err(e) => ApiResponse::from_error(e),
        }
    }

    /// Merge a partial profile update. Field sanitizers run at this
    /// boundary (keystroke policy), not inside the merge.
    pub async fn update_profile(
        &self,
        user_id: i64,
        mut update: ProfileUpdate,
    ) -> ApiResponse<AccountView> {
        if let Some(first_name) = update.first_name.take() {
            update.first_name = Some(validation::sanitize_name_input(&first_name));
        }
        if let Some(last_name) = update.last_name.take() {
            update.last_name = Some(validation::sanitize_name_input(&last_name));
        }
        if let Some(phone) = update.phone.take() {
            update.phone = Some(validation::sanitize_phone_input(&phone));
        }
        if let Some(email) = &update.email {
            if let Err(e) = validation::validate_email(email) {
                return ApiResponse::from_error(e);
            }
        }

        self.auth.update_profile(user_id, update).await.into()
    }

    // User directory operations

    pub async fn directory_list(&self) -> ApiResponse<Vec<DirectoryRecord>> {
        self.directory.list().await.into()
    }

    pub async fn directory_search(&self, term: &str) -> ApiResponse<Vec<DirectoryRecord>> {
        self.directory.search(term).await.into()
    }

    pub async fn directory_create(
        &self,
        new_record: NewDirectoryRecord,
    ) -> ApiResponse<DirectoryRecord> {
        self.directory.create(new_record).await.into()
    }

    pub async fn directory_update(&self, record: DirectoryRecord) -> ApiResponse<DirectoryRecord> {
        self.directory.update(record).await.into()
    }

    pub async fn directory_delete(&self, id: i64, confirmed: bool) -> ApiResponse<bool> {
        self.directory.delete(id, confirmed).await.into()
    }

    // Preferences

    pub async fn theme(&self) -> ApiResponse<Option<Theme>> {
        self.preferences.theme().await.into()
    }

    pub async fn set_theme(&self, theme: Theme) -> ApiResponse<()> {
        match self.preferences.set_theme(theme).await {
            Ok(()) => ApiResponse::ok_empty(),
            Err(e) => ApiResponse::from_error(e),
        }
    }

    pub async fn toggle_theme(&self) -> ApiResponse<Theme> {
        self.preferences.toggle_theme().await.into()
    }

    // Contact intake

    pub async fn contact_submit(&self, request: ContactRequest) -> ApiResponse<ContactOutcome> {
        self.contact.submit(request).await.into()
    }

    pub async fn contact_recent(&self, limit: Option<usize>) -> ApiResponse<Vec<ContactMessage>> {
        self.contact.recent(limit).await.into()
    }
}
