use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::auth::token;
use crate::config::constants::{
    DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME,
    DEFAULT_TOKEN_EXPIRY_HOURS,
};
use crate::error::{AdminError, Result};
use crate::models::account::{Account, AccountView, AvatarPatch, NewAccount, ProfileUpdate, Role};
use crate::models::session::{LoginOutcome, VerifiedSession};
use crate::store::{self, keys, KeyValueStore};
use crate::utils::image;
use crate::utils::time::now_rfc3339;

/// Session and account service: login, token verification, registration and
/// profile updates over the shared store.
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
    token_expiry_hours: i64,
}

impl AuthService {
    /// Create a new auth service with the given store backend
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            token_expiry_hours: DEFAULT_TOKEN_EXPIRY_HOURS,
        }
    }

    /// Override the token expiry window (hours)
    pub fn with_token_expiry(mut self, hours: i64) -> Self {
        self.token_expiry_hours = hours;
        self
    }

    /// Write the bootstrap admin account when the collection is empty.
    /// Runs at startup so a fresh install can log in at all.
    pub async fn ensure_default_accounts(&self) -> Result<()> {
        let accounts: Vec<Account> = store::read_collection(self.store.as_ref(), keys::USERS).await?;
        if !accounts.is_empty() {
            return Ok(());
        }

        let admin = Account {
            id: accounts.len() as i64 + 1,
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            role: Role::Admin,
            first_name: None,
            last_name: None,
            phone: None,
            department: None,
            position: None,
            profile_image: None,
            created_at: now_rfc3339(),
        };

        info!(username = DEFAULT_ADMIN_USERNAME, "seeding default admin account");
        store::write_collection(self.store.as_ref(), keys::USERS, &[admin]).await
    }

    /// Authenticate by exact username and password match. On success a
    /// fresh token and the sanitized account are persisted under the
    /// session keys and returned.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        let accounts: Vec<Account> = store::read_collection(self.store.as_ref(), keys::USERS).await?;

        let account = accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
            .ok_or(AdminError::InvalidCredentials)?;

        let token = token::issue_token(account)?;
        let view = AccountView::from(account);

        self.store.set(keys::TOKEN, &token).await?;
        store::write_value(self.store.as_ref(), keys::USER, &view).await?;

        debug!(username, "login succeeded");

        Ok(LoginOutcome { token, user: view })
    }

    /// Decode and verify a token against the expiry window
    pub fn verify_token(&self, raw: &str) -> Result<VerifiedSession> {
        let claims = token::verify_token(raw, self.token_expiry_hours)?;
        Ok(VerifiedSession {
            valid: true,
            claims,
        })
    }

    /// The token persisted by the last login, if any
    pub async fn stored_token(&self) -> Result<Option<String>> {
        self.store.get(keys::TOKEN).await
    }

    /// Whether a session is present: both the token and the cached account
    /// must exist
    pub async fn is_authenticated(&self) -> Result<bool> {
        let token = self.store.get(keys::TOKEN).await?;
        let user = self.store.get(keys::USER).await?;
        Ok(token.is_some() && user.is_some())
    }

    /// The cached sanitized account of the active session. A corrupt cache
    /// clears the session, as the original panel did on a parse failure.
    pub async fn current_user(&self) -> Result<Option<AccountView>> {
        match store::read_value::<AccountView>(self.store.as_ref(), keys::USER).await {
            Ok(user) => Ok(user),
            Err(AdminError::StorageCorrupt(key)) => {
                warn!(key, "corrupt session cache, logging out");
                self.logout().await?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Drop the session keys. Idempotent; tokens already handed out stay
    /// valid until they expire (no revocation list).
    pub async fn logout(&self) -> Result<()> {
        self.store.remove(keys::TOKEN).await?;
        self.store.remove(keys::USER).await?;
        Ok(())
    }

    /// Register a new account. Fails with [`AdminError::DuplicateUser`]
    /// when the username or the email is already taken.
    pub async fn register(&self, new_account: NewAccount) -> Result<Account> {
        let mut accounts: Vec<Account> =
            store::read_collection(self.store.as_ref(), keys::USERS).await?;

        let duplicate = accounts
            .iter()
            .any(|a| a.username == new_account.username || a.email == new_account.email);
        if duplicate {
            return Err(AdminError::DuplicateUser);
        }

        // Count-based id assignment, as the original panel does for
        // accounts. Accounts are never deleted in-app, which is what keeps
        // this collision-free; the directory uses max-based ids instead.
        let id = accounts.len() as i64 + 1;

        let profile_image = match &new_account.avatar_file {
            Some(path) => match image::file_to_data_url(path).await {
                Ok(data_url) => Some(data_url),
                Err(e) => {
                    // Lenient by design: a bad avatar never blocks signup
                    warn!(error = %e, "avatar conversion failed, registering without image");
                    None
                }
            },
            None => None,
        };

        let account = Account {
            id,
            username: new_account.username,
            password: new_account.password,
            email: new_account.email,
            role: Role::User,
            first_name: Some(new_account.first_name),
            last_name: Some(new_account.last_name),
            phone: new_account.phone,
            department: new_account.department,
            position: new_account.position,
            profile_image,
            created_at: now_rfc3339(),
        };

        accounts.push(account.clone());
        store::write_collection(self.store.as_ref(), keys::USERS, &accounts).await?;

        info!(id, username = %account.username, "account registered");

        Ok(account)
    }

    /// Shallow per-field merge into an existing account: present fields
    /// overwrite, absent fields keep their prior value. The cached session
    /// account is refreshed when it names the same id.
    pub async fn update_profile(&self, user_id: i64, update: ProfileUpdate) -> Result<AccountView> {
        let mut accounts: Vec<Account> =
            store::read_collection(self.store.as_ref(), keys::USERS).await?;

        let account = accounts
            .iter_mut()
            .find(|a| a.id == user_id)
            .ok_or_else(|| AdminError::UserNotFound(user_id.to_string()))?;

        if let Some(first_name) = update.first_name {
            account.first_name = Some(first_name);
        }
        if let Some(last_name) = update.last_name {
            account.last_name = Some(last_name);
        }
        if let Some(email) = update.email {
            account.email = email;
        }
        if let Some(phone) = update.phone {
            account.phone = Some(phone);
        }
        if let Some(department) = update.department {
            account.department = Some(department);
        }
        if let Some(position) = update.position {
            account.position = Some(position);
        }
        match update.avatar {
            Some(AvatarPatch::Replace(path)) => match image::file_to_data_url(&path).await {
                Ok(data_url) => account.profile_image = Some(data_url),
                Err(e) => {
                    warn!(error = %e, "avatar conversion failed, keeping previous image");
                }
            },
            Some(AvatarPatch::Remove) => account.profile_image = None,
            None => {}
        }

        let view = AccountView::from(&*account);
        store::write_collection(self.store.as_ref(), keys::USERS, &accounts).await?;

        // Keep the cached session account in sync with the merge
        if let Ok(Some(cached)) =
            store::read_value::<AccountView>(self.store.as_ref(), keys::USER).await
        {
            if cached.id == user_id {
                store::write_value(self.store.as_ref(), keys::USER, &view).await?;
            }
        }

        Ok(view)
    }
}
