use std::sync::Arc;

use tracing::warn;

use crate::error::Result;
use crate::models::theme::Theme;
use crate::store::{keys, KeyValueStore};

/// Theme preference stored under `tema`. The value is the bare string
/// ("claro" | "oscuro"), not JSON, matching what the original panel wrote.
pub struct PreferencesService {
    store: Arc<dyn KeyValueStore>,
}

impl PreferencesService {
    /// Create a new preferences service with the given store backend
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The saved theme, `None` when the user never chose one (the UI then
    /// follows the system preference)
    pub async fn theme(&self) -> Result<Option<Theme>> {
        match self.store.get(keys::THEME).await? {
            None => Ok(None),
            Some(raw) => match raw.parse::<Theme>() {
                Ok(theme) => Ok(Some(theme)),
                Err(()) => {
                    warn!(value = %raw, "unrecognized theme value, ignoring");
                    Ok(None)
                }
            },
        }
    }

    /// Persist a theme choice
    pub async fn set_theme(&self, theme: Theme) -> Result<()> {
        self.store.set(keys::THEME, theme.as_str()).await
    }

    /// Flip between claro and oscuro, defaulting to oscuro when nothing is
    /// saved yet, and return the new value
    pub async fn toggle_theme(&self) -> Result<Theme> {
        let next = match self.theme().await? {
            Some(current) => current.toggled(),
            None => Theme::Oscuro,
        };
        self.set_theme(next).await?;
        Ok(next)
    }
}
