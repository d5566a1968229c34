use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::storage::{Storage, StorageError, THEME_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    /// Anything other than an explicit `"dark"` reads as light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => ThemeState::Dark,
            _ => ThemeState::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeState::Light => "light",
            ThemeState::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeState::Dark
    }
}

/// Reads the visitor's theme. A storage failure only costs the preference.
pub async fn load_theme(storage: &dyn Storage, visitor: Uuid) -> ThemeState {
    match storage.get_item(visitor, THEME_KEY).await {
        Ok(raw) => ThemeState::from_stored(raw.as_deref()),
        Err(e) => {
            warn!("Could not read theme for visitor {visitor}: {e}");
            ThemeState::default()
        }
    }
}

/// Flips the visitor's theme and persists the new value immediately.
pub async fn toggle_theme(storage: &dyn Storage, visitor: Uuid) -> Result<ThemeState, StorageError> {
    let next = load_theme(storage, visitor).await.toggled();
    storage
        .set_item(visitor, THEME_KEY, next.as_str().to_string())
        .await?;
    Ok(next)
}
