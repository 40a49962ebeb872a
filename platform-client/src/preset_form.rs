//! Preset settings form state
//!
//! Holds the preset categories shown by the settings form, loads them from
//! the server and applies edits one category at a time. Fetch and update
//! failures are only logged; the user sees no error.

use shared::models::{PresetCategory, PresetSettingsUpdate, PresetSettingsUpdated, PresetSubcategory};

use crate::http::HttpClient;

/// Preset settings endpoint
pub const PRESET_SETTINGS_PATH: &str = "/api/preset-settings";

/// Message key of the notification shown after a successful edit
pub const EDIT_SUCCESS_KEY: &str = "edit_preset_settings_success";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

/// Sink for user-visible notifications (message keys, not rendered text)
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, message_key: &str);
}

/// Notifier that only writes to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotificationKind, message_key: &str) {
        tracing::info!(kind = ?kind, message_key, "Notification");
    }
}

pub struct PresetSettingsForm<C: HttpClient, N: Notifier> {
    client: C,
    notifier: N,
    presets: Vec<PresetCategory>,
    is_loading: bool,
}

impl<C: HttpClient, N: Notifier> PresetSettingsForm<C, N> {
    /// New form, loading until [`mount`](Self::mount) settles
    pub fn new(client: C, notifier: N) -> Self {
        Self {
            client,
            notifier,
            presets: Vec::new(),
            is_loading: true,
        }
    }

    pub fn presets(&self) -> &[PresetCategory] {
        &self.presets
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Fetch the preset categories
    pub async fn mount(&mut self) {
        match self.client.get::<Vec<PresetCategory>>(PRESET_SETTINGS_PATH).await {
            Ok(presets) => {
                tracing::debug!(categories = presets.len(), "Preset settings loaded");
                self.presets = presets;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load preset settings");
            }
        }
        self.is_loading = false;
    }

    /// Send one category's edited subcategories
    ///
    /// On success the returned record replaces the local entry whose name
    /// matches `category`. Nothing changes when no entry matches.
    pub async fn submit(&mut self, category: &str, subcategories: Vec<PresetSubcategory>) {
        let update = PresetSettingsUpdate {
            category: category.to_string(),
            subcategories,
        };

        let updated = match self
            .client
            .put::<PresetSettingsUpdated, _>(PRESET_SETTINGS_PATH, &update)
            .await
        {
            Ok(updated) => updated,
            Err(e) => {
                tracing::warn!(category, error = %e, "Failed to update preset settings");
                return;
            }
        };

        let Some(entry) = self.presets.iter_mut().find(|p| p.name == category) else {
            tracing::debug!(category, "Updated category not present in local state");
            return;
        };
        *entry = updated.settings;
        self.notifier.notify(NotificationKind::Success, EDIT_SUCCESS_KEY);
    }
}
