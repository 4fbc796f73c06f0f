// SPDX-License-Identifier: MPL-2.0
//! Configuration and state persistence.
//!
//! Settings changes, including the options picked on the render step, are
//! written to `settings.toml` as soon as they are made; the last save
//! directory goes to the CBOR state file.

use super::{config, persisted_state::AppState};
use crate::domain::render::RenderSettings;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use unic_langid::LanguageIdentifier;

/// Preference values edited from the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub theme_mode: ThemeMode,
    pub step_interval_ms: u64,
}

/// Writes `preferences` into `config` and saves it.
///
/// Skipped under test so unit tests never touch the user's configuration.
pub fn persist_preferences(
    config: &mut config::Config,
    preferences: Preferences,
    notifications: &mut notifications::Manager,
) {
    config.general.theme_mode = preferences.theme_mode;
    config.render.step_interval_ms = Some(preferences.step_interval_ms);

    if cfg!(test) {
        return;
    }
    save_config(config, notifications);
}

/// Remembers the render options picked on the render step.
pub fn persist_render_settings(
    config: &mut config::Config,
    settings: RenderSettings,
    notifications: &mut notifications::Manager,
) {
    config.render.quality = Some(settings.quality);
    config.render.format = Some(settings.format);
    config.render.fps = Some(settings.fps);
    config.render.resolution = Some(settings.resolution);

    if cfg!(test) {
        return;
    }
    save_config(config, notifications);
}

/// Switches the UI language and remembers it in `config`.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut config::Config,
    locale: LanguageIdentifier,
    notifications: &mut notifications::Manager,
) {
    i18n.set_locale(locale.clone());
    config.general.language = Some(locale.to_string());
    tracing::info!(%locale, "Language changed");

    if cfg!(test) {
        return;
    }
    save_config(config, notifications);
}

/// Saves the CBOR state, surfacing failures as a warning toast.
pub fn persist_app_state(app_state: &AppState, notifications: &mut notifications::Manager) {
    if cfg!(test) {
        return;
    }
    if let Err(error) = app_state.save() {
        tracing::warn!(%error, "Failed to save state");
        notifications.push(Notification::warning(error.i18n_key()));
    }
}

fn save_config(config: &config::Config, notifications: &mut notifications::Manager) {
    if let Err(error) = config::save(config) {
        tracing::warn!(%error, "Failed to save config");
        notifications.push(Notification::warning("notification-config-save-error"));
    }
}
