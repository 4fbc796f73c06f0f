// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::generator;
use crate::ui::library;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Generator(generator::Message),
    Library(library::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    SwitchScreen(Screen),
    Tick(Instant), // Toast expiry and the "Copied!" label
    /// One simulated render step elapsed.
    RenderTick,
    /// Result of the script save dialog and write. `Ok(None)` means cancelled.
    ScriptSaved(Result<Option<PathBuf>, Error>),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `MANIM_STUDIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MANIM_STUDIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
