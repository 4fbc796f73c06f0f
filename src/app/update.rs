// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report what happened through their `Event`s; the handlers here
//! turn those events into side effects (clipboard, file dialogs, persistence,
//! toasts) and screen changes.

use super::persisted_state::AppState;
use super::persistence::{self, Preferences};
use super::{config, Message, Screen};
use crate::error::Error;
use crate::export;
use crate::i18n::fluent::I18n;
use crate::ui::generator::{self, Event as GeneratorEvent};
use crate::ui::library::{self, Event as LibraryEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::render_view;
use crate::ui::settings::{self, Event as SettingsEvent, State as SettingsState};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Mutable borrows of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut config::Config,
    pub generator: &'a mut generator::State,
    pub library: &'a mut library::State,
    pub settings: &'a mut SettingsState,
    pub theme_mode: &'a mut ThemeMode,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    fn preferences(&self) -> Preferences {
        Preferences {
            theme_mode: *self.theme_mode,
            step_interval_ms: self.settings.step_interval_ms(),
        }
    }
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, *ctx.screen) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(target) => handle_screen_switch(ctx, target),
    }
}

/// Changes the visible screen.
///
/// Leaving the generator abandons an in-flight render; there is no background
/// rendering.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }
    if *ctx.screen == Screen::Generator {
        ctx.generator.abandon_render();
    }
    tracing::debug!(from = ?*ctx.screen, to = ?target, "Screen changed");
    *ctx.screen = target;
    Task::none()
}

pub fn handle_generator_message(
    ctx: &mut UpdateContext<'_>,
    message: generator::Message,
) -> Task<Message> {
    match generator::update(ctx.generator, message) {
        GeneratorEvent::None => Task::none(),
        GeneratorEvent::CopyToClipboard(text) => {
            tracing::debug!(bytes = text.len(), "Script copied to clipboard");
            ctx.notifications
                .push(Notification::success("notification-script-copied"));
            iced::clipboard::write(text)
        }
        GeneratorEvent::SaveScript {
            file_name,
            contents,
        } => {
            let directory = ctx.app_state.last_save_directory.clone();
            Task::perform(
                export::save_script(directory, file_name, contents),
                Message::ScriptSaved,
            )
        }
        GeneratorEvent::RenderSettingsChanged(settings) => {
            tracing::debug!(?settings, "Render settings changed");
            persistence::persist_render_settings(ctx.config, settings, ctx.notifications);
            Task::none()
        }
        GeneratorEvent::RenderStarted => {
            tracing::info!("Render started");
            Task::none()
        }
        GeneratorEvent::RenderCompleted { output } => {
            tracing::info!(%output, "Render completed");
            ctx.notifications
                .push(Notification::success("notification-render-complete"));
            Task::none()
        }
        GeneratorEvent::VideoDownload { file_name, output } => {
            tracing::warn!(%file_name, %output, "Rendered video is simulated; nothing to download");
            notify_unavailable_video(ctx.notifications, &file_name);
            Task::none()
        }
    }
}

/// Forwards a render step to the generator while the render screen is active.
pub fn handle_render_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.screen != Screen::Generator || !ctx.generator.is_rendering() {
        return Task::none();
    }
    handle_generator_message(ctx, generator::Message::Render(render_view::Message::Tick))
}

pub fn handle_script_saved(
    ctx: &mut UpdateContext<'_>,
    result: Result<Option<PathBuf>, Error>,
) -> Task<Message> {
    ctx.generator.finish_saving();

    match result {
        Ok(Some(path)) => {
            ctx.notifications.push(
                Notification::success("notification-script-saved")
                    .with_arg("path", path.display().to_string()),
            );
            if let Some(directory) = export::parent_directory(&path) {
                ctx.app_state.last_save_directory = Some(directory);
                persistence::persist_app_state(ctx.app_state, ctx.notifications);
            }
        }
        Ok(None) => tracing::debug!("Script save cancelled"),
        Err(error) => {
            tracing::error!(%error, "Script save failed");
            ctx.notifications
                .push(Notification::error("notification-script-save-error"));
        }
    }
    Task::none()
}

pub fn handle_library_message(
    ctx: &mut UpdateContext<'_>,
    message: library::Message,
) -> Task<Message> {
    match library::update(ctx.library, message) {
        LibraryEvent::None => Task::none(),
        LibraryEvent::DownloadRequested { file_name, url } => {
            tracing::warn!(%file_name, %url, "Sample video is not bundled; nothing to download");
            notify_unavailable_video(ctx.notifications, &file_name);
            Task::none()
        }
    }
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match ctx.settings.update(message) {
        SettingsEvent::None => {}
        SettingsEvent::LanguageSelected(locale) => {
            persistence::apply_language_change(ctx.i18n, ctx.config, locale, ctx.notifications);
        }
        SettingsEvent::ThemeModeSelected(mode) => {
            *ctx.theme_mode = mode;
            let preferences = ctx.preferences();
            persistence::persist_preferences(ctx.config, preferences, ctx.notifications);
        }
        SettingsEvent::StepIntervalChanged(ms) => {
            tracing::debug!(ms, "Render step interval changed");
            let preferences = ctx.preferences();
            persistence::persist_preferences(ctx.config, preferences, ctx.notifications);
        }
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);
    ctx.generator.tick(now);
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

fn notify_unavailable_video(notifications: &mut notifications::Manager, file_name: &str) {
    notifications.push(
        Notification::warning("notification-video-unavailable").with_arg("file", file_name),
    );
}
