// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the wizard, the sample library, the
//! settings and localization, and translates component events into side
//! effects like clipboard writes, file dialogs or config persistence.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::domain::requirements::RequirementsDraft;
use crate::i18n::fluent::I18n;
use crate::ui::generator;
use crate::ui::library;
use crate::ui::notifications::{self, Notification};
use crate::ui::settings::State as SettingsState;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Loaded `settings.toml`, kept in memory and written back on change.
    config: config::Config,
    generator: generator::State,
    library: library::State,
    settings: SettingsState,
    theme_mode: ThemeMode,
    /// Persisted application state (last save directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("wizard_step", &self.generator.step())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires `Fn` for boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        Self::from_config(I18n::default(), config)
    }
}

impl App {
    fn from_config(i18n: I18n, config: config::Config) -> Self {
        let draft = RequirementsDraft::with_defaults(
            config.generator.level(),
            config.generator.duration(),
            config.generator.style(),
        );
        let generator = generator::State::new(draft, config.render.settings());
        let settings = SettingsState::new(
            config.general.theme_mode,
            config.render.step_interval().as_millis() as u64,
        );

        Self {
            i18n,
            screen: Screen::default(),
            theme_mode: config.general.theme_mode,
            config,
            generator,
            library: library::State::default(),
            settings,
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }

    /// Initializes application state from the config and state files.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        let mut app = Self::from_config(i18n, config);

        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if let Some(error) = state_warning {
            app.notifications.push(Notification::warning(error.i18n_key()));
        }

        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            locale = %app.i18n.current_locale(),
            theme = ?app.theme_mode,
            "Application started"
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.generator.has_pending_feedback(),
        );
        let render_sub = subscription::create_render_subscription(
            self.screen == Screen::Generator && self.generator.is_rendering(),
            self.render_step_interval(),
        );

        Subscription::batch([tick_sub, render_sub])
    }

    fn render_step_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.settings.step_interval_ms())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            config: &mut self.config,
            generator: &mut self.generator,
            library: &mut self.library,
            settings: &mut self.settings,
            theme_mode: &mut self.theme_mode,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Generator(generator_message) => {
                update::handle_generator_message(&mut ctx, generator_message)
            }
            Message::Library(library_message) => {
                update::handle_library_message(&mut ctx, library_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::RenderTick => update::handle_render_tick(&mut ctx),
            Message::ScriptSaved(result) => update::handle_script_saved(&mut ctx, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            generator: &self.generator,
            library: &self.library,
            settings: &self.settings,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::render::{RenderStatus, Resolution};
    use crate::domain::wizard::WizardStep;
    use crate::error::Error;
    use crate::ui::generator::Stage;
    use crate::ui::{navbar, render_view, requirements_form, script_preview, settings};
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_dirs<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous_config = std::env::var(paths::ENV_CONFIG_DIR).ok();
        let previous_data = std::env::var(paths::ENV_DATA_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());
        std::env::set_var(paths::ENV_DATA_DIR, temp_dir.path());

        test(temp_dir.path());

        for (var, previous) in [
            (paths::ENV_CONFIG_DIR, previous_config),
            (paths::ENV_DATA_DIR, previous_data),
        ] {
            match previous {
                Some(value) => std::env::set_var(var, value),
                None => std::env::remove_var(var),
            }
        }
    }

    fn form(app: &mut App, message: requirements_form::Message) {
        let _ = app.update(Message::Generator(generator::Message::Form(message)));
    }

    fn preview(app: &mut App, message: script_preview::Message) {
        let _ = app.update(Message::Generator(generator::Message::Preview(message)));
    }

    fn render(app: &mut App, message: render_view::Message) {
        let _ = app.update(Message::Generator(generator::Message::Render(message)));
    }

    /// Fills a valid draft and submits it, landing on the preview step.
    fn submit_calculus(app: &mut App) {
        form(app, requirements_form::Message::TopicChanged("Calculus".into()));
        form(
            app,
            requirements_form::Message::ConceptInputChanged("Limits".into()),
        );
        form(app, requirements_form::Message::AddConcept);
        form(app, requirements_form::Message::Submit);
        assert_eq!(app.generator.step(), WizardStep::Preview);
    }

    /// Drives the wizard to the render step with a valid topic.
    fn app_at_render_step() -> App {
        let mut app = App::default();
        submit_calculus(&mut app);
        preview(&mut app, script_preview::Message::Approve);
        assert_eq!(app.generator.step(), WizardStep::Render);
        app
    }

    fn render_status(app: &App) -> Option<RenderStatus> {
        match app.generator.stage() {
            Stage::Render { render, .. } => Some(render.session().status()),
            _ => None,
        }
    }

    #[test]
    fn new_starts_on_generator_with_defaults() {
        with_temp_dirs(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Generator);
            assert_eq!(app.generator.step(), WizardStep::Requirements);
            assert!(!app.notifications.has_notifications());
        });
    }

    #[test]
    fn new_warns_about_unreadable_config() {
        with_temp_dirs(|dir| {
            std::fs::write(dir.join("settings.toml"), "general = [broken").expect("write");
            let (app, _task) = App::new(Flags::default());
            assert!(app.notifications.has_notifications());
            assert_eq!(app.config, config::Config::default());
        });
    }

    #[test]
    fn new_reads_generator_defaults_from_config() {
        with_temp_dirs(|dir| {
            std::fs::write(
                dir.join("settings.toml"),
                "[general]\ntheme_mode = \"dark\"\n\n[render]\nstep_interval_ms = 750\n",
            )
            .expect("write");
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.theme_mode, ThemeMode::Dark);
            assert_eq!(app.settings.step_interval_ms(), 750);
            assert_eq!(app.theme(), Theme::Dark);
        });
    }

    #[test]
    fn navbar_switches_screen() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Select(Screen::Library)));
        assert_eq!(app.screen, Screen::Library);
        let _ = app.update(Message::SwitchScreen(Screen::About));
        assert_eq!(app.screen, Screen::About);
    }

    #[test]
    fn title_is_localized() {
        let app = App::default();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn topic_without_concepts_stays_on_requirements() {
        let mut app = App::default();
        form(
            &mut app,
            requirements_form::Message::TopicChanged("Calculus".into()),
        );
        form(&mut app, requirements_form::Message::Submit);
        assert_eq!(app.generator.step(), WizardStep::Requirements);
    }

    #[test]
    fn copying_script_shows_toast() {
        let mut app = App::default();
        submit_calculus(&mut app);
        preview(&mut app, script_preview::Message::Copy);
        assert!(app.notifications.has_notifications());
        assert!(app.generator.has_pending_feedback());
    }

    #[test]
    fn render_ticks_drive_session_to_completion() {
        let mut app = app_at_render_step();
        render(&mut app, render_view::Message::Start);
        assert!(app.generator.is_rendering());

        for _ in 0..crate::domain::render::RenderSession::step_count() {
            let _ = app.update(Message::RenderTick);
        }

        assert_eq!(render_status(&app), Some(RenderStatus::Completed));
        assert!(!app.generator.is_rendering());
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn render_tick_is_ignored_before_start() {
        let mut app = app_at_render_step();
        let _ = app.update(Message::RenderTick);
        assert_eq!(render_status(&app), Some(RenderStatus::NotStarted));
    }

    #[test]
    fn leaving_generator_abandons_render() {
        let mut app = app_at_render_step();
        render(&mut app, render_view::Message::Start);

        let _ = app.update(Message::SwitchScreen(Screen::Library));
        assert_eq!(app.generator.step(), WizardStep::Preview);
        assert!(!app.generator.is_rendering());

        let _ = app.update(Message::RenderTick);
        assert_eq!(app.generator.step(), WizardStep::Preview);
    }

    #[test]
    fn video_download_warns_instead_of_writing() {
        let mut app = app_at_render_step();
        render(&mut app, render_view::Message::Start);
        for _ in 0..crate::domain::render::RenderSession::step_count() {
            let _ = app.update(Message::RenderTick);
        }
        let before = app.notifications.visible_count() + app.notifications.queued_count();
        render(&mut app, render_view::Message::Download);
        let after = app.notifications.visible_count() + app.notifications.queued_count();
        assert_eq!(after, before + 1);
    }

    #[test]
    fn render_setting_choice_is_remembered_in_config() {
        let mut app = app_at_render_step();
        render(
            &mut app,
            render_view::Message::ResolutionSelected(Resolution::Hd720),
        );
        assert_eq!(app.config.render.resolution, Some(Resolution::Hd720));
        assert_eq!(app.config.render.settings().resolution, Resolution::Hd720);
    }

    #[test]
    fn library_download_warns() {
        let mut app = App::default();
        let _ = app.update(Message::Library(library::Message::Download(1)));
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn script_saved_remembers_directory() {
        let mut app = App::default();
        let path = PathBuf::from("/tmp/scripts/calculus_animation.py");
        let _ = app.update(Message::ScriptSaved(Ok(Some(path))));
        assert_eq!(
            app.app_state.last_save_directory,
            Some(PathBuf::from("/tmp/scripts"))
        );
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn cancelled_save_is_silent() {
        let mut app = App::default();
        let _ = app.update(Message::ScriptSaved(Ok(None)));
        assert!(!app.notifications.has_notifications());
        assert_eq!(app.app_state.last_save_directory, None);
    }

    #[test]
    fn failed_save_shows_error() {
        let mut app = App::default();
        let _ = app.update(Message::ScriptSaved(Err(Error::Export("denied".into()))));
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn theme_mode_change_applies_immediately() {
        let mut app = App::default();
        let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
            ThemeMode::Light,
        )));
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(app.config.general.theme_mode, ThemeMode::Light);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn step_interval_change_updates_render_pacing() {
        let mut app = App::default();
        let _ = app.update(Message::Settings(settings::Message::StepIntervalChanged(
            2_000.0,
        )));
        assert_eq!(app.render_step_interval(), std::time::Duration::from_secs(2));
        assert_eq!(app.config.render.step_interval_ms, Some(2_000));
    }

    #[test]
    fn language_change_is_applied() {
        let mut app = App::default();
        let fr: unic_langid::LanguageIdentifier = "fr".parse().expect("valid locale");
        let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
            fr.clone(),
        )));
        assert_eq!(app.i18n.current_locale(), &fr);
        assert_eq!(app.config.general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn view_renders_every_screen() {
        let mut app = App::default();
        for screen in navbar::TABS {
            let _ = app.update(Message::SwitchScreen(screen));
            let _element = app.view();
        }
    }
}
