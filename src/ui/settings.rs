// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language, theme mode and render pacing.
//!
//! The component keeps only the values it edits. Every change is reported as
//! an [`Event`] so the application can apply and persist it.

use crate::app::config::{
    DEFAULT_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS, MIN_STEP_INTERVAL_MS,
    STEP_INTERVAL_INCREMENT_MS,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, rule, scrollable, slider, Column, Container, Row, Text};
use iced::{alignment::Vertical, Border, Element, Length, Theme};
use unic_langid::LanguageIdentifier;

/// Values shown by the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    theme_mode: ThemeMode,
    step_interval_ms: u64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
        }
    }
}

impl State {
    #[must_use]
    pub fn new(theme_mode: ThemeMode, step_interval_ms: u64) -> Self {
        Self {
            theme_mode,
            step_interval_ms: step_interval_ms.clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS),
        }
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn step_interval_ms(&self) -> u64 {
        self.step_interval_ms
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
            Message::ThemeModeSelected(mode) => {
                if mode == self.theme_mode {
                    return Event::None;
                }
                self.theme_mode = mode;
                Event::ThemeModeSelected(mode)
            }
            Message::StepIntervalChanged(value) => {
                let rounded = round_to_increment(value);
                if rounded == self.step_interval_ms {
                    return Event::None;
                }
                self.step_interval_ms = rounded;
                Event::StepIntervalChanged(rounded)
            }
        }
    }
}

fn round_to_increment(value: f64) -> u64 {
    let steps = (value / STEP_INTERVAL_INCREMENT_MS as f64).round().max(0.0) as u64;
    (steps * STEP_INTERVAL_INCREMENT_MS).clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS)
}

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    StepIntervalChanged(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    StepIntervalChanged(u64),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(build_language_section(&ctx))
        .push(build_theme_section(&ctx))
        .push(build_render_section(&ctx));

    scrollable(container(content).center_x(Length::Fill)).into()
}

fn build_language_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for locale in ctx.i18n.available_locales() {
        let display_name = locale.to_string();

        // Prefer the translated language name, e.g. "language-name-fr".
        let translated = ctx.i18n.tr(&format!("language-name-{locale}"));
        let label = if translated.starts_with("MISSING:") {
            display_name
        } else {
            format!("{translated} ({display_name})")
        };

        let is_current = ctx.i18n.current_locale() == locale;
        row = row.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::LanguageSelected(locale.clone()))
                .padding([spacing::XS, spacing::SM])
                .style(if is_current {
                    styles::button::selected
                } else {
                    styles::button::unselected
                }),
        );
    }

    build_section(
        ctx.i18n.tr("settings-section-language"),
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(ctx.i18n.tr("select-language-label")).size(typography::BODY))
            .push(row)
            .into(),
    )
}

fn build_theme_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for mode in ThemeMode::ALL {
        row = row.push(
            button(Text::new(ctx.i18n.tr(mode.i18n_key())).size(typography::BODY))
                .on_press(Message::ThemeModeSelected(mode))
                .padding([spacing::XS, spacing::SM])
                .style(if mode == ctx.state.theme_mode {
                    styles::button::selected
                } else {
                    styles::button::unselected
                }),
        );
    }

    build_section(ctx.i18n.tr("settings-section-theme"), row.into())
}

fn build_render_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let interval = ctx.state.step_interval_ms;
    let seconds = format!("{:.2}", interval as f64 / 1000.0);
    let value_label = ctx
        .i18n
        .tr_with_args("settings-step-interval-value", &[("seconds", &seconds)]);

    let step_slider = slider(
        MIN_STEP_INTERVAL_MS as f64..=MAX_STEP_INTERVAL_MS as f64,
        interval as f64,
        Message::StepIntervalChanged,
    )
    .step(STEP_INTERVAL_INCREMENT_MS as f64)
    .width(Length::Fill);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(step_slider)
        .push(Text::new(value_label).size(typography::BODY));

    build_section(
        ctx.i18n.tr("settings-section-render"),
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(ctx.i18n.tr("settings-step-interval-label")).size(typography::BODY))
            .push(row)
            .push(
                Text::new(ctx.i18n.tr("settings-step-interval-hint")).size(typography::CAPTION),
            )
            .into(),
    )
}

fn build_section<'a>(title: String, content: Element<'a, Message>) -> Element<'a, Message> {
    let inner = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_clamped_on_creation() {
        assert_eq!(State::new(ThemeMode::Dark, 10).step_interval_ms(), MIN_STEP_INTERVAL_MS);
        assert_eq!(
            State::new(ThemeMode::Dark, 60_000).step_interval_ms(),
            MAX_STEP_INTERVAL_MS
        );
    }

    #[test]
    fn slider_values_snap_to_increment() {
        let mut state = State::default();
        let event = state.update(Message::StepIntervalChanged(1_100.0));
        assert_eq!(event, Event::StepIntervalChanged(1_000));
        assert_eq!(state.step_interval_ms(), 1_000);

        assert_eq!(state.update(Message::StepIntervalChanged(1_010.0)), Event::None);
    }

    #[test]
    fn theme_mode_change_is_reported_once() {
        let mut state = State::new(ThemeMode::Light, DEFAULT_STEP_INTERVAL_MS);
        assert_eq!(
            state.update(Message::ThemeModeSelected(ThemeMode::Dark)),
            Event::ThemeModeSelected(ThemeMode::Dark)
        );
        assert_eq!(
            state.update(Message::ThemeModeSelected(ThemeMode::Dark)),
            Event::None
        );
    }

    #[test]
    fn language_selection_is_forwarded() {
        let mut state = State::default();
        let fr: LanguageIdentifier = "fr".parse().expect("valid locale");
        assert_eq!(
            state.update(Message::LanguageSelected(fr.clone())),
            Event::LanguageSelected(fr)
        );
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
