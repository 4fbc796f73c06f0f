// SPDX-License-Identifier: MPL-2.0
//! Third wizard step: the simulated render.
//!
//! This component only reacts to messages. Periodic [`Message::Tick`]s come
//! from a subscription the application keeps alive while
//! [`State::is_running`] holds, so leaving the step stops the timer.

use crate::domain::render::{
    FrameRate, RenderQuality, RenderSession, RenderSettings, RenderStatus, Resolution, VideoFormat,
};
use crate::domain::requirements::Requirements;
use crate::domain::script;
use crate::i18n::fluent::I18n;
use crate::ui::choice::{self, Choice};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::Local;
use iced::widget::{
    button, container, pick_list, progress_bar, scrollable, text, Column, Container, Row, Space,
    Text,
};
use iced::{alignment::Vertical, Color, Element, Font, Length, Theme};

pub struct State {
    session: RenderSession,
    settings: RenderSettings,
}

impl State {
    /// Idle render step for `topic`, preset with `settings`.
    #[must_use]
    pub fn new(topic: &str, settings: RenderSettings) -> Self {
        Self {
            session: RenderSession::new(topic),
            settings,
        }
    }

    #[must_use]
    pub fn session(&self) -> &RenderSession {
        &self.session
    }

    #[must_use]
    pub fn settings(&self) -> RenderSettings {
        self.settings
    }

    /// Whether ticks should currently be delivered.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.session.status().is_in_progress()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    QualitySelected(RenderQuality),
    FormatSelected(VideoFormat),
    FpsSelected(FrameRate),
    ResolutionSelected(Resolution),
    Start,
    Tick,
    Download,
    Back,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// A setting was picked before the start; carries the full new set.
    SettingsChanged(RenderSettings),
    Started,
    Completed { output: String },
    /// The user asked for the video file; `output` is the fabricated location.
    DownloadRequested { file_name: String, output: String },
    Back,
}

pub fn update(state: &mut State, message: Message, requirements: &Requirements) -> Event {
    let editable = state.session.status() == RenderStatus::NotStarted;
    let before = state.settings;
    match message {
        Message::QualitySelected(quality) if editable => state.settings.quality = quality,
        Message::FormatSelected(format) if editable => state.settings.format = format,
        Message::FpsSelected(fps) if editable => state.settings.fps = fps,
        Message::ResolutionSelected(resolution) if editable => {
            state.settings.resolution = resolution;
        }
        Message::QualitySelected(_)
        | Message::FormatSelected(_)
        | Message::FpsSelected(_)
        | Message::ResolutionSelected(_) => {}
        Message::Start => {
            if state.session.start(Local::now()) {
                return Event::Started;
            }
        }
        Message::Tick => {
            let was_running = state.is_running();
            let status = state.session.tick(Local::now());
            if was_running && status == RenderStatus::Completed {
                if let Some(output) = state.session.output() {
                    return Event::Completed {
                        output: output.to_string(),
                    };
                }
            }
        }
        Message::Download => {
            if let Some(output) = state.session.output() {
                return Event::DownloadRequested {
                    file_name: script::video_file_name(requirements.topic()),
                    output: output.to_string(),
                };
            }
        }
        Message::Back => return Event::Back,
    }
    if state.settings == before {
        Event::None
    } else {
        Event::SettingsChanged(state.settings)
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub requirements: &'a Requirements,
    pub state: &'a State,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let session = &ctx.state.session;
    let status = session.status();

    let header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("render-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("render-subtitle")).size(typography::BODY));

    let mut content = Column::new().spacing(spacing::LG).push(header);

    if status == RenderStatus::NotStarted {
        content = content.push(build_settings(&ctx));
    }

    content = content.push(build_status_line(i18n, status));

    if status.is_in_progress() {
        let percent = session.progress_percent();
        let label = Row::new()
            .push(Text::new(i18n.tr("render-progress")).size(typography::BODY_SM))
            .push(Space::new().width(Length::Fill))
            .push(Text::new(format!("{}%", percent.round())).size(typography::BODY_SM));
        content = content.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(label)
                .push(progress_bar(0.0..=100.0, percent)),
        );
    }

    if !session.log().is_empty() {
        content = content.push(build_log(&ctx));
    }

    if status == RenderStatus::Completed {
        content = content.push(build_preview(&ctx));
    }

    content = content
        .push(build_details(&ctx))
        .push(build_actions(&ctx));

    Container::new(content)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .style(styles::container::panel)
        .into()
}

fn status_color(status: RenderStatus) -> Option<Color> {
    match status {
        RenderStatus::Preparing | RenderStatus::Rendering => Some(palette::INFO_500),
        RenderStatus::Completed => Some(palette::SUCCESS_500),
        RenderStatus::Failed => Some(palette::ERROR_500),
        RenderStatus::NotStarted => None,
    }
}

fn status_glyph(status: RenderStatus) -> &'static str {
    match status {
        RenderStatus::NotStarted => "▶",
        RenderStatus::Preparing | RenderStatus::Rendering => "⟳",
        RenderStatus::Completed => "✓",
        RenderStatus::Failed => "!",
    }
}

fn build_status_line<'a>(i18n: &I18n, status: RenderStatus) -> Element<'a, Message> {
    let color = status_color(status);
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(status_glyph(status))
                .size(typography::TITLE_SM)
                .style(move |_theme: &Theme| text::Style { color }),
        )
        .push(Text::new(i18n.tr(status.i18n_key())).size(typography::TITLE_SM))
        .into()
}

fn picker<'a, T>(
    label: String,
    choices: Vec<Choice<T>>,
    selected: T,
    on_select: fn(T) -> Message,
) -> Element<'a, Message>
where
    T: Copy + PartialEq + std::fmt::Debug + 'static,
{
    let current = choice::find(&choices, &selected);
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::FillPortion(1))
        .push(Text::new(label).size(typography::BODY_SM))
        .push(
            pick_list(choices, current, move |c: Choice<T>| on_select(c.value))
                .padding(spacing::XS)
                .width(Length::Fill),
        )
        .into()
}

fn build_settings<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let settings = ctx.state.settings;

    let row = Row::new()
        .spacing(spacing::MD)
        .push(picker(
            i18n.tr("render-settings-quality"),
            choice::localized(i18n, &RenderQuality::ALL, RenderQuality::i18n_key),
            settings.quality,
            Message::QualitySelected,
        ))
        .push(picker(
            i18n.tr("render-settings-format"),
            choice::displayed(&VideoFormat::ALL),
            settings.format,
            Message::FormatSelected,
        ))
        .push(picker(
            i18n.tr("render-settings-fps"),
            choice::displayed(&FrameRate::ALL),
            settings.fps,
            Message::FpsSelected,
        ))
        .push(picker(
            i18n.tr("render-settings-resolution"),
            choice::displayed(&Resolution::ALL),
            settings.resolution,
            Message::ResolutionSelected,
        ));

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("render-settings-title")).size(typography::TITLE_SM))
            .push(row),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn build_log<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut lines = Column::new().spacing(spacing::XXS);
    for entry in ctx.state.session.log() {
        let line = Row::new()
            .spacing(spacing::XS)
            .push(
                Text::new(format!("[{}]", entry.at.format("%H:%M:%S")))
                    .font(Font::MONOSPACE)
                    .size(typography::BODY_SM)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::TERMINAL_TIMESTAMP),
                    }),
            )
            .push(
                Text::new(entry.message.as_str())
                    .font(Font::MONOSPACE)
                    .size(typography::BODY_SM),
            );
        lines = lines.push(line);
    }

    let terminal = container(scrollable(lines).anchor_bottom().width(Length::Fill))
        .padding(spacing::MD)
        .width(Length::Fill)
        .max_height(sizing::RENDER_LOG_HEIGHT)
        .style(styles::container::terminal);

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("render-log-title")).size(typography::TITLE_SM))
        .push(terminal)
        .into()
}

fn build_preview<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let settings = ctx.state.settings;

    let placeholder = container(
        Column::new()
            .spacing(spacing::XS)
            .align_x(iced::Alignment::Center)
            .push(Text::new("🎬").size(typography::TITLE_LG))
            .push(Text::new(i18n.tr("render-preview-label")).size(typography::BODY_SM))
            .push(Text::new(ctx.requirements.topic()).size(typography::CAPTION)),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(sizing::VIDEO_PREVIEW_HEIGHT))
    .style(styles::container::media_placeholder);

    let quality = format!(
        "{} ({})",
        i18n.tr(settings.quality.i18n_key()),
        settings.resolution
    );
    let facts = Column::new()
        .spacing(spacing::XXS)
        .push(detail_line(
            i18n.tr("details-duration"),
            minutes_label(i18n, ctx.requirements),
        ))
        .push(detail_line(i18n.tr("details-quality"), quality))
        .push(detail_line(
            i18n.tr("details-format"),
            settings.format.to_string(),
        ));

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("render-preview-title")).size(typography::TITLE_SM))
        .push(placeholder)
        .push(facts)
        .into()
}

fn minutes_label(i18n: &I18n, requirements: &Requirements) -> String {
    i18n.tr_with_args(
        "preview-minutes",
        &[("minutes", &requirements.duration().to_string())],
    )
}

fn detail_line<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(Text::new(format!("{label}:")).size(typography::BODY_SM))
        .push(Text::new(value).size(typography::BODY_SM))
        .into()
}

fn build_details<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let requirements = ctx.requirements;
    let settings = ctx.state.settings;

    let left = Column::new()
        .spacing(spacing::XXS)
        .width(Length::FillPortion(1))
        .push(detail_line(
            i18n.tr("summary-topic"),
            requirements.topic().to_string(),
        ))
        .push(detail_line(
            i18n.tr("summary-level"),
            i18n.tr(requirements.level().i18n_key()),
        ))
        .push(detail_line(
            i18n.tr("details-duration"),
            minutes_label(i18n, requirements),
        ));
    let right = Column::new()
        .spacing(spacing::XXS)
        .width(Length::FillPortion(1))
        .push(detail_line(
            i18n.tr("summary-style"),
            i18n.tr(requirements.style().i18n_key()),
        ))
        .push(detail_line(
            i18n.tr("details-concepts"),
            requirements.concepts().len().to_string(),
        ))
        .push(detail_line(
            i18n.tr("details-quality"),
            format!(
                "{} ({})",
                i18n.tr(settings.quality.i18n_key()),
                settings.resolution
            ),
        ));

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("details-title")).size(typography::TITLE_SM))
            .push(Row::new().spacing(spacing::MD).push(left).push(right)),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::callout)
    .into()
}

fn build_actions<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let status = ctx.state.session.status();

    let back = button(Text::new(format!("← {}", i18n.tr("render-back"))))
        .on_press(Message::Back)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected);

    let mut row = Row::new()
        .push(back)
        .push(Space::new().width(Length::Fill));

    match status {
        RenderStatus::NotStarted => {
            row = row.push(
                button(Text::new(format!("▶ {}", i18n.tr("render-start"))))
                    .on_press(Message::Start)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary),
            );
        }
        RenderStatus::Completed => {
            row = row.push(
                button(Text::new(format!("⬇ {}", i18n.tr("render-download"))))
                    .on_press(Message::Download)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::success),
            );
        }
        RenderStatus::Preparing | RenderStatus::Rendering | RenderStatus::Failed => {}
    }

    row.into()
}
