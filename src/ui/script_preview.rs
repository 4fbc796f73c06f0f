// SPDX-License-Identifier: MPL-2.0
//! Second wizard step: review and edit the generated script.
//!
//! The editor starts with the generated text and is never regenerated while
//! the step is alive. Copying and saving act on the edited text; the effects
//! themselves (clipboard, dialog, write) are run by the application.

use crate::app::config::COPY_FEEDBACK_MS;
use crate::domain::requirements::{Customizations, Requirements};
use crate::domain::script;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text_editor, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Font, Length};
use std::time::{Duration, Instant};

/// Editor and transient feedback state.
pub struct State {
    content: text_editor::Content,
    copied_at: Option<Instant>,
    saving: bool,
}

impl State {
    #[must_use]
    pub fn new(script: &str) -> Self {
        Self {
            content: text_editor::Content::with_text(script),
            copied_at: None,
            saving: false,
        }
    }

    /// Current editor text.
    #[must_use]
    pub fn text(&self) -> String {
        self.content.text()
    }

    /// Whether the "Copied!" label is showing.
    #[must_use]
    pub fn shows_copied(&self) -> bool {
        self.copied_at.is_some()
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Marks the end of a save attempt started through [`Event::SaveRequested`].
    pub fn finish_saving(&mut self) {
        self.saving = false;
    }

    /// Clears the copy feedback once it has been visible long enough.
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.copied_at {
            if now.duration_since(at) >= Duration::from_millis(COPY_FEEDBACK_MS) {
                self.copied_at = None;
            }
        }
    }

    fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Edit(text_editor::Action),
    Copy,
    Save,
    Approve,
    Back,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    CopyRequested(String),
    SaveRequested { file_name: String, contents: String },
    /// Carries the edited script forward to the render step.
    Approved(String),
    Back,
}

pub fn update(state: &mut State, message: Message, requirements: &Requirements) -> Event {
    match message {
        Message::Edit(action) => {
            state.content.perform(action);
            Event::None
        }
        Message::Copy => {
            state.mark_copied(Instant::now());
            Event::CopyRequested(state.text())
        }
        Message::Save => {
            if state.saving {
                return Event::None;
            }
            state.saving = true;
            Event::SaveRequested {
                file_name: script::script_file_name(requirements.topic()),
                contents: state.text(),
            }
        }
        Message::Approve => Event::Approved(state.text()),
        Message::Back => Event::Back,
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
    let requirements = ctx.requirements;

    let subtitle = format!(
        "{} • {} • {}",
        requirements.topic(),
        i18n.tr(requirements.level().i18n_key()),
        i18n.tr_with_args(
            "preview-minutes",
            &[("minutes", &requirements.duration().to_string())]
        ),
    );
    let header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("preview-title")).size(typography::TITLE_MD))
        .push(Text::new(subtitle).size(typography::BODY));

    let copy_label = if ctx.state.shows_copied() {
        format!("✓ {}", i18n.tr("preview-copied"))
    } else {
        i18n.tr("preview-copy")
    };
    let copy = button(Text::new(copy_label).size(typography::BODY_SM))
        .on_press(Message::Copy)
        .style(styles::button::unselected);
    let save = button(Text::new(i18n.tr("preview-save")).size(typography::BODY_SM))
        .on_press_maybe((!ctx.state.is_saving()).then_some(Message::Save))
        .style(styles::button::chip);

    let editor_header = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr("preview-editor-title")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(copy)
        .push(save);

    let editor = text_editor(&ctx.state.content)
        .placeholder(i18n.tr("preview-editor-placeholder"))
        .on_action(Message::Edit)
        .font(Font::MONOSPACE)
        .size(typography::BODY_SM)
        .height(Length::Fixed(sizing::EDITOR_HEIGHT));

    let back = button(Text::new(format!("← {}", i18n.tr("preview-back"))))
        .on_press(Message::Back)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected);
    let approve = button(Text::new(format!("{} →", i18n.tr("preview-approve"))))
        .on_press(Message::Approve)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    let actions = Row::new()
        .push(back)
        .push(Space::new().width(Length::Fill))
        .push(approve);

    let content = Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(build_summary(&ctx))
        .push(editor_header)
        .push(editor)
        .push(build_instructions(&ctx))
        .push(actions);

    Container::new(content)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .style(styles::container::panel)
        .into()
}

fn summary_field<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::FillPortion(1))
        .push(Text::new(label).size(typography::BODY_SM))
        .push(Text::new(value).size(typography::BODY))
        .into()
}

fn build_summary<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let requirements = ctx.requirements;

    let fields = Row::new()
        .spacing(spacing::MD)
        .push(summary_field(
            i18n.tr("summary-topic"),
            requirements.topic().to_string(),
        ))
        .push(summary_field(
            i18n.tr("summary-level"),
            i18n.tr(requirements.level().i18n_key()),
        ))
        .push(summary_field(
            i18n.tr("summary-style"),
            i18n.tr(requirements.style().i18n_key()),
        ));

    let mut chips = Row::new().spacing(spacing::XS);
    for concept in requirements.concepts() {
        chips = chips.push(
            container(Text::new(concept.as_str()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::chip),
        );
    }

    let mut inner = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("summary-title")).size(typography::TITLE_SM))
        .push(fields)
        .push(Text::new(i18n.tr("summary-concepts")).size(typography::BODY_SM))
        .push(chips);

    let description = requirements.description().trim();
    if !description.is_empty() {
        inner = inner.push(summary_field(
            i18n.tr("requirements-description-label"),
            description.to_string(),
        ));
    }
    inner = inner.push(summary_field(
        i18n.tr("requirements-customizations-label"),
        customization_labels(i18n, requirements.customizations()).join(" • "),
    ));

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

/// Color scheme followed by the enabled extras, localized.
fn customization_labels(i18n: &I18n, customizations: Customizations) -> Vec<String> {
    let mut labels = vec![i18n.tr(customizations.color_scheme.i18n_key())];
    let extras = [
        (customizations.include_narration, "requirements-narration"),
        (customizations.include_subtitles, "requirements-subtitles"),
        (customizations.background_music, "requirements-music"),
    ];
    labels.extend(
        extras
            .into_iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, key)| i18n.tr(key)),
    );
    labels
}

fn instruction_line<'a>(label: String, command: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(
            container(
                Text::new(command)
                    .font(Font::MONOSPACE)
                    .size(typography::BODY_SM),
            )
            .padding([0.0, spacing::XS])
            .style(styles::container::chip),
        )
        .into()
}

fn build_instructions<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let topic = ctx.requirements.topic();

    let inner = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("setup-title")).size(typography::TITLE_SM))
        .push(instruction_line(
            i18n.tr("setup-install"),
            "pip install manim".to_string(),
        ))
        .push(instruction_line(
            i18n.tr("setup-save"),
            script::setup_file_name(topic),
        ))
        .push(instruction_line(
            i18n.tr("setup-render"),
            format!("manim -pqh your_script.py {}", script::class_name(topic)),
        ));

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::callout)
        .into()
}
