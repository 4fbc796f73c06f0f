// SPDX-License-Identifier: MPL-2.0
//! First wizard step: collects the requirements record.
//!
//! The form edits a [`RequirementsDraft`] in place and only hands a frozen
//! [`Requirements`] to the parent once the draft validates. The submit
//! button stays disabled until then.

use crate::domain::requirements::{
    AnimationStyle, ColorScheme, EducationLevel, LessonMinutes, Requirements, RequirementsDraft,
    PRESET_TOPICS,
};
use crate::i18n::fluent::I18n;
use crate::ui::choice::{self, Choice};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, container, pick_list, text, text_editor, text_input, toggler, Column, Container, Row,
    Text,
};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Presets shown per row.
const PRESETS_PER_ROW: usize = 4;

/// Form state.
pub struct State {
    draft: RequirementsDraft,
    concept_input: String,
    duration_input: String,
    description: text_editor::Content,
}

impl State {
    /// Creates a form editing `draft`.
    #[must_use]
    pub fn new(draft: RequirementsDraft) -> Self {
        let duration_input = draft.duration.to_string();
        let description = text_editor::Content::with_text(&draft.description);
        Self {
            draft,
            concept_input: String::new(),
            duration_input,
            description,
        }
    }

    #[must_use]
    pub fn draft(&self) -> &RequirementsDraft {
        &self.draft
    }

    #[must_use]
    pub fn concept_input(&self) -> &str {
        &self.concept_input
    }

    /// Whether the duration field holds text that is not a valid minute count.
    #[must_use]
    pub fn duration_input_is_invalid(&self) -> bool {
        LessonMinutes::parse(&self.duration_input).is_none()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TopicChanged(String),
    PresetSelected(&'static str),
    LevelSelected(EducationLevel),
    DurationChanged(String),
    StyleSelected(AnimationStyle),
    ConceptInputChanged(String),
    AddConcept,
    RemoveConcept(String),
    DescriptionEdited(text_editor::Action),
    ColorSchemeSelected(ColorScheme),
    NarrationToggled(bool),
    SubtitlesToggled(bool),
    MusicToggled(bool),
    Submit,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submitted(Requirements),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TopicChanged(topic) => state.draft.topic = topic,
        Message::PresetSelected(topic) => state.draft.topic = topic.to_string(),
        Message::LevelSelected(level) => state.draft.level = level,
        Message::DurationChanged(input) => {
            // Out-of-range text stays in the field; the last valid value is kept.
            if let Some(minutes) = LessonMinutes::parse(&input) {
                state.draft.duration = minutes;
            }
            state.duration_input = input;
        }
        Message::StyleSelected(style) => state.draft.style = style,
        Message::ConceptInputChanged(input) => state.concept_input = input,
        Message::AddConcept => {
            if state.draft.add_concept(&state.concept_input) {
                state.concept_input.clear();
            }
        }
        Message::RemoveConcept(label) => {
            state.draft.remove_concept(&label);
        }
        Message::DescriptionEdited(action) => {
            state.description.perform(action);
            state.draft.description = state.description.text();
        }
        Message::ColorSchemeSelected(scheme) => state.draft.customizations.color_scheme = scheme,
        Message::NarrationToggled(on) => state.draft.customizations.include_narration = on,
        Message::SubtitlesToggled(on) => state.draft.customizations.include_subtitles = on,
        Message::MusicToggled(on) => state.draft.customizations.background_music = on,
        Message::Submit => {
            return match state.draft.submit() {
                Ok(requirements) => Event::Submitted(requirements),
                Err(err) => {
                    tracing::debug!(reason = %err, "Submission rejected");
                    Event::None
                }
            };
        }
    }
    Event::None
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let draft = &state.draft;

    let header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("requirements-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("requirements-subtitle")).size(typography::BODY));

    let topic = Column::new()
        .spacing(spacing::XS)
        .push(field_label(i18n.tr("requirements-topic-label")))
        .push(
            text_input(&i18n.tr("requirements-topic-placeholder"), &draft.topic)
                .on_input(Message::TopicChanged)
                .padding(spacing::XS),
        )
        .push(
            Text::new(i18n.tr("requirements-presets-label"))
                .size(typography::CAPTION)
                .style(muted),
        )
        .push(build_presets(&draft.topic));

    let level_choices = choice::localized(i18n, &EducationLevel::ALL, EducationLevel::i18n_key);
    let level_selected = choice::find(&level_choices, &draft.level);
    let level = labelled(
        i18n.tr("requirements-level-label"),
        pick_list(level_choices, level_selected, |c: Choice<EducationLevel>| {
            Message::LevelSelected(c.value)
        })
        .padding(spacing::XS)
        .width(Length::Fill)
        .into(),
    );

    let mut duration_field = Column::new().spacing(spacing::XXS).push(
        text_input("3", &state.duration_input)
            .on_input(Message::DurationChanged)
            .padding(spacing::XS),
    );
    if state.duration_input_is_invalid() {
        duration_field = duration_field.push(
            Text::new(i18n.tr("requirements-duration-hint"))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::WARNING_500),
                }),
        );
    }
    let duration = labelled(i18n.tr("requirements-duration-label"), duration_field.into());

    let style_choices = choice::localized(i18n, &AnimationStyle::ALL, AnimationStyle::i18n_key);
    let style_selected = choice::find(&style_choices, &draft.style);
    let style = labelled(
        i18n.tr("requirements-style-label"),
        pick_list(style_choices, style_selected, |c: Choice<AnimationStyle>| {
            Message::StyleSelected(c.value)
        })
        .padding(spacing::XS)
        .width(Length::Fill)
        .into(),
    );

    let duration_and_style = Row::new()
        .spacing(spacing::MD)
        .push(Container::new(duration).width(Length::FillPortion(1)))
        .push(Container::new(style).width(Length::FillPortion(1)));

    let description = labelled(
        i18n.tr("requirements-description-label"),
        text_editor(&state.description)
            .placeholder(i18n.tr("requirements-description-placeholder"))
            .on_action(Message::DescriptionEdited)
            .height(Length::Fixed(96.0))
            .into(),
    );

    let submit = button(
        container(Text::new(i18n.tr("requirements-submit")).size(typography::BODY_LG))
            .center_x(Length::Fill),
    )
    .on_press_maybe(draft.can_submit().then_some(Message::Submit))
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(topic)
        .push(level)
        .push(duration_and_style)
        .push(build_concepts(&ctx))
        .push(description)
        .push(build_customizations(&ctx))
        .push(submit);

    Container::new(content)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .style(styles::container::panel)
        .into()
}

fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}

fn field_label<'a>(label: String) -> Text<'a> {
    Text::new(label).size(typography::BODY_SM)
}

fn labelled<'a>(label: String, field: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(field_label(label))
        .push(field)
        .into()
}

fn build_presets<'a>(current_topic: &str) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::XS);
    for chunk in PRESET_TOPICS.chunks(PRESETS_PER_ROW) {
        let mut row = Row::new().spacing(spacing::XS);
        for &topic in chunk {
            let chip = button(Text::new(topic).size(typography::CAPTION))
                .on_press(Message::PresetSelected(topic))
                .padding([spacing::XXS, spacing::SM])
                .style(if topic == current_topic {
                    styles::button::selected
                } else {
                    styles::button::chip
                });
            row = row.push(chip);
        }
        rows = rows.push(row);
    }
    rows.into()
}

fn build_concepts<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let input = text_input(&i18n.tr("requirements-concept-placeholder"), &state.concept_input)
        .on_input(Message::ConceptInputChanged)
        .on_submit(Message::AddConcept)
        .padding(spacing::XS);

    let add = button(Text::new("+").size(typography::BODY_LG))
        .on_press_maybe(
            (!state.concept_input.trim().is_empty()).then_some(Message::AddConcept),
        )
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let entry = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(input)
        .push(add);

    let mut section = Column::new()
        .spacing(spacing::XS)
        .push(field_label(i18n.tr("requirements-concepts-label")))
        .push(entry);

    if state.draft.concepts().is_empty() {
        section = section.push(
            Text::new(i18n.tr("requirements-concepts-empty"))
                .size(typography::CAPTION)
                .style(muted),
        );
    } else {
        let mut chips = Row::new().spacing(spacing::XS);
        for concept in state.draft.concepts() {
            let remove = button(Text::new("×").size(typography::BODY_SM))
                .on_press(Message::RemoveConcept(concept.clone()))
                .padding([0.0, spacing::XXS])
                .style(styles::button::chip);
            let chip = Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(Text::new(concept.as_str()).size(typography::BODY_SM))
                .push(remove);
            chips = chips.push(
                container(chip)
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::chip),
            );
        }
        section = section.push(chips);
    }

    section.into()
}

fn build_customizations<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let customizations = ctx.state.draft.customizations;

    let scheme_choices = choice::localized(i18n, &ColorScheme::ALL, ColorScheme::i18n_key);
    let scheme_selected = choice::find(&scheme_choices, &customizations.color_scheme);
    let scheme = labelled(
        i18n.tr("requirements-color-scheme-label"),
        pick_list(scheme_choices, scheme_selected, |c: Choice<ColorScheme>| {
            Message::ColorSchemeSelected(c.value)
        })
        .padding(spacing::XS)
        .width(Length::Fill)
        .into(),
    );

    let toggles = Column::new()
        .spacing(spacing::XS)
        .push(
            toggler(customizations.include_subtitles)
                .label(i18n.tr("requirements-subtitles"))
                .on_toggle(Message::SubtitlesToggled),
        )
        .push(
            toggler(customizations.include_narration)
                .label(i18n.tr("requirements-narration"))
                .on_toggle(Message::NarrationToggled),
        )
        .push(
            toggler(customizations.background_music)
                .label(i18n.tr("requirements-music"))
                .on_toggle(Message::MusicToggled),
        );

    Column::new()
        .spacing(spacing::XS)
        .push(field_label(i18n.tr("requirements-customizations-label")))
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(Container::new(scheme).width(Length::FillPortion(1)))
                .push(Container::new(toggles).width(Length::FillPortion(1))),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> State {
        State::new(RequirementsDraft::default())
    }

    #[test]
    fn submit_is_blocked_until_topic_and_concept() {
        let mut state = fresh();
        assert!(matches!(update(&mut state, Message::Submit), Event::None));

        update(&mut state, Message::TopicChanged("Waves".into()));
        assert!(matches!(update(&mut state, Message::Submit), Event::None));

        update(&mut state, Message::ConceptInputChanged("Frequency".into()));
        update(&mut state, Message::AddConcept);
        match update(&mut state, Message::Submit) {
            Event::Submitted(requirements) => {
                assert_eq!(requirements.topic(), "Waves");
                assert_eq!(requirements.concepts(), ["Frequency".to_string()]);
            }
            Event::None => panic!("expected submission"),
        }
    }

    #[test]
    fn adding_concept_clears_input_only_when_accepted() {
        let mut state = fresh();
        update(&mut state, Message::ConceptInputChanged(" Limits ".into()));
        update(&mut state, Message::AddConcept);
        assert_eq!(state.concept_input(), "");
        assert_eq!(state.draft().concepts(), ["Limits".to_string()]);

        update(&mut state, Message::ConceptInputChanged("Limits".into()));
        update(&mut state, Message::AddConcept);
        assert_eq!(state.concept_input(), "Limits", "duplicate stays in the field");
        assert_eq!(state.draft().concepts().len(), 1);
    }

    #[test]
    fn removing_concept_keeps_order() {
        let mut state = fresh();
        for concept in ["A", "B", "C"] {
            update(&mut state, Message::ConceptInputChanged(concept.into()));
            update(&mut state, Message::AddConcept);
        }
        update(&mut state, Message::RemoveConcept("B".into()));
        assert_eq!(state.draft().concepts(), ["A".to_string(), "C".to_string()]);
    }

    #[test]
    fn invalid_duration_keeps_last_valid_value() {
        let mut state = fresh();
        update(&mut state, Message::DurationChanged("7".into()));
        assert_eq!(state.draft().duration.value(), 7);
        assert!(!state.duration_input_is_invalid());

        update(&mut state, Message::DurationChanged("42".into()));
        assert_eq!(state.draft().duration.value(), 7);
        assert!(state.duration_input_is_invalid());
    }

    #[test]
    fn preset_replaces_topic() {
        let mut state = fresh();
        update(&mut state, Message::TopicChanged("draft".into()));
        update(&mut state, Message::PresetSelected(PRESET_TOPICS[2]));
        assert_eq!(state.draft().topic, PRESET_TOPICS[2]);
    }

    #[test]
    fn toggles_update_customizations() {
        let mut state = fresh();
        update(&mut state, Message::NarrationToggled(true));
        update(&mut state, Message::SubtitlesToggled(false));
        update(&mut state, Message::MusicToggled(true));
        update(&mut state, Message::ColorSchemeSelected(ColorScheme::Pastel));
        let c = state.draft().customizations;
        assert!(c.include_narration);
        assert!(!c.include_subtitles);
        assert!(c.background_music);
        assert_eq!(c.color_scheme, ColorScheme::Pastel);
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let state = fresh();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
