// SPDX-License-Identifier: MPL-2.0
//! Generator screen: the three-step wizard.
//!
//! The visible step and the data owned by that step live together in
//! [`Stage`], so a step can never be shown without its inputs. Moving
//! between stages goes through [`WizardStep::apply`]; the data handed to the
//! next stage is built here.

use crate::domain::render::{RenderSettings, RenderStatus};
use crate::domain::requirements::{Requirements, RequirementsDraft};
use crate::domain::script;
use crate::domain::wizard::{StepStatus, Transition, WizardStep};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::{render_view, requirements_form, script_preview};
use iced::widget::{container, rule, text, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length, Theme};
use std::time::Instant;

/// Wizard position plus the data owned by the current step.
pub enum Stage {
    Requirements(requirements_form::State),
    Preview {
        requirements: Requirements,
        preview: script_preview::State,
    },
    Render {
        requirements: Requirements,
        /// Edited script, restored if the user goes back.
        script: String,
        render: render_view::State,
    },
}

impl Stage {
    #[must_use]
    pub fn step(&self) -> WizardStep {
        match self {
            Stage::Requirements(_) => WizardStep::Requirements,
            Stage::Preview { .. } => WizardStep::Preview,
            Stage::Render { .. } => WizardStep::Render,
        }
    }
}

pub struct State {
    stage: Stage,
    render_defaults: RenderSettings,
}

impl State {
    /// Starts at the requirements step with an empty `draft`.
    #[must_use]
    pub fn new(draft: RequirementsDraft, render_defaults: RenderSettings) -> Self {
        Self {
            stage: Stage::Requirements(requirements_form::State::new(draft)),
            render_defaults,
        }
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.stage.step()
    }

    /// Whether a render session is in flight.
    #[must_use]
    pub fn is_rendering(&self) -> bool {
        matches!(&self.stage, Stage::Render { render, .. } if render.is_running())
    }

    /// Whether the preview step is waiting on time-based feedback.
    #[must_use]
    pub fn has_pending_feedback(&self) -> bool {
        matches!(&self.stage, Stage::Preview { preview, .. } if preview.shows_copied())
    }

    /// Leaves the render step, dropping its session. Used when the screen is left.
    pub fn abandon_render(&mut self) {
        let Stage::Render { render, .. } = &self.stage else {
            return;
        };
        if render.session().status() != RenderStatus::NotStarted {
            tracing::info!("Render session discarded");
        }
        self.go(Transition::Back);
    }

    /// Housekeeping tick for transient labels.
    pub fn tick(&mut self, now: Instant) {
        if let Stage::Preview { preview, .. } = &mut self.stage {
            preview.tick(now);
        }
    }

    /// Ends a save started by the preview step.
    pub fn finish_saving(&mut self) {
        if let Stage::Preview { preview, .. } = &mut self.stage {
            preview.finish_saving();
        }
    }

    fn go(&mut self, transition: Transition) {
        self.go_with(transition, None, None);
    }

    /// Applies a transition, rebuilding the data for the target step.
    ///
    /// `submitted` is required to enter the preview; `approved_script`
    /// overrides the editor text when entering the render step.
    fn go_with(
        &mut self,
        transition: Transition,
        submitted: Option<Requirements>,
        approved_script: Option<String>,
    ) {
        let from = self.stage.step();
        let to = from.apply(transition);
        if to == from {
            return;
        }

        let placeholder = Stage::Requirements(requirements_form::State::new(
            RequirementsDraft::default(),
        ));
        let previous = std::mem::replace(&mut self.stage, placeholder);

        self.stage = match (previous, to) {
            (Stage::Requirements(form), WizardStep::Preview) => match submitted {
                Some(requirements) => {
                    let generated = script::generate(&requirements);
                    Stage::Preview {
                        preview: script_preview::State::new(&generated),
                        requirements,
                    }
                }
                None => Stage::Requirements(form),
            },
            (Stage::Preview { requirements, .. }, WizardStep::Requirements) => {
                Stage::Requirements(requirements_form::State::new(requirements.into_draft()))
            }
            (
                Stage::Preview {
                    requirements,
                    preview,
                },
                WizardStep::Render,
            ) => {
                let script = approved_script.unwrap_or_else(|| preview.text());
                Stage::Render {
                    render: render_view::State::new(requirements.topic(), self.render_defaults),
                    requirements,
                    script,
                }
            }
            (
                Stage::Render {
                    requirements,
                    script,
                    ..
                },
                WizardStep::Preview,
            ) => Stage::Preview {
                preview: script_preview::State::new(&script),
                requirements,
            },
            (stage, _) => stage,
        };

        tracing::info!(from = ?from, to = ?self.stage.step(), "Wizard step changed");
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Form(requirements_form::Message),
    Preview(script_preview::Message),
    Render(render_view::Message),
}

/// Effects the application has to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    CopyToClipboard(String),
    SaveScript { file_name: String, contents: String },
    /// Render settings were changed; they also preset later render steps.
    RenderSettingsChanged(RenderSettings),
    RenderStarted,
    RenderCompleted { output: String },
    VideoDownload { file_name: String, output: String },
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Form(msg) => {
            let Stage::Requirements(form) = &mut state.stage else {
                return Event::None;
            };
            match requirements_form::update(form, msg) {
                requirements_form::Event::Submitted(requirements) => {
                    state.go_with(Transition::Submit, Some(requirements), None);
                }
                requirements_form::Event::None => {}
            }
            Event::None
        }
        Message::Preview(msg) => {
            let Stage::Preview {
                requirements,
                preview,
            } = &mut state.stage
            else {
                return Event::None;
            };
            match script_preview::update(preview, msg, requirements) {
                script_preview::Event::None => Event::None,
                script_preview::Event::CopyRequested(text) => Event::CopyToClipboard(text),
                script_preview::Event::SaveRequested {
                    file_name,
                    contents,
                } => Event::SaveScript {
                    file_name,
                    contents,
                },
                script_preview::Event::Approved(script) => {
                    state.go_with(Transition::Approve, None, Some(script));
                    Event::None
                }
                script_preview::Event::Back => {
                    state.go(Transition::Back);
                    Event::None
                }
            }
        }
        Message::Render(msg) => {
            let Stage::Render {
                requirements,
                render,
                ..
            } = &mut state.stage
            else {
                return Event::None;
            };
            match render_view::update(render, msg, requirements) {
                render_view::Event::None => Event::None,
                render_view::Event::SettingsChanged(settings) => {
                    state.render_defaults = settings;
                    Event::RenderSettingsChanged(settings)
                }
                render_view::Event::Started => Event::RenderStarted,
                render_view::Event::Completed { output } => Event::RenderCompleted { output },
                render_view::Event::DownloadRequested { file_name, output } => {
                    Event::VideoDownload { file_name, output }
                }
                render_view::Event::Back => {
                    state.go(Transition::Back);
                    Event::None
                }
            }
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let body: Element<'_, Message> = match &ctx.state.stage {
        Stage::Requirements(form) => {
            requirements_form::view(requirements_form::ViewContext { i18n, state: form })
                .map(Message::Form)
        }
        Stage::Preview {
            requirements,
            preview,
        } => script_preview::view(script_preview::ViewContext {
            i18n,
            requirements,
            state: preview,
        })
        .map(Message::Preview),
        Stage::Render {
            requirements,
            render,
            ..
        } => render_view::view(render_view::ViewContext {
            i18n,
            requirements,
            state: render,
        })
        .map(Message::Render),
    };

    let hero = Column::new()
        .spacing(spacing::XS)
        .align_x(iced::Alignment::Center)
        .push(Text::new(i18n.tr("generator-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("generator-subtitle")).size(typography::BODY_LG));

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .align_x(iced::Alignment::Center)
        .width(Length::Fill)
        .push(hero)
        .push(step_indicator(i18n, ctx.state.step()))
        .push(body);

    iced::widget::scrollable(content).into()
}

fn step_indicator<'a>(i18n: &I18n, current: WizardStep) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM).align_y(Vertical::Center);

    for (index, step) in WizardStep::ALL.into_iter().enumerate() {
        if index > 0 {
            let reached = step <= current;
            row = row.push(
                container(rule::horizontal(2).style(move |theme: &Theme| {
                    let mut style = rule::default(theme);
                    if reached {
                        style.color = palette::PRIMARY_500;
                    }
                    style
                }))
                .width(Length::Fixed(sizing::STEP_BUBBLE * 2.0)),
            );
        }

        let status = step.status_relative_to(current);
        let marker = match status {
            StepStatus::Completed => "✓".to_string(),
            StepStatus::Current | StepStatus::Upcoming => step.number().to_string(),
        };
        let bubble = Container::new(Text::new(marker).size(typography::BODY))
            .center_x(Length::Fixed(sizing::STEP_BUBBLE))
            .center_y(Length::Fixed(sizing::STEP_BUBBLE))
            .style(styles::container::step_bubble(status != StepStatus::Upcoming));

        let label_color = (status == StepStatus::Upcoming).then_some(palette::GRAY_400);
        let label = Text::new(i18n.tr(step.i18n_key()))
            .size(typography::BODY_SM)
            .style(move |_theme: &Theme| text::Style { color: label_color });

        row = row.push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(bubble)
                .push(label),
        );
    }

    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::render::{RenderQuality, RenderSession};
    use crate::domain::requirements::EducationLevel;
    use iced::widget::text_editor;
    use std::sync::Arc;

    fn new_state() -> State {
        State::new(RequirementsDraft::default(), RenderSettings::default())
    }

    fn fill_form(state: &mut State, topic: &str, concepts: &[&str]) {
        update(
            state,
            Message::Form(requirements_form::Message::TopicChanged(topic.into())),
        );
        for concept in concepts {
            update(
                state,
                Message::Form(requirements_form::Message::ConceptInputChanged(
                    (*concept).into(),
                )),
            );
            update(state, Message::Form(requirements_form::Message::AddConcept));
        }
    }

    fn submit(state: &mut State) {
        update(state, Message::Form(requirements_form::Message::Submit));
    }

    #[test]
    fn submit_generates_script_in_preview() {
        let mut state = new_state();
        fill_form(&mut state, "Waves", &["Amplitude", "Frequency"]);
        submit(&mut state);

        let Stage::Preview {
            requirements,
            preview,
        } = state.stage()
        else {
            panic!("expected preview stage");
        };
        assert_eq!(requirements.topic(), "Waves");
        let text = preview.text();
        assert!(text.contains("Waves"));
        let amplitude = text.find("def amplitude_scene").expect("amplitude block");
        let frequency = text.find("def frequency_scene").expect("frequency block");
        assert!(amplitude < frequency);
    }

    #[test]
    fn back_from_preview_reseeds_form() {
        let mut state = new_state();
        fill_form(&mut state, "Waves", &["Amplitude", "Frequency"]);
        update(
            &mut state,
            Message::Form(requirements_form::Message::LevelSelected(
                EducationLevel::College,
            )),
        );
        submit(&mut state);
        let Stage::Preview { requirements, .. } = state.stage() else {
            panic!("expected preview stage");
        };
        let submitted = requirements.clone();

        update(&mut state, Message::Preview(script_preview::Message::Back));

        let Stage::Requirements(form) = state.stage() else {
            panic!("expected requirements stage");
        };
        assert_eq!(form.draft(), &submitted.into_draft());
        assert_eq!(form.draft().level, EducationLevel::College);
        assert_eq!(
            form.draft().concepts(),
            ["Amplitude".to_string(), "Frequency".to_string()]
        );
    }

    #[test]
    fn back_from_render_restores_edited_script() {
        let mut state = new_state();
        fill_form(&mut state, "Waves", &["Amplitude"]);
        submit(&mut state);
        update(
            &mut state,
            Message::Preview(script_preview::Message::Edit(text_editor::Action::Edit(
                text_editor::Edit::Paste(Arc::new("# tuned by hand\n".to_string())),
            ))),
        );
        let Stage::Preview {
            requirements,
            preview,
        } = state.stage()
        else {
            panic!("expected preview stage");
        };
        let edited = preview.text();
        assert!(edited.starts_with("# tuned by hand"));
        assert_ne!(edited.trim_end(), script::generate(requirements).trim_end());

        update(&mut state, Message::Preview(script_preview::Message::Approve));
        let Stage::Render { script, .. } = state.stage() else {
            panic!("expected render stage");
        };
        assert_eq!(script, &edited);

        update(&mut state, Message::Render(render_view::Message::Back));
        let Stage::Preview { preview, .. } = state.stage() else {
            panic!("expected preview stage");
        };
        assert_eq!(preview.text().trim_end(), edited.trim_end());
    }

    #[test]
    fn render_settings_preset_the_next_render_step() {
        let mut state = new_state();
        fill_form(&mut state, "Waves", &["Amplitude"]);
        submit(&mut state);
        update(&mut state, Message::Preview(script_preview::Message::Approve));

        let event = update(
            &mut state,
            Message::Render(render_view::Message::QualitySelected(RenderQuality::Ultra)),
        );
        let Event::RenderSettingsChanged(settings) = event else {
            panic!("unexpected event: {event:?}");
        };
        assert_eq!(settings.quality, RenderQuality::Ultra);

        update(&mut state, Message::Render(render_view::Message::Back));
        update(&mut state, Message::Preview(script_preview::Message::Approve));
        let Stage::Render { render, .. } = state.stage() else {
            panic!("expected render stage");
        };
        assert_eq!(render.settings().quality, RenderQuality::Ultra);
    }

    #[test]
    fn full_render_emits_lifecycle_events() {
        let mut state = new_state();
        fill_form(&mut state, "Waves", &["Amplitude"]);
        submit(&mut state);
        update(&mut state, Message::Preview(script_preview::Message::Approve));

        assert_eq!(
            update(&mut state, Message::Render(render_view::Message::Start)),
            Event::RenderStarted
        );
        assert!(state.is_rendering());

        let mut last = Event::None;
        for _ in 0..RenderSession::step_count() {
            last = update(&mut state, Message::Render(render_view::Message::Tick));
        }
        assert!(matches!(last, Event::RenderCompleted { .. }));
        assert!(!state.is_rendering());
    }

    #[test]
    fn abandoning_render_returns_to_preview() {
        let mut state = new_state();
        fill_form(&mut state, "Waves", &["Amplitude"]);
        submit(&mut state);
        update(&mut state, Message::Preview(script_preview::Message::Approve));
        update(&mut state, Message::Render(render_view::Message::Start));

        state.abandon_render();
        assert_eq!(state.step(), WizardStep::Preview);
        assert!(!state.is_rendering());
    }

    #[test]
    fn messages_for_other_steps_are_ignored() {
        let mut state = new_state();
        let event = update(&mut state, Message::Render(render_view::Message::Start));
        assert_eq!(event, Event::None);
        assert_eq!(state.step(), WizardStep::Requirements);
    }

    #[test]
    fn view_renders_each_step() {
        let i18n = I18n::default();
        let mut state = new_state();
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
        fill_form(&mut state, "Waves", &["Amplitude"]);
        submit(&mut state);
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
        update(&mut state, Message::Preview(script_preview::Message::Approve));
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
