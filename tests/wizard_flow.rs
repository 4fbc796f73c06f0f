// SPDX-License-Identifier: MPL-2.0
//! End-to-end walk through the wizard's domain rules.

use chrono::{Duration, Local, TimeZone};
use manim_studio::domain::catalog::{sample_catalog, CatalogQuery, LevelFilter, SortKey};
use manim_studio::domain::render::{RenderSession, RenderStatus, INITIAL_LOG_LINE, RENDER_STEPS};
use manim_studio::domain::requirements::{
    AnimationStyle, EducationLevel, LessonMinutes, RequirementsDraft, RequirementsError,
};
use manim_studio::domain::script;
use manim_studio::domain::wizard::{Transition, WizardStep};

fn calculus_draft() -> RequirementsDraft {
    let mut draft = RequirementsDraft::with_defaults(
        EducationLevel::College,
        LessonMinutes::new(5),
        AnimationStyle::Animated2d,
    );
    draft.topic = "Calculus: Derivatives".to_string();
    assert!(draft.add_concept("Limit Definition"));
    assert!(draft.add_concept("Power Rule"));
    draft
}

#[test]
fn requirements_to_completed_render() {
    let mut step = WizardStep::default();

    // Step 1: an incomplete draft cannot be submitted.
    let mut draft = RequirementsDraft::default();
    assert_eq!(draft.submit(), Err(RequirementsError::EmptyTopic));
    draft.topic = "   ".to_string();
    assert_eq!(draft.submit(), Err(RequirementsError::EmptyTopic));

    let requirements = calculus_draft().submit().expect("valid draft");
    step = step.apply(Transition::Submit);
    assert_eq!(step, WizardStep::Preview);

    // Step 2: the generated script reflects the record.
    let generated = script::generate(&requirements);
    assert!(generated.contains("class Calculus:DerivativesVideo(Scene):"));
    assert!(generated.contains("self.limit_definition_scene()"));
    assert!(generated.contains("self.power_rule_scene()"));
    assert!(generated.contains("Generated Manim script for college level"));
    assert_eq!(
        script::script_file_name(requirements.topic()),
        "calculus:_derivatives_manim_script.py"
    );

    step = step.apply(Transition::Approve);
    assert_eq!(step, WizardStep::Render);

    // Step 3: the simulated render walks every step once.
    let start = Local
        .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    let mut session = RenderSession::new(requirements.topic());
    assert!(session.start(start));
    assert_eq!(session.log()[0].message, INITIAL_LOG_LINE);

    let mut now = start;
    for index in 0..RENDER_STEPS.len() {
        now += Duration::milliseconds(1500);
        let status = session.tick(now);
        if index + 1 < RENDER_STEPS.len() {
            assert_eq!(status, RenderStatus::Rendering);
            assert!(session.output().is_none());
        } else {
            assert_eq!(status, RenderStatus::Completed);
        }
    }

    assert_eq!(session.progress_percent(), 100.0);
    assert_eq!(session.log().len(), RENDER_STEPS.len() + 1);
    let output = session.output().expect("completed session has output");
    assert!(output.starts_with("/videos/calculus:_derivatives_"));
    assert!(output.ends_with(".mp4"));

    // Further ticks change nothing.
    assert_eq!(session.tick(now), RenderStatus::Completed);
    assert_eq!(session.log().len(), RENDER_STEPS.len() + 1);
}

#[test]
fn going_back_restores_the_submitted_draft() {
    let requirements = calculus_draft().submit().expect("valid draft");
    let step = WizardStep::Preview.apply(Transition::Back);
    assert_eq!(step, WizardStep::Requirements);

    let draft = requirements.clone().into_draft();
    assert_eq!(draft.topic, "Calculus: Derivatives");
    assert_eq!(draft.concepts(), requirements.concepts());
    assert_eq!(draft.submit(), Ok(requirements));
}

#[test]
fn undefined_transitions_keep_the_step() {
    assert_eq!(
        WizardStep::Requirements.apply(Transition::Back),
        WizardStep::Requirements
    );
    assert_eq!(
        WizardStep::Requirements.apply(Transition::Approve),
        WizardStep::Requirements
    );
    assert_eq!(WizardStep::Render.apply(Transition::Submit), WizardStep::Render);
}

#[test]
fn library_query_combines_search_level_and_sort() {
    let catalog = sample_catalog();
    let query = CatalogQuery {
        search: "  ".to_string(),
        level: LevelFilter::All,
        sort: SortKey::Duration,
    };
    let durations: Vec<u8> = query
        .apply(&catalog)
        .iter()
        .map(|video| video.duration_minutes)
        .collect();
    assert_eq!(durations.len(), catalog.len());
    assert!(durations.windows(2).all(|pair| pair[0] <= pair[1]));

    let nothing = CatalogQuery {
        search: "topology".to_string(),
        ..CatalogQuery::default()
    };
    assert!(nothing.apply(&catalog).is_empty());
}
