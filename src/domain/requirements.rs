// SPDX-License-Identifier: MPL-2.0
//! The requirements record collected by the first wizard step.
//!
//! A [`Requirements`] value is only obtainable through
//! [`RequirementsDraft::submit`], which enforces the two submission rules:
//! the topic is not blank and at least one concept was added. The duration is
//! a [`LessonMinutes`] newtype and therefore always lies within 1–10.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Enumerations
// =============================================================================

/// Target audience of the video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    Elementary,
    MiddleSchool,
    #[default]
    HighSchool,
    College,
    Advanced,
}

impl EducationLevel {
    /// All levels in display order.
    pub const ALL: [EducationLevel; 5] = [
        EducationLevel::Elementary,
        EducationLevel::MiddleSchool,
        EducationLevel::HighSchool,
        EducationLevel::College,
        EducationLevel::Advanced,
    ];

    /// Kebab-case tag, as substituted into generated scripts.
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            EducationLevel::Elementary => "elementary",
            EducationLevel::MiddleSchool => "middle-school",
            EducationLevel::HighSchool => "high-school",
            EducationLevel::College => "college",
            EducationLevel::Advanced => "advanced",
        }
    }

    /// Returns the i18n key of the human-readable label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            EducationLevel::Elementary => "level-elementary",
            EducationLevel::MiddleSchool => "level-middle-school",
            EducationLevel::HighSchool => "level-high-school",
            EducationLevel::College => "level-college",
            EducationLevel::Advanced => "level-advanced",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Visual style of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnimationStyle {
    #[default]
    #[serde(rename = "2d-animated")]
    Animated2d,
    #[serde(rename = "3d-visualization")]
    Visualization3d,
    #[serde(rename = "mixed-media")]
    MixedMedia,
    #[serde(rename = "minimalist")]
    Minimalist,
    #[serde(rename = "interactive")]
    Interactive,
}

impl AnimationStyle {
    pub const ALL: [AnimationStyle; 5] = [
        AnimationStyle::Animated2d,
        AnimationStyle::Visualization3d,
        AnimationStyle::MixedMedia,
        AnimationStyle::Minimalist,
        AnimationStyle::Interactive,
    ];

    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            AnimationStyle::Animated2d => "2d-animated",
            AnimationStyle::Visualization3d => "3d-visualization",
            AnimationStyle::MixedMedia => "mixed-media",
            AnimationStyle::Minimalist => "minimalist",
            AnimationStyle::Interactive => "interactive",
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            AnimationStyle::Animated2d => "style-2d-animated",
            AnimationStyle::Visualization3d => "style-3d-visualization",
            AnimationStyle::MixedMedia => "style-mixed-media",
            AnimationStyle::Minimalist => "style-minimalist",
            AnimationStyle::Interactive => "style-interactive",
        }
    }
}

impl fmt::Display for AnimationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Color palette requested for the video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    #[default]
    Professional,
    Vibrant,
    Pastel,
    Dark,
    Custom,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 5] = [
        ColorScheme::Professional,
        ColorScheme::Vibrant,
        ColorScheme::Pastel,
        ColorScheme::Dark,
        ColorScheme::Custom,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ColorScheme::Professional => "color-scheme-professional",
            ColorScheme::Vibrant => "color-scheme-vibrant",
            ColorScheme::Pastel => "color-scheme-pastel",
            ColorScheme::Dark => "color-scheme-dark",
            ColorScheme::Custom => "color-scheme-custom",
        }
    }
}

// =============================================================================
// LessonMinutes
// =============================================================================

/// Bounds for the requested video length, in minutes.
pub mod minutes_bounds {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: u8 = 3;
}

/// Requested video length in whole minutes, guaranteed to be within 1–10.
///
/// # Example
///
/// ```
/// use manim_studio::domain::requirements::LessonMinutes;
///
/// assert_eq!(LessonMinutes::new(4).value(), 4);
/// assert_eq!(LessonMinutes::new(0).value(), 1);
/// assert_eq!(LessonMinutes::new(42).value(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct LessonMinutes(u8);

impl LessonMinutes {
    /// Creates a new duration, clamping to the valid range.
    #[must_use]
    pub fn new(minutes: u8) -> Self {
        Self(minutes.clamp(minutes_bounds::MIN, minutes_bounds::MAX))
    }

    /// Parses user input, rejecting anything that is not an integer in range.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let minutes: u8 = input.trim().parse().ok()?;
        (minutes_bounds::MIN..=minutes_bounds::MAX)
            .contains(&minutes)
            .then_some(Self(minutes))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for LessonMinutes {
    fn default() -> Self {
        Self(minutes_bounds::DEFAULT)
    }
}

impl From<u8> for LessonMinutes {
    fn from(minutes: u8) -> Self {
        Self::new(minutes)
    }
}

impl From<LessonMinutes> for u8 {
    fn from(minutes: LessonMinutes) -> Self {
        minutes.0
    }
}

impl fmt::Display for LessonMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Records
// =============================================================================

/// Presentation options that do not change the generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Customizations {
    pub color_scheme: ColorScheme,
    pub include_narration: bool,
    pub include_subtitles: bool,
    pub background_music: bool,
}

impl Default for Customizations {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            include_narration: false,
            include_subtitles: true,
            background_music: false,
        }
    }
}

/// A submitted, immutable description of the video to produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Requirements {
    topic: String,
    level: EducationLevel,
    duration: LessonMinutes,
    style: AnimationStyle,
    concepts: Vec<String>,
    description: String,
    customizations: Customizations,
}

impl Requirements {
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn level(&self) -> EducationLevel {
        self.level
    }

    #[must_use]
    pub fn duration(&self) -> LessonMinutes {
        self.duration
    }

    #[must_use]
    pub fn style(&self) -> AnimationStyle {
        self.style
    }

    /// Concepts in the order they were entered.
    #[must_use]
    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn customizations(&self) -> Customizations {
        self.customizations
    }

    /// Turns the record back into an editable draft, discarding it.
    #[must_use]
    pub fn into_draft(self) -> RequirementsDraft {
        RequirementsDraft {
            topic: self.topic,
            level: self.level,
            duration: self.duration,
            style: self.style,
            concepts: self.concepts,
            description: self.description,
            customizations: self.customizations,
        }
    }
}

/// Reasons a draft cannot be submitted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequirementsError {
    #[error("the topic is empty")]
    EmptyTopic,
    #[error("no concept was added")]
    NoConcepts,
}

impl RequirementsError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            RequirementsError::EmptyTopic => "requirements-error-empty-topic",
            RequirementsError::NoConcepts => "requirements-error-no-concepts",
        }
    }
}

/// Mutable form state behind the requirements collector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequirementsDraft {
    pub topic: String,
    pub level: EducationLevel,
    pub duration: LessonMinutes,
    pub style: AnimationStyle,
    concepts: Vec<String>,
    pub description: String,
    pub customizations: Customizations,
}

impl RequirementsDraft {
    /// Creates an empty draft seeded with the given defaults.
    #[must_use]
    pub fn with_defaults(
        level: EducationLevel,
        duration: LessonMinutes,
        style: AnimationStyle,
    ) -> Self {
        Self {
            level,
            duration,
            style,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }

    /// Adds a concept after trimming it.
    ///
    /// Returns `false` when the label is blank or already present.
    pub fn add_concept(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || self.concepts.iter().any(|c| c == label) {
            return false;
        }
        self.concepts.push(label.to_string());
        true
    }

    /// Removes the concept with the given label, keeping the others in order.
    pub fn remove_concept(&mut self, label: &str) -> bool {
        match self.concepts.iter().position(|c| c == label) {
            Some(index) => {
                self.concepts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the first rule the draft violates, if any.
    pub fn validate(&self) -> Result<(), RequirementsError> {
        if self.topic.trim().is_empty() {
            return Err(RequirementsError::EmptyTopic);
        }
        if self.concepts.is_empty() {
            return Err(RequirementsError::NoConcepts);
        }
        Ok(())
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    /// Freezes the draft into a [`Requirements`] record.
    pub fn submit(&self) -> Result<Requirements, RequirementsError> {
        self.validate()?;
        Ok(Requirements {
            topic: self.topic.clone(),
            level: self.level,
            duration: self.duration,
            style: self.style,
            concepts: self.concepts.clone(),
            description: self.description.clone(),
            customizations: self.customizations,
        })
    }
}

/// Topics offered as one-click presets in the collector.
pub const PRESET_TOPICS: [&str; 8] = [
    "Mathematical Spirals in Nature",
    "Calculus: Derivatives and Integrals",
    "Linear Algebra: Matrix Transformations",
    "Physics: Wave Mechanics",
    "Statistics: Probability Distributions",
    "Geometry: Pythagorean Theorem",
    "Number Theory: Prime Numbers",
    "Trigonometry: Unit Circle",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(topic: &str, concepts: &[&str]) -> RequirementsDraft {
        let mut draft = RequirementsDraft {
            topic: topic.to_string(),
            ..RequirementsDraft::default()
        };
        for concept in concepts {
            draft.add_concept(concept);
        }
        draft
    }

    #[test]
    fn default_draft_matches_form_defaults() {
        let draft = RequirementsDraft::default();
        assert_eq!(draft.level, EducationLevel::HighSchool);
        assert_eq!(draft.duration.value(), 3);
        assert_eq!(draft.style, AnimationStyle::Animated2d);
        assert_eq!(draft.customizations.color_scheme, ColorScheme::Professional);
        assert!(draft.customizations.include_subtitles);
        assert!(!draft.customizations.include_narration);
        assert!(!draft.customizations.background_music);
    }

    #[test]
    fn add_concept_trims_and_rejects_duplicates() {
        let mut draft = RequirementsDraft::default();
        assert!(draft.add_concept("  Fibonacci "));
        assert!(!draft.add_concept("Fibonacci"));
        assert!(!draft.add_concept("   "));
        assert_eq!(draft.concepts(), ["Fibonacci"]);
    }

    #[test]
    fn remove_concept_removes_exactly_one_and_keeps_order() {
        let mut draft = draft_with("Spirals", &["A", "B", "C", "D"]);
        assert!(draft.remove_concept("B"));
        assert_eq!(draft.concepts(), ["A", "C", "D"]);
        assert!(!draft.remove_concept("missing"));
        assert_eq!(draft.concepts().len(), 3);
    }

    #[test]
    fn submit_requires_topic() {
        let draft = draft_with("   ", &["A"]);
        assert_eq!(draft.submit(), Err(RequirementsError::EmptyTopic));
    }

    #[test]
    fn submit_requires_concepts() {
        let draft = draft_with("Waves", &[]);
        assert_eq!(draft.submit(), Err(RequirementsError::NoConcepts));
        assert!(!draft.can_submit());
    }

    #[test]
    fn submit_copies_fields_in_order() {
        let draft = draft_with("Waves", &["Frequency", "Amplitude"]);
        let record = draft.submit().expect("valid draft");
        assert_eq!(record.topic(), "Waves");
        assert_eq!(record.concepts(), ["Frequency", "Amplitude"]);
    }

    #[test]
    fn into_draft_restores_every_field() {
        let mut draft = draft_with("Waves", &["Frequency"]);
        draft.description = "short".into();
        draft.customizations.background_music = true;
        let record = draft.submit().expect("valid draft");
        assert_eq!(record.into_draft(), draft);
    }

    #[test]
    fn lesson_minutes_parse_rejects_out_of_range() {
        assert_eq!(LessonMinutes::parse("7"), Some(LessonMinutes::new(7)));
        assert_eq!(LessonMinutes::parse(" 10 "), Some(LessonMinutes::new(10)));
        assert_eq!(LessonMinutes::parse("0"), None);
        assert_eq!(LessonMinutes::parse("11"), None);
        assert_eq!(LessonMinutes::parse("three"), None);
    }

    #[test]
    fn tags_match_wire_names() {
        assert_eq!(EducationLevel::MiddleSchool.as_tag(), "middle-school");
        assert_eq!(AnimationStyle::Visualization3d.as_tag(), "3d-visualization");
    }

    #[test]
    fn error_keys_are_distinct() {
        assert_ne!(
            RequirementsError::EmptyTopic.i18n_key(),
            RequirementsError::NoConcepts.i18n_key()
        );
    }
}
