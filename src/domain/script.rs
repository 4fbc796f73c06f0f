// SPDX-License-Identifier: MPL-2.0
//! Manim script drafting from a requirements record.
//!
//! [`generate`] is a plain template: fields are substituted into a fixed
//! skeleton and one scene method is emitted per concept. Nothing is escaped;
//! identifiers only have their whitespace collapsed.

use super::requirements::Requirements;

/// Lower-cased topic with whitespace runs replaced by `_`, used for file names.
#[must_use]
pub fn file_slug(topic: &str) -> String {
    join_words(topic, "_").to_lowercase()
}

/// Topic with all whitespace removed, used as the scene class prefix.
#[must_use]
pub fn class_name(topic: &str) -> String {
    format!("{}Video", join_words(topic, ""))
}

/// Pseudo-identifier for a concept's scene method (without the `_scene` suffix).
#[must_use]
pub fn scene_identifier(concept: &str) -> String {
    join_words(&concept.to_lowercase(), "_")
}

/// Suggested file name when saving the script.
#[must_use]
pub fn script_file_name(topic: &str) -> String {
    format!("{}_manim_script.py", file_slug(topic))
}

/// File name shown in the quick-setup instructions.
#[must_use]
pub fn setup_file_name(topic: &str) -> String {
    format!("{}.py", file_slug(topic))
}

/// File name a rendered video would be saved under.
#[must_use]
pub fn video_file_name(topic: &str) -> String {
    format!("{}_educational_video.mp4", file_slug(topic))
}

/// Replaces every run of whitespace with `separator`, keeping leading and
/// trailing runs as a single separator each.
fn join_words(input: &str, separator: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push_str(separator);
                in_space = true;
            }
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// Renders the Manim script for `requirements`.
#[must_use]
pub fn generate(requirements: &Requirements) -> String {
    let topic = requirements.topic();
    let level = requirements.level().as_tag();
    let duration = requirements.duration();
    let style = requirements.style().as_tag();
    let concepts = requirements.concepts();
    let concept_list = concepts.join(", ");
    let class = class_name(topic);

    let calls: String = concepts
        .iter()
        .map(|concept| format!("        self.{}_scene()\n", scene_identifier(concept)))
        .collect();
    let scenes: String = concepts.iter().map(|concept| concept_scene(concept)).collect();

    format!(
        r#""""
{topic} - Educational Video
Generated Manim script for {level} level
Duration: {duration} minutes
Style: {style}

Concepts covered: {concept_list}
"""

from manim import *
import numpy as np

class {class}(Scene):
    def construct(self):
        # Title Scene
        self.intro_scene()

        # Main Content
{calls}
        # Conclusion
        self.conclusion_scene()

    def intro_scene(self):
        """Introduction with title and overview"""
        title = Text("{topic}", font_size=48, color=BLUE)
        subtitle = Text("{level} Level Educational Video", font_size=24, color=WHITE)
        subtitle.next_to(title, DOWN)

        self.play(Write(title), run_time=2)
        self.play(Write(subtitle), run_time=1)
        self.wait(2)
        self.play(FadeOut(title), FadeOut(subtitle))
{scenes}
    def conclusion_scene(self):
        """Conclusion and summary"""
        conclusion = Text("Thank you for watching!", font_size=36, color=GOLD)
        summary = Text("Key concepts: {concept_list}", font_size=20, color=WHITE)
        summary.next_to(conclusion, DOWN)

        self.play(Write(conclusion))
        self.play(Write(summary))
        self.wait(3)

if __name__ == "__main__":
    # To render: manim -pqh script.py {class}
    pass
"#
    )
}

/// One scene method per concept, preceded by a blank line.
fn concept_scene(concept: &str) -> String {
    let ident = scene_identifier(concept);
    format!(
        r#"
    def {ident}_scene(self):
        """{concept} visualization"""
        concept_title = Text("{concept}", font_size=36, color=GREEN)
        concept_title.to_edge(UP)

        # Add your specific visualization code here
        example_shape = Circle(radius=2, color=YELLOW, fill_opacity=0.5)

        self.play(Write(concept_title))
        self.play(Create(example_shape))
        self.wait(2)
        self.play(FadeOut(concept_title), FadeOut(example_shape))
"#
    )
}
