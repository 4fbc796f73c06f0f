// SPDX-License-Identifier: MPL-2.0
//! Simulated render job.
//!
//! A [`RenderSession`] performs no work: once started it walks through the
//! fixed [`RENDER_STEPS`] list, one entry per [`RenderSession::tick`], and
//! publishes a fabricated output identifier after the last one. Who drives
//! the ticks (and when they stop) is up to the caller.

use super::script::file_slug;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Log line appended by [`RenderSession::start`].
pub const INITIAL_LOG_LINE: &str = "Initializing Manim renderer...";

/// Messages emitted by successive ticks.
pub const RENDER_STEPS: [&str; 11] = [
    "Preparing script environment...",
    "Loading Manim libraries...",
    "Parsing scene structure...",
    "Initializing animation objects...",
    "Rendering scene 1: Introduction...",
    "Rendering scene 2: Main content...",
    "Rendering scene 3: Conclusion...",
    "Compiling video frames...",
    "Encoding to MP4 format...",
    "Finalizing video output...",
    "Video generation completed!",
];

/// Lifecycle of a render session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStatus {
    #[default]
    NotStarted,
    Preparing,
    Rendering,
    Completed,
    /// Declared for completeness; no code path produces it.
    Failed,
}

impl RenderStatus {
    #[must_use]
    pub fn is_in_progress(self) -> bool {
        matches!(self, RenderStatus::Preparing | RenderStatus::Rendering)
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            RenderStatus::NotStarted => "render-status-idle",
            RenderStatus::Preparing => "render-status-preparing",
            RenderStatus::Rendering => "render-status-rendering",
            RenderStatus::Completed => "render-status-completed",
            RenderStatus::Failed => "render-status-failed",
        }
    }
}

/// One timestamped line of the render log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub message: String,
}

/// Transient state of the fake render.
#[derive(Debug, Clone, Default)]
pub struct RenderSession {
    status: RenderStatus,
    completed_steps: usize,
    log: Vec<LogEntry>,
    output: Option<String>,
    topic_slug: String,
}

impl RenderSession {
    /// Creates an idle session labelled with the given topic.
    #[must_use]
    pub fn new(topic: &str) -> Self {
        Self {
            topic_slug: file_slug(topic),
            ..Self::default()
        }
    }

    /// Number of ticks needed to complete a session.
    #[must_use]
    pub fn step_count() -> usize {
        RENDER_STEPS.len()
    }

    /// Resets progress and the log and moves to `Preparing`.
    ///
    /// Only an idle session can be started; returns `false` otherwise.
    pub fn start(&mut self, now: DateTime<Local>) -> bool {
        if self.status != RenderStatus::NotStarted {
            return false;
        }
        self.status = RenderStatus::Preparing;
        self.completed_steps = 0;
        self.output = None;
        self.log.clear();
        self.log.push(LogEntry {
            at: now,
            message: INITIAL_LOG_LINE.to_string(),
        });
        true
    }

    /// Advances the simulation by one step.
    ///
    /// Appends the next message and updates progress. The tick that emits the
    /// last message also completes the session and publishes the output
    /// identifier. Ticks outside `Preparing`/`Rendering` are ignored.
    pub fn tick(&mut self, now: DateTime<Local>) -> RenderStatus {
        if !self.status.is_in_progress() {
            return self.status;
        }

        self.status = RenderStatus::Rendering;
        if let Some(message) = RENDER_STEPS.get(self.completed_steps) {
            self.log.push(LogEntry {
                at: now,
                message: (*message).to_string(),
            });
            self.completed_steps += 1;
        }

        if self.completed_steps >= RENDER_STEPS.len() {
            self.status = RenderStatus::Completed;
            self.output = Some(output_identifier(&self.topic_slug, now));
        }
        self.status
    }

    #[must_use]
    pub fn status(&self) -> RenderStatus {
        self.status
    }

    /// Progress in percent, `(completed steps / N) × 100`.
    #[must_use]
    pub fn progress_percent(&self) -> f32 {
        self.completed_steps as f32 / RENDER_STEPS.len() as f32 * 100.0
    }

    #[must_use]
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Fabricated location of the video, set once completed.
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

/// Builds `/videos/<slug>_<unix millis>.mp4`.
#[must_use]
pub fn output_identifier(slug: &str, now: DateTime<Local>) -> String {
    format!("/videos/{slug}_{}.mp4", now.timestamp_millis())
}

// =============================================================================
// Render settings
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderQuality {
    Low,
    Medium,
    #[default]
    High,
    Ultra,
}

impl RenderQuality {
    pub const ALL: [RenderQuality; 4] = [
        RenderQuality::Low,
        RenderQuality::Medium,
        RenderQuality::High,
        RenderQuality::Ultra,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            RenderQuality::Low => "render-quality-low",
            RenderQuality::Medium => "render-quality-medium",
            RenderQuality::High => "render-quality-high",
            RenderQuality::Ultra => "render-quality-ultra",
        }
    }

    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            RenderQuality::Low => "low",
            RenderQuality::Medium => "medium",
            RenderQuality::High => "high",
            RenderQuality::Ultra => "ultra",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VideoFormat {
    #[default]
    Mp4,
    Mov,
    Avi,
}

impl VideoFormat {
    pub const ALL: [VideoFormat; 3] = [VideoFormat::Mp4, VideoFormat::Mov, VideoFormat::Avi];
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VideoFormat::Mp4 => "MP4",
            VideoFormat::Mov => "MOV",
            VideoFormat::Avi => "AVI",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrameRate {
    #[serde(rename = "30")]
    Fps30,
    #[default]
    #[serde(rename = "60")]
    Fps60,
}

impl FrameRate {
    pub const ALL: [FrameRate; 2] = [FrameRate::Fps30, FrameRate::Fps60];

    #[must_use]
    pub fn value(self) -> u32 {
        match self {
            FrameRate::Fps30 => 30,
            FrameRate::Fps60 => 60,
        }
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} FPS", self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "720p")]
    Hd720,
    #[default]
    #[serde(rename = "1080p")]
    Hd1080,
    #[serde(rename = "4k")]
    Uhd4k,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [Resolution::Hd720, Resolution::Hd1080, Resolution::Uhd4k];
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resolution::Hd720 => "720p",
            Resolution::Hd1080 => "1080p",
            Resolution::Uhd4k => "4K",
        })
    }
}

/// Output options picked before starting; they only label the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default)]
    pub quality: RenderQuality,
    #[serde(default)]
    pub format: VideoFormat,
    #[serde(default)]
    pub fps: FrameRate,
    #[serde(default)]
    pub resolution: Resolution,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Local> {
        Local
            .timestamp_opt(1_700_000_000 + secs, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn new_session_is_idle() {
        let session = RenderSession::new("Waves");
        assert_eq!(session.status(), RenderStatus::NotStarted);
        assert!(session.log().is_empty());
        assert_eq!(session.progress_percent(), 0.0);
        assert!(session.output().is_none());
    }

    #[test]
    fn start_moves_to_preparing_with_initial_line() {
        let mut session = RenderSession::new("Waves");
        assert!(session.start(at(0)));
        assert_eq!(session.status(), RenderStatus::Preparing);
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.log()[0].message, INITIAL_LOG_LINE);
        assert!(!session.start(at(1)), "cannot restart a running session");
    }

    #[test]
    fn ticks_before_start_are_ignored() {
        let mut session = RenderSession::new("Waves");
        assert_eq!(session.tick(at(1)), RenderStatus::NotStarted);
        assert!(session.log().is_empty());
    }

    #[test]
    fn completes_after_exactly_n_ticks_with_monotonic_progress() {
        let mut session = RenderSession::new("Wave Mechanics");
        session.start(at(0));

        let mut last = session.progress_percent();
        for i in 0..RenderSession::step_count() {
            assert_ne!(session.status(), RenderStatus::Completed, "done too early at {i}");
            session.tick(at(i as i64 + 1));
            let progress = session.progress_percent();
            assert!(progress >= last);
            last = progress;
        }

        assert_eq!(session.status(), RenderStatus::Completed);
        assert!((session.progress_percent() - 100.0).abs() < 1e-4);
        assert_eq!(session.log().len(), RENDER_STEPS.len() + 1);
        assert_eq!(
            session.log().last().map(|e| e.message.as_str()),
            Some("Video generation completed!")
        );
    }

    #[test]
    fn first_tick_enters_rendering() {
        let mut session = RenderSession::new("Waves");
        session.start(at(0));
        assert_eq!(session.tick(at(1)), RenderStatus::Rendering);
        let expected = 100.0 / RENDER_STEPS.len() as f32;
        assert!((session.progress_percent() - expected).abs() < 1e-4);
    }

    #[test]
    fn output_identifier_uses_slug_and_millis() {
        let mut session = RenderSession::new("Wave Mechanics");
        session.start(at(0));
        let done = at(20);
        for _ in 0..RenderSession::step_count() {
            session.tick(done);
        }
        let expected = format!("/videos/wave_mechanics_{}.mp4", done.timestamp_millis());
        assert_eq!(session.output(), Some(expected.as_str()));
    }

    #[test]
    fn ticks_after_completion_change_nothing() {
        let mut session = RenderSession::new("Waves");
        session.start(at(0));
        for _ in 0..RenderSession::step_count() {
            session.tick(at(1));
        }
        let output = session.output().map(str::to_owned);
        session.tick(at(99));
        assert_eq!(session.log().len(), RENDER_STEPS.len() + 1);
        assert_eq!(session.output().map(str::to_owned), output);
    }

    #[test]
    fn default_settings_match_form_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.quality, RenderQuality::High);
        assert_eq!(settings.format, VideoFormat::Mp4);
        assert_eq!(settings.fps.value(), 60);
        assert_eq!(settings.resolution.to_string(), "1080p");
    }
}
