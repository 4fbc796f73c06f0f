// SPDX-License-Identifier: MPL-2.0
//! Compiled-in sample video catalog and its search/filter/sort query.

use super::requirements::EducationLevel;
use super::script::file_slug;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// One entry of the sample library.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleVideo {
    pub id: u32,
    pub title: &'static str,
    pub topic: &'static str,
    pub level: EducationLevel,
    pub duration_minutes: u8,
    pub rating: f32,
    pub views: u32,
    pub created: NaiveDate,
    pub concepts: &'static [&'static str],
    pub thumbnail_url: String,
    pub download_url: &'static str,
}

impl SampleVideo {
    /// File name a download of this video would use.
    #[must_use]
    pub fn download_file_name(&self) -> String {
        format!("{}.mp4", file_slug(self.title))
    }

    /// Whether the title, topic or a concept contains `needle` (already lower-cased).
    fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.topic.to_lowercase().contains(needle)
            || self
                .concepts
                .iter()
                .any(|concept| concept.to_lowercase().contains(needle))
    }
}

fn pexels_thumbnail(photo: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=400"
    )
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Returns the six sample videos in catalog order.
#[must_use]
pub fn sample_catalog() -> Vec<SampleVideo> {
    vec![
        SampleVideo {
            id: 1,
            title: "Mathematical Spirals in Nature",
            topic: "Mathematics",
            level: EducationLevel::HighSchool,
            duration_minutes: 5,
            rating: 4.8,
            views: 1250,
            created: date(2024, 1, 15),
            concepts: &["Fibonacci", "Golden Ratio", "Spirals"],
            thumbnail_url: pexels_thumbnail(1_181_677),
            download_url: "/videos/spirals.mp4",
        },
        SampleVideo {
            id: 2,
            title: "Calculus: Understanding Derivatives",
            topic: "Calculus",
            level: EducationLevel::College,
            duration_minutes: 7,
            rating: 4.6,
            views: 890,
            created: date(2024, 1, 12),
            concepts: &["Derivatives", "Limits", "Functions"],
            thumbnail_url: pexels_thumbnail(6_238_297),
            download_url: "/videos/derivatives.mp4",
        },
        SampleVideo {
            id: 3,
            title: "Linear Algebra: Matrix Transformations",
            topic: "Linear Algebra",
            level: EducationLevel::College,
            duration_minutes: 6,
            rating: 4.9,
            views: 2100,
            created: date(2024, 1, 10),
            concepts: &["Matrices", "Transformations", "Vectors"],
            thumbnail_url: pexels_thumbnail(8_386_440),
            download_url: "/videos/matrices.mp4",
        },
        SampleVideo {
            id: 4,
            title: "Physics: Wave Mechanics",
            topic: "Physics",
            level: EducationLevel::HighSchool,
            duration_minutes: 4,
            rating: 4.7,
            views: 1560,
            created: date(2024, 1, 8),
            concepts: &["Waves", "Frequency", "Amplitude"],
            thumbnail_url: pexels_thumbnail(1_181_677),
            download_url: "/videos/waves.mp4",
        },
        SampleVideo {
            id: 5,
            title: "Statistics: Probability Distributions",
            topic: "Statistics",
            level: EducationLevel::College,
            duration_minutes: 8,
            rating: 4.5,
            views: 750,
            created: date(2024, 1, 5),
            concepts: &["Probability", "Distributions", "Statistics"],
            thumbnail_url: pexels_thumbnail(590_022),
            download_url: "/videos/probability.mp4",
        },
        SampleVideo {
            id: 6,
            title: "Geometry: Pythagorean Theorem",
            topic: "Geometry",
            level: EducationLevel::MiddleSchool,
            duration_minutes: 3,
            rating: 4.8,
            views: 3200,
            created: date(2024, 1, 3),
            concepts: &["Triangles", "Theorem", "Geometry"],
            thumbnail_url: pexels_thumbnail(6_238_297),
            download_url: "/videos/pythagoras.mp4",
        },
    ]
}

/// Level restriction applied by a [`CatalogQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Only(EducationLevel),
}

impl LevelFilter {
    fn accepts(self, level: EducationLevel) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Only(wanted) => wanted == level,
        }
    }
}

/// Ordering of the filtered catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Rating,
    Views,
    Duration,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::Rating,
        SortKey::Views,
        SortKey::Duration,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SortKey::Newest => "library-sort-newest",
            SortKey::Oldest => "library-sort-oldest",
            SortKey::Rating => "library-sort-rating",
            SortKey::Views => "library-sort-views",
            SortKey::Duration => "library-sort-duration",
        }
    }

    fn compare(self, a: &SampleVideo, b: &SampleVideo) -> Ordering {
        match self {
            SortKey::Newest => b.created.cmp(&a.created),
            SortKey::Oldest => a.created.cmp(&b.created),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Views => b.views.cmp(&a.views),
            SortKey::Duration => a.duration_minutes.cmp(&b.duration_minutes),
        }
    }
}

/// Search text, level filter and sort key of the library view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub search: String,
    pub level: LevelFilter,
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Filters and sorts `videos` without touching the input.
    ///
    /// The sort is stable: ties keep their relative catalog order.
    #[must_use]
    pub fn apply<'a>(&self, videos: &'a [SampleVideo]) -> Vec<&'a SampleVideo> {
        let needle = self.search.trim().to_lowercase();
        let mut result: Vec<&SampleVideo> = videos
            .iter()
            .filter(|video| self.level.accepts(video.level) && video.matches_search(&needle))
            .collect();
        result.sort_by(|a, b| self.sort.compare(a, b));
        result
    }
}

/// Formats a count with `,` thousands separators (`3200` → `3,200`).
#[must_use]
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
