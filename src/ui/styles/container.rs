// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used by the wizard steps and settings sections.
///
/// Derived from the active theme background with a slight opacity so it
/// reads in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Library card with a subtle outline and shadow.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Dark, monospace-looking area holding the render log.
pub fn terminal(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::TERMINAL_BACKGROUND)),
        text_color: Some(palette::TERMINAL_TEXT),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder standing in for a thumbnail or a video player.
pub fn media_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_200),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small rounded label (concept tags, level badge).
pub fn chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_100)),
        text_color: Some(palette::PRIMARY_600),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Duration badge drawn over a thumbnail.
pub fn duration_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Step indicator bubble; filled once reached.
pub fn step_bubble(reached: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let (background, text) = if reached {
            (palette::PRIMARY_500, palette::WHITE)
        } else {
            let weak = theme.extended_palette().background.strong;
            (weak.color, weak.text)
        };
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Tinted callout used for the quick-setup instructions.
pub fn callout(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::INFO_500
        })),
        border: Border {
            color: palette::INFO_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
