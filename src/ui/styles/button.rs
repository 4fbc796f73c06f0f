// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn brand(status: button::Status, is_light: bool) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            })),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Main action of a step (Generate, Approve, Start rendering).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    brand(status, matches!(theme, Theme::Light))
}

/// Selected entry of a toggle group (active tab, chosen preset).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    primary(theme, status)
}

/// Secondary actions and unselected entries of a toggle group.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color, border_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900, palette::GRAY_400)
    } else {
        (palette::GRAY_700, WHITE, palette::GRAY_400)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            button::Style {
                background: Some(Background::Color(hover_bg)),
                text_color,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Download actions; green to stand apart from navigation.
pub fn success(theme: &Theme, status: button::Status) -> button::Style {
    let base = brand(status, matches!(theme, Theme::Light));
    match status {
        button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: 0.85,
                ..palette::SUCCESS_500
            })),
            border: Border {
                color: palette::SUCCESS_500,
                ..base.border
            },
            ..base
        },
        _ => button::Style {
            background: Some(Background::Color(palette::SUCCESS_500)),
            border: Border {
                color: palette::SUCCESS_500,
                ..base.border
            },
            ..base
        },
    }
}

/// Small pill-shaped button for removable concept chips.
pub fn chip(theme: &Theme, status: button::Status) -> button::Style {
    let style = unselected(theme, status);
    button::Style {
        border: Border {
            radius: radius::FULL.into(),
            ..style.border
        },
        ..style
    }
}
