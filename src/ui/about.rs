// SPDX-License-Identifier: MPL-2.0
//! About screen: version, license and credits.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, rule, scrollable, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Manim Community documentation, referenced by the setup instructions.
const MANIM_DOCS_URL: &str = "https://docs.manim.community";

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the about screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG);

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::LG)
        .push(title)
        .push(build_app_section(&ctx))
        .push(build_license_section(&ctx))
        .push(build_credits_section(&ctx));

    scrollable(container(content).center_x(Length::Fill)).into()
}

fn build_app_section<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let app_name = Text::new(ctx.i18n.tr("about-app-name")).size(typography::TITLE_MD);
    let version = Text::new(format!("v{APP_VERSION}")).size(typography::BODY);
    let description = Text::new(ctx.i18n.tr("about-app-description")).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(app_name)
                .push(version),
        )
        .push(description);

    build_section(ctx.i18n.tr("about-section-app"), content.into())
}

fn build_license_section<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("about-license-name")).size(typography::BODY_LG))
        .push(Text::new(ctx.i18n.tr("about-license-summary")).size(typography::BODY));

    build_section(ctx.i18n.tr("about-section-license"), content.into())
}

fn build_credits_section<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(build_credit_item(&ctx.i18n.tr("about-credits-iced")))
        .push(build_credit_item(&ctx.i18n.tr("about-credits-fluent")))
        .push(build_credit_item(&ctx.i18n.tr("about-credits-manim")))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new(format!("{}:", ctx.i18n.tr("about-link-manim"))).size(typography::BODY))
                .push(Text::new(MANIM_DOCS_URL).size(typography::BODY)),
        );

    build_section(ctx.i18n.tr("about-section-credits"), content.into())
}

fn build_credit_item<'a, Message: 'a>(description: &str) -> Element<'a, Message> {
    Text::new(format!("• {description}"))
        .size(typography::BODY)
        .into()
}

/// Titled card, same layout as the settings sections.
fn build_section<'a, Message: 'a>(
    title: String,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let inner = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn version_matches_manifest() {
        assert!(!APP_VERSION.is_empty());
        assert!(APP_VERSION.split('.').count() >= 3);
    }
}
