// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above every screen.
//!
//! Holds one tab per top-level screen; the active tab is highlighted and
//! pressing another one asks the application to switch.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Tabs in display order.
pub const TABS: [Screen; 4] = [
    Screen::Generator,
    Screen::Library,
    Screen::Settings,
    Screen::About,
];

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Select(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a navbar message; selecting the active tab does nothing.
#[must_use]
pub fn update(message: Message, active: Screen) -> Event {
    match message {
        Message::Select(screen) if screen != active => Event::Navigate(screen),
        Message::Select(_) => Event::None,
    }
}

fn tab_label_key(screen: Screen) -> &'static str {
    match screen {
        Screen::Generator => "navbar-generator",
        Screen::Library => "navbar-library",
        Screen::Settings => "navbar-settings",
        Screen::About => "navbar-about",
    }
}

/// Render the navigation bar.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_SM);

    let mut tabs = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for screen in TABS {
        let label = Text::new(ctx.i18n.tr(tab_label_key(screen))).size(typography::BODY);
        let tab = button(label)
            .on_press(Message::Select(screen))
            .padding([spacing::XS, spacing::SM])
            .style(if screen == ctx.active {
                styles::button::selected
            } else {
                styles::button::unselected
            });
        tabs = tabs.push(tab);
    }

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(tabs);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}
