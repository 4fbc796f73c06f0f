// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Every screen is drawn under the navbar; toasts float above everything.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::generator::{self, ViewContext as GeneratorViewContext};
use crate::ui::library::{self, ViewContext as LibraryViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::settings::{self, State as SettingsState, ViewContext as SettingsViewContext};
use iced::{
    widget::{stack, Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub generator: &'a generator::State,
    pub library: &'a library::State,
    pub settings: &'a SettingsState,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Generator => generator::view(GeneratorViewContext {
            i18n,
            state: ctx.generator,
        })
        .map(Message::Generator),
        Screen::Library => library::view(LibraryViewContext {
            i18n,
            state: ctx.library,
        })
        .map(Message::Library),
        Screen::Settings => settings::view(SettingsViewContext {
            i18n,
            state: ctx.settings,
        })
        .map(Message::Settings),
        Screen::About => about::view(AboutViewContext { i18n }),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n,
        active: ctx.screen,
    })
    .map(Message::Navbar);

    let column = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let base = Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification);

    stack![base, toasts].into()
}
