// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `update` returning an `Event` for the parent, and
//! a `view` taking a borrowed `ViewContext`.
//!
//! # Screens
//!
//! - [`generator`] - The requirements → preview → render wizard, composed of
//!   [`requirements_form`], [`script_preview`] and [`render_view`]
//! - [`library`] - Sample video catalog with search, filter and sort
//! - [`settings`] - Language, theme and render pacing
//! - [`about`] - Application version and credits
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Top navigation tabs
//! - [`notifications`] - Toast notification system for user feedback
//! - [`choice`] - Localized pick-list entries
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod choice;
pub mod design_tokens;
pub mod generator;
pub mod library;
pub mod navbar;
pub mod notifications;
pub mod render_view;
pub mod requirements_form;
pub mod script_preview;
pub mod settings;
pub mod styles;
pub mod theming;
