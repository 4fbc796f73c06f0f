// SPDX-License-Identifier: MPL-2.0
//! `manim_studio` is a desktop wizard for drafting Manim scripts, built with
//! the Iced GUI framework.
//!
//! The user describes an educational video, reviews and edits the generated
//! Python script, then walks through a simulated render. A small library of
//! sample videos can be browsed alongside. The UI is localized with Fluent
//! and preferences persist in a TOML file.

#![doc(html_root_url = "https://docs.rs/manim_studio/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod export;
pub mod i18n;
pub mod icon;
pub mod logging;
pub mod ui;
