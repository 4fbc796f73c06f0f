// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support using Fluent.
//!
//! - Locale detection from CLI, config, or system settings
//! - `.ftl` files embedded at build time, or read from `--i18n-dir`
//! - Runtime language switching
//! - `MISSING: <key>` placeholder for untranslated keys

pub mod fluent;
