// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Generator,
    Library,
    Settings,
    About,
}
