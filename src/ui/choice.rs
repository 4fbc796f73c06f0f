// SPDX-License-Identifier: MPL-2.0
//! Localized pick-list entries.

use crate::i18n::fluent::I18n;
use std::fmt;

/// Wrapper pairing a value with its translated label so it can be shown in a
/// `pick_list`.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub value: T,
    pub label: String,
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Builds one choice per value, translating `key(value)`.
pub fn localized<T: Copy>(
    i18n: &I18n,
    values: &[T],
    key: impl Fn(T) -> &'static str,
) -> Vec<Choice<T>> {
    values
        .iter()
        .map(|&value| Choice {
            value,
            label: i18n.tr(key(value)),
        })
        .collect()
}

/// Builds one choice per value using its `Display` output.
pub fn displayed<T: Copy + fmt::Display>(values: &[T]) -> Vec<Choice<T>> {
    values
        .iter()
        .map(|&value| Choice {
            value,
            label: value.to_string(),
        })
        .collect()
}

/// Returns the entry holding `value`, for the `selected` slot of a pick list.
pub fn find<T: PartialEq + Clone>(choices: &[Choice<T>], value: &T) -> Option<Choice<T>> {
    choices.iter().find(|choice| &choice.value == value).cloned()
}
