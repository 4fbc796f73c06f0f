// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! - [`notification`] - `Notification` with severity levels
//! - [`manager`] - `Manager` queuing notifications and expiring them
//! - [`toast`] - widget rendering the visible notifications
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-script-saved"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Success/info toasts disappear after 3s, warnings after 5s, errors stay
//! until dismissed. At most three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
