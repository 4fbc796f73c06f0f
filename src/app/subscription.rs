// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions for the application.
//!
//! Both timers are only active while something depends on them, so an idle
//! window receives no periodic messages.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Housekeeping period for toast expiry and transient labels.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Ticks while toasts are shown or a transient label is waiting to expire.
pub fn create_tick_subscription(
    has_notifications: bool,
    has_pending_feedback: bool,
) -> Subscription<Message> {
    if has_notifications || has_pending_feedback {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Drives the simulated render, one message per step.
pub fn create_render_subscription(is_rendering: bool, interval: Duration) -> Subscription<Message> {
    if is_rendering {
        time::every(interval).map(|_| Message::RenderTick)
    } else {
        Subscription::none()
    }
}
