// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Render**: interval between simulated render steps
//! - **Notifications**: toast timing and stacking
//! - **Clipboard**: lifetime of the "Copied!" label
//! - **Window**: initial and minimum window size

// ==========================================================================
// Render Defaults
// ==========================================================================

/// Default delay between two simulated render steps (milliseconds).
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 1500;

/// Minimum render step interval (milliseconds).
pub const MIN_STEP_INTERVAL_MS: u64 = 500;

/// Maximum render step interval (milliseconds).
pub const MAX_STEP_INTERVAL_MS: u64 = 5000;

/// Granularity of the interval slider (milliseconds).
pub const STEP_INTERVAL_INCREMENT_MS: u64 = 250;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts shown at once; extra ones are queued.
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Auto-dismiss delay for success and info toasts (milliseconds).
pub const TOAST_SHORT_MS: u64 = 3000;

/// Auto-dismiss delay for warning toasts (milliseconds).
pub const TOAST_LONG_MS: u64 = 5000;

// ==========================================================================
// Clipboard Defaults
// ==========================================================================

/// How long the copy button reads "Copied!" (milliseconds).
pub const COPY_FEEDBACK_MS: u64 = 2000;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_STEP_INTERVAL_MS > 0);
    assert!(MAX_STEP_INTERVAL_MS >= MIN_STEP_INTERVAL_MS);
    assert!(DEFAULT_STEP_INTERVAL_MS >= MIN_STEP_INTERVAL_MS);
    assert!(DEFAULT_STEP_INTERVAL_MS <= MAX_STEP_INTERVAL_MS);
    assert!(STEP_INTERVAL_INCREMENT_MS > 0);
    assert!((MAX_STEP_INTERVAL_MS - MIN_STEP_INTERVAL_MS) % STEP_INTERVAL_INCREMENT_MS == 0);

    assert!(MAX_VISIBLE_TOASTS > 0);
    assert!(TOAST_LONG_MS >= TOAST_SHORT_MS);
    assert!(COPY_FEEDBACK_MS > 0);

    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
