// SPDX-License-Identifier: MPL-2.0
//! Three-step generator wizard as an explicit state machine.

/// Visible step of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    Requirements,
    Preview,
    Render,
}

/// User action that may move the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Submit,
    Approve,
    Back,
}

/// How a step is drawn in the step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::Requirements,
        WizardStep::Preview,
        WizardStep::Render,
    ];

    /// Returns the step reached from `self` through `transition`.
    ///
    /// Pairs without a defined move leave the step unchanged.
    #[must_use]
    pub fn apply(self, transition: Transition) -> WizardStep {
        match (self, transition) {
            (WizardStep::Requirements, Transition::Submit) => WizardStep::Preview,
            (WizardStep::Preview, Transition::Approve) => WizardStep::Render,
            (WizardStep::Preview, Transition::Back) => WizardStep::Requirements,
            (WizardStep::Render, Transition::Back) => WizardStep::Preview,
            (step, _) => step,
        }
    }

    /// Status of `self` when `current` is the visible step.
    #[must_use]
    pub fn status_relative_to(self, current: WizardStep) -> StepStatus {
        match self.cmp(&current) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    /// One-based position shown in the indicator.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Requirements => 1,
            WizardStep::Preview => 2,
            WizardStep::Render => 3,
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            WizardStep::Requirements => "wizard-step-requirements",
            WizardStep::Preview => "wizard-step-preview",
            WizardStep::Render => "wizard-step-render",
        }
    }
}
