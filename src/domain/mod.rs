// SPDX-License-Identifier: MPL-2.0
//! Domain layer: the wizard's data model and pure rules.
//!
//! Nothing here touches iced, the filesystem or the clock on its own; callers
//! pass timestamps in. Only small data crates are used (`serde` for config
//! round-trips, `chrono` for dates, `thiserror` for validation errors).
//!
//! # Modules
//!
//! - [`requirements`]: the record gathered by the first step
//!   ([`Requirements`](requirements::Requirements),
//!   [`RequirementsDraft`](requirements::RequirementsDraft))
//! - [`script`]: Manim template generation ([`generate`](script::generate))
//! - [`render`]: the simulated render ([`RenderSession`](render::RenderSession),
//!   [`RenderSettings`](render::RenderSettings))
//! - [`catalog`]: sample videos and [`CatalogQuery`](catalog::CatalogQuery)
//! - [`wizard`]: step transitions ([`WizardStep`](wizard::WizardStep))

pub mod catalog;
pub mod render;
pub mod requirements;
pub mod script;
pub mod wizard;
