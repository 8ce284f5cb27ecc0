// SPDX-License-Identifier: MPL-2.0
//! The viewer: input contract, sub-components, and the coordinator that
//! composes them into one viewing session.

pub mod component;
pub mod options;
pub mod subcomponents;

pub use component::{SessionOutcome, ViewerCoordinator};
pub use options::ViewerOptions;
pub use subcomponents::selection::ToggleOutcome;
