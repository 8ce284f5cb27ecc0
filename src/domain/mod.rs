// SPDX-License-Identifier: MPL-2.0
//! Domain layer: pure data types with no presentation or port dependencies.

pub mod media;
pub mod ui;
