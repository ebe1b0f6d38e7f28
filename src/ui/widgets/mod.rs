// SPDX-License-Identifier: MPL-2.0
pub mod gradient_panel;

pub use gradient_panel::GradientPanel;
