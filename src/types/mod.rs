// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Yeelight bulb control.
//!
//! This module provides type-safe representations of values carried in bulb
//! commands. Each type ensures values are within their valid ranges at
//! construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off states for power control
//! - [`Brightness`] - Brightness level (1-100%)
//! - [`ColorTemp`] - Color temperature in kelvin (1700-6500)
//! - [`RgbColor`] - RGB color with 8-bit channels and 24-bit wire packing
//! - [`HsvColor`] - HSV color (Hue 0-359, Saturation 0-100)

mod brightness;
mod color_temp;
mod hsv;
mod power;
mod rgb_color;

pub use brightness::Brightness;
pub use color_temp::ColorTemp;
pub use hsv::HsvColor;
pub use power::PowerState;
pub use rgb_color::RgbColor;
