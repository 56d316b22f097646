// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light control commands.
//!
//! This module provides commands for controlling brightness, color
//! temperature, RGB color, and HSV color.

use serde_json::Value;

use crate::command::{Command, Method};
use crate::types::{Brightness, ColorTemp, HsvColor, RgbColor};

/// Command to set the brightness level.
///
/// # Examples
///
/// ```
/// use yeelight_lib::command::{Command, BrightnessCommand};
/// use yeelight_lib::types::Brightness;
///
/// let cmd = BrightnessCommand::set(Brightness::new(75).unwrap());
/// assert_eq!(cmd.method().as_str(), "set_bright");
/// assert_eq!(cmd.params(), vec![serde_json::json!(75)]);
///
/// // Clamping constructor: 150 becomes 100
/// let cmd = BrightnessCommand::percent(150);
/// assert_eq!(cmd.params(), vec![serde_json::json!(100)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessCommand(Brightness);

impl BrightnessCommand {
    /// Creates a command to set a specific brightness.
    #[must_use]
    pub const fn set(value: Brightness) -> Self {
        Self(value)
    }

    /// Creates a command from a raw percentage, clamping to [1, 100].
    #[must_use]
    pub const fn percent(value: u8) -> Self {
        Self(Brightness::clamped(value))
    }

    /// Returns the brightness this command sets.
    #[must_use]
    pub const fn value(&self) -> Brightness {
        self.0
    }
}

impl Command for BrightnessCommand {
    fn method(&self) -> Method {
        Method::SetBrightness
    }

    fn params(&self) -> Vec<Value> {
        vec![Value::from(self.0.value())]
    }
}

/// Command to set the white color temperature.
///
/// # Examples
///
/// ```
/// use yeelight_lib::command::{Command, ColorTempCommand};
/// use yeelight_lib::types::ColorTemp;
///
/// let cmd = ColorTempCommand::set(ColorTemp::NEUTRAL);
/// assert_eq!(cmd.method().as_str(), "set_ct_abx");
/// assert_eq!(cmd.params(), vec![serde_json::json!(4000)]);
///
/// // Clamping constructor: 9000 becomes 6500
/// let cmd = ColorTempCommand::kelvin(9000);
/// assert_eq!(cmd.params(), vec![serde_json::json!(6500)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTempCommand(ColorTemp);

impl ColorTempCommand {
    /// Creates a command to set a specific color temperature.
    #[must_use]
    pub const fn set(value: ColorTemp) -> Self {
        Self(value)
    }

    /// Creates a command from a raw kelvin value, clamping to [1700, 6500].
    #[must_use]
    pub const fn kelvin(value: u16) -> Self {
        Self(ColorTemp::clamped(value))
    }

    /// Returns the color temperature this command sets.
    #[must_use]
    pub const fn value(&self) -> ColorTemp {
        self.0
    }
}

impl Command for ColorTempCommand {
    fn method(&self) -> Method {
        Method::SetColorTemp
    }

    fn params(&self) -> Vec<Value> {
        vec![Value::from(self.0.value())]
    }
}

/// Command to set the RGB color.
///
/// The color is sent as a single 24-bit packed integer.
///
/// # Examples
///
/// ```
/// use yeelight_lib::command::{Command, RgbCommand};
/// use yeelight_lib::types::RgbColor;
///
/// let cmd = RgbCommand::set(RgbColor::new(255, 0, 0));
/// assert_eq!(cmd.method().as_str(), "set_rgb");
/// assert_eq!(cmd.params(), vec![serde_json::json!(16_711_680)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbCommand(RgbColor);

impl RgbCommand {
    /// Creates a command to set a specific RGB color.
    #[must_use]
    pub const fn set(color: RgbColor) -> Self {
        Self(color)
    }

    /// Creates a command from individual channel values.
    #[must_use]
    pub const fn channels(red: u8, green: u8, blue: u8) -> Self {
        Self(RgbColor::new(red, green, blue))
    }

    /// Returns the color this command sets.
    #[must_use]
    pub const fn color(&self) -> RgbColor {
        self.0
    }
}

impl Command for RgbCommand {
    fn method(&self) -> Method {
        Method::SetRgb
    }

    fn params(&self) -> Vec<Value> {
        vec![Value::from(self.0.packed())]
    }
}

/// Command to set the HSV color.
///
/// Sent as two positional parameters: hue, then saturation.
///
/// # Examples
///
/// ```
/// use yeelight_lib::command::{Command, HsvCommand};
/// use yeelight_lib::types::HsvColor;
///
/// let cmd = HsvCommand::set(HsvColor::new(180, 80).unwrap());
/// assert_eq!(cmd.method().as_str(), "set_hsv");
/// assert_eq!(
///     cmd.params(),
///     vec![serde_json::json!(180), serde_json::json!(80)]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvCommand(HsvColor);

impl HsvCommand {
    /// Creates a command to set a specific HSV color.
    #[must_use]
    pub const fn set(color: HsvColor) -> Self {
        Self(color)
    }

    /// Returns the color this command sets.
    #[must_use]
    pub const fn color(&self) -> HsvColor {
        self.0
    }
}

impl Command for HsvCommand {
    fn method(&self) -> Method {
        Method::SetHsv
    }

    fn params(&self) -> Vec<Value> {
        vec![
            Value::from(self.0.hue()),
            Value::from(self.0.saturation()),
        ]
    }
}
