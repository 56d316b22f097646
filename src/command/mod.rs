// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Yeelight command definitions.
//!
//! This module provides typed representations of the commands a bulb
//! understands, serialized onto the wire as a method name plus a positional
//! parameter array.
//!
//! # Available Commands
//!
//! | Command Type | Method | Example params |
//! |-------------|--------|----------------|
//! | [`PowerCommand`] | `set_power` | `["on"]` |
//! | [`ToggleCommand`] | `toggle` | `[]` |
//! | [`BrightnessCommand`] | `set_bright` | `[75]` |
//! | [`ColorTempCommand`] | `set_ct_abx` | `[4000]` |
//! | [`RgbCommand`] | `set_rgb` | `[16711680]` |
//! | [`HsvCommand`] | `set_hsv` | `[180, 80]` |
//!
//! # Examples
//!
//! ```
//! use yeelight_lib::command::{Command, PowerCommand, BrightnessCommand};
//! use yeelight_lib::types::Brightness;
//!
//! let cmd = PowerCommand::on();
//! assert_eq!(cmd.method().as_str(), "set_power");
//! assert_eq!(cmd.params(), vec![serde_json::json!("on")]);
//!
//! let cmd = BrightnessCommand::set(Brightness::new(75).unwrap());
//! assert_eq!(cmd.params(), vec![serde_json::json!(75)]);
//! ```

mod light;
mod power;

pub use light::{BrightnessCommand, ColorTempCommand, HsvCommand, RgbCommand};
pub use power::{PowerCommand, ToggleCommand};

use std::fmt;

use serde_json::Value;

/// Method names understood by the bulb's control protocol.
///
/// The serialized form is the exact wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Method {
    /// Set white color temperature (`set_ct_abx`).
    #[serde(rename = "set_ct_abx")]
    SetColorTemp,
    /// Set RGB color (`set_rgb`).
    #[serde(rename = "set_rgb")]
    SetRgb,
    /// Set HSV color (`set_hsv`).
    #[serde(rename = "set_hsv")]
    SetHsv,
    /// Set brightness (`set_bright`).
    #[serde(rename = "set_bright")]
    SetBrightness,
    /// Set power state (`set_power`).
    #[serde(rename = "set_power")]
    SetPower,
    /// Toggle power state (`toggle`).
    #[serde(rename = "toggle")]
    Toggle,
}

impl Method {
    /// Returns the wire name of the method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SetColorTemp => "set_ct_abx",
            Self::SetRgb => "set_rgb",
            Self::SetHsv => "set_hsv",
            Self::SetBrightness => "set_bright",
            Self::SetPower => "set_power",
            Self::Toggle => "toggle",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A command that can be sent to a Yeelight bulb.
///
/// Commands serialize to the wire request format: a [`Method`] and an
/// ordered parameter array.
pub trait Command {
    /// Returns the protocol method this command invokes.
    fn method(&self) -> Method;

    /// Returns the positional parameters for this command.
    ///
    /// Order and element types are method-defined.
    fn params(&self) -> Vec<Value>;
}
