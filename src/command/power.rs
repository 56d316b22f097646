// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power control commands.

use serde_json::Value;

use crate::command::{Command, Method};
use crate::types::PowerState;

/// Command to set the bulb's power state.
///
/// # Examples
///
/// ```
/// use yeelight_lib::command::{Command, PowerCommand};
/// use yeelight_lib::types::PowerState;
///
/// let cmd = PowerCommand::on();
/// assert_eq!(cmd.method().as_str(), "set_power");
/// assert_eq!(cmd.params(), vec![serde_json::json!("on")]);
///
/// let cmd = PowerCommand::new(PowerState::Off);
/// assert_eq!(cmd.params(), vec![serde_json::json!("off")]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerCommand(PowerState);

impl PowerCommand {
    /// Creates a command for the given power state.
    #[must_use]
    pub const fn new(state: PowerState) -> Self {
        Self(state)
    }

    /// Creates a command to turn the bulb on.
    #[must_use]
    pub const fn on() -> Self {
        Self(PowerState::On)
    }

    /// Creates a command to turn the bulb off.
    #[must_use]
    pub const fn off() -> Self {
        Self(PowerState::Off)
    }

    /// Returns the power state this command sets.
    #[must_use]
    pub const fn state(&self) -> PowerState {
        self.0
    }
}

impl Command for PowerCommand {
    fn method(&self) -> Method {
        Method::SetPower
    }

    fn params(&self) -> Vec<Value> {
        vec![Value::from(self.0.as_str())]
    }
}

/// Command to toggle the bulb's power state.
///
/// Takes no parameters; the bulb flips its current state.
///
/// # Examples
///
/// ```
/// use yeelight_lib::command::{Command, ToggleCommand};
///
/// let cmd = ToggleCommand;
/// assert_eq!(cmd.method().as_str(), "toggle");
/// assert!(cmd.params().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleCommand;

impl Command for ToggleCommand {
    fn method(&self) -> Method {
        Method::Toggle
    }

    fn params(&self) -> Vec<Value> {
        Vec::new()
    }
}
