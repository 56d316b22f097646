// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level bulb abstraction.
//!
//! This module provides the [`Bulb`] handle: one TCP session to one bulb,
//! with convenience methods for the common operations on top of the raw
//! command exchange.
//!
//! ```no_run
//! use yeelight_lib::Bulb;
//!
//! # async fn example() -> yeelight_lib::Result<()> {
//! let bulb = Bulb::connect("192.168.1.45").await?;
//!
//! bulb.turn_on().await?;
//! bulb.set_brightness(40).await?;
//! bulb.set_color_temp(2700).await?;
//! # Ok(())
//! # }
//! ```

use serde_json::Value;

use crate::command::{
    BrightnessCommand, ColorTempCommand, Command, HsvCommand, Method, PowerCommand, RgbCommand,
    ToggleCommand,
};
use crate::error::Error;
use crate::protocol::{Response, Session, TcpConfig};
use crate::types::{Brightness, ColorTemp, HsvColor, RgbColor};

/// A Yeelight bulb reachable over one TCP session.
///
/// The handle owns the connection for its lifetime; dropping the `Bulb`
/// closes it. All methods serialize through the session, so the handle can
/// be shared across tasks (behind an `Arc`) and commands from concurrent
/// callers execute one at a time in lock-acquisition order.
///
/// # Creating a Bulb
///
/// Use [`Bulb::connect`] with an address string, or [`TcpConfig`] when the
/// port or a timeout needs configuring:
///
/// ```no_run
/// use std::time::Duration;
/// use yeelight_lib::{Bulb, protocol::TcpConfig};
///
/// # async fn example() -> yeelight_lib::Result<()> {
/// let bulb = Bulb::connect("192.168.1.45").await?;
///
/// let session = TcpConfig::new("192.168.1.45")
///     .with_timeout(Duration::from_secs(5))
///     .connect()
///     .await?;
/// let bulb = Bulb::from_session(session);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bulb {
    session: Session,
}

impl Bulb {
    /// Connects to a bulb at the given address.
    ///
    /// An address without an explicit port gets the default control port
    /// 55443 appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid or the connection cannot
    /// be established. Failures are not retried; retry policy belongs to the
    /// caller.
    pub async fn connect(address: &str) -> Result<Self, Error> {
        let session = TcpConfig::parse(address)?.connect().await?;
        Ok(Self { session })
    }

    /// Wraps an already-connected session.
    #[must_use]
    pub fn from_session(session: Session) -> Self {
        Self { session }
    }

    /// Sends a typed command to the bulb.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange fails; see [`Session::send`].
    pub async fn send_command<C: Command>(&self, command: &C) -> Result<Response, Error> {
        self.session.send(command.method(), command.params()).await
    }

    /// Sends a raw command with positional parameters.
    ///
    /// Parameter count and types are method-specific and not validated by
    /// this layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange fails; see [`Session::send`].
    pub async fn send_raw(&self, method: Method, params: Vec<Value>) -> Result<Response, Error> {
        self.session.send(method, params).await
    }

    // ========== Power Control ==========

    /// Turns the bulb on.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn turn_on(&self) -> Result<Response, Error> {
        self.send_command(&PowerCommand::on()).await
    }

    /// Turns the bulb off.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn turn_off(&self) -> Result<Response, Error> {
        self.send_command(&PowerCommand::off()).await
    }

    /// Toggles the bulb's power state.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn toggle(&self) -> Result<Response, Error> {
        self.send_command(&ToggleCommand).await
    }

    // ========== Light Control ==========

    /// Sets the white color temperature from a raw kelvin value.
    ///
    /// Values are clamped to [1700, 6500] before transmission.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn set_color_temp(&self, kelvin: u16) -> Result<Response, Error> {
        self.send_command(&ColorTempCommand::kelvin(kelvin)).await
    }

    /// Sets the white color temperature from a validated value.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn set_color_temp_exact(&self, temp: ColorTemp) -> Result<Response, Error> {
        self.send_command(&ColorTempCommand::set(temp)).await
    }

    /// Sets the color from individual RGB channel values.
    ///
    /// The channels are packed into a single 24-bit integer with red in the
    /// high byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn set_rgb(&self, red: u8, green: u8, blue: u8) -> Result<Response, Error> {
        self.send_command(&RgbCommand::channels(red, green, blue))
            .await
    }

    /// Sets the color from an [`RgbColor`].
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn set_rgb_color(&self, color: RgbColor) -> Result<Response, Error> {
        self.send_command(&RgbCommand::set(color)).await
    }

    /// Sets the color in HSV form.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn set_hsv(&self, color: HsvColor) -> Result<Response, Error> {
        self.send_command(&HsvCommand::set(color)).await
    }

    /// Sets the brightness from a raw percentage.
    ///
    /// Values are clamped to [1, 100] before transmission; zero becomes 1,
    /// not off.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn set_brightness(&self, percent: u8) -> Result<Response, Error> {
        self.send_command(&BrightnessCommand::percent(percent)).await
    }

    /// Sets the brightness from a validated value.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn set_brightness_exact(&self, brightness: Brightness) -> Result<Response, Error> {
        self.send_command(&BrightnessCommand::set(brightness)).await
    }
}
