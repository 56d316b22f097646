// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Yeelight Lib - A Rust library to control Yeelight smart bulbs.
//!
//! This library speaks the Yeelight LAN control protocol: a persistent TCP
//! connection (default port 55443) carrying JSON commands terminated by
//! `\r\n`, answered by JSON replies.
//!
//! # Supported Features
//!
//! - **Power control**: Turn bulbs on/off, toggle
//! - **Light control**: Brightness, color temperature, RGB and HSV colors
//! - **Raw commands**: Any protocol method with positional parameters
//!
//! Commands on one session are fully serialized: ids are assigned
//! monotonically starting at 0, at most one command is in flight at a time,
//! and a failed exchange does not consume an id.
//!
//! # Quick Start
//!
//! ```no_run
//! use yeelight_lib::Bulb;
//!
//! #[tokio::main]
//! async fn main() -> yeelight_lib::Result<()> {
//!     // Default control port 55443 is appended when no port is given
//!     let bulb = Bulb::connect("192.168.1.45").await?;
//!
//!     bulb.turn_on().await?;
//!     bulb.set_brightness(75).await?;
//!     bulb.set_color_temp(2700).await?;
//!     bulb.turn_off().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Typed Commands
//!
//! Convenience methods clamp raw values the way the protocol expects; the
//! typed command layer is available when validation should fail instead:
//!
//! ```no_run
//! use yeelight_lib::{Bulb, command::ColorTempCommand, types::ColorTemp};
//!
//! #[tokio::main]
//! async fn main() -> yeelight_lib::Result<()> {
//!     let bulb = Bulb::connect("192.168.1.45").await?;
//!
//!     // Rejects out-of-range values instead of clamping
//!     let temp = ColorTemp::new(4000)?;
//!     bulb.send_command(&ColorTempCommand::set(temp)).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Connection Options
//!
//! ```no_run
//! use std::time::Duration;
//! use yeelight_lib::{Bulb, protocol::TcpConfig};
//!
//! #[tokio::main]
//! async fn main() -> yeelight_lib::Result<()> {
//!     let session = TcpConfig::new("192.168.1.45")
//!         .with_timeout(Duration::from_secs(5))
//!         .connect()
//!         .await?;
//!     let bulb = Bulb::from_session(session);
//!
//!     bulb.toggle().await?;
//!     Ok(())
//! }
//! ```

pub mod command;
mod device;
pub mod error;
pub mod protocol;
pub mod types;

pub use command::{
    BrightnessCommand, ColorTempCommand, Command, HsvCommand, Method, PowerCommand, RgbCommand,
    ToggleCommand,
};
pub use device::Bulb;
pub use error::{DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{Request, Response, Session, TcpConfig};
pub use types::{Brightness, ColorTemp, HsvColor, PowerState, RgbColor};
