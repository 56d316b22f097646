// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Yeelight library.
//!
//! This module provides the error hierarchy for failures across the library:
//! value validation, transport communication, reply parsing, and device-level
//! rejections.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when interacting
/// with Yeelight bulbs.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred on the transport.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a reply.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The bulb reported an error for a command.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// A hue value is outside the valid range (0-359).
    #[error("hue value {0} is out of range [0, 359]")]
    InvalidHue(u16),

    /// A saturation value is outside the valid range (0-100).
    #[error("saturation value {0} is out of range [0, 100]")]
    InvalidSaturation(u8),

    /// A hex color string could not be parsed.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),
}

/// Errors related to the TCP transport.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Connection to the bulb could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(#[source] std::io::Error),

    /// Writing the command frame or its terminator failed.
    ///
    /// The connection is in an indeterminate state afterwards; the session
    /// should be discarded and a new one established.
    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),

    /// Reading the reply from the socket failed.
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid address string.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing bulb replies.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The connection was closed before a complete reply arrived.
    #[error("connection closed mid-reply")]
    Truncated,

    /// The reply was valid JSON but not a recognized reply shape.
    #[error("unexpected reply format: {0}")]
    UnexpectedFormat(String),
}

/// Errors reported by the bulb itself.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The bulb rejected the command.
    #[error("command rejected: {message} (code {code})")]
    CommandRejected {
        /// Numeric error code from the bulb.
        code: i32,
        /// Human-readable message from the bulb.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
