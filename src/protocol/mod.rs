// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire protocol for the Yeelight LAN control interface.
//!
//! Requests are UTF-8 JSON objects terminated by `\r\n`; replies are UTF-8
//! JSON objects with no guaranteed terminator, so decoding is value-delimited
//! rather than line-delimited.
//!
//! # Framing
//!
//! Request: `{"id": <int>, "method": "<name>", "params": [<value>, ...]}\r\n`
//!
//! Reply: `{"id": <int>, "result": ["<string>", ...]}` on success, or
//! `{"id": <int>, "error": {"code": <int>, "message": "<string>"}}` when the
//! bulb rejects a command.

mod tcp;

pub use tcp::{Session, TcpConfig};

use crate::command::Method;

/// A request frame as serialized onto the wire.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Request {
    id: u64,
    method: Method,
    params: Vec<serde_json::Value>,
}

impl Request {
    /// Creates a request frame.
    #[must_use]
    pub fn new(id: u64, method: Method, params: Vec<serde_json::Value>) -> Self {
        Self { id, method, params }
    }

    /// Returns the session-assigned command id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the positional parameters.
    #[must_use]
    pub fn params(&self) -> &[serde_json::Value] {
        &self.params
    }
}

/// A successful reply from the bulb.
#[derive(Debug, Clone)]
pub struct Response {
    id: u64,
    result: Vec<String>,
}

impl Response {
    pub(crate) fn new(id: u64, result: Vec<String>) -> Self {
        Self { id, result }
    }

    /// Returns the id echoed by the bulb.
    ///
    /// The session does not enforce that this matches the request id; it is
    /// exposed so callers can correlate if they choose to.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the result values.
    ///
    /// A successful command typically yields `["ok"]`.
    #[must_use]
    pub fn result(&self) -> &[String] {
        &self.result
    }

    /// Returns true if the result contains the `"ok"` acknowledgment.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.iter().any(|value| value == "ok")
    }
}

/// A reply as decoded off the wire, before success/error resolution.
#[derive(Debug, Clone, serde::Deserialize)]
pub(crate) struct RawReply {
    pub id: u64,
    #[serde(default)]
    pub result: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<ErrorReply>,
}

/// Error payload carried by a rejection reply.
#[derive(Debug, Clone, serde::Deserialize)]
pub(crate) struct ErrorReply {
    pub code: i32,
    pub message: String,
}
