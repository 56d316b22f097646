// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! TCP session implementation for the Yeelight control protocol.

use std::io;
use std::time::Duration;

use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::Mutex;

use crate::command::Method;
use crate::error::{DeviceError, Error, ParseError, ProtocolError};
use crate::protocol::{RawReply, Request, Response};

const READ_CHUNK: usize = 512;

// ============================================================================
// TcpConfig - Connection parameters
// ============================================================================

/// Configuration for connecting to a Yeelight bulb.
///
/// # Examples
///
/// ```
/// use yeelight_lib::protocol::TcpConfig;
/// use std::time::Duration;
///
/// // Simple configuration, default control port
/// let config = TcpConfig::new("192.168.1.45");
/// assert_eq!(config.port(), 55443);
///
/// // With all options
/// let config = TcpConfig::new("192.168.1.45")
///     .with_port(55443)
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct TcpConfig {
    host: String,
    port: u16,
    timeout: Option<Duration>,
}

impl TcpConfig {
    /// Default control port for Yeelight bulbs.
    pub const DEFAULT_PORT: u16 = 55443;

    /// Creates a new configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the bulb
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: None,
        }
    }

    /// Parses an address string of the form `host` or `host:port`.
    ///
    /// An address without an explicit port gets the default control port.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the port part is not a
    /// valid number.
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_lib::protocol::TcpConfig;
    ///
    /// let config = TcpConfig::parse("192.168.1.45").unwrap();
    /// assert_eq!(config.port(), 55443);
    ///
    /// let config = TcpConfig::parse("192.168.1.45:1234").unwrap();
    /// assert_eq!(config.port(), 1234);
    ///
    /// assert!(TcpConfig::parse("192.168.1.45:light").is_err());
    /// ```
    pub fn parse(address: &str) -> Result<Self, ProtocolError> {
        match address.rsplit_once(':') {
            Some((host, port)) => {
                let port = port
                    .parse()
                    .map_err(|_| ProtocolError::InvalidAddress(address.to_string()))?;
                Ok(Self::new(host).with_port(port))
            }
            None => Ok(Self::new(address)),
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets a timeout applied to connecting and to each command round trip.
    ///
    /// Without a timeout, network operations block until the transport
    /// resolves them.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout if set.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Opens a TCP connection to the bulb and wraps it in a [`Session`].
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::ConnectionFailed` if the connection cannot be
    /// established, or `ProtocolError::Timeout` if a configured timeout
    /// elapses first. Connection failures are not retried.
    pub async fn connect(self) -> Result<Session, ProtocolError> {
        let address = format!("{}:{}", self.host, self.port);
        tracing::debug!(address = %address, "connecting");

        let connect = TcpStream::connect(&address);
        let stream = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, connect)
                .await
                .map_err(|_| ProtocolError::Timeout(as_millis(limit)))?,
            None => connect.await,
        }
        .map_err(ProtocolError::ConnectionFailed)?;

        Ok(Session::new(stream, self.timeout))
    }
}

// ============================================================================
// Session - One connection, one in-flight command
// ============================================================================

/// A live session with one bulb.
///
/// The session owns exactly one TCP connection and the command-id counter
/// for its lifetime. Ids start at 0 and advance only after a reply has been
/// received, so a failed exchange does not burn an id.
///
/// Both the connection and the counter sit behind a single mutex: concurrent
/// callers are serialized, at most one command is in flight at a time, and
/// request frames can never interleave on the wire.
///
/// Dropping the session closes the connection.
#[derive(Debug)]
pub struct Session {
    inner: Mutex<SessionInner>,
    timeout: Option<Duration>,
}

#[derive(Debug)]
struct SessionInner {
    stream: TcpStream,
    next_id: u64,
}

impl Session {
    pub(crate) fn new(stream: TcpStream, timeout: Option<Duration>) -> Self {
        Self {
            inner: Mutex::new(SessionInner { stream, next_id: 0 }),
            timeout,
        }
    }

    /// Sends one command and waits for the bulb's reply.
    ///
    /// The exchange runs under the session lock: serialize the request,
    /// write it followed by the `\r\n` terminator, then decode exactly one
    /// JSON value as the reply. The reply's id is not matched against the
    /// request id; a mismatch is logged and the reply returned as-is.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::Write` - the frame or terminator write failed. The
    ///   connection is in an indeterminate state; discard the session and
    ///   reconnect rather than reusing it.
    /// - `ProtocolError::Read` - the transport failed while awaiting the
    ///   reply.
    /// - `ProtocolError::Timeout` - a configured timeout elapsed.
    /// - `ParseError` - the reply was malformed or truncated.
    /// - `DeviceError::CommandRejected` - the bulb answered with an error
    ///   reply.
    ///
    /// The id counter advances only when a well-formed reply (success or
    /// rejection) was received.
    pub async fn send(&self, method: Method, params: Vec<Value>) -> Result<Response, Error> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.exchange(method, params))
                .await
                .map_err(|_| ProtocolError::Timeout(as_millis(limit)))?,
            None => self.exchange(method, params).await,
        }
    }

    async fn exchange(&self, method: Method, params: Vec<Value>) -> Result<Response, Error> {
        let mut inner = self.inner.lock().await;

        let id = inner.next_id;
        let request = Request::new(id, method, params);
        let body = serde_json::to_vec(&request).map_err(ParseError::Json)?;

        tracing::debug!(id, method = %method, "sending command");

        inner.stream.write_all(&body).await.map_err(ProtocolError::Write)?;
        inner
            .stream
            .write_all(b"\r\n")
            .await
            .map_err(ProtocolError::Write)?;

        let reply = read_reply(&mut inner.stream).await?;

        tracing::debug!(id = reply.id, "received reply");

        if reply.result.is_none() && reply.error.is_none() {
            return Err(ParseError::UnexpectedFormat(
                "reply carries neither result nor error".to_string(),
            )
            .into());
        }

        // A well-formed reply means the id was consumed on the wire, even if
        // the bulb rejected the command.
        inner.next_id += 1;

        if reply.id != id {
            tracing::warn!(sent = id, received = reply.id, "reply id does not match request id");
        }

        if let Some(error) = reply.error {
            return Err(DeviceError::CommandRejected {
                code: error.code,
                message: error.message,
            }
            .into());
        }

        // Checked above: result is present when error is not.
        let result = reply.result.unwrap_or_default();
        Ok(Response::new(reply.id, result))
    }
}

/// Reads exactly one JSON value from the stream.
///
/// Replies carry no guaranteed terminator, so the buffer is fed to a
/// streaming deserializer after every read until it yields one complete
/// value.
async fn read_reply(stream: &mut TcpStream) -> Result<RawReply, Error> {
    let mut buf: Vec<u8> = Vec::with_capacity(READ_CHUNK);
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        let n = stream.read(&mut chunk).await.map_err(ProtocolError::Read)?;
        if n == 0 {
            if buf.iter().all(u8::is_ascii_whitespace) {
                return Err(ProtocolError::Read(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "connection closed before reply",
                ))
                .into());
            }
            return Err(ParseError::Truncated.into());
        }
        buf.extend_from_slice(&chunk[..n]);

        let mut values = serde_json::Deserializer::from_slice(&buf).into_iter::<RawReply>();
        match values.next() {
            Some(Ok(reply)) => return Ok(reply),
            Some(Err(e)) if e.is_eof() => {} // incomplete value, keep reading
            Some(Err(e)) => return Err(ParseError::Json(e).into()),
            None => {}
        }
    }
}

fn as_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
