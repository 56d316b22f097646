// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the TCP session against a scripted mock bulb.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

use yeelight_lib::protocol::TcpConfig;
use yeelight_lib::types::HsvColor;
use yeelight_lib::{Bulb, DeviceError, Error, ParseError, ProtocolError};

/// One scripted reaction of the mock bulb to an incoming request.
#[derive(Debug, Clone, Copy)]
enum Reply {
    /// Echo the request id with `"result":["ok"]`, no terminator.
    Ok,
    /// Echo the request id, splitting the reply across two delayed writes.
    SplitOk,
    /// Reply with a fixed id regardless of the request id.
    OkWithId(u64),
    /// Reply with an error payload.
    Rejected,
    /// Write bytes that are not valid JSON.
    Garbage,
    /// Write a JSON object with neither result nor error.
    Empty,
    /// Write half a JSON value, then close the connection.
    Truncate,
    /// Read the request but never reply.
    Silent,
}

/// Spawns a mock bulb that accepts one connection and follows `script`,
/// one entry per received request frame. Returns the address and the log
/// of received request objects.
async fn spawn_mock(script: Vec<Reply>) -> (String, Arc<Mutex<Vec<Value>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);

    tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let (read_half, mut write_half) = socket.into_split();
        let mut lines = BufReader::new(read_half).lines();

        for reply in script {
            let Ok(Some(line)) = lines.next_line().await else {
                break;
            };
            let request: Value = serde_json::from_str(&line).unwrap();
            let id = request["id"].as_u64().unwrap();
            log.lock().unwrap().push(request);

            match reply {
                Reply::Ok => {
                    let body = format!(r#"{{"id":{id},"result":["ok"]}}"#);
                    write_half.write_all(body.as_bytes()).await.unwrap();
                }
                Reply::SplitOk => {
                    let body = format!(r#"{{"id":{id},"result":["ok"]}}"#);
                    let (first, second) = body.as_bytes().split_at(10);
                    write_half.write_all(first).await.unwrap();
                    write_half.flush().await.unwrap();
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    write_half.write_all(second).await.unwrap();
                }
                Reply::OkWithId(fixed) => {
                    let body = format!(r#"{{"id":{fixed},"result":["ok"]}}"#);
                    write_half.write_all(body.as_bytes()).await.unwrap();
                }
                Reply::Rejected => {
                    let body = format!(
                        r#"{{"id":{id},"error":{{"code":-1,"message":"method not supported"}}}}"#
                    );
                    write_half.write_all(body.as_bytes()).await.unwrap();
                }
                Reply::Garbage => {
                    write_half.write_all(b"@@@@").await.unwrap();
                }
                Reply::Empty => {
                    let body = format!(r#"{{"id":{id}}}"#);
                    write_half.write_all(body.as_bytes()).await.unwrap();
                }
                Reply::Truncate => {
                    let body = format!(r#"{{"id":{id},"result":["o"#);
                    write_half.write_all(body.as_bytes()).await.unwrap();
                    break;
                }
                Reply::Silent => {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                }
            }
        }
    });

    (addr.to_string(), requests)
}

async fn connect(addr: &str) -> Bulb {
    Bulb::connect(addr).await.unwrap()
}

fn logged(requests: &Arc<Mutex<Vec<Value>>>) -> Vec<Value> {
    requests.lock().unwrap().clone()
}

// ============================================================================
// Id assignment
// ============================================================================

#[tokio::test]
async fn ids_increase_from_zero() {
    let (addr, requests) = spawn_mock(vec![Reply::Ok; 4]).await;
    let bulb = connect(&addr).await;

    for _ in 0..4 {
        bulb.turn_on().await.unwrap();
    }

    let ids: Vec<u64> = logged(&requests)
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn failed_exchange_does_not_consume_id() {
    let (addr, requests) = spawn_mock(vec![Reply::Garbage, Reply::Ok]).await;
    let bulb = connect(&addr).await;

    let err = bulb.turn_on().await.unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::Json(_))));

    // The next successful send reuses the id the failed one would have used
    bulb.turn_on().await.unwrap();
    let ids: Vec<u64> = logged(&requests)
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![0, 0]);
}

#[tokio::test]
async fn rejected_command_consumes_id() {
    let (addr, requests) = spawn_mock(vec![Reply::Rejected, Reply::Ok]).await;
    let bulb = connect(&addr).await;

    let err = bulb.set_brightness(50).await.unwrap_err();
    match err {
        Error::Device(DeviceError::CommandRejected { code, message }) => {
            assert_eq!(code, -1);
            assert_eq!(message, "method not supported");
        }
        other => panic!("expected CommandRejected, got {other:?}"),
    }

    bulb.set_brightness(50).await.unwrap();
    let ids: Vec<u64> = logged(&requests)
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![0, 1]);
}

#[tokio::test]
async fn mismatched_reply_id_is_accepted() {
    let (addr, requests) = spawn_mock(vec![Reply::OkWithId(999), Reply::Ok]).await;
    let bulb = connect(&addr).await;

    let response = bulb.turn_on().await.unwrap();
    assert_eq!(response.id(), 999);
    assert!(response.is_ok());

    // The counter still advanced
    bulb.turn_on().await.unwrap();
    let ids: Vec<u64> = logged(&requests)
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![0, 1]);
}

// ============================================================================
// Convenience operations on the wire
// ============================================================================

#[tokio::test]
async fn power_commands_on_the_wire() {
    let (addr, requests) = spawn_mock(vec![Reply::Ok; 3]).await;
    let bulb = connect(&addr).await;

    bulb.turn_on().await.unwrap();
    bulb.turn_off().await.unwrap();
    bulb.toggle().await.unwrap();

    let log = logged(&requests);
    assert_eq!(log[0]["method"], "set_power");
    assert_eq!(log[0]["params"], serde_json::json!(["on"]));
    assert_eq!(log[1]["method"], "set_power");
    assert_eq!(log[1]["params"], serde_json::json!(["off"]));
    assert_eq!(log[2]["method"], "toggle");
    assert_eq!(log[2]["params"], serde_json::json!([]));
}

#[tokio::test]
async fn color_temp_is_clamped_on_the_wire() {
    let (addr, requests) = spawn_mock(vec![Reply::Ok; 3]).await;
    let bulb = connect(&addr).await;

    bulb.set_color_temp(1000).await.unwrap();
    bulb.set_color_temp(9000).await.unwrap();
    bulb.set_color_temp(3000).await.unwrap();

    let log = logged(&requests);
    for request in &log {
        assert_eq!(request["method"], "set_ct_abx");
    }
    assert_eq!(log[0]["params"], serde_json::json!([1700]));
    assert_eq!(log[1]["params"], serde_json::json!([6500]));
    assert_eq!(log[2]["params"], serde_json::json!([3000]));
}

#[tokio::test]
async fn brightness_is_clamped_on_the_wire() {
    let (addr, requests) = spawn_mock(vec![Reply::Ok; 3]).await;
    let bulb = connect(&addr).await;

    bulb.set_brightness(0).await.unwrap();
    bulb.set_brightness(150).await.unwrap();
    bulb.set_brightness(50).await.unwrap();

    let log = logged(&requests);
    for request in &log {
        assert_eq!(request["method"], "set_bright");
    }
    assert_eq!(log[0]["params"], serde_json::json!([1]));
    assert_eq!(log[1]["params"], serde_json::json!([100]));
    assert_eq!(log[2]["params"], serde_json::json!([50]));
}

#[tokio::test]
async fn rgb_channels_are_packed_on_the_wire() {
    let (addr, requests) = spawn_mock(vec![Reply::Ok; 3]).await;
    let bulb = connect(&addr).await;

    bulb.set_rgb(255, 0, 0).await.unwrap();
    bulb.set_rgb(0, 255, 0).await.unwrap();
    bulb.set_rgb(0, 0, 255).await.unwrap();

    let log = logged(&requests);
    for request in &log {
        assert_eq!(request["method"], "set_rgb");
    }
    assert_eq!(log[0]["params"], serde_json::json!([16_711_680]));
    assert_eq!(log[1]["params"], serde_json::json!([65_280]));
    assert_eq!(log[2]["params"], serde_json::json!([255]));
}

#[tokio::test]
async fn hsv_sends_hue_then_saturation() {
    let (addr, requests) = spawn_mock(vec![Reply::Ok]).await;
    let bulb = connect(&addr).await;

    bulb.set_hsv(HsvColor::new(180, 80).unwrap()).await.unwrap();

    let log = logged(&requests);
    assert_eq!(log[0]["method"], "set_hsv");
    assert_eq!(log[0]["params"], serde_json::json!([180, 80]));
}

// ============================================================================
// Reply decoding
// ============================================================================

#[tokio::test]
async fn reply_split_across_writes_is_decoded() {
    let (addr, _) = spawn_mock(vec![Reply::SplitOk]).await;
    let bulb = connect(&addr).await;

    let response = bulb.turn_on().await.unwrap();
    assert!(response.is_ok());
    assert_eq!(response.result(), ["ok".to_string()]);
}

#[tokio::test]
async fn reply_without_result_or_error_is_rejected() {
    let (addr, requests) = spawn_mock(vec![Reply::Empty, Reply::Ok]).await;
    let bulb = connect(&addr).await;

    let err = bulb.turn_on().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ParseError::UnexpectedFormat(_))
    ));

    // Malformed reply did not consume the id
    bulb.turn_on().await.unwrap();
    let ids: Vec<u64> = logged(&requests)
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![0, 0]);
}

#[tokio::test]
async fn truncated_reply_is_an_error() {
    let (addr, _) = spawn_mock(vec![Reply::Truncate]).await;
    let bulb = connect(&addr).await;

    let err = bulb.turn_on().await.unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::Truncated)));
}

#[tokio::test]
async fn closed_connection_is_a_read_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    tokio::spawn(async move {
        // Accept and immediately close without reading
        let (socket, _) = listener.accept().await.unwrap();
        drop(socket);
    });

    let bulb = connect(&addr).await;
    let err = bulb.turn_on().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Protocol(ProtocolError::Read(_) | ProtocolError::Write(_))
    ));
}

#[tokio::test]
async fn configured_timeout_bounds_the_round_trip() {
    let (addr, _) = spawn_mock(vec![Reply::Silent]).await;

    let session = TcpConfig::parse(&addr)
        .unwrap()
        .with_timeout(Duration::from_millis(100))
        .connect()
        .await
        .unwrap();
    let bulb = Bulb::from_session(session);

    let err = bulb.turn_on().await.unwrap_err();
    assert!(matches!(err, Error::Protocol(ProtocolError::Timeout(100))));
}

// ============================================================================
// Connection
// ============================================================================

#[tokio::test]
async fn connect_to_unreachable_address_fails() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    drop(listener);

    let err = Bulb::connect(&addr).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Protocol(ProtocolError::ConnectionFailed(_))
    ));
}

#[tokio::test]
async fn invalid_address_is_rejected_before_connecting() {
    let err = Bulb::connect("bulb.local:not-a-port").await.unwrap_err();
    assert!(matches!(
        err,
        Error::Protocol(ProtocolError::InvalidAddress(_))
    ));
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn concurrent_senders_never_interleave_frames() {
    const CALLERS: usize = 8;

    let (addr, requests) = spawn_mock(vec![Reply::Ok; CALLERS]).await;
    let bulb = Arc::new(connect(&addr).await);

    let mut handles = Vec::new();
    for i in 0..CALLERS {
        let bulb = Arc::clone(&bulb);
        let percent = u8::try_from(i).unwrap() * 10 + 5;
        handles.push(tokio::spawn(async move {
            bulb.set_brightness(percent).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Every received line parsed as one complete frame (the mock panics on
    // a torn frame), and ids were assigned gap-free in wire order.
    let ids: Vec<u64> = logged(&requests)
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    let expected: Vec<u64> = (0..CALLERS as u64).collect();
    assert_eq!(ids, expected);
}
