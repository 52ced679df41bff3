//! HTTP transport contract tests
//!
//! Verify the request wire format sent to `/command` and how each kind of
//! device answer is mapped.

use std::sync::Arc;
use std::time::Duration;

use fourletterdisplay_core::types::{CommandRequest, DisplayCommand, DotSelection};
use fourletterdisplay_core::{CoreError, DisplayCommandService, RpcTransport};
use fourletterdisplay_rpc::{HttpTransport, RpcConfig};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport_for(server: &MockServer) -> HttpTransport {
    let config = RpcConfig::new(&server.uri()).unwrap();
    HttpTransport::new(&config).unwrap()
}

fn ok_envelope(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "error": false,
        "message": "",
        "data": data,
    }))
}

#[tokio::test]
async fn posts_wire_request_to_command_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/command"))
        .and(body_json(json!({
            "command": "set_dots",
            "to": "fourletterdisplay",
            "params": {
                "most_left": true,
                "middle_left": false,
                "middle_right": false,
                "most_right": true,
            }
        })))
        .respond_with(ok_envelope(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let request = DisplayCommand::SetDots(DotSelection::new(true, false, false, true))
        .into_request("fourletterdisplay");

    let result = transport.send_command(request).await;

    assert!(result.is_ok(), "unexpected result: {result:?}");
}

#[tokio::test]
async fn returns_data_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/command"))
        .respond_with(ok_envelope(json!({ "brightness": 15, "nightmode": false })))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let data = transport
        .send_command(CommandRequest::new("get_module_config", "fourletterdisplay"))
        .await
        .unwrap();

    assert_eq!(data, json!({ "brightness": 15, "nightmode": false }));
}

#[tokio::test]
async fn clear_sends_empty_params() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/command"))
        .and(body_json(json!({
            "command": "clear",
            "to": "fourletterdisplay",
            "params": {}
        })))
        .respond_with(ok_envelope(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    let svc = DisplayCommandService::new(Arc::new(transport_for(&server)), "fourletterdisplay");

    svc.clear().await.unwrap();
}

#[tokio::test]
async fn backend_rejection_maps_to_command_failed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/command"))
        .and(body_partial_json(json!({ "command": "set_brightness" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": true,
            "message": "Parameter \"brightness\" must be between 0..15",
            "data": null,
        })))
        .mount(&server)
        .await;

    let svc = DisplayCommandService::new(Arc::new(transport_for(&server)), "fourletterdisplay");
    let result = svc.set_brightness(80).await;

    assert_eq!(
        result,
        Err(CoreError::CommandFailed {
            command: "set_brightness".to_string(),
            message: "Parameter \"brightness\" must be between 0..15".to_string(),
        })
    );
}

#[tokio::test]
async fn server_error_maps_to_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/command"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let result = transport
        .send_command(CommandRequest::new("clear", "fourletterdisplay"))
        .await;

    assert!(
        matches!(result, Err(CoreError::HttpStatus { status: 500, .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn slow_device_maps_to_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/command"))
        .respond_with(ok_envelope(json!(null)).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let config = RpcConfig::new(&server.uri())
        .unwrap()
        .with_timeout(Duration::from_millis(200));
    let transport = HttpTransport::new(&config).unwrap();

    let result = transport
        .send_command(CommandRequest::new("clear", "fourletterdisplay"))
        .await;

    assert!(
        matches!(result, Err(CoreError::Timeout(_))),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn unreachable_device_maps_to_network_error() {
    // Nothing listens on port 9 (discard) in the test environment
    let config = RpcConfig::new("http://127.0.0.1:9").unwrap();
    let transport = HttpTransport::new(&config).unwrap();

    let result = transport
        .send_command(CommandRequest::new("clear", "fourletterdisplay"))
        .await;

    assert!(
        matches!(result, Err(CoreError::NetworkError(_))),
        "unexpected result: {result:?}"
    );
}
