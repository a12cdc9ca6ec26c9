#![allow(clippy::unwrap_used)]
// Integration tests for `Client` using wiremock: envelope shapes, default
// query items, and the response-classification matrix.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use oba_api::client::{StopProblemCode, StopProblemReport};
use oba_api::{Client, ClientConfig, Error};

// ── Helpers ─────────────────────────────────────────────────────────

fn config(base: &str) -> ClientConfig {
    ClientConfig {
        base_url: base.parse().unwrap(),
        api_key: "test".to_string().into(),
        app_uid: "uuid-1".to_string(),
        app_ver: "1.0".to_string(),
        region_id: None,
    }
}

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::with_client(reqwest::Client::new(), &config(&server.uri()));
    (server, client)
}

fn json_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_default_query_items_sent() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/where/current-time.json"))
        .and(query_param("key", "test"))
        .and(query_param("app_uid", "uuid-1"))
        .and(query_param("app_ver", "1.0"))
        .and(query_param("version", "2"))
        .respond_with(json_response(json!({
            "code": 200, "currentTime": 1_343_587_068_277_i64, "text": "OK", "version": 2,
            "data": { "entry": { "time": 1_343_587_068_277_i64, "readableTime": "2012-07-29T11:37:48-07:00" } }
        })))
        .mount(&server)
        .await;

    let result = client.current_time().await.unwrap();

    assert_eq!(result.entry.time, 1_343_587_068_277);
    assert_eq!(
        result.entry.readable_time.as_deref(),
        Some("2012-07-29T11:37:48-07:00")
    );
}

#[tokio::test]
async fn test_region_id_appended_when_configured() {
    let server = MockServer::start().await;
    let mut cfg = config(&server.uri());
    cfg.region_id = Some(1);
    let client = Client::with_client(reqwest::Client::new(), &cfg);

    Mock::given(method("GET"))
        .and(path("/api/where/current-time.json"))
        .and(query_param("regionId", "1"))
        .respond_with(json_response(json!({
            "code": 200, "version": 2,
            "data": { "entry": { "time": 5 } }
        })))
        .mount(&server)
        .await;

    client.current_time().await.unwrap();
}

#[tokio::test]
async fn test_stop_entry_with_references() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/where/stop/1_75403.json"))
        .respond_with(json_response(json!({
            "code": 200, "version": 2,
            "data": {
                "entry": {
                    "id": "1_75403",
                    "lat": 47.6098,
                    "lon": -122.3332,
                    "name": "3rd Ave & Pike St",
                    "code": "75403",
                    "direction": "S",
                    "routeIds": ["1_44"]
                },
                "references": {
                    "agencies": [{ "id": "1", "name": "Metro Transit" }],
                    "routes": [{ "id": "1_44", "agencyId": "1", "shortName": "44", "type": 3 }]
                }
            }
        })))
        .mount(&server)
        .await;

    let result = client.stop("1_75403").await.unwrap();

    assert_eq!(result.entry.name, "3rd Ave & Pike St");
    assert_eq!(result.entry.route_ids, vec!["1_44"]);
    assert_eq!(result.references.agencies.len(), 1);
    assert_eq!(result.references.routes[0].short_name.as_deref(), Some("44"));
}

#[tokio::test]
async fn test_stops_for_location_out_of_range() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/where/stops-for-location.json"))
        .and(query_param("lat", "0"))
        .and(query_param("lon", "0"))
        .respond_with(json_response(json!({
            "code": 200, "version": 2,
            "data": { "list": [], "outOfRange": true, "limitExceeded": false }
        })))
        .mount(&server)
        .await;

    let result = client
        .stops_for_location(0.0, 0.0, &Default::default())
        .await
        .unwrap();

    assert!(result.list.is_empty());
    assert!(result.out_of_range);
}

#[tokio::test]
async fn test_arrivals_and_departures_for_stop() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/where/arrivals-and-departures-for-stop/1_75403.json"))
        .and(query_param("minutesBefore", "5"))
        .and(query_param("minutesAfter", "35"))
        .respond_with(json_response(json!({
            "code": 200, "version": 2,
            "data": {
                "entry": {
                    "stopId": "1_75403",
                    "arrivalsAndDepartures": [{
                        "routeId": "1_44",
                        "routeShortName": "44",
                        "tripId": "1_604",
                        "tripHeadsign": "Ballard",
                        "stopId": "1_75403",
                        "predicted": true,
                        "predictedArrivalTime": 2_000,
                        "scheduledArrivalTime": 1_000,
                        "scheduledDepartureTime": 1_000,
                        "numberOfStopsAway": 3
                    }],
                    "nearbyStopIds": ["1_75404"]
                }
            }
        })))
        .mount(&server)
        .await;

    let result = client
        .arrivals_and_departures_for_stop("1_75403", 5, 35)
        .await
        .unwrap();

    let arrivals = &result.entry.arrivals_and_departures;
    assert_eq!(arrivals.len(), 1);
    assert_eq!(arrivals[0].trip_headsign.as_deref(), Some("Ballard"));
    assert_eq!(arrivals[0].best_arrival_time(), 2_000);
    assert_eq!(arrivals[0].number_of_stops_away, 3);
}

#[tokio::test]
async fn test_base_url_with_trailing_path_joins_cleanly() {
    let server = MockServer::start().await;
    // Tampa-style base URL that already carries a path segment and slash.
    let client = Client::with_client(
        reqwest::Client::new(),
        &config(&format!("{}/api/", server.uri())),
    );

    Mock::given(method("GET"))
        .and(path("/api/api/where/current-time.json"))
        .respond_with(json_response(json!({
            "code": 200, "version": 2,
            "data": { "entry": { "time": 5 } }
        })))
        .mount(&server)
        .await;

    client.current_time().await.unwrap();
}

#[tokio::test]
async fn test_report_problem_with_stop() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/where/report-problem-with-stop/1_75403.json"))
        .and(query_param("code", "stop_name_wrong"))
        .and(query_param("userComment", "sign says Pine St"))
        .respond_with(json_response(json!({ "code": 200, "text": "OK", "version": 2 })))
        .mount(&server)
        .await;

    client
        .report_problem_with_stop(&StopProblemReport {
            stop_id: "1_75403".into(),
            code: StopProblemCode::NameWrong,
            user_comment: Some("sign says Pine St".into()),
            user_location: None,
        })
        .await
        .unwrap();
}

// ── Classification tests ────────────────────────────────────────────

#[tokio::test]
async fn test_http_404_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client.stop("1_bogus").await;
    assert!(matches!(result, Err(Error::RequestNotFound)), "got: {result:?}");
}

#[tokio::test]
async fn test_http_500_is_request_failure() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.current_time().await;
    match result {
        Err(Error::RequestFailure { status }) => assert_eq!(status, 500),
        other => panic!("expected RequestFailure, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_200_is_not_found() {
    let (server, client) = setup().await;

    // The upstream server answers 200 with an empty body for bogus IDs
    // instead of a proper 404.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = client.stop("1_bogus").await;
    assert!(matches!(result, Err(Error::RequestNotFound)), "got: {result:?}");
}

#[tokio::test]
async fn test_html_body_is_a_captive_portal() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                "<html><body>Sign in to Airport Wi-Fi</body></html>".as_bytes().to_vec(),
                "text/html; charset=utf-8",
            ),
        )
        .mount(&server)
        .await;

    let result = client.current_time().await;
    assert!(matches!(result, Err(Error::CaptivePortal)), "got: {result:?}");
}

#[tokio::test]
async fn test_non_json_content_type_rejected() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/plain")
                .set_body_string("hello"),
        )
        .mount(&server)
        .await;

    let result = client.current_time().await;
    match result {
        Err(Error::InvalidContentType { content_type }) => {
            assert_eq!(content_type, "text/plain");
        }
        other => panic!("expected InvalidContentType, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_embedded_error_code_overrides_http_200() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(json_response(json!({
            "code": 404, "text": "resource not found", "version": 2, "data": null
        })))
        .mount(&server)
        .await;

    let result = client.stop("1_bogus").await;
    assert!(matches!(result, Err(Error::RequestNotFound)), "got: {result:?}");
}

#[tokio::test]
async fn test_decode_failure_preserves_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(json_response(json!(["not", "an", "envelope"])))
        .mount(&server)
        .await;

    let result = client.current_time().await;
    match result {
        Err(Error::Deserialization { body, .. }) => {
            assert!(body.contains("envelope"), "raw body kept for diagnostics");
        }
        other => panic!("expected Deserialization, got: {other:?}"),
    }
}
