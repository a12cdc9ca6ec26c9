#![allow(clippy::unwrap_used)]
// Integration tests for the GTFS-realtime alert feed and the per-agency
// fan-out.

use prost::Message;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use oba_api::alerts::feed;
use oba_api::models::AgencyWithCoverage;
use oba_api::{Client, ClientConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let config = ClientConfig {
        base_url: server.uri().parse().unwrap(),
        api_key: "test".to_string().into(),
        app_uid: "uuid-1".to_string(),
        app_ver: "1.0".to_string(),
        region_id: None,
    };
    let client = Client::with_client(reqwest::Client::new(), &config);
    (server, client)
}

fn coverage(agency_id: &str) -> AgencyWithCoverage {
    AgencyWithCoverage {
        agency_id: agency_id.to_owned(),
        ..Default::default()
    }
}

fn translated(text: &str) -> Option<feed::TranslatedString> {
    Some(feed::TranslatedString {
        translation: vec![feed::Translation {
            text: text.to_owned(),
            language: Some("en".to_owned()),
        }],
    })
}

fn selector(agency: Option<&str>, route: Option<&str>) -> feed::EntitySelector {
    feed::EntitySelector {
        agency_id: agency.map(str::to_owned),
        route_id: route.map(str::to_owned),
        route_type: None,
        trip: None,
        stop_id: None,
    }
}

/// A feed with one agency-wide alert and one route-scoped alert.
fn fixture_feed(agency_id: &str) -> Vec<u8> {
    let message = feed::FeedMessage {
        header: Some(feed::FeedHeader {
            gtfs_realtime_version: "2.0".to_owned(),
            timestamp: Some(1_700_000_000),
        }),
        entity: vec![
            feed::FeedEntity {
                id: "alert-snow".to_owned(),
                is_deleted: None,
                alert: Some(feed::Alert {
                    active_period: vec![feed::TimeRange {
                        start: Some(1_700_000_000),
                        end: None,
                    }],
                    informed_entity: vec![selector(Some(agency_id), None)],
                    cause: Some(feed::Cause::Weather as i32),
                    effect: Some(feed::Effect::Detour as i32),
                    url: None,
                    header_text: translated("Snow reroutes in effect"),
                    description_text: translated("All routes are on snow routing."),
                }),
            },
            feed::FeedEntity {
                id: "alert-route-44".to_owned(),
                is_deleted: None,
                alert: Some(feed::Alert {
                    informed_entity: vec![selector(Some(agency_id), Some("1_44"))],
                    header_text: translated("Route 44 delayed"),
                    ..Default::default()
                }),
            },
        ],
    };
    message.encode_to_vec()
}

fn pb_response(bytes: Vec<u8>) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "application/octet-stream")
        .set_body_bytes(bytes)
}

// ── Tests ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_alerts_for_agency_keeps_agency_wide_only() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/gtfs_realtime/alerts-for-agency/1.pb"))
        .respond_with(pb_response(fixture_feed("1")))
        .mount(&server)
        .await;

    let alerts = client.alerts_for_agency("1").await.unwrap();

    assert_eq!(alerts.len(), 1);
    let alert = &alerts[0];
    assert_eq!(alert.id, "alert-snow");
    assert_eq!(alert.agency_id, "1");
    assert_eq!(alert.title.as_deref(), Some("Snow reroutes in effect"));
    assert_eq!(alert.cause, feed::Cause::Weather);
    assert_eq!(alert.effect, feed::Effect::Detour);
    assert_eq!(alert.active_windows[0].start, Some(1_700_000_000));
}

#[tokio::test]
async fn test_fan_out_isolates_a_failing_agency() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/gtfs_realtime/alerts-for-agency/1.pb"))
        .respond_with(pb_response(fixture_feed("1")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/gtfs_realtime/alerts-for-agency/40.pb"))
        .respond_with(pb_response(fixture_feed("40")))
        .mount(&server)
        .await;
    // Agency 3's feed is down.
    Mock::given(method("GET"))
        .and(path("/api/gtfs_realtime/alerts-for-agency/3.pb"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let agencies = [coverage("1"), coverage("3"), coverage("40")];
    let alerts = client.alerts(&agencies).await;

    let mut agency_ids: Vec<&str> = alerts.iter().map(|a| a.agency_id.as_str()).collect();
    agency_ids.sort_unstable();
    assert_eq!(agency_ids, ["1", "40"]);
}

#[tokio::test]
async fn test_regional_alerts_pipeline() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/where/agencies-with-coverage.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200, "version": 2,
            "data": {
                "list": [
                    { "agencyId": "1", "lat": 47.6, "lon": -122.3, "latSpan": 0.6, "lonSpan": 0.7 }
                ],
                "references": { "agencies": [{ "id": "1", "name": "Metro Transit" }] }
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/gtfs_realtime/alerts-for-agency/1.pb"))
        .respond_with(pb_response(fixture_feed("1")))
        .mount(&server)
        .await;

    let alerts = client.regional_alerts().await.unwrap();

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].agency_id, "1");
}

#[tokio::test]
async fn test_garbage_feed_is_a_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(pb_response(b"this is not a protobuf".to_vec()))
        .mount(&server)
        .await;

    let result = client.alerts_for_agency("1").await;
    assert!(
        matches!(result, Err(oba_api::Error::FeedDecode(_))),
        "got: {result:?}"
    );
}
