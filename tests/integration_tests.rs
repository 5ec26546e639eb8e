//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: typed request → reqwest transport → status
//! classification → decoded model

use chrono::NaiveDate;
use serde_json::json;
use solaredge_api::auth::PortalSession;
use solaredge_api::metrics::EnergyBreakdown;
use solaredge_api::models::{MeterType, TimeRange};
use solaredge_api::request::{DetailRequest, SiteImageRequest, TimeWindow};
use solaredge_api::status::StatusKind;
use solaredge_api::{ApiKey, ClientConfig, Error, MonitoringClient, PortalClient};
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .base_url(server.uri())
        .timeout_secs(5)
        .build()
}

fn monitoring(server: &MockServer) -> MonitoringClient {
    MonitoringClient::new(ApiKey::new("test-key"), &config(server)).unwrap()
}

fn window() -> TimeWindow {
    let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    TimeWindow::new(
        day.and_hms_opt(0, 0, 0).unwrap(),
        day.and_hms_opt(23, 59, 59).unwrap(),
    )
}

// ============================================================================
// Monitoring API
// ============================================================================

#[tokio::test]
async fn test_overview_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/site/42/overview"))
        .and(query_param("api_key", "test-key"))
        .and(header("User-Agent", "SolarEdge Monitoring API for Rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "overview": {
                "lastUpdateTime": "2024-05-01 12:30:00",
                "lifeTimeData": { "energy": 1.2e7, "revenue": 3100.5 },
                "lastYearData": { "energy": 4.5e6 },
                "lastMonthData": { "energy": 3.2e5 },
                "lastDayData": { "energy": 12000.0 },
                "currentPower": { "power": 1800.0 },
                "measuredBy": "INVERTER"
            }
        })))
        .mount(&mock_server)
        .await;

    let overview = monitoring(&mock_server).overview(42).await.unwrap();

    assert_eq!(overview.measured_by, "INVERTER");
    assert_eq!(overview.life_time_data.revenue, Some(3100.5));
    assert_eq!(overview.last_year_data.revenue, None);
    assert_eq!(overview.current_power["power"], 1800.0);
}

#[tokio::test]
async fn test_energy_details_with_meters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/site/42/energyDetails"))
        .and(query_param("timeUnit", "HOUR"))
        .and(query_param("meters", "Consumption,Production,FeedIn"))
        .and(query_param("startTime", "2024-05-01 00:00:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "energyDetails": {
                "timeUnit": "HOUR",
                "unit": "Wh",
                "meters": [
                    { "type": "Production", "values": [
                        { "date": "2024-05-01 10:00:00", "value": 300.0 },
                        { "date": "2024-05-01 11:00:00", "value": 500.0 }
                    ]},
                    { "type": "Consumption", "values": [
                        { "date": "2024-05-01 10:00:00", "value": 400.0 },
                        { "date": "2024-05-01 11:00:00" }
                    ]},
                    { "type": "FeedIn", "values": [
                        { "date": "2024-05-01 11:00:00", "value": 200.0 }
                    ]}
                ]
            }
        })))
        .mount(&mock_server)
        .await;

    let request = DetailRequest::new(window())
        .with_time_unit(solaredge_api::models::TimeUnit::Hour)
        .with_meters([MeterType::Production, MeterType::Consumption, MeterType::FeedIn]);
    let detail = monitoring(&mock_server)
        .energy_details(42, &request)
        .await
        .unwrap();

    assert_eq!(detail.production_total_value(), Some(800.0));
    assert_eq!(detail.consumption_total_value(), Some(400.0));
    assert_eq!(detail.feed_in_percentage(), Some(25));
    assert_eq!(detail.purchased_total_value(), None);
}

#[tokio::test]
async fn test_forbidden_with_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/site/42/currentPowerFlow"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({ "String": "Invalid token", "Message": "Invalid token" })),
        )
        .mount(&mock_server)
        .await;

    let err = monitoring(&mock_server)
        .current_power_flow(42)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid token");
}

#[tokio::test]
async fn test_unexpected_status_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/site/42/overview"))
        .respond_with(ResponseTemplate::new(503).set_body_bytes(vec![0xc3, 0x28]))
        .mount(&mock_server)
        .await;

    let err = monitoring(&mock_server).overview(42).await.unwrap_err();
    assert_eq!(
        err.status_kind(),
        Some(StatusKind::UnexpectedResponse { status: 503 })
    );
}

#[tokio::test]
async fn test_site_image_download_and_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/site/42/siteImage/image.jpg"))
        .and(query_param("maxWidth", "640"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xd8, 0xff, 0xe0]))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/site/43/siteImage/image.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = monitoring(&mock_server);
    let request = SiteImageRequest {
        max_width: Some(640),
        ..SiteImageRequest::default()
    };

    let image = client.site_image(42, &request).await.unwrap();
    assert_eq!(image.unwrap().len(), 4);

    let missing = client
        .site_image(43, &SiteImageRequest::default())
        .await
        .unwrap();
    assert!(missing.is_none());
}

// ============================================================================
// Portal API
// ============================================================================

#[tokio::test]
async fn test_portal_login_then_power_flow() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/solaredge-apigw/api/login"))
        .and(body_string("j_username=user&j_password=secret"))
        .respond_with(
            ResponseTemplate::new(200)
                .append_header("Set-Cookie", "SPRING_SECURITY_REMEMBER_ME_COOKIE=abc; Path=/")
                .append_header("Set-Cookie", "CSRF-TOKEN=xyz; Path=/")
                .set_body_string("<user/>"),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/m/so/dashboard/site/42/powerflow/latest"))
        .and(header("x-csrf-token", "xyz"))
        .and(header("client-version", "3.12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "updateRefreshRate": 3,
            "unit": "kW",
            "loadType": "Residential",
            "connections": [{ "from": "Grid", "to": "Load" }],
            "grid": { "status": "Active", "currentPower": 1.2 },
            "load": { "status": "Active", "currentPower": 1.5 },
            "pv": { "status": "Idle", "currentPower": 0.3 }
        })))
        .mount(&mock_server)
        .await;

    let client = PortalClient::new(&config(&mock_server)).unwrap();
    let login = client.login("user", "secret").await.unwrap();
    assert_eq!(login.cookie_value("CSRF-TOKEN"), Some("xyz"));

    let session = PortalSession::from_login(&login);
    let flow = client.latest_power_flow(42, &session).await.unwrap();
    assert!(flow.is_power_imported());
    assert_eq!(flow.current_imported_power(), Some(1.2));
}

#[tokio::test]
async fn test_portal_login_without_cookie() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/solaredge-apigw/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<user/>"))
        .mount(&mock_server)
        .await;

    let client = PortalClient::new(&config(&mock_server)).unwrap();
    let err = client.login("user", "secret").await.unwrap_err();
    assert!(matches!(err, Error::Auth { .. }));
}

#[tokio::test]
async fn test_portal_layout_energy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/solaredge-apigw/api/sites/42/layout/energy.json"))
        .and(query_param("timeUnit", "WEEK"))
        .and(body_json(json!({ "reporterIds": [1] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "7001": { "energy": 11.5, "units": "kWh", "color": "#1a9850" }
        })))
        .mount(&mock_server)
        .await;

    let client = PortalClient::new(&config(&mock_server)).unwrap();
    let session = PortalSession::new("A=1", "tok");
    let energy = client
        .layout_energy(42, Some(TimeRange::Week), &session)
        .await
        .unwrap();

    assert_eq!(energy.len(), 1);
    assert_eq!(energy["7001"].units, "kWh");
}
