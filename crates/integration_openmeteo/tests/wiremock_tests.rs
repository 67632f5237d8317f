//! Integration tests for the Open-Meteo client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of the three endpoints and their failure modes.

use integration_openmeteo::{ForecastApi, OpenMeteoClient, OpenMeteoConfig, OpenMeteoError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample weather forecast response covering three hours
fn sample_weather_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 48.85,
        "longitude": 2.35,
        "generationtime_ms": 0.123,
        "utc_offset_seconds": 0,
        "timezone": "UTC",
        "timezone_abbreviation": "UTC",
        "elevation": 35.0,
        "hourly_units": {
            "time": "iso8601",
            "rain": "mm",
            "temperature_2m": "°C",
            "relative_humidity_2m": "%",
            "wind_speed_10m": "km/h"
        },
        "hourly": {
            "time": ["2024-01-15T12:00", "2024-01-15T13:00", "2024-01-15T14:00"],
            "rain": [0.0, 0.3, 0.1],
            "temperature_2m": [15.2, 14.8, 14.1],
            "relative_humidity_2m": [70, 72, 75],
            "wind_speed_10m": [8.1, 9.4, 10.2]
        }
    })
}

/// Sample air quality response
fn sample_air_quality_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 48.85,
        "longitude": 2.35,
        "hourly_units": { "time": "iso8601", "pm10": "μg/m³", "pm2_5": "μg/m³" },
        "hourly": {
            "time": ["2024-01-15T12:00", "2024-01-15T13:00"],
            "pm10": [12.0, null],
            "pm2_5": [8.0, 9.1]
        }
    })
}

/// Sample flood response
fn sample_flood_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 48.85,
        "longitude": 2.35,
        "daily_units": { "time": "iso8601", "river_discharge": "m³/s" },
        "daily": {
            "time": ["2024-01-15", "2024-01-16", "2024-01-17"],
            "river_discharge": [12.3, 12.1, null]
        }
    })
}

/// Create a test client with all three base URLs pointing at the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenMeteoClient {
    let config = OpenMeteoConfig {
        weather_base_url: mock_server.uri(),
        air_quality_base_url: mock_server.uri(),
        flood_base_url: mock_server.uri(),
        timeout_secs: 5,
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    OpenMeteoClient::new(config).expect("Failed to create client")
}

/// Setup a mock for the given endpoint path with the given response
async fn setup_mock(mock_server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_hourly_weather_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/forecast",
        ResponseTemplate::new(200).set_body_json(sample_weather_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.hourly_weather(48.85, 2.35).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let series = result.unwrap();
    assert_eq!(series.len(), 3);

    let first = &series.points()[0];
    assert!((first.metrics["temperature"] - 15.2).abs() < 0.01);
    assert!((first.metrics["humidity"] - 70.0).abs() < 0.01);
    assert!((first.metrics["rain"]).abs() < 0.01);
    assert!((first.metrics["wind_speed"] - 8.1).abs() < 0.01);
}

#[tokio::test]
async fn test_hourly_air_quality_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/air-quality",
        ResponseTemplate::new(200).set_body_json(sample_air_quality_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.hourly_air_quality(48.85, 2.35).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let series = result.unwrap();
    assert_eq!(series.len(), 2);
    assert!((series.points()[0].metrics["pm10"] - 12.0).abs() < 0.01);
    // Null pm10 cell at 13:00 leaves only pm2_5 on that row
    assert!(!series.points()[1].metrics.contains_key("pm10"));
    assert!((series.points()[1].metrics["pm2_5"] - 9.1).abs() < 0.01);
}

#[tokio::test]
async fn test_daily_river_discharge_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/flood",
        ResponseTemplate::new(200).set_body_json(sample_flood_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.daily_river_discharge(48.85, 2.35).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let series = result.unwrap();
    let jan_15 = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let jan_17 = chrono::NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
    assert_eq!(series.on(jan_15), Some(12.3));
    // The null day is absent, not zero
    assert_eq!(series.on(jan_17), None);
}

#[tokio::test]
async fn test_health_check_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/forecast",
        ResponseTemplate::new(200).set_body_json(sample_weather_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_healthy().await, "Expected health check to succeed");
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/forecast",
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.hourly_weather(48.85, 2.35).await;

    assert!(
        matches!(result, Err(OpenMeteoError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/air-quality",
        ResponseTemplate::new(429).set_body_string("Rate limit exceeded"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.hourly_air_quality(48.85, 2.35).await;

    assert!(
        matches!(result, Err(OpenMeteoError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/flood",
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.daily_river_discharge(48.85, 2.35).await;

    assert!(
        matches!(result, Err(OpenMeteoError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_missing_hourly_block_is_parse_error() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/forecast",
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({"latitude": 48.85, "longitude": 2.35})),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.hourly_weather(48.85, 2.35).await;

    assert!(
        matches!(result, Err(OpenMeteoError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_health_check_fails_on_server_error() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/forecast",
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(!client.is_healthy().await, "Expected health check to fail");
}

// ============================================================================
// Input validation scenarios
// ============================================================================

#[tokio::test]
async fn test_invalid_coordinates_rejected_without_request() {
    let mock_server = MockServer::start().await;

    // No mock mounted - validation must fail before any request goes out
    let client = create_test_client(&mock_server);

    let result = client.hourly_weather(91.0, 2.35).await;
    assert!(matches!(result, Err(OpenMeteoError::InvalidCoordinates)));

    let result = client.hourly_air_quality(48.85, 181.0).await;
    assert!(matches!(result, Err(OpenMeteoError::InvalidCoordinates)));

    let result = client.daily_river_discharge(-91.0, 2.35).await;
    assert!(matches!(result, Err(OpenMeteoError::InvalidCoordinates)));

    assert!(mock_server.received_requests().await.unwrap_or_default().is_empty());
}

// ============================================================================
// Query parameter verification
// ============================================================================

#[tokio::test]
async fn test_weather_request_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "48.85"))
        .and(query_param("longitude", "2.35"))
        .and(query_param(
            "hourly",
            "rain,temperature_2m,relative_humidity_2m,wind_speed_10m",
        ))
        .and(query_param("timezone", "UTC"))
        .and(query_param("forecast_days", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.hourly_weather(48.85, 2.35).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_flood_request_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flood"))
        .and(query_param("daily", "river_discharge"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_flood_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.daily_river_discharge(48.85, 2.35).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}
