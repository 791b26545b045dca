//! Fetcher and reporter behavior against a fake OpenWeather server.

use cityweather_core::{
    OpenWeatherSource, ReportError, ReportKind, Reporter, SourceConfig, WeatherSource,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

const NOT_FOUND_BODY: &str = r#"{"cod":"404","message":"city not found"}"#;

fn create_source(mock_server: &MockServer) -> OpenWeatherSource {
    let config = SourceConfig {
        api_key: "TEST_KEY".to_string(),
        base_url: mock_server.uri(),
        timeout_secs: 5,
        user_agent: "Mozilla/5.0".to_string(),
    };
    OpenWeatherSource::new(config).expect("Failed to create source")
}

fn oslo_forecast() -> serde_json::Value {
    serde_json::json!({
        "cod": "200",
        "cnt": 1,
        "list": [{
            "dt": 1_704_067_200,
            "main": { "temp": -3.2, "feels_like": -7.0, "humidity": 90 },
            "weather": [{ "id": 500, "main": "Rain", "description": "light rain" }],
            "dt_txt": "2024-01-01 00:00:00"
        }],
        "city": { "name": "Oslo", "country": "NO" }
    })
}

fn oslo_current() -> serde_json::Value {
    serde_json::json!({
        "name": "Oslo",
        "main": { "temp": 10.6, "feels_like": 9.1, "humidity": 70 },
        "weather": [{ "id": 804, "main": "Clouds", "description": "overcast clouds" }]
    })
}

async fn mount(mock_server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Fetcher
// ============================================================================

#[tokio::test]
async fn forecast_request_uses_metric_units_and_upper_case_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Oslo"))
        .and(query_param("units", "metric"))
        .and(query_param("APPID", "TEST_KEY"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"list\":[]}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = create_source(&mock_server)
        .fetch("Oslo", ReportKind::Forecast)
        .await
        .expect("forecast fetch succeeds");

    assert_eq!(body, "{\"list\":[]}");
}

#[tokio::test]
async fn current_request_uses_lower_case_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "New York"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(oslo_current()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = create_source(&mock_server)
        .fetch("New York", ReportKind::Current)
        .await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn status_404_is_not_found() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "/weather",
        ResponseTemplate::new(404).set_body_string(NOT_FOUND_BODY),
    )
    .await;

    let err = create_source(&mock_server)
        .fetch("Nowhereville", ReportKind::Current)
        .await
        .unwrap_err();

    assert_eq!(err, ReportError::NotFound);
}

#[tokio::test]
async fn other_error_statuses_are_unavailable() {
    for status in [401_u16, 429, 500, 503] {
        let mock_server = MockServer::start().await;
        mount(&mock_server, "/forecast", ResponseTemplate::new(status).set_body_string("nope")).await;

        let err = create_source(&mock_server)
            .fetch("Oslo", ReportKind::Forecast)
            .await
            .unwrap_err();

        match err {
            ReportError::Unavailable(msg) => {
                assert!(msg.contains(&status.to_string()), "{msg}");
                assert!(msg.contains("nope"), "{msg}");
            }
            other => panic!("status {status} gave {other:?}"),
        }
    }
}

#[tokio::test]
async fn connection_failure_is_unavailable() {
    let source = OpenWeatherSource::new(SourceConfig {
        api_key: "TEST_KEY".to_string(),
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
        user_agent: "Mozilla/5.0".to_string(),
    })
    .expect("client builds");

    let err = source.fetch("Oslo", ReportKind::Current).await.unwrap_err();

    assert!(matches!(err, ReportError::Unavailable(_)), "got {err:?}");
}

// ============================================================================
// Reporter end to end
// ============================================================================

#[tokio::test]
async fn oslo_report_end_to_end() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/forecast", ResponseTemplate::new(200).set_body_json(oslo_forecast())).await;
    mount(&mock_server, "/weather", ResponseTemplate::new(200).set_body_json(oslo_current())).await;

    let reporter = Reporter::new(create_source(&mock_server));

    assert_eq!(
        reporter.report("Oslo").await,
        "Oslo:\nCurrent weather: +11 Clouds\nJan-01 00:00   -3 Rain\n"
    );
}

#[tokio::test]
async fn not_found_on_forecast_only_reports_missing_city() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/forecast", ResponseTemplate::new(404).set_body_string(NOT_FOUND_BODY)).await;
    mount(&mock_server, "/weather", ResponseTemplate::new(200).set_body_json(oslo_current())).await;

    let reporter = Reporter::new(create_source(&mock_server));

    assert_eq!(
        reporter.report("Nowhereville").await,
        "Can't find \"Nowhereville\" city"
    );
}

#[tokio::test]
async fn not_found_beats_server_error() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/forecast", ResponseTemplate::new(500)).await;
    mount(&mock_server, "/weather", ResponseTemplate::new(404).set_body_string(NOT_FOUND_BODY)).await;

    let reporter = Reporter::new(create_source(&mock_server));

    assert_eq!(
        reporter.report("Nowhereville").await,
        "Can't find \"Nowhereville\" city"
    );
}

#[tokio::test]
async fn malformed_current_body_is_service_unavailable() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/forecast", ResponseTemplate::new(200).set_body_json(oslo_forecast())).await;
    mount(
        &mock_server,
        "/weather",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "weather": [{ "main": "Clouds" }]
        })),
    )
    .await;

    let reporter = Reporter::new(create_source(&mock_server));

    assert_eq!(
        reporter.report("Oslo").await,
        "The service is not available, please try later"
    );
}
