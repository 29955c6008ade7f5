//! Integration tests for infrastructure adapters using wiremock
//!
//! Tests cover:
//! - Geocoding and weather adapters against mock providers
//! - Error classification at the port boundary
//! - The full weather lookup with SQLite history

#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{
    ApplicationError, LookupStage, UpstreamErrorKind,
    ports::{GeocodingPort, WeatherPort},
    services::WeatherService,
};
use domain::{GeoLocation, Language, PlaceQuery, Units};
use infrastructure::{
    DatabaseConfig, GeocodingAdapter, SqliteWeatherHistoryStore, WeatherAdapter, create_pool,
};
use integration_geocoding::NominatimConfig;
use integration_weather::WeatherConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LONDON_SEARCH: &str =
    r#"[{"lat":"51.5074","lon":"-0.1278","display_name":"London, Greater London, England"}]"#;

fn london_weather() -> serde_json::Value {
    serde_json::json!({
        "weather": [{ "description": "overcast clouds" }],
        "main": { "temp": 11.3, "feels_like": 10.1, "humidity": 81 },
        "wind": { "speed": 5.7 },
        "sys": { "country": "GB" },
        "name": "London"
    })
}

fn geocoding_adapter(server: &MockServer) -> GeocodingAdapter {
    GeocodingAdapter::new(&NominatimConfig::for_testing(server.uri())).expect("adapter")
}

fn weather_adapter(server: &MockServer) -> WeatherAdapter {
    WeatherAdapter::new(&WeatherConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        timeout_secs: 5,
    })
    .expect("adapter")
}

// ============================================================================
// Geocoding adapter
// ============================================================================

mod geocoding_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn resolves_place() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "London"))
            .respond_with(ResponseTemplate::new(200).set_body_string(LONDON_SEARCH))
            .mount(&server)
            .await;

        let place = geocoding_adapter(&server)
            .resolve(&PlaceQuery::new("London").expect("valid"))
            .await
            .expect("ok")
            .expect("found");
        assert_eq!(place.display_name(), "London, Greater London, England");
    }

    #[tokio::test]
    async fn server_error_is_transport() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = geocoding_adapter(&server)
            .resolve(&PlaceQuery::new("London").expect("valid"))
            .await
            .expect_err("should fail");
        assert_eq!(err.kind, UpstreamErrorKind::Transport);
    }

    #[tokio::test]
    async fn garbage_body_is_format() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\":\"a list\"}"))
            .mount(&server)
            .await;

        let err = geocoding_adapter(&server)
            .resolve(&PlaceQuery::new("London").expect("valid"))
            .await
            .expect_err("should fail");
        assert_eq!(err.kind, UpstreamErrorKind::Format);
    }
}

// ============================================================================
// Weather adapter
// ============================================================================

mod weather_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn fetches_report() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("appid", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(london_weather()))
            .mount(&server)
            .await;

        let report = weather_adapter(&server)
            .fetch(
                &GeoLocation::new(51.5074, -0.1278).expect("valid"),
                Units::Metric,
                &Language::default(),
            )
            .await
            .expect("ok")
            .expect("report");
        assert_eq!(report.temperature, "11.3°C");
        assert_eq!(report.humidity, "81%");
        assert_eq!(report.wind_speed, "5.7 m/s");
    }

    #[tokio::test]
    async fn missing_field_is_format() {
        let server = MockServer::start().await;
        let mut body = london_weather();
        body.as_object_mut().expect("object").remove("wind");
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let err = weather_adapter(&server)
            .fetch(
                &GeoLocation::new(51.5074, -0.1278).expect("valid"),
                Units::Metric,
                &Language::default(),
            )
            .await
            .expect_err("should fail");
        assert_eq!(err.kind, UpstreamErrorKind::Format);
    }
}

// ============================================================================
// Full lookup
// ============================================================================

mod lookup_tests {
    use super::*;

    async fn service_with_history(
        geo: &MockServer,
        weather: &MockServer,
    ) -> (WeatherService, Arc<SqliteWeatherHistoryStore>) {
        let pool = create_pool(&DatabaseConfig::in_memory())
        .expect("pool");
        let history = Arc::new(SqliteWeatherHistoryStore::new(Arc::new(pool)));

        let service = WeatherService::new(
            Arc::new(geocoding_adapter(geo)),
            Arc::new(weather_adapter(weather)),
        )
        .with_history(history.clone());
        (service, history)
    }

    #[tokio::test]
    async fn lookup_records_history() {
        let geo = MockServer::start().await;
        let weather = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(LONDON_SEARCH))
            .mount(&geo)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(london_weather()))
            .mount(&weather)
            .await;

        let (service, _history) = service_with_history(&geo, &weather).await;
        let report = service
            .lookup("London", Some("metric"), None)
            .await
            .expect("lookup");
        assert_eq!(report.city_name, "London");
        assert_eq!(report.country, "GB");

        let record = service.latest_record("london").await.expect("recorded");
        assert_eq!(record.temperature(), "11.3°C");
        assert_eq!(record.condition(), "overcast clouds");
    }

    #[tokio::test]
    async fn unknown_city_skips_weather_call() {
        let geo = MockServer::start().await;
        let weather = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&geo)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(london_weather()))
            .expect(0)
            .mount(&weather)
            .await;

        let (service, _history) = service_with_history(&geo, &weather).await;
        let err = service
            .lookup("Nowhereville1234", None, None)
            .await
            .expect_err("not found");
        assert!(
            matches!(err, ApplicationError::NotFound(ref m) if m == "Could not find coordinates for Nowhereville1234")
        );
        assert!(service.latest_record("Nowhereville1234").await.is_err());
    }

    #[tokio::test]
    async fn weather_outage_is_tagged_with_stage() {
        let geo = MockServer::start().await;
        let weather = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(LONDON_SEARCH))
            .mount(&geo)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&weather)
            .await;

        let (service, _history) = service_with_history(&geo, &weather).await;
        let err = service
            .lookup("London", None, None)
            .await
            .expect_err("upstream");
        assert!(matches!(
            err,
            ApplicationError::Upstream {
                stage: LookupStage::Weather,
                ..
            }
        ));
        assert_eq!(err.upstream_kind(), Some(UpstreamErrorKind::Transport));
    }
}
