#![cfg(test)]

use super::*;
use actix_web::test::TestServer;
use actix::System;
use actix_web::{HttpRequest, HttpResponse};
use chrono::NaiveDate;

const FORECAST_PATH: &str = "/forecast/test-key/{location}";

// 2024-07-04 and 2024-07-05 at 04:00 UTC, i.e. local midnight in Washington DC.
const FIXTURE: &str = r#"{
    "latitude": 38.9,
    "longitude": -77,
    "daily": {
        "summary": "Rain on Friday.",
        "data": [
            {
                "time": 1720065600,
                "summary": "Humid and hot throughout the day.",
                "precipProbability": 0.1,
                "precipIntensityMax": 0.01,
                "temperatureMax": 100.0,
                "apparentTemperatureMax": 101.0,
                "dewPoint": 75.0,
                "humidity": 0.8,
                "cloudCover": 0.3,
                "windSpeed": 4.5
            },
            {
                "time": 1720152000,
                "summary": "Rain throughout the day.",
                "precipProbability": 0.95,
                "precipIntensityMax": 0.3,
                "precipType": "rain",
                "temperatureMax": 80.0,
                "apparentTemperatureMax": 82.0,
                "dewPoint": 65.0,
                "humidity": 0.7,
                "cloudCover": 0.9,
                "windSpeed": 7.0
            }
        ]
    }
}"#;

fn forecast_handler(req: &HttpRequest) -> HttpResponse {
    match req.match_info().get("location") {
        Some("38.9,-77") => HttpResponse::Ok().content_type("application/json").body(FIXTURE),
        _ => HttpResponse::NotFound().finish(),
    }
}

fn upstream_server(handler: fn(&HttpRequest) -> HttpResponse) -> TestServer {
    TestServer::new(move |app| {
        app.resource(FORECAST_PATH, move |r| r.f(handler));
    })
}

fn create_provider(srv: &TestServer) -> DarkSkyProvider {
    DarkSkyProvider::new(&srv.url("/forecast"), "test-key", 38.9, -77.0).unwrap()
}

#[test]
fn test_url_is_built_from_key_and_coordinates() {
    let provider = DarkSkyProvider::new("https://api.forecast.io/forecast", "abc", 38.9649734, -77.0207249).unwrap();

    assert_eq!(provider.url(), "https://api.forecast.io/forecast/abc/38.9649734,-77.0207249");
    assert_eq!(provider.redacted_url(), "https://api.forecast.io/forecast/***/38.9649734,-77.0207249");
}

#[test]
fn test_trailing_slash_in_base_url() {
    let provider = DarkSkyProvider::new("https://api.forecast.io/forecast/", "abc", 1.5, 2.0).unwrap();

    assert_eq!(provider.url(), "https://api.forecast.io/forecast/abc/1.5,2");
}

#[test]
fn test_invalid_base_url() {
    assert!(DarkSkyProvider::new("not a url", "abc", 1.0, 2.0).is_err());
}

#[test]
fn test_darksky_return_forecast() {
    let mut srv = upstream_server(forecast_handler);
    let provider = create_provider(&srv);

    let response = srv.execute(provider.fetch_daily()).unwrap();

    assert_eq!(response.days().len(), 2);

    let first = &response.days()[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 7, 4).unwrap());
    assert_eq!(first.temperature_max, 100.0);
    assert_eq!(first.precip_type, PrecipType::Other);
    assert_eq!(first.summary, "Humid and hot throughout the day.");

    let second = &response.days()[1];
    assert_eq!(second.date, NaiveDate::from_ymd_opt(2024, 7, 5).unwrap());
    assert_eq!(second.precip_type, PrecipType::Rain);
}

#[test]
fn test_darksky_error_status_is_transport_error() {
    let mut srv = upstream_server(|_| HttpResponse::InternalServerError().finish());
    let provider = create_provider(&srv);

    let result = srv.execute(provider.fetch_daily());

    match result {
        Err(LookupError::TransportError { reason }) => assert_eq!(reason, "Unexpected status 500"),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_darksky_non_json_body_is_transport_error() {
    let mut srv = upstream_server(|_| HttpResponse::Ok().body("<html>maintenance</html>"));
    let provider = create_provider(&srv);

    let result = srv.execute(provider.fetch_daily());

    match result {
        Err(LookupError::TransportError { reason }) => assert!(reason.starts_with("Invalid response"), "{}", reason),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_darksky_unknown_location_is_transport_error() {
    let mut srv = upstream_server(forecast_handler);
    let provider = DarkSkyProvider::new(&srv.url("/forecast"), "test-key", 1.0, 2.0).unwrap();

    let result = srv.execute(provider.fetch_daily());

    match result {
        Err(LookupError::TransportError { reason }) => assert_eq!(reason, "Unexpected status 404"),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_darksky_connection_refused_is_transport_error() {
    let mut sys = System::new("test");
    let provider = DarkSkyProvider::new("http://127.0.0.1:1/forecast", "test-key", 38.9, -77.0).unwrap();

    let result = sys.block_on(provider.fetch_daily());

    match result {
        Err(LookupError::TransportError { reason }) => assert!(reason.starts_with("Request failed"), "{}", reason),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_darksky_redirect_is_not_followed() {
    let mut srv = upstream_server(|_| HttpResponse::Found().header("location", "/elsewhere").finish());
    let provider = create_provider(&srv);

    let result = srv.execute(provider.fetch_daily());

    match result {
        Err(LookupError::TransportError { reason }) => assert!(reason.starts_with("Invalid response"), "{}", reason),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_darksky_missing_daily_is_empty() {
    let mut srv = upstream_server(|_| {
        HttpResponse::Ok().content_type("application/json").body(r#"{"currently": {}}"#)
    });
    let provider = create_provider(&srv);

    let response = srv.execute(provider.fetch_daily()).unwrap();

    assert!(response.days().is_empty());
}

#[test]
fn test_missing_metrics_become_nan() {
    let day: DarkSkyDay = serde_json::from_str(r#"{"time": 1720065600, "temperatureMax": 50.0}"#).unwrap();
    let forecast = day.into_daily_forecast().unwrap();

    assert_eq!(forecast.temperature_max, 50.0);
    assert!(forecast.humidity.is_nan());
    assert!(forecast.cloud_cover.is_nan());
    assert_eq!(forecast.summary, "");
}
