use futures::Future;
use futures::future::err as fut_err;
use actix_web::client;
use actix_web::client::ClientRequest;
use actix_web::Error;
use chrono::DateTime;
use chrono::Utc;
use std::f64::NAN;
use url::Url;

use crate::app::LookupError;
use crate::app::forecast::{DailyForecast, ForecastResponse, PrecipType};
use crate::app::provider::{ForecastProvider, ProviderError, ProviderFuture};
use crate::settings::Settings;

use super::utils;

mod test;

#[derive(Debug, Deserialize)]
struct DarkSkyResponse {
    daily: Option<DarkSkyDaily>,
}

#[derive(Debug, Deserialize)]
struct DarkSkyDaily {
    #[serde(default)]
    data: Vec<DarkSkyDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DarkSkyDay {
    time: i64,
    summary: Option<String>,
    precip_probability: Option<f64>,
    precip_intensity_max: Option<f64>,
    precip_type: Option<String>,
    temperature_max: Option<f64>,
    apparent_temperature_max: Option<f64>,
    dew_point: Option<f64>,
    humidity: Option<f64>,
    cloud_cover: Option<f64>,
    wind_speed: Option<f64>,
}

impl DarkSkyDay {
    fn into_daily_forecast(self) -> Option<DailyForecast> {
        let date = DateTime::<Utc>::from_timestamp(self.time, 0)?.date_naive();

        Some(DailyForecast {
            date,
            precip_probability: self.precip_probability.unwrap_or(NAN),
            precip_intensity_max: self.precip_intensity_max.unwrap_or(NAN),
            precip_type: PrecipType::from_provider(self.precip_type.as_ref().map(String::as_str)),
            temperature_max: self.temperature_max.unwrap_or(NAN),
            apparent_temperature_max: self.apparent_temperature_max.unwrap_or(NAN),
            dew_point: self.dew_point.unwrap_or(NAN),
            humidity: self.humidity.unwrap_or(NAN),
            cloud_cover: self.cloud_cover.unwrap_or(NAN),
            wind_speed: self.wind_speed.unwrap_or(NAN),
            summary: self.summary.unwrap_or_default(),
        })
    }
}

impl DarkSkyResponse {
    fn into_forecast_response(self) -> ForecastResponse {
        ForecastResponse::new(
            self.daily
                .map(|daily| daily.data)
                .unwrap_or_default()
                .into_iter()
                .filter_map(DarkSkyDay::into_daily_forecast)
                .collect()
        )
    }
}

/// Dark Sky (forecast.io) daily forecast for one fixed location.
pub struct DarkSkyProvider {
    url: Url,
}

impl DarkSkyProvider {
    const NAME: &'static str = "DarkSky";

    pub fn new(base_url: &str, api_key: &str, latitude: f64, longitude: f64) -> Result<Self, ProviderError> {
        let invalid = |reason: String| ProviderError::InvalidUrl { url: base_url.to_owned(), reason };

        let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid(String::from("url cannot be a base")))?
            .pop_if_empty()
            .push(api_key)
            .push(&format!("{},{}", latitude, longitude));

        Ok(DarkSkyProvider { url })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ProviderError> {
        Self::new(&settings.base_url, &settings.weather_api_key, settings.latitude, settings.longitude)
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// The request url with the api key segment masked, safe for logs.
    pub fn redacted_url(&self) -> String {
        let mut redacted = self.url.clone();
        let segments: Vec<String> = self.url
            .path_segments()
            .map(|segments| segments.map(String::from).collect())
            .unwrap_or_default();

        if segments.len() >= 2 {
            if let Ok(mut path) = redacted.path_segments_mut() {
                path.clear();
                path.extend(segments[..segments.len() - 2].iter());
                path.push("***");
                path.push(&segments[segments.len() - 1]);
            }
        }

        redacted.into_string()
    }

    fn build_request(&self) -> Result<ClientRequest, Error> {
        client::get(self.url.as_str()).finish()
    }
}

impl ForecastProvider for DarkSkyProvider {
    fn fetch_daily(&self) -> Box<ProviderFuture> {
        let request = match self.build_request() {
            Ok(req) => req,
            Err(e) => return Box::new(fut_err(LookupError::TransportError {
                reason: e.to_string(),
            })),
        };

        debug!("Requesting forecast from {}", self.redacted_url());

        Box::new(
            utils::fetch_json_request::<DarkSkyResponse>(request)
                .map(|res| {
                    let forecast = res.into_forecast_response();
                    info!("Forecast from {} with {} days", Self::NAME, forecast.days().len());
                    forecast
                })
                .map_err(|e| {
                    error!("Forecast from {} failed: {}", Self::NAME, e);
                    LookupError::TransportError { reason: e.to_string() }
                })
        )
    }
}
