use self::provider::SharedProvider;
use futures::Future;
use futures::future::err as fut_err;
use chrono::{DateTime, NaiveDate, Utc};
use crate::app::forecast::DailyForecast;

pub mod provider;
pub mod forecast;
pub mod conditions;

/// Failures of a single lookup. `Display` is what gets spoken back to the user.
#[derive(Debug, Fail)]
pub enum LookupError {
    #[fail(display = "Invalid date for weather!")]
    InvalidDate {
        value: String,
    },

    #[fail(display = "Unable to get weather data!")]
    TransportError {
        reason: String,
    },

    #[fail(display = "I have no data for that day!")]
    NoDataForDate {
        date: NaiveDate,
    },
}

pub type LookupResponse = dyn Future<Item=DailyForecast, Error=LookupError>;

/// Parses a spoken date slot into the UTC calendar day it names.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, `YYYY-MM` (first of the month)
/// and `YYYY` (first of January). Week and relative forms are rejected.
pub fn parse_target_date(value: &str) -> Result<NaiveDate, LookupError> {
    let value = value.trim();
    let invalid = || LookupError::InvalidDate { value: value.to_owned() };

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.with_timezone(&Utc).date_naive());
    }

    let is_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    let parts: Vec<&str> = value.split('-').collect();

    match parts.as_slice() {
        [year, month] if year.len() == 4 && month.len() == 2 && is_digits(*year) && is_digits(*month) => {
            NaiveDate::parse_from_str(&format!("{}-{}-01", year, month), "%Y-%m-%d").map_err(|_| invalid())
        }
        [year] if year.len() == 4 && is_digits(*year) => {
            NaiveDate::parse_from_str(&format!("{}-01-01", year), "%Y-%m-%d").map_err(|_| invalid())
        }
        _ => Err(invalid()),
    }
}

pub struct ForecastLookup {
    provider: SharedProvider,
}

impl ForecastLookup {
    pub fn new(provider: SharedProvider) -> Self {
        ForecastLookup { provider }
    }

    /// Fetches the provider's daily forecast and picks the record for `target_date`.
    /// An unparseable date fails before the provider is called.
    pub fn lookup(&self, target_date: &str) -> Box<LookupResponse> {
        let date = match parse_target_date(target_date) {
            Ok(date) => date,
            Err(e) => return Box::new(fut_err(e)),
        };

        Box::new(
            self.provider
                .fetch_daily()
                .and_then(move |response| {
                    debug!("Provider returned {} daily records", response.days().len());
                    response
                        .into_day(date)
                        .ok_or(LookupError::NoDataForDate { date })
                })
        )
    }
}
