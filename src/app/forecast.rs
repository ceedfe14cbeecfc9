use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrecipType {
    Rain,
    Snow,
    Other,
}

impl PrecipType {
    pub fn from_provider(precip_type: Option<&str>) -> Self {
        match precip_type {
            Some("rain") => PrecipType::Rain,
            Some("snow") => PrecipType::Snow,
            _ => PrecipType::Other,
        }
    }
}

/// One calendar day of provider metrics. Temperatures are °F, ratios are 0-1.
/// Metrics the provider left out are NaN, so no threshold ever matches them.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub precip_probability: f64,
    pub precip_intensity_max: f64,
    pub precip_type: PrecipType,
    pub temperature_max: f64,
    pub apparent_temperature_max: f64,
    pub dew_point: f64,
    pub humidity: f64,
    pub cloud_cover: f64,
    pub wind_speed: f64,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastResponse {
    days: Vec<DailyForecast>,
}

impl ForecastResponse {
    pub fn new(days: Vec<DailyForecast>) -> Self {
        ForecastResponse { days }
    }

    pub fn days(&self) -> &[DailyForecast] {
        &self.days
    }

    /// First record for `date`; later duplicates are ignored.
    pub fn into_day(self, date: NaiveDate) -> Option<DailyForecast> {
        self.days.into_iter().find(|day| day.date == date)
    }
}
