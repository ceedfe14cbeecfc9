use std::sync::Arc;
use crate::app::LookupError;
use crate::app::forecast::ForecastResponse;

pub mod darksky;
pub mod utils;

#[derive(Debug, Fail)]
pub enum ProviderError {
    #[fail(display = "Invalid provider url {}: {}", url, reason)]
    InvalidUrl {
        url: String,
        reason: String,
    },
}

pub type ProviderFuture = dyn futures::Future<Item=ForecastResponse, Error=LookupError>;

/// Source of daily forecast records for the configured location.
pub trait ForecastProvider {
    fn fetch_daily(&self) -> Box<ProviderFuture>;
}

pub type SharedProvider = Arc<dyn ForecastProvider + Send + Sync>;
