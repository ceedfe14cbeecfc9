use crate::app::forecast::{DailyForecast, PrecipType};

/// Sentences the describer can pick instead of the provider summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    Umbrella,
    Snow,
    Nasty,
    Scorcher,
    BitterWind,
    BitterCold,
    Humid,
    Cloudy,
    SunnyAndBreezy,
    Sunny,
    Gusty,
}

impl Condition {
    pub fn sentence(self) -> &'static str {
        match self {
            Condition::Umbrella => "Don't forget your umbrella.",
            Condition::Snow => "Brace yourself for the snow.",
            Condition::Nasty => "It's going to be nasty.",
            Condition::Scorcher => "Prepare for a scorcher.",
            Condition::BitterWind => "Prepare for bitter cold wind in your face.",
            Condition::BitterCold => "Bitterly cold temperatures are in store.",
            Condition::Humid => "The humidity is going to be brutal.",
            Condition::Cloudy => "It will be very cloudy.",
            Condition::SunnyAndBreezy => "Lots of sun and breezy conditions are in store.",
            Condition::Sunny => "There will be lots of sunshine.",
            Condition::Gusty => "It's going to be gusty.",
        }
    }
}

/// Rules are checked top to bottom and the first hit wins; their ranges overlap.
pub fn classify(day: &DailyForecast) -> Option<Condition> {
    if day.precip_probability > 0.7 && day.precip_intensity_max > 0.05 {
        return Some(match day.precip_type {
            PrecipType::Rain => Condition::Umbrella,
            _ => Condition::Snow,
        });
    }

    if day.temperature_max > 93.0 || day.apparent_temperature_max > 98.0 {
        return Some(if day.dew_point > 72.0 || day.humidity > 0.75 {
            Condition::Nasty
        } else {
            Condition::Scorcher
        });
    }

    if day.temperature_max < 35.0 {
        return Some(if day.wind_speed > 15.0 {
            Condition::BitterWind
        } else {
            Condition::BitterCold
        });
    }

    if day.dew_point > 72.0 && day.humidity > 0.75 {
        return Some(Condition::Humid);
    }

    if day.cloud_cover > 0.85 {
        return Some(Condition::Cloudy);
    }

    if day.cloud_cover < 0.1 {
        return Some(if day.wind_speed > 15.0 {
            Condition::SunnyAndBreezy
        } else {
            Condition::Sunny
        });
    }

    if day.wind_speed > 20.0 {
        return Some(Condition::Gusty);
    }

    None
}

pub fn describe(day: &DailyForecast) -> String {
    match classify(day) {
        Some(condition) => condition.sentence().to_owned(),
        None => day.summary.clone(),
    }
}
