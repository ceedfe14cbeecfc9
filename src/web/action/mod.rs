pub mod on_intent;
pub mod on_schema;

pub const WEATHER_INTENT: &str = "Weather";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const WHEN_SLOT: &str = "WHEN";

pub const LAUNCH_PROMPT: &str = r#"I can tell you the weather<break time="1s"/> but you must give me a day!"#;
pub const NO_DAY_PROMPT: &str = r#"I can tell you the weather<break time="1s"/> but you must give me a day"#;
pub const CANCEL_REPLY: &str = "Ok, sure thing";
pub const STOP_REPLY: &str = "Alright, I'll stop";
pub const UNKNOWN_INTENT_REPLY: &str = "Sorry, I didn't understand that request.";
