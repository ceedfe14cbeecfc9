use actix_web::HttpRequest;
use actix_web::HttpResponse;

use crate::web::AppState;
use crate::web::action::*;

#[derive(Debug, Serialize, Deserialize)]
pub struct InteractionModel {
    pub intents: Vec<IntentSchema>,
    pub utterances: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IntentSchema {
    pub intent: String,
    pub slots: Vec<SlotSchema>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlotSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

const WEATHER_UTTERANCES: &[&str] = &[
    "what's the weather for {WHEN}",
    "what I should expect on {WHEN}",
    "tell me the weather",
    "{WHEN}",
];

/// Intents, slot types and sample utterances to paste into the skill console.
pub fn interaction_model() -> InteractionModel {
    let intent = |name: &str, slots: Vec<SlotSchema>| IntentSchema { intent: name.to_owned(), slots };

    InteractionModel {
        intents: vec![
            intent(WEATHER_INTENT, vec![SlotSchema { name: WHEN_SLOT.to_owned(), kind: String::from("AMAZON.DATE") }]),
            intent(CANCEL_INTENT, vec![]),
            intent(STOP_INTENT, vec![]),
        ],
        utterances: WEATHER_UTTERANCES
            .iter()
            .map(|utterance| format!("{} {}", WEATHER_INTENT, utterance))
            .collect(),
    }
}

pub fn handle(req: &HttpRequest<AppState>) -> HttpResponse {
    if !req.state().settings.debug {
        return HttpResponse::NotFound().finish();
    }

    HttpResponse::Ok().json(interaction_model())
}
