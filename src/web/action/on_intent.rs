use actix_web::HttpRequest;
use actix_web::FutureResponse;
use actix_web::HttpResponse;
use actix_web::HttpMessage;
use actix_web::Error;
use futures::Future;
use futures::future::ok as fut_ok;

use crate::app::ForecastLookup;
use crate::app::conditions::describe;
use crate::web::AppState;
use crate::web::alexa::{AlexaRequest, AlexaResponse, Intent, RequestBody, SpokenReply};
use crate::web::action::*;

pub type DispatchResponse = dyn Future<Item=Option<SpokenReply>, Error=Error>;

pub fn handle(req: &HttpRequest<AppState>) -> FutureResponse<HttpResponse> {
    let lookup = ForecastLookup::new(req.state().provider.clone());

    Box::new(
        req.json::<AlexaRequest>()
            .from_err()
            .and_then(move |envelope| dispatch(&lookup, envelope))
            .map(|reply| HttpResponse::Ok().json(AlexaResponse::new(reply)))
    )
}

/// Turns one platform request into the reply to speak, if any.
/// Lookup failures are spoken, never returned as errors.
pub fn dispatch(lookup: &ForecastLookup, envelope: AlexaRequest) -> Box<DispatchResponse> {
    match envelope.request {
        RequestBody::LaunchRequest {} => {
            info!("App launched");
            reply(SpokenReply::ssml(LAUNCH_PROMPT))
        }
        RequestBody::IntentRequest { intent } => on_intent(lookup, intent),
        RequestBody::SessionEndedRequest { reason } => {
            match reason.as_ref().map(String::as_str) {
                Some("ERROR") => error!("Alexa ended the session due to an error"),
                other => info!("Session ended, reason: {}", other.unwrap_or("unknown")),
            }
            Box::new(fut_ok(None))
        }
        RequestBody::Unsupported => {
            warn!("Unsupported request type");
            reply(SpokenReply::text(UNKNOWN_INTENT_REPLY))
        }
    }
}

fn on_intent(lookup: &ForecastLookup, intent: Intent) -> Box<DispatchResponse> {
    match intent.name.as_str() {
        WEATHER_INTENT => on_weather(lookup, &intent),
        CANCEL_INTENT => {
            info!("Sent cancel response");
            reply(SpokenReply::text(CANCEL_REPLY))
        }
        STOP_INTENT => {
            info!("Sent stop response");
            reply(SpokenReply::text(STOP_REPLY))
        }
        other => {
            warn!("Unknown intent {}", other);
            reply(SpokenReply::text(UNKNOWN_INTENT_REPLY))
        }
    }
}

fn on_weather(lookup: &ForecastLookup, intent: &Intent) -> Box<DispatchResponse> {
    let when = match intent.slot_value(WHEN_SLOT) {
        Some(when) => when.to_owned(),
        None => {
            info!("Responding to weather request with no day/date");
            return reply(SpokenReply::ssml(NO_DAY_PROMPT));
        }
    };

    Box::new(
        lookup
            .lookup(&when)
            .then(move |result| {
                let text = match result {
                    Ok(forecast) => {
                        let text = describe(&forecast);
                        info!("Responding to weather request for {} with: {}", when, text);
                        text
                    }
                    Err(e) => {
                        warn!("Weather request for {} failed: {:?}", when, e);
                        e.to_string()
                    }
                };

                Ok::<_, Error>(Some(SpokenReply::text(&text)))
            })
    )
}

fn reply(spoken: SpokenReply) -> Box<DispatchResponse> {
    Box::new(fut_ok(Some(spoken)))
}
