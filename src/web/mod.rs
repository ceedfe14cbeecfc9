use std::sync::Arc;
use actix_web::App;
use actix_web::http::Method;
use crate::app::provider::SharedProvider;
use crate::settings::Settings;

pub mod action;
pub mod alexa;

pub struct AppState {
    pub settings: Arc<Settings>,
    pub provider: SharedProvider,
}

/// Skill webhook on `POST /`, interaction model on `GET /` when debugging.
pub fn create_app(state: AppState) -> App<AppState> {
    App::with_state(state)
        .resource("/", |r| {
            r.method(Method::POST).a(action::on_intent::handle);
            r.method(Method::GET).f(action::on_schema::handle);
        })
}
