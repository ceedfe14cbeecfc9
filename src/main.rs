extern crate actix;
extern crate actix_web;
extern crate env_logger;
extern crate failure;
#[macro_use] extern crate log;

use actix_web::{server, middleware};
use forecast_skill::app::provider::darksky::DarkSkyProvider;
use forecast_skill::app::provider::SharedProvider;
use forecast_skill::settings::Settings;
use forecast_skill::web::{create_app, AppState};
use std::env;
use std::sync::Arc;

fn main() -> Result<(), failure::Error> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "forecast_skill=info,actix_web=info");
    }

    env_logger::init();

    let settings = Arc::new(Settings::load()?);
    let darksky = DarkSkyProvider::from_settings(&settings)?;
    info!("Forecasts from {}", darksky.redacted_url());
    let provider: SharedProvider = Arc::new(darksky);

    let addr = format!("0.0.0.0:{}", settings.port);
    let debug = settings.debug;

    let sys = actix::System::new("forecast-skill");

    server::new(move ||
        create_app(AppState { settings: settings.clone(), provider: provider.clone() })
            .middleware(middleware::Logger::default())
    )
        .bind(&addr)?
        .start();

    info!("Listening on {} (debug routes {})", addr, if debug { "on" } else { "off" });
    sys.run();

    Ok(())
}
