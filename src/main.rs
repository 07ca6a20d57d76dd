// main.rs
mod api_routes;
mod config;
mod error;
mod image_requester;
mod openai_client;
mod page;
mod prompt_expander;
mod prompt_template;
#[cfg(test)]
mod test_support;
mod workflow;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};
use std::fs;
use std::io;

use config::AppConfig;
use workflow::Playground;

const LOG_CONFIG: &str = "log4rs.yaml";

fn init_logging() {
    if let Err(e) = log4rs::init_file(LOG_CONFIG, Default::default()) {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        warn!("Could not load {} ({}), logging to stderr", LOG_CONFIG, e);
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    // Create logs directory if it doesn't exist
    fs::create_dir_all("logs")?;
    init_logging();

    info!("Starting DALL-E Playground");

    let config = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    info!(
        "Using {} with models [{}], default {}",
        config.openai_base,
        config.models.join(", "),
        config.default_model
    );

    let bind_address = config.bind_address();
    let playground = web::Data::new(Playground::new(config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?);

    info!("Listening on http://{}:{}", bind_address.0, bind_address.1);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(playground.clone())
            .configure(api_routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
