mod app_config;
mod forward_config;
mod forward_service;
mod http_client;
mod std_logger;
#[cfg(test)]
mod test_upstream;

use std::io::{ErrorKind, Result};
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::middleware::{Condition, Logger};
use actix_web::{App, HttpServer};
use clap::Parser;
use log::info;
use app_config::AppConfig;
use forward_config::ForwardConfig;
use forward_service::forward_factory::ForwardServiceFactory;
use std_logger::StdLogger;

#[actix_web::main]
async fn main() -> Result<()> {
    let config = AppConfig::parse();

    StdLogger::init(config.log_level_filter())
        .map_err(|error| std::io::Error::new(ErrorKind::Other, error.to_string()))?;

    let http_client = config.http_client_config()
        .to_client()
        .map_err(|error| std::io::Error::new(ErrorKind::Other, error))?;

    let forward_config = Arc::new(ForwardConfig::default());
    let cors_permissive = config.cors_permissive;

    info!("Forwarding to '{}'.", forward_config.upstream_url);
    info!("Listening on {}:{} with {} workers.", config.bind, config.port, config.workers);

    HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(cors_permissive, Cors::permissive()))
            .wrap(Logger::new("%a \"%m %U\" %s %b %T"))
            .default_service(ForwardServiceFactory::create(http_client.clone(), forward_config.clone()))
    })
        .workers(config.workers)
        .bind((config.bind, config.port))?
        .run()
        .await
}
