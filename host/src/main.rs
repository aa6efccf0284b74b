mod config;
mod services;

use crate::config::Config;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(|e| {
        error!("{e}");
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                error!("Could not open browser at {url}: {e}");
            }
        });
    }

    info!("Console running at {}", url);
    info!("Backend API at {}", config.console.api_base);

    let console = web::Data::new(config.console.clone());
    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024))
            .app_data(console.clone())
            .service(services::console::configure_routes())
            .default_service(web::route().to(services::assets::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
