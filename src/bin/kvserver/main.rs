use std::{env as stdenv, io, path::Path, process::id as process_id};

use actix_cors::Cors;
use actix_web::{middleware::Logger as ActixLogger, web, App, HttpServer};
use justkv::{config, http, KVStore, Settings};
use log::{debug, error, info, warn};

mod logger;
use crate::logger::setup_logger;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

#[actix_web::main]
async fn main() -> io::Result<()> {
    let current_dir = stdenv::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
    let env_path = current_dir.join(".env");

    // .env has to be read before the logger exists, it may carry RUST_LOG.
    let dotenv = config::read_dotenv(&env_path);
    let file_vars = dotenv.as_ref().cloned().unwrap_or_default();
    let settings = Settings::from_sources(&file_vars, |key| stdenv::var(key).ok())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    setup_logger(&settings.log_filter, NAME, VERSION);
    match &dotenv {
        Ok(_) => info!(".env loaded from: {}", env_path.display()),
        Err(e) if e.not_found() => warn!(".env file not found. Expected it at: {}", env_path.display()),
        Err(e) => error!("Failed to read {}: {}", env_path.display(), e),
    }

    info!("{} {} PID: {}", NAME, VERSION, process_id());

    let store: KVStore<String, String> = KVStore::new();
    debug!("store created with {} entries", store.len());

    let data = web::Data::new(store);
    let server = match HttpServer::new(move || {
        App::new()
            .wrap(ActixLogger::default())
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .configure(http::configure::<KVStore<String, String>>)
    })
    .bind(settings.listen_address())
    {
        Ok(server) => server.run(),
        Err(e) => {
            error!("Address {} is not available: {}", settings, e);
            return Err(e);
        }
    };

    info!("Server running at http://{} ", settings);

    let execution = server.await;
    info!("Worker stopped with PID: {}", process_id());

    if let Err(e) = execution {
        error!("Server failed: {:?}", e);
        return Err(e);
    }
    Ok(())
}
