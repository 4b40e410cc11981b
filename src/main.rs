use akaa_site::app::App;
use akaa_site::util::logger::Logger;
use dotenv::dotenv;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    // .env has to be read before the logger picks up RUST_LOG and friends
    let dotenv_result = dotenv();

    let _logger = Logger::new().expect("Failed to initialize logging");
    info!("Starting AKAA-GROUPE site");

    match dotenv_result {
        Ok(_) => info!("Loaded .env file"),
        Err(e) => warn!("No .env file loaded: {} (using system env vars)", e),
    }

    let app = App::new().await;
    app.start().await;
}
