use std::convert::TryFrom;
use std::sync::Arc;

use clap::Parser;
use tracing::{event, Level};

use sf_oauth_relay::config::Config;
use sf_oauth_relay::http::server::Server;
use sf_oauth_relay::relay::{Error, OAuthRelay};
use sf_oauth_relay::util::cli::Options;

async fn relayd(opts: Options) -> Result<(), Error> {
    let config = Config::try_from(opts)?;
    let addr = config.listen_addr()?;
    event!(
        Level::INFO,
        redirect_uri = %config.credentials.redirect_uri.0,
        format = ?config.presentation,
        "Loaded configuration"
    );

    let relay = Arc::new(OAuthRelay::new(config)?);
    Server::new(relay).serve(addr).await;
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let opts = Options::parse();
    if let Err(e) = relayd(opts).await {
        event!(Level::ERROR, error = %e, "Failed to start");
        std::process::exit(1);
    }
}
