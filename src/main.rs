use std::process;

use waymark::config::Config;
use waymark::db::{MemoryStore, PgStore};
use waymark::engine::Engine;
use waymark::error::Error;
use waymark::server::serve;

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    let engine = match &config.database_url {
        Some(url) => Engine::new(PgStore::new(url, config.database_max_connections).await?)?,
        None => {
            tracing::warn!("DATABASE_URL not set, routes are kept in memory");
            Engine::new(MemoryStore::new())?
        }
    };

    serve(engine, config.bind_addr).await
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        tracing::error!("{}", err);
        process::exit(1);
    }
}
