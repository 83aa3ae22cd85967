//! Service configuration from environment.

use std::env;
use std::net::SocketAddr;

use crate::error::{config_error, Error};

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Without a database url routes are kept in memory.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let bind_addr = match env::var("BIND_ADDR") {
            Ok(value) => value.parse().map_err(|_| config_error())?,
            Err(env::VarError::NotPresent) => SocketAddr::from(([127, 0, 0, 1], 3000)),
            Err(err) => return Err(err.into()),
        };

        let database_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value.parse().map_err(|_| config_error())?,
            Err(env::VarError::NotPresent) => 5,
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            bind_addr,
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            database_max_connections,
        })
    }
}
