//! Data access for routes and their waypoints.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Route, RouteSummary, Waypoint};
use crate::error::Error;

#[async_trait]
pub trait RouteStore: Send + Sync {
    /// Persists a route together with its waypoints, all or nothing.
    async fn insert_route(&self, route: &Route, waypoints: &[Waypoint]) -> Result<(), Error>;

    /// Every route with its waypoint count, newest first.
    async fn list_routes(&self) -> Result<Vec<RouteSummary>, Error>;

    async fn fetch_route(&self, id: Uuid) -> Result<Option<Route>, Error>;

    /// Waypoints of a route sorted by order index.
    async fn fetch_waypoints(&self, route_id: Uuid) -> Result<Vec<Waypoint>, Error>;
}
