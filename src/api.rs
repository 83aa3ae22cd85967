use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::User;
use crate::entities::{Route, RouteDetail, RouteDraft, RouteSummary, WaypointDraft};
use crate::error::Error;

#[async_trait]
pub trait RouteAPI {
    async fn create_route(&self, user: User, draft: RouteDraft) -> Result<Route, Error>;

    /// Routes readable by `user`, newest first.
    async fn list_routes(&self, user: User) -> Result<Vec<RouteSummary>, Error>;

    async fn find_route(&self, user: User, id: Uuid) -> Result<RouteDetail, Error>;
}

#[async_trait]
pub trait DistanceAPI {
    /// Total distance over unvalidated rows in submitted order.
    async fn measure_distance(
        &self,
        user: User,
        waypoints: Vec<WaypointDraft>,
    ) -> Result<f64, Error>;
}

pub trait API: RouteAPI + DistanceAPI {}
