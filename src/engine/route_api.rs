use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::RouteAPI,
    auth::User,
    entities::{Route, RouteDetail, RouteDraft, RouteSummary},
    error::{not_found_error, Error},
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_route(&self, user: User, draft: RouteDraft) -> Result<Route, Error> {
        let (route, waypoints) = draft.into_route(user.owner_id())?;

        self.authorize(user, "create", route.clone())?;

        for waypoint in waypoints.iter() {
            tracing::debug!(%waypoint, "adding waypoint");
        }

        self.store.insert_route(&route, &waypoints).await?;

        tracing::info!(
            route_id = %route.id,
            total_distance = route.total_distance,
            "created route with {} waypoints",
            waypoints.len()
        );

        Ok(route)
    }

    #[tracing::instrument(skip(self))]
    async fn list_routes(&self, user: User) -> Result<Vec<RouteSummary>, Error> {
        let summaries = self.store.list_routes().await?;

        let mut readable = Vec::with_capacity(summaries.len());
        for summary in summaries {
            if self.is_allowed(user.clone(), "read", summary.route.clone())? {
                readable.push(summary);
            }
        }

        Ok(readable)
    }

    #[tracing::instrument(skip(self))]
    async fn find_route(&self, user: User, id: Uuid) -> Result<RouteDetail, Error> {
        let route = self
            .store
            .fetch_route(id)
            .await?
            .ok_or_else(|| not_found_error())?;

        self.authorize(user, "read", route.clone())?;

        let waypoints = self.store.fetch_waypoints(id).await?;

        RouteDetail::new(route, waypoints).ok_or_else(|| not_found_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::entities::WaypointDraft;
    use crate::error::{insufficient_waypoints_error, unauthorized_error};
    use tokio_test::block_on;

    fn engine() -> Engine {
        Engine::new(MemoryStore::new()).unwrap()
    }

    fn channel_hop() -> RouteDraft {
        RouteDraft {
            name: "Channel Hop".into(),
            waypoints: vec![
                WaypointDraft::new("51.5074", "-0.1278"),
                WaypointDraft::new("", ""),
                WaypointDraft::new(48.8566, 2.3522),
            ],
        }
    }

    #[test]
    fn create_then_find_route() {
        let engine = engine();

        let route = block_on(engine.create_route(User::anonymous(), channel_hop())).unwrap();
        assert!(route.is_public());

        let detail = block_on(engine.find_route(User::anonymous(), route.id)).unwrap();
        assert_eq!(detail.route.id, route.id);
        assert_eq!(detail.waypoints.len(), 2);
        assert_eq!(detail.waypoints[0].order_index, 1);
        assert_eq!(detail.waypoints[1].order_index, 3);
        assert_eq!(detail.path.len(), 2);
        assert_eq!(detail.center.latitude, 51.5074);
    }

    #[test]
    fn invalid_draft_is_not_stored() {
        let engine = engine();

        let draft = RouteDraft {
            name: "Lonely".into(),
            waypoints: vec![WaypointDraft::new(0.0, 0.0)],
        };

        let err = block_on(engine.create_route(User::anonymous(), draft)).unwrap_err();
        assert_eq!(err, insufficient_waypoints_error());
        assert!(block_on(engine.list_routes(User::anonymous()))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn list_routes_newest_first_with_counts() {
        let engine = engine();

        let first = block_on(engine.create_route(User::anonymous(), channel_hop())).unwrap();

        let mut draft = channel_hop();
        draft.name = "Loop".into();
        draft.waypoints.push(WaypointDraft::new(51.5074, -0.1278));
        let second = block_on(engine.create_route(User::anonymous(), draft)).unwrap();

        let summaries = block_on(engine.list_routes(User::anonymous())).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].route.id, second.id);
        assert_eq!(summaries[0].waypoint_count, 3);
        assert_eq!(summaries[1].route.id, first.id);
        assert_eq!(summaries[1].waypoint_count, 2);
    }

    #[test]
    fn owned_routes_are_private() {
        let engine = engine();

        let owner = User::new(Uuid::new_v4());
        let stranger = User::new(Uuid::new_v4());

        let route = block_on(engine.create_route(owner.clone(), channel_hop())).unwrap();
        assert_eq!(route.user_id, Some(owner.id));

        assert!(block_on(engine.find_route(owner.clone(), route.id)).is_ok());

        let err = block_on(engine.find_route(stranger.clone(), route.id)).unwrap_err();
        assert_eq!(err, unauthorized_error());

        assert_eq!(block_on(engine.list_routes(owner)).unwrap().len(), 1);
        assert!(block_on(engine.list_routes(stranger)).unwrap().is_empty());
    }

    #[test]
    fn missing_route_is_not_found() {
        let engine = engine();

        let err = block_on(engine.find_route(User::anonymous(), Uuid::new_v4())).unwrap_err();
        assert_eq!(err, not_found_error());
    }

    #[test]
    fn route_without_waypoints_is_not_found() {
        let store = MemoryStore::new();
        let route = Route::new("Bare".into(), 0.0, None);
        block_on(crate::db::RouteStore::insert_route(&store, &route, &[])).unwrap();

        let engine = Engine::new(store).unwrap();

        let err = block_on(engine.find_route(User::anonymous(), route.id)).unwrap_err();
        assert_eq!(err, not_found_error());
    }
}
