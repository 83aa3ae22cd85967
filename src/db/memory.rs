use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::RouteStore;
use crate::{
    entities::{Route, RouteSummary, Waypoint},
    error::{invalid_input_error, Error},
};

#[derive(Default)]
struct State {
    // insertion order, oldest first
    routes: Vec<Route>,
    waypoints: HashMap<Uuid, Vec<Waypoint>>,
}

/// Process-local store, used when no database is configured and in tests.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RouteStore for MemoryStore {
    #[tracing::instrument(skip(self, route, waypoints), fields(route_id = %route.id))]
    async fn insert_route(&self, route: &Route, waypoints: &[Waypoint]) -> Result<(), Error> {
        let mut state = self.state.write().await;

        if state.routes.iter().any(|r| r.id == route.id)
            || waypoints.iter().any(|w| w.route_id != route.id)
        {
            return Err(invalid_input_error());
        }

        let mut waypoints = waypoints.to_vec();
        waypoints.sort_by_key(|waypoint| waypoint.order_index);

        state.routes.push(route.clone());
        state.waypoints.insert(route.id, waypoints);

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list_routes(&self) -> Result<Vec<RouteSummary>, Error> {
        let state = self.state.read().await;

        let mut summaries: Vec<RouteSummary> = state
            .routes
            .iter()
            .rev()
            .map(|route| RouteSummary {
                route: route.clone(),
                waypoint_count: state.waypoints.get(&route.id).map_or(0, |w| w.len() as i64),
            })
            .collect();

        // stable, so equal timestamps keep the newest insert first
        summaries.sort_by(|a, b| b.route.created_at.cmp(&a.route.created_at));

        Ok(summaries)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_route(&self, id: Uuid) -> Result<Option<Route>, Error> {
        let state = self.state.read().await;

        Ok(state.routes.iter().find(|route| route.id == id).cloned())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_waypoints(&self, route_id: Uuid) -> Result<Vec<Waypoint>, Error> {
        let state = self.state.read().await;

        Ok(state.waypoints.get(&route_id).cloned().unwrap_or_default())
    }
}

#[test]
fn insert_and_list_test() {
    use crate::entities::Coordinates;
    use tokio_test::block_on;

    let store = MemoryStore::new();

    let first = Route::new("First".into(), 1.0, None);
    let second = Route::new("Second".into(), 2.0, None);

    let waypoints = vec![
        Waypoint::new(first.id, Coordinates::new(0.0, 1.0), 2),
        Waypoint::new(first.id, Coordinates::new(0.0, 0.0), 1),
    ];

    block_on(store.insert_route(&first, &waypoints)).unwrap();
    block_on(store.insert_route(&second, &[])).unwrap();

    let summaries = block_on(store.list_routes()).unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].route.id, second.id);
    assert_eq!(summaries[0].waypoint_count, 0);
    assert_eq!(summaries[1].route.id, first.id);
    assert_eq!(summaries[1].waypoint_count, 2);

    let stored = block_on(store.fetch_waypoints(first.id)).unwrap();
    assert_eq!(stored[0].order_index, 1);
    assert_eq!(stored[1].order_index, 2);
}

#[test]
fn rejects_duplicate_route_test() {
    use tokio_test::block_on;

    let store = MemoryStore::new();
    let route = Route::new("Once".into(), 0.0, None);

    block_on(store.insert_route(&route, &[])).unwrap();
    assert!(block_on(store.insert_route(&route, &[])).is_err());
}

#[test]
fn missing_route_test() {
    use tokio_test::block_on;

    let store = MemoryStore::new();

    assert!(block_on(store.fetch_route(Uuid::new_v4())).unwrap().is_none());
    assert!(block_on(store.fetch_waypoints(Uuid::new_v4())).unwrap().is_empty());
}
