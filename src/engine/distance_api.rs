use super::Engine;

use async_trait::async_trait;

use crate::{
    api::DistanceAPI, auth::User, entities::WaypointDraft, error::Error, geo::total_distance,
};

#[async_trait]
impl DistanceAPI for Engine {
    #[tracing::instrument(skip(self, waypoints), fields(rows = waypoints.len()))]
    async fn measure_distance(
        &self,
        _user: User,
        waypoints: Vec<WaypointDraft>,
    ) -> Result<f64, Error> {
        Ok(total_distance(&waypoints))
    }
}

#[test]
fn measure_distance_skips_unfinished_rows_test() {
    use crate::db::MemoryStore;
    use tokio_test::block_on;

    let engine = Engine::new(MemoryStore::new()).unwrap();

    let rows = vec![
        WaypointDraft::new("51.5074", "-0.1278"),
        WaypointDraft::new("48.8566", "2.3522"),
        WaypointDraft::new("", ""),
    ];

    let distance = block_on(engine.measure_distance(User::anonymous(), rows)).unwrap();
    assert!(distance > 343.0 && distance < 344.0);

    let distance = block_on(engine.measure_distance(User::anonymous(), vec![])).unwrap();
    assert_eq!(distance, 0.0);
}
