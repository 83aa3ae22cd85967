use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;
use crate::geo::GeoPoint;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: Uuid,
    pub route_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub order_index: i32,
}

impl Waypoint {
    pub fn new(route_id: Uuid, coordinates: Coordinates, order_index: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            route_id,
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            order_index,
        }
    }

    pub fn location(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

impl GeoPoint for Waypoint {
    fn coordinates(&self) -> Option<Coordinates> {
        self.location().coordinates()
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Waypoint {}: {:.6}, {:.6}",
            self.order_index, self.latitude, self.longitude
        )
    }
}

#[test]
fn display_test() {
    let waypoint = Waypoint::new(Uuid::new_v4(), Coordinates::new(51.5074, -0.1278), 1);
    assert_eq!(waypoint.to_string(), "Waypoint 1: 51.507400, -0.127800");
}
