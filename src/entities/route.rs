use chrono::{DateTime, Utc};
use geo_types::LineString;
use oso::PolarClass;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinates, Waypoint};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    pub name: String,
    /// Kilometers, summed over waypoints in order-index order.
    pub total_distance: f64,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Route {
    pub fn new(name: String, total_distance: f64, user_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            total_distance,
            user_id,
            created_at: Utc::now(),
        }
    }

    pub fn is_public(&self) -> bool {
        self.user_id.is_none()
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == Some(user_id)
    }
}

impl PolarClass for Route {
    fn get_polar_class_builder() -> oso::ClassBuilder<Route> {
        oso::Class::builder()
            .name("Route")
            .add_attribute_getter("id", |recv: &Route| recv.id.clone())
            .add_method("is_public", Route::is_public)
            .add_method("is_owned_by", Route::is_owned_by)
    }

    fn get_polar_class() -> oso::Class {
        let builder = Route::get_polar_class_builder();
        builder.build()
    }
}

/// A saved route as shown in the route list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteSummary {
    #[serde(flatten)]
    pub route: Route,
    pub waypoint_count: i64,
}

/// A route with everything the map view needs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteDetail {
    #[serde(flatten)]
    pub route: Route,
    pub waypoints: Vec<Waypoint>,
    pub center: Coordinates,
    pub path: Vec<[f64; 2]>,
}

impl RouteDetail {
    /// Returns `None` for a route without waypoints.
    pub fn new(route: Route, mut waypoints: Vec<Waypoint>) -> Option<Self> {
        waypoints.sort_by_key(|waypoint| waypoint.order_index);

        let center = waypoints.first()?.location();
        let path = Self::line_string(&waypoints)
            .points()
            .map(|point| Coordinates::from(point).position())
            .collect();

        Some(Self {
            route,
            waypoints,
            center,
            path,
        })
    }

    fn line_string(waypoints: &[Waypoint]) -> LineString<f64> {
        waypoints
            .iter()
            .map(|waypoint| (waypoint.longitude, waypoint.latitude))
            .collect::<Vec<_>>()
            .into()
    }
}

#[test]
fn ownership_test() {
    let owner = Uuid::new_v4();

    let public = Route::new("Morning Commute".into(), 12.5, None);
    assert!(public.is_public());
    assert!(!public.is_owned_by(owner));

    let owned = Route::new("Evening Run".into(), 5.0, Some(owner));
    assert!(!owned.is_public());
    assert!(owned.is_owned_by(owner));
    assert!(!owned.is_owned_by(Uuid::new_v4()));
}

#[test]
fn detail_orders_waypoints_test() {
    let route = Route::new("Channel Hop".into(), 343.5, None);
    let waypoints = vec![
        Waypoint::new(route.id, Coordinates::new(48.8566, 2.3522), 2),
        Waypoint::new(route.id, Coordinates::new(51.5074, -0.1278), 1),
    ];

    let detail = RouteDetail::new(route, waypoints).unwrap();

    assert_eq!(detail.waypoints[0].order_index, 1);
    assert_eq!(detail.center, Coordinates::new(51.5074, -0.1278));
    assert_eq!(
        detail.path,
        vec![[51.5074, -0.1278], [48.8566, 2.3522]]
    );
}

#[test]
fn detail_requires_waypoints_test() {
    let route = Route::new("Empty".into(), 0.0, None);
    assert!(RouteDetail::new(route, vec![]).is_none());
}
