mod coordinates;
mod draft;
mod route;
mod waypoint;

pub use coordinates::Coordinates;
pub use draft::{CoordinateValue, RouteDraft, WaypointDraft};
pub use route::{Route, RouteDetail, RouteSummary};
pub use waypoint::Waypoint;
