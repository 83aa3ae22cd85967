use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinates, Route, Waypoint};
use crate::error::{
    insufficient_waypoints_error, invalid_coordinates_error, invalid_input_error,
    missing_route_name_error, Error,
};
use crate::geo::{total_distance, GeoPoint};

/// A latitude or longitude as submitted by a form: a JSON number or a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateValue {
    Number(f64),
    Text(String),
}

impl Default for CoordinateValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl CoordinateValue {
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// The value as a finite number, if it is one.
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            Self::Number(number) => *number,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
        };

        value.is_finite().then(|| value)
    }
}

impl From<f64> for CoordinateValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CoordinateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WaypointDraft {
    #[serde(default)]
    pub latitude: CoordinateValue,
    #[serde(default)]
    pub longitude: CoordinateValue,
    #[serde(default)]
    pub order: Option<i32>,
}

impl WaypointDraft {
    pub fn new(latitude: impl Into<CoordinateValue>, longitude: impl Into<CoordinateValue>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
            order: None,
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    fn is_blank(&self) -> bool {
        self.latitude.is_blank() || self.longitude.is_blank()
    }
}

impl GeoPoint for WaypointDraft {
    fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates::new(
            self.latitude.parse()?,
            self.longitude.parse()?,
        ))
    }
}

/// 1-based order index for the row at `position`.
fn position_order(position: usize) -> Result<i32, Error> {
    position
        .checked_add(1)
        .and_then(|order| i32::try_from(order).ok())
        .ok_or_else(|| invalid_input_error())
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RouteDraft {
    pub name: String,
    pub waypoints: Vec<WaypointDraft>,
}

impl RouteDraft {
    /// Validates the draft and builds the route with its ordered waypoints.
    ///
    /// Rows with a blank latitude or longitude are dropped. Rows that are
    /// filled in but do not hold a finite, in-range coordinate reject the
    /// whole draft. Rows without an explicit order take their 1-based
    /// position in the submitted list.
    pub fn into_route(self, user_id: Option<Uuid>) -> Result<(Route, Vec<Waypoint>), Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(missing_route_name_error());
        }

        let mut rows: Vec<(i32, WaypointDraft)> = Vec::with_capacity(self.waypoints.len());
        for (i, row) in self.waypoints.into_iter().enumerate() {
            let order = match row.order {
                Some(order) => order,
                None => position_order(i)?,
            };

            if !row.is_blank() {
                rows.push((order, row));
            }
        }

        if rows.len() < 2 {
            return Err(insufficient_waypoints_error());
        }

        let mut seen = HashSet::new();
        let mut points = Vec::with_capacity(rows.len());

        for (order, row) in rows {
            if order < 1 || !seen.insert(order) {
                return Err(invalid_input_error());
            }

            let coordinates = row
                .coordinates()
                .filter(Coordinates::is_in_range)
                .ok_or_else(|| invalid_coordinates_error())?;

            points.push((order, coordinates));
        }

        points.sort_by_key(|(order, _)| *order);

        let ordered: Vec<Coordinates> = points.iter().map(|(_, c)| *c).collect();
        let route = Route::new(name.into(), total_distance(&ordered), user_id);

        let waypoints = points
            .into_iter()
            .map(|(order, coordinates)| Waypoint::new(route.id, coordinates, order))
            .collect();

        Ok((route, waypoints))
    }
}
