use geo_types::Point;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// `[lat, lon]` pair, the order map polylines expect.
    pub fn position(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.longitude, coordinates.latitude)
    }
}

impl From<Point<f64>> for Coordinates {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

#[test]
fn range_check_test() {
    assert!(Coordinates::new(90.0, -180.0).is_in_range());
    assert!(!Coordinates::new(90.5, 0.0).is_in_range());
    assert!(!Coordinates::new(0.0, 181.0).is_in_range());
    assert!(!Coordinates::new(f64::NAN, 0.0).is_in_range());
}

#[test]
fn point_conversion_test() {
    let coordinates = Coordinates::new(51.5074, -0.1278);
    let point: Point<f64> = coordinates.into();

    assert_eq!(point.x(), -0.1278);
    assert_eq!(point.y(), 51.5074);
    assert_eq!(Coordinates::from(point), coordinates);
}
