//! Great-circle distance over ordered point sequences.

use crate::entities::Coordinates;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Anything that may resolve to a coordinate pair.
///
/// Returns `None` when the latitude or longitude is not a finite number, in
/// which case every segment touching the point contributes zero distance.
pub trait GeoPoint {
    fn coordinates(&self) -> Option<Coordinates>;
}

impl GeoPoint for Coordinates {
    fn coordinates(&self) -> Option<Coordinates> {
        match self.latitude.is_finite() && self.longitude.is_finite() {
            true => Some(*self),
            false => None,
        }
    }
}

/// Haversine distance between two points, in kilometers.
pub fn haversine_distance(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    // rounding can push `a` just past 1 for near-antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Total path length in kilometers, summing consecutive segments in order.
pub fn total_distance<P: GeoPoint>(points: &[P]) -> f64 {
    points
        .windows(2)
        .map(|pair| match (pair[0].coordinates(), pair[1].coordinates()) {
            (Some(from), Some(to)) => haversine_distance(from, to),
            _ => 0.0,
        })
        .sum()
}

pub fn format_distance(km: f64) -> String {
    format!("{:.2} km", km)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::WaypointDraft;

    fn point(latitude: f64, longitude: f64) -> Coordinates {
        Coordinates {
            latitude,
            longitude,
        }
    }

    const LONDON: Coordinates = Coordinates {
        latitude: 51.5074,
        longitude: -0.1278,
    };

    const PARIS: Coordinates = Coordinates {
        latitude: 48.8566,
        longitude: 2.3522,
    };

    #[test]
    fn empty_and_single_point_are_zero() {
        let empty: Vec<Coordinates> = vec![];
        assert_eq!(total_distance(&empty), 0.0);
        assert_eq!(total_distance(&[LONDON]), 0.0);
    }

    #[test]
    fn identical_points_are_zero() {
        assert_eq!(total_distance(&[PARIS, PARIS]), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let dist = total_distance(&[point(0.0, 0.0), point(0.0, 1.0)]);
        assert!((dist - 111.19).abs() < 0.1, "got {}", dist);
    }

    #[test]
    fn london_to_paris() {
        let dist = total_distance(&[LONDON, PARIS]);
        assert!(dist > 343.0 && dist < 344.0, "got {}", dist);
    }

    fn grid() -> Vec<Coordinates> {
        let latitudes = [-90.0, -89.9, -45.0, -0.1, 0.0, 0.1, 45.0, 89.9, 90.0];
        let longitudes = [-180.0, -179.9, -90.0, -0.1, 0.0, 0.1, 90.0, 179.9, 180.0];

        latitudes
            .iter()
            .flat_map(|&lat| longitudes.iter().map(move |&lon| point(lat, lon)))
            .collect()
    }

    #[test]
    fn distance_is_finite_non_negative_and_symmetric() {
        let points = grid();

        for &a in points.iter() {
            for &b in points.iter() {
                let there = total_distance(&[a, b]);
                let back = total_distance(&[b, a]);

                assert!(there.is_finite() && there >= 0.0, "{:?} -> {:?}: {}", a, b, there);
                assert!((there - back).abs() < 1e-9, "{:?} <-> {:?}", a, b);
            }
        }
    }

    #[test]
    fn antipodal_points_are_half_a_circumference() {
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;

        for step in 0..=1800 {
            let lat = -90.0 + step as f64 * 0.1;

            for lon in [0.0, 10.0, 33.3, 179.9] {
                let dist = haversine_distance(point(lat, lon), point(-lat, lon - 180.0));
                assert!(dist.is_finite(), "({}, {}) gave {}", lat, lon, dist);
                assert!((dist - half).abs() < 0.01, "({}, {}) gave {}", lat, lon, dist);
            }
        }
    }

    #[test]
    fn path_is_sum_of_segments() {
        let a = LONDON;
        let b = point(50.8503, 4.3517);
        let c = PARIS;

        let whole = total_distance(&[a, b, c]);
        let parts = total_distance(&[a, b]) + total_distance(&[b, c]);
        assert!((whole - parts).abs() < 1e-9);

        // going through Brussels is longer than the direct hop
        assert!(whole > total_distance(&[a, c]));
    }

    #[test]
    fn non_finite_point_contributes_nothing() {
        let broken = point(f64::NAN, 2.0);
        assert_eq!(total_distance(&[LONDON, broken]), 0.0);
        assert_eq!(total_distance(&[LONDON, broken, PARIS]), 0.0);

        let tail = point(f64::INFINITY, 0.0);
        assert_eq!(
            total_distance(&[LONDON, PARIS, tail]),
            total_distance(&[LONDON, PARIS])
        );
    }

    #[test]
    fn unparseable_draft_row_skips_adjacent_segments() {
        let rows = vec![
            WaypointDraft::new("0", "0"),
            WaypointDraft::new("0", "1"),
            WaypointDraft::new("north", "1"),
            WaypointDraft::new("0", "2"),
        ];

        let expected = total_distance(&[point(0.0, 0.0), point(0.0, 1.0)]);
        assert!((total_distance(&rows) - expected).abs() < 1e-9);
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_distance(343.5312), "343.53 km");
        assert_eq!(format_distance(0.0), "0.00 km");
    }
}
