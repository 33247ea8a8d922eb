//! Local east/north/up waypoints to latitude, longitude and altitude.

use enu_geodesy::{EnuFrame, GeodesyError, Geodetic};
use log::debug;
use nalgebra::Vector3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Error, Result};
use crate::transitions::{LocalPath, Role};

/// Launch point of the mission and origin of the local frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomePosition {
    /// Degrees, [-90, 90].
    pub latitude: f64,
    /// Degrees, [-180, 180].
    pub longitude: f64,
    /// Meters above mean sea level.
    pub altitude_msl: f64,
}

impl HomePosition {
    pub fn new(latitude: f64, longitude: f64, altitude_msl: f64) -> Result<Self> {
        let home = Self {
            latitude,
            longitude,
            altitude_msl,
        };
        home.validate()?;
        Ok(home)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("home latitude", self.latitude)?;
        ensure_finite("home longitude", self.longitude)?;
        ensure_finite("home altitude", self.altitude_msl)?;
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::invalid(
                "home latitude",
                format!("{} is outside [-90, 90] degrees", self.latitude),
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::invalid(
                "home longitude",
                format!("{} is outside [-180, 180] degrees", self.longitude),
            ));
        }
        Ok(())
    }
}

/// A projected waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Home altitude plus the local altitude.
    pub altitude_msl: f64,
    /// Local altitude above home.
    pub relative_altitude: f64,
    pub role: Role,
}

/// Projects every waypoint of `path` onto the WGS-84 ellipsoid around `home`.
///
/// Waypoints are converted in parallel; the output keeps the path order.
pub fn project_path(path: &LocalPath, home: &HomePosition) -> Result<Vec<GeoPoint>> {
    home.validate()?;

    let origin = Geodetic::new(home.latitude, home.longitude, home.altitude_msl)?;
    let frame = EnuFrame::new(origin);

    let points = path
        .waypoints()
        .par_iter()
        .map(|w| -> Result<GeoPoint, GeodesyError> {
            let enu = Vector3::new(w.east(), w.north(), w.altitude);
            let geo = frame.enu_to_geodetic(&enu)?;
            Ok(GeoPoint {
                latitude: geo.latitude,
                longitude: geo.longitude,
                altitude_msl: home.altitude_msl + w.altitude,
                relative_altitude: w.altitude,
                role: w.role,
            })
        })
        .collect::<Result<Vec<_>, GeodesyError>>()?;

    debug!(
        "projected {} waypoints around ({:.6}, {:.6})",
        points.len(),
        home.latitude,
        home.longitude
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{sequence_strokes, SequenceOptions};
    use crate::stroke::{Scene, Stroke};
    use crate::transitions::{add_transitions, TransitionOptions};

    fn single_stroke_path(xy: &[(f64, f64)]) -> LocalPath {
        let scene = Scene::new(vec![Stroke::from_xy(xy).unwrap()]);
        let seq = sequence_strokes(&scene, &SequenceOptions::default()).unwrap();
        add_transitions(&seq, &TransitionOptions::default()).unwrap()
    }

    #[test]
    fn test_origin_maps_to_home() {
        let path = single_stroke_path(&[(0.0, 0.0), (0.0, 10.0)]);
        let home = HomePosition::new(0.0, 0.0, 0.0).unwrap();
        let points = project_path(&path, &home).unwrap();
        let first = points[0];
        assert!(first.latitude.abs() < 1e-12);
        assert!(first.longitude.abs() < 1e-12);
        assert_eq!(first.altitude_msl, 30.0);
        assert_eq!(first.relative_altitude, 30.0);
        assert_eq!(first.role, Role::Draw);
    }

    #[test]
    fn test_altitude_adds_home_msl() {
        let path = single_stroke_path(&[(0.0, 0.0), (10.0, 0.0)]);
        let home = HomePosition::new(47.397, 8.545, 488.0).unwrap();
        let points = project_path(&path, &home).unwrap();
        assert!(points.iter().all(|p| p.altitude_msl == 518.0));
        assert!(points[1].longitude > home.longitude);
        assert!((points[1].latitude - home.latitude).abs() < 1e-6);
    }

    #[test]
    fn test_keeps_path_order() {
        let xy: Vec<(f64, f64)> = (0..200).map(|i| (i as f64, (i % 7) as f64)).collect();
        let path = single_stroke_path(&xy);
        let home = HomePosition::new(-33.9, 151.2, 20.0).unwrap();
        let points = project_path(&path, &home).unwrap();
        assert_eq!(points.len(), 200);
        for pair in points.windows(2) {
            assert!(pair[1].longitude > pair[0].longitude);
        }
    }

    #[test]
    fn test_round_trip_within_a_centimeter() {
        let path = single_stroke_path(&[(-400.0, 250.0), (730.0, -610.0), (5.0, 999.0)]);
        let home = HomePosition::new(47.397, 8.545, 488.0).unwrap();
        let frame = EnuFrame::new(Geodetic::new(47.397, 8.545, 488.0).unwrap());
        let points = project_path(&path, &home).unwrap();
        for (w, p) in path.waypoints().iter().zip(&points) {
            let g = Geodetic::new(p.latitude, p.longitude, 488.0 + p.relative_altitude).unwrap();
            let enu = frame.geodetic_to_enu(&g);
            assert!((enu.x - w.east()).abs() < 0.01);
            assert!((enu.y - w.north()).abs() < 0.01);
        }
    }

    #[test]
    fn test_rejects_invalid_home() {
        let path = single_stroke_path(&[(0.0, 0.0), (1.0, 0.0)]);
        for (lat, lon) in [(90.5, 0.0), (-91.0, 0.0), (0.0, 181.0), (f64::NAN, 0.0)] {
            let home = HomePosition {
                latitude: lat,
                longitude: lon,
                altitude_msl: 0.0,
            };
            let err = project_path(&path, &home).unwrap_err();
            assert!(matches!(err, Error::Validation { .. }));
        }
    }
}
