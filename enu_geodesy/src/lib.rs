use nalgebra::{Matrix3, Vector3};
use thiserror::Error;

/// WGS-84 semi-major axis in meters.
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS-84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// First eccentricity squared.
pub const WGS84_E2: f64 = WGS84_F * (2.0 - WGS84_F);

const MAX_ITERATIONS: usize = 16;
const LATITUDE_TOLERANCE: f64 = 1e-14;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeodesyError {
    #[error("latitude {0} is outside [-90, 90] degrees")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180] degrees")]
    LongitudeOutOfRange(f64),
    #[error("{0} is not a finite number")]
    NonFinite(&'static str),
    #[error("geodetic latitude did not converge after {0} iterations")]
    NoConvergence(usize),
}

/// A position on or above the WGS-84 ellipsoid.
///
/// Angles are in degrees, `height` is meters above the ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    pub latitude: f64,
    pub longitude: f64,
    pub height: f64,
}

impl Geodetic {
    /// Creates a validated position.
    pub fn new(latitude: f64, longitude: f64, height: f64) -> Result<Self, GeodesyError> {
        check_finite(latitude, "latitude")?;
        check_finite(longitude, "longitude")?;
        check_finite(height, "height")?;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeodesyError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeodesyError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
            height,
        })
    }

    /// Earth-centered, earth-fixed cartesian coordinates in meters.
    pub fn to_ecef(&self) -> Vector3<f64> {
        let (sin_lat, cos_lat) = self.latitude.to_radians().sin_cos();
        let (sin_lon, cos_lon) = self.longitude.to_radians().sin_cos();
        let n = prime_vertical_radius(sin_lat);

        Vector3::new(
            (n + self.height) * cos_lat * cos_lon,
            (n + self.height) * cos_lat * sin_lon,
            (n * (1.0 - WGS84_E2) + self.height) * sin_lat,
        )
    }
}

fn check_finite(value: f64, name: &'static str) -> Result<(), GeodesyError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeodesyError::NonFinite(name))
    }
}

fn prime_vertical_radius(sin_lat: f64) -> f64 {
    WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt()
}

/// Converts ECEF coordinates back to latitude, longitude and height.
///
/// Uses fixed-point iteration on the latitude; the height formula stays
/// well conditioned at the poles.
pub fn ecef_to_geodetic(ecef: &Vector3<f64>) -> Result<Geodetic, GeodesyError> {
    check_finite(ecef.x, "ecef x")?;
    check_finite(ecef.y, "ecef y")?;
    check_finite(ecef.z, "ecef z")?;

    let longitude = ecef.y.atan2(ecef.x);
    let p = ecef.x.hypot(ecef.y);
    let mut latitude = ecef.z.atan2(p * (1.0 - WGS84_E2));

    for _ in 0..MAX_ITERATIONS {
        let (sin_lat, cos_lat) = latitude.sin_cos();
        let n = prime_vertical_radius(sin_lat);
        let height = p * cos_lat + ecef.z * sin_lat - WGS84_A * WGS84_A / n;
        let next = ecef.z.atan2(p * (1.0 - WGS84_E2 * n / (n + height)));

        if (next - latitude).abs() < LATITUDE_TOLERANCE {
            let (sin_lat, cos_lat) = next.sin_cos();
            let n = prime_vertical_radius(sin_lat);
            return Ok(Geodetic {
                latitude: next.to_degrees(),
                longitude: longitude.to_degrees(),
                height: p * cos_lat + ecef.z * sin_lat - WGS84_A * WGS84_A / n,
            });
        }
        latitude = next;
    }

    Err(GeodesyError::NoConvergence(MAX_ITERATIONS))
}

/// A local East-North-Up tangent frame anchored at a geodetic origin.
#[derive(Debug, Clone)]
pub struct EnuFrame {
    origin: Geodetic,
    origin_ecef: Vector3<f64>,
    // rows are the east, north and up unit vectors expressed in ECEF
    ecef_to_enu: Matrix3<f64>,
}

impl EnuFrame {
    pub fn new(origin: Geodetic) -> Self {
        let (sin_lat, cos_lat) = origin.latitude.to_radians().sin_cos();
        let (sin_lon, cos_lon) = origin.longitude.to_radians().sin_cos();

        #[rustfmt::skip]
        let ecef_to_enu = Matrix3::new(
            -sin_lon,            cos_lon,            0.0,
            -sin_lat * cos_lon, -sin_lat * sin_lon,  cos_lat,
             cos_lat * cos_lon,  cos_lat * sin_lon,  sin_lat,
        );

        Self {
            origin,
            origin_ecef: origin.to_ecef(),
            ecef_to_enu,
        }
    }

    pub fn origin(&self) -> &Geodetic {
        &self.origin
    }

    /// Maps an (east, north, up) displacement in meters to a geodetic position.
    pub fn enu_to_geodetic(&self, enu: &Vector3<f64>) -> Result<Geodetic, GeodesyError> {
        check_finite(enu.x, "east")?;
        check_finite(enu.y, "north")?;
        check_finite(enu.z, "up")?;
        let ecef = self.origin_ecef + self.ecef_to_enu.transpose() * enu;
        ecef_to_geodetic(&ecef)
    }

    /// Maps a geodetic position to its (east, north, up) displacement in meters.
    pub fn geodetic_to_enu(&self, point: &Geodetic) -> Vector3<f64> {
        self.ecef_to_enu * (point.to_ecef() - self.origin_ecef)
    }
}
