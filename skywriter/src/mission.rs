//! Mission assembly: flight parameters plus projected waypoints, as the
//! ordered item list every exporter consumes.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, Error, Result};
use crate::projection::{GeoPoint, HomePosition};
use crate::transitions::Role;

/// Default ceiling on navigation items per mission.
pub const DEFAULT_MAX_ITEMS: usize = 500;

/// Relative altitudes spanning more than this are reported as suspicious.
const ALTITUDE_SPREAD_WARNING: f64 = 1000.0;

/// MAVLink command ids used in the mission.
pub mod command {
    pub const NAV_WAYPOINT: u16 = 16;
    pub const NAV_RETURN_TO_LAUNCH: u16 = 20;
    pub const NAV_TAKEOFF: u16 = 22;
    pub const DO_CHANGE_SPEED: u16 = 178;
}

/// MAVLink coordinate frame of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltitudeFrame {
    /// No position; used by commands such as speed changes.
    Mission,
    /// Altitude relative to home.
    GlobalRelative,
}

impl AltitudeFrame {
    pub fn code(self) -> u8 {
        match self {
            AltitudeFrame::Mission => 2,
            AltitudeFrame::GlobalRelative => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightParameters {
    /// Cruise speed in m/s.
    pub speed: f64,
    /// Waypoint acceptance radius in meters.
    pub acceptance_radius: f64,
    /// Prepend a takeoff item.
    pub takeoff: bool,
    /// Append a return-to-launch item.
    pub return_to_launch: bool,
    /// Waypoints plus takeoff and RTL may not exceed this.
    pub max_items: usize,
}

impl Default for FlightParameters {
    fn default() -> Self {
        Self {
            speed: 3.0,
            acceptance_radius: 1.5,
            takeoff: true,
            return_to_launch: true,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

impl FlightParameters {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("speed", self.speed)?;
        ensure_positive("acceptance radius", self.acceptance_radius)?;
        if self.max_items == 0 {
            return Err(Error::invalid("max items", "must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionWaypoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_msl: f64,
    pub relative_altitude: f64,
    pub acceptance_radius: f64,
    /// Pass through without stopping.
    pub fly_through: bool,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MissionItem {
    /// Climb above home to `altitude` (relative).
    Takeoff {
        latitude: f64,
        longitude: f64,
        altitude: f64,
    },
    ChangeSpeed { speed: f64 },
    Waypoint(MissionWaypoint),
    ReturnToLaunch,
}

impl MissionItem {
    pub fn command(&self) -> u16 {
        match self {
            MissionItem::Takeoff { .. } => command::NAV_TAKEOFF,
            MissionItem::ChangeSpeed { .. } => command::DO_CHANGE_SPEED,
            MissionItem::Waypoint(_) => command::NAV_WAYPOINT,
            MissionItem::ReturnToLaunch => command::NAV_RETURN_TO_LAUNCH,
        }
    }

    pub fn frame(&self) -> AltitudeFrame {
        match self {
            MissionItem::Takeoff { .. } | MissionItem::Waypoint(_) => AltitudeFrame::GlobalRelative,
            MissionItem::ChangeSpeed { .. } | MissionItem::ReturnToLaunch => AltitudeFrame::Mission,
        }
    }

    /// Whether the item counts against the item ceiling.
    pub fn is_navigation(&self) -> bool {
        !matches!(self, MissionItem::ChangeSpeed { .. })
    }
}

/// A complete mission. Built only by [`assemble_mission`] and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    home: HomePosition,
    flight: FlightParameters,
    items: Vec<MissionItem>,
}

impl Mission {
    pub fn home(&self) -> &HomePosition {
        &self.home
    }

    pub fn flight(&self) -> &FlightParameters {
        &self.flight
    }

    pub fn items(&self) -> &[MissionItem] {
        &self.items
    }

    pub fn waypoints(&self) -> impl Iterator<Item = &MissionWaypoint> {
        self.items.iter().filter_map(|item| match item {
            MissionItem::Waypoint(w) => Some(w),
            _ => None,
        })
    }

    pub fn waypoint_count(&self) -> usize {
        self.waypoints().count()
    }

    /// Items counted against [`FlightParameters::max_items`].
    pub fn navigation_item_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_navigation()).count()
    }
}

/// Builds the mission item list.
///
/// Order: optional takeoff, a speed change, one fly-through waypoint per
/// projected point, optional return to launch. Fails when there are no
/// points or when the navigation items exceed the ceiling; nothing is
/// truncated.
pub fn assemble_mission(home: &HomePosition, points: &[GeoPoint], flight: &FlightParameters) -> Result<Mission> {
    home.validate()?;
    flight.validate()?;

    if points.is_empty() {
        return Err(Error::invalid("waypoints", "mission has no waypoints"));
    }

    let actual = points.len() + usize::from(flight.takeoff) + usize::from(flight.return_to_launch);
    if actual > flight.max_items {
        return Err(Error::WaypointLimitExceeded {
            actual,
            allowed: flight.max_items,
        });
    }

    let (low, high) = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.relative_altitude), hi.max(p.relative_altitude))
    });
    if high - low > ALTITUDE_SPREAD_WARNING {
        warn!("waypoint altitudes span {:.0}m ({low:.1}m to {high:.1}m)", high - low);
    }

    let mut items = Vec::with_capacity(points.len() + 3);
    if flight.takeoff {
        items.push(MissionItem::Takeoff {
            latitude: home.latitude,
            longitude: home.longitude,
            altitude: points[0].relative_altitude,
        });
    }
    items.push(MissionItem::ChangeSpeed { speed: flight.speed });
    items.extend(points.iter().map(|p| {
        MissionItem::Waypoint(MissionWaypoint {
            latitude: p.latitude,
            longitude: p.longitude,
            altitude_msl: p.altitude_msl,
            relative_altitude: p.relative_altitude,
            acceptance_radius: flight.acceptance_radius,
            fly_through: true,
            role: p.role,
        })
    }));
    if flight.return_to_launch {
        items.push(MissionItem::ReturnToLaunch);
    }

    debug!("assembled mission with {} items ({actual} navigation)", items.len());
    Ok(Mission {
        home: *home,
        flight: *flight,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(n: usize) -> Vec<GeoPoint> {
        (0..n)
            .map(|i| GeoPoint {
                latitude: 47.0 + i as f64 * 1e-5,
                longitude: 8.0,
                altitude_msl: 530.0,
                relative_altitude: 30.0,
                role: Role::Draw,
            })
            .collect()
    }

    fn home() -> HomePosition {
        HomePosition::new(47.0, 8.0, 500.0).unwrap()
    }

    #[test]
    fn test_item_order() {
        let mission = assemble_mission(&home(), &points(3), &FlightParameters::default()).unwrap();
        let commands: Vec<u16> = mission.items().iter().map(MissionItem::command).collect();
        assert_eq!(commands, vec![22, 178, 16, 16, 16, 20]);
        assert_eq!(mission.waypoint_count(), 3);
        assert_eq!(mission.navigation_item_count(), 5);
        assert!(mission.waypoints().all(|w| w.fly_through && w.acceptance_radius == 1.5));
    }

    #[test]
    fn test_takeoff_uses_first_waypoint_altitude() {
        let mut pts = points(2);
        pts[0].relative_altitude = 40.0;
        let mission = assemble_mission(&home(), &pts, &FlightParameters::default()).unwrap();
        assert_eq!(
            mission.items()[0],
            MissionItem::Takeoff {
                latitude: 47.0,
                longitude: 8.0,
                altitude: 40.0
            }
        );
        assert_eq!(mission.items()[0].frame(), AltitudeFrame::GlobalRelative);
        assert_eq!(mission.items()[1].frame().code(), 2);
    }

    #[test]
    fn test_optional_items() {
        let flight = FlightParameters {
            takeoff: false,
            return_to_launch: false,
            ..FlightParameters::default()
        };
        let mission = assemble_mission(&home(), &points(2), &flight).unwrap();
        let commands: Vec<u16> = mission.items().iter().map(MissionItem::command).collect();
        assert_eq!(commands, vec![178, 16, 16]);
    }

    #[test]
    fn test_limit_is_inclusive() {
        let flight = FlightParameters {
            max_items: 10,
            ..FlightParameters::default()
        };
        // 8 waypoints + takeoff + RTL = 10
        assert!(assemble_mission(&home(), &points(8), &flight).is_ok());
        let err = assemble_mission(&home(), &points(9), &flight).unwrap_err();
        assert!(matches!(
            err,
            Error::WaypointLimitExceeded {
                actual: 11,
                allowed: 10
            }
        ));
    }

    #[test]
    fn test_rejects_empty_and_bad_parameters() {
        let err = assemble_mission(&home(), &[], &FlightParameters::default()).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "waypoints", .. }));

        for flight in [
            FlightParameters {
                speed: 0.0,
                ..FlightParameters::default()
            },
            FlightParameters {
                acceptance_radius: -1.0,
                ..FlightParameters::default()
            },
            FlightParameters {
                max_items: 0,
                ..FlightParameters::default()
            },
        ] {
            let err = assemble_mission(&home(), &points(1), &flight).unwrap_err();
            assert!(matches!(err, Error::Validation { .. }));
        }
    }
}
