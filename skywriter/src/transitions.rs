//! Turns an ordered stroke sequence into one flat 3D waypoint list.
//!
//! Drawing happens at the write altitude. Between disconnected strokes the
//! vehicle climbs to the transit altitude above the end of one stroke, flies
//! across, and descends above the start of the next, so pen-up travel stays
//! visibly separate from the drawing when seen from above or replayed from a
//! ground-track log.
//!
//! When a gap is both continuous and covered by the direct-transition flag,
//! the continuous join wins: the gap is recorded as [`GapKind::Continuous`].

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_positive, Result};
use crate::sequence::StrokeSequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// On the text, at write altitude.
    Draw,
    /// Off the text, at transit altitude.
    Transit,
}

/// A point in the local frame: east/north in meters plus altitude above home.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint3D {
    pub position: Point,
    pub altitude: f64,
    pub role: Role,
    /// Scene index of the stroke this waypoint belongs to or hovers over.
    pub stroke: usize,
    /// Index of the point within that stroke, in its original direction.
    pub point: usize,
}

impl Waypoint3D {
    pub fn east(&self) -> f64 {
        self.position.x
    }

    pub fn north(&self) -> f64 {
        self.position.y
    }

    /// Straight-line distance to another waypoint.
    pub fn distance(&self, other: &Waypoint3D) -> f64 {
        let dz = other.altitude - self.altitude;
        self.position.distance(other.position).hypot(dz)
    }
}

/// How the vehicle gets from one stroke to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapKind {
    /// Climb, cross at transit altitude, descend.
    Lifted,
    /// Strokes are close enough to be drawn as one line.
    Continuous,
    /// Straight across at write altitude, as requested by the caller.
    Direct,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionOptions {
    /// Drawing altitude above home in meters.
    pub write_altitude: f64,
    /// Extra height above the write altitude for pen-up travel.
    pub transit_offset: f64,
    /// Skip altitude changes between strokes entirely.
    pub direct: bool,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            write_altitude: 30.0,
            transit_offset: 10.0,
            direct: false,
        }
    }
}

impl TransitionOptions {
    pub fn transit_altitude(&self) -> f64 {
        self.write_altitude + self.transit_offset
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("write altitude", self.write_altitude)?;
        ensure_non_negative("transit offset", self.transit_offset)
    }
}

/// The complete local flight path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalPath {
    waypoints: Vec<Waypoint3D>,
    gaps: Vec<GapKind>,
}

impl LocalPath {
    pub fn waypoints(&self) -> &[Waypoint3D] {
        &self.waypoints
    }

    /// One entry per pair of consecutive strokes.
    pub fn gaps(&self) -> &[GapKind] {
        &self.gaps
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn count(&self, role: Role) -> usize {
        self.waypoints.iter().filter(|w| w.role == role).count()
    }
}

/// Builds the 3D path for a sequence of oriented strokes.
///
/// When a gap is flown at write altitude and the next stroke starts exactly
/// where the previous one ended, the repeated point is emitted only once.
pub fn add_transitions(sequence: &StrokeSequence, options: &TransitionOptions) -> Result<LocalPath> {
    options.validate()?;

    let transit_altitude = options.transit_altitude();
    let mut waypoints = Vec::new();
    let mut gaps = Vec::with_capacity(sequence.len().saturating_sub(1));

    for (k, ordered) in sequence.strokes().iter().enumerate() {
        let points = ordered.stroke.points();
        let last_index = points.len() - 1;
        let original_index = |i: usize| if ordered.reversed { last_index - i } else { i };
        let mut skip_first = false;

        if k > 0 {
            let previous = &sequence.strokes()[k - 1];
            let gap = if ordered.continuous {
                GapKind::Continuous
            } else if options.direct {
                GapKind::Direct
            } else {
                GapKind::Lifted
            };
            gaps.push(gap);

            match gap {
                GapKind::Lifted => {
                    let prev_last = previous.stroke.len() - 1;
                    waypoints.push(Waypoint3D {
                        position: previous.stroke.last(),
                        altitude: transit_altitude,
                        role: Role::Transit,
                        stroke: previous.source_index,
                        point: if previous.reversed { 0 } else { prev_last },
                    });
                    waypoints.push(Waypoint3D {
                        position: ordered.stroke.first(),
                        altitude: transit_altitude,
                        role: Role::Transit,
                        stroke: ordered.source_index,
                        point: original_index(0),
                    });
                }
                GapKind::Continuous | GapKind::Direct => {
                    skip_first = previous.stroke.last() == ordered.stroke.first();
                }
            }
        }

        let start = usize::from(skip_first);
        waypoints.extend(points.iter().enumerate().skip(start).map(|(i, &p)| Waypoint3D {
            position: p,
            altitude: options.write_altitude,
            role: Role::Draw,
            stroke: ordered.source_index,
            point: original_index(i),
        }));
    }

    Ok(LocalPath { waypoints, gaps })
}
