//! Pen-up travel statistics and a rough flight time estimate.

use serde::Serialize;

use crate::error::{ensure_positive, Result};
use crate::sequence::StrokeSequence;
use crate::transitions::Waypoint3D;

/// Typical multicopter horizontal acceleration, m/s².
pub const DEFAULT_ACCELERATION: f64 = 3.0;

/// Distances between consecutive strokes of a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TransitionStats {
    pub count: usize,
    pub total: f64,
    pub mean: f64,
    pub max: f64,
}

impl TransitionStats {
    pub fn from_sequence(sequence: &StrokeSequence) -> Self {
        let gaps: Vec<f64> = sequence.strokes().iter().skip(1).map(|s| s.travel).collect();
        if gaps.is_empty() {
            return Self::default();
        }
        let total: f64 = gaps.iter().sum();
        Self {
            count: gaps.len(),
            total,
            mean: total / gaps.len() as f64,
            max: gaps.iter().copied().fold(0.0, f64::max),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FlightTimeEstimate {
    pub seconds: f64,
    /// 3D path length in meters.
    pub distance: f64,
}

impl FlightTimeEstimate {
    /// `"4m 12s"`, or `"37s"` under a minute.
    pub fn formatted(&self) -> String {
        let whole = self.seconds.max(0.0) as u64;
        let (minutes, seconds) = (whole / 60, whole % 60);
        if minutes > 0 {
            format!("{minutes}m {seconds}s")
        } else {
            format!("{seconds}s")
        }
    }
}

/// Time to fly one segment from standstill to standstill.
///
/// Long segments accelerate to `speed`, cruise, then brake; short ones
/// never reach cruise speed and follow a triangular profile.
fn segment_time(distance: f64, speed: f64, acceleration: f64) -> f64 {
    let ramp_time = speed / acceleration;
    let ramp_distance = 0.5 * acceleration * ramp_time * ramp_time;
    if distance <= 2.0 * ramp_distance {
        2.0 * (distance / acceleration).sqrt()
    } else {
        2.0 * ramp_time + (distance - 2.0 * ramp_distance) / speed
    }
}

/// Estimates how long the vehicle needs to fly `waypoints` in order,
/// stopping at each one.
pub fn estimate_flight_time(waypoints: &[Waypoint3D], speed: f64, acceleration: f64) -> Result<FlightTimeEstimate> {
    ensure_positive("speed", speed)?;
    ensure_positive("acceleration", acceleration)?;

    let mut estimate = FlightTimeEstimate::default();
    for pair in waypoints.windows(2) {
        let d = pair[0].distance(&pair[1]);
        estimate.distance += d;
        estimate.seconds += segment_time(d, speed, acceleration);
    }
    Ok(estimate)
}
