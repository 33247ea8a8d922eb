//! Douglas-Peucker point reduction, applied to each stroke independently.

use kurbo::{Point, Vec2};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, Error, Result};
use crate::stroke::{Scene, Stroke};

/// Default tolerance as a fraction of the letter height.
pub const AUTO_EPSILON_RATIO: f64 = 0.02;

const DEGENERATE_CHORD: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifyOptions {
    pub enabled: bool,
    /// Tolerance in meters. `None` resolves to 2% of the letter height.
    pub epsilon: Option<f64>,
    /// Interior points turning by more than this many degrees are always kept.
    pub corner_angle_deg: Option<f64>,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            epsilon: None,
            corner_angle_deg: None,
        }
    }
}

impl SimplifyOptions {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    pub fn with_corner_angle(mut self, degrees: f64) -> Self {
        self.corner_angle_deg = Some(degrees);
        self
    }

    /// The tolerance actually used for a given letter height.
    pub fn resolve_epsilon(&self, letter_height: f64) -> f64 {
        self.epsilon.unwrap_or(letter_height * AUTO_EPSILON_RATIO)
    }

    pub fn validate(&self, letter_height: f64) -> Result<()> {
        ensure_non_negative("epsilon", self.resolve_epsilon(letter_height))?;
        check_corner_angle(self.corner_angle_deg)
    }
}

fn check_corner_angle(corner_angle_deg: Option<f64>) -> Result<()> {
    match corner_angle_deg {
        Some(angle) if !(angle.is_finite() && angle > 0.0 && angle <= 180.0) => Err(Error::invalid(
            "corner angle",
            format!("{angle} must be in (0, 180] degrees"),
        )),
        _ => Ok(()),
    }
}

/// Suggested tolerance for common letter sizes, in meters.
pub fn recommended_epsilon(letter_height: f64) -> f64 {
    if letter_height <= 10.0 {
        0.2
    } else if letter_height <= 20.0 {
        0.4
    } else if letter_height <= 50.0 {
        0.75
    } else {
        1.5
    }
}

/// Distance from `p` to the segment `a`-`b`.
fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let chord = b - a;
    let len2 = chord.hypot2();
    if len2 < DEGENERATE_CHORD {
        return p.distance(a);
    }
    let t = ((p - a).dot(chord) / len2).clamp(0.0, 1.0);
    p.distance(a + chord * t)
}

/// Turning angle in degrees at `b` when walking `a` -> `b` -> `c`.
fn turning_angle(a: Point, b: Point, c: Point) -> Option<f64> {
    let incoming: Vec2 = b - a;
    let outgoing: Vec2 = c - b;
    if incoming.hypot2() == 0.0 || outgoing.hypot2() == 0.0 {
        return None;
    }
    Some(incoming.cross(outgoing).atan2(incoming.dot(outgoing)).abs().to_degrees())
}

/// Marks the points Douglas-Peucker keeps between each pair of anchors.
///
/// Anchors are always kept. Between two retained points the farthest
/// interior point is kept when it lies more than `epsilon` from the chord;
/// on equal distances the earliest point wins.
fn mark_kept(points: &[Point], anchors: &[usize], epsilon: f64) -> Vec<bool> {
    let mut keep = vec![false; points.len()];
    for &i in anchors {
        keep[i] = true;
    }

    let mut ranges: Vec<(usize, usize)> = anchors.windows(2).map(|w| (w[0], w[1])).collect();
    while let Some((start, end)) = ranges.pop() {
        if end <= start + 1 {
            continue;
        }
        let (a, b) = (points[start], points[end]);
        let mut max_dist = 0.0;
        let mut max_index = start;
        for (i, &p) in points.iter().enumerate().take(end).skip(start + 1) {
            let d = segment_distance(p, a, b);
            if d > max_dist {
                max_dist = d;
                max_index = i;
            }
        }
        if max_dist > epsilon {
            keep[max_index] = true;
            ranges.push((start, max_index));
            ranges.push((max_index, end));
        }
    }
    keep
}

/// Plain Douglas-Peucker over one polyline.
///
/// Returns a subsequence of `points` that keeps both endpoints. A zero
/// tolerance returns the input unchanged; a negative or non-finite one is
/// rejected.
pub fn douglas_peucker(points: &[Point], epsilon: f64) -> Result<Vec<Point>> {
    ensure_non_negative("epsilon", epsilon)?;
    if points.len() < 3 || epsilon == 0.0 {
        return Ok(points.to_vec());
    }
    let keep = mark_kept(points, &[0, points.len() - 1], epsilon);
    Ok(select(points, &keep))
}

fn select(points: &[Point], keep: &[bool]) -> Vec<Point> {
    points
        .iter()
        .zip(keep)
        .filter_map(|(&p, &k)| k.then_some(p))
        .collect()
}

/// Simplifies a stroke, optionally pinning sharp corners in place.
pub fn simplify_stroke(stroke: &Stroke, epsilon: f64, corner_angle_deg: Option<f64>) -> Result<Stroke> {
    ensure_non_negative("epsilon", epsilon)?;
    check_corner_angle(corner_angle_deg)?;

    let points = stroke.points();
    if points.len() < 3 || epsilon == 0.0 {
        return Ok(stroke.clone());
    }

    let last = points.len() - 1;
    let mut anchors = vec![0];
    if let Some(threshold) = corner_angle_deg {
        anchors.extend((1..last).filter(|&i| {
            turning_angle(points[i - 1], points[i], points[i + 1])
                .is_some_and(|angle| angle > threshold)
        }));
    }
    anchors.push(last);

    let keep = mark_kept(points, &anchors, epsilon);
    Ok(Stroke::from_points_unchecked(select(points, &keep)))
}

/// Simplifies every stroke of a scene. Strokes are processed in parallel
/// and returned in their original order.
pub fn simplify_scene(scene: &Scene, options: &SimplifyOptions, letter_height: f64) -> Result<Scene> {
    options.validate(letter_height)?;
    if !options.enabled {
        return Ok(scene.clone());
    }

    let epsilon = options.resolve_epsilon(letter_height);
    let strokes = scene
        .strokes()
        .par_iter()
        .map(|s| simplify_stroke(s, epsilon, options.corner_angle_deg))
        .collect::<Result<Vec<_>>>()?;
    let simplified = Scene::new(strokes);

    debug!(
        "simplified {} -> {} points (epsilon {:.3}m)",
        scene.point_count(),
        simplified.point_count(),
        epsilon
    );
    Ok(simplified)
}
