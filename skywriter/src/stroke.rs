//! Strokes and scenes in the local east/north frame (meters).

use kurbo::{Affine, Point, Rect, Vec2};

use crate::error::{Error, Result};

/// One continuous pen-down polyline with at least two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke(Vec<Point>);

impl Stroke {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::invalid(
                "stroke",
                format!("needs at least 2 points, got {}", points.len()),
            ));
        }
        if let Some(pt) = points.iter().find(|p| !p.is_finite()) {
            return Err(Error::invalid("stroke", format!("point {pt:?} is not finite")));
        }
        Ok(Self(points))
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_xy(points: &[(f64, f64)]) -> Result<Self> {
        Self::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    // Callers guarantee the length invariant.
    pub(crate) fn from_points_unchecked(points: Vec<Point>) -> Self {
        debug_assert!(points.len() >= 2);
        Self(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the stroke has no points.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Point {
        self.0[0]
    }

    pub fn last(&self) -> Point {
        self.0[self.0.len() - 1]
    }

    /// The same stroke traversed end to start.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    pub fn transformed(&self, affine: Affine) -> Self {
        Self(self.0.iter().map(|&p| affine * p).collect())
    }

    /// Length of the polyline.
    pub fn length(&self) -> f64 {
        self.0.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

/// All strokes of a rendered text, in glyph order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    strokes: Vec<Stroke>,
}

impl Scene {
    pub fn new(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Total number of points over all strokes.
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    /// Axis-aligned extent of every point, `None` for an empty scene.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.strokes.iter().flat_map(|s| s.points().iter().copied());
        let first = points.next()?;
        Some(points.fold(Rect::from_points(first, first), |rect, p| rect.union_pt(p)))
    }

    pub fn transformed(&self, affine: Affine) -> Self {
        Self {
            strokes: self.strokes.iter().map(|s| s.transformed(affine)).collect(),
        }
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        self.transformed(Affine::translate(offset))
    }

    /// Rigid rotation about the local origin, counter-clockwise for positive
    /// angles. The angle is normalized into `[0, 360)` first.
    pub fn rotated(&self, degrees: f64) -> Self {
        let normalized = degrees.rem_euclid(360.0);
        if normalized == 0.0 {
            return self.clone();
        }
        self.transformed(Affine::rotate(normalized.to_radians()))
    }

    pub fn into_strokes(self) -> Vec<Stroke> {
        self.strokes
    }
}
