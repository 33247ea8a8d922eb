//! Stroke ordering: which stroke to draw next and in which direction.
//!
//! Finding the order with the least pen-up travel is an open-path routing
//! problem and is not solved exactly here. The greedy nearest-neighbour
//! heuristic below is cheap and usually close, but it is only a heuristic:
//! the one guarantee it gives is that it never travels further than drawing
//! the strokes in their original order.

use kurbo::Point;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, Result};
use crate::stroke::{Scene, Stroke};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingMethod {
    /// Greedy nearest-neighbour with per-stroke direction choice.
    #[default]
    NearestNeighbor,
    /// Keep the layout order and the drawing direction of every stroke.
    Original,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceOptions {
    pub method: OrderingMethod,
    /// Gaps shorter than this (meters) are flown as one continuous line.
    /// Zero disables merging.
    pub continuous_threshold: f64,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            method: OrderingMethod::NearestNeighbor,
            continuous_threshold: 0.0,
        }
    }
}

/// A scene stroke placed in the drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedStroke {
    /// Position of the stroke in the scene.
    pub source_index: usize,
    /// Whether the stroke is drawn end to start.
    pub reversed: bool,
    /// Joined to the previous stroke without an altitude change.
    pub continuous: bool,
    /// Pen-up distance from the previous stroke's end; zero for the first.
    pub travel: f64,
    /// Points in drawing order.
    pub stroke: Stroke,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeSequence {
    strokes: Vec<OrderedStroke>,
}

impl StrokeSequence {
    pub fn strokes(&self) -> &[OrderedStroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Sum of the gaps between consecutive strokes.
    pub fn travel_distance(&self) -> f64 {
        self.strokes.iter().map(|s| s.travel).sum()
    }

    /// Scene indices in drawing order.
    pub fn source_order(&self) -> Vec<usize> {
        self.strokes.iter().map(|s| s.source_index).collect()
    }
}

/// Pen-up distance of drawing `strokes` as given.
pub fn pen_up_distance(strokes: &[Stroke]) -> f64 {
    strokes
        .windows(2)
        .map(|w| w[0].last().distance(w[1].first()))
        .sum()
}

fn endpoints(stroke: &Stroke, reversed: bool) -> (Point, Point) {
    if reversed {
        (stroke.last(), stroke.first())
    } else {
        (stroke.first(), stroke.last())
    }
}

fn order_cost(strokes: &[Stroke], order: &[(usize, bool)]) -> f64 {
    order
        .windows(2)
        .map(|w| {
            let (_, from) = endpoints(&strokes[w[0].0], w[0].1);
            let (to, _) = endpoints(&strokes[w[1].0], w[1].1);
            from.distance(to)
        })
        .sum()
}

/// Greedy order: always continue with the unvisited stroke whose nearer
/// endpoint is closest to the pen. Starts with stroke 0 drawn forwards.
/// Ties go to the lower scene index, and to the forward direction.
fn nearest_neighbor_order(strokes: &[Stroke]) -> Vec<(usize, bool)> {
    let mut order = Vec::with_capacity(strokes.len());
    if strokes.is_empty() {
        return order;
    }

    let mut visited = vec![false; strokes.len()];
    visited[0] = true;
    order.push((0, false));
    let mut pen = strokes[0].last();

    for _ in 1..strokes.len() {
        let mut best: Option<(usize, bool, f64)> = None;
        for (i, stroke) in strokes.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let to_start = pen.distance(stroke.first());
            let to_end = pen.distance(stroke.last());
            let (reversed, dist) = if to_end < to_start {
                (true, to_end)
            } else {
                (false, to_start)
            };
            if best.map_or(true, |(_, _, best_dist)| dist < best_dist) {
                best = Some((i, reversed, dist));
            }
        }

        let Some((index, reversed, _)) = best else {
            break;
        };
        visited[index] = true;
        order.push((index, reversed));
        pen = endpoints(&strokes[index], reversed).1;
    }

    order
}

/// Orders the strokes of a scene and flags continuous joins.
pub fn sequence_strokes(scene: &Scene, options: &SequenceOptions) -> Result<StrokeSequence> {
    ensure_non_negative("continuous threshold", options.continuous_threshold)?;

    let strokes = scene.strokes();
    let original: Vec<(usize, bool)> = (0..strokes.len()).map(|i| (i, false)).collect();

    let order = match options.method {
        OrderingMethod::Original => original,
        OrderingMethod::NearestNeighbor => {
            let greedy = nearest_neighbor_order(strokes);
            let greedy_cost = order_cost(strokes, &greedy);
            let original_cost = order_cost(strokes, &original);
            debug!("pen-up travel: original {original_cost:.1}m, nearest neighbour {greedy_cost:.1}m");
            if original_cost < greedy_cost {
                debug!("keeping original stroke order");
                original
            } else {
                greedy
            }
        }
    };

    let mut sequence = Vec::with_capacity(order.len());
    let mut pen: Option<Point> = None;
    for (index, reversed) in order {
        let stroke = if reversed {
            strokes[index].reversed()
        } else {
            strokes[index].clone()
        };
        let travel = pen.map_or(0.0, |p| p.distance(stroke.first()));
        let continuous = pen.is_some() && travel < options.continuous_threshold;
        pen = Some(stroke.last());
        sequence.push(OrderedStroke {
            source_index: index,
            reversed,
            continuous,
            travel,
            stroke,
        });
    }

    Ok(StrokeSequence { strokes: sequence })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(xy: &[(f64, f64)]) -> Stroke {
        Stroke::from_xy(xy).unwrap()
    }

    fn scene(strokes: Vec<Stroke>) -> Scene {
        Scene::new(strokes)
    }

    /// Small deterministic generator so the property checks cover many layouts.
    fn pseudo_random_scene(seed: u64, count: usize) -> Scene {
        let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let mut next = move || {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 1000) as f64 / 10.0
        };
        scene(
            (0..count)
                .map(|_| stroke(&[(next(), next()), (next(), next())]))
                .collect(),
        )
    }

    #[test]
    fn test_empty_scene() {
        let seq = sequence_strokes(&Scene::default(), &SequenceOptions::default()).unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_picks_nearest_and_reverses() {
        let s = scene(vec![
            stroke(&[(0.0, 0.0), (0.0, 10.0)]),
            stroke(&[(50.0, 0.0), (50.0, 10.0)]),
            // its end is right next to the first stroke's end
            stroke(&[(10.0, 0.0), (1.0, 10.0)]),
        ]);
        let seq = sequence_strokes(&s, &SequenceOptions::default()).unwrap();
        assert_eq!(seq.source_order(), vec![0, 2, 1]);
        assert!(!seq.strokes()[0].reversed);
        assert!(seq.strokes()[1].reversed);
        assert_eq!(seq.strokes()[1].stroke.first(), Point::new(1.0, 10.0));
        assert!((seq.strokes()[1].travel - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tie_goes_to_lower_index() {
        let s = scene(vec![
            stroke(&[(0.0, 0.0), (0.0, 10.0)]),
            stroke(&[(5.0, 10.0), (5.0, 20.0)]),
            stroke(&[(-5.0, 10.0), (-5.0, 20.0)]),
        ]);
        let seq = sequence_strokes(&s, &SequenceOptions::default()).unwrap();
        assert_eq!(seq.source_order()[1], 1);
    }

    #[test]
    fn test_original_method_keeps_order_and_direction() {
        let s = scene(vec![
            stroke(&[(0.0, 0.0), (0.0, 10.0)]),
            stroke(&[(50.0, 0.0), (50.0, 10.0)]),
            stroke(&[(10.0, 0.0), (1.0, 10.0)]),
        ]);
        let options = SequenceOptions {
            method: OrderingMethod::Original,
            ..SequenceOptions::default()
        };
        let seq = sequence_strokes(&s, &options).unwrap();
        assert_eq!(seq.source_order(), vec![0, 1, 2]);
        assert!(seq.strokes().iter().all(|s| !s.reversed));
        assert!((seq.travel_distance() - pen_up_distance(s.strokes())).abs() < 1e-12);
    }

    #[test]
    fn test_output_is_a_permutation() {
        for seed in 0..25 {
            let s = pseudo_random_scene(seed, 3 + seed as usize % 17);
            let seq = sequence_strokes(&s, &SequenceOptions::default()).unwrap();
            let mut order = seq.source_order();
            order.sort_unstable();
            assert_eq!(order, (0..s.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_never_worse_than_original_order() {
        for seed in 0..50 {
            let s = pseudo_random_scene(seed, 2 + seed as usize % 20);
            let seq = sequence_strokes(&s, &SequenceOptions::default()).unwrap();
            assert!(seq.travel_distance() <= pen_up_distance(s.strokes()) + 1e-9);
        }
    }

    #[test]
    fn test_oriented_strokes_keep_their_points() {
        let s = pseudo_random_scene(7, 12);
        let seq = sequence_strokes(&s, &SequenceOptions::default()).unwrap();
        for ordered in seq.strokes() {
            let source = &s.strokes()[ordered.source_index];
            let expected = if ordered.reversed { source.reversed() } else { source.clone() };
            assert_eq!(ordered.stroke, expected);
        }
    }

    #[test]
    fn test_continuous_flag_uses_threshold() {
        let s = scene(vec![
            stroke(&[(0.0, 0.0), (0.0, 10.0)]),
            stroke(&[(20.0, 0.0), (20.0, 10.0)]),
        ]);
        let mut options = SequenceOptions {
            method: OrderingMethod::Original,
            continuous_threshold: 25.0,
        };
        let seq = sequence_strokes(&s, &options).unwrap();
        assert!(!seq.strokes()[0].continuous);
        assert!(seq.strokes()[1].continuous);

        options.continuous_threshold = 0.0;
        let seq = sequence_strokes(&s, &options).unwrap();
        assert!(!seq.strokes()[1].continuous);

        options.continuous_threshold = -1.0;
        assert!(sequence_strokes(&s, &options).is_err());
    }
}
