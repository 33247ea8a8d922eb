//! Runs every stage in order and keeps each intermediate result.

use log::info;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::font::GlyphSource;
use crate::layout::layout_text;
use crate::mission::{assemble_mission, Mission};
use crate::projection::{project_path, GeoPoint};
use crate::sequence::{pen_up_distance, sequence_strokes, StrokeSequence};
use crate::simplify::simplify_scene;
use crate::stats::{estimate_flight_time, FlightTimeEstimate, TransitionStats, DEFAULT_ACCELERATION};
use crate::stroke::Scene;
use crate::transitions::{add_transitions, LocalPath};

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Laid-out text before simplification.
    pub scene: Scene,
    pub simplified: Scene,
    pub sequence: StrokeSequence,
    pub path: LocalPath,
    pub points: Vec<GeoPoint>,
    pub mission: Mission,
    pub transitions: TransitionStats,
    pub flight_time: FlightTimeEstimate,
}

/// Turns `config.text.text` into a mission.
///
/// The first failing stage aborts the run; no partial output is returned.
pub fn run_pipeline(config: &PipelineConfig, glyphs: &dyn GlyphSource) -> Result<PipelineOutput> {
    config.validate()?;

    let scene = layout_text(&config.text.text, &config.layout_options(), glyphs)?;
    let simplified = simplify_scene(&scene, &config.simplify, config.text.letter_height)?;
    let sequence = sequence_strokes(&simplified, &config.sequence_options())?;
    let path = add_transitions(&sequence, &config.transitions)?;
    let points = project_path(&path, &config.home)?;
    let mission = assemble_mission(&config.home, &points, &config.flight)?;

    let transitions = TransitionStats::from_sequence(&sequence);
    let flight_time = estimate_flight_time(path.waypoints(), config.flight.speed, DEFAULT_ACCELERATION)?;

    info!(
        "{:?}: {} strokes, {} -> {} points, pen-up {:.1}m (unordered {:.1}m), {} mission items, ~{}",
        config.text.text,
        simplified.len(),
        scene.point_count(),
        simplified.point_count(),
        transitions.total,
        pen_up_distance(simplified.strokes()),
        mission.items().len(),
        flight_time.formatted()
    );

    Ok(PipelineOutput {
        scene,
        simplified,
        sequence,
        path,
        points,
        mission,
        transitions,
        flight_time,
    })
}
