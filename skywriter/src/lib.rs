//! Text to skywriting drone missions.
//!
//! The pipeline lays out text as single-stroke glyphs, thins each stroke
//! with Douglas-Peucker, orders the strokes to cut pen-up travel, lifts the
//! vehicle between disconnected strokes, projects the local path onto the
//! WGS-84 ellipsoid around a home position, and assembles a MAVLink
//! mission that can be written as a QGroundControl plan or one of several
//! GIS formats.
//!
//! Each stage is a plain function from the previous stage's value to a new
//! one, so stages can be run and tested on their own. [`run_pipeline`] runs
//! them all from a [`PipelineConfig`].

pub mod config;
pub mod error;
pub mod export;
pub mod font;
pub mod layout;
pub mod mission;
pub mod pipeline;
pub mod projection;
pub mod sequence;
pub mod simplify;
pub mod stats;
pub mod stroke;
pub mod transitions;

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use export::{export_mission, render_mission, ExportFormat, ExportMetadata};
pub use font::{BuiltinFont, GlyphSource, GlyphStrokes};
pub use layout::{layout_text, LayoutOptions};
pub use mission::{assemble_mission, FlightParameters, Mission, MissionItem, MissionWaypoint};
pub use pipeline::{run_pipeline, PipelineOutput};
pub use projection::{project_path, GeoPoint, HomePosition};
pub use sequence::{sequence_strokes, OrderingMethod, SequenceOptions, StrokeSequence};
pub use simplify::{douglas_peucker, recommended_epsilon, simplify_scene, SimplifyOptions};
pub use stats::{estimate_flight_time, FlightTimeEstimate, TransitionStats};
pub use stroke::{Scene, Stroke};
pub use transitions::{add_transitions, GapKind, LocalPath, Role, TransitionOptions, Waypoint3D};
