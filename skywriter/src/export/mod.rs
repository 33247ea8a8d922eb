//! Mission file writers.
//!
//! Every format is rendered from an assembled [`Mission`] alone; none of
//! them adds waypoints or changes altitudes.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::info;

use crate::error::{Error, Result};
use crate::mission::Mission;

mod csv;
mod geojson;
mod kml;
mod plan;
mod waypoint;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// QGroundControl `.plan` JSON.
    Plan,
    /// Tab-separated `QGC WPL 110` list.
    Waypoint,
    Kml,
    Csv,
    GeoJson,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Plan,
        ExportFormat::Waypoint,
        ExportFormat::Kml,
        ExportFormat::Csv,
        ExportFormat::GeoJson,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Plan => "plan",
            ExportFormat::Waypoint => "waypoint",
            ExportFormat::Kml => "kml",
            ExportFormat::Csv => "csv",
            ExportFormat::GeoJson => "geojson",
        }
    }

    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        self.name()
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| Error::ExportFormat(s.to_string()))
    }
}

/// Descriptive data some formats embed alongside the mission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportMetadata {
    /// The text the mission writes.
    pub text: Option<String>,
    /// Printed by formats with a free-form description. Left out when
    /// `None` so output is reproducible.
    pub generated_at: Option<DateTime<Utc>>,
}

impl ExportMetadata {
    pub fn for_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            generated_at: None,
        }
    }

    pub fn generated_now(mut self) -> Self {
        self.generated_at = Some(Utc::now());
        self
    }
}

/// Renders `mission` in the given format.
pub fn render_mission(mission: &Mission, format: ExportFormat, metadata: &ExportMetadata) -> Result<String> {
    match format {
        ExportFormat::Plan => plan::render(mission),
        ExportFormat::Waypoint => Ok(waypoint::render(mission)),
        ExportFormat::Kml => Ok(kml::render(mission, metadata)),
        ExportFormat::Csv => Ok(csv::render(mission)),
        ExportFormat::GeoJson => geojson::render(mission),
    }
}

/// Writes `mission` next to `path`, replacing its extension with the
/// format's own. Returns the path actually written.
pub fn export_mission(
    mission: &Mission,
    path: &Path,
    format: ExportFormat,
    metadata: &ExportMetadata,
) -> Result<PathBuf> {
    let content = render_mission(mission, format, metadata)?;
    let target = path.with_extension(format.extension());
    std::fs::write(&target, content).map_err(|source| Error::Io {
        path: target.clone(),
        source,
    })?;
    info!(
        "wrote {} mission with {} waypoints to {}",
        format,
        mission.waypoint_count(),
        target.display()
    );
    Ok(target)
}
