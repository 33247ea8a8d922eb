//! Pipeline configuration, loadable from and savable to JSON.
//!
//! Every section falls back to its defaults when missing, so a config file
//! only needs the fields it changes:
//!
//! ```json
//! { "text": { "text": "HI" }, "home": { "latitude": 47.397, "longitude": 8.545 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, Error, Result};
use crate::layout::LayoutOptions;
use crate::mission::FlightParameters;
use crate::projection::HomePosition;
use crate::sequence::{OrderingMethod, SequenceOptions};
use crate::simplify::SimplifyOptions;
use crate::transitions::TransitionOptions;

/// Continuous threshold used when none is configured, as a fraction of the
/// letter height.
pub const DEFAULT_CONTINUOUS_RATIO: f64 = 0.3;

/// What to write and how large.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub text: String,
    /// Built-in style name, e.g. `block` or `block-italic`.
    pub font: String,
    /// Capital letter height in meters.
    pub letter_height: f64,
    /// Counter-clockwise rotation about home in degrees.
    pub rotation_deg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_y: Option<f64>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            text: "HELLO".to_string(),
            font: "block".to_string(),
            letter_height: 20.0,
            rotation_deg: 0.0,
            margin_x: None,
            margin_y: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingConfig {
    pub method: OrderingMethod,
    /// Meters. Unset means 30% of the letter height; zero disables merging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuous_threshold: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub text: TextConfig,
    pub simplify: SimplifyOptions,
    pub ordering: OrderingConfig,
    pub transitions: TransitionOptions,
    pub home: HomePosition,
    pub flight: FlightParameters,
}

impl PipelineConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            font: self.text.font.clone(),
            letter_height: self.text.letter_height,
            rotation_deg: self.text.rotation_deg,
            margin_x: self.text.margin_x,
            margin_y: self.text.margin_y,
        }
    }

    pub fn continuous_threshold(&self) -> f64 {
        self.ordering
            .continuous_threshold
            .unwrap_or(self.text.letter_height * DEFAULT_CONTINUOUS_RATIO)
    }

    pub fn sequence_options(&self) -> SequenceOptions {
        SequenceOptions {
            method: self.ordering.method,
            continuous_threshold: self.continuous_threshold(),
        }
    }

    /// Checks every numeric field. Stages validate again on entry; this
    /// lets callers reject a bad file before any work starts.
    pub fn validate(&self) -> Result<()> {
        self.layout_options().validate()?;
        self.simplify.validate(self.text.letter_height)?;
        ensure_non_negative("continuous threshold", self.continuous_threshold())?;
        self.transitions.validate()?;
        self.home.validate()?;
        self.flight.validate()
    }
}
