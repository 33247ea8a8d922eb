//! Glyph layout: places every character's strokes into one local scene.

use kurbo::{Affine, Point, Vec2};
use log::debug;

use crate::error::{ensure_finite, ensure_positive, Result};
use crate::font::GlyphSource;
use crate::stroke::{Scene, Stroke};

/// Fraction of the letter height used as the default home margin.
pub const DEFAULT_MARGIN_RATIO: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub font: String,
    /// Height of a capital letter in meters.
    pub letter_height: f64,
    /// Counter-clockwise rotation of the whole text about home, in degrees.
    pub rotation_deg: f64,
    /// Distance east of home to the left edge of the text.
    pub margin_x: Option<f64>,
    /// Distance north of home to the bottom edge of the text.
    pub margin_y: Option<f64>,
}

impl LayoutOptions {
    pub fn new(font: impl Into<String>, letter_height: f64) -> Self {
        Self {
            font: font.into(),
            letter_height,
            rotation_deg: 0.0,
            margin_x: None,
            margin_y: None,
        }
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_deg = degrees;
        self
    }

    pub fn with_margins(mut self, x: f64, y: f64) -> Self {
        self.margin_x = Some(x);
        self.margin_y = Some(y);
        self
    }

    pub fn margins(&self) -> (f64, f64) {
        let default = self.letter_height * DEFAULT_MARGIN_RATIO;
        (
            self.margin_x.unwrap_or(default),
            self.margin_y.unwrap_or(default),
        )
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("letter height", self.letter_height)?;
        ensure_finite("rotation", self.rotation_deg)?;
        let (mx, my) = self.margins();
        ensure_finite("horizontal margin", mx)?;
        ensure_finite("vertical margin", my)
    }
}

/// Lays out `text` left to right and returns the positioned scene.
///
/// Each glyph is scaled so the font's nominal height equals the letter
/// height and shifted by the accumulated advance widths. The finished line
/// is moved so its bounding box starts at the configured margins, then the
/// whole line is rotated about home as one rigid body.
pub fn layout_text(text: &str, options: &LayoutOptions, source: &dyn GlyphSource) -> Result<Scene> {
    options.validate()?;
    source.check_font(&options.font)?;
    ensure_positive("nominal glyph height", source.nominal_height())?;

    let scale = options.letter_height / source.nominal_height();
    let mut pen_x = 0.0;
    let mut strokes = Vec::new();

    for ch in text.chars() {
        let glyph = source.strokes_for(ch, &options.font)?;
        ensure_positive("advance width", glyph.advance_width)?;
        let placement = Affine::translate((pen_x, 0.0)) * Affine::scale(scale);

        for line in glyph.strokes {
            if line.len() < 2 {
                debug!("skipping degenerate stroke in glyph {ch:?}");
                continue;
            }
            let placed: Vec<Point> = line.into_iter().map(|p| placement * p).collect();
            strokes.push(Stroke::new(placed)?);
        }
        pen_x += glyph.advance_width * scale;
    }

    let scene = Scene::new(strokes);
    let Some(bounds) = scene.bounds() else {
        debug!("text {text:?} produced no strokes");
        return Ok(scene);
    };

    let (margin_x, margin_y) = options.margins();
    let anchored = scene.translated(Vec2::new(margin_x - bounds.x0, margin_y - bounds.y0));
    debug!(
        "laid out {} strokes ({} points), {:.1}m x {:.1}m",
        anchored.len(),
        anchored.point_count(),
        bounds.width(),
        bounds.height()
    );

    Ok(anchored.rotated(options.rotation_deg))
}
