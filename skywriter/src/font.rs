//! Glyph sources: where per-character stroke geometry comes from.

use kurbo::Point;
use log::debug;
use stroke_font::Style;

use crate::error::{Error, Result};

/// Stroke geometry of one character in font-native units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphStrokes {
    /// Open polylines; empty for whitespace and unknown characters.
    pub strokes: Vec<Vec<Point>>,
    pub advance_width: f64,
}

/// Supplies stroke outlines per character and font style.
///
/// Implementations must return an empty stroke list with a positive advance
/// for characters they cannot draw, and fail only when the font itself is
/// unknown.
pub trait GlyphSource {
    /// Height of a capital letter in font units, used to scale to meters.
    fn nominal_height(&self) -> f64;

    /// Checks that `font` names a style this source can draw.
    fn check_font(&self, font: &str) -> Result<()>;

    fn strokes_for(&self, ch: char, font: &str) -> Result<GlyphStrokes>;
}

/// The single-stroke block font shipped with the `stroke_font` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFont;

impl BuiltinFont {
    fn style(font: &str) -> Result<Style> {
        Style::from_name(font).ok_or_else(|| Error::GlyphLookup {
            font: font.to_string(),
        })
    }

    /// Whether `ch` has an outline. Other characters are laid out as blanks.
    pub fn can_draw(ch: char) -> bool {
        stroke_font::has_glyph(ch)
    }

    /// Identifiers accepted as `font`.
    pub fn available_fonts() -> Vec<&'static str> {
        Style::ALL.iter().map(Style::name).collect()
    }
}

impl GlyphSource for BuiltinFont {
    fn nominal_height(&self) -> f64 {
        stroke_font::CAP_HEIGHT
    }

    fn check_font(&self, font: &str) -> Result<()> {
        Self::style(font).map(|_| ())
    }

    fn strokes_for(&self, ch: char, font: &str) -> Result<GlyphStrokes> {
        let style = Self::style(font)?;
        if !ch.is_whitespace() && !Self::can_draw(ch) {
            debug!("no outline for {ch:?} in {font}, leaving a blank");
        }
        let glyph = stroke_font::glyph(ch, style);
        Ok(GlyphStrokes {
            strokes: glyph
                .strokes
                .into_iter()
                .map(|line| line.into_iter().map(Point::from).collect())
                .collect(),
            advance_width: glyph.advance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_font_is_a_lookup_error() {
        let err = BuiltinFont.strokes_for('A', "futural").unwrap_err();
        assert!(matches!(err, Error::GlyphLookup { font } if font == "futural"));
        assert!(BuiltinFont.check_font("nope").is_err());
    }

    #[test]
    fn test_unknown_character_acts_as_space() {
        let g = BuiltinFont.strokes_for('§', "block").unwrap();
        assert!(g.strokes.is_empty());
        assert!(g.advance_width > 0.0);
    }

    #[test]
    fn test_letter_has_strokes() {
        let g = BuiltinFont.strokes_for('H', "block").unwrap();
        assert_eq!(g.strokes.len(), 3);
        assert_eq!(g.strokes[0], vec![Point::new(0.0, 0.0), Point::new(0.0, 10.0)]);
    }

    #[test]
    fn test_available_fonts() {
        let fonts = BuiltinFont::available_fonts();
        assert!(fonts.contains(&"block"));
        assert!(fonts.contains(&"block-condensed"));
        assert!(fonts.contains(&"block-italic"));
    }

    #[test]
    fn test_can_draw_matches_outlines() {
        for ch in ['A', 'h', '7', '?'] {
            assert!(BuiltinFont::can_draw(ch));
            assert!(!BuiltinFont.strokes_for(ch, "block").unwrap().strokes.is_empty());
        }
        for ch in [' ', '§', 'é'] {
            assert!(!BuiltinFont::can_draw(ch));
            assert!(BuiltinFont.strokes_for(ch, "block").unwrap().strokes.is_empty());
        }
    }
}
