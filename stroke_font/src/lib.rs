//! Built-in single-stroke font.
//!
//! Glyphs are open polylines (one per pen-down movement) in font units:
//! the cap height is [`CAP_HEIGHT`], the baseline is `y = 0` and `y` grows
//! upward. Each glyph also reports how far the pen advances before the next
//! character.

mod glyphs;

/// Height of a capital letter in font units.
pub const CAP_HEIGHT: f64 = 10.0;

/// Advance used for the space character and for characters with no outline.
pub const BLANK_ADVANCE: f64 = 8.0;

const CONDENSED_SCALE: f64 = 0.75;
const ITALIC_SHEAR: f64 = 0.2;

/// A drawing style applied on top of the base outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Block,
    Condensed,
    Italic,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Block, Style::Condensed, Style::Italic];

    /// Look up a style by its identifier, e.g. `"block-italic"`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Style::Block => "block",
            Style::Condensed => "block-condensed",
            Style::Italic => "block-italic",
        }
    }

    fn transform(&self, (x, y): (f64, f64)) -> (f64, f64) {
        match self {
            Style::Block => (x, y),
            Style::Condensed => (x * CONDENSED_SCALE, y),
            Style::Italic => (x + ITALIC_SHEAR * y, y),
        }
    }

    fn advance(&self, advance: f64) -> f64 {
        match self {
            Style::Condensed => advance * CONDENSED_SCALE,
            Style::Block | Style::Italic => advance,
        }
    }
}

/// Outline of one character in font units.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Pen-down polylines in drawing order. Empty for blank characters.
    pub strokes: Vec<Vec<(f64, f64)>>,
    /// Horizontal pen advance.
    pub advance: f64,
}

impl Glyph {
    fn blank(style: Style) -> Self {
        Self {
            strokes: Vec::new(),
            advance: style.advance(BLANK_ADVANCE),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.strokes.is_empty()
    }
}

/// Returns the outline for `ch` in the given style.
///
/// Lowercase letters use their uppercase forms. Characters without an
/// outline (including whitespace) return a blank glyph that still advances
/// the pen, so callers can treat them as spaces.
pub fn glyph(ch: char, style: Style) -> Glyph {
    let Some(data) = glyphs::lookup(ch) else {
        return Glyph::blank(style);
    };

    let strokes = data
        .strokes
        .iter()
        .map(|line| line.iter().map(|&pt| style.transform(pt)).collect())
        .collect();

    Glyph {
        strokes,
        advance: style.advance(data.advance),
    }
}

/// Whether the font has an outline for `ch`.
pub fn has_glyph(ch: char) -> bool {
    glyphs::lookup(ch).is_some()
}
