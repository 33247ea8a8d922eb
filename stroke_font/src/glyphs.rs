//! Glyph outlines on a 6x10 cell, baseline at y = 0, y pointing up.
//!
//! Every entry is a list of open polylines drawn in pen order. Closed shapes
//! (O, 0, 8) repeat their first point at the end.

pub(crate) struct GlyphData {
    pub strokes: &'static [&'static [(f64, f64)]],
    pub advance: f64,
}

const fn cell(strokes: &'static [&'static [(f64, f64)]]) -> GlyphData {
    GlyphData {
        strokes,
        advance: 8.0,
    }
}

const fn narrow(strokes: &'static [&'static [(f64, f64)]]) -> GlyphData {
    GlyphData {
        strokes,
        advance: 4.0,
    }
}

static A: GlyphData = cell(&[
    &[(0.0, 0.0), (3.0, 10.0), (6.0, 0.0)],
    &[(0.9, 3.0), (5.1, 3.0)],
]);
static B: GlyphData = cell(&[
    &[(0.0, 0.0), (0.0, 10.0), (4.0, 10.0), (5.0, 9.0), (5.0, 6.0), (4.0, 5.0), (0.0, 5.0)],
    &[(4.0, 5.0), (6.0, 4.0), (6.0, 1.0), (5.0, 0.0), (0.0, 0.0)],
]);
static C: GlyphData = cell(&[&[
    (6.0, 9.0),
    (5.0, 10.0),
    (1.0, 10.0),
    (0.0, 9.0),
    (0.0, 1.0),
    (1.0, 0.0),
    (5.0, 0.0),
    (6.0, 1.0),
]]);
static D: GlyphData = cell(&[&[
    (0.0, 0.0),
    (0.0, 10.0),
    (4.0, 10.0),
    (6.0, 8.0),
    (6.0, 2.0),
    (4.0, 0.0),
    (0.0, 0.0),
]]);
static E: GlyphData = cell(&[
    &[(6.0, 10.0), (0.0, 10.0), (0.0, 0.0), (6.0, 0.0)],
    &[(0.0, 5.0), (4.0, 5.0)],
]);
static F: GlyphData = cell(&[
    &[(6.0, 10.0), (0.0, 10.0), (0.0, 0.0)],
    &[(0.0, 5.0), (4.0, 5.0)],
]);
static G: GlyphData = cell(&[&[
    (6.0, 9.0),
    (5.0, 10.0),
    (1.0, 10.0),
    (0.0, 9.0),
    (0.0, 1.0),
    (1.0, 0.0),
    (5.0, 0.0),
    (6.0, 1.0),
    (6.0, 4.0),
    (3.0, 4.0),
]]);
static H: GlyphData = cell(&[
    &[(0.0, 0.0), (0.0, 10.0)],
    &[(6.0, 0.0), (6.0, 10.0)],
    &[(0.0, 5.0), (6.0, 5.0)],
]);
static I: GlyphData = cell(&[
    &[(1.0, 10.0), (5.0, 10.0)],
    &[(3.0, 10.0), (3.0, 0.0)],
    &[(1.0, 0.0), (5.0, 0.0)],
]);
static J: GlyphData = cell(&[&[(6.0, 10.0), (6.0, 2.0), (4.0, 0.0), (2.0, 0.0), (0.0, 2.0)]]);
static K: GlyphData = cell(&[
    &[(0.0, 0.0), (0.0, 10.0)],
    &[(6.0, 10.0), (0.0, 4.0)],
    &[(2.0, 6.0), (6.0, 0.0)],
]);
static L: GlyphData = cell(&[&[(0.0, 10.0), (0.0, 0.0), (6.0, 0.0)]]);
static M: GlyphData = cell(&[&[(0.0, 0.0), (0.0, 10.0), (3.0, 5.0), (6.0, 10.0), (6.0, 0.0)]]);
static N: GlyphData = cell(&[&[(0.0, 0.0), (0.0, 10.0), (6.0, 0.0), (6.0, 10.0)]]);
static O: GlyphData = cell(&[&[
    (1.0, 0.0),
    (0.0, 1.0),
    (0.0, 9.0),
    (1.0, 10.0),
    (5.0, 10.0),
    (6.0, 9.0),
    (6.0, 1.0),
    (5.0, 0.0),
    (1.0, 0.0),
]]);
static P: GlyphData = cell(&[&[
    (0.0, 0.0),
    (0.0, 10.0),
    (5.0, 10.0),
    (6.0, 9.0),
    (6.0, 6.0),
    (5.0, 5.0),
    (0.0, 5.0),
]]);
static Q: GlyphData = cell(&[
    &[
        (1.0, 0.0),
        (0.0, 1.0),
        (0.0, 9.0),
        (1.0, 10.0),
        (5.0, 10.0),
        (6.0, 9.0),
        (6.0, 1.0),
        (5.0, 0.0),
        (1.0, 0.0),
    ],
    &[(3.0, 3.0), (6.0, 0.0)],
]);
static R: GlyphData = cell(&[
    &[
        (0.0, 0.0),
        (0.0, 10.0),
        (5.0, 10.0),
        (6.0, 9.0),
        (6.0, 6.0),
        (5.0, 5.0),
        (0.0, 5.0),
    ],
    &[(3.0, 5.0), (6.0, 0.0)],
]);
static S: GlyphData = cell(&[&[
    (6.0, 9.0),
    (5.0, 10.0),
    (1.0, 10.0),
    (0.0, 9.0),
    (0.0, 6.0),
    (1.0, 5.0),
    (5.0, 5.0),
    (6.0, 4.0),
    (6.0, 1.0),
    (5.0, 0.0),
    (1.0, 0.0),
    (0.0, 1.0),
]]);
static T: GlyphData = cell(&[&[(0.0, 10.0), (6.0, 10.0)], &[(3.0, 10.0), (3.0, 0.0)]]);
static U: GlyphData = cell(&[&[
    (0.0, 10.0),
    (0.0, 1.0),
    (1.0, 0.0),
    (5.0, 0.0),
    (6.0, 1.0),
    (6.0, 10.0),
]]);
static V: GlyphData = cell(&[&[(0.0, 10.0), (3.0, 0.0), (6.0, 10.0)]]);
static W: GlyphData = cell(&[&[(0.0, 10.0), (1.5, 0.0), (3.0, 6.0), (4.5, 0.0), (6.0, 10.0)]]);
static X: GlyphData = cell(&[&[(0.0, 10.0), (6.0, 0.0)], &[(6.0, 10.0), (0.0, 0.0)]]);
static Y: GlyphData = cell(&[&[(0.0, 10.0), (3.0, 5.0), (6.0, 10.0)], &[(3.0, 5.0), (3.0, 0.0)]]);
static Z: GlyphData = cell(&[&[(0.0, 10.0), (6.0, 10.0), (0.0, 0.0), (6.0, 0.0)]]);

static DIGIT_0: GlyphData = cell(&[
    &[
        (1.0, 0.0),
        (0.0, 1.0),
        (0.0, 9.0),
        (1.0, 10.0),
        (5.0, 10.0),
        (6.0, 9.0),
        (6.0, 1.0),
        (5.0, 0.0),
        (1.0, 0.0),
    ],
    &[(0.5, 1.5), (5.5, 8.5)],
]);
static DIGIT_1: GlyphData = cell(&[&[(1.0, 8.0), (3.0, 10.0), (3.0, 0.0)], &[(1.0, 0.0), (5.0, 0.0)]]);
static DIGIT_2: GlyphData = cell(&[&[
    (0.0, 9.0),
    (1.0, 10.0),
    (5.0, 10.0),
    (6.0, 9.0),
    (6.0, 6.0),
    (0.0, 0.0),
    (6.0, 0.0),
]]);
static DIGIT_3: GlyphData = cell(&[
    &[(0.0, 9.0), (1.0, 10.0), (5.0, 10.0), (6.0, 9.0), (6.0, 6.0), (5.0, 5.0), (2.0, 5.0)],
    &[(5.0, 5.0), (6.0, 4.0), (6.0, 1.0), (5.0, 0.0), (1.0, 0.0), (0.0, 1.0)],
]);
static DIGIT_4: GlyphData = cell(&[&[(5.0, 0.0), (5.0, 10.0), (0.0, 3.0), (6.0, 3.0)]]);
static DIGIT_5: GlyphData = cell(&[&[
    (6.0, 10.0),
    (0.0, 10.0),
    (0.0, 5.0),
    (5.0, 5.0),
    (6.0, 4.0),
    (6.0, 1.0),
    (5.0, 0.0),
    (1.0, 0.0),
    (0.0, 1.0),
]]);
static DIGIT_6: GlyphData = cell(&[&[
    (6.0, 9.0),
    (5.0, 10.0),
    (1.0, 10.0),
    (0.0, 9.0),
    (0.0, 1.0),
    (1.0, 0.0),
    (5.0, 0.0),
    (6.0, 1.0),
    (6.0, 4.0),
    (5.0, 5.0),
    (0.0, 5.0),
]]);
static DIGIT_7: GlyphData = cell(&[&[(0.0, 10.0), (6.0, 10.0), (2.0, 0.0)]]);
static DIGIT_8: GlyphData = cell(&[&[
    (1.0, 5.0),
    (0.0, 6.0),
    (0.0, 9.0),
    (1.0, 10.0),
    (5.0, 10.0),
    (6.0, 9.0),
    (6.0, 6.0),
    (5.0, 5.0),
    (1.0, 5.0),
    (0.0, 4.0),
    (0.0, 1.0),
    (1.0, 0.0),
    (5.0, 0.0),
    (6.0, 1.0),
    (6.0, 4.0),
    (5.0, 5.0),
]]);
static DIGIT_9: GlyphData = cell(&[&[
    (6.0, 5.0),
    (1.0, 5.0),
    (0.0, 6.0),
    (0.0, 9.0),
    (1.0, 10.0),
    (5.0, 10.0),
    (6.0, 9.0),
    (6.0, 1.0),
    (5.0, 0.0),
    (1.0, 0.0),
    (0.0, 1.0),
]]);

static PERIOD: GlyphData = narrow(&[&[(1.0, 0.0), (1.0, 0.5)]]);
static COMMA: GlyphData = narrow(&[&[(1.0, 0.5), (1.0, 0.0), (0.0, -1.5)]]);
static EXCLAMATION: GlyphData = narrow(&[&[(1.0, 10.0), (1.0, 3.0)], &[(1.0, 0.5), (1.0, 0.0)]]);
static COLON: GlyphData = narrow(&[&[(1.0, 7.0), (1.0, 6.5)], &[(1.0, 0.5), (1.0, 0.0)]]);
static APOSTROPHE: GlyphData = narrow(&[&[(1.0, 10.0), (1.0, 7.0)]]);
static QUESTION: GlyphData = cell(&[
    &[(0.0, 9.0), (1.0, 10.0), (5.0, 10.0), (6.0, 9.0), (6.0, 7.0), (3.0, 5.0), (3.0, 3.0)],
    &[(3.0, 0.5), (3.0, 0.0)],
]);
static HYPHEN: GlyphData = cell(&[&[(1.0, 5.0), (5.0, 5.0)]]);
static PLUS: GlyphData = cell(&[&[(0.0, 5.0), (6.0, 5.0)], &[(3.0, 2.0), (3.0, 8.0)]]);
static SLASH: GlyphData = cell(&[&[(0.0, 0.0), (6.0, 10.0)]]);
static EQUALS: GlyphData = cell(&[&[(0.0, 6.5), (6.0, 6.5)], &[(0.0, 3.5), (6.0, 3.5)]]);

pub(crate) fn lookup(ch: char) -> Option<&'static GlyphData> {
    let data = match ch.to_ascii_uppercase() {
        'A' => &A,
        'B' => &B,
        'C' => &C,
        'D' => &D,
        'E' => &E,
        'F' => &F,
        'G' => &G,
        'H' => &H,
        'I' => &I,
        'J' => &J,
        'K' => &K,
        'L' => &L,
        'M' => &M,
        'N' => &N,
        'O' => &O,
        'P' => &P,
        'Q' => &Q,
        'R' => &R,
        'S' => &S,
        'T' => &T,
        'U' => &U,
        'V' => &V,
        'W' => &W,
        'X' => &X,
        'Y' => &Y,
        'Z' => &Z,
        '0' => &DIGIT_0,
        '1' => &DIGIT_1,
        '2' => &DIGIT_2,
        '3' => &DIGIT_3,
        '4' => &DIGIT_4,
        '5' => &DIGIT_5,
        '6' => &DIGIT_6,
        '7' => &DIGIT_7,
        '8' => &DIGIT_8,
        '9' => &DIGIT_9,
        '.' => &PERIOD,
        ',' => &COMMA,
        '!' => &EXCLAMATION,
        ':' => &COLON,
        '\'' => &APOSTROPHE,
        '?' => &QUESTION,
        '-' => &HYPHEN,
        '+' => &PLUS,
        '/' => &SLASH,
        '=' => &EQUALS,
        _ => return None,
    };
    Some(data)
}
