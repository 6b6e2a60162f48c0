//! Fonts compiled in memory for tests.

use write_fonts::{
    read::tables::glyf::CurvePoint,
    tables::{
        cmap::Cmap,
        glyf::{Contour, GlyfLocaBuilder, SimpleGlyph},
        head::Head,
        hhea::Hhea,
        hmtx::{Hmtx, LongMetric},
        maxp::Maxp,
    },
    types::{FWord, GlyphId},
    FontBuilder,
};

fn on(x: i16, y: i16) -> CurvePoint {
    CurvePoint::on_curve(x, y)
}

fn off(x: i16, y: i16) -> CurvePoint {
    CurvePoint::off_curve(x, y)
}

fn glyph(contours: Vec<Vec<CurvePoint>>) -> SimpleGlyph {
    let mut glyph = SimpleGlyph {
        contours: contours.into_iter().map(Contour::from).collect(),
        ..Default::default()
    };
    glyph.recompute_bounding_box();
    glyph
}

/// Glyph id of `C` in [`kanji_font`].
pub const OFF_CURVE_START: u32 = 4;
/// Glyph id of `S` in [`kanji_font`].
pub const EXPLICIT_MIDPOINT: u32 = 5;

/// A font with Klee One's vertical metrics and five glyphs:
///
/// * `口` (advance 1000): a square with a square hole, lines only
/// * `D` (advance 800): lines and two quadratic segments with explicit
///   on-curve points
/// * `O` (advance 1000): one on-curve point followed by four off-curve
///   points, so every other on-curve point is implied
/// * `C` (advance 1000): a contour whose first stored point is off-curve
/// * `S` (advance 1000): an on-curve point stored exactly halfway between
///   its two neighbouring off-curve points
pub fn kanji_font() -> Vec<u8> {
    let glyphs = [
        // .notdef
        (SimpleGlyph::default(), 500),
        (
            glyph(vec![
                vec![on(100, 0), on(900, 0), on(900, 800), on(100, 800)],
                vec![on(300, 200), on(300, 600), on(700, 600), on(700, 200)],
            ]),
            1000,
        ),
        (
            glyph(vec![vec![
                on(100, 0),
                on(500, 0),
                off(900, 0),
                on(900, 400),
                off(880, 800),
                on(500, 800),
                on(100, 800),
            ]]),
            800,
        ),
        (
            glyph(vec![vec![
                on(500, 0),
                off(900, 0),
                off(900, 800),
                off(100, 800),
                off(100, 0),
            ]]),
            1000,
        ),
        (
            glyph(vec![vec![
                off(500, 0),
                on(900, 400),
                on(500, 800),
                on(100, 400),
            ]]),
            1000,
        ),
        (
            glyph(vec![vec![
                on(0, 0),
                off(100, 100),
                on(150, 100),
                off(200, 100),
                on(300, 0),
            ]]),
            1000,
        ),
    ];

    let mut glyf_builder = GlyfLocaBuilder::new();
    for (glyph, _) in &glyphs {
        glyf_builder.add_glyph(glyph).unwrap();
    }
    let (glyf, loca, loca_format) = glyf_builder.build();

    let h_metrics = glyphs
        .iter()
        .map(|(glyph, advance)| LongMetric {
            advance: *advance,
            side_bearing: glyph.bbox.x_min,
        })
        .collect();
    let num_glyphs = glyphs.len() as u16;

    let cmap = Cmap::from_mappings([
        ('C', GlyphId::new(OFF_CURVE_START)),
        ('D', GlyphId::new(2)),
        ('O', GlyphId::new(3)),
        ('S', GlyphId::new(EXPLICIT_MIDPOINT)),
        ('口', GlyphId::new(1)),
    ])
    .unwrap();

    let mut builder = FontBuilder::new();
    builder
        .add_table(&Head {
            units_per_em: 1000,
            index_to_loc_format: loca_format as i16,
            ..Default::default()
        })
        .unwrap()
        .add_table(&Hhea {
            ascender: FWord::new(1160),
            descender: FWord::new(-288),
            number_of_h_metrics: num_glyphs,
            ..Default::default()
        })
        .unwrap()
        .add_table(&Maxp {
            num_glyphs,
            max_points: Some(8),
            max_contours: Some(2),
            max_composite_points: Some(0),
            max_composite_contours: Some(0),
            max_zones: Some(1),
            max_twilight_points: Some(0),
            max_storage: Some(0),
            max_function_defs: Some(0),
            max_instruction_defs: Some(0),
            max_stack_elements: Some(0),
            max_size_of_instructions: Some(0),
            max_component_elements: Some(0),
            max_component_depth: Some(0),
        })
        .unwrap()
        .add_table(&Hmtx {
            h_metrics,
            left_side_bearings: vec![],
        })
        .unwrap()
        .add_table(&cmap)
        .unwrap()
        .add_table(&glyf)
        .unwrap()
        .add_table(&loca)
        .unwrap();
    builder.build()
}
