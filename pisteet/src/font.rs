//! Loading fonts and pulling glyph outlines and metrics from them.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use skrifa::{
    charmap::Charmap,
    metrics::GlyphMetrics,
    outline::{DrawError, DrawSettings},
    prelude::{LocationRef, Size},
    raw::{tables::glyf::Glyph, FileRef, FontRef, TableProvider},
    GlyphId, MetadataProvider, OutlineGlyphCollection,
};

use crate::{
    error::Error,
    extract::GlyphPoints,
    glyf::simple_glyph_commands,
    layout::{FontMetrics, Layout, Transform},
    path::PathCommand,
    pen::RecordingPen,
};

/// A memory mapped font file, possibly a collection.
pub struct FontFile {
    path: PathBuf,
    data: memmap2::Mmap,
    count: usize,
}

impl FontFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_owned();
        let file = File::open(&path).map_err(|e| Error::Io(path.clone(), e))?;
        // SAFETY: the mapping is read only and lives as long as `self`; the
        // file is assumed not to be truncated while mapped.
        let data =
            unsafe { memmap2::Mmap::map(&file) }.map_err(|e| Error::Io(path.clone(), e))?;
        let count = match FileRef::new(data.as_ref())? {
            FileRef::Font(_) => 1,
            FileRef::Collection(collection) => collection.len() as usize,
        };
        Ok(Self { path, data, count })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of fonts in the file.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the font at `index`, which must be 0 unless the file is a
    /// collection.
    pub fn font(&self, index: usize) -> Result<GlyphFont<'_>, Error> {
        GlyphFont::new(FontRef::from_index(self.data.as_ref(), index as u32)?)
    }
}

/// A font prepared for glyph lookup, at its default variation location.
pub struct GlyphFont<'a> {
    font: FontRef<'a>,
    charmap: Charmap<'a>,
    outlines: OutlineGlyphCollection<'a>,
    glyph_metrics: GlyphMetrics<'a>,
    units_per_em: u16,
    ascent: i16,
    descent: i16,
}

impl<'a> GlyphFont<'a> {
    pub fn new(font: FontRef<'a>) -> Result<Self, Error> {
        let units_per_em = font.head()?.units_per_em();
        let hhea = font.hhea()?;
        Ok(Self {
            charmap: font.charmap(),
            outlines: font.outline_glyphs(),
            glyph_metrics: font.glyph_metrics(Size::unscaled(), LocationRef::default()),
            units_per_em,
            ascent: hhea.ascender().to_i16(),
            descent: hhea.descender().to_i16(),
            font,
        })
    }

    /// Parses a single font from raw bytes.
    pub fn from_data(data: &'a [u8]) -> Result<Self, Error> {
        Self::new(FontRef::new(data)?)
    }

    /// Maps a character to a glyph through the font's best Unicode cmap
    /// subtable.
    pub fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        self.charmap.map(ch)
    }

    /// Returns the metrics that position `glyph_id`, in font units.
    pub fn metrics(&self, glyph_id: GlyphId) -> Result<FontMetrics, Error> {
        let advance_width = self
            .glyph_metrics
            .advance_width(glyph_id)
            .ok_or(Error::MissingAdvance(glyph_id))?;
        Ok(FontMetrics {
            units_per_em: self.units_per_em,
            ascent: self.ascent as f64,
            descent: self.descent as f64,
            advance_width: advance_width as f64,
        })
    }

    /// Returns the unscaled drawing commands for `glyph_id`.
    ///
    /// Simple `glyf` glyphs are read point by point, with each run of
    /// off-curve points kept as one quad run and the glyph shifted so that
    /// its `xMin` sits at the `hmtx` left side bearing. Composite glyphs and
    /// other outline formats are drawn through skrifa.
    pub fn commands(&self, glyph_id: GlyphId) -> Result<Vec<PathCommand>, Error> {
        if let Some(Glyph::Simple(glyph)) = self.glyf_glyph(glyph_id)? {
            let lsb = self
                .glyph_metrics
                .left_side_bearing(glyph_id)
                .unwrap_or(glyph.x_min() as f32);
            let x_shift = lsb as i32 - glyph.x_min() as i32;
            return Ok(simple_glyph_commands(&glyph, x_shift)?);
        }
        let outline = self
            .outlines
            .get(glyph_id)
            .ok_or(DrawError::GlyphNotFound(glyph_id))?;
        let mut pen = RecordingPen::new();
        outline.draw(
            DrawSettings::unhinted(Size::unscaled(), LocationRef::default()),
            &mut pen,
        )?;
        Ok(pen.into_commands())
    }

    /// Returns the `glyf` entry for `glyph_id`, or `None` for fonts without
    /// `glyf` and `loca` tables and for empty glyphs.
    fn glyf_glyph(&self, glyph_id: GlyphId) -> Result<Option<Glyph<'a>>, Error> {
        let (Ok(loca), Ok(glyf)) = (self.font.loca(None), self.font.glyf()) else {
            return Ok(None);
        };
        Ok(loca.get_glyf(glyph_id, &glyf)?)
    }

    /// Extracts the outline of `ch` in container pixels.
    ///
    /// Returns `Ok(None)` when the font does not map `ch`.
    pub fn extract(&self, ch: char, layout: &Layout) -> Result<Option<GlyphPoints>, Error> {
        let Some(glyph_id) = self.glyph_id(ch) else {
            log::debug!("'{ch}' (U+{:04X}) is not mapped", ch as u32);
            return Ok(None);
        };
        let metrics = self.metrics(glyph_id)?;
        let transform = Transform::new(&metrics, layout);
        log::debug!("'{ch}' -> glyph {glyph_id}, {metrics:?}, {transform:?}");
        let commands = self.commands(glyph_id)?;
        Ok(Some(GlyphPoints::new(ch, &commands, &transform, layout)))
    }
}
