use ahash::AHashMap;
use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use sprig_core::{FontFamily, FontSpec};
use unicode_segmentation::UnicodeSegmentation;

use crate::TextError;

pub const DEFAULT_FONT_PX: f32 = 12.0;
/// Line height as a multiple of the pixel size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineMetrics {
    pub width: f32,
    pub height: f32,
}

/// Measures single lines of text. Lines never contain `'\n'`.
pub trait FontMetrics {
    fn measure(&self, line: &str) -> LineMetrics;
    fn line_height(&self) -> f32;
    /// Font description handed to the scene for rasterization.
    fn spec(&self) -> FontSpec;
}

pub(crate) struct Engine {
    pub(crate) fs: FontSystem,
    pub(crate) cache: SwashCache,
    resolved: AHashMap<(FontFamily, u32), Font>,
}

static ENGINE: OnceCell<Mutex<Engine>> = OnceCell::new();

pub(crate) fn engine() -> &'static Mutex<Engine> {
    ENGINE.get_or_init(|| {
        let fs = FontSystem::new();
        log::debug!("font system loaded {} faces", fs.db().len());
        Mutex::new(Engine {
            fs,
            cache: SwashCache::new(),
            resolved: AHashMap::new(),
        })
    })
}

fn has_family(db: &fontdb::Database, name: &str) -> bool {
    db.faces()
        .any(|face| face.families.iter().any(|(n, _)| n.eq_ignore_ascii_case(name)))
}

fn attrs_for(family: &FontFamily) -> Attrs<'_> {
    let family = match family {
        FontFamily::SansSerif => Family::SansSerif,
        FontFamily::Monospace => Family::Monospace,
        FontFamily::Named(name) => Family::Name(name.as_str()),
    };
    Attrs::new().family(family)
}

/// Shape a single line (no wrapping) with the engine's font system.
pub(crate) fn shape_line(fs: &mut FontSystem, font: &Font, line: &str) -> Buffer {
    let mut buf = Buffer::new(fs, Metrics::new(font.spec.px, font.line_height));
    {
        let mut b = buf.borrow_with(fs);
        b.set_size(None, None);
        b.set_text(line, &attrs_for(&font.spec.family), Shaping::Advanced, None);
        b.shape_until_scroll(true);
    }
    buf
}

pub(crate) fn line_width(buf: &Buffer) -> f32 {
    buf.layout_runs().map(|run| run.line_w).fold(0.0, f32::max)
}

/// A font resolved against the system font database.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    spec: FontSpec,
    line_height: f32,
}

impl Font {
    /// Resolves `family` at `px` pixels.
    ///
    /// Generic families always resolve; a named family must be installed.
    /// Results are cached per `(family, px)`.
    pub fn new(family: FontFamily, px: f32) -> Result<Font, TextError> {
        if !px.is_finite() || px <= 0.0 {
            return Err(TextError::InvalidSize(px));
        }
        let key = (family, px.to_bits());
        let mut eng = engine().lock();
        if let Some(font) = eng.resolved.get(&key) {
            return Ok(font.clone());
        }
        if let FontFamily::Named(name) = &key.0 {
            if !has_family(eng.fs.db(), name) {
                return Err(TextError::FontNotFound {
                    family: name.clone(),
                });
            }
        }
        let font = Font {
            spec: FontSpec {
                family: key.0.clone(),
                px,
            },
            line_height: px * LINE_HEIGHT_FACTOR,
        };
        log::debug!("resolved font {:?} at {}px", font.spec.family, px);
        eng.resolved.insert(key, font.clone());
        Ok(font)
    }

    pub fn named(name: &str, px: f32) -> Result<Font, TextError> {
        Font::new(FontFamily::Named(name.to_string()), px)
    }

    /// Sans-serif at [`DEFAULT_FONT_PX`].
    pub fn default_font() -> Font {
        Font {
            spec: FontSpec {
                family: FontFamily::SansSerif,
                px: DEFAULT_FONT_PX,
            },
            line_height: DEFAULT_FONT_PX * LINE_HEIGHT_FACTOR,
        }
    }

    pub fn px(&self) -> f32 {
        self.spec.px
    }
}

impl FontMetrics for Font {
    fn measure(&self, line: &str) -> LineMetrics {
        let mut eng = engine().lock();
        let buf = shape_line(&mut eng.fs, self, line);
        LineMetrics {
            width: line_width(&buf),
            height: self.line_height,
        }
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn spec(&self) -> FontSpec {
        self.spec.clone()
    }
}

/// Every grapheme cluster advances by the same amount.
///
/// Deterministic and font-free; used for headless hosts and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedMetrics {
    pub advance: f32,
    pub line_height: f32,
}

impl FixedMetrics {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl FontMetrics for FixedMetrics {
    fn measure(&self, line: &str) -> LineMetrics {
        LineMetrics {
            width: line.graphemes(true).count() as f32 * self.advance,
            height: self.line_height,
        }
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn spec(&self) -> FontSpec {
        FontSpec {
            family: FontFamily::Monospace,
            px: self.line_height / LINE_HEIGHT_FACTOR,
        }
    }
}
