use cosmic_text::SwashContent;
use sprig_core::Color;

use crate::font::{engine, line_width, shape_line};
use crate::{Font, FontMetrics};

/// RGBA8 pixels, row-major, `width * height * 4` bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextBitmap {
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let p = self.pixels.get(i..i + 4)?;
        Some(Color(p[0], p[1], p[2], p[3]))
    }
}

fn blend(dst: &mut [u8], src: Color) {
    let sa = src.3 as u32;
    if sa == 0 {
        return;
    }
    let inv = 255 - sa;
    let mix = |s: u8, d: u8| ((s as u32 * sa + d as u32 * inv) / 255) as u8;
    dst[0] = mix(src.0, dst[0]);
    dst[1] = mix(src.1, dst[1]);
    dst[2] = mix(src.2, dst[2]);
    dst[3] = (sa + dst[3] as u32 * inv / 255).min(255) as u8;
}

/// Renders one line of text into a pixel buffer sized to its measured
/// extent. Without a background the buffer starts fully transparent.
pub fn rasterize_line(
    font: &Font,
    line: &str,
    color: Color,
    background: Option<Color>,
) -> TextBitmap {
    let mut guard = engine().lock();
    let eng = &mut *guard;
    let buf = shape_line(&mut eng.fs, font, line);

    let width = line_width(&buf).ceil().max(0.0) as u32;
    let height = font.line_height().ceil() as u32;
    let fill = background.unwrap_or(Color::TRANSPARENT);
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..width * height {
        pixels.extend_from_slice(&[fill.0, fill.1, fill.2, fill.3]);
    }

    for run in buf.layout_runs() {
        for g in run.glyphs {
            let phys = g.physical((0.0, run.line_y), 1.0);
            let Some(img) = eng.cache.get_image(&mut eng.fs, phys.cache_key).clone() else {
                continue;
            };
            let left = phys.x + img.placement.left;
            let top = phys.y - img.placement.top;
            let (gw, gh) = (img.placement.width as i32, img.placement.height as i32);

            for gy in 0..gh {
                for gx in 0..gw {
                    let (px, py) = (left + gx, top + gy);
                    if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                        continue;
                    }
                    let gi = (gy * gw + gx) as usize;
                    let src = match img.content {
                        SwashContent::Mask => {
                            let a = img.data.get(gi).copied().unwrap_or(0) as u32;
                            color.with_alpha((a * color.3 as u32 / 255) as u8)
                        }
                        SwashContent::Color | SwashContent::SubpixelMask => {
                            match img.data.get(gi * 4..gi * 4 + 4) {
                                Some(p) => Color(p[0], p[1], p[2], p[3]),
                                None => continue,
                            }
                        }
                    };
                    let i = ((py as u32 * width + px as u32) * 4) as usize;
                    blend(&mut pixels[i..i + 4], src);
                }
            }
        }
    }

    TextBitmap {
        width,
        height,
        pixels,
    }
}
