use std::ops::Range;

use sprig_core::Size;

use crate::FontMetrics;

#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    /// Byte range of the line in the source text, excluding the `'\n'`.
    pub range: Range<usize>,
    /// Top of the line relative to the top of the first line.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextLayout {
    pub lines: Vec<LineLayout>,
    pub size: Size,
}

impl TextLayout {
    pub fn line_text<'a>(&self, text: &'a str, index: usize) -> &'a str {
        self.lines
            .get(index)
            .and_then(|l| text.get(l.range.clone()))
            .unwrap_or("")
    }

    pub fn last_line(&self) -> Option<&LineLayout> {
        self.lines.last()
    }
}

/// Lays out `text` split on `'\n'`.
///
/// Each line starts `height × line_spacing` below the previous one. The
/// bounding box is as wide as the widest line and ends at the bottom of the
/// last line. Empty text has a single empty line.
pub fn layout_text(text: &str, metrics: &dyn FontMetrics, line_spacing: f32) -> TextLayout {
    let mut lines = Vec::new();
    let mut start = 0usize;
    let mut y = 0.0f32;
    let mut width = 0.0f32;

    for line in text.split('\n') {
        let m = metrics.measure(line);
        lines.push(LineLayout {
            range: start..start + line.len(),
            y,
            width: m.width,
            height: m.height,
        });
        width = width.max(m.width);
        y += m.height * line_spacing;
        start += line.len() + 1;
    }

    let height = lines.last().map(|l| l.y + l.height).unwrap_or(0.0);
    TextLayout {
        lines,
        size: Size { width, height },
    }
}
