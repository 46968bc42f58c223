use std::rc::Rc;

use sprig_core::*;
use sprig_text::{Font, FontMetrics, layout_text};

use crate::WidgetState;

/// Static text drawn at the rect's origin. Width and height of the rect are
/// not used for layout or clipping.
pub struct Textbox {
    rect: Rect,
    text: String,
    color: Color,
    background: Option<Color>,
    font: Rc<dyn FontMetrics>,
    line_spacing: f32,
}

impl Textbox {
    pub fn new(rect: Rect, text: impl Into<String>) -> Self {
        Self {
            rect,
            text: text.into(),
            color: Color::BLACK,
            background: None,
            font: Rc::new(Font::default_font()),
            line_spacing: 1.0,
        }
    }

    pub fn color(mut self, c: Color) -> Self {
        self.color = c;
        self
    }

    pub fn background(mut self, c: Color) -> Self {
        self.background = Some(c);
        self
    }

    pub fn font(mut self, font: impl FontMetrics + 'static) -> Self {
        self.font = Rc::new(font);
        self
    }

    pub fn line_spacing(mut self, s: f32) -> Self {
        self.line_spacing = s;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn draw(&self, scene: &mut Scene) {
        let layout = layout_text(&self.text, self.font.as_ref(), self.line_spacing);
        let spec = self.font.spec();
        for (i, line) in layout.lines.iter().enumerate() {
            scene.text(
                Vec2::new(self.rect.x, self.rect.y + line.y),
                layout.line_text(&self.text, i),
                spec.clone(),
                self.color,
                self.background,
            );
        }
    }

    pub fn state(&self) -> WidgetState {
        WidgetState::Text(self.text.clone())
    }
}
