use sprig_core::*;

/// Plain filled rectangle with no interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Panel {
    rect: Rect,
    color: Color,
}

impl Panel {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn draw(&self, scene: &mut Scene) {
        scene.fill_rect(self.rect, self.color, 0.0);
    }
}
