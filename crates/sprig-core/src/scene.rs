use crate::{Color, Rect, Vec2};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    SansSerif,
    Monospace,
    Named(String),
}

/// Which font a text node should be rasterized with.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: FontFamily,
    pub px: f32,
}

/// Renderable scene.
///
/// Widgets append nodes in paint order; a host backend replays them with its
/// own primitives (filled rect, filled circle, text blit, clipping).
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    /// `radius == 0` is a square-cornered rectangle.
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// A single line of text with its top-left corner at `position`.
    Text {
        position: Vec2,
        text: String,
        font: FontSpec,
        color: Color,
        background: Option<Color>,
    },
    PushClip {
        rect: Rect,
    },
    PopClip,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        self.nodes.push(SceneNode::Rect {
            rect,
            color,
            radius: radius.max(0.0),
        });
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.nodes.push(SceneNode::Circle {
            center,
            radius: radius.max(0.0),
            color,
        });
    }

    pub fn text(
        &mut self,
        position: Vec2,
        text: impl Into<String>,
        font: FontSpec,
        color: Color,
        background: Option<Color>,
    ) {
        self.nodes.push(SceneNode::Text {
            position,
            text: text.into(),
            font,
            color,
            background,
        });
    }

    pub fn push_clip(&mut self, rect: Rect) {
        self.nodes.push(SceneNode::PushClip { rect });
    }

    pub fn pop_clip(&mut self) {
        self.nodes.push(SceneNode::PopClip);
    }
}
