use std::rc::Rc;

use sprig_core::*;
use sprig_text::{Font, FontMetrics};

use crate::{Callback, WidgetState};

pub const DEFAULT_BUTTON_COLOR: Color = Color(200, 200, 200, 255);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonColors {
    pub base: Color,
    pub hover: Color,
    pub pressed: Color,
}

impl ButtonColors {
    /// Hover and pressed variants darkened from `base`.
    pub fn derived(base: Color) -> Self {
        Self {
            base,
            hover: base.scale_value(HOVER_FACTOR),
            pressed: base.scale_value(PRESSED_FACTOR),
        }
    }
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self::derived(DEFAULT_BUTTON_COLOR)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonPhase {
    Idle,
    Hover,
    Pressed,
}

/// `min(w, h) / 3`, whole pixels.
pub(crate) fn corner_radius(rect: Rect) -> f32 {
    (rect.w.min(rect.h) / 3.0).floor()
}

/// Rounded background with `label` centered on it.
pub(crate) fn draw_label_box(
    scene: &mut Scene,
    rect: Rect,
    background: Color,
    label: &str,
    font: &dyn FontMetrics,
    text_color: Color,
) {
    scene.fill_rect(rect, background, corner_radius(rect));
    if label.is_empty() {
        return;
    }
    let m = font.measure(label);
    let c = rect.center();
    scene.text(
        Vec2::new(c.x - m.width * 0.5, c.y - m.height * 0.5),
        label,
        font.spec(),
        text_color,
        None,
    );
}

/// Push button that activates on press.
///
/// Every pointer event recomputes the phase: outside the rect is `Idle`,
/// inside with the primary button held is `Pressed`, otherwise `Hover`.
pub struct Button {
    rect: Rect,
    label: String,
    font: Rc<dyn FontMetrics>,
    text_color: Color,
    colors: ButtonColors,
    phase: ButtonPhase,
    primary_held: bool,
    on_click: Option<Callback>,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
            font: Rc::new(Font::default_font()),
            text_color: Color::BLACK,
            colors: ButtonColors::default(),
            phase: ButtonPhase::Idle,
            primary_held: false,
            on_click: None,
        }
    }

    pub fn font(mut self, font: impl FontMetrics + 'static) -> Self {
        self.font = Rc::new(font);
        self
    }

    pub fn colors(mut self, colors: ButtonColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn text_color(mut self, c: Color) -> Self {
        self.text_color = c;
        self
    }

    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }

    pub fn phase(&self) -> ButtonPhase {
        self.phase
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn current_color(&self) -> Color {
        match self.phase {
            ButtonPhase::Idle => self.colors.base,
            ButtonPhase::Hover => self.colors.hover,
            ButtonPhase::Pressed => self.colors.pressed,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn draw(&self, scene: &mut Scene) {
        draw_label_box(
            scene,
            self.rect,
            self.current_color(),
            &self.label,
            self.font.as_ref(),
            self.text_color,
        );
    }

    pub fn handle_event(&mut self, ev: &InputEvent) {
        let Some(pos) = ev.position() else {
            return;
        };
        if ev.is_primary_down() {
            self.primary_held = true;
        } else if ev.is_primary_up() {
            self.primary_held = false;
        }

        let inside = self.rect.contains(pos);
        self.phase = if !inside {
            ButtonPhase::Idle
        } else if self.primary_held {
            ButtonPhase::Pressed
        } else {
            ButtonPhase::Hover
        };

        if inside && ev.is_primary_down() {
            log::debug!("button {:?} clicked", self.label);
            if let Some(cb) = &self.on_click {
                cb();
            }
        }
    }

    pub fn state(&self) -> WidgetState {
        WidgetState::None
    }

    pub fn reset(&mut self) {
        self.phase = ButtonPhase::Idle;
        self.primary_held = false;
    }
}
