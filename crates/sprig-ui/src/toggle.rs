use std::rc::Rc;

use sprig_core::*;
use sprig_text::{Font, FontMetrics};

use crate::button::{DEFAULT_BUTTON_COLOR, draw_label_box};
use crate::{CallbackBool, WidgetState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleColors {
    pub off: Color,
    pub off_hover: Color,
    pub on: Color,
    pub on_hover: Color,
}

impl ToggleColors {
    pub fn derived(base: Color) -> Self {
        Self {
            off: base,
            off_hover: base.scale_value(HOVER_FACTOR),
            on: base.scale_value(PRESSED_FACTOR),
            on_hover: base.scale_value(ON_HOVER_FACTOR),
        }
    }

    pub fn pick(&self, is_on: bool, hovering: bool) -> Color {
        match (is_on, hovering) {
            (false, false) => self.off,
            (false, true) => self.off_hover,
            (true, false) => self.on,
            (true, true) => self.on_hover,
        }
    }
}

impl Default for ToggleColors {
    fn default() -> Self {
        Self::derived(DEFAULT_BUTTON_COLOR)
    }
}

/// On/off switch drawn like a button.
///
/// A primary press inside flips `is_on`; hover is tracked from motion and
/// press events only, so the drawn color is a function of `(is_on, hover)`.
pub struct Toggle {
    rect: Rect,
    label: String,
    font: Rc<dyn FontMetrics>,
    text_color: Color,
    colors: ToggleColors,
    is_on: bool,
    initial: bool,
    hovering: bool,
    on_toggle: Option<CallbackBool>,
}

impl Toggle {
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
            font: Rc::new(Font::default_font()),
            text_color: Color::BLACK,
            colors: ToggleColors::default(),
            is_on: false,
            initial: false,
            hovering: false,
            on_toggle: None,
        }
    }

    /// Initial state, also what [`Toggle::reset`] returns to.
    pub fn on(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self.initial = is_on;
        self
    }

    pub fn font(mut self, font: impl FontMetrics + 'static) -> Self {
        self.font = Rc::new(font);
        self
    }

    pub fn colors(mut self, colors: ToggleColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn text_color(mut self, c: Color) -> Self {
        self.text_color = c;
        self
    }

    pub fn on_toggle(mut self, f: impl Fn(bool) + 'static) -> Self {
        self.on_toggle = Some(Rc::new(f));
        self
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn current_color(&self) -> Color {
        self.colors.pick(self.is_on, self.hovering)
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
        let pos = match ev {
            InputEvent::PointerMove { position } | InputEvent::PointerDown { position, .. } => {
                *position
            }
            _ => return,
        };
        self.hovering = self.rect.contains(pos);
        if self.hovering && ev.is_primary_down() {
            self.is_on = !self.is_on;
            log::debug!("toggle {:?} -> {}", self.label, self.is_on);
            self.notify();
        }
    }

    fn notify(&self) {
        if let Some(cb) = &self.on_toggle {
            cb(self.is_on);
        }
    }

    pub fn state(&self) -> WidgetState {
        WidgetState::Bool(self.is_on)
    }

    pub fn reset(&mut self) {
        self.is_on = self.initial;
        self.hovering = false;
        self.notify();
    }
}
