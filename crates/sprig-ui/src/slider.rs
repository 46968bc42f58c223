use std::rc::Rc;

use sprig_core::*;

use crate::{CallbackF32, WidgetState};

pub const DEFAULT_TRACK_COLOR: Color = Color(200, 200, 200, 255);
pub const DEFAULT_KNOB_COLOR: Color = Color(100, 100, 100, 255);

fn clamp01(x: f32) -> f32 {
    x.max(0.0).min(1.0)
}

/// Horizontal drag-to-set slider.
///
/// A primary press inside starts a drag; any button release ends it, wherever
/// the pointer is. While dragging, motion and press events map the pointer's
/// x onto `[min, max]`.
pub struct Slider {
    rect: Rect,
    /// Range as configured; `min`/`max` narrow it in discrete mode.
    bounds: (f32, f32),
    min: f32,
    max: f32,
    default: f32,
    discrete: bool,
    value: f32,
    dragging: bool,
    track_color: Color,
    knob_color: Color,
    on_change: Option<CallbackF32>,
}

impl Slider {
    /// A non-finite bound is replaced by zero and a range given backwards is
    /// swapped.
    pub fn new(rect: Rect, min: f32, max: f32) -> Self {
        let finite = |b: f32| {
            if b.is_finite() {
                b
            } else {
                log::warn!("slider bound {b} is not finite, using 0");
                0.0
            }
        };
        let (min, max) = (finite(min), finite(max));
        let (min, max) = if min > max {
            log::warn!("slider range {min}..{max} is reversed, swapping");
            (max, min)
        } else {
            (min, max)
        };
        Self {
            rect,
            bounds: (min, max),
            min,
            max,
            default: min,
            discrete: false,
            value: min,
            dragging: false,
            track_color: DEFAULT_TRACK_COLOR,
            knob_color: DEFAULT_KNOB_COLOR,
            on_change: None,
        }
    }

    /// Snap to whole numbers inside the configured range.
    ///
    /// The usable range shrinks to the integers it contains. A range with no
    /// integer in it stays continuous. Turning discrete off restores the
    /// configured bounds.
    pub fn discrete(mut self, discrete: bool) -> Self {
        let (lo, hi) = self.bounds;
        if discrete {
            let (min, max) = (lo.ceil(), hi.floor());
            if min > max {
                log::warn!("slider range {lo}..{hi} holds no integer, staying continuous");
                self.discrete = false;
                self.min = lo;
                self.max = hi;
            } else {
                if min != lo || max != hi {
                    log::warn!("discrete slider range {lo}..{hi} narrowed to {min}..{max}");
                }
                self.discrete = true;
                self.min = min;
                self.max = max;
            }
        } else {
            self.discrete = false;
            self.min = lo;
            self.max = hi;
        }
        self.default = self.normalize(self.default);
        self.value = self.normalize(self.value);
        self
    }

    /// Initial value, also what [`Slider::reset`] returns to.
    pub fn default_value(mut self, v: f32) -> Self {
        self.default = self.normalize(v);
        self.value = self.default;
        self
    }

    pub fn colors(mut self, track: Color, knob: Color) -> Self {
        self.track_color = track;
        self.knob_color = knob;
        self
    }

    pub fn on_change(mut self, f: impl Fn(f32) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    fn normalize(&self, v: f32) -> f32 {
        let v = if v.is_nan() { self.min } else { v };
        let v = if self.discrete { v.round() } else { v };
        v.clamp(self.min, self.max)
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Position of the value along the track, `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        if self.max > self.min {
            clamp01((self.value - self.min) / (self.max - self.min))
        } else {
            0.0
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn draw(&self, scene: &mut Scene) {
        let r = self.rect;
        let knob_r = r.h * 0.5;
        scene.fill_rect(r, self.track_color, knob_r);
        scene.fill_circle(
            Vec2::new(r.x + self.fraction() * r.w, r.y + knob_r),
            knob_r,
            self.knob_color,
        );
    }

    pub fn handle_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::PointerDown { position, .. } => {
                if ev.is_primary_down() && self.rect.contains(*position) && !self.dragging {
                    log::debug!("slider drag start at {:?}", position);
                    self.dragging = true;
                }
                if self.dragging {
                    self.update_at(position.x);
                }
            }
            InputEvent::PointerMove { position } => {
                if self.dragging {
                    self.update_at(position.x);
                }
            }
            InputEvent::PointerUp { .. } => {
                if self.dragging {
                    log::debug!("slider drag end at {}", self.value);
                }
                self.dragging = false;
            }
            InputEvent::KeyDown(_) => {}
        }
    }

    fn update_at(&mut self, x: f32) {
        let frac = if self.rect.w > 0.0 {
            clamp01((x - self.rect.x) / self.rect.w)
        } else {
            0.0
        };
        self.value = self.normalize(self.min + frac * (self.max - self.min));
        self.notify();
    }

    fn notify(&self) {
        if let Some(cb) = &self.on_change {
            cb(self.value);
        }
    }

    pub fn state(&self) -> WidgetState {
        WidgetState::Number(self.value)
    }

    pub fn reset(&mut self) {
        self.value = self.default;
        self.dragging = false;
        self.notify();
    }
}
