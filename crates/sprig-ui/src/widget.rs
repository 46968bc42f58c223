use std::cell::RefCell;
use std::rc::Rc;

use sprig_core::*;

use crate::{Button, Panel, Slider, Textbox, Textfield, Toggle};

/// Shared handle to a widget; the group and the caller both hold one.
pub type WidgetRef = Rc<RefCell<Widget>>;

/// What `Widget::state` reports; the shape depends on the widget kind.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetState {
    None,
    Bool(bool),
    Number(f32),
    Text(String),
}

/// Closed set of widget kinds.
///
/// Every variant supports the same capabilities: draw, handle an event,
/// report state, reset and move.
pub enum Widget {
    Panel(Panel),
    Textbox(Textbox),
    Button(Button),
    Toggle(Toggle),
    Slider(Slider),
    Textfield(Textfield),
}

macro_rules! each {
    ($self:expr, $w:ident => $body:expr) => {
        match $self {
            Widget::Panel($w) => $body,
            Widget::Textbox($w) => $body,
            Widget::Button($w) => $body,
            Widget::Toggle($w) => $body,
            Widget::Slider($w) => $body,
            Widget::Textfield($w) => $body,
        }
    };
}

impl Widget {
    pub fn draw(&self, scene: &mut Scene) {
        each!(self, w => w.draw(scene))
    }

    pub fn handle_event(&mut self, ev: &InputEvent) {
        match self {
            Widget::Panel(_) | Widget::Textbox(_) => {}
            Widget::Button(w) => w.handle_event(ev),
            Widget::Toggle(w) => w.handle_event(ev),
            Widget::Slider(w) => w.handle_event(ev),
            Widget::Textfield(w) => w.handle_event(ev),
        }
    }

    pub fn state(&self) -> WidgetState {
        match self {
            Widget::Panel(_) => WidgetState::None,
            Widget::Textbox(w) => w.state(),
            Widget::Button(w) => w.state(),
            Widget::Toggle(w) => w.state(),
            Widget::Slider(w) => w.state(),
            Widget::Textfield(w) => w.state(),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Widget::Panel(_) | Widget::Textbox(_) => {}
            Widget::Button(w) => w.reset(),
            Widget::Toggle(w) => w.reset(),
            Widget::Slider(w) => w.reset(),
            Widget::Textfield(w) => w.reset(),
        }
    }

    pub fn rect(&self) -> Rect {
        each!(self, w => w.rect())
    }

    /// Replaces the components present in `patch`.
    pub fn set_rect(&mut self, patch: RectPatch) {
        let r = self.rect().patch(patch);
        each!(self, w => w.set_rect(r))
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        let r = self.rect().translate(dx, dy);
        each!(self, w => w.set_rect(r))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Widget::Panel(_) => "panel",
            Widget::Textbox(_) => "textbox",
            Widget::Button(_) => "button",
            Widget::Toggle(_) => "toggle",
            Widget::Slider(_) => "slider",
            Widget::Textfield(_) => "textfield",
        }
    }

    pub fn into_ref(self) -> WidgetRef {
        Rc::new(RefCell::new(self))
    }
}

macro_rules! impl_from {
    ($($t:ident),*) => {
        $(impl From<$t> for Widget {
            fn from(w: $t) -> Self {
                Widget::$t(w)
            }
        })*
    };
}

impl_from!(Panel, Textbox, Button, Toggle, Slider, Textfield);
