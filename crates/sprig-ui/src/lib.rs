//! Widgets and widget groups.
//!
//! Widgets live at caller-supplied absolute rectangles. Each frame the host
//! feeds input to a [`WidgetGroup`] and then asks it to draw into a
//! [`Scene`](sprig_core::Scene):
//!
//! ```rust
//! use sprig_core::*;
//! use sprig_ui::*;
//!
//! let group = WidgetGroup::new();
//! let toggle = group.insert(
//!     Toggle::new(Rect::new(30.0, 80.0, 70.0, 30.0), "Toggle")
//!         .on_toggle(|on| log::info!("toggled: {}", if on { "on" } else { "off" })),
//! );
//!
//! group.handle_event(&InputEvent::pointer_down(40.0, 90.0));
//! assert_eq!(toggle.borrow().state(), WidgetState::Bool(true));
//!
//! let mut scene = Scene::new();
//! group.draw(&mut scene);
//! ```
//!
//! Callbacks are optional everywhere; an unset callback is simply skipped.

use std::rc::Rc;

mod button;
mod group;
mod panel;
mod slider;
mod textbox;
pub mod textfield;
mod toggle;
mod widget;

pub use button::{Button, ButtonColors, ButtonPhase, DEFAULT_BUTTON_COLOR};
pub use group::WidgetGroup;
pub use panel::Panel;
pub use slider::{DEFAULT_KNOB_COLOR, DEFAULT_TRACK_COLOR, Slider};
pub use textbox::Textbox;
pub use textfield::{CaretPosition, Granularity, TextFieldState, Textfield};
pub use toggle::{Toggle, ToggleColors};
pub use widget::{Widget, WidgetRef, WidgetState};

pub type Callback = Rc<dyn Fn()>;
pub type CallbackBool = Rc<dyn Fn(bool)>;
pub type CallbackF32 = Rc<dyn Fn(f32)>;
pub type CallbackText = Rc<dyn Fn(String)>;
