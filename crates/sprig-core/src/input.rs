use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool, // Cmd on Mac, Win key on Windows
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Ctrl or Alt: move/delete by word.
    pub fn word(&self) -> bool {
        self.ctrl || self.alt
    }

    /// Meta: move/delete to the line boundary.
    pub fn line(&self) -> bool {
        self.meta
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    /// Characters produced by the key press, if any.
    pub text: Option<String>,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
            text: None,
        }
    }

    /// A key press that produced `c`.
    pub fn character(c: char) -> Self {
        Self {
            key: Key::Character(c),
            modifiers: Modifiers::NONE,
            text: Some(c.to_string()),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove {
        position: Vec2,
    },
    PointerDown {
        position: Vec2,
        button: PointerButton,
    },
    PointerUp {
        position: Vec2,
        button: PointerButton,
    },
    KeyDown(KeyEvent),
}

impl InputEvent {
    pub fn pointer_move(x: f32, y: f32) -> Self {
        InputEvent::PointerMove {
            position: Vec2 { x, y },
        }
    }

    pub fn pointer_down(x: f32, y: f32) -> Self {
        InputEvent::PointerDown {
            position: Vec2 { x, y },
            button: PointerButton::Primary,
        }
    }

    pub fn pointer_up(x: f32, y: f32) -> Self {
        InputEvent::PointerUp {
            position: Vec2 { x, y },
            button: PointerButton::Primary,
        }
    }

    pub fn key(key: Key) -> Self {
        InputEvent::KeyDown(KeyEvent::new(key))
    }

    /// Pointer position for pointer events, `None` for keys.
    pub fn position(&self) -> Option<Vec2> {
        match self {
            InputEvent::PointerMove { position }
            | InputEvent::PointerDown { position, .. }
            | InputEvent::PointerUp { position, .. } => Some(*position),
            InputEvent::KeyDown(_) => None,
        }
    }

    pub fn is_primary_down(&self) -> bool {
        matches!(
            self,
            InputEvent::PointerDown {
                button: PointerButton::Primary,
                ..
            }
        )
    }

    pub fn is_primary_up(&self) -> bool {
        matches!(
            self,
            InputEvent::PointerUp {
                button: PointerButton::Primary,
                ..
            }
        )
    }
}
