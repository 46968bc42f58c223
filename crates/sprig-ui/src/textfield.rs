use std::rc::Rc;

use sprig_core::*;
use sprig_text::{Font, FontMetrics, layout_text};
use unicode_segmentation::UnicodeSegmentation;

use crate::{CallbackText, WidgetState};

pub const TF_PADDING: f32 = 4.0;
pub const TF_LINE_SPACING: f32 = 1.0;
pub const TF_CARET_WIDTH: f32 = 1.0;

/// How far a caret movement or deletion reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    Grapheme,
    /// To the previous/next whitespace boundary.
    Word,
    /// To the previous/next line break.
    Line,
}

impl Granularity {
    pub fn from_modifiers(m: &Modifiers) -> Self {
        if m.line() {
            Granularity::Line
        } else if m.word() {
            Granularity::Word
        } else {
            Granularity::Grapheme
        }
    }
}

/// Caret location relative to the top-left of the text, before scrolling.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CaretPosition {
    pub x: f32,
    pub y: f32,
    pub height: f32,
}

/// find prev/next grapheme boundaries around a byte index
fn prev_grapheme_boundary(text: &str, byte: usize) -> usize {
    text[..byte]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_grapheme_boundary(text: &str, byte: usize) -> usize {
    text[byte..]
        .graphemes(true)
        .next()
        .map(|g| byte + g.len())
        .unwrap_or(text.len())
}

fn is_space(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

// Skip whitespace, then the word before it.
fn prev_word_boundary(text: &str, byte: usize) -> usize {
    let mut pos = byte;
    let mut in_word = false;
    for (i, g) in text[..byte].grapheme_indices(true).rev() {
        if is_space(g) {
            if in_word {
                break;
            }
        } else {
            in_word = true;
        }
        pos = i;
    }
    pos
}

fn next_word_boundary(text: &str, byte: usize) -> usize {
    let mut pos = byte;
    let mut in_word = false;
    for (i, g) in text[byte..].grapheme_indices(true) {
        if is_space(g) {
            if in_word {
                break;
            }
        } else {
            in_word = true;
        }
        pos = byte + i + g.len();
    }
    pos
}

fn line_start(text: &str, byte: usize) -> usize {
    text[..byte].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

fn line_end(text: &str, byte: usize) -> usize {
    text[byte..].find('\n').map(|i| byte + i).unwrap_or(text.len())
}

// At a line start the line break itself is the next stop.
fn prev_line_boundary(text: &str, byte: usize) -> usize {
    match line_start(text, byte) {
        s if s == byte && byte > 0 => byte - 1,
        s => s,
    }
}

fn next_line_boundary(text: &str, byte: usize) -> usize {
    match line_end(text, byte) {
        e if e == byte && byte < text.len() => byte + 1,
        e => e,
    }
}

/// Text buffer, caret and scroll offset of a text field.
///
/// `caret` is a byte offset that always sits on a grapheme-cluster boundary
/// of `text`. `scroll_offset` is the translation applied to the laid-out text
/// (never positive once the caret has been kept visible).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextFieldState {
    text: String,
    caret: usize,
    pub scroll_offset: Vec2,
}

impl TextFieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the text and puts the caret at its end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.len();
        Self {
            text,
            caret,
            scroll_offset: Vec2::ZERO,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret_index(&self) -> usize {
        self.caret
    }

    /// Moves the caret to `byte`, snapped back to a grapheme boundary.
    pub fn set_caret(&mut self, byte: usize) {
        let b = byte.min(self.text.len());
        self.caret = if b == self.text.len() {
            b
        } else {
            self.text
                .grapheme_indices(true)
                .map(|(i, _)| i)
                .take_while(|&i| i <= b)
                .last()
                .unwrap_or(0)
        };
    }

    pub fn insert_text(&mut self, text: &str) {
        self.text.insert_str(self.caret, text);
        self.caret += text.len();
    }

    fn boundary_before(&self, g: Granularity) -> usize {
        match g {
            Granularity::Grapheme => prev_grapheme_boundary(&self.text, self.caret),
            Granularity::Word => prev_word_boundary(&self.text, self.caret),
            Granularity::Line => prev_line_boundary(&self.text, self.caret),
        }
    }

    fn boundary_after(&self, g: Granularity) -> usize {
        match g {
            Granularity::Grapheme => next_grapheme_boundary(&self.text, self.caret),
            Granularity::Word => next_word_boundary(&self.text, self.caret),
            Granularity::Line => next_line_boundary(&self.text, self.caret),
        }
    }

    /// Returns whether anything was deleted.
    pub fn delete_backward(&mut self, g: Granularity) -> bool {
        let start = self.boundary_before(g);
        if start == self.caret {
            return false;
        }
        self.text.replace_range(start..self.caret, "");
        self.caret = start;
        true
    }

    pub fn delete_forward(&mut self, g: Granularity) -> bool {
        let end = self.boundary_after(g);
        if end == self.caret {
            return false;
        }
        self.text.replace_range(self.caret..end, "");
        true
    }

    pub fn move_left(&mut self, g: Granularity) {
        self.caret = self.boundary_before(g);
    }

    pub fn move_right(&mut self, g: Granularity) {
        self.caret = self.boundary_after(g);
    }

    pub fn move_line_start(&mut self) {
        self.caret = line_start(&self.text, self.caret);
    }

    pub fn move_line_end(&mut self) {
        self.caret = line_end(&self.text, self.caret);
    }

    /// Projects the caret to pixels: the lines before the caret stack up
    /// `height × line_spacing` each, the caret sits at the end of the last
    /// partial line.
    pub fn caret_position(&self, metrics: &dyn FontMetrics, line_spacing: f32) -> CaretPosition {
        let layout = layout_text(&self.text[..self.caret], metrics, line_spacing);
        layout
            .last_line()
            .map(|l| CaretPosition {
                x: l.width,
                y: l.y,
                height: l.height,
            })
            .unwrap_or_default()
    }

    /// Scrolls the least amount that puts the caret inside `viewport`.
    ///
    /// Past the far edge the caret lands on the last pixel row/column; before
    /// the near edge it lands on zero. The near edge wins when the caret is
    /// taller than the viewport.
    pub fn ensure_caret_visible(&mut self, caret: CaretPosition, viewport: Size) {
        let w = viewport.width.max(1.0);
        let h = viewport.height.max(1.0);
        let off = &mut self.scroll_offset;

        if caret.x + off.x > w - 1.0 {
            off.x = w - 1.0 - caret.x;
        }
        if caret.y + caret.height + off.y > h - 1.0 {
            off.y = h - 1.0 - caret.y - caret.height;
        }
        if caret.x + off.x < 0.0 {
            off.x = -caret.x;
        }
        if caret.y + off.y < 0.0 {
            off.y = -caret.y;
        }
    }
}

/// Editable multiline text field.
///
/// Focus follows primary presses: inside focuses, outside blurs. Escape also
/// blurs. Keys are ignored while unfocused.
pub struct Textfield {
    rect: Rect,
    state: TextFieldState,
    focused: bool,
    font: Rc<dyn FontMetrics>,
    text_color: Color,
    background: Color,
    caret_color: Color,
    padding: f32,
    line_spacing: f32,
    on_change: Option<CallbackText>,
}

impl Textfield {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            state: TextFieldState::new(),
            focused: false,
            font: Rc::new(Font::default_font()),
            text_color: Color::BLACK,
            background: Color::WHITE,
            caret_color: Color::BLACK,
            padding: TF_PADDING,
            line_spacing: TF_LINE_SPACING,
            on_change: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.state = TextFieldState::with_text(text);
        self.scroll_to_caret();
        self
    }

    pub fn font(mut self, font: impl FontMetrics + 'static) -> Self {
        self.font = Rc::new(font);
        self.scroll_to_caret();
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self.scroll_to_caret();
        self
    }

    pub fn line_spacing(mut self, s: f32) -> Self {
        self.line_spacing = s;
        self.scroll_to_caret();
        self
    }

    pub fn colors(mut self, text: Color, background: Color, caret: Color) -> Self {
        self.text_color = text;
        self.background = background;
        self.caret_color = caret;
        self
    }

    pub fn on_change(mut self, f: impl Fn(String) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    pub fn field_state(&self) -> &TextFieldState {
        &self.state
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            log::debug!("textfield focus -> {focused}");
        }
        self.focused = focused;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
        self.scroll_to_caret();
    }

    /// Interior left after padding; the caret is kept inside it.
    pub fn viewport(&self) -> Rect {
        self.rect.inset(self.padding)
    }

    pub fn caret_position(&self) -> CaretPosition {
        self.state
            .caret_position(self.font.as_ref(), self.line_spacing)
    }

    fn scroll_to_caret(&mut self) {
        let caret = self.caret_position();
        let viewport = self.viewport().size();
        self.state.ensure_caret_visible(caret, viewport);
    }

    pub fn draw(&self, scene: &mut Scene) {
        scene.fill_rect(self.rect, self.background, 0.0);
        let inner = self.viewport();
        scene.push_clip(inner);

        let off = self.state.scroll_offset;
        let origin = Vec2::new(inner.x + off.x, inner.y + off.y);
        let text = self.state.text();
        let layout = layout_text(text, self.font.as_ref(), self.line_spacing);
        let spec = self.font.spec();
        for (i, line) in layout.lines.iter().enumerate() {
            let s = layout.line_text(text, i);
            if s.is_empty() {
                continue;
            }
            scene.text(
                Vec2::new(origin.x, origin.y + line.y),
                s,
                spec.clone(),
                self.text_color,
                None,
            );
        }

        if self.focused {
            let c = self.caret_position();
            scene.fill_rect(
                Rect::new(origin.x + c.x, origin.y + c.y, TF_CARET_WIDTH, c.height),
                self.caret_color,
                0.0,
            );
        }
        scene.pop_clip();
    }

    pub fn handle_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::PointerDown {
                position,
                button: PointerButton::Primary,
            } => self.set_focused(self.rect.contains(*position)),
            InputEvent::KeyDown(key) if self.focused => {
                if self.handle_key(key) {
                    self.scroll_to_caret();
                    if let Some(cb) = &self.on_change {
                        cb(self.state.text().to_string());
                    }
                }
            }
            _ => {}
        }
    }

    /// Returns whether the key was accepted.
    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let g = Granularity::from_modifiers(&key.modifiers);
        match &key.key {
            Key::Escape => {
                self.set_focused(false);
                false
            }
            Key::Enter => {
                self.state.insert_text("\n");
                true
            }
            Key::Backspace => {
                self.state.delete_backward(g);
                true
            }
            Key::Delete => {
                self.state.delete_forward(g);
                true
            }
            Key::ArrowLeft => {
                self.state.move_left(g);
                true
            }
            Key::ArrowRight => {
                self.state.move_right(g);
                true
            }
            Key::Home => {
                self.state.move_line_start();
                true
            }
            Key::End => {
                self.state.move_line_end();
                true
            }
            // reserved
            Key::ArrowUp | Key::ArrowDown => false,
            Key::Character(c) => {
                if key.modifiers.ctrl || key.modifiers.meta {
                    return false;
                }
                let produced = key.text.clone().unwrap_or_else(|| c.to_string());
                let printable: String = produced.chars().filter(|c| !c.is_control()).collect();
                if printable.is_empty() {
                    return false;
                }
                self.state.insert_text(&printable);
                true
            }
            Key::Tab | Key::Other => false,
        }
    }

    pub fn state(&self) -> WidgetState {
        WidgetState::Text(self.state.text().to_string())
    }

    pub fn reset(&mut self) {
        self.state = TextFieldState::new();
        if let Some(cb) = &self.on_change {
            cb(String::new());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_text::FixedMetrics;

    const M: FixedMetrics = FixedMetrics {
        advance: 8.0,
        line_height: 16.0,
    };

    #[test]
    fn test_textfield_insert() {
        let mut state = TextFieldState::new();
        state.insert_text("Hello");
        assert_eq!(state.text(), "Hello");
        assert_eq!(state.caret_index(), 5);
    }

    #[test]
    fn test_backspace_across_line_break() {
        let mut state = TextFieldState::with_text("ab\ncd");
        assert_eq!(state.caret_index(), 5);
        for _ in 0..3 {
            assert!(state.delete_backward(Granularity::Grapheme));
        }
        // one grapheme per press, the line break counts as one
        assert_eq!(state.text(), "ab");
        assert_eq!(state.caret_index(), 2);
        state.delete_backward(Granularity::Grapheme);
        assert_eq!(state.text(), "a");
        assert_eq!(state.caret_index(), 1);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut state = TextFieldState::with_text("x");
        state.set_caret(0);
        assert!(!state.delete_backward(Granularity::Grapheme));
        assert!(!state.delete_backward(Granularity::Word));
        assert_eq!(state.text(), "x");
    }

    #[test]
    fn test_insert_then_delete_round_trip() {
        let mut state = TextFieldState::with_text("one\ntwo");
        state.set_caret(4);
        let before = state.clone();
        state.insert_text("héllo wörld");
        for _ in 0.."héllo wörld".chars().count() {
            state.delete_backward(Granularity::Grapheme);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_cursor_movement_clamps() {
        let mut state = TextFieldState::with_text("Hi");
        state.move_right(Granularity::Grapheme);
        assert_eq!(state.caret_index(), 2);
        state.move_left(Granularity::Grapheme);
        state.move_left(Granularity::Grapheme);
        state.move_left(Granularity::Grapheme);
        assert_eq!(state.caret_index(), 0);
    }

    #[test]
    fn test_grapheme_delete_and_move() {
        // "👍🏽" is a grapheme cluster (thumbs up + skin tone)
        let mut st = TextFieldState::with_text("A👍🏽B");
        st.move_left(Granularity::Grapheme);
        assert_eq!(st.caret_index(), "A👍🏽".len());
        st.delete_backward(Granularity::Grapheme);
        assert_eq!(st.text(), "AB");
        assert_eq!(st.caret_index(), 1);
    }

    #[test]
    fn test_set_caret_snaps_inside_cluster() {
        let mut st = TextFieldState::with_text("A👍🏽B");
        st.set_caret(3);
        assert_eq!(st.caret_index(), 1);
        st.set_caret(100);
        assert_eq!(st.caret_index(), st.text().len());
    }

    #[test]
    fn test_word_navigation() {
        let mut st = TextFieldState::with_text("hello big  world");
        st.move_left(Granularity::Word);
        assert_eq!(st.caret_index(), 11);
        st.move_left(Granularity::Word);
        assert_eq!(st.caret_index(), 6);
        st.move_right(Granularity::Word);
        assert_eq!(st.caret_index(), 9);
        st.move_right(Granularity::Word);
        assert_eq!(st.caret_index(), 16);
    }

    #[test]
    fn test_word_delete_stops_at_line_break() {
        let mut st = TextFieldState::with_text("ab cd\nef gh");
        assert!(st.delete_backward(Granularity::Word));
        assert_eq!(st.text(), "ab cd\nef ");
        assert!(st.delete_backward(Granularity::Word));
        assert_eq!(st.text(), "ab cd\n");
    }

    #[test]
    fn test_line_delete_and_move() {
        let mut st = TextFieldState::with_text("first\nsecond");
        assert!(st.delete_backward(Granularity::Line));
        assert_eq!(st.text(), "first\n");
        // at a line start the break goes next
        assert!(st.delete_backward(Granularity::Line));
        assert_eq!(st.text(), "first");

        let mut st = TextFieldState::with_text("ab\ncd");
        st.set_caret(0);
        st.move_right(Granularity::Line);
        assert_eq!(st.caret_index(), 2);
        st.move_right(Granularity::Line);
        assert_eq!(st.caret_index(), 3);
        st.move_line_end();
        assert_eq!(st.caret_index(), 5);
        st.move_line_start();
        assert_eq!(st.caret_index(), 3);
    }

    #[test]
    fn test_delete_forward() {
        let mut st = TextFieldState::with_text("abc def");
        st.set_caret(0);
        assert!(st.delete_forward(Granularity::Grapheme));
        assert_eq!(st.text(), "bc def");
        assert!(st.delete_forward(Granularity::Word));
        assert_eq!(st.text(), " def");
        st.set_caret(4);
        assert!(!st.delete_forward(Granularity::Grapheme));
    }

    #[test]
    fn test_caret_projection_multiline() {
        let st = TextFieldState::with_text("abc\nde");
        assert_eq!(
            st.caret_position(&M, 1.5),
            CaretPosition {
                x: 16.0,
                y: 24.0,
                height: 16.0
            }
        );

        let mut st = TextFieldState::with_text("abc\n");
        assert_eq!(st.caret_position(&M, 1.0).x, 0.0);
        st.set_caret(2);
        assert_eq!(
            st.caret_position(&M, 1.0),
            CaretPosition {
                x: 16.0,
                y: 0.0,
                height: 16.0
            }
        );
    }

    #[test]
    fn test_minimal_scroll() {
        let mut st = TextFieldState::new();
        let viewport = Size {
            width: 40.0,
            height: 20.0,
        };
        st.ensure_caret_visible(CaretPosition { x: 60.0, y: 0.0, height: 16.0 }, viewport);
        assert_eq!(st.scroll_offset, Vec2::new(-21.0, 0.0));
        // still visible: no change
        st.ensure_caret_visible(CaretPosition { x: 50.0, y: 0.0, height: 16.0 }, viewport);
        assert_eq!(st.scroll_offset, Vec2::new(-21.0, 0.0));
        // left of the viewport: snap to the near edge
        st.ensure_caret_visible(CaretPosition { x: 8.0, y: 16.0, height: 16.0 }, viewport);
        assert_eq!(st.scroll_offset, Vec2::new(-8.0, -13.0));
        st.ensure_caret_visible(CaretPosition { x: 8.0, y: 0.0, height: 16.0 }, viewport);
        assert_eq!(st.scroll_offset, Vec2::new(-8.0, 0.0));
    }

    #[test]
    fn test_tall_caret_keeps_top_visible() {
        let mut st = TextFieldState::new();
        st.ensure_caret_visible(
            CaretPosition { x: 0.0, y: 32.0, height: 16.0 },
            Size { width: 40.0, height: 10.0 },
        );
        assert_eq!(st.scroll_offset.y, -32.0);
    }

    fn field() -> Textfield {
        Textfield::new(Rect::new(0.0, 0.0, 48.0, 28.0)).font(M)
    }

    #[test]
    fn test_focus_follows_presses() {
        let mut tf = field();
        tf.handle_event(&InputEvent::key(Key::Character('a')));
        assert_eq!(tf.field_state().text(), "");

        tf.handle_event(&InputEvent::pointer_down(4.0, 4.0));
        assert!(tf.is_focused());
        tf.handle_event(&InputEvent::KeyDown(KeyEvent::character('a')));
        assert_eq!(tf.field_state().text(), "a");

        tf.handle_event(&InputEvent::pointer_down(100.0, 4.0));
        assert!(!tf.is_focused());

        tf.handle_event(&InputEvent::pointer_down(4.0, 4.0));
        tf.handle_event(&InputEvent::key(Key::Escape));
        assert!(!tf.is_focused());
    }

    #[test]
    fn test_keys_update_and_notify() {
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let s = seen.clone();
        let mut tf = field().on_change(move |t| s.borrow_mut().push(t));
        tf.set_focused(true);
        tf.handle_event(&InputEvent::KeyDown(KeyEvent::character('x')));
        tf.handle_event(&InputEvent::key(Key::Enter));
        tf.handle_event(&InputEvent::key(Key::ArrowUp));
        tf.handle_event(&InputEvent::key(Key::ArrowLeft));
        tf.handle_event(&InputEvent::key(Key::Backspace));
        assert_eq!(tf.field_state().text(), "\n");
        assert_eq!(tf.field_state().caret_index(), 0);
        assert_eq!(
            *seen.borrow(),
            vec!["x".to_string(), "x\n".into(), "x\n".into(), "\n".into()]
        );
    }

    #[test]
    fn test_control_text_and_shortcuts_rejected() {
        let mut tf = field();
        tf.set_focused(true);
        tf.handle_event(&InputEvent::KeyDown(KeyEvent {
            key: Key::Character('c'),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::NONE
            },
            text: Some("c".into()),
        }));
        tf.handle_event(&InputEvent::KeyDown(KeyEvent {
            key: Key::Tab,
            modifiers: Modifiers::NONE,
            text: Some("\t".into()),
        }));
        assert_eq!(tf.field_state().text(), "");
    }

    #[test]
    fn test_typing_scrolls_horizontally() {
        // viewport is 40x20 after 4px padding
        let mut tf = field();
        tf.set_focused(true);
        for c in "abcdefgh".chars() {
            tf.handle_event(&InputEvent::KeyDown(KeyEvent::character(c)));
        }
        // caret at x=64 must sit on the last column
        assert_eq!(tf.field_state().scroll_offset.x, -25.0);
        tf.handle_event(&InputEvent::key(Key::Home));
        assert_eq!(tf.field_state().scroll_offset.x, 0.0);
    }

    #[test]
    fn test_reset_clears() {
        let mut tf = field().text("hello");
        tf.reset();
        assert_eq!(tf.state(), WidgetState::Text(String::new()));
        assert_eq!(tf.field_state().scroll_offset, Vec2::ZERO);
    }
}
