use std::cell::{Cell, RefCell};
use std::rc::Rc;

use smallvec::SmallVec;
use sprig_core::{InputEvent, Scene};

use crate::{Widget, WidgetRef};

enum Pending {
    Add(WidgetRef),
    Remove(WidgetRef),
}

/// Ordered set of widgets that draws and dispatches to every member.
///
/// Insertion order is both paint order (later members draw on top) and event
/// order. Events are never consumed: every member sees every event, so
/// overlapping widgets can all react to the same press.
///
/// `add` and `remove` called while a pass is running (from a widget
/// callback that holds the group) are queued and applied when the pass ends.
/// A callback may also start a nested `draw`, `handle_event` or `reset`; the
/// widget whose callback is running is busy and gets skipped by that nested
/// pass. A callback must not borrow the widget that is invoking it.
#[derive(Default)]
pub struct WidgetGroup {
    members: RefCell<Vec<WidgetRef>>,
    in_pass: Cell<bool>,
    pending: RefCell<Vec<Pending>>,
}

impl WidgetGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_widgets(widgets: impl IntoIterator<Item = WidgetRef>) -> Self {
        let g = Self::new();
        g.members.borrow_mut().extend(widgets);
        g
    }

    /// Appends `w`. Adding the same handle twice makes it draw and receive
    /// events twice.
    pub fn add(&self, w: WidgetRef) {
        if self.in_pass.get() {
            self.pending.borrow_mut().push(Pending::Add(w));
        } else {
            self.members.borrow_mut().push(w);
        }
    }

    /// Wraps `widget` in a handle, registers it and returns the handle.
    pub fn insert(&self, widget: impl Into<Widget>) -> WidgetRef {
        let w = widget.into().into_ref();
        self.add(w.clone());
        w
    }

    /// Removes the first occurrence of `w`; absent handles are ignored.
    pub fn remove(&self, w: &WidgetRef) {
        if self.in_pass.get() {
            self.pending.borrow_mut().push(Pending::Remove(w.clone()));
        } else {
            Self::remove_now(&mut self.members.borrow_mut(), w);
        }
    }

    fn remove_now(members: &mut Vec<WidgetRef>, w: &WidgetRef) {
        if let Some(i) = members.iter().position(|m| Rc::ptr_eq(m, w)) {
            members.remove(i);
        } else {
            log::trace!("remove: widget not in group");
        }
    }

    pub fn len(&self) -> usize {
        self.members.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.borrow().is_empty()
    }

    pub fn contains(&self, w: &WidgetRef) -> bool {
        self.members.borrow().iter().any(|m| Rc::ptr_eq(m, w))
    }

    /// Snapshot of the current members, in order.
    pub fn members(&self) -> Vec<WidgetRef> {
        self.members.borrow().clone()
    }

    pub fn draw(&self, scene: &mut Scene) {
        self.pass(|w| w.draw(scene));
    }

    pub fn handle_event(&self, ev: &InputEvent) {
        log::trace!("dispatch {:?} to {} widgets", ev, self.len());
        self.pass(|w| w.handle_event(ev));
    }

    pub fn reset(&self) {
        self.pass(|w| w.reset());
    }

    fn pass(&self, mut f: impl FnMut(&mut Widget)) {
        let snapshot: SmallVec<[WidgetRef; 16]> = self.members.borrow().iter().cloned().collect();
        let outer = !self.in_pass.replace(true);
        for w in &snapshot {
            match w.try_borrow_mut() {
                Ok(mut w) => f(&mut *w),
                Err(_) => log::trace!("skipping busy widget in nested pass"),
            }
        }
        if outer {
            self.in_pass.set(false);
            self.apply_pending();
        }
    }

    fn apply_pending(&self) {
        let ops = std::mem::take(&mut *self.pending.borrow_mut());
        if ops.is_empty() {
            return;
        }
        let mut members = self.members.borrow_mut();
        for op in ops {
            match op {
                Pending::Add(w) => members.push(w),
                Pending::Remove(w) => Self::remove_now(&mut members, &w),
            }
        }
    }
}
