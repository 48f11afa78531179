use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type SubId = usize;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Observable value.
///
/// Writes store the value first and then notify every subscriber with a
/// snapshot, so a subscriber may call `get()` (or even `set()`) on the same
/// signal without a `RefCell` conflict.
pub struct Signal<T>(Rc<Inner<T>>);

struct Inner<T> {
    value: RefCell<T>,
    subs: RefCell<Vec<(SubId, Subscriber<T>)>>,
    next_sub: Cell<SubId>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(Inner {
            value: RefCell::new(value),
            subs: RefCell::new(Vec::new()),
            next_sub: Cell::new(0),
        }))
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let id = self.0.next_sub.get();
        self.0.next_sub.set(id + 1);
        self.0.subs.borrow_mut().push((id, Rc::new(f)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubId) -> bool {
        let mut subs = self.0.subs.borrow_mut();
        let before = subs.len();
        subs.retain(|(sid, _)| *sid != id);
        subs.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.subs.borrow().len()
    }
}

impl<T: Clone> Signal<T> {
    pub fn get(&self) -> T {
        self.0.value.borrow().clone()
    }

    pub fn set(&self, v: T) {
        *self.0.value.borrow_mut() = v;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.value.borrow_mut());
        self.notify();
    }

    fn notify(&self) {
        let subs: Vec<Subscriber<T>> = self
            .0
            .subs
            .borrow()
            .iter()
            .map(|(_, s)| s.clone())
            .collect();
        if subs.is_empty() {
            return;
        }
        let snapshot = self.get();
        for s in subs {
            s(&snapshot);
        }
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
