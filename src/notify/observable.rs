// SPDX-License-Identifier: MPL-2.0
//! Observable value holder with subscriber callbacks.
//!
//! Single-threaded by design: the viewer mutates state only on the UI
//! event loop, so listeners are plain `FnMut` callbacks behind
//! `Rc`/`RefCell`, stored as `Weak` references and pruned lazily. The
//! discipline is mutate-then-notify: the new value is stored before any
//! listener runs, and listeners must not emit on the channel that is
//! currently notifying them.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = RefCell<Box<dyn FnMut(&T)>>;

/// A shared value that notifies subscribers of every change, in
/// registration order, and replays the current value to new subscribers.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

struct Inner<T> {
    value: T,
    listeners: Vec<Weak<Listener<T>>>,
    closed: bool,
}

/// RAII guard for an [`Observable`] subscription.
///
/// The listener stays attached for as long as this guard is alive;
/// dropping it detaches the listener before the next emission.
#[must_use = "dropping the subscription detaches the listener"]
pub struct Subscription<T> {
    _listener: Rc<Listener<T>>,
}

impl<T: Clone> Observable<T> {
    /// Creates an observable holding `initial`.
    ///
    /// The channel always carries a value, so a subscriber attached at any
    /// point observes a defined state immediately.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value: initial,
                listeners: Vec::new(),
                closed: false,
            })),
        }
    }

    /// Attaches a listener and immediately replays the current value to it.
    ///
    /// On a closed channel the replay still happens but no further values
    /// will ever be delivered.
    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) -> Subscription<T> {
        let listener: Rc<Listener<T>> = Rc::new(RefCell::new(Box::new(listener)));

        let replay = {
            let mut inner = self.inner.borrow_mut();
            if !inner.closed {
                inner.listeners.push(Rc::downgrade(&listener));
            }
            inner.value.clone()
        };
        // Replay outside the inner borrow so the callback may read the channel.
        (listener.borrow_mut())(&replay);

        Subscription {
            _listener: listener,
        }
    }

    /// Stores `value`, then notifies every live listener in registration
    /// order. Emissions on a closed channel are dropped.
    pub fn set(&self, value: T) {
        let snapshot = {
            let mut inner = self.inner.borrow_mut();
            if inner.closed {
                return;
            }
            inner.value = value.clone();
            inner.listeners.retain(|weak| weak.strong_count() > 0);
            inner.listeners.clone()
        };

        for weak in snapshot {
            if let Some(listener) = weak.upgrade() {
                (listener.borrow_mut())(&value);
            }
        }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Synchronously detaches every listener and refuses further emissions.
    ///
    /// After `close()` no callback can fire, even if its subscription guard
    /// is still alive.
    pub fn close(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.closed = true;
        inner.listeners.clear();
    }

    /// Whether the channel has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.borrow().closed
    }

    /// Number of currently attached listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        let mut inner = self.inner.borrow_mut();
        inner.listeners.retain(|weak| weak.strong_count() > 0);
        inner.listeners.len()
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("listeners", &inner.listeners.len())
            .field("closed", &inner.closed)
            .finish()
    }
}
