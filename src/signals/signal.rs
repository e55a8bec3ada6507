//! Signal - the core reactive container.

use std::cell::RefCell;
use std::rc::Rc;

/// Subscriber callback (Rc for shared ownership in closures).
///
/// Using Rc<dyn Fn> instead of Box<dyn Fn> allows snapshotting the
/// subscriber list before delivery, so callbacks may subscribe,
/// unsubscribe, or set reentrantly without aliasing the inner borrow.
type Subscriber<T> = Rc<dyn Fn(&T)>;

struct SignalInner<T> {
    value: T,
    subscribers: Vec<(u64, Subscriber<T>)>,
    next_subscriber_id: u64,
}

/// A single-value reactive container.
///
/// Cloning a `Signal` clones the handle, not the value: all clones share
/// the same slot and subscriber list. This is how a draft model and the
/// field controllers bound to it observe one source of truth.
pub struct Signal<T> {
    inner: Rc<RefCell<SignalInner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Signal<T> {
    /// Create a signal holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SignalInner {
                value,
                subscribers: Vec::new(),
                next_subscriber_id: 0,
            })),
        }
    }

    /// Get the current value. No side effect.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Store `value`, then synchronously invoke every currently-attached
    /// subscriber with it, in subscription order.
    ///
    /// The subscriber list is snapshotted before delivery: a callback that
    /// subscribes during notification will not see this value, and one that
    /// unsubscribes mid-delivery may still receive this in-flight value.
    pub fn set(&self, value: T) {
        let snapshot: Vec<Subscriber<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner
                .subscribers
                .iter()
                .map(|(_, callback)| Rc::clone(callback))
                .collect()
        };

        for callback in snapshot {
            callback(&value);
        }
    }

    /// Register `callback` for change notifications.
    ///
    /// The callback is invoked once immediately with the current value,
    /// then on every subsequent `set`. Returns a [`Subscription`] handle;
    /// call [`Subscription::unsubscribe`] to stop delivery.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Subscriber<T> = Rc::new(callback);

        // Register first so a reentrant set() inside the initial delivery
        // still reaches this subscriber.
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_subscriber_id;
            inner.next_subscriber_id += 1;
            inner.subscribers.push((id, Rc::clone(&callback)));
            id
        };

        let current = self.get();
        callback(&current);

        let inner = Rc::downgrade(&self.inner);
        Subscription {
            detach: Box::new(move || {
                if let Some(inner) = inner.upgrade() {
                    inner
                        .borrow_mut()
                        .subscribers
                        .retain(|(sub_id, _)| *sub_id != id);
                }
            }),
        }
    }
}

/// Convenience constructor, mirroring `Signal::new`.
pub fn signal<T: Clone + 'static>(value: T) -> Signal<T> {
    Signal::new(value)
}

/// Handle returned by [`Signal::subscribe`].
///
/// Holds only a weak reference to the signal, so keeping a subscription
/// alive never keeps the signal alive.
pub struct Subscription {
    detach: Box<dyn FnOnce()>,
}

impl Subscription {
    /// Stop future delivery to the associated subscriber.
    pub fn unsubscribe(self) {
        (self.detach)();
    }
}
