//! Change notification with replay of the latest value
//!
//! A [`SnapshotChannel`] owns the current value. New observers are called
//! with that value as soon as they subscribe, then again after every
//! publish. Delivery is synchronous and follows subscription order.

use std::fmt;

/// Callback receiving the current snapshot
pub type Observer<T> = Box<dyn FnMut(&T)>;

/// Handle returned by [`SnapshotChannel::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Holds a value and pushes it to observers whenever it changes
pub struct SnapshotChannel<T> {
    value: T,
    observers: Vec<(SubscriptionId, Observer<T>)>,
    next_id: u64,
}

impl<T> SnapshotChannel<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Register an observer; it immediately receives the current value
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let mut observer: Observer<T> = Box::new(observer);
        observer(&self.value);
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Replace the value and notify every observer
    pub fn publish(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Mutate the value in place, then notify every observer
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value);
        self.notify();
        result
    }

    fn notify(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.value);
        }
    }
}

impl<T: Default> Default for SnapshotChannel<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for SnapshotChannel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotChannel")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}
