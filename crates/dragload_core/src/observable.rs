//! Observable channels
//!
//! `Observable<T>` is a change-detecting publish/subscribe property: the
//! explicit replacement for KVO-style property interception. The host
//! container exposes one channel per observed property (content offset,
//! content size, safe area, ...); controllers subscribe on attach and
//! unsubscribe on detach.
//!
//! Setting a value equal to the current one notifies nobody, so downstream
//! consumers never see redundant updates.
//!
//! Subscribers are invoked after the internal lock is released, which means a
//! subscriber may freely read the channel (or other channels on the same
//! host) from inside its callback.

use std::sync::{Arc, Mutex};

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Unique identifier for a channel subscription
    pub struct SubscriptionId;
}

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct State<T> {
    value: T,
    subscribers: SlotMap<SubscriptionId, Subscriber<T>>,
}

/// A change-detecting observable value.
pub struct Observable<T> {
    state: Mutex<State<T>>,
}

impl<T: Clone + PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            state: Mutex::new(State {
                value,
                subscribers: SlotMap::with_key(),
            }),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.state.lock().unwrap().value.clone()
    }

    /// Update the value, notifying subscribers only when it actually changed.
    ///
    /// Returns `true` if a change was published.
    pub fn set(&self, value: T) -> bool {
        let subscribers: Vec<Subscriber<T>> = {
            let mut state = self.state.lock().unwrap();
            if state.value == value {
                return false;
            }
            state.value = value.clone();
            state.subscribers.values().cloned().collect()
        };

        for subscriber in subscribers {
            subscriber(&value);
        }
        true
    }

    /// Register a subscriber invoked on every published change.
    pub fn subscribe<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.state
            .lock()
            .unwrap()
            .subscribers
            .insert(Arc::new(f))
    }

    /// Remove a subscriber. Returns `false` if the id was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state
            .lock()
            .unwrap()
            .subscribers
            .remove(id)
            .is_some()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().unwrap().subscribers.len()
    }
}

impl<T: Clone + PartialEq + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
