// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;

/// Change announced by an [`ObservableList`].
#[derive(Clone, Debug, PartialEq)]
pub enum ListEvent<T> {
    Added(T),
    Removed(T),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(&ListEvent<T>) + Send>;

/// An ordered list that notifies subscribers of every addition and removal.
///
/// Listeners run synchronously, in subscription order, after the list has been
/// updated. Late subscribers are not told about items already present.
pub struct ObservableList<T> {
    items: Vec<T>,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_id: u64,
}

impl<T> ObservableList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ListEvent<T>) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    fn notify(&mut self, event: ListEvent<T>) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

impl<T: Clone> ObservableList<T> {
    pub fn push(&mut self, item: T) {
        self.items.push(item.clone());
        self.notify(ListEvent::Added(item));
    }

    /// Remove the item at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.notify(ListEvent::Removed(item.clone()));
        Some(item)
    }

    /// Remove the first item matching `predicate`.
    pub fn remove_first<P>(&mut self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let index = self.items.iter().position(predicate)?;
        self.remove(index)
    }

    /// Remove every item, announcing each removal in order.
    pub fn clear(&mut self) {
        for item in core::mem::take(&mut self.items) {
            self.notify(ListEvent::Removed(item));
        }
    }
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableList")
            .field("items", &self.items)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
