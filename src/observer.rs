//! Listener Registry
//!
//! Plain observer list used by the state containers to push snapshots
//! to whoever renders them.

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

/// Ordered list of listeners for values of type `T`
pub struct Listeners<T: ?Sized> {
    next_id: u32,
    entries: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
}

impl<T: ?Sized> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T: ?Sized> Listeners<T> {
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the id was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Call every listener in subscription order
    pub fn notify(&mut self, value: &T) {
        for (_, listener) in self.entries.iter_mut() {
            listener(value);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_order_and_unsubscribe() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners: Listeners<str> = Listeners::default();

        let log_a = seen.clone();
        let a = listeners.subscribe(move |v: &str| log_a.borrow_mut().push(format!("a:{}", v)));
        let log_b = seen.clone();
        listeners.subscribe(move |v: &str| log_b.borrow_mut().push(format!("b:{}", v)));

        listeners.notify("x");
        assert!(listeners.unsubscribe(a));
        assert!(!listeners.unsubscribe(a));
        listeners.notify("y");

        assert_eq!(*seen.borrow(), vec!["a:x", "b:x", "b:y"]);
        assert_eq!(listeners.len(), 1);
    }
}
