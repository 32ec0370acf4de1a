use super::state::ScheduleState;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&ScheduleState)>;

/// Callbacks invoked synchronously after every state change, in subscription order.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ScheduleState) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub_id, _)| *sub_id != id);
        self.callbacks.len() != before
    }

    pub fn notify(&mut self, state: &ScheduleState) {
        for (_, callback) in self.callbacks.iter_mut() {
            callback(state);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    pub fn clear(&mut self) {
        self.callbacks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_subscription_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();

        let first = Rc::clone(&calls);
        subscribers.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&calls);
        subscribers.subscribe(move |_| second.borrow_mut().push("second"));

        subscribers.notify(&ScheduleState::default());

        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut subscribers = Subscribers::default();

        let counter = Rc::clone(&count);
        let id = subscribers.subscribe(move |_| *counter.borrow_mut() += 1);

        subscribers.notify(&ScheduleState::default());
        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id), "second unsubscribe is a no-op");
        subscribers.notify(&ScheduleState::default());

        assert_eq!(*count.borrow(), 1);
        assert!(subscribers.is_empty());
    }
}
