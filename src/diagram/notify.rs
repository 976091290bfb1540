//! Change notification: synchronous observer lists for committed transactions.

use crate::blocks::oracle::BlockOracle;

use super::transaction::Transaction;

/// Handle returned by subscribe, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Callback invoked after a transaction has been fully applied.
///
/// The oracle is a read-only view of the diagram as it stands after the
/// commit, so listeners can inspect neighbours for incremental redraw.
pub type ChangeListener = Box<dyn FnMut(&Transaction, &dyn BlockOracle)>;

/// Ordered list of change listeners.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<(ListenerId, ChangeListener)>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, id: ListenerId, listener: ChangeListener) {
        self.listeners.push((id, listener));
    }

    /// Remove a listener. Returns false if it was not registered here.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver `transaction` to every listener in subscription order.
    pub(crate) fn notify(&mut self, transaction: &Transaction, oracle: &dyn BlockOracle) {
        for (_, listener) in &mut self.listeners {
            listener(transaction, oracle);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::store::BlockStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        for i in 0..3 {
            let log = Rc::clone(&log);
            notifier.add(
                ListenerId(i),
                Box::new(move |_, _| log.borrow_mut().push(i)),
            );
        }

        notifier.notify(&Transaction::new(), &BlockStore::new());
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_remove() {
        let mut notifier = ChangeNotifier::new();
        notifier.add(ListenerId(1), Box::new(|_, _| {}));
        assert!(notifier.remove(ListenerId(1)));
        assert!(!notifier.remove(ListenerId(1)));
        assert!(notifier.is_empty());
    }
}
