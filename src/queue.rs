//! Bounded-wait blocking FIFO queue between producer and worker
//! (spec.md §4.9), grounded on the mutex-plus-condvar blocking wait
//! strategy pattern used elsewhere in the pack for producer/consumer
//! handoffs.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// A FIFO queue of `T` with blocking pop and an optional bounded wait.
pub struct BlockingQueue<T> {
    items: Mutex<VecDeque<T>>,
    not_empty: Condvar,
    timeout: Mutex<Option<Duration>>,
}

/// Outcome of a blocking pop.
pub enum PopResult<T> {
    /// An item was available.
    Item(T),
    /// A timeout was configured and elapsed with no item available.
    TimedOut,
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BlockingQueue<T> {
    /// An empty queue with no timeout (the default: "never", per
    /// spec.md §7).
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            not_empty: Condvar::new(),
            timeout: Mutex::new(None),
        }
    }

    /// Push an item and wake one waiter.
    pub fn push_back(&self, item: T) {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.push_back(item);
        self.not_empty.notify_one();
    }

    /// Block until an item is available (or the configured timeout
    /// elapses).
    pub fn pop_front(&self) -> PopResult<T> {
        let timeout = *self.timeout.lock().unwrap_or_else(|e| e.into_inner());
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        loop {
            if let Some(item) = items.pop_front() {
                return PopResult::Item(item);
            }
            match timeout {
                None => {
                    items = self
                        .not_empty
                        .wait(items)
                        .unwrap_or_else(|e| e.into_inner());
                }
                Some(duration) => {
                    let (guard, wait_result) = self
                        .not_empty
                        .wait_timeout(items, duration)
                        .unwrap_or_else(|e| e.into_inner());
                    items = guard;
                    if wait_result.timed_out() && items.is_empty() {
                        return PopResult::TimedOut;
                    }
                }
            }
        }
    }

    /// Set (or clear, with `None`) the bounded wait used by `pop_front`.
    pub fn set_timeout(&self, duration: Option<Duration>) {
        *self.timeout.lock().unwrap_or_else(|e| e.into_inner()) = duration;
    }

    /// Drop every queued item.
    pub fn clear(&self) {
        self.items.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// Number of items currently queued.
    pub fn size(&self) -> usize {
        self.items.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// `true` if no items are queued.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn push_then_pop_returns_item_in_order() {
        let queue = BlockingQueue::new();
        queue.push_back(1);
        queue.push_back(2);
        match queue.pop_front() {
            PopResult::Item(v) => assert_eq!(v, 1),
            PopResult::TimedOut => panic!("unexpected timeout"),
        }
        assert_eq!(queue.size(), 1);
    }

    #[test]
    fn pop_blocks_until_push() {
        let queue = Arc::new(BlockingQueue::new());
        let producer = Arc::clone(&queue);
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            producer.push_back(42);
        });
        match queue.pop_front() {
            PopResult::Item(v) => assert_eq!(v, 42),
            PopResult::TimedOut => panic!("unexpected timeout"),
        }
        handle.join().unwrap();
    }

    #[test]
    fn timeout_fires_when_nothing_is_pushed() {
        let queue: BlockingQueue<i32> = BlockingQueue::new();
        queue.set_timeout(Some(Duration::from_millis(10)));
        match queue.pop_front() {
            PopResult::TimedOut => {}
            PopResult::Item(_) => panic!("expected timeout"),
        }
    }

    #[test]
    fn clear_empties_the_queue() {
        let queue = BlockingQueue::new();
        queue.push_back(1);
        queue.push_back(2);
        queue.clear();
        assert!(queue.is_empty());
    }
}
