use std::sync::{Condvar, Mutex};

/// ## Single-slot mailbox
///
/// Hands values from the machine thread to a sink worker. The slot
/// holds at most one pending value and a newer post replaces an unread
/// one, so a slow worker always wakes to the most recent command rather
/// than a backlog.

pub struct Mailbox<T> {
    slot: Mutex<Slot<T>>,
    posted: Condvar,
}

struct Slot<T> {
    value: Option<T>,
    closed: bool,
}

impl<T> Mailbox<T> {
    pub fn new() -> Mailbox<T> {
        Mailbox {
            slot: Mutex::new(Slot {
                value: None,
                closed: false,
            }),
            posted: Condvar::new(),
        }
    }

    /// Leave a value for the worker. Last write wins.
    pub fn post(&self, value: T) {
        let mut slot = self.slot.lock().unwrap();
        slot.value = Some(value);
        self.posted.notify_one();
    }

    /// Block until a value is posted or the mailbox is closed.
    /// `None` means closed: the worker should exit.
    pub fn take(&self) -> Option<T> {
        let mut slot = self.slot.lock().unwrap();
        loop {
            if let Some(value) = slot.value.take() {
                return Some(value);
            }
            if slot.closed {
                return None;
            }
            slot = self.posted.wait(slot).unwrap();
        }
    }

    /// Wake any blocked worker and make every future `take` return
    /// `None` once the slot drains.
    pub fn close(&self) {
        let mut slot = self.slot.lock().unwrap();
        slot.closed = true;
        self.posted.notify_all();
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Mailbox<T> {
        Mailbox::new()
    }
}
