// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Message observers.
//!
//! ```text
//! Message ──> [ (ObserverId, callback), ... ]   registration order
//!
//! notify(PathsStaged, {foo, foo/bar, foo/bar/baz})
//!   callback #1 (paths)
//!   callback #3 (paths)
//!   subscribe() channel ──> Notification (owned, any thread)
//! ```
//!
//! Observers stay registered until removed with `remove_message_observer`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::trace;

/// Named model events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Message {
    /// `stage_paths` completed.
    PathsStaged,
    /// `unstage_paths` completed.
    PathsUnstaged,
    /// `revert_paths` completed.
    PathsReverted,
    /// A status scan completed. Carries no paths.
    StatusUpdated,
    /// `commit` completed. Carries the committed paths.
    Committed,
}

impl Message {
    /// Every message, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::PathsStaged,
        Self::PathsUnstaged,
        Self::PathsReverted,
        Self::StatusUpdated,
        Self::Committed,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PathsStaged => "paths staged",
            Self::PathsUnstaged => "paths unstaged",
            Self::PathsReverted => "paths reverted",
            Self::StatusUpdated => "status updated",
            Self::Committed => "committed",
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle for removing an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Owned notification delivered through [`MessageBus::subscribe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: Message,
    pub paths: BTreeSet<String>,
}

type Callback = Box<dyn FnMut(Message, &BTreeSet<String>)>;

/// Maps messages to ordered observer callbacks.
#[derive(Default)]
pub struct MessageBus {
    next_id: u64,
    observers: BTreeMap<Message, Vec<(ObserverId, Callback)>>,
}

impl fmt::Debug for MessageBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: BTreeMap<Message, usize> = self
            .observers
            .iter()
            .map(|(message, list)| (*message, list.len()))
            .collect();
        f.debug_struct("MessageBus")
            .field("observers", &counts)
            .finish_non_exhaustive()
    }
}

impl MessageBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for `message`. Callbacks run in registration order.
    pub fn add_message_observer<F>(&mut self, message: Message, callback: F) -> ObserverId
    where
        F: FnMut(Message, &BTreeSet<String>) + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers
            .entry(message)
            .or_default()
            .push((id, Box::new(callback)));
        id
    }

    /// Remove a previously registered observer. Returns false if it was unknown.
    pub fn remove_message_observer(&mut self, id: ObserverId) -> bool {
        for list in self.observers.values_mut() {
            if let Some(pos) = list.iter().position(|(observer, _)| *observer == id) {
                drop(list.remove(pos));
                return true;
            }
        }
        false
    }

    /// Deliver `message` notifications over an unbounded channel.
    ///
    /// Sends to a dropped receiver are ignored.
    pub fn subscribe(&mut self, message: Message) -> flume::Receiver<Notification> {
        let (tx, rx) = flume::unbounded();
        self.add_message_observer(message, move |message, paths| {
            let _ = tx.send(Notification {
                message,
                paths: paths.clone(),
            });
        });
        rx
    }

    /// Number of observers registered for `message`.
    #[must_use]
    pub fn observer_count(&self, message: Message) -> usize {
        self.observers.get(&message).map_or(0, Vec::len)
    }

    /// Invoke every observer of `message` with `paths`.
    pub fn notify(&mut self, message: Message, paths: &BTreeSet<String>) {
        let Some(list) = self.observers.get_mut(&message) else {
            return;
        };
        trace!(%message, observers = list.len(), paths = paths.len(), "notifying");
        for (_, callback) in list.iter_mut() {
            callback(message, paths);
        }
    }
}
