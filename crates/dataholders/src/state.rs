use futures::StreamExt;
use shared::domain::HolderKind;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::{DataHolder, HolderStream};

/// Holder that always has a current value. Updates equal to the current
/// value are conflated away and never reach subscribers.
#[derive(Debug)]
pub struct StateStream<T> {
    tx: watch::Sender<T>,
}

impl<T> StateStream<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    pub fn value(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Returns whether the value changed (and subscribers were notified).
    pub fn set(&self, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == value {
                return false;
            }
            *current = value;
            true
        })
    }
}

impl<T> DataHolder<T> for StateStream<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn kind(&self) -> HolderKind {
        HolderKind::StateStream
    }

    fn current(&self) -> Option<T> {
        Some(self.value())
    }

    fn subscribe(&self) -> HolderStream<T> {
        WatchStream::new(self.tx.subscribe()).boxed()
    }

    fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
