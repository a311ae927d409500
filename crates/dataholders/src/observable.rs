use futures::{future, StreamExt};
use shared::domain::HolderKind;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::{DataHolder, HolderStream};

/// Last-value-wins holder that starts out empty unless seeded.
///
/// A `set` is delivered even when equal to the current value. A subscriber
/// that falls behind sees only the latest value, and subscribers that attach
/// later receive it first.
#[derive(Debug)]
pub struct ObservableValue<T> {
    tx: watch::Sender<Option<T>>,
}

impl<T> ObservableValue<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    pub fn with_value(value: T) -> Self {
        let (tx, _) = watch::channel(Some(value));
        Self { tx }
    }

    pub fn set(&self, value: T) {
        self.tx.send_replace(Some(value));
    }
}

impl<T> Default for ObservableValue<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DataHolder<T> for ObservableValue<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn kind(&self) -> HolderKind {
        HolderKind::ObservableValue
    }

    fn current(&self) -> Option<T> {
        self.tx.borrow().clone()
    }

    fn subscribe(&self) -> HolderStream<T> {
        WatchStream::new(self.tx.subscribe())
            .filter_map(future::ready)
            .boxed()
    }

    fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[cfg(test)]
#[path = "tests/observable_tests.rs"]
mod tests;
