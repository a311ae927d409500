use futures::{future, StreamExt};
use shared::domain::HolderKind;
use tokio::sync::broadcast;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use tracing::warn;

use crate::{DataHolder, HolderStream};

/// Multicast stream without replay.
///
/// Only subscribers attached at the time of `emit` see the value; with no
/// subscriber attached the value is discarded.
#[derive(Debug)]
pub struct EventStream<T> {
    tx: broadcast::Sender<T>,
}

impl<T> EventStream<T>
where
    T: Clone + Send + 'static,
{
    /// `capacity` bounds how far a slow subscriber may fall behind before it
    /// starts skipping events.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Returns the number of subscribers the value was delivered to.
    pub fn emit(&self, value: T) -> usize {
        // No receivers is the expected "nobody listening" case, not a failure.
        self.tx.send(value).unwrap_or(0)
    }
}

impl<T> DataHolder<T> for EventStream<T>
where
    T: Clone + Send + 'static,
{
    fn kind(&self) -> HolderKind {
        HolderKind::EventStream
    }

    fn current(&self) -> Option<T> {
        None
    }

    fn subscribe(&self) -> HolderStream<T> {
        BroadcastStream::new(self.tx.subscribe())
            .filter_map(|item| {
                future::ready(match item {
                    Ok(value) => Some(value),
                    Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                        warn!(skipped, "event stream subscriber lagged; skipped events");
                        None
                    }
                })
            })
            .boxed()
    }

    fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[cfg(test)]
#[path = "tests/event_tests.rs"]
mod tests;
