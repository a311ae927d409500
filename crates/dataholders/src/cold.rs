use std::{fmt, sync::Arc, time::Duration};

use futures::{stream, StreamExt};
use shared::domain::HolderKind;
use tracing::debug;

use crate::{timer::Timer, DataHolder, HolderStream};

/// Cold producer of a fixed, finite sequence.
///
/// Nothing runs until a subscription is polled. Each subscription waits
/// `delay` before every item and completes after the last one. Runs share no
/// progress, so concurrent subscriptions each see the full sequence.
pub struct ColdSequence<T> {
    items: Arc<[T]>,
    delay: Duration,
    timer: Arc<dyn Timer>,
}

impl<T> ColdSequence<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(items: impl Into<Arc<[T]>>, delay: Duration, timer: Arc<dyn Timer>) -> Self {
        Self {
            items: items.into(),
            delay,
            timer,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Clone for ColdSequence<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            delay: self.delay,
            timer: Arc::clone(&self.timer),
        }
    }
}

impl<T> fmt::Debug for ColdSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColdSequence")
            .field("len", &self.items.len())
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl<T> DataHolder<T> for ColdSequence<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn kind(&self) -> HolderKind {
        HolderKind::ColdSequence
    }

    fn current(&self) -> Option<T> {
        None
    }

    fn subscribe(&self) -> HolderStream<T> {
        let items = Arc::clone(&self.items);
        let timer = Arc::clone(&self.timer);
        let delay = self.delay;

        stream::unfold(0usize, move |index| {
            let items = Arc::clone(&items);
            let timer = Arc::clone(&timer);
            async move {
                if index == 0 {
                    debug!(items = items.len(), ?delay, "cold sequence run started");
                }
                let Some(item) = items.get(index).cloned() else {
                    debug!(items = index, "cold sequence run completed");
                    return None;
                };
                timer.sleep(delay).await;
                Some((item, index + 1))
            }
        })
        .boxed()
    }

    /// Runs are not tracked; each subscription is independent.
    fn subscriber_count(&self) -> usize {
        0
    }
}

#[cfg(test)]
#[path = "tests/cold_tests.rs"]
mod tests;
