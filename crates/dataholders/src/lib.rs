//! Reactive data holders and the screen wiring around them.
//!
//! Four holder kinds share one capability interface, [`DataHolder`]:
//! - [`ObservableValue`]: last value wins, may be empty, replays to late subscribers.
//! - [`StateStream`]: always holds a value, replays it, ignores equal updates.
//! - [`EventStream`]: multicast, no replay; emissions with no subscriber are lost.
//! - [`ColdSequence`]: inert until subscribed, each subscription is an independent run.
//!
//! [`ValueStore`] owns one of each and outlives any [`Presenter`] attached to it.

use futures::stream::BoxStream;
use shared::domain::HolderKind;

mod cold;
mod config;
mod event;
mod observable;
pub mod presenter;
mod scope;
mod state;
mod store;
mod timer;

pub use cold::ColdSequence;
pub use config::StoreConfig;
pub use event::EventStream;
pub use observable::ObservableValue;
pub use presenter::{Presenter, SubscriptionState, UiSurface};
pub use scope::{CloseSignal, TaskScope};
pub use state::StateStream;
pub use store::{StoreSnapshot, ValueStore};
pub use timer::{Timer, TokioTimer};

pub type HolderStream<T> = BoxStream<'static, T>;

pub trait DataHolder<T> {
    fn kind(&self) -> HolderKind;

    /// The value a new subscriber would be handed immediately, if any.
    fn current(&self) -> Option<T>;

    /// Registers a subscription. The receiver is attached before this returns,
    /// so every emission made afterwards is observed by the returned stream.
    fn subscribe(&self) -> HolderStream<T>;

    fn subscriber_count(&self) -> usize;
}
