use super::*;
use futures::FutureExt;

#[test]
fn has_initial_value_immediately() {
    let state = StateStream::new("Hello World!".to_string());
    assert_eq!(state.value(), "Hello World!");
    assert_eq!(state.current(), Some("Hello World!".to_string()));

    let mut stream = state.subscribe();
    assert_eq!(
        stream.next().now_or_never(),
        Some(Some("Hello World!".to_string()))
    );
}

#[test]
fn equal_update_is_conflated() {
    let state = StateStream::new(1);
    let mut stream = state.subscribe();
    assert_eq!(stream.next().now_or_never(), Some(Some(1)));

    assert!(!state.set(1));
    assert!(stream.next().now_or_never().is_none());

    assert!(state.set(2));
    assert_eq!(stream.next().now_or_never(), Some(Some(2)));
}

#[test]
fn resubscribe_replays_last_value() {
    let state = StateStream::new("initial".to_string());
    {
        let _stream = state.subscribe();
        state.set("updated".to_string());
    }
    assert_eq!(state.subscriber_count(), 0);

    let mut stream = state.subscribe();
    assert_eq!(
        stream.next().now_or_never(),
        Some(Some("updated".to_string()))
    );
}

#[test]
fn subscriber_only_sees_latest_of_rapid_updates() {
    let state = StateStream::new(0);
    let mut stream = state.subscribe();
    assert_eq!(stream.next().now_or_never(), Some(Some(0)));

    state.set(1);
    state.set(2);
    state.set(3);
    assert_eq!(stream.next().now_or_never(), Some(Some(3)));
    assert!(stream.next().now_or_never().is_none());
}
