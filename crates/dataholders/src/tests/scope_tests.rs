use super::*;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

fn pending_task(dropped: &Arc<AtomicBool>) -> impl Future<Output = ()> + Send + 'static {
    let flag = DropFlag(Arc::clone(dropped));
    async move {
        let _flag = flag;
        std::future::pending::<()>().await;
    }
}

#[tokio::test]
async fn finished_tasks_are_reaped() {
    let mut scope = TaskScope::new("test");
    let (tx, rx) = tokio::sync::oneshot::channel();
    scope.spawn(async move {
        let _ = tx.send(());
    });

    rx.await.expect("task ran");
    tokio::task::yield_now().await;
    assert!(scope.is_empty());
}

#[tokio::test]
async fn shutdown_raises_close_signal_and_waits_for_tasks() {
    let mut scope = TaskScope::new("test");
    let dropped = Arc::new(AtomicBool::new(false));
    let finished = Arc::new(AtomicBool::new(false));
    let mut signal = scope.close_signal();
    let flag = DropFlag(Arc::clone(&dropped));
    let done = Arc::clone(&finished);
    scope.spawn(async move {
        let _flag = flag;
        signal.closed().await;
        done.store(true, Ordering::SeqCst);
    });
    tokio::task::yield_now().await;
    assert_eq!(scope.len(), 1);

    scope.shutdown().await;
    assert!(finished.load(Ordering::SeqCst));
    assert!(dropped.load(Ordering::SeqCst));
    assert!(scope.is_empty());
}

#[tokio::test]
async fn unpolled_task_finishes_its_ready_work_on_shutdown() {
    let mut scope = TaskScope::new("test");
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let (seen_tx, seen_rx) = std::sync::mpsc::channel();
    let mut signal = scope.close_signal();
    scope.spawn(async move {
        loop {
            tokio::select! {
                biased;
                value = rx.recv() => match value {
                    Some(value) => {
                        let _ = seen_tx.send(value);
                    }
                    None => break,
                },
                _ = signal.closed() => break,
            }
        }
    });
    tx.send(1).expect("receiver alive");
    tx.send(2).expect("receiver alive");

    scope.shutdown().await;
    assert_eq!(seen_rx.try_iter().collect::<Vec<_>>(), [1, 2]);
}

#[tokio::test]
async fn dropping_the_scope_aborts_its_tasks() {
    let scope_dropped = Arc::new(AtomicBool::new(false));
    {
        let mut scope = TaskScope::new("test");
        scope.spawn(pending_task(&scope_dropped));
        tokio::task::yield_now().await;
    }

    for _ in 0..16 {
        if scope_dropped.load(Ordering::SeqCst) {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert!(scope_dropped.load(Ordering::SeqCst));
}
