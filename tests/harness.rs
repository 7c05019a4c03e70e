#![cfg(feature = "test-harness")]

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use rensa::{Outcome, Sequence, testing::TestTicker};

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let c = count.clone();
    (count, move || {
        c.fetch_add(1, Ordering::SeqCst);
    })
}

#[tokio::test(start_paused = true)]
async fn test_ticker_drives_a_sequence_to_completion() {
    let mut ticker = TestTicker::new();
    let (first, inc_first) = counter();
    let (second, inc_second) = counter();

    let mut handle = Sequence::new()
        .then(inc_first)
        .delay(Duration::from_secs(3))
        .then(inc_second)
        .start(&ticker.handle());

    ticker.settle().await;
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 0);

    ticker.tick_many(3, Duration::from_secs(1)).await;
    assert_eq!(second.load(Ordering::SeqCst), 1);
    assert_eq!(ticker.now(), Duration::from_secs(3));
    assert_eq!(ticker.ticks(), 3);
    assert_eq!(handle.join().await.unwrap(), Outcome::Completed);
}

#[tokio::test(start_paused = true)]
async fn test_tick_observes_exactly_one_boundary() {
    let mut ticker = TestTicker::new();
    let (count, inc) = counter();

    let mut handle = Sequence::new()
        .wait_next_tick()
        .then(inc)
        .start(&ticker.handle());

    ticker.settle().await;
    assert_eq!(count.load(Ordering::SeqCst), 0);

    ticker.tick(Duration::from_millis(16)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(handle.join().await.unwrap(), Outcome::Completed);
}
