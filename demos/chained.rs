use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use rensa::{Result, Sequence, Ticker};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut ticker = Ticker::new();
    let loaded = Arc::new(AtomicBool::new(false));

    // Three independently built phases...
    let fade_in = Sequence::named("fade-in")
        .then(|| println!("fade in"))
        .delay(Duration::from_millis(300));

    let l = loaded.clone();
    let wait_assets = Sequence::named("wait-assets")
        .then(|| println!("waiting for assets"))
        .wait_until(move || l.load(Ordering::Acquire))
        .then(|| println!("assets ready"));

    let fade_out = Sequence::named("fade-out")
        .delay(Duration::from_millis(300))
        .then(|| println!("fade out"));

    // ...flattened into one run.
    let mut scene = Sequence::named("scene")
        .chain(&fade_in)
        .chain(&wait_assets)
        .chain(&fade_out)
        .start(&ticker.handle());

    // Simulated asset loading, finishing on its own schedule.
    let l = loaded.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(700)).await;
        l.store(true, Ordering::Release);
    });

    let cancel = CancellationToken::new();
    let watcher = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            let outcome = scene.join().await;
            cancel.cancel();
            outcome
        })
    };

    ticker.run(Duration::from_millis(50), cancel).await;

    let outcome = watcher.await??;
    println!("Outcome: {outcome:?}");
    Ok(())
}
