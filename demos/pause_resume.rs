use std::time::Duration;

use rensa::{Result, Sequence, Ticker};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut ticker = Ticker::new();

    let mut countdown = Sequence::named("countdown");
    for n in (1..=3).rev() {
        countdown = countdown
            .then(move || println!("{n}..."))
            .delay(Duration::from_millis(400));
    }
    let mut handle = countdown
        .then(|| println!("Lift off!"))
        .start(&ticker.handle());

    let cancel = CancellationToken::new();
    let pump = {
        let cancel = cancel.clone();
        tokio::spawn(async move { ticker.run(Duration::from_millis(50), cancel).await })
    };

    // Pausing holds the countdown at its next step; the step in flight
    // still finishes on its own.
    tokio::time::sleep(Duration::from_millis(600)).await;
    handle.pause();
    println!("(paused for a second)");
    tokio::time::sleep(Duration::from_secs(1)).await;
    handle.resume();

    let outcome = handle.join().await?;
    println!("Outcome: {outcome:?}");

    cancel.cancel();
    pump.await?;
    Ok(())
}
