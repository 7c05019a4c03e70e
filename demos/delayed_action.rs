use std::time::Duration;

use rensa::{Result, Sequence, Ticker};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut ticker = Ticker::new();

    let mut greeting = Sequence::named("greeting")
        .then(|| println!("Wait for it..."))
        .delay(Duration::from_secs(2))
        .then(|| println!("Hello, two seconds later!"))
        .start(&ticker.handle());

    // Stop the pump once the sequence reports in.
    let cancel = CancellationToken::new();
    let watcher = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            let outcome = greeting.join().await;
            cancel.cancel();
            outcome
        })
    };

    // The pump is the main loop, as it would be in a game.
    ticker.run(Duration::from_millis(50), cancel).await;

    let outcome = watcher.await??;
    println!("Outcome: {outcome:?}");
    Ok(())
}
