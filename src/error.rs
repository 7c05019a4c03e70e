#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Driver task failed: {0}")]
    Driver(#[from] tokio::task::JoinError),
}
